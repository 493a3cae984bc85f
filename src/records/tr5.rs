use glam::{I16Vec3, Vec3};
use nonmax::NonMaxU16;
use crate::{model::{RoomFlags, RoomInfo, RoomVertex}, Readable};

pub(crate) const XELA: [u8; 4] = *b"XELA";
pub(crate) const LIGHT_SIZE: u64 = 88;

/// The 208-byte header of a TR5 room. Offsets are relative to the end of the header.
#[derive(Readable, Clone, Copy)]
#[skip_after(24)]
pub(crate) struct XelaHeader {
	#[skip_8]
	pub start_sd_offset: u32,
	#[skip_4]
	pub end_portal_offset: u32,
	pub info: RoomInfo,
	pub num_z_sectors: u16,
	pub num_x_sectors: u16,
	pub colour: u32,
	pub num_lights: u16,
	pub num_static_meshes: u16,
	pub reverb: u8,
	pub alternate_group: u8,
	pub water_scheme: u16,
	#[skip(20)]
	pub alternate_room: Option<NonMaxU16>,
	pub flags: RoomFlags,
	#[skip(88)]
	pub num_layers: u32,
	pub layer_offset: u32,
	pub vertices_offset: u32,
	pub poly_offset: u32,
}

#[derive(Readable, Clone, Copy)]
#[skip_after(46)]
pub(crate) struct Layer {
	pub num_vertices: u32,
	#[skip_2]
	pub num_rectangles: u16,
	pub num_triangles: u16,
}

/// Float vertex with a normal (skipped) and a BGRA colour.
#[derive(Readable, Clone, Copy)]
pub(crate) struct Tr5RoomVertex {
	pub pos: Vec3,
	#[skip(12)]
	pub colour: u32,
}

impl From<Tr5RoomVertex> for RoomVertex {
	fn from(Tr5RoomVertex { pos, colour }: Tr5RoomVertex) -> Self {
		let r = (colour & 0xff_0000) >> 19;
		let g = (colour & 0xff00) >> 11;
		let b = (colour & 0xff) >> 3;
		RoomVertex {
			pos: I16Vec3::new(pos.x as i16, pos.y as i16, pos.z as i16),
			lighting: 0,
			attributes: 0,
			lighting2: (r << 10 | g << 5 | b) as i16,
		}
	}
}
