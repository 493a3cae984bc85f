use crate::{
	cursor::LevelCursor,
	error::Result,
	model::{Face, Light, Portal, Room, RoomSprite, RoomStaticMesh, RoomVertex, Sector},
	plan::{AmbientFormat, LegacyRoomFormat, LightFormat, RoomFormat, RoomStaticMeshFormat, VertexFormat},
	records::{
		psx::{PsxLight, PsxRoomStaticMesh},
		tr1::{Tr1Light, Tr1RoomStaticMesh, Tr1RoomVertex},
		tr4::Tr4Light,
		tr5::{Layer, Tr5RoomVertex, XelaHeader, LIGHT_SIZE, XELA},
		ColouredLight, LegacyFace, LegacyRoomInfo,
	},
};
use super::{widen, DecodeContext};

fn read_sectors(cursor: &mut LevelCursor, num_z: u16, num_x: u16) -> Result<Box<[Sector]>> {
	cursor.read_boxed_slice(num_z as usize * num_x as usize)
}

fn offset_faces<const N: usize>(faces: Box<[Face<N>]>, vertex_offset: u16) -> impl Iterator<Item = Face<N>> {
	faces.into_vec().into_iter().map(move |mut face| {
		for index in &mut face.vertex_indices {
			*index = index.wrapping_add(vertex_offset);
		}
		face
	})
}

impl DecodeContext {
	pub(super) fn read_rooms(&mut self, format: RoomFormat) -> Result<()> {
		let count = match format {
			RoomFormat::Xela => self.cursor.read::<u32>()? as usize,
			RoomFormat::Legacy(_) => self.cursor.read::<u16>()? as usize,
		};
		let mut rooms = Vec::with_capacity(self.cursor.capacity_for::<Room>(count));
		for _ in 0..count {
			rooms.push(match format {
				RoomFormat::Legacy(format) => read_legacy_room(&mut self.cursor, format)?,
				RoomFormat::Xela => read_xela_room(&mut self.cursor)?,
			});
		}
		log::debug!("{} rooms", rooms.len());
		self.level.rooms = rooms.into_boxed_slice();
		Ok(())
	}
}

fn read_legacy_room(cursor: &mut LevelCursor, format: LegacyRoomFormat) -> Result<Room> {
	let info = cursor.read::<LegacyRoomInfo>()?.into();
	let data_words = cursor.read::<u32>()?;
	if format.psx {
		cursor.skip(2)?;
	}
	let mut room = Room { info, ..Default::default() };
	if data_words > 0 {
		room.vertices = match format.vertex {
			VertexFormat::Tr1 => widen(cursor.read_list::<Tr1RoomVertex, u16>()?),
			VertexFormat::Tr2 => cursor.read_list::<RoomVertex, u16>()?,
		};
		room.rectangles = widen(cursor.read_list::<LegacyFace<4>, u16>()?);
		if format.psx {
			for rectangle in room.rectangles.iter_mut() {
				rectangle.vertex_indices.swap(2, 3);
			}
		}
		room.triangles = widen(cursor.read_list::<LegacyFace<3>, u16>()?);
		room.sprites = cursor.read_list::<RoomSprite, u16>()?;
	}
	room.portals = cursor.read_list::<Portal, u16>()?;
	room.num_z_sectors = cursor.read()?;
	room.num_x_sectors = cursor.read()?;
	room.sectors = read_sectors(cursor, room.num_z_sectors, room.num_x_sectors)?;
	match format.ambient {
		AmbientFormat::Intensity => room.ambient_intensity = cursor.read()?,
		AmbientFormat::Intensity2 { light_mode } => {
			room.ambient_intensity = cursor.read()?;
			room.ambient_intensity2 = cursor.read()?;
			if light_mode {
				room.light_mode = cursor.read()?;
			}
		},
		AmbientFormat::Colour => room.colour = cursor.read()?,
	}
	room.lights = match format.light {
		LightFormat::Tr1Pc => widen::<_, Light>(cursor.read_list::<Tr1Light, u16>()?),
		LightFormat::Tr1Psx => widen(cursor.read_list::<PsxLight, u16>()?),
		LightFormat::Coloured => widen(cursor.read_list::<ColouredLight, u16>()?),
		LightFormat::Tr4 => widen(cursor.read_list::<Tr4Light, u16>()?),
	};
	room.static_meshes = match format.static_mesh {
		RoomStaticMeshFormat::Tr1Pc => widen(cursor.read_list::<Tr1RoomStaticMesh, u16>()?),
		RoomStaticMeshFormat::Tr1Psx => widen(cursor.read_list::<PsxRoomStaticMesh, u16>()?),
		RoomStaticMeshFormat::Tr2 => cursor.read_list::<RoomStaticMesh, u16>()?,
	};
	room.alternate_room = cursor.read()?;
	room.flags = cursor.read()?;
	if format.extra_flags {
		room.water_scheme = cursor.read()?;
		room.reverb = cursor.read()?;
		room.alternate_group = cursor.read()?;
	}
	Ok(room)
}

/// TR5 rooms: a header of offsets, each category found by seeking relative to the header end.
fn read_xela_room(cursor: &mut LevelCursor) -> Result<Room> {
	let tag = cursor.read::<[u8; 4]>()?;
	if tag != XELA {
		log::warn!("room at {:#x} has tag {tag:?}", cursor.position() - 4);
	}
	let size = cursor.read::<u32>()?;
	let room_end = cursor.position() + size as u64;
	let header = cursor.read::<XelaHeader>()?;
	let data_start = cursor.position();
	cursor.skip(header.num_lights as u64 * LIGHT_SIZE)?;

	cursor.seek(data_start + header.start_sd_offset as u64)?;
	let sectors = read_sectors(cursor, header.num_z_sectors, header.num_x_sectors)?;
	let portals = cursor.read_list::<Portal, u16>()?;
	cursor.skip(2)?;

	cursor.seek(data_start + header.end_portal_offset as u64)?;
	let static_meshes = cursor.read_boxed_slice::<RoomStaticMesh>(header.num_static_meshes as usize)?;

	cursor.seek(data_start + header.layer_offset as u64)?;
	let layers = cursor.read_boxed_slice::<Layer>(header.num_layers as usize)?;

	cursor.seek(data_start + header.poly_offset as u64)?;
	let mut rectangles = Vec::new();
	let mut triangles = Vec::new();
	let mut vertex_offset = 0u16;
	for layer in layers.iter() {
		rectangles.extend(offset_faces(cursor.read_boxed_slice::<Face<4>>(layer.num_rectangles as usize)?, vertex_offset));
		triangles.extend(offset_faces(cursor.read_boxed_slice::<Face<3>>(layer.num_triangles as usize)?, vertex_offset));
		vertex_offset = vertex_offset.wrapping_add(layer.num_vertices as u16);
	}

	cursor.seek(data_start + header.vertices_offset as u64)?;
	let mut vertices = Vec::new();
	for layer in layers.iter() {
		let layer_vertices = cursor.read_boxed_slice::<Tr5RoomVertex>(layer.num_vertices as usize)?;
		vertices.extend(layer_vertices.iter().map(|&vertex| RoomVertex::from(vertex)));
	}

	cursor.seek(room_end)?;
	Ok(Room {
		info: header.info,
		vertices: vertices.into_boxed_slice(),
		rectangles: rectangles.into_boxed_slice(),
		triangles: triangles.into_boxed_slice(),
		portals,
		num_z_sectors: header.num_z_sectors,
		num_x_sectors: header.num_x_sectors,
		sectors,
		colour: header.colour,
		static_meshes,
		alternate_room: header.alternate_room,
		flags: header.flags,
		water_scheme: header.water_scheme as u8,
		reverb: header.reverb,
		alternate_group: header.alternate_group,
		..Default::default()
	})
}
