use glam::{I16Vec3, IVec3};
use crate::{model::{Entity, Light, RoomStaticMesh, RoomVertex}, Readable};

pub(crate) const ANIMATION_SIZE: u64 = 32;
pub(crate) const BOX_SIZE: u64 = 20;
pub(crate) const ZONE_WORDS_PER_BOX: u64 = 6;

#[derive(Readable, Clone, Copy)]
pub(crate) struct Tr1RoomVertex {
	pub pos: I16Vec3,
	pub lighting: i16,
}

impl From<Tr1RoomVertex> for RoomVertex {
	fn from(Tr1RoomVertex { pos, lighting }: Tr1RoomVertex) -> Self {
		RoomVertex { pos, lighting, attributes: 0, lighting2: lighting }
	}
}

#[derive(Readable, Clone, Copy)]
pub(crate) struct Tr1Light {
	pub pos: IVec3,
	pub intensity: u16,
	pub fade: u32,
}

impl From<Tr1Light> for Light {
	fn from(Tr1Light { pos, intensity, fade }: Tr1Light) -> Self {
		Light { pos, intensity: intensity as u32, fade, ..Default::default() }
	}
}

#[derive(Readable, Clone, Copy)]
pub(crate) struct Tr1RoomStaticMesh {
	pub pos: IVec3,
	pub rotation: u16,
	pub intensity: u16,
	pub mesh_id: u16,
}

impl From<Tr1RoomStaticMesh> for RoomStaticMesh {
	fn from(Tr1RoomStaticMesh { pos, rotation, intensity, mesh_id }: Tr1RoomStaticMesh) -> Self {
		RoomStaticMesh { pos, rotation, colour: intensity, mesh_id }
	}
}

#[derive(Readable, Clone, Copy)]
pub(crate) struct Tr1Entity {
	pub type_id: i16,
	pub room: i16,
	pub pos: IVec3,
	pub angle: i16,
	pub intensity: i16,
	pub flags: u16,
}

impl From<Tr1Entity> for Entity {
	fn from(Tr1Entity { type_id, room, pos, angle, intensity, flags }: Tr1Entity) -> Self {
		Entity { type_id, room, pos, angle, intensity1: intensity, intensity2: intensity, flags }
	}
}
