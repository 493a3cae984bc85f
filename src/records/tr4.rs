use glam::{IVec3, Vec3};
use crate::{model::{Colour, Colour4, Entity, Light, ObjectTexture, ObjectTextureVertex, SpotLight, TileAndFlag}, Readable};

pub(crate) const ANIMATION_SIZE: u64 = 40;
pub(crate) const FLYBY_CAMERA_SIZE: u64 = 40;

#[derive(Readable, Clone, Copy)]
pub(crate) struct Tr4Light {
	pub pos: IVec3,
	pub colour: Colour,
	pub light_type: u8,
	#[skip_1]
	pub intensity: u8,
	pub hotspot: f32,
	pub falloff: f32,
	pub length: f32,
	pub cutoff: f32,
	pub direction: Vec3,
}

impl From<Tr4Light> for Light {
	fn from(light: Tr4Light) -> Self {
		let Colour { r, g, b } = light.colour;
		Light {
			pos: light.pos,
			colour: Colour4 { r, g, b, unused: 0 },
			intensity: light.intensity as u32,
			fade: 0,
			spot: Some(SpotLight {
				light_type: light.light_type,
				hotspot: light.hotspot,
				falloff: light.falloff,
				length: light.length,
				cutoff: light.cutoff,
				direction: light.direction,
			}),
		}
	}
}

#[derive(Readable, Clone, Copy)]
pub(crate) struct Tr4ObjectTexture {
	pub attribute: u16,
	pub tile_and_flag: TileAndFlag,
	pub new_flags: u16,
	pub vertices: [ObjectTextureVertex; 4],
	/// Skips the unscaled u/v
	#[skip_8]
	pub width: u32,
	pub height: u32,
}

impl From<Tr4ObjectTexture> for ObjectTexture {
	fn from(texture: Tr4ObjectTexture) -> Self {
		ObjectTexture {
			attribute: texture.attribute,
			tile_and_flag: TileAndFlag(texture.tile_and_flag.0 & 0x7fff),
			vertices: texture.vertices,
			new_flags: texture.new_flags,
			width: texture.width,
			height: texture.height,
		}
	}
}

#[derive(Readable, Clone, Copy)]
#[skip_after(2)]
pub(crate) struct Tr5ObjectTexture(pub Tr4ObjectTexture);

#[derive(Readable, Clone, Copy)]
pub(crate) struct AiObject {
	pub type_id: u16,
	pub room: u16,
	pub pos: IVec3,
	pub ocb: i16,
	pub flags: u16,
	pub angle: i32,
}

impl From<AiObject> for Entity {
	fn from(ai: AiObject) -> Self {
		Entity {
			type_id: ai.type_id as i16,
			room: ai.room as i16,
			pos: ai.pos,
			angle: ai.angle as i16,
			intensity1: 0,
			intensity2: ai.ocb,
			flags: ai.flags,
		}
	}
}
