//! On-disk record shapes that differ from the common model, with their widening conversions.
//! Records the model stores verbatim live in [`crate::model`].

pub(crate) mod psx;
pub(crate) mod tr1;
pub(crate) mod tr4;
pub(crate) mod tr5;

use glam::IVec3;
use crate::{model::{Colour4, Face, FaceEffects, Light, ObjectTexture, ObjectTextureVertex, RoomInfo, TextureDetails, TileAndFlag}, Readable};

pub(crate) const BOX_SIZE: u64 = 8;
pub(crate) const ZONE_WORDS_PER_BOX: u64 = 10;
pub(crate) const CAMERA_SIZE: u64 = 16;
pub(crate) const SOUND_SOURCE_SIZE: u64 = 16;
pub(crate) const STATE_CHANGE_SIZE: u64 = 6;
pub(crate) const ANIM_DISPATCH_SIZE: u64 = 8;
pub(crate) const CINEMATIC_FRAME_SIZE: u64 = 16;
pub(crate) const SOUND_DETAILS_SIZE: u64 = 8;
pub(crate) const LIGHT_MAP_SIZE: u64 = 32 * 256;

/// Legacy rooms store only the horizontal position and the vertical extent.
#[derive(Readable, Clone, Copy)]
pub(crate) struct LegacyRoomInfo {
	pub x: i32,
	pub z: i32,
	pub y_bottom: i32,
	pub y_top: i32,
}

impl From<LegacyRoomInfo> for RoomInfo {
	fn from(LegacyRoomInfo { x, z, y_bottom, y_top }: LegacyRoomInfo) -> Self {
		RoomInfo { x, y: 0, z, y_bottom, y_top }
	}
}

/// Face without effects, used by rooms before TR5 and meshes before TR4.
#[derive(Readable, Clone, Copy)]
pub(crate) struct LegacyFace<const N: usize> {
	pub vertex_indices: [u16; N],
	pub texture: TextureDetails,
}

impl<const N: usize> From<LegacyFace<N>> for Face<N> {
	fn from(LegacyFace { vertex_indices, texture }: LegacyFace<N>) -> Self {
		Face { vertex_indices, texture, effects: FaceEffects(0) }
	}
}

/// TR2 and TR3 room light.
#[derive(Readable, Clone, Copy)]
pub(crate) struct ColouredLight {
	pub pos: IVec3,
	pub colour: Colour4,
	pub intensity: u32,
	pub fade: u32,
}

impl From<ColouredLight> for Light {
	fn from(ColouredLight { pos, colour, intensity, fade }: ColouredLight) -> Self {
		Light { pos, colour, intensity, fade, spot: None }
	}
}

/// PC object texture up to TR3.
#[derive(Readable, Clone, Copy)]
pub(crate) struct LegacyObjectTexture {
	pub attribute: u16,
	pub tile_and_flag: TileAndFlag,
	pub vertices: [ObjectTextureVertex; 4],
}

impl From<LegacyObjectTexture> for ObjectTexture {
	fn from(LegacyObjectTexture { attribute, tile_and_flag, vertices }: LegacyObjectTexture) -> Self {
		ObjectTexture { attribute, tile_and_flag, vertices, ..Default::default() }
	}
}
