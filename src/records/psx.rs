use glam::{I16Vec3, IVec3};
use crate::{model::{Light, Model, ObjectTexture, ObjectTextureVertex, RoomStaticMesh, SpriteTexture, TileAndFlag}, Readable};

pub(crate) const NUM_TEXTILES: usize = 13;
pub(crate) const NUM_CLUTS: usize = 1024;

#[derive(Readable, Clone, Copy)]
pub(crate) struct PsxLight {
	pub pos: IVec3,
	pub intensity: u16,
	#[skip_2]
	pub fade: u32,
}

impl From<PsxLight> for Light {
	fn from(PsxLight { pos, intensity, fade }: PsxLight) -> Self {
		Light { pos, intensity: intensity as u32, fade, ..Default::default() }
	}
}

/// Two bytes longer than the PC record; the padding is taken to be at the end.
#[derive(Readable, Clone, Copy)]
#[skip_after(2)]
pub(crate) struct PsxRoomStaticMesh {
	pub pos: IVec3,
	pub rotation: u16,
	pub intensity: u16,
	pub mesh_id: u16,
}

impl From<PsxRoomStaticMesh> for RoomStaticMesh {
	fn from(PsxRoomStaticMesh { pos, rotation, intensity, mesh_id }: PsxRoomStaticMesh) -> Self {
		RoomStaticMesh { pos, rotation, colour: intensity, mesh_id }
	}
}

/// PC model plus two bytes of trailing padding. TR5 shares the shape.
#[derive(Readable, Clone, Copy)]
#[skip_after(2)]
pub(crate) struct PaddedModel(pub Model);

#[derive(Readable, Clone, Copy)]
pub(crate) struct PsxObjectTexture {
	pub x0: u8,
	pub y0: u8,
	pub clut: u16,
	pub x1: u8,
	pub y1: u8,
	pub tile: u16,
	pub x2: u8,
	pub y2: u8,
	#[skip_2]
	pub x3: u8,
	pub y3: u8,
	pub attribute: u16,
}

impl PsxObjectTexture {
	/// `tile` is the reindexed 16-bit tile. Corners 2 and 3 are stored in the opposite winding.
	pub fn into_object_texture(self, tile: u16) -> ObjectTexture {
		let vertex = |x, y| ObjectTextureVertex { x_coordinate: 0, x_pixel: x, y_coordinate: 0, y_pixel: y };
		ObjectTexture {
			attribute: self.attribute,
			tile_and_flag: TileAndFlag(tile),
			vertices: [
				vertex(self.x0, self.y0),
				vertex(self.x1, self.y1),
				vertex(self.x3, self.y3),
				vertex(self.x2, self.y2),
			],
			..Default::default()
		}
	}
}

#[derive(Readable, Clone, Copy)]
pub(crate) struct PsxSpriteTexture {
	pub left: i16,
	pub top: i16,
	pub right: i16,
	pub bottom: i16,
	pub clut: u16,
	pub tile: u16,
	pub u0: u8,
	pub v0: u8,
	pub u1: u8,
	pub v1: u8,
}

impl PsxSpriteTexture {
	pub fn into_sprite_texture(self, tile: u16) -> SpriteTexture {
		SpriteTexture {
			tile,
			x: self.u0,
			y: self.v0,
			width: 256,
			height: 256,
			left: self.left,
			top: self.top,
			right: self.right,
			bottom: self.bottom,
		}
	}
}

/// Mesh vertex and normal: xyz plus an unused w.
#[derive(Readable, Clone, Copy)]
#[skip_after(2)]
pub(crate) struct PsxVector {
	pub xyz: I16Vec3,
}

impl From<PsxVector> for I16Vec3 {
	fn from(vector: PsxVector) -> Self {
		vector.xyz
	}
}
