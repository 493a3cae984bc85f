//! Version-independent level records. Older formats are widened into these on load.

use bitfield::bitfield;
use glam::{I16Vec3, IVec3, Vec3};
use nonmax::{NonMaxU16, NonMaxU8};
use shared::MinMax;
use crate::Readable;

pub const PALETTE_SIZE: usize = 256;
pub const TEXTILE_SIZE: usize = 256;
pub const NUM_PIXELS: usize = TEXTILE_SIZE * TEXTILE_SIZE;
pub const CLUT_SIZE: usize = 16;

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colour {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colour4 {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub unused: u8,
}

impl From<Colour> for Colour4 {
	/// 8-bit palette channels are 6-bit; scale up to the 8-bit range of the 16-bit palette.
	fn from(Colour { r, g, b }: Colour) -> Self {
		Colour4 { r: r << 2, g: g << 2, b: b << 2, unused: 0 }
	}
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq)]
pub struct RoomInfo {
	/// World coords
	pub x: i32,
	pub y: i32,
	pub z: i32,
	pub y_bottom: i32,
	pub y_top: i32,
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoomVertex {
	/// Relative to Room
	pub pos: I16Vec3,
	pub lighting: i16,
	pub attributes: u16,
	/// Second lighting value. TR5 stores an RGB555 colour here.
	pub lighting2: i16,
}

bitfield! {
	#[derive(Readable, Clone, Copy, Default, PartialEq, Eq)]
	pub struct TextureDetails(u16);
	impl Debug;
	/// Index into object_textures
	pub texture_index, _: 14, 0;
	pub double_sided, _: 15;
	/// Index into the 8-bit palette, coloured faces
	pub palette_index, _: 7, 0;
	/// Index into the 16-bit palette, coloured faces
	pub palette16_index, _: 15, 8;
}

bitfield! {
	#[derive(Readable, Clone, Copy, Default, PartialEq, Eq)]
	pub struct FaceEffects(u16);
	impl Debug;
	pub additive, _: 0;
	pub shiny, _: 1;
	pub shine_strength, _: 7, 2;
}

/// A room or mesh polygon. Faces from formats without effects carry zero effects.
#[derive(Readable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face<const N: usize> {
	pub vertex_indices: [u16; N],
	pub texture: TextureDetails,
	pub effects: FaceEffects,
}

#[derive(Readable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomSprite {
	/// Index into Room.vertices
	pub vertex: u16,
	/// Index into sprite_textures
	pub texture: u16,
}

#[derive(Readable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portal {
	/// Index into rooms
	pub adjoining_room: u16,
	pub normal: I16Vec3,
	/// Relative to Room
	pub vertices: [I16Vec3; 4],
}

#[derive(Readable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sector {
	/// Index into floor_data
	pub floor_data_index: u16,
	pub box_index: u16,
	/// Index into rooms
	pub room_below: Option<NonMaxU8>,
	pub floor: i8,
	/// Index into rooms
	pub room_above: Option<NonMaxU8>,
	pub ceiling: i8,
}

/// Widened light. TR1 lights have no colour; TR4 lights keep their extra parameters in `spot`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Light {
	/// World coords
	pub pos: IVec3,
	pub colour: Colour4,
	pub intensity: u32,
	pub fade: u32,
	pub spot: Option<SpotLight>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpotLight {
	pub light_type: u8,
	pub hotspot: f32,
	pub falloff: f32,
	pub length: f32,
	pub cutoff: f32,
	pub direction: Vec3,
}

#[derive(Readable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomStaticMesh {
	/// World coords
	pub pos: IVec3,
	/// Units are 1/65536th of a rotation
	pub rotation: u16,
	pub colour: u16,
	/// Id into static_meshes
	#[skip_2]
	pub mesh_id: u16,
}

bitfield! {
	#[derive(Readable, Clone, Copy, Default, PartialEq, Eq)]
	pub struct RoomFlags(u16);
	impl Debug;
	pub water, _: 0;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Room {
	pub info: RoomInfo,
	pub vertices: Box<[RoomVertex]>,
	/// `vertex_indices` index into Room.vertices
	pub rectangles: Box<[Face<4>]>,
	/// `vertex_indices` index into Room.vertices
	pub triangles: Box<[Face<3>]>,
	pub sprites: Box<[RoomSprite]>,
	pub portals: Box<[Portal]>,
	pub num_z_sectors: u16,
	pub num_x_sectors: u16,
	/// `num_z_sectors * num_x_sectors`, x-major
	pub sectors: Box<[Sector]>,
	pub ambient_intensity: i16,
	pub ambient_intensity2: i16,
	pub light_mode: i16,
	/// TR4 and TR5 ambient colour
	pub colour: u32,
	pub lights: Box<[Light]>,
	pub static_meshes: Box<[RoomStaticMesh]>,
	/// Index into rooms
	pub alternate_room: Option<NonMaxU16>,
	pub flags: RoomFlags,
	pub water_scheme: u8,
	pub reverb: u8,
	pub alternate_group: u8,
}

#[derive(Readable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Model {
	pub type_id: u32,
	pub num_meshes: u16,
	/// Index into mesh_pointers
	pub starting_mesh: u16,
	/// Offset into mesh_tree, in u32s
	pub mesh_tree: u32,
	/// Byte offset into frames
	pub frame_offset: u32,
	/// Index into animations
	pub animation: Option<NonMaxU16>,
}

#[derive(Readable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundBox {
	pub x: MinMax<i16>,
	pub y: MinMax<i16>,
	pub z: MinMax<i16>,
}

#[derive(Readable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticMesh {
	pub id: u32,
	/// Index into mesh_pointers
	pub mesh: u16,
	pub visibility: BoundBox,
	pub collision: BoundBox,
	pub flags: u16,
}

bitfield! {
	#[derive(Readable, Clone, Copy, Default, PartialEq, Eq)]
	pub struct TileAndFlag(u16);
	impl Debug;
	/// Index into textile16
	pub tile, _: 14, 0;
	pub triangle, _: 15;
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjectTextureVertex {
	pub x_coordinate: u8,
	pub x_pixel: u8,
	pub y_coordinate: u8,
	pub y_pixel: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjectTexture {
	pub attribute: u16,
	pub tile_and_flag: TileAndFlag,
	pub vertices: [ObjectTextureVertex; 4],
	/// TR4 and TR5 only
	pub new_flags: u16,
	pub width: u32,
	pub height: u32,
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpriteTexture {
	/// Index into textile16
	pub tile: u16,
	pub x: u8,
	pub y: u8,
	pub width: u16,
	pub height: u16,
	pub left: i16,
	pub top: i16,
	pub right: i16,
	pub bottom: i16,
}

#[derive(Readable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSequence {
	pub sprite_id: i32,
	pub negative_length: i16,
	/// Index into sprite_textures
	pub offset: i16,
}

impl SpriteSequence {
	pub fn len(&self) -> usize {
		self.negative_length.unsigned_abs() as usize
	}

	pub fn is_empty(&self) -> bool {
		self.negative_length == 0
	}
}

/// Placed item. AI objects share this shape: their OCB lands in `intensity2`.
#[derive(Readable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
	pub type_id: i16,
	/// Index into rooms
	pub room: i16,
	/// World coords
	pub pos: IVec3,
	pub angle: i16,
	pub intensity1: i16,
	pub intensity2: i16,
	pub flags: u16,
}

bitfield! {
	#[derive(Clone, Copy, Default, PartialEq, Eq)]
	pub struct MeshTreeFlags(u32);
	impl Debug;
	pub pop, _: 0;
	pub push, _: 1;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshTreeNode {
	pub flags: MeshTreeFlags,
	/// Relative to parent
	pub offset: IVec3,
}
