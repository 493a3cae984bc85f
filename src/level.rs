use std::collections::{BTreeMap, HashMap};
use crate::{
	format::{LevelFormat, LevelVersion, Platform},
	frame::{decode_frame, decode_mesh_tree, Frame},
	mesh::Mesh,
	model::{Colour, Colour4, Entity, MeshTreeNode, Model, ObjectTexture, Room, SpriteSequence, SpriteTexture, StaticMesh},
	textile::{argb1555_to_rgba, bgra_to_rgba, Clut, Textile16, Textile32, Textile4, Textile8},
};

/// Mesh shown for Lara's type id 0 in TR3.
pub const LARA_SKIN_TR3: i16 = 315;
/// Mesh shown for Lara's type id 0 after TR3.
pub const LARA_SKIN_POST_TR3: i16 = 8;

/// A decoded level. Cross references between records are indices and ids resolved through the accessors.
#[derive(Default)]
pub struct Level {
	pub(crate) format: LevelFormat,
	pub(crate) palette: Box<[Colour]>,
	pub(crate) palette16: Box<[Colour4]>,
	pub(crate) num_textiles: u32,
	pub(crate) textile4: Box<[Textile4]>,
	pub(crate) cluts: Box<[Clut]>,
	pub(crate) textile8: Box<[Textile8]>,
	pub(crate) textile16: Vec<Textile16>,
	pub(crate) textile32: Box<[Textile32]>,
	pub(crate) lara_type: Option<u16>,
	pub(crate) weather_type: Option<u16>,
	pub(crate) rooms: Box<[Room]>,
	pub(crate) floor_data: Box<[u16]>,
	pub(crate) mesh_data: Box<[u16]>,
	pub(crate) mesh_pointers: Box<[u32]>,
	pub(crate) meshes: HashMap<u32, Mesh>,
	pub(crate) mesh_tree: Box<[u32]>,
	pub(crate) frames: Box<[u16]>,
	pub(crate) models: Box<[Model]>,
	pub(crate) static_meshes: BTreeMap<u32, StaticMesh>,
	pub(crate) object_textures: Box<[ObjectTexture]>,
	pub(crate) sprite_textures: Box<[SpriteTexture]>,
	pub(crate) sprite_sequences: Box<[SpriteSequence]>,
	pub(crate) entities: Vec<Entity>,
}

impl Level {
	pub(crate) fn new(format: LevelFormat) -> Self {
		Level { format, ..Default::default() }
	}

	pub fn format(&self) -> LevelFormat {
		self.format
	}

	pub fn version(&self) -> LevelVersion {
		self.format.version
	}

	pub fn platform(&self) -> Platform {
		self.format.platform
	}

	//palettes

	pub fn palette_entry8(&self, index: usize) -> Option<Colour> {
		self.palette.get(index).copied()
	}

	pub fn palette_entry16(&self, index: usize) -> Option<Colour4> {
		self.palette16.get(index).copied()
	}

	/// The 16-bit entry if there is one, otherwise the converted 8-bit entry, otherwise black.
	pub fn palette_entry(&self, index: usize) -> Colour4 {
		self.palette_entry16(index)
			.or_else(|| self.palette_entry8(index).map(Colour4::from))
			.unwrap_or_default()
	}

	/// For coloured faces, which carry an index into each palette.
	pub fn palette_entry_pair(&self, index8: usize, index16: usize) -> Colour4 {
		self.palette_entry16(index16)
			.or_else(|| self.palette_entry8(index8).map(Colour4::from))
			.unwrap_or_default()
	}

	//textiles

	/// Number of pages as stored in the file. PSX levels count the pages generated while decoding.
	pub fn num_textiles(&self) -> u32 {
		self.num_textiles
	}

	/// Page `index` as RGBA pixels (0xAABBGGRR), from whichever of the 32, 16 or 8-bit pages exists.
	/// Palette index 0 of an 8-bit page is transparent.
	pub fn textile(&self, index: usize) -> Option<Vec<u32>> {
		if let Some(textile) = self.textile32.get(index) {
			Some(textile.pixels.iter().map(|&pixel| bgra_to_rgba(pixel)).collect())
		} else if let Some(textile) = self.textile16.get(index) {
			Some(textile.pixels.iter().map(|&pixel| argb1555_to_rgba(pixel)).collect())
		} else {
			let textile = self.textile8.get(index)?;
			let pixels = textile
				.pixels
				.iter()
				.map(|&entry| match entry {
					0 => 0,
					entry => {
						let Colour4 { r, g, b, .. } = self.palette_entry(entry as usize);
						0xff00_0000 | (b as u32) << 16 | (g as u32) << 8 | r as u32
					},
				})
				.collect();
			Some(pixels)
		}
	}

	pub fn textile4(&self, index: usize) -> Option<&Textile4> {
		self.textile4.get(index)
	}

	pub fn clut(&self, index: usize) -> Option<&Clut> {
		self.cluts.get(index)
	}

	pub fn textile8(&self, index: usize) -> Option<&Textile8> {
		self.textile8.get(index)
	}

	pub fn textile16(&self, index: usize) -> Option<&Textile16> {
		self.textile16.get(index)
	}

	pub fn textile32(&self, index: usize) -> Option<&Textile32> {
		self.textile32.get(index)
	}

	/// TR5 only
	pub fn lara_type(&self) -> Option<u16> {
		self.lara_type
	}

	/// TR5 only
	pub fn weather_type(&self) -> Option<u16> {
		self.weather_type
	}

	//rooms

	pub fn rooms(&self) -> &[Room] {
		&self.rooms
	}

	pub fn room(&self, index: usize) -> Option<&Room> {
		self.rooms.get(index)
	}

	pub fn floor_data(&self) -> &[u16] {
		&self.floor_data
	}

	pub fn floor_data_word(&self, index: usize) -> Option<u16> {
		self.floor_data.get(index).copied()
	}

	//objects

	pub fn models(&self) -> &[Model] {
		&self.models
	}

	pub fn model(&self, index: usize) -> Option<&Model> {
		self.models.get(index)
	}

	pub fn model_by_id(&self, type_id: u32) -> Option<&Model> {
		self.models.iter().find(|model| model.type_id == type_id)
	}

	pub fn static_meshes(&self) -> impl Iterator<Item = &StaticMesh> {
		self.static_meshes.values()
	}

	pub fn static_mesh(&self, id: u32) -> Option<&StaticMesh> {
		self.static_meshes.get(&id)
	}

	pub fn num_mesh_pointers(&self) -> usize {
		self.mesh_pointers.len()
	}

	pub fn mesh_data(&self) -> &[u16] {
		&self.mesh_data
	}

	/// Mesh through entry `index` of the pointer table. Entries sharing an offset share the mesh.
	pub fn mesh_by_pointer(&self, index: usize) -> Option<&Mesh> {
		self.mesh_at_offset(*self.mesh_pointers.get(index)?)
	}

	/// Mesh starting at byte `offset` of the mesh data.
	pub fn mesh_at_offset(&self, offset: u32) -> Option<&Mesh> {
		self.meshes.get(&offset)
	}

	/// Frame at word `offset` of the frame data. TR1 frames carry their own mesh count.
	pub fn frame(&self, offset: usize, mesh_count: u32) -> Option<Frame> {
		decode_frame(&self.frames, self.version(), offset, mesh_count)
	}

	/// `count` nodes from word `start` of the mesh tree; a model has `num_meshes - 1`.
	pub fn mesh_tree(&self, start: usize, count: usize) -> Option<Vec<MeshTreeNode>> {
		decode_mesh_tree(&self.mesh_tree, start, count)
	}

	pub fn object_textures(&self) -> &[ObjectTexture] {
		&self.object_textures
	}

	pub fn object_texture(&self, index: usize) -> Option<&ObjectTexture> {
		self.object_textures.get(index)
	}

	pub fn sprite_textures(&self) -> &[SpriteTexture] {
		&self.sprite_textures
	}

	pub fn sprite_texture(&self, index: usize) -> Option<&SpriteTexture> {
		self.sprite_textures.get(index)
	}

	pub fn sprite_sequences(&self) -> &[SpriteSequence] {
		&self.sprite_sequences
	}

	pub fn sprite_sequence_by_id(&self, sprite_id: i32) -> Option<&SpriteSequence> {
		self.sprite_sequences.iter().find(|sequence| sequence.sprite_id == sprite_id)
	}

	pub fn entities(&self) -> &[Entity] {
		&self.entities
	}

	pub fn entity(&self, index: usize) -> Option<&Entity> {
		self.entities.get(index)
	}

	pub fn find_first_entity_by_type(&self, type_id: i16) -> Option<&Entity> {
		self.entities.iter().find(|entity| entity.type_id == type_id)
	}

	/// Lara's entity has type 0 but her mesh comes from a skin model from TR3 on.
	pub fn mesh_from_type_id(&self, type_id: i16) -> i16 {
		match self.version() {
			_ if type_id != 0 => type_id,
			LevelVersion::Tomb1 | LevelVersion::Tomb2 => type_id,
			LevelVersion::Tomb3 => LARA_SKIN_TR3,
			LevelVersion::Tomb4 | LevelVersion::Tomb5 => LARA_SKIN_POST_TR3,
		}
	}
}
