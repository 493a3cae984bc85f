mod rooms;
mod textures;
mod world;

use crate::{
	cursor::LevelCursor,
	error::Result,
	format::{self, LevelFormat},
	level::Level,
	mesh,
	plan::{DecodePlan, Section},
	reindex::TextureReindexer,
};

/// State threaded through the section decoders of one level.
pub(crate) struct DecodeContext {
	/// The file, or for TR4 the decompressed level data once the textiles are read
	pub cursor: LevelCursor,
	pub format: LevelFormat,
	pub reindexer: TextureReindexer,
	pub level: Level,
}

pub(crate) fn decode(mut cursor: LevelCursor, file_name: &str) -> Result<Level> {
	let format = format::detect(&mut cursor, file_name)?;
	log::info!("{file_name}: {:?} {:?} level, {} bytes", format.version, format.platform, cursor.len());
	let plan = DecodePlan::new(format);
	let mut context = DecodeContext {
		cursor,
		format,
		reindexer: TextureReindexer::default(),
		level: Level::new(format),
	};
	for &section in &plan.sections {
		context.decode_section(section)?;
	}
	let DecodeContext { format, reindexer, mut level, .. } = context;
	if format.is_psx() {
		log::debug!("generated {} textiles from 4-bit pages", reindexer.len());
		level.num_textiles = level.textile16.len() as u32;
	}
	level.meshes = mesh::materialize(&level.mesh_data, &level.mesh_pointers, plan.mesh)?;
	Ok(level)
}

/// Converts a list of on-disk records into their model form.
fn widen<S, T: From<S>>(records: Box<[S]>) -> Box<[T]> {
	records.into_vec().into_iter().map(T::from).collect()
}

impl DecodeContext {
	fn decode_section(&mut self, section: Section) -> Result<()> {
		log::trace!("{section:?} at {:#x}", self.cursor.position());
		match section {
			Section::Palette { palette16 } => self.read_palette(palette16),
			Section::Textiles(format) => self.read_textiles(format),
			Section::Unused => self.cursor.skip(4),
			Section::Rooms(format) => self.read_rooms(format),
			Section::FloorData => self.read_floor_data(),
			Section::MeshData => self.read_mesh_data(),
			Section::Animations { size } => self.read_animations(size),
			Section::MeshTree => self.read_mesh_tree(),
			Section::Frames => self.read_frames(),
			Section::Models(format) => self.read_models(format),
			Section::StaticMeshes => self.read_static_meshes(),
			Section::ObjectTextures(format) => self.read_object_textures(format),
			Section::Sprites { psx, tag_len } => self.read_sprites(psx, tag_len),
			Section::Cameras { flyby } => self.read_cameras(flyby),
			Section::SoundSources => self.read_sound_sources(),
			Section::Boxes(format) => self.read_boxes(format),
			Section::AnimatedTextures { tail_len } => self.read_animated_textures(tail_len),
			Section::Entities(format) => self.read_entities(format),
			Section::AiObjects => self.read_ai_objects(),
			Section::LightMap => self.cursor.skip(crate::records::LIGHT_MAP_SIZE),
			Section::Cinematics => self.read_cinematics(),
			Section::SoundMap(format) => self.read_sound_map(format),
			Section::SampleIndices => self.read_sample_indices(),
		}
	}

	/// Skips a `u32`-counted list of `size`-byte records, returning the count.
	fn skip_list(&mut self, size: u64) -> Result<u32> {
		let len = self.cursor.read::<u32>()?;
		self.cursor.skip(len as u64 * size)?;
		Ok(len)
	}
}
