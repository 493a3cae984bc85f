use crate::{
	error::Result,
	model::{Entity, Model, StaticMesh},
	plan::{BoxFormat, EntityFormat, ModelFormat, SoundMapFormat},
	records::{
		self, psx::PaddedModel, tr1::{self, Tr1Entity}, tr4::{self, AiObject},
		ANIM_DISPATCH_SIZE, CAMERA_SIZE, CINEMATIC_FRAME_SIZE, SOUND_DETAILS_SIZE, SOUND_SOURCE_SIZE, STATE_CHANGE_SIZE,
	},
};
use super::{widen, DecodeContext};

/// Demo data of this many bytes marks a TR4 level with the long sound map.
const TR4_LONG_SOUND_MAP_DEMO_LEN: u16 = 2048;

impl DecodeContext {
	pub(super) fn read_floor_data(&mut self) -> Result<()> {
		self.level.floor_data = self.cursor.read_list::<u16, u32>()?;
		log::debug!("{} floor data words", self.level.floor_data.len());
		Ok(())
	}

	pub(super) fn read_mesh_data(&mut self) -> Result<()> {
		self.level.mesh_data = self.cursor.read_list::<u16, u32>()?;
		self.level.mesh_pointers = self.cursor.read_list::<u32, u32>()?;
		log::debug!("{} mesh data words, {} mesh pointers", self.level.mesh_data.len(), self.level.mesh_pointers.len());
		Ok(())
	}

	pub(super) fn read_animations(&mut self, size: u64) -> Result<()> {
		let animations = self.skip_list(size)?;
		let state_changes = self.skip_list(STATE_CHANGE_SIZE)?;
		let dispatches = self.skip_list(ANIM_DISPATCH_SIZE)?;
		let commands = self.skip_list(2)?;
		log::debug!("skipped {animations} animations, {state_changes} state changes, {dispatches} dispatches, {commands} command words");
		Ok(())
	}

	pub(super) fn read_mesh_tree(&mut self) -> Result<()> {
		self.level.mesh_tree = self.cursor.read_list::<u32, u32>()?;
		Ok(())
	}

	pub(super) fn read_frames(&mut self) -> Result<()> {
		self.level.frames = self.cursor.read_list::<u16, u32>()?;
		log::debug!("{} frame words", self.level.frames.len());
		Ok(())
	}

	pub(super) fn read_models(&mut self, format: ModelFormat) -> Result<()> {
		self.level.models = match format {
			ModelFormat::Pc => self.cursor.read_list::<Model, u32>()?,
			ModelFormat::Padded => self
				.cursor
				.read_list::<PaddedModel, u32>()?
				.iter()
				.map(|&PaddedModel(model)| model)
				.collect(),
		};
		log::debug!("{} models", self.level.models.len());
		Ok(())
	}

	pub(super) fn read_static_meshes(&mut self) -> Result<()> {
		let static_meshes = self.cursor.read_list::<StaticMesh, u32>()?;
		for &mesh in static_meshes.iter() {
			self.level.static_meshes.entry(mesh.id).or_insert(mesh);
		}
		log::debug!("{} static meshes", static_meshes.len());
		Ok(())
	}

	pub(super) fn read_cameras(&mut self, flyby: bool) -> Result<()> {
		let cameras = self.skip_list(CAMERA_SIZE)?;
		if flyby {
			let flyby_cameras = self.skip_list(tr4::FLYBY_CAMERA_SIZE)?;
			log::debug!("skipped {flyby_cameras} flyby cameras");
		}
		log::debug!("skipped {cameras} cameras");
		Ok(())
	}

	pub(super) fn read_sound_sources(&mut self) -> Result<()> {
		let sound_sources = self.skip_list(SOUND_SOURCE_SIZE)?;
		log::debug!("skipped {sound_sources} sound sources");
		Ok(())
	}

	pub(super) fn read_boxes(&mut self, format: BoxFormat) -> Result<()> {
		let (box_size, zone_words) = match format {
			BoxFormat::Tr1 => (tr1::BOX_SIZE, tr1::ZONE_WORDS_PER_BOX),
			BoxFormat::Tr2 => (records::BOX_SIZE, records::ZONE_WORDS_PER_BOX),
		};
		let boxes = self.skip_list(box_size)?;
		let overlaps = self.skip_list(2)?;
		self.cursor.skip(boxes as u64 * zone_words * 2)?;
		log::debug!("skipped {boxes} boxes, {overlaps} overlaps");
		Ok(())
	}

	pub(super) fn read_entities(&mut self, format: EntityFormat) -> Result<()> {
		let entities: Box<[Entity]> = match format {
			EntityFormat::Tr1 => widen(self.cursor.read_list::<Tr1Entity, u32>()?),
			EntityFormat::Tr2 => self.cursor.read_list::<Entity, u32>()?,
		};
		log::debug!("{} entities", entities.len());
		self.level.entities.extend(entities.iter());
		Ok(())
	}

	/// AI objects become entities after the placed items.
	pub(super) fn read_ai_objects(&mut self) -> Result<()> {
		let ai_objects = self.cursor.read_list::<AiObject, u32>()?;
		log::debug!("{} AI objects", ai_objects.len());
		self.level.entities.extend(ai_objects.iter().map(|&ai| Entity::from(ai)));
		Ok(())
	}

	pub(super) fn read_cinematics(&mut self) -> Result<()> {
		let frames = self.cursor.read::<u16>()?;
		self.cursor.skip(frames as u64 * CINEMATIC_FRAME_SIZE)?;
		log::debug!("skipped {frames} cinematic frames");
		Ok(())
	}

	pub(super) fn read_sound_map(&mut self, format: SoundMapFormat) -> Result<()> {
		let demo_len = self.cursor.read::<u16>()?;
		self.cursor.skip(demo_len as u64)?;
		let sound_map_len: u64 = match format {
			SoundMapFormat::Tr1 => 256,
			SoundMapFormat::Tr2 => 370,
			SoundMapFormat::Tr4 if demo_len == TR4_LONG_SOUND_MAP_DEMO_LEN => 1024,
			SoundMapFormat::Tr4 => 370,
			SoundMapFormat::Tr5 => 450,
		};
		self.cursor.skip(sound_map_len * 2)?;
		let sound_details = self.skip_list(SOUND_DETAILS_SIZE)?;
		if format == SoundMapFormat::Tr1 {
			let sample_bytes = self.skip_list(1)?;
			log::debug!("skipped {sample_bytes} sample bytes");
		}
		log::debug!("skipped {demo_len} demo bytes, {sound_map_len} sound map entries, {sound_details} sound details");
		Ok(())
	}

	pub(super) fn read_sample_indices(&mut self) -> Result<()> {
		let sample_indices = self.skip_list(4)?;
		log::debug!("skipped {sample_indices} sample indices");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use crate::{cursor::LevelCursor, error::Error, format::{LevelFormat, LevelVersion, Platform}, level::Level, reindex::TextureReindexer};
	use super::*;

	fn context(bytes: Vec<u8>) -> DecodeContext {
		let format = LevelFormat::new(LevelVersion::Tomb1, Platform::Pc);
		DecodeContext {
			cursor: LevelCursor::new(bytes),
			format,
			reindexer: TextureReindexer::default(),
			level: Level::new(format),
		}
	}

	/// Box section with `num_boxes` boxes of `box_size` bytes, no overlaps and `zone_words` zone words.
	fn box_section(num_boxes: u32, box_size: usize, zone_words: usize) -> Vec<u8> {
		let mut bytes = num_boxes.to_le_bytes().to_vec();
		bytes.extend(vec![0; num_boxes as usize * box_size]);
		bytes.extend(0u32.to_le_bytes());
		bytes.extend(vec![0; zone_words * 2]);
		bytes
	}

	#[test]
	fn tomb1_zones_are_six_words_per_box() {
		let mut context = context(box_section(3, 20, 18));
		context.read_boxes(BoxFormat::Tr1).unwrap();
		assert_eq!(context.cursor.remaining(), 0);
	}

	#[test]
	fn later_zones_are_ten_words_per_box() {
		let mut context = context(box_section(3, 8, 30));
		context.read_boxes(BoxFormat::Tr2).unwrap();
		assert_eq!(context.cursor.remaining(), 0);
		let mut context = self::context(box_section(3, 8, 18));
		assert!(matches!(context.read_boxes(BoxFormat::Tr2), Err(Error::TruncatedInput { .. })));
	}

	#[test]
	fn tomb4_sound_map_length_follows_demo_data() {
		for (demo_len, map_len) in [(2048u16, 1024usize), (16, 370)] {
			let mut bytes = demo_len.to_le_bytes().to_vec();
			bytes.extend(vec![0; demo_len as usize + map_len * 2]);
			bytes.extend(0u32.to_le_bytes());
			let mut context = context(bytes);
			context.read_sound_map(SoundMapFormat::Tr4).unwrap();
			assert_eq!(context.cursor.remaining(), 0);
		}
	}

	#[test]
	fn ai_objects_append_as_entities() {
		let mut bytes = 1u32.to_le_bytes().to_vec();
		bytes.extend(7u16.to_le_bytes());
		bytes.extend(2u16.to_le_bytes());
		for value in [100i32, -200, 300] {
			bytes.extend(value.to_le_bytes());
		}
		bytes.extend(42i16.to_le_bytes());
		bytes.extend(0x3e00u16.to_le_bytes());
		bytes.extend(0x4000i32.to_le_bytes());
		let mut context = context(bytes);
		context.read_ai_objects().unwrap();
		let entity = context.level.entities[0];
		assert_eq!(entity.type_id, 7);
		assert_eq!(entity.room, 2);
		assert_eq!(entity.intensity1, 0);
		assert_eq!(entity.intensity2, 42);
		assert_eq!(entity.angle, 0x4000);
	}
}
