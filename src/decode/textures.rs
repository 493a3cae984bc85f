use crate::{
	error::Result,
	model::{ObjectTexture, SpriteSequence, SpriteTexture, NUM_PIXELS, PALETTE_SIZE},
	plan::{LevelDataFormat, ObjectTextureFormat, TextileFormat},
	records::{psx::{self, PsxObjectTexture, PsxSpriteTexture}, tr4::{Tr4ObjectTexture, Tr5ObjectTexture}, LegacyObjectTexture},
};
use super::{widen, DecodeContext};

impl DecodeContext {
	pub(super) fn read_palette(&mut self, palette16: bool) -> Result<()> {
		self.level.palette = self.cursor.read_boxed_slice(PALETTE_SIZE)?;
		if palette16 {
			self.level.palette16 = self.cursor.read_boxed_slice(PALETTE_SIZE)?;
		}
		Ok(())
	}

	pub(super) fn read_textiles(&mut self, format: TextileFormat) -> Result<()> {
		match format {
			TextileFormat::Psx => {
				self.cursor.skip(8)?;
				let offset = self.cursor.read::<u32>()?;
				self.cursor.seek(offset as u64 + 8)?;
				self.level.textile4 = self.cursor.read_boxed_slice(psx::NUM_TEXTILES)?;
				self.level.cluts = self.cursor.read_boxed_slice(psx::NUM_CLUTS)?;
				self.cursor.skip(4)?;
				log::debug!("{} 4-bit textiles, {} cluts", self.level.textile4.len(), self.level.cluts.len());
			},
			TextileFormat::Paletted { textile16 } => {
				let count = self.cursor.read::<u32>()?;
				self.level.num_textiles = count;
				self.level.textile8 = self.cursor.read_boxed_slice(count as usize)?;
				if textile16 {
					self.level.textile16 = self.cursor.read_boxed_slice(count as usize)?.into_vec();
				}
				log::debug!("{count} textiles");
			},
			TextileFormat::Compressed { level_data } => {
				let [room, object, bump] = self.cursor.read::<[u16; 3]>()?;
				let count = room as u32 + object as u32 + bump as u32;
				self.level.num_textiles = count;
				self.level.textile32 = self.cursor.read_compressed()?.read_boxed_slice(count as usize)?;
				self.level.textile16 = self.cursor.read_compressed()?.read_boxed_slice(count as usize)?.into_vec();
				let misc = self.cursor.read_compressed()?;
				log::debug!(
					"{count} textiles ({room} room, {object} object, {bump} bump), {} misc",
					misc.len() / (NUM_PIXELS as u64 * 4),
				);
				match level_data {
					LevelDataFormat::Inline => {
						self.level.lara_type = Some(self.cursor.read()?);
						self.level.weather_type = Some(self.cursor.read()?);
						self.cursor.skip(28)?;
						//uncompressed and compressed sizes of the level data that follows
						self.cursor.skip(8)?;
					},
					LevelDataFormat::Compressed => {
						let level_data = self.cursor.read_compressed()?;
						log::debug!("continuing in {} bytes of level data", level_data.len());
						self.cursor = level_data;
					},
				}
			},
		}
		Ok(())
	}

	pub(super) fn read_object_textures(&mut self, format: ObjectTextureFormat) -> Result<()> {
		let DecodeContext { cursor, reindexer, level, .. } = self;
		let object_textures: Box<[ObjectTexture]> = match format {
			ObjectTextureFormat::Pc => widen(cursor.read_list::<LegacyObjectTexture, u32>()?),
			ObjectTextureFormat::Tr4 => widen(cursor.read_list::<Tr4ObjectTexture, u32>()?),
			ObjectTextureFormat::Tr5 => cursor
				.read_list::<Tr5ObjectTexture, u32>()?
				.iter()
				.map(|&Tr5ObjectTexture(texture)| texture.into())
				.collect(),
			ObjectTextureFormat::Psx => cursor
				.read_list::<PsxObjectTexture, u32>()?
				.iter()
				.map(|texture| {
					let tile = reindexer.get_or_generate(texture.tile, texture.clut, &level.textile4, &level.cluts, &mut level.textile16);
					texture.into_object_texture(tile)
				})
				.collect(),
		};
		log::debug!("{} object textures", object_textures.len());
		level.object_textures = object_textures;
		Ok(())
	}

	pub(super) fn read_sprites(&mut self, psx: bool, tag_len: u64) -> Result<()> {
		let DecodeContext { cursor, reindexer, level, .. } = self;
		cursor.skip(tag_len)?;
		level.sprite_textures = if psx {
			cursor
				.read_list::<PsxSpriteTexture, u32>()?
				.iter()
				.map(|texture| {
					let tile = reindexer.get_or_generate(texture.tile, texture.clut, &level.textile4, &level.cluts, &mut level.textile16);
					texture.into_sprite_texture(tile)
				})
				.collect()
		} else {
			cursor.read_list::<SpriteTexture, u32>()?
		};
		level.sprite_sequences = cursor.read_list::<SpriteSequence, u32>()?;
		log::debug!("{} sprite textures, {} sequences", level.sprite_textures.len(), level.sprite_sequences.len());
		Ok(())
	}

	pub(super) fn read_animated_textures(&mut self, tail_len: u64) -> Result<()> {
		let len = self.skip_list(2)?;
		self.cursor.skip(tail_len)?;
		log::debug!("{len} animated texture words");
		Ok(())
	}
}
