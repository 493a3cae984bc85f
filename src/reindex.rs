use std::collections::HashMap;
use crate::{
	model::NUM_PIXELS,
	textile::{rgba5551_to_argb1555, Clut, Textile16, Textile4},
};

/// Expands PSX 4-bit pages into 16-bit pages on demand, one per distinct (tile, clut) pair.
#[derive(Default)]
pub(crate) struct TextureReindexer {
	generated: HashMap<(u16, u16), u16>,
}

impl TextureReindexer {
	/// Returns the index into `textile16` of the page for `tile` viewed through `clut`,
	/// generating and appending it on first use.
	///
	/// A missing tile or clut reads as all zeroes, giving a transparent page.
	pub fn get_or_generate(
		&mut self,
		tile: u16,
		clut: u16,
		textile4: &[Textile4],
		cluts: &[Clut],
		textile16: &mut Vec<Textile16>,
	) -> u16 {
		*self.generated.entry((tile, clut)).or_insert_with(|| {
			let source = textile4.get(tile as usize);
			let colours = cluts.get(clut as usize).copied().unwrap_or_default().colours;
			if source.is_none() || (clut as usize) >= cluts.len() {
				log::warn!("texture refers to missing tile {tile} or clut {clut}");
			}
			let pixels = (0..NUM_PIXELS)
				.map(|index| {
					let palette_index = source.map_or(0, |source| source.index(index));
					rgba5551_to_argb1555(colours[palette_index as usize])
				})
				.collect();
			let index = textile16.len() as u16;
			textile16.push(Textile16 { pixels });
			log::trace!("generated textile16 {index} from tile {tile} with clut {clut}");
			index
		})
	}

	pub fn len(&self) -> usize {
		self.generated.len()
	}
}
