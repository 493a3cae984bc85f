//! 256x256 texture pages ("textiles") in their stored pixel formats, and conversion to RGBA.

use std::io::{Read, Result};
use crate::{model::{CLUT_SIZE, NUM_PIXELS}, Readable};

/// One texture page of `NUM_PIXELS` pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Textile<P> {
	pub pixels: Box<[P]>,
}

/// Palette indices
pub type Textile8 = Textile<u8>;
/// ARGB1555
pub type Textile16 = Textile<u16>;
/// BGRA as a little-endian u32, i.e. 0xAARRGGBB
pub type Textile32 = Textile<u32>;

macro_rules! impl_readable_textile {
	($pixel:ty) => {
		impl Readable for Textile<$pixel> {
			fn read<R: Read>(reader: &mut R) -> Result<Self> {
				const WIDTH: usize = std::mem::size_of::<$pixel>();
				let mut bytes = vec![0; NUM_PIXELS * WIDTH];
				reader.read_exact(&mut bytes)?;
				let pixels = bytes
					.chunks_exact(WIDTH)
					.map(|chunk| <$pixel>::from_le_bytes(chunk.try_into().unwrap_or_default()))
					.collect();
				Ok(Textile { pixels })
			}
		}
	};
}

impl_readable_textile!(u8);
impl_readable_textile!(u16);
impl_readable_textile!(u32);

impl<P: Copy + Default> Textile<P> {
	pub fn blank() -> Self {
		Textile { pixels: vec![P::default(); NUM_PIXELS].into_boxed_slice() }
	}
}

/// PSX 4-bit page: two pixels per byte, resolved through a [`Clut`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Textile4 {
	pub pixels: Box<[u8]>,
}

impl Readable for Textile4 {
	fn read<R: Read>(reader: &mut R) -> Result<Self> {
		let mut pixels = vec![0; NUM_PIXELS / 2];
		reader.read_exact(&mut pixels)?;
		Ok(Textile4 { pixels: pixels.into_boxed_slice() })
	}
}

impl Textile4 {
	/// Palette index of pixel `index` (row-major). Even pixels are in the low nibble.
	pub fn index(&self, index: usize) -> u8 {
		let byte = self.pixels[index / 2];
		if index % 2 == 0 { byte & 0xf } else { byte >> 4 }
	}
}

/// PSX colour lookup table, 16 colours in RGBA5551 (red in the low bits).
#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clut {
	pub colours: [u16; CLUT_SIZE],
}

/// RGBA5551 (red low) to ARGB1555 (blue low).
pub fn rgba5551_to_argb1555(colour: u16) -> u16 {
	let r = colour & 0x1f;
	let g = (colour >> 5) & 0x1f;
	let b = (colour >> 10) & 0x1f;
	let a = colour >> 15;
	a << 15 | r << 10 | g << 5 | b
}

/// ARGB1555 to packed 0xAABBGGRR, so that the little-endian bytes read R, G, B, A.
pub fn argb1555_to_rgba(pixel: u16) -> u32 {
	let a = if pixel & 0x8000 != 0 { 0xff } else { 0 };
	let r = ((pixel & 0x7c00) >> 7) as u32;
	let g = ((pixel & 0x03e0) >> 2) as u32;
	let b = ((pixel & 0x001f) << 3) as u32;
	a << 24 | b << 16 | g << 8 | r
}

/// 0xAARRGGBB to 0xAABBGGRR.
pub fn bgra_to_rgba(pixel: u32) -> u32 {
	(pixel & 0xff00_ff00) | (pixel & 0xff) << 16 | (pixel & 0xff_0000) >> 16
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;
	use super::*;

	#[test]
	fn swaps_red_and_blue() {
		assert_eq!(bgra_to_rgba(0x80_11_22_33), 0x80_33_22_11);
	}

	#[test]
	fn argb1555_expands_channels() {
		assert_eq!(argb1555_to_rgba(0xffff), 0xff_f8_f8_f8);
		assert_eq!(argb1555_to_rgba(0x7c00), 0x00_00_00_f8);
		assert_eq!(argb1555_to_rgba(0x801f), 0xff_f8_00_00);
	}

	#[test]
	fn clut_colour_moves_red_high() {
		// r = 1, g = 2, b = 3, a = 1
		let colour = 1 | 2 << 5 | 3 << 10 | 1 << 15;
		assert_eq!(rgba5551_to_argb1555(colour), 1 << 15 | 1 << 10 | 2 << 5 | 3);
	}

	#[test]
	fn nibbles_low_first() {
		let mut pixels = vec![0; NUM_PIXELS / 2];
		pixels[0] = 0xa5;
		let textile = Textile4 { pixels: pixels.into_boxed_slice() };
		assert_eq!(textile.index(0), 0x5);
		assert_eq!(textile.index(1), 0xa);
	}

	#[test]
	fn textile16_reads_little_endian() {
		let mut bytes = vec![0; NUM_PIXELS * 2];
		bytes[2] = 0x34;
		bytes[3] = 0x12;
		let textile = Textile16::read(&mut Cursor::new(bytes)).unwrap();
		assert_eq!(textile.pixels.len(), NUM_PIXELS);
		assert_eq!(textile.pixels[1], 0x1234);
	}
}
