extern crate self as tr_level;

pub mod error;
pub mod format;
pub mod frame;
pub mod level;
pub mod mesh;
pub mod model;
pub mod textile;
pub(crate) mod cursor;
pub(crate) mod decode;
pub(crate) mod impls;
pub(crate) mod plan;
pub(crate) mod records;
pub(crate) mod reindex;

use std::{fs, io::{Read, Result}, path::Path};
use num_traits::AsPrimitive;
use cursor::LevelCursor;
pub(crate) use tr_derive::Readable;

pub use error::Error;
pub use format::{LevelFormat, LevelVersion, Platform};
pub use level::Level;

pub(crate) trait Readable: Sized {
	fn read<R: Read>(reader: &mut R) -> Result<Self>;
}

pub(crate) fn read_boxed_slice<R: Read, T: Readable>(reader: &mut R, len: usize) -> Result<Box<[T]>> {
	let mut vec = Vec::with_capacity(len);
	for _ in 0..len {
		vec.push(T::read(reader)?);
	}
	Ok(vec.into_boxed_slice())
}

pub(crate) fn read_list<R: Read, T: Readable, L: Readable + AsPrimitive<usize>>(reader: &mut R) -> Result<Box<[T]>> {
	let len = L::read(reader)?.as_();
	read_boxed_slice(reader, len)
}

pub(crate) fn skip<R: Read>(reader: &mut R, num: usize) -> Result<()> {
	let copied = std::io::copy(&mut reader.take(num as u64), &mut std::io::sink())?;
	if copied < num as u64 {
		return Err(std::io::ErrorKind::UnexpectedEof.into());
	}
	Ok(())
}

/// Reads and decodes the level file at `path`.
///
/// The file name takes part in format detection: a TR4-family magic in a `.trc` file is Tomb Raider 5.
pub fn load_level<P: AsRef<Path>>(path: P) -> error::Result<Level> {
	let path = path.as_ref();
	let bytes = fs::read(path)?;
	let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or_default();
	decode_level(bytes, file_name)
}

/// Decodes a level already held in memory. `file_name` is only used for format detection.
pub fn decode_level(bytes: impl Into<Box<[u8]>>, file_name: &str) -> error::Result<Level> {
	decode::decode(LevelCursor::new(bytes), file_name)
}
