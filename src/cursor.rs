use std::io::{Cursor, Read};
use compress::zlib::Decoder;
use num_traits::AsPrimitive;
use crate::{error::{Error, Result}, Readable};

/// Positioned little-endian reader over an in-memory level, or a decompressed block of one.
///
/// All reads report running off the end as [`Error::TruncatedInput`] at the position the read started from.
pub(crate) struct LevelCursor {
	inner: Cursor<Box<[u8]>>,
}

impl LevelCursor {
	pub fn new(data: impl Into<Box<[u8]>>) -> Self {
		LevelCursor { inner: Cursor::new(data.into()) }
	}

	pub fn position(&self) -> u64 {
		self.inner.position()
	}

	pub fn len(&self) -> u64 {
		self.inner.get_ref().len() as u64
	}

	pub fn remaining(&self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	pub fn read<T: Readable>(&mut self) -> Result<T> {
		let offset = self.position();
		T::read(&mut self.inner).map_err(|err| Error::from_read(err, offset))
	}

	/// Preallocation never exceeds the remaining bytes; a larger `len` can only truncate.
	pub fn read_boxed_slice<T: Readable>(&mut self, len: usize) -> Result<Box<[T]>> {
		let mut vec = Vec::with_capacity(self.capacity_for::<T>(len));
		for _ in 0..len {
			vec.push(self.read()?);
		}
		Ok(vec.into_boxed_slice())
	}

	/// `len` capped so that `len` elements of `T` fit in the bytes left to read.
	pub fn capacity_for<T>(&self, len: usize) -> usize {
		len.min(self.remaining() as usize / std::mem::size_of::<T>().max(1))
	}

	pub fn read_list<T: Readable, L: Readable + AsPrimitive<usize>>(&mut self) -> Result<Box<[T]>> {
		let len = self.read::<L>()?.as_();
		self.read_boxed_slice(len)
	}

	pub fn read_bytes(&mut self, len: usize) -> Result<Box<[u8]>> {
		let start = self.position();
		if (len as u64) > self.remaining() {
			return Err(Error::TruncatedInput { offset: start });
		}
		let start = start as usize;
		let bytes = self.inner.get_ref()[start..start + len].into();
		self.inner.set_position((start + len) as u64);
		Ok(bytes)
	}

	pub fn skip(&mut self, len: u64) -> Result<()> {
		if len > self.remaining() {
			return Err(Error::TruncatedInput { offset: self.position() });
		}
		self.inner.set_position(self.position() + len);
		Ok(())
	}

	/// Absolute seek. Seeking to exactly the end is allowed; past it is truncation.
	pub fn seek(&mut self, offset: u64) -> Result<()> {
		if offset > self.len() {
			return Err(Error::TruncatedInput { offset });
		}
		self.inner.set_position(offset);
		Ok(())
	}

	/// Reads a zlib block: uncompressed size u32, compressed size u32, then the compressed bytes.
	/// Returns a cursor over the inflated data, which must be exactly the declared size.
	pub fn read_compressed(&mut self) -> Result<LevelCursor> {
		let offset = self.position();
		let uncompressed_len = self.read::<u32>()? as usize;
		let compressed_len = self.read::<u32>()? as usize;
		let compressed = self.read_bytes(compressed_len)?;
		let mut data = Vec::new();
		Decoder::new(Cursor::new(compressed))
			.take(uncompressed_len as u64)
			.read_to_end(&mut data)
			.map_err(|source| Error::Decompression { offset, expected: uncompressed_len, source: Some(source) })?;
		if data.len() != uncompressed_len {
			return Err(Error::Decompression { offset, expected: uncompressed_len, source: None });
		}
		log::trace!("inflated {compressed_len} bytes at {offset:#x} to {uncompressed_len}");
		Ok(LevelCursor::new(data))
	}
}
