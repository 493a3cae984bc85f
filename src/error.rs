use std::io;
use thiserror::Error;

/// Ways decoding a level can fail. Every failure aborts the whole load; no partial level is returned.
#[derive(Debug, Error)]
pub enum Error {
	/// Neither the first nor the second 32-bit word of the file is a known version magic.
	#[error("unrecognized level format (magic {magic:#010x})")]
	UnrecognizedFormat { magic: u32 },
	/// A read ran past the end of the data. `offset` is relative to the block being read,
	/// which for TR4 levels may be a decompressed sub-block rather than the file itself.
	#[error("level data is truncated at offset {offset:#x}")]
	TruncatedInput { offset: u64 },
	/// A zlib block did not inflate to the size its header declared.
	#[error("compressed block at offset {offset:#x} did not inflate to {expected} bytes")]
	Decompression {
		offset: u64,
		expected: usize,
		#[source]
		source: Option<io::Error>,
	},
	#[error("failed to read level file")]
	Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	pub(crate) fn from_read(err: io::Error, offset: u64) -> Self {
		match err.kind() {
			io::ErrorKind::UnexpectedEof => Error::TruncatedInput { offset },
			_ => Error::Io(err),
		}
	}
}
