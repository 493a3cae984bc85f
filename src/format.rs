use std::path::Path;
use crate::{cursor::LevelCursor, error::{Error, Result}};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LevelVersion {
	#[default]
	Tomb1 = 1,
	Tomb2,
	Tomb3,
	Tomb4,
	Tomb5,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Platform {
	#[default]
	Pc,
	Psx,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LevelFormat {
	pub version: LevelVersion,
	pub platform: Platform,
}

pub mod magic {
	pub const TR1_PC: u32 = 0x0000_0020;
	pub const TR2_PC: u32 = 0x0000_002d;
	pub const TR3_PC: [u32; 3] = [0xff08_0038, 0xff18_0038, 0xff18_0034];
	/// "TR4\0"
	pub const TR4_PC: u32 = 0x0034_5254;
	/// "TR4c", the demo build
	pub const TR4_PC_DEMO: u32 = 0x6334_5254;
	pub const TR1_PSX: u32 = 0x5641_4270;
}

impl LevelFormat {
	pub const fn new(version: LevelVersion, platform: Platform) -> Self {
		LevelFormat { version, platform }
	}

	/// TR4 and TR5 share a magic; `is_trc` picks TR5.
	pub fn from_magic(magic: u32, is_trc: bool) -> Option<Self> {
		let version = match magic {
			magic::TR1_PSX => return Some(LevelFormat::new(LevelVersion::Tomb1, Platform::Psx)),
			magic::TR1_PC => LevelVersion::Tomb1,
			magic::TR2_PC => LevelVersion::Tomb2,
			magic if magic::TR3_PC.contains(&magic) => LevelVersion::Tomb3,
			magic::TR4_PC | magic::TR4_PC_DEMO if is_trc => LevelVersion::Tomb5,
			magic::TR4_PC | magic::TR4_PC_DEMO => LevelVersion::Tomb4,
			_ => return None,
		};
		Some(LevelFormat::new(version, Platform::Pc))
	}

	pub fn is_psx(self) -> bool {
		self.platform == Platform::Psx
	}
}

fn is_trc(file_name: &str) -> bool {
	Path::new(file_name)
		.extension()
		.is_some_and(|ext| ext.eq_ignore_ascii_case("trc"))
}

/// Identifies the format from the leading magic. Some PSX files carry a 4-byte prefix,
/// so an unknown first word is followed by a second attempt on the next word.
pub(crate) fn detect(cursor: &mut LevelCursor, file_name: &str) -> Result<LevelFormat> {
	let is_trc = is_trc(file_name);
	let first = cursor.read::<u32>()?;
	if let Some(format) = LevelFormat::from_magic(first, is_trc) {
		return Ok(format);
	}
	let second = cursor.read::<u32>()?;
	match LevelFormat::from_magic(second, is_trc) {
		Some(format) => {
			log::debug!("magic {first:#010x} unknown, found {second:#010x} in second word");
			Ok(format)
		},
		None => Err(Error::UnrecognizedFormat { magic: first }),
	}
}
