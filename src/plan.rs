use crate::format::{LevelFormat, LevelVersion::*, Platform};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextileFormat {
	/// 13 4-bit pages and 1024 cluts behind an offset table
	Psx,
	/// 8-bit pages, plus 16-bit pages from TR2 on
	Paletted { textile16: bool },
	/// zlib blocks of 32-bit and 16-bit pages
	Compressed { level_data: LevelDataFormat },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LevelDataFormat {
	/// TR4: the rest of the level is one zlib block; decoding continues inside it
	Compressed,
	/// TR5: only the size pair precedes the uncompressed level data
	Inline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VertexFormat {
	/// 8 bytes, single lighting value
	Tr1,
	/// 12 bytes
	Tr2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AmbientFormat {
	Intensity,
	/// Two intensities, and for TR2 a light mode
	Intensity2 { light_mode: bool },
	Colour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LightFormat {
	Tr1Pc,
	Tr1Psx,
	Coloured,
	Tr4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RoomStaticMeshFormat {
	Tr1Pc,
	Tr1Psx,
	Tr2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LegacyRoomFormat {
	pub psx: bool,
	pub vertex: VertexFormat,
	pub ambient: AmbientFormat,
	pub light: LightFormat,
	pub static_mesh: RoomStaticMeshFormat,
	/// Water scheme, reverb and alternate group bytes
	pub extra_flags: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RoomFormat {
	Legacy(LegacyRoomFormat),
	Xela,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MeshFormat {
	Psx,
	/// Textured and coloured faces
	Tr1,
	/// Faces with effects, no coloured faces
	Tr4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ModelFormat {
	Pc,
	Padded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ObjectTextureFormat {
	Pc,
	Psx,
	Tr4,
	Tr5,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BoxFormat {
	/// 20-byte boxes, 6 zone words per box
	Tr1,
	/// 8-byte boxes, 10 zone words per box
	Tr2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EntityFormat {
	Tr1,
	Tr2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SoundMapFormat {
	/// 256 entries, then raw sample bytes
	Tr1,
	Tr2,
	/// 1024 entries, or 370 when the demo data is not 2048 bytes long
	Tr4,
	Tr5,
}

/// One step of a decode plan, already bound to the layout its format uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Section {
	/// 8-bit palette, and for TR2/3 the 16-bit palette after it
	Palette { palette16: bool },
	Textiles(TextileFormat),
	Unused,
	Rooms(RoomFormat),
	FloorData,
	MeshData,
	/// Animation record size
	Animations { size: u64 },
	MeshTree,
	Frames,
	Models(ModelFormat),
	StaticMeshes,
	ObjectTextures(ObjectTextureFormat),
	/// Tag bytes before the sprite textures
	Sprites { psx: bool, tag_len: u64 },
	Cameras { flyby: bool },
	SoundSources,
	Boxes(BoxFormat),
	/// Bytes after the list: uv count and tag
	AnimatedTextures { tail_len: u64 },
	Entities(EntityFormat),
	AiObjects,
	LightMap,
	Cinematics,
	SoundMap(SoundMapFormat),
	SampleIndices,
}

/// The ordered sections of a level, fixed once its format is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DecodePlan {
	pub sections: Vec<Section>,
	pub mesh: MeshFormat,
}

impl DecodePlan {
	pub fn new(format: LevelFormat) -> Self {
		match format.platform {
			Platform::Psx => Self::psx(),
			Platform::Pc => Self::pc(format),
		}
	}

	fn psx() -> Self {
		let room = LegacyRoomFormat {
			psx: true,
			vertex: VertexFormat::Tr1,
			ambient: AmbientFormat::Intensity,
			light: LightFormat::Tr1Psx,
			static_mesh: RoomStaticMeshFormat::Tr1Psx,
			extra_flags: false,
		};
		let sections = vec![
			Section::Textiles(TextileFormat::Psx),
			Section::Rooms(RoomFormat::Legacy(room)),
			Section::FloorData,
			Section::MeshData,
			Section::Animations { size: crate::records::tr1::ANIMATION_SIZE },
			Section::MeshTree,
			Section::Frames,
			Section::Models(ModelFormat::Padded),
			Section::StaticMeshes,
			Section::ObjectTextures(ObjectTextureFormat::Psx),
			Section::Sprites { psx: true, tag_len: 0 },
			Section::Cameras { flyby: false },
			Section::SoundSources,
			Section::Boxes(BoxFormat::Tr1),
			Section::AnimatedTextures { tail_len: 0 },
			Section::Entities(EntityFormat::Tr1),
		];
		DecodePlan { sections, mesh: MeshFormat::Psx }
	}

	fn pc(format: LevelFormat) -> Self {
		let version = format.version;
		let mut sections = Vec::new();
		if matches!(version, Tomb2 | Tomb3) {
			sections.push(Section::Palette { palette16: true });
		}
		sections.push(Section::Textiles(match version {
			Tomb1 => TextileFormat::Paletted { textile16: false },
			Tomb2 | Tomb3 => TextileFormat::Paletted { textile16: true },
			Tomb4 => TextileFormat::Compressed { level_data: LevelDataFormat::Compressed },
			Tomb5 => TextileFormat::Compressed { level_data: LevelDataFormat::Inline },
		}));
		sections.push(Section::Unused);
		let room = match version {
			Tomb5 => RoomFormat::Xela,
			_ => RoomFormat::Legacy(LegacyRoomFormat {
				psx: false,
				vertex: if version == Tomb1 { VertexFormat::Tr1 } else { VertexFormat::Tr2 },
				ambient: match version {
					Tomb1 => AmbientFormat::Intensity,
					Tomb4 => AmbientFormat::Colour,
					_ => AmbientFormat::Intensity2 { light_mode: version == Tomb2 },
				},
				light: match version {
					Tomb1 => LightFormat::Tr1Pc,
					Tomb4 => LightFormat::Tr4,
					_ => LightFormat::Coloured,
				},
				static_mesh: if version == Tomb1 { RoomStaticMeshFormat::Tr1Pc } else { RoomStaticMeshFormat::Tr2 },
				extra_flags: matches!(version, Tomb3 | Tomb4),
			}),
		};
		let animation_size = if version >= Tomb4 {
			crate::records::tr4::ANIMATION_SIZE
		} else {
			crate::records::tr1::ANIMATION_SIZE
		};
		let object_textures = Section::ObjectTextures(match version {
			Tomb4 => ObjectTextureFormat::Tr4,
			Tomb5 => ObjectTextureFormat::Tr5,
			_ => ObjectTextureFormat::Pc,
		});
		sections.extend([
			Section::Rooms(room),
			Section::FloorData,
			Section::MeshData,
			Section::Animations { size: animation_size },
			Section::MeshTree,
			Section::Frames,
			Section::Models(if version == Tomb5 { ModelFormat::Padded } else { ModelFormat::Pc }),
			Section::StaticMeshes,
		]);
		if version <= Tomb2 {
			sections.push(object_textures);
		}
		sections.extend([
			Section::Sprites {
				psx: false,
				tag_len: match version {
					Tomb4 => 3,
					Tomb5 => 4,
					_ => 0,
				},
			},
			Section::Cameras { flyby: version >= Tomb4 },
			Section::SoundSources,
			Section::Boxes(if version == Tomb1 { BoxFormat::Tr1 } else { BoxFormat::Tr2 }),
			Section::AnimatedTextures {
				tail_len: match version {
					Tomb4 => 4,
					Tomb5 => 5,
					_ => 0,
				},
			},
		]);
		if version >= Tomb3 {
			sections.push(object_textures);
		}
		sections.push(Section::Entities(if version == Tomb1 { EntityFormat::Tr1 } else { EntityFormat::Tr2 }));
		if version >= Tomb4 {
			sections.push(Section::AiObjects);
		} else {
			sections.push(Section::LightMap);
		}
		if version == Tomb1 {
			sections.push(Section::Palette { palette16: false });
		}
		if version <= Tomb3 {
			sections.push(Section::Cinematics);
		}
		// sound data is read for every PC version, so a level cut short before it is truncated
		sections.push(Section::SoundMap(match version {
			Tomb1 => SoundMapFormat::Tr1,
			Tomb2 | Tomb3 => SoundMapFormat::Tr2,
			Tomb4 => SoundMapFormat::Tr4,
			Tomb5 => SoundMapFormat::Tr5,
		}));
		sections.push(Section::SampleIndices);
		let mesh = if version >= Tomb4 { MeshFormat::Tr4 } else { MeshFormat::Tr1 };
		DecodePlan { sections, mesh }
	}
}
