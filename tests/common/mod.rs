//! Byte-level builder for small synthetic levels in every supported format.

#![allow(dead_code)]

use std::io::Write;
use flate2::{write::ZlibEncoder, Compression};
use tr_level::{format::magic, LevelFormat, LevelVersion, Platform};

pub const NUM_PIXELS: usize = 256 * 256;

pub const STATIC_MESH_ID: u32 = 5;
pub const SPRITE_SEQUENCE_ID: i32 = 190;
pub const FLOOR_DATA: [u16; 3] = [0x8001, 2, 0x0403];

pub fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

pub const ALL_FORMATS: [LevelFormat; 6] = [
	LevelFormat::new(LevelVersion::Tomb1, Platform::Pc),
	LevelFormat::new(LevelVersion::Tomb1, Platform::Psx),
	LevelFormat::new(LevelVersion::Tomb2, Platform::Pc),
	LevelFormat::new(LevelVersion::Tomb3, Platform::Pc),
	LevelFormat::new(LevelVersion::Tomb4, Platform::Pc),
	LevelFormat::new(LevelVersion::Tomb5, Platform::Pc),
];

pub fn file_name(format: LevelFormat) -> &'static str {
	match (format.version, format.platform) {
		(_, Platform::Psx) => "GYM.PSX",
		(LevelVersion::Tomb1, _) => "LEVEL1.PHD",
		(LevelVersion::Tomb2, _) => "wall.tr2",
		(LevelVersion::Tomb3, _) => "jungle.tr2",
		(LevelVersion::Tomb4, _) => "karnak.tr4",
		(LevelVersion::Tomb5, _) => "andrea1.trc",
	}
}

#[derive(Default)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
	pub fn u8(&mut self, value: u8) -> &mut Self {
		self.0.push(value);
		self
	}

	pub fn u16(&mut self, value: u16) -> &mut Self {
		self.0.extend(value.to_le_bytes());
		self
	}

	pub fn i16(&mut self, value: i16) -> &mut Self {
		self.0.extend(value.to_le_bytes());
		self
	}

	pub fn u32(&mut self, value: u32) -> &mut Self {
		self.0.extend(value.to_le_bytes());
		self
	}

	pub fn i32(&mut self, value: i32) -> &mut Self {
		self.0.extend(value.to_le_bytes());
		self
	}

	pub fn f32(&mut self, value: f32) -> &mut Self {
		self.0.extend(value.to_le_bytes());
		self
	}

	pub fn zeros(&mut self, len: usize) -> &mut Self {
		self.0.resize(self.0.len() + len, 0);
		self
	}

	pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
		self.0.extend_from_slice(bytes);
		self
	}

	pub fn zlib(&mut self, data: &[u8]) -> &mut Self {
		let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
		encoder.write_all(data).unwrap();
		let compressed = encoder.finish().unwrap();
		self.u32(data.len() as u32).u32(compressed.len() as u32).bytes(&compressed)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}
}

/// A minimal but populated level: one room, one mesh behind two pointers, one model, one
/// static mesh, object and sprite textures, Lara plus one more entity, and empty sound data.
pub fn build_level(format: LevelFormat) -> Vec<u8> {
	let mut out = Bytes::default();
	let version = format.version;
	if format.platform == Platform::Psx {
		out.u32(magic::TR1_PSX);
		psx_textiles(&mut out);
		psx_body(&mut out);
		return out.0;
	}
	out.u32(match version {
		LevelVersion::Tomb1 => magic::TR1_PC,
		LevelVersion::Tomb2 => magic::TR2_PC,
		LevelVersion::Tomb3 => magic::TR3_PC[1],
		LevelVersion::Tomb4 | LevelVersion::Tomb5 => magic::TR4_PC,
	});
	match version {
		LevelVersion::Tomb1 => {
			out.u32(1).zeros(NUM_PIXELS);
		},
		LevelVersion::Tomb2 | LevelVersion::Tomb3 => {
			palette(&mut out, true);
			out.u32(1).zeros(NUM_PIXELS).bytes(&textile16_page());
		},
		LevelVersion::Tomb4 | LevelVersion::Tomb5 => {
			out.u16(1).u16(0).u16(0);
			out.zlib(&textile32_page()).zlib(&textile16_page()).zlib(&[]);
		},
	}
	let mut body = Bytes::default();
	pc_body(&mut body, version);
	match version {
		LevelVersion::Tomb4 => {
			out.zlib(&body.0);
		},
		LevelVersion::Tomb5 => {
			out.u16(3).u16(1).zeros(28);
			out.u32(body.len() as u32).u32(body.len() as u32).bytes(&body.0);
		},
		_ => {
			out.bytes(&body.0);
		},
	}
	out.0
}

/// Every pixel is opaque blue, 0xAARRGGBB.
pub fn textile32_page() -> Vec<u8> {
	0xff00_00ffu32.to_le_bytes().repeat(NUM_PIXELS)
}

/// Every pixel is opaque red in ARGB1555.
pub fn textile16_page() -> Vec<u8> {
	0xfc00u16.to_le_bytes().repeat(NUM_PIXELS)
}

fn palette(out: &mut Bytes, palette16: bool) {
	for index in 0..256u32 {
		out.u8((index % 64) as u8).u8(1).u8(2);
	}
	if palette16 {
		for index in 0..256u32 {
			out.u8(index as u8).u8(10).u8(20).u8(0);
		}
	}
}

fn psx_textiles(out: &mut Bytes) {
	out.zeros(8);
	// textiles follow immediately: offset + 8 is the position after this word
	out.u32(8);
	for tile in 0..13u8 {
		out.bytes(&vec![tile << 4 | 1; NUM_PIXELS / 2]);
	}
	for clut in 0..1024u16 {
		for colour in 0..16u16 {
			out.u16(clut.wrapping_add(colour));
		}
	}
	out.u32(0);
}

fn pc_body(out: &mut Bytes, version: LevelVersion) {
	out.u32(0);
	rooms(out, Platform::Pc, version);
	out.u32(FLOOR_DATA.len() as u32);
	for word in FLOOR_DATA {
		out.u16(word);
	}
	mesh_data(out, Platform::Pc, version);
	animations(out, if version >= LevelVersion::Tomb4 { 40 } else { 32 });
	mesh_tree(out);
	frames(out, version);
	models(out, version == LevelVersion::Tomb5);
	static_meshes(out);
	if version <= LevelVersion::Tomb2 {
		object_textures(out, version);
	}
	match version {
		LevelVersion::Tomb4 => {
			out.bytes(b"SPR");
		},
		LevelVersion::Tomb5 => {
			out.bytes(b"SPR\0");
		},
		_ => {},
	}
	out.u32(1);
	out.u16(0).u8(16).u8(32).u16(64 * 256).u16(32 * 256).i16(-50).i16(-100).i16(50).i16(0);
	sprite_sequences(out);
	cameras(out, version >= LevelVersion::Tomb4);
	out.u32(0);
	boxes(out, version == LevelVersion::Tomb1);
	animated_textures(out);
	match version {
		LevelVersion::Tomb4 => {
			out.u8(1).bytes(b"TEX");
		},
		LevelVersion::Tomb5 => {
			out.u8(1).bytes(b"TEX\0");
		},
		_ => {},
	}
	if version >= LevelVersion::Tomb3 {
		object_textures(out, version);
	}
	entities(out, version == LevelVersion::Tomb1);
	if version >= LevelVersion::Tomb4 {
		ai_objects(out);
	} else {
		out.zeros(32 * 256);
	}
	if version == LevelVersion::Tomb1 {
		palette(out, false);
	}
	if version <= LevelVersion::Tomb3 {
		out.u16(0);
	}
	// demo data, sound map, sound details
	out.u16(0);
	out.zeros(match version {
		LevelVersion::Tomb1 => 256,
		LevelVersion::Tomb2 | LevelVersion::Tomb3 | LevelVersion::Tomb4 => 370,
		LevelVersion::Tomb5 => 450,
	} * 2);
	out.u32(0);
	if version == LevelVersion::Tomb1 {
		out.u32(4).zeros(4);
	}
	out.u32(2).u32(0).u32(1);
}

fn psx_body(out: &mut Bytes) {
	rooms(out, Platform::Psx, LevelVersion::Tomb1);
	out.u32(FLOOR_DATA.len() as u32);
	for word in FLOOR_DATA {
		out.u16(word);
	}
	mesh_data(out, Platform::Psx, LevelVersion::Tomb1);
	animations(out, 32);
	mesh_tree(out);
	frames(out, LevelVersion::Tomb1);
	models(out, true);
	static_meshes(out);
	// object textures through (tile, clut) pairs (0, 0), (1, 0), (0, 0)
	out.u32(3);
	for (tile, clut) in [(0u16, 0u16), (1, 0), (0, 0)] {
		out.u8(0).u8(0).u16(clut).u8(255).u8(0).u16(tile).u8(255).u8(255).u16(0).u8(0).u8(255).u16(1);
	}
	// one sprite texture through (0, 1)
	out.u32(1);
	out.i16(-50).i16(-100).i16(50).i16(0).u16(1).u16(0).u8(8).u8(16).u8(72).u8(48);
	sprite_sequences(out);
	cameras(out, false);
	out.u32(0);
	boxes(out, true);
	animated_textures(out);
	entities(out, true);
}

fn rooms(out: &mut Bytes, platform: Platform, version: LevelVersion) {
	if version == LevelVersion::Tomb5 {
		out.u32(1);
		xela_room(out);
		return;
	}
	let psx = platform == Platform::Psx;
	out.u16(1);
	out.i32(1024).i32(2048).i32(0).i32(-1024);
	out.u32(1);
	if psx {
		out.u16(0);
	}
	out.u16(4);
	for (x, z) in [(0i16, 0i16), (1024, 0), (1024, 1024), (0, 1024)] {
		out.i16(x).i16(0).i16(z);
		if version == LevelVersion::Tomb1 {
			out.i16(0x1000);
		} else {
			out.i16(0x1000).u16(0).i16(0x2000);
		}
	}
	out.u16(1).u16(0).u16(1).u16(2).u16(3).u16(0);
	out.u16(1).u16(0).u16(1).u16(2).u16(1);
	out.u16(0);
	// one portal
	out.u16(1).u16(0);
	out.i16(0).i16(0).i16(-1);
	for _ in 0..4 {
		out.i16(0).i16(0).i16(0);
	}
	// 1 x 2 sectors
	out.u16(1).u16(2);
	for floor_data_index in [0u16, 1] {
		out.u16(floor_data_index).u16(0xffff).u8(0xff).u8(0x80u8).u8(0xff).u8(0x7f);
	}
	match version {
		LevelVersion::Tomb1 => {
			out.i16(0x100);
		},
		LevelVersion::Tomb2 => {
			out.i16(0x100).i16(0x200).i16(0);
		},
		LevelVersion::Tomb3 => {
			out.i16(0x100).i16(0x200);
		},
		_ => {
			out.u32(0x00_40_40_40);
		},
	}
	// one light
	out.u16(1);
	out.i32(512).i32(-512).i32(512);
	match (version, psx) {
		(LevelVersion::Tomb1, false) => {
			out.u16(0x1000).u32(4096);
		},
		(LevelVersion::Tomb1, true) => {
			out.u16(0x1000).u16(0).u32(4096);
		},
		(LevelVersion::Tomb4, _) => {
			out.u8(255).u8(128).u8(0).u8(1).u8(0).u8(16);
			for value in [0.5f32, 1.0, 2.0, 3.0, 0.0, -1.0, 0.0] {
				out.f32(value);
			}
		},
		_ => {
			out.u8(255).u8(128).u8(0).u8(0).u32(0x1000).u32(4096);
		},
	}
	// one static mesh
	out.u16(1);
	out.i32(512).i32(0).i32(512).u16(0x4000);
	match (version, psx) {
		(LevelVersion::Tomb1, false) => {
			out.u16(0x1000).u16(STATIC_MESH_ID as u16);
		},
		(LevelVersion::Tomb1, true) => {
			out.u16(0x1000).u16(STATIC_MESH_ID as u16).u16(0);
		},
		_ => {
			out.u16(0x1000).u16(0).u16(STATIC_MESH_ID as u16);
		},
	}
	out.i16(-1).i16(1);
	if matches!(version, LevelVersion::Tomb3 | LevelVersion::Tomb4) {
		out.u8(3).u8(2).u8(1);
	}
}

fn xela_room(out: &mut Bytes) {
	let mut data = Bytes::default();
	// one light, skipped
	data.zeros(88);
	let start_sd_offset = data.len() as u32;
	for floor_data_index in [0u16, 1] {
		data.u16(floor_data_index).u16(0xffff).u8(0xff).u8(0x80).u8(0xff).u8(0x7f);
	}
	data.u16(0);
	data.u16(0xcdcd);
	let end_portal_offset = data.len() as u32;
	data.i32(512).i32(0).i32(512).u16(0x4000).u16(0x1000).u16(0).u16(STATIC_MESH_ID as u16);
	let layer_offset = data.len() as u32;
	// two layers of 3 vertices, one triangle each, and one rectangle in the second
	for num_rectangles in [0u16, 1] {
		data.u32(3).u16(0).u16(num_rectangles).u16(1).zeros(46);
	}
	let poly_offset = data.len() as u32;
	data.u16(0).u16(1).u16(2).u16(0).u16(0);
	data.u16(0).u16(1).u16(2).u16(0).u16(5).u16(0);
	data.u16(0).u16(1).u16(2).u16(6).u16(0);
	let vertices_offset = data.len() as u32;
	for index in 0..6 {
		data.f32(index as f32 * 256.0).f32(-128.0).f32(64.0);
		data.zeros(12);
		data.u32(0xff_ff_00_00);
	}

	let mut header = vec![0u8; 208];
	let mut put = |offset: usize, bytes: &[u8]| header[offset..offset + bytes.len()].copy_from_slice(bytes);
	put(8, &start_sd_offset.to_le_bytes());
	put(16, &end_portal_offset.to_le_bytes());
	for (index, value) in [1024i32, -512, 2048, 0, -1024].into_iter().enumerate() {
		put(20 + index * 4, &value.to_le_bytes());
	}
	put(40, &1u16.to_le_bytes());
	put(42, &2u16.to_le_bytes());
	put(44, &0x00_40_40_40u32.to_le_bytes());
	put(48, &1u16.to_le_bytes());
	put(50, &1u16.to_le_bytes());
	put(52, &[2, 1]);
	put(54, &3u16.to_le_bytes());
	put(76, &0xffffu16.to_le_bytes());
	put(78, &1u16.to_le_bytes());
	put(168, &2u32.to_le_bytes());
	put(172, &layer_offset.to_le_bytes());
	put(176, &vertices_offset.to_le_bytes());
	put(180, &poly_offset.to_le_bytes());

	out.bytes(b"XELA").u32((header.len() + data.len()) as u32);
	out.bytes(&header).bytes(&data.0);
}

/// Two meshes worth of pointers at the same offset.
fn mesh_data(out: &mut Bytes, platform: Platform, version: LevelVersion) {
	let mut mesh = Bytes::default();
	mesh.i16(0).i16(-64).i16(0).i32(128);
	let vertices = [(-64i16, 0i16, -64i16), (64, 0, -64), (64, -128, 64), (-64, -128, 64)];
	if platform == Platform::Psx {
		mesh.i16(-4);
		for (x, y, z) in vertices {
			mesh.i16(x).i16(y).i16(z).i16(0);
		}
		for _ in 0..4 {
			mesh.i16(0x1000);
		}
		mesh.u16(1).u16(0).u16(1).u16(2).u16(3).u16(0);
		mesh.u16(0);
	} else {
		mesh.u16(4);
		for (x, y, z) in vertices {
			mesh.i16(x).i16(y).i16(z);
		}
		mesh.i16(4);
		for _ in 0..4 {
			mesh.i16(0).i16(-16384).i16(0);
		}
		mesh.u16(1).u16(0).u16(1).u16(2).u16(3).u16(0x8000);
		if version >= LevelVersion::Tomb4 {
			mesh.u16(0x0002);
		}
		mesh.u16(1).u16(0).u16(1).u16(2).u16(0);
		if version >= LevelVersion::Tomb4 {
			mesh.u16(0);
		} else {
			mesh.u16(0).u16(1).u16(1).u16(2).u16(3).u16(0x0a05);
		}
	}
	if mesh.len() % 2 == 1 {
		mesh.u8(0);
	}
	out.u32(mesh.len() as u32 / 2).bytes(&mesh.0);
	out.u32(2).u32(0).u32(0);
}

fn animations(out: &mut Bytes, size: usize) {
	out.u32(1).zeros(size);
	out.u32(1).zeros(6);
	out.u32(0);
	out.u32(2).u16(0).u16(0);
}

fn mesh_tree(out: &mut Bytes) {
	out.u32(4).u32(2).i32(0).i32(-256).u32(0);
}

/// TR1 frames embed a rotation count of 2; later frames hold 2 single-axis rotations.
fn frames(out: &mut Bytes, version: LevelVersion) {
	let header = [0xffc0u16, 0xff80, 0xffc0, 64, 0, 64, 0, 0xff00, 0];
	if version == LevelVersion::Tomb1 {
		out.u32(14);
		header.iter().for_each(|&word| {
			out.u16(word);
		});
		out.u16(2);
		out.u16(0x0000).u16(0x1000);
		out.u16(0x0400).u16(0x0000);
	} else {
		out.u32(11);
		header.iter().for_each(|&word| {
			out.u16(word);
		});
		out.u16(0x4000 | 256).u16(0x8000 | 512);
	}
}

fn models(out: &mut Bytes, padded: bool) {
	out.u32(1);
	out.u32(0).u16(2).u16(0).u32(0).u32(0).u16(0);
	if padded {
		out.u16(0);
	}
}

fn static_meshes(out: &mut Bytes) {
	out.u32(1);
	out.u32(STATIC_MESH_ID).u16(1);
	for _ in 0..2 {
		out.i16(-64).i16(64).i16(-128).i16(0).i16(-64).i16(64);
	}
	out.u16(3);
}

fn object_textures(out: &mut Bytes, version: LevelVersion) {
	out.u32(1);
	out.u16(1);
	if version >= LevelVersion::Tomb4 {
		// triangle flag and tile 0
		out.u16(0x8000).u16(0x0002);
	} else {
		out.u16(0);
	}
	for (x, y) in [(0u8, 0u8), (255, 0), (255, 255), (0, 255)] {
		out.u8(0).u8(x).u8(0).u8(y);
	}
	if version >= LevelVersion::Tomb4 {
		out.u32(0).u32(0).u32(256).u32(256);
	}
	if version == LevelVersion::Tomb5 {
		out.u16(0);
	}
}

fn sprite_sequences(out: &mut Bytes) {
	out.u32(1).i32(SPRITE_SEQUENCE_ID).i16(-1).i16(0);
}

fn cameras(out: &mut Bytes, flyby: bool) {
	out.u32(1).i32(0).i32(0).i32(0).i16(0).u16(0);
	if flyby {
		out.u32(1).zeros(40);
	}
}

fn boxes(out: &mut Bytes, tomb1: bool) {
	out.u32(2);
	if tomb1 {
		out.zeros(2 * 20);
	} else {
		out.zeros(2 * 8);
	}
	out.u32(1).u16(0x8001);
	out.zeros(if tomb1 { 6 * 2 * 2 } else { 10 * 2 * 2 });
}

fn animated_textures(out: &mut Bytes) {
	out.u32(1).u16(0);
}

/// Lara (type 0) and a type 7 item in room 0.
fn entities(out: &mut Bytes, tomb1: bool) {
	out.u32(2);
	for type_id in [0i16, 7] {
		out.i16(type_id).i16(0).i32(512).i32(0).i32(512).i16(0x4000).i16(0x1000);
		if !tomb1 {
			out.i16(0x0800);
		}
		out.u16(0x3e00);
	}
}

fn ai_objects(out: &mut Bytes) {
	out.u32(1);
	out.u16(400).u16(0).i32(0).i32(0).i32(0).i16(-3).u16(0).i32(0x8000);
}
