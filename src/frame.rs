use std::f32::consts::TAU;
use glam::{I16Vec3, IVec3, Vec3};
use shared::MinMax;
use crate::{format::LevelVersion, model::{MeshTreeFlags, MeshTreeNode}};

/// One keyframe: a bounding box, the root offset and a rotation per mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
	pub bounding_box: MinMax<I16Vec3>,
	pub offset: I16Vec3,
	/// Radians about x, y and z
	pub rotations: Vec<Vec3>,
}

struct Words<'a> {
	words: &'a [u16],
	position: usize,
}

impl Words<'_> {
	fn next(&mut self) -> Option<u16> {
		let word = *self.words.get(self.position)?;
		self.position += 1;
		Some(word)
	}

	fn vec3(&mut self) -> Option<I16Vec3> {
		Some(I16Vec3::new(self.next()? as i16, self.next()? as i16, self.next()? as i16))
	}
}

/// Both words of a three-axis rotation, 10 bits per axis.
fn packed_rotation(data: u16, next: u16) -> Vec3 {
	let x = (data & 0x3ff0) >> 4;
	let y = ((data & 0x000f) << 6) | ((next & 0xfc00) >> 10);
	let z = next & 0x03ff;
	Vec3::new(x as f32, y as f32, z as f32) * TAU / 1024.0
}

/// Decodes the frame at word `offset`. TR1 frames embed their rotation count and ignore `mesh_count`.
/// `None` when the frame runs off the end of `frames`.
pub(crate) fn decode_frame(frames: &[u16], version: LevelVersion, offset: usize, mesh_count: u32) -> Option<Frame> {
	let mut words = Words { words: frames, position: offset };
	let bounding_box = MinMax { min: words.vec3()?, max: words.vec3()? };
	let frame_offset = words.vec3()?;
	let count = match version {
		LevelVersion::Tomb1 => words.next()? as u32,
		_ => mesh_count,
	};
	let mut rotations = Vec::with_capacity(count.min(frames.len() as u32) as usize);
	for _ in 0..count {
		let rotation = if version == LevelVersion::Tomb1 {
			// stored low word first
			let next = words.next()?;
			let data = words.next()?;
			packed_rotation(data, next)
		} else {
			let data = words.next()?;
			match data & 0xc000 {
				0 => packed_rotation(data, words.next()?),
				axis => {
					let angle = if version >= LevelVersion::Tomb4 {
						(data & 0x0fff) as f32 * TAU / 4096.0
					} else {
						(data & 0x03ff) as f32 * TAU / 1024.0
					};
					match axis {
						0x4000 => Vec3::new(angle, 0.0, 0.0),
						0x8000 => Vec3::new(0.0, angle, 0.0),
						_ => Vec3::new(0.0, 0.0, angle),
					}
				},
			}
		};
		rotations.push(rotation);
	}
	Some(Frame { bounding_box, offset: frame_offset, rotations })
}

/// `count` nodes of four u32s each (flags, x, y, z) from word `start`.
pub(crate) fn decode_mesh_tree(mesh_tree: &[u32], start: usize, count: usize) -> Option<Vec<MeshTreeNode>> {
	let end = start.checked_add(count.checked_mul(4)?)?;
	let nodes = mesh_tree
		.get(start..end)?
		.chunks_exact(4)
		.map(|node| MeshTreeNode {
			flags: MeshTreeFlags(node[0]),
			offset: IVec3::new(node[1] as i32, node[2] as i32, node[3] as i32),
		})
		.collect();
	Some(nodes)
}
