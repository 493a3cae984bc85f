use std::{collections::HashMap, io::{Read, Result}};
use byteorder::{ReadBytesExt, LE};
use glam::I16Vec3;
use shared::{min_max::MinMaxFromIterator, MinMax};
use crate::{
	cursor::LevelCursor, error, model::Face, plan::MeshFormat, read_boxed_slice,
	records::{psx::PsxVector, LegacyFace}, Readable,
};

#[derive(Clone, Debug, PartialEq)]
pub enum MeshLighting {
	Normals(Box<[I16Vec3]>),
	/// Per-vertex intensity
	Lights(Box<[i16]>),
}

impl Readable for MeshLighting {
	fn read<R: Read>(reader: &mut R) -> Result<Self> {
		Ok(match reader.read_i16::<LE>()? {
			num if num > 0 => MeshLighting::Normals(read_boxed_slice(reader, num as usize)?),
			num => MeshLighting::Lights(read_boxed_slice(reader, num.unsigned_abs() as usize)?),
		})
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
	pub centre: I16Vec3,
	pub collision_radius: i32,
	/// Relative to the placement of the mesh
	pub vertices: Box<[I16Vec3]>,
	pub lighting: MeshLighting,
	/// `vertex_indices` index into Mesh.vertices
	pub textured_rectangles: Box<[Face<4>]>,
	pub textured_triangles: Box<[Face<3>]>,
	/// Texture is a palette index. Empty from TR4 on.
	pub coloured_rectangles: Box<[Face<4>]>,
	pub coloured_triangles: Box<[Face<3>]>,
}

impl Mesh {
	pub fn vertex_bounds(&self) -> Option<MinMax<I16Vec3>> {
		self.vertices.iter().copied().min_max()
	}
}

#[derive(Readable)]
struct LegacyMesh {
	centre: I16Vec3,
	collision_radius: i32,
	#[list_u16]
	vertices: Box<[I16Vec3]>,
	lighting: MeshLighting,
	#[list_u16]
	textured_rectangles: Box<[LegacyFace<4>]>,
	#[list_u16]
	textured_triangles: Box<[LegacyFace<3>]>,
	#[list_u16]
	coloured_rectangles: Box<[LegacyFace<4>]>,
	#[list_u16]
	coloured_triangles: Box<[LegacyFace<3>]>,
}

#[derive(Readable)]
struct Tr4Mesh {
	centre: I16Vec3,
	collision_radius: i32,
	#[list_u16]
	vertices: Box<[I16Vec3]>,
	lighting: MeshLighting,
	#[list_u16]
	rectangles: Box<[Face<4>]>,
	#[list_u16]
	triangles: Box<[Face<3>]>,
}

/// The vertex count is signed: positive counts are followed by normals, otherwise by intensities.
struct PsxMesh {
	centre: I16Vec3,
	collision_radius: i32,
	vertices: Box<[I16Vec3]>,
	lighting: MeshLighting,
	textured_rectangles: Box<[LegacyFace<4>]>,
	textured_triangles: Box<[LegacyFace<3>]>,
}

impl Readable for PsxMesh {
	fn read<R: Read>(reader: &mut R) -> Result<Self> {
		let centre = I16Vec3::read(reader)?;
		let collision_radius = i32::read(reader)?;
		let count = reader.read_i16::<LE>()?;
		let len = count.unsigned_abs() as usize;
		let vertices = narrow(read_boxed_slice(reader, len)?);
		let lighting = if count > 0 {
			MeshLighting::Normals(narrow(read_boxed_slice(reader, len)?))
		} else {
			MeshLighting::Lights(read_boxed_slice(reader, len)?)
		};
		let textured_rectangles = crate::read_list::<_, _, u16>(reader)?;
		let textured_triangles = crate::read_list::<_, _, u16>(reader)?;
		Ok(PsxMesh { centre, collision_radius, vertices, lighting, textured_rectangles, textured_triangles })
	}
}

fn narrow(vectors: Box<[PsxVector]>) -> Box<[I16Vec3]> {
	vectors.iter().map(|&vector| vector.into()).collect()
}

fn widen<const N: usize>(faces: Box<[LegacyFace<N>]>) -> Box<[Face<N>]> {
	faces.iter().map(|&face| face.into()).collect()
}

impl From<LegacyMesh> for Mesh {
	fn from(mesh: LegacyMesh) -> Self {
		Mesh {
			centre: mesh.centre,
			collision_radius: mesh.collision_radius,
			vertices: mesh.vertices,
			lighting: mesh.lighting,
			textured_rectangles: widen(mesh.textured_rectangles),
			textured_triangles: widen(mesh.textured_triangles),
			coloured_rectangles: widen(mesh.coloured_rectangles),
			coloured_triangles: widen(mesh.coloured_triangles),
		}
	}
}

impl From<Tr4Mesh> for Mesh {
	fn from(mesh: Tr4Mesh) -> Self {
		Mesh {
			centre: mesh.centre,
			collision_radius: mesh.collision_radius,
			vertices: mesh.vertices,
			lighting: mesh.lighting,
			textured_rectangles: mesh.rectangles,
			textured_triangles: mesh.triangles,
			coloured_rectangles: Box::new([]),
			coloured_triangles: Box::new([]),
		}
	}
}

impl From<PsxMesh> for Mesh {
	fn from(mesh: PsxMesh) -> Self {
		Mesh {
			centre: mesh.centre,
			collision_radius: mesh.collision_radius,
			vertices: mesh.vertices,
			lighting: mesh.lighting,
			textured_rectangles: widen(mesh.textured_rectangles),
			textured_triangles: widen(mesh.textured_triangles),
			coloured_rectangles: Box::new([]),
			coloured_triangles: Box::new([]),
		}
	}
}

/// Parses every mesh the pointer table references, keyed by byte offset into `mesh_data`.
/// Offsets shared by several pointers are parsed once.
pub(crate) fn materialize(mesh_data: &[u16], pointers: &[u32], format: MeshFormat) -> error::Result<HashMap<u32, Mesh>> {
	let bytes = mesh_data.iter().flat_map(|word| word.to_le_bytes()).collect::<Vec<_>>();
	let mut cursor = LevelCursor::new(bytes);
	let mut meshes = HashMap::new();
	for &pointer in pointers {
		if meshes.contains_key(&pointer) {
			continue;
		}
		cursor.seek(pointer as u64)?;
		let mesh = match format {
			MeshFormat::Psx => cursor.read::<PsxMesh>()?.into(),
			MeshFormat::Tr1 => cursor.read::<LegacyMesh>()?.into(),
			MeshFormat::Tr4 => cursor.read::<Tr4Mesh>()?.into(),
		};
		meshes.insert(pointer, mesh);
	}
	log::debug!("materialized {} meshes from {} pointers", meshes.len(), pointers.len());
	Ok(meshes)
}
