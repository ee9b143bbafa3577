//! Triangle faces and index resolution

use obj_lite_core::FaceIndices;

use crate::aabb::Aabb;
use crate::error::Result;
use crate::tables::GeometryTables;

/// A resolved triangle: 1-based indices into the owning mesh's
/// [`GeometryTables`], an optional material index, and its own bounds.
///
/// A `Face` is only constructed through [`resolve_face`], which checks
/// every index against the tables, so the indices of a stored face are
/// always in range for the tables they were resolved against. Attribute
/// data itself stays in the tables; faces never copy it.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub vertices: [u32; 3],
    pub normals: [u32; 3],
    /// All-present or all-absent, matching the face line's shape
    pub texcoords: Option<[u32; 3]>,
    /// Index into the mesh's material table
    pub material: Option<usize>,
    /// Union of the three resolved vertex positions
    pub bounds: Aabb,
}

/// Resolve a face line's raw indices against the attribute tables and
/// attach the active material.
///
/// Fails with `IndexOutOfRange` when a referenced attribute has not
/// been declared yet; valid Wavefront files declare all attributes
/// before referencing them, so this only fires on malformed input.
pub fn resolve_face(
    indices: &FaceIndices,
    tables: &GeometryTables,
    material: Option<usize>,
) -> Result<Face> {
    let mut bounds = Aabb::new();
    for &vertex in &indices.vertex {
        bounds.expand(tables.position(vertex)?);
    }
    for &normal in &indices.normal {
        tables.normal(normal)?;
    }
    if let Some(texture) = &indices.texture {
        for &texcoord in texture {
            tables.texcoord(texcoord)?;
        }
    }

    Ok(Face {
        vertices: indices.vertex,
        normals: indices.normal,
        texcoords: indices.texture,
        material,
        bounds,
    })
}
