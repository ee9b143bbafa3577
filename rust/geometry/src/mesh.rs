// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use nalgebra::{Point2, Point3, Vector3};

use crate::aabb::Aabb;
use crate::face::Face;
use crate::material::{Material, MaterialTable, TextureHandle};
use crate::tables::GeometryTables;

/// Indexed triangle mesh assembled from one OBJ parse.
///
/// Populated monotonically during a single pass over the geometry file
/// and immutable afterwards; it carries no interior mutability and can
/// be shared read-only across threads.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Attribute arenas the faces index into. Crate-private so every
    /// stored face is known to have been resolved against these tables.
    pub(crate) tables: GeometryTables,
    /// Materials collected from `mtllib` sub-parses, in definition order
    pub(crate) materials: MaterialTable,
    /// Faces in file order
    pub(crate) faces: Vec<Face>,
    /// Shared diffuse texture; the last textured material wins
    pub texture: Option<TextureHandle>,
    /// Union of all face bounds; the zero box for an empty mesh
    pub bounds: Aabb,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            tables: GeometryTables::new(),
            materials: MaterialTable::new(),
            faces: Vec::new(),
            texture: None,
            bounds: Aabb::zero(),
        }
    }

    /// Attribute arenas the faces index into
    pub fn tables(&self) -> &GeometryTables {
        &self.tables
    }

    /// Materials collected during the load, in definition order
    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// Faces in file order
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Vertices the flattened streams will carry (three per face)
    pub fn vertex_count(&self) -> usize {
        self.faces.len() * 3
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Resolved positions of a face of this mesh.
    ///
    /// Face indices are validated at resolution time, so the lookups
    /// cannot miss for faces stored in this mesh.
    pub fn face_positions(&self, face: &Face) -> [&Point3<f32>; 3] {
        let positions = self.tables.positions();
        [
            &positions[face.vertices[0] as usize - 1],
            &positions[face.vertices[1] as usize - 1],
            &positions[face.vertices[2] as usize - 1],
        ]
    }

    /// Resolved normals of a face of this mesh
    pub fn face_normals(&self, face: &Face) -> [&Vector3<f32>; 3] {
        let normals = self.tables.normals();
        [
            &normals[face.normals[0] as usize - 1],
            &normals[face.normals[1] as usize - 1],
            &normals[face.normals[2] as usize - 1],
        ]
    }

    /// Resolved texture coordinates of a face, if the face has any
    pub fn face_texcoords(&self, face: &Face) -> Option<[&Point2<f32>; 3]> {
        let indices = face.texcoords?;
        let texcoords = self.tables.texcoords();
        Some([
            &texcoords[indices[0] as usize - 1],
            &texcoords[indices[1] as usize - 1],
            &texcoords[indices[2] as usize - 1],
        ])
    }

    /// Material of a face, if one was active when it was parsed
    pub fn face_material(&self, face: &Face) -> Option<&Material> {
        face.material.and_then(|index| self.materials.get(index))
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
