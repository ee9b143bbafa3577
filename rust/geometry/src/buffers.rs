// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flat upload buffers
//!
//! Serializes a finalized [`Mesh`] into parallel numeric streams laid
//! out for contiguous GPU upload. Exact capacity is reserved up front;
//! no reallocation happens during the pass.

use crate::mesh::Mesh;

/// Parallel flat streams, three vertices per face in file order.
///
/// The color, texcoord and slot streams only receive entries from
/// faces that carry a material / texture coordinates, so they can be
/// shorter than the position stream when some faces lack them. The
/// per-stream counts expose the mismatch; callers decide whether to
/// pad or to draw untextured faces through a separate path.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    /// 3 floats per vertex
    pub positions: Vec<f32>,
    /// 3 floats per vertex
    pub normals: Vec<f32>,
    /// Material diffuse color repeated for each of the face's vertices
    pub colors: Vec<f32>,
    /// 2 floats per vertex, faces with resolved UVs only
    pub texcoords: Vec<f32>,
    /// Shader-selection slot id per vertex, faces with a material only
    pub material_slots: Vec<i32>,
}

impl MeshBuffers {
    /// Flatten a mesh into upload-ready streams.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let faces = mesh.faces.len();
        let mut buffers = Self {
            positions: Vec::with_capacity(faces * 9),
            normals: Vec::with_capacity(faces * 9),
            colors: Vec::with_capacity(faces * 9),
            texcoords: Vec::with_capacity(faces * 6),
            material_slots: Vec::with_capacity(faces * 3),
        };

        for face in &mesh.faces {
            for position in mesh.face_positions(face) {
                buffers
                    .positions
                    .extend_from_slice(&[position.x, position.y, position.z]);
            }
            for normal in mesh.face_normals(face) {
                buffers
                    .normals
                    .extend_from_slice(&[normal.x, normal.y, normal.z]);
            }
            if let Some(material) = mesh.face_material(face) {
                for _ in 0..3 {
                    buffers.colors.extend_from_slice(&material.diffuse);
                }
                buffers.material_slots.extend_from_slice(&[material.slot_id; 3]);
            }
            if let Some(texcoords) = mesh.face_texcoords(face) {
                for texcoord in texcoords {
                    buffers.texcoords.extend_from_slice(&[texcoord.x, texcoord.y]);
                }
            }
        }

        buffers
    }

    /// Vertices in the position/normal streams
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Vertices that received a color and slot entry
    pub fn colored_vertex_count(&self) -> usize {
        self.colors.len() / 3
    }

    /// Vertices that received a texture coordinate entry
    pub fn textured_vertex_count(&self) -> usize {
        self.texcoords.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::resolve_face;
    use crate::material::{Material, SLOT_UNTEXTURED};
    use obj_lite_core::FaceIndices;

    fn mesh_with_two_faces(second_face_material: Option<usize>) -> Mesh {
        let mut mesh = Mesh::new();
        mesh.tables.push_position(0.0, 0.0, 0.0);
        mesh.tables.push_position(1.0, 0.0, 0.0);
        mesh.tables.push_position(1.0, 1.0, 0.0);
        mesh.tables.push_position(0.0, 1.0, 0.0);
        mesh.tables.push_normal(0.0, 0.0, 1.0);

        let mut red = Material::new("Red");
        red.diffuse = [1.0, 0.0, 0.0];
        mesh.materials.push(red);

        let first = FaceIndices {
            vertex: [1, 2, 3],
            texture: None,
            normal: [1, 1, 1],
        };
        let second = FaceIndices {
            vertex: [1, 3, 4],
            texture: None,
            normal: [1, 1, 1],
        };
        let face = resolve_face(&first, &mesh.tables, None).unwrap();
        mesh.faces.push(face);
        let face = resolve_face(&second, &mesh.tables, second_face_material).unwrap();
        mesh.faces.push(face);
        mesh
    }

    #[test]
    fn test_position_round_trip() {
        let mesh = mesh_with_two_faces(None);
        let buffers = MeshBuffers::from_mesh(&mesh);

        assert_eq!(buffers.vertex_count(), 6);
        let mut triples = buffers.positions.chunks_exact(3);
        for face in &mesh.faces {
            for position in mesh.face_positions(face) {
                let triple = triples.next().unwrap();
                assert_eq!(triple, &[position.x, position.y, position.z]);
            }
        }
        assert!(triples.next().is_none());
    }

    #[test]
    fn test_normals_repeat_per_vertex() {
        let mesh = mesh_with_two_faces(None);
        let buffers = MeshBuffers::from_mesh(&mesh);

        assert_eq!(buffers.normals.len(), 18);
        for triple in buffers.normals.chunks_exact(3) {
            assert_eq!(triple, &[0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_streams_shorter_when_material_is_partial() {
        // Second face carries the material, first does not
        let mesh = mesh_with_two_faces(Some(0));
        let buffers = MeshBuffers::from_mesh(&mesh);

        assert_eq!(buffers.vertex_count(), 6);
        assert_eq!(buffers.colored_vertex_count(), 3);
        assert_eq!(buffers.textured_vertex_count(), 0);
        assert_eq!(buffers.colors, vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(buffers.material_slots, vec![SLOT_UNTEXTURED; 3]);
    }

    #[test]
    fn test_empty_mesh_flattens_to_empty_streams() {
        let buffers = MeshBuffers::from_mesh(&Mesh::new());
        assert_eq!(buffers.vertex_count(), 0);
        assert!(buffers.positions.is_empty());
        assert!(buffers.material_slots.is_empty());
    }
}
