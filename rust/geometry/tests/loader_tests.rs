// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end loads of the fixture models under `tests/models/`.

use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use obj_lite_geometry::{
    load_obj, load_obj_with, Error, LoadOptions, MeshBuffers, Result, TextureHandle,
    TextureLoader, SLOT_TEXTURED, SLOT_UNTEXTURED,
};

fn model_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/models").join(name)
}

/// Texture collaborator that records requested paths and hands out
/// sequential handles.
struct RecordingLoader {
    requested: Vec<PathBuf>,
}

impl RecordingLoader {
    fn new() -> Self {
        Self { requested: Vec::new() }
    }
}

impl TextureLoader for RecordingLoader {
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle> {
        self.requested.push(path.to_path_buf());
        Ok(TextureHandle(self.requested.len() as u32))
    }
}

#[test]
fn square_without_materials() {
    let mut textures = RecordingLoader::new();
    let mesh = load_obj(&model_path("square.obj"), &mut textures).unwrap();

    assert_eq!(mesh.faces().len(), 2);
    for face in mesh.faces() {
        assert!(face.material.is_none());
        assert!(face.texcoords.is_none());
        for normal in mesh.face_normals(face) {
            assert_relative_eq!(normal.z, 1.0);
            assert_relative_eq!(normal.x, 0.0);
        }
    }

    // Box covers all four corners of the square
    assert_relative_eq!(mesh.bounds.min.x, 0.0);
    assert_relative_eq!(mesh.bounds.min.y, 0.0);
    assert_relative_eq!(mesh.bounds.max.x, 1.0);
    assert_relative_eq!(mesh.bounds.max.y, 1.0);
    assert_relative_eq!(mesh.bounds.max.z, 0.0);

    assert!(mesh.texture.is_none());
    assert!(textures.requested.is_empty());
}

#[test]
fn textured_model_materials_and_streams() {
    let mut textures = RecordingLoader::new();
    let mesh = load_obj(&model_path("textured.obj"), &mut textures).unwrap();

    // The MTL's texture path resolved relative to the MTL's directory
    assert_eq!(textures.requested, vec![model_path("stone.png")]);
    assert_eq!(mesh.texture, Some(TextureHandle(1)));

    assert_eq!(mesh.materials().len(), 2);
    let stone_index = mesh.materials().find("Stone").unwrap();
    let flat_index = mesh.materials().find("Flat").unwrap();

    let stone = mesh.materials().get(stone_index).unwrap();
    assert_eq!(stone.slot_id, SLOT_TEXTURED);
    assert_eq!(stone.texture, Some(TextureHandle(1)));
    assert_eq!(stone.ambient, [0.2, 0.2, 0.2]);

    let flat = mesh.materials().get(flat_index).unwrap();
    assert_eq!(flat.slot_id, SLOT_UNTEXTURED);
    assert!(flat.texture.is_none());

    // First two faces use Stone, the third Flat
    assert_eq!(mesh.faces().len(), 3);
    assert_eq!(mesh.faces()[0].material, Some(stone_index));
    assert_eq!(mesh.faces()[1].material, Some(stone_index));
    assert_eq!(mesh.faces()[2].material, Some(flat_index));

    let buffers = MeshBuffers::from_mesh(&mesh);
    assert_eq!(buffers.positions.len(), 27);
    assert_eq!(buffers.normals.len(), 27);
    assert_eq!(buffers.colors.len(), 27);
    assert_eq!(buffers.texcoords.len(), 18);
    assert_eq!(
        buffers.material_slots,
        vec![
            SLOT_TEXTURED,
            SLOT_TEXTURED,
            SLOT_TEXTURED,
            SLOT_TEXTURED,
            SLOT_TEXTURED,
            SLOT_TEXTURED,
            SLOT_UNTEXTURED,
            SLOT_UNTEXTURED,
            SLOT_UNTEXTURED,
        ]
    );

    // The last face's color entries carry Flat's diffuse
    assert_eq!(&buffers.colors[18..], &[0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn position_stream_round_trips_resolved_vertices() {
    let mut textures = RecordingLoader::new();
    let mesh = load_obj(&model_path("textured.obj"), &mut textures).unwrap();
    let buffers = MeshBuffers::from_mesh(&mesh);

    let mut triples = buffers.positions.chunks_exact(3);
    for face in mesh.faces() {
        for position in mesh.face_positions(face) {
            let triple = triples.next().unwrap();
            assert_eq!(triple, &[position.x, position.y, position.z]);
        }
    }
    assert!(triples.next().is_none());
}

/// Texture collaborator whose image decode always fails.
struct FailingLoader;

impl TextureLoader for FailingLoader {
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle> {
        Err(Error::TextureLoad {
            path: path.to_path_buf(),
            reason: "unsupported image format".into(),
        })
    }
}

#[test]
fn texture_failure_drops_the_whole_library_by_default() {
    let mut textures = FailingLoader;
    let mesh = load_obj(&model_path("textured.obj"), &mut textures).unwrap();

    // The failing `map_Kd` sinks the whole library, including the
    // untextured Flat material defined after it, so every `usemtl`
    // misses and the faces stay unshaded
    assert_eq!(mesh.materials().len(), 0);
    assert_eq!(mesh.faces().len(), 3);
    for face in mesh.faces() {
        assert!(face.material.is_none());
    }
    assert!(mesh.texture.is_none());

    let buffers = MeshBuffers::from_mesh(&mesh);
    assert_eq!(buffers.colored_vertex_count(), 0);
    assert!(buffers.material_slots.is_empty());
}

#[test]
fn texture_failure_aborts_in_strict_mode() {
    let mut textures = FailingLoader;
    let options = LoadOptions {
        strict_materials: true,
    };
    let err = load_obj_with(&model_path("textured.obj"), &mut textures, &options).unwrap_err();
    assert!(matches!(err, Error::TextureLoad { .. }));
}

#[test]
fn missing_geometry_file() {
    let mut textures = RecordingLoader::new();
    let err = load_obj(&model_path("does_not_exist.obj"), &mut textures).unwrap_err();
    assert!(matches!(err, Error::MissingFile { .. }));
}
