// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OBJ mesh assembly
//!
//! Owns the parse loop over a geometry file: appends attributes to the
//! tables, runs MTL sub-parses for `mtllib`, tracks the active material
//! for `usemtl`, resolves faces, and computes the mesh bounds.

use std::fs;
use std::path::Path;

use obj_lite_core::{parse_obj_line, ObjLine};

use crate::aabb::Aabb;
use crate::error::{Error, Result};
use crate::face::resolve_face;
use crate::material::{parse_mtl, TextureLoader};
use crate::mesh::Mesh;

/// Knobs for one load call
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Abort the whole load when an MTL sub-parse fails, instead of
    /// logging the cause and proceeding with the materials parsed from
    /// earlier libraries
    pub strict_materials: bool,
}

/// Load an OBJ file with default options.
pub fn load_obj(path: &Path, textures: &mut dyn TextureLoader) -> Result<Mesh> {
    load_obj_with(path, textures, &LoadOptions::default())
}

/// Load an OBJ file.
///
/// Any parse or resolution error aborts the whole load; no partial
/// mesh is returned. `mtllib` paths resolve relative to the OBJ file's
/// directory. The content is read into an owned string, so the file
/// handle closes on every path, including errors.
pub fn load_obj_with(
    path: &Path,
    textures: &mut dyn TextureLoader,
    options: &LoadOptions,
) -> Result<Mesh> {
    let content = fs::read_to_string(path).map_err(|source| Error::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;
    assemble_mesh(&content, path.parent().unwrap_or(Path::new("")), textures, options)
}

/// Assemble a mesh from OBJ text. `dir` anchors relative `mtllib` paths.
pub fn assemble_mesh(
    content: &str,
    dir: &Path,
    textures: &mut dyn TextureLoader,
    options: &LoadOptions,
) -> Result<Mesh> {
    let mut mesh = Mesh::new();
    // Active material cursor, scoped to this one parse
    let mut active: Option<usize> = None;

    for (number, line) in content.lines().enumerate() {
        let directive = parse_obj_line(line).map_err(|source| Error::Parse {
            line: number + 1,
            source,
        })?;

        match directive {
            ObjLine::Position(x, y, z) => mesh.tables.push_position(x, y, z),
            ObjLine::Normal(x, y, z) => mesh.tables.push_normal(x, y, z),
            ObjLine::TexCoord(u, v) => mesh.tables.push_texcoord(u, v),
            ObjLine::Face(indices) => {
                let face = resolve_face(&indices, &mesh.tables, active)?;
                mesh.faces.push(face);
            }
            ObjLine::MtlLib(relative) => {
                let mtl_path = dir.join(relative);
                match parse_mtl(&mtl_path, textures) {
                    Ok(parsed) => {
                        if parsed.last_texture.is_some() {
                            mesh.texture = parsed.last_texture;
                        }
                        for material in parsed.materials {
                            mesh.materials.push(material);
                        }
                    }
                    Err(error) if !options.strict_materials => {
                        tracing::warn!(
                            path = %mtl_path.display(),
                            %error,
                            "material library failed, continuing without it"
                        );
                    }
                    Err(error) => return Err(error),
                }
            }
            ObjLine::UseMtl(name) => {
                // An unknown name leaves the active material unchanged
                if let Some(index) = mesh.materials.find(name) {
                    active = Some(index);
                }
            }
            ObjLine::Ignored => {}
        }
    }

    let mut bounds = Aabb::new();
    for face in &mesh.faces {
        bounds.union(&face.bounds);
    }
    // An empty mesh reports the zero box
    mesh.bounds = if bounds.is_valid() { bounds } else { Aabb::zero() };

    tracing::debug!(
        faces = mesh.faces.len(),
        positions = mesh.tables.positions().len(),
        materials = mesh.materials.len(),
        "mesh assembled"
    );

    Ok(mesh)
}
