// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MTL material parsing and the material table
//!
//! The MTL sub-parse is a two-state machine: no open draft, or one open
//! draft being filled in by color/texture directives. `newmtl`
//! finalizes the open draft and starts the next; the draft still open
//! at end of file is appended.

use std::fs;
use std::path::Path;

use obj_lite_core::{parse_mtl_line, MtlLine};
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// Shader-selection slot for faces with a diffuse texture
pub const SLOT_TEXTURED: i32 = 0;
/// Shader-selection slot for untextured faces, the default
pub const SLOT_UNTEXTURED: i32 = 1;

/// Opaque handle produced by the external texture-loading collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// External collaborator that decodes an image file into a device
/// texture. Mesh assembly treats it as a black box.
pub trait TextureLoader {
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle>;
}

impl<F> TextureLoader for F
where
    F: FnMut(&Path) -> Result<TextureHandle>,
{
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle> {
        self(path)
    }
}

/// A named shading description attachable to faces
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub texture: Option<TextureHandle>,
    /// [`SLOT_TEXTURED`] once a `map_Kd` is seen, [`SLOT_UNTEXTURED`]
    /// otherwise. A shading-path flag for the flattened slot stream,
    /// not a unique identifier: all textured materials share slot 0.
    pub slot_id: i32,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ambient: [0.0; 3],
            diffuse: [0.0; 3],
            specular: [0.0; 3],
            texture: None,
            slot_id: SLOT_UNTEXTURED,
        }
    }
}

/// Ordered material records with first-wins lookup by name
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    materials: Vec<Material>,
    by_name: FxHashMap<String, usize>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material, returning its index. A duplicate name keeps
    /// pointing at the earlier entry.
    pub fn push(&mut self, material: Material) -> usize {
        let index = self.materials.len();
        self.by_name.entry(material.name.clone()).or_insert(index);
        self.materials.push(material);
        index
    }

    /// Index of the first material with this name, if any
    pub fn find(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }
}

/// Result of one MTL sub-parse
#[derive(Debug)]
pub struct MtlParse {
    /// Materials in definition order
    pub materials: Vec<Material>,
    /// Handle of the last `map_Kd` encountered, adopted as the mesh's
    /// shared texture (last writer wins)
    pub last_texture: Option<TextureHandle>,
}

/// Parse one MTL file from disk.
///
/// Texture paths resolve relative to the MTL file's own directory. The
/// content is read into an owned string, so the file handle closes on
/// every path.
pub fn parse_mtl(path: &Path, textures: &mut dyn TextureLoader) -> Result<MtlParse> {
    let content = fs::read_to_string(path).map_err(|source| Error::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_mtl_content(&content, path.parent().unwrap_or(Path::new("")), textures)
}

/// Parse MTL text. `dir` anchors relative `map_Kd` paths.
pub fn parse_mtl_content(
    content: &str,
    dir: &Path,
    textures: &mut dyn TextureLoader,
) -> Result<MtlParse> {
    let mut materials = Vec::new();
    let mut draft: Option<Material> = None;
    let mut last_texture = None;

    for (number, line) in content.lines().enumerate() {
        let directive = parse_mtl_line(line).map_err(|source| Error::Parse {
            line: number + 1,
            source,
        })?;

        match directive {
            MtlLine::NewMtl(name) => {
                if let Some(done) = draft.take() {
                    materials.push(done);
                }
                draft = Some(Material::new(name));
            }
            MtlLine::Ambient(rgb) => open_draft(&mut draft, "Ka")?.ambient = rgb,
            MtlLine::Diffuse(rgb) => open_draft(&mut draft, "Kd")?.diffuse = rgb,
            MtlLine::Specular(rgb) => open_draft(&mut draft, "Ks")?.specular = rgb,
            MtlLine::DiffuseMap(relative) => {
                let current = open_draft(&mut draft, "map_Kd")?;
                let handle = textures.load_texture(&dir.join(relative))?;
                current.texture = Some(handle);
                current.slot_id = SLOT_TEXTURED;
                last_texture = Some(handle);
            }
            MtlLine::Ignored => {}
        }
    }

    if let Some(done) = draft.take() {
        materials.push(done);
    }

    Ok(MtlParse {
        materials,
        last_texture,
    })
}

fn open_draft<'a>(
    draft: &'a mut Option<Material>,
    directive: &'static str,
) -> Result<&'a mut Material> {
    draft.as_mut().ok_or(Error::MalformedMaterialLine { directive })
}
