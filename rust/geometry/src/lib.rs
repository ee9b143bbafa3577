//! Obj-Lite Mesh Assembly
//!
//! Converts Wavefront OBJ geometry plus MTL material definitions into
//! an indexed in-memory mesh and flat upload-ready buffers, using
//! `obj-lite-core` for line parsing and nalgebra for the math types.
//!
//! ```rust,ignore
//! use obj_lite_geometry::{load_obj, MeshBuffers, TextureHandle, TextureLoader};
//! use std::path::Path;
//!
//! let mut textures = |path: &Path| -> obj_lite_geometry::Result<TextureHandle> {
//!     Ok(my_renderer.upload_texture(path)?)
//! };
//! let mesh = load_obj(Path::new("models/crate.obj"), &mut textures)?;
//! let buffers = MeshBuffers::from_mesh(&mesh);
//! my_renderer.upload(&buffers);
//! ```

pub mod aabb;
pub mod buffers;
pub mod error;
pub mod face;
pub mod loader;
pub mod material;
pub mod mesh;
pub mod tables;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use aabb::Aabb;
pub use buffers::MeshBuffers;
pub use error::{Error, Result};
pub use face::{resolve_face, Face};
pub use loader::{assemble_mesh, load_obj, load_obj_with, LoadOptions};
pub use material::{
    parse_mtl, parse_mtl_content, Material, MaterialTable, MtlParse, TextureHandle, TextureLoader,
    SLOT_TEXTURED, SLOT_UNTEXTURED,
};
pub use mesh::Mesh;
pub use tables::GeometryTables;
