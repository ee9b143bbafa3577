// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Obj-Lite Core Parser
//!
//! Line-level Wavefront OBJ/MTL parser built with [nom](https://docs.rs/nom).
//! Classifies each line of a geometry or material file into a tagged
//! directive value; all file handling and index resolution live in
//! `obj-lite-geometry`.
//!
//! ## Overview
//!
//! - **Directive classification**: one `&str` line in, one [`ObjLine`] /
//!   [`MtlLine`] variant out, dispatched by exhaustive matching
//! - **Number parsing**: floats via [fast-float](https://docs.rs/fast-float),
//!   1-based index fields via [lexical-core](https://docs.rs/lexical-core)
//! - **Face triplets**: `v/vt/vn` and `v//vn` groups, texture indices
//!   all-present or all-absent per face
//!
//! ## Quick Start
//!
//! ```rust
//! use obj_lite_core::{parse_obj_line, ObjLine};
//!
//! let line = parse_obj_line("f 1//1 2//1 3//1").unwrap();
//! match line {
//!     ObjLine::Face(face) => assert_eq!(face.vertex, [1, 2, 3]),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! Face lines that do not have exactly three vertex groups classify as
//! [`ObjLine::Ignored`]; only triangulated geometry is supported.

pub mod error;
pub mod parser;

pub use error::{Error, Result};
pub use parser::{parse_mtl_line, parse_obj_line, FaceIndices, MtlLine, ObjLine};
