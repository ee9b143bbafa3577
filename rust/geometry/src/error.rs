use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for mesh assembly operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling a mesh
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open {path}: {source}")]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("index {index} out of range for {table} table of length {len}")]
    IndexOutOfRange {
        table: &'static str,
        index: u32,
        len: usize,
    },

    #[error("`{directive}` directive with no open material")]
    MalformedMaterialLine { directive: &'static str },

    #[error("failed to load texture {path}: {reason}")]
    TextureLoad { path: PathBuf, reason: String },

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: obj_lite_core::Error,
    },
}
