use thiserror::Error;

/// Result type for directive parsing
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while classifying a single OBJ/MTL line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A token that must parse as a float or 1-based index does not.
    /// An absent mandatory field is reported with an empty `field`.
    #[error("malformed numeric field {field:?} in `{directive}` directive")]
    MalformedNumericField {
        directive: &'static str,
        field: String,
    },
}

impl Error {
    pub(crate) fn numeric(directive: &'static str, field: &str) -> Self {
        Error::MalformedNumericField {
            directive,
            field: field.to_string(),
        }
    }
}
