//! Error types for kubext-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown field(s) in {kind} block: {}", fields.join(", "))]
    UnknownFields { kind: String, fields: Vec<String> },

    #[error("Field '{field}' in {kind} block expects {expected}, found {found}")]
    TypeMismatch {
        kind: String,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Field '{field}' in {kind} block has invalid value '{value}': {message}")]
    InvalidValue {
        kind: String,
        field: String,
        value: String,
        message: String,
    },

    #[error("Failed to parse {format} document: {message}")]
    Parse { format: String, message: String },

    #[error("Unsupported document format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Filesystem error: {0}")]
    Fs(#[from] kubext_fs::Error),
}

impl Error {
    pub(crate) fn mismatch(kind: &str, field: &str, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            kind: kind.to_string(),
            field: field.to_string(),
            expected,
            found,
        }
    }
}
