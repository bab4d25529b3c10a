//! Error types for kubext-core

/// Result type for kubext-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or resolving the extension
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A property override could not be parsed to its setting's kind
    #[error("Property {key} has invalid {kind} value '{value}'")]
    Parse {
        key: String,
        value: String,
        kind: &'static str,
    },

    /// A string did not name a member of an enumerated setting
    #[error("Unknown {kind} '{value}', expected one of: {expected}")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A document was loaded but holds no extension block
    #[error("Document has no '{name}' block")]
    MissingBlock { name: String },

    // Transparent wrappers for underlying crate errors
    /// Block binding error from kubext-blocks
    #[error(transparent)]
    Binding(#[from] kubext_blocks::Error),

    /// Filesystem error from kubext-fs
    #[error(transparent)]
    Fs(#[from] kubext_fs::Error),
}
