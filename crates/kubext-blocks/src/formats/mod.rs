//! Document front-ends producing blocks
//!
//! Build scripts are read from TOML or YAML documents. Each handler turns the
//! whole document into a root [`Block`] whose entries keep the order in which
//! they were written, which is the order collection items are bound in.

pub mod toml;
pub mod yaml;

use std::path::Path;

use crate::{Block, Error, Result};

/// Parser for one document syntax
pub trait DocumentFormat: Send + Sync {
    /// Display name used in error messages
    fn name(&self) -> &'static str;

    /// Parse an entire document into its root block
    fn parse_document(&self, content: &str) -> Result<Block>;
}

pub use self::toml::TomlFormat;
pub use self::yaml::YamlFormat;

/// Select a handler from a file extension.
///
/// - `.toml` -> TOML
/// - `.yaml`, `.yml` -> YAML
pub fn format_for_path(path: &Path) -> Result<Box<dyn DocumentFormat>> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "toml" => Ok(Box::new(TomlFormat)),
        "yaml" | "yml" => Ok(Box::new(YamlFormat)),
        _ => Err(Error::UnsupportedFormat { extension }),
    }
}

/// Read and parse a document, choosing the format from its extension.
pub fn load_document(path: &Path) -> Result<Block> {
    let format = format_for_path(path)?;
    let content = kubext_fs::io::read_text(path)?;
    let block = format.parse_document(&content)?;
    tracing::debug!(?path, format = format.name(), entries = block.len(), "Loaded document");
    Ok(block)
}
