//! Command implementations for kubext-cli

pub mod keys;
pub mod manifest;
pub mod resolve;

pub use keys::run_keys;
pub use manifest::run_manifest;
pub use resolve::run_resolve;
