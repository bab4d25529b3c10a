//! Filesystem abstraction for kubext
//!
//! Provides the project directory layout used to compute path defaults,
//! text reading with path-aware errors, and Java-style `.properties` parsing.

pub mod error;
pub mod io;
pub mod layout;
pub mod properties;

pub use error::{Error, Result};
pub use layout::ProjectLayout;
pub use properties::{parse_properties, read_properties};
