//! Configuration blocks and typed binding for kubext.
//!
//! A [`Block`] is an ordered list of field assignments, the in-memory form of
//! one `name { ... }` section of the build script DSL. Blocks are produced by
//! the document front-ends in [`formats`] or assembled directly in code.
//!
//! # Binding
//!
//! Every sub-configuration kind implements [`Bind`], a visitor that maps a
//! field name to a typed setter:
//!
//! ```
//! use kubext_blocks::{Bind, Binding, Block, Field, bind};
//!
//! #[derive(Debug, Default)]
//! struct Machine {
//!     name: Option<String>,
//!     auto_create: Option<bool>,
//! }
//!
//! impl Bind for Machine {
//!     const KIND: &'static str = "machine";
//!
//!     fn bind_field(&mut self, field: Field<'_>) -> kubext_blocks::Result<Binding> {
//!         match field.name() {
//!             "name" => self.name = Some(field.string()?),
//!             "autoCreate" => self.auto_create = Some(field.boolean()?),
//!             _ => return Ok(Binding::Unknown),
//!         }
//!         Ok(Binding::Bound)
//!     }
//! }
//!
//! let block = Block::new().with("name", "default").with("autoCreate", true);
//! let machine: Machine = bind(&block).unwrap();
//! assert_eq!(machine.name.as_deref(), Some("default"));
//!
//! let err = bind::<Machine>(&Block::new().with("nmae", "x")).unwrap_err();
//! assert!(err.to_string().contains("nmae"));
//! ```
//!
//! # Repeatable collections
//!
//! [`Repeatable`] holds list-valued settings such as images. Singular
//! declarations append; plural declarations (a block of named sub-blocks, or
//! an explicit list of blocks) replace whatever was declared before.

pub mod bind;
pub mod block;
pub mod error;
pub mod formats;
pub mod repeat;

pub use bind::{Bind, Binding, Field, bind, bind_all, bind_into};
pub use block::{Block, Value};
pub use error::{Error, Result};
pub use formats::{DocumentFormat, TomlFormat, YamlFormat, load_document};
pub use repeat::Repeatable;
