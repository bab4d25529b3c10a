//! TOML documents
//!
//! Parsed with `toml_edit` so that table entries keep their written order.
//! Tables and inline tables become blocks, arrays become lists and arrays of
//! tables become lists of blocks:
//!
//! ```toml
//! [kubernetes]
//! offline = true
//!
//! [kubernetes.images.app]
//! name = "registry/app:1.0"
//!
//! [[kubernetes.mapping]]
//! kind = "Var"
//! filenameTypes = "foo, bar"
//! ```

use toml_edit::{DocumentMut, Item, Table, Value as TomlValue};

use super::DocumentFormat;
use crate::{Block, Error, Result, Value};

/// TOML document handler
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlFormat;

impl DocumentFormat for TomlFormat {
    fn name(&self) -> &'static str {
        "TOML"
    }

    fn parse_document(&self, content: &str) -> Result<Block> {
        let doc: DocumentMut = content.parse().map_err(|e: toml_edit::TomlError| Error::Parse {
            format: self.name().to_string(),
            message: e.to_string(),
        })?;
        Ok(table_to_block(doc.as_table()))
    }
}

fn table_to_block(table: &Table) -> Block {
    table
        .iter()
        .filter_map(|(key, item)| item_to_value(item).map(|v| (key, v)))
        .collect()
}

fn item_to_value(item: &Item) -> Option<Value> {
    match item {
        Item::None => None,
        Item::Value(value) => Some(convert(value)),
        Item::Table(table) => Some(Value::Block(table_to_block(table))),
        Item::ArrayOfTables(array) => Some(Value::List(
            array.iter().map(|t| Value::Block(table_to_block(t))).collect(),
        )),
    }
}

fn convert(value: &TomlValue) -> Value {
    match value {
        TomlValue::String(s) => Value::String(s.value().clone()),
        TomlValue::Integer(n) => Value::Integer(*n.value()),
        TomlValue::Float(n) => Value::Float(*n.value()),
        TomlValue::Boolean(b) => Value::Boolean(*b.value()),
        TomlValue::Datetime(dt) => Value::String(dt.value().to_string()),
        TomlValue::Array(array) => Value::List(array.iter().map(convert).collect()),
        TomlValue::InlineTable(table) => Value::Block(
            table
                .iter()
                .map(|(key, v)| (key, convert(v)))
                .collect(),
        ),
    }
}
