//! Typed binding of blocks into sub-configuration values.
//!
//! Binding walks a block's assignments in order and hands each one to the
//! target's [`Bind::bind_field`]. Type mismatches abort immediately; unknown
//! field names are collected and reported together once the block has been
//! walked.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{Block, Error, Result, Value};

/// Outcome of offering one assignment to a binder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Bound,
    Unknown,
}

/// A target that can absorb the assignments of a block.
pub trait Bind {
    /// Block name used in error messages, e.g. `access` or `image`.
    const KIND: &'static str;

    /// Apply one assignment, or report the field as unknown.
    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding>;
}

/// One assignment inside a block, with typed accessors.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    kind: &'static str,
    name: &'a str,
    value: &'a Value,
}

impl<'a> Field<'a> {
    pub fn new(kind: &'static str, name: &'a str, value: &'a Value) -> Self {
        Self { kind, name, value }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Build a type-mismatch error for this field.
    pub fn mismatch(&self, expected: &'static str) -> Error {
        Error::mismatch(self.kind, self.name, expected, self.value.type_name())
    }

    fn invalid(&self, value: impl Display, message: impl Display) -> Error {
        Error::InvalidValue {
            kind: self.kind.to_string(),
            field: self.name.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        }
    }

    pub fn string(&self) -> Result<String> {
        self.value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.mismatch("string"))
    }

    pub fn boolean(&self) -> Result<bool> {
        match self.value {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch("boolean")),
        }
    }

    /// An integer narrowed to `T`; out-of-range values are rejected.
    pub fn integer<T>(&self) -> Result<T>
    where
        T: TryFrom<i64>,
        T::Error: Display,
    {
        match self.value {
            Value::Integer(n) => T::try_from(*n).map_err(|e| self.invalid(n, e)),
            _ => Err(self.mismatch("integer")),
        }
    }

    pub fn path(&self) -> Result<PathBuf> {
        self.value
            .as_str()
            .map(PathBuf::from)
            .ok_or_else(|| self.mismatch("path string"))
    }

    /// A string parsed with [`FromStr`], e.g. an enumerated setting.
    pub fn parse<T>(&self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.value.as_str().ok_or_else(|| self.mismatch("string"))?;
        raw.parse().map_err(|e| self.invalid(raw, e))
    }

    pub fn strings(&self) -> Result<Vec<String>> {
        let items = self.value.as_list().ok_or_else(|| self.mismatch("list of strings"))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.mismatch("list of strings"))
            })
            .collect()
    }

    /// A block of scalar assignments flattened into a string map.
    pub fn string_map(&self) -> Result<BTreeMap<String, String>> {
        let block = self.block()?;
        block
            .entries()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Integer(n) => n.to_string(),
                    Value::Float(n) => n.to_string(),
                    Value::Boolean(b) => b.to_string(),
                    Value::List(_) | Value::Block(_) => {
                        return Err(self.mismatch("block of scalar values"));
                    }
                };
                Ok((key.to_string(), text))
            })
            .collect()
    }

    pub fn block(&self) -> Result<&'a Block> {
        self.value.as_block().ok_or_else(|| self.mismatch("block"))
    }

    /// Bind a nested block into a fresh `T`.
    pub fn bind<T: Bind + Default>(&self) -> Result<T> {
        bind(self.block()?)
    }

    /// Bind a list of blocks into fresh `T`s, preserving order.
    pub fn bind_list<T: Bind + Default>(&self) -> Result<Vec<T>> {
        let items = self.value.as_list().ok_or_else(|| self.mismatch("list of blocks"))?;
        items
            .iter()
            .map(|item| {
                item.as_block()
                    .ok_or_else(|| self.mismatch("list of blocks"))
                    .and_then(bind)
            })
            .collect()
    }

    /// The blocks carried by this field: a single block, or a list of blocks.
    pub fn blocks(&self) -> Result<Vec<&'a Block>> {
        match self.value {
            Value::Block(block) => Ok(vec![block]),
            Value::List(items) => items
                .iter()
                .map(|item| item.as_block().ok_or_else(|| self.mismatch("block or list of blocks")))
                .collect(),
            _ => Err(self.mismatch("block or list of blocks")),
        }
    }
}

/// Apply every assignment of `block` to an existing target.
pub fn bind_into<T: Bind>(target: &mut T, block: &Block) -> Result<()> {
    let mut unknown: Vec<String> = Vec::new();
    for (name, value) in block.entries() {
        if target.bind_field(Field::new(T::KIND, name, value))? == Binding::Unknown
            && !unknown.iter().any(|u| u == name)
        {
            unknown.push(name.to_string());
        }
    }

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(Error::UnknownFields {
            kind: T::KIND.to_string(),
            fields: unknown,
        })
    }
}

/// Bind a block into a fresh `T`.
pub fn bind<T: Bind + Default>(block: &Block) -> Result<T> {
    let mut target = T::default();
    bind_into(&mut target, block)?;
    Ok(target)
}

/// Bind each block individually, preserving order.
pub fn bind_all<'b, T, I>(blocks: I) -> Result<Vec<T>>
where
    T: Bind + Default,
    I: IntoIterator<Item = &'b Block>,
{
    blocks.into_iter().map(bind).collect()
}
