//! Merge policy for repeatable (list-valued) declarations.
//!
//! A collection can be declared three ways:
//!
//! ```text
//! images {                 // plural block of named sub-blocks: replaces
//!     app { ... }
//!     sidecar { ... }
//! }
//! images([{ ... }, { ... }])   // plural list of blocks: replaces
//! image { ... }            // singular: appends
//! ```
//!
//! Plural declarations are authoritative resets: anything appended earlier
//! through the singular form is discarded.

use crate::bind::{Field, bind, bind_all};
use crate::{Bind, Block, Result, Value};

/// An ordered, possibly undeclared, collection of bound items.
#[derive(Debug, Clone, PartialEq)]
pub struct Repeatable<T> {
    items: Option<Vec<T>>,
}

impl<T> Default for Repeatable<T> {
    fn default() -> Self {
        Self { items: None }
    }
}

impl<T: Bind + Default> Repeatable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Singular form: bind one block and append it, creating the list if unset.
    pub fn append(&mut self, block: &Block) -> Result<()> {
        let item = bind(block)?;
        self.items.get_or_insert_with(Vec::new).push(item);
        tracing::debug!(kind = T::KIND, len = self.len(), "Appended singular declaration");
        Ok(())
    }

    /// Plural list form: bind every block and replace the collection.
    pub fn replace_with_list<'b, I>(&mut self, blocks: I) -> Result<()>
    where
        I: IntoIterator<Item = &'b Block>,
    {
        let items = bind_all(blocks)?;
        tracing::debug!(kind = T::KIND, len = items.len(), "Replaced collection from list");
        self.items = Some(items);
        Ok(())
    }

    /// Plural block form: each named child block is bound in declaration order
    /// and the result replaces the collection.
    ///
    /// Children named `singular` are singular declarations nested in the
    /// plural block and append instead. When the block holds only such
    /// children (or nothing at all) the collection is left as those appends
    /// made it. The collection is only touched once every child has bound.
    pub fn replace_with_block(&mut self, block: &Block, singular: &str) -> Result<()> {
        let mut appended = Vec::new();
        let mut named = Vec::new();
        for (name, value) in block.entries() {
            let field = Field::new(T::KIND, name, value);
            if name == singular {
                appended.extend(bind_all::<T, _>(field.blocks()?)?);
            } else {
                named.push(field.bind()?);
            }
        }

        if !named.is_empty() {
            tracing::debug!(kind = T::KIND, len = named.len(), "Replaced collection from named blocks");
            self.items = Some(named);
        } else if !appended.is_empty() {
            self.items.get_or_insert_with(Vec::new).extend(appended);
            tracing::debug!(kind = T::KIND, len = self.len(), "Appended nested singular declarations");
        }
        Ok(())
    }

    /// Dispatch a plural declaration by shape: a block of named children or a
    /// list of blocks.
    pub fn replace(&mut self, field: Field<'_>, singular: &str) -> Result<()> {
        match field.value() {
            Value::Block(block) => self.replace_with_block(block, singular),
            Value::List(_) => self.replace_with_list(field.blocks()?),
            _ => Err(field.mismatch("block or list of blocks")),
        }
    }

    /// Dispatch a singular declaration: one block, or a list of blocks each
    /// appended in order.
    pub fn extend(&mut self, field: Field<'_>) -> Result<()> {
        let items = bind_all::<T, _>(field.blocks()?)?;
        self.items.get_or_insert_with(Vec::new).extend(items);
        tracing::debug!(kind = T::KIND, len = self.len(), "Appended singular declarations");
        Ok(())
    }
}

impl<T> Repeatable<T> {
    /// The declared items, or `None` if the collection was never declared.
    pub fn items(&self) -> Option<&[T]> {
        self.items.as_deref()
    }

    pub fn is_declared(&self) -> bool {
        self.items.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Binding, Error};

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Item {
        name: Option<String>,
    }

    impl Bind for Item {
        const KIND: &'static str = "item";

        fn bind_field(&mut self, field: Field<'_>) -> crate::Result<Binding> {
            match field.name() {
                "name" => self.name = Some(field.string()?),
                _ => return Ok(Binding::Unknown),
            }
            Ok(Binding::Bound)
        }
    }

    fn named(name: &str) -> Block {
        Block::new().with("name", name)
    }

    fn names(c: &Repeatable<Item>) -> Vec<String> {
        c.items()
            .unwrap_or_default()
            .iter()
            .filter_map(|i| i.name.clone())
            .collect()
    }

    #[test]
    fn undeclared_collection_has_no_items() {
        let c = Repeatable::<Item>::new();
        assert!(!c.is_declared());
        assert!(c.items().is_none());
    }

    #[test]
    fn singular_appends_lazily() {
        let mut c = Repeatable::<Item>::new();
        c.append(&named("a")).unwrap();
        c.append(&named("b")).unwrap();
        assert_eq!(names(&c), vec!["a", "b"]);
    }

    #[test]
    fn plural_list_discards_singular_items() {
        let mut c = Repeatable::<Item>::new();
        c.append(&named("a")).unwrap();
        c.append(&named("b")).unwrap();
        c.replace_with_list([&named("c")]).unwrap();
        assert_eq!(names(&c), vec!["c"]);
    }

    #[test]
    fn plural_block_discards_singular_items() {
        let mut c = Repeatable::<Item>::new();
        c.append(&named("a")).unwrap();
        c.replace_with_block(&Block::new().with("first", named("x")), "item")
            .unwrap();
        assert_eq!(names(&c), vec!["x"]);
    }

    #[test]
    fn nested_singular_children_append() {
        let mut c = Repeatable::<Item>::new();
        c.append(&named("a")).unwrap();
        let plural = Block::new().with("item", named("b")).with("item", named("c"));
        c.replace_with_block(&plural, "item").unwrap();
        assert_eq!(names(&c), vec!["a", "b", "c"]);
    }

    #[test]
    fn non_block_child_is_rejected() {
        let mut c = Repeatable::<Item>::new();
        let err = c
            .replace_with_block(&Block::new().with("first", "oops"), "item")
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }), "got: {err}");
    }
}
