//! The block model: ordered field assignments with nested values.

/// A single value assigned to a block field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    List(Vec<Value>),
    Block(Block),
}

impl Value {
    /// Human-readable name of the value's type, used in binding errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::List(_) => "list",
            Value::Block(_) => "block",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Value::Block(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Block> for Value {
    fn from(b: Block) -> Self {
        Value::Block(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// An ordered list of field assignments.
///
/// The same field may be assigned more than once; binders see every
/// assignment in declaration order, so for scalar fields the last one wins
/// and for singular collection entries each one appends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    entries: Vec<(String, Value)>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style assignment.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(field, value);
        self
    }

    /// Append an assignment.
    pub fn push(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((field.into(), value.into()));
    }

    /// Iterate assignments in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The last value assigned to `field`, if any.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Block {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_last_assignment() {
        let block = Block::new().with("name", "a").with("name", "b");
        assert_eq!(block.get("name"), Some(&Value::from("b")));
        assert_eq!(block.len(), 2);
    }

    #[test]
    fn entries_keep_declaration_order() {
        let block: Block = [("z", 1), ("a", 2), ("m", 3)].into_iter().collect();
        let names: Vec<&str> = block.entries().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn vec_converts_to_list() {
        let value = Value::from(vec!["a", "b"]);
        assert_eq!(value.type_name(), "list");
        assert_eq!(value.as_list().map(<[Value]>::len), Some(2));
    }
}
