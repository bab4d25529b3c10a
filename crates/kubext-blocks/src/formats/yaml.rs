//! YAML documents
//!
//! Mappings become blocks and sequences become lists. Mapping order is kept
//! as written. Null values are treated as absent assignments and skipped.

use serde_yaml::Value as YamlValue;

use super::DocumentFormat;
use crate::{Block, Error, Result, Value};

/// YAML document handler
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlFormat;

impl DocumentFormat for YamlFormat {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn parse_document(&self, content: &str) -> Result<Block> {
        if content.trim().is_empty() {
            return Ok(Block::new());
        }
        let root: YamlValue = serde_yaml::from_str(content).map_err(|e| self.error(e))?;
        match convert(&root)? {
            Some(Value::Block(block)) => Ok(block),
            None => Ok(Block::new()),
            Some(other) => Err(Error::Parse {
                format: self.name().to_string(),
                message: format!("document root must be a mapping, found {}", other.type_name()),
            }),
        }
    }
}

impl YamlFormat {
    fn error(&self, message: impl ToString) -> Error {
        Error::Parse {
            format: self.name().to_string(),
            message: message.to_string(),
        }
    }
}

fn convert(value: &YamlValue) -> Result<Option<Value>> {
    let converted = match value {
        YamlValue::Null => return Ok(None),
        YamlValue::Bool(b) => Value::Boolean(*b),
        YamlValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                if let Some(v) = convert(item)? {
                    list.push(v);
                }
            }
            Value::List(list)
        }
        YamlValue::Mapping(map) => {
            let mut block = Block::new();
            for (key, item) in map {
                let key = match key {
                    YamlValue::String(s) => s.clone(),
                    YamlValue::Number(n) => n.to_string(),
                    YamlValue::Bool(b) => b.to_string(),
                    _ => return Err(YamlFormat.error("mapping keys must be scalars")),
                };
                if let Some(v) = convert(item)? {
                    block.push(key, v);
                }
            }
            Value::Block(block)
        }
        YamlValue::Tagged(tagged) => return convert(&tagged.value),
    };
    Ok(Some(converted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_order_is_preserved() {
        let block = YamlFormat
            .parse_document("zeta: 1\nalpha: 2\nmid: 3\n")
            .unwrap();
        let keys: Vec<&str> = block.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn nulls_are_skipped() {
        let block = YamlFormat.parse_document("a: ~\nb: 1\n").unwrap();
        assert!(block.get("a").is_none());
        assert_eq!(block.get("b"), Some(&Value::Integer(1)));
    }

    #[test]
    fn scalar_root_is_rejected() {
        let err = YamlFormat.parse_document("just a string\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "got: {err}");
    }
}
