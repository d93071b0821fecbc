use std::collections::HashMap;
use serde_yaml::Value;

/// Metadata extracted from a document's leading front matter block.
///
/// Only `title` and `description` drive rendering; every other key is
/// kept in `custom` untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// Document title
    pub title: Option<String>,

    /// Page description
    pub description: Option<String>,

    /// Remaining keys
    pub custom: HashMap<String, Value>,
}

impl FrontMatter {
    /// Build front matter from an already parsed YAML mapping.
    ///
    /// Anything that is not a mapping yields empty front matter.
    pub fn from_yaml(value: Value) -> Self {
        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            _ => return FrontMatter::default(),
        };

        let mut front_matter = FrontMatter::default();
        for (key, value) in mapping {
            let key = match scalar_to_string(&key) {
                Some(key) => key,
                None => continue,
            };

            match key.as_str() {
                "title" => front_matter.title = scalar_to_string(&value),
                "description" => front_matter.description = scalar_to_string(&value),
                _ => {
                    front_matter.custom.insert(key, value);
                }
            }
        }

        front_matter
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.custom.is_empty()
    }
}

/// String form of a scalar YAML value; null and collections have none
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}
