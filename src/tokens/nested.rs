//! Nesting dot paths into a JSON object tree

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Key holding a value whose path is also a prefix of other paths
pub const VALUE_KEY: &str = "_value";

/// Placeholder leaf written into generated exports
pub const PLACEHOLDER: &str = "/* value */";

/// A path segment: its own leaf, if any, and its children
#[derive(Debug, Default)]
struct Node {
    value: Option<Value>,
    children: IndexMap<String, Node>,
}

impl Node {
    fn into_value(self) -> Value {
        if self.children.is_empty() {
            return self.value.unwrap_or_else(|| Value::Object(Map::new()));
        }
        let mut map = Map::new();
        if let Some(value) = self.value {
            map.insert(VALUE_KEY.to_string(), value);
        }
        for (key, child) in self.children {
            map.insert(key, child.into_value());
        }
        Value::Object(map)
    }
}

/// Nest dot paths, computing each leaf from its path segments
///
/// Empty paths are skipped. When a path is a prefix of another, the shorter
/// path's leaf is stored under `_value` inside the longer path's object,
/// whichever order the paths arrive in.
pub fn build_nested_with<'a, I, F>(paths: I, mut leaf: F) -> Value
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&[&str]) -> Value,
{
    let mut root = Node::default();
    for path in paths {
        if path.is_empty() {
            continue;
        }
        let segments: Vec<&str> = path.split('.').collect();
        let mut current = &mut root;
        for segment in &segments {
            current = current.children.entry(segment.to_string()).or_default();
        }
        current.value = Some(leaf(&segments));
    }
    root.into_value()
}

/// Nest dot paths with the export placeholder as every leaf
///
/// ```
/// use design_engineer::tokens::build_nested_object;
///
/// let tree = build_nested_object(["a", "a.b"]);
/// assert_eq!(tree["a"]["_value"], "/* value */");
/// assert_eq!(tree["a"]["b"], "/* value */");
/// ```
pub fn build_nested_object<'a>(paths: impl IntoIterator<Item = &'a str>) -> Value {
    build_nested_with(paths, |_| Value::String(PLACEHOLDER.to_string()))
}
