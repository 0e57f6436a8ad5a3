//! Nested translation trees and dotted key-path resolution.
//!
//! A locale document is a JSON object whose values are either translated
//! strings or further objects. Loading converts it into a [`LocaleTree`] of
//! typed [`LocaleNode`]s so lookups never inspect untyped JSON.
//!
//! Resolution is deliberately forgiving: a path that does not end at a string
//! leaf resolves to the path itself, so a missing translation shows up as a
//! visible key in the interface instead of breaking the page.

mod error;
pub mod parity;

pub use error::LocaleError;

use camino::Utf8Path;
use indexmap::IndexMap;
use serde_json::Value;
use std::fs;

/// Separator between segments of a key path.
pub const KEY_SEPARATOR: char = '.';

/// A single entry in a locale tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleNode {
    /// A translated string.
    Leaf(String),
    /// A nested group of translations.
    Branch(LocaleTree),
}

/// Immutable translations for one language, keyed by segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTree {
    entries: IndexMap<String, LocaleNode>,
}

impl LocaleTree {
    /// Build a tree from pre-constructed entries.
    #[must_use]
    pub const fn from_entries(entries: IndexMap<String, LocaleNode>) -> Self {
        Self { entries }
    }

    /// Parse a JSON locale document.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Parse`] when the text is not JSON, and the
    /// errors of [`LocaleTree::from_value`] when its shape is invalid.
    pub fn from_json_str(text: &str) -> Result<Self, LocaleError> {
        let value: Value = serde_json::from_str(text).map_err(LocaleError::Parse)?;
        Self::from_value(value)
    }

    /// Read and parse a JSON locale document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Io`] when the file cannot be read, otherwise
    /// the errors of [`LocaleTree::from_json_str`].
    pub fn from_path(path: &Utf8Path) -> Result<Self, LocaleError> {
        let text = fs::read_to_string(path).map_err(|source| LocaleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Convert an already-parsed JSON value into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::RootNotObject`] when `value` is not an object
    /// and [`LocaleError::InvalidLeaf`] when any nested value is neither a
    /// string nor an object.
    pub fn from_value(value: Value) -> Result<Self, LocaleError> {
        match value {
            Value::Object(map) => convert_object(map, ""),
            other => Err(LocaleError::RootNotObject {
                found: json_kind(&other),
            }),
        }
    }

    /// Return the node stored directly under `segment`.
    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&LocaleNode> {
        self.entries.get(segment)
    }

    /// Iterate over the top-level entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the string leaf addressed by `path`.
    ///
    /// Returns `None` when any segment is missing or empty, when descent
    /// reaches a leaf before the path ends, or when the path ends on a
    /// branch.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&str> {
        let mut segments = path.split(KEY_SEPARATOR);
        let first = segments.next().filter(|segment| !segment.is_empty())?;
        let mut node = self.entries.get(first)?;
        for segment in segments {
            if segment.is_empty() {
                return None;
            }
            node = match node {
                LocaleNode::Branch(tree) => tree.entries.get(segment)?,
                LocaleNode::Leaf(_) => return None,
            };
        }
        match node {
            LocaleNode::Leaf(text) => Some(text.as_str()),
            LocaleNode::Branch(_) => None,
        }
    }

    /// Resolve `path` to its translation, or to `path` itself when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pharmadesk::locale_tree::LocaleTree;
    ///
    /// let tree = LocaleTree::from_json_str(r#"{"users": {"title": "Users"}}"#)?;
    /// assert_eq!(tree.resolve("users.title"), "Users");
    /// assert_eq!(tree.resolve("users.missing"), "users.missing");
    /// assert_eq!(tree.resolve("users"), "users");
    /// # Ok::<(), pharmadesk::locale_tree::LocaleError>(())
    /// ```
    #[must_use]
    pub fn resolve<'a>(&'a self, path: &'a str) -> &'a str {
        self.lookup(path).unwrap_or(path)
    }

    /// Every dotted path in the tree paired with the kind of node it names.
    ///
    /// Branches are listed before their children, in document order.
    #[must_use]
    pub fn paths(&self) -> Vec<(String, NodeKind)> {
        let mut out = Vec::new();
        collect_paths(self, "", &mut out);
        out
    }

    /// Dotted paths of every string leaf, in document order.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<String> {
        self.paths()
            .into_iter()
            .filter_map(|(path, kind)| (kind == NodeKind::Leaf).then_some(path))
            .collect()
    }
}

/// Resolve `path` against `tree`, falling back to the path string.
#[must_use]
pub fn resolve<'a>(tree: &'a LocaleTree, path: &'a str) -> &'a str {
    tree.resolve(path)
}

/// Shape of the node at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A string translation.
    Leaf,
    /// A nested group.
    Branch,
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}{KEY_SEPARATOR}{key}")
    }
}

fn collect_paths(tree: &LocaleTree, prefix: &str, out: &mut Vec<(String, NodeKind)>) {
    for (key, node) in &tree.entries {
        let path = join_path(prefix, key);
        match node {
            LocaleNode::Leaf(_) => out.push((path, NodeKind::Leaf)),
            LocaleNode::Branch(child) => {
                out.push((path.clone(), NodeKind::Branch));
                collect_paths(child, &path, out);
            }
        }
    }
}

fn convert_object(
    map: serde_json::Map<String, Value>,
    prefix: &str,
) -> Result<LocaleTree, LocaleError> {
    let mut entries = IndexMap::with_capacity(map.len());
    for (key, value) in map {
        let path = join_path(prefix, &key);
        let node = match value {
            Value::String(text) => LocaleNode::Leaf(text),
            Value::Object(child) => LocaleNode::Branch(convert_object(child, &path)?),
            other => {
                return Err(LocaleError::InvalidLeaf {
                    path,
                    found: json_kind(&other),
                });
            }
        };
        entries.insert(key, node);
    }
    Ok(LocaleTree { entries })
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
