//! Translation tree nodes
//!
//! A language's dictionary is a tree whose internal nodes are sections and
//! whose leaves are display strings.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

/// One node of a language's translation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    Leaf(String),
    Branch(HashMap<String, TranslationNode>),
}

impl TranslationNode {
    /// Convert a parsed JSON value into a translation node
    ///
    /// Strings become leaves and objects become branches. Numbers and booleans
    /// are kept as leaves holding their textual form. `null` and arrays carry
    /// no displayable string and are dropped, returning `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        Self::from_json_at(value, "")
    }

    fn from_json_at(value: &Value, key_path: &str) -> Option<Self> {
        match value {
            Value::String(s) => Some(TranslationNode::Leaf(s.clone())),
            Value::Number(n) => Some(TranslationNode::Leaf(n.to_string())),
            Value::Bool(b) => Some(TranslationNode::Leaf(b.to_string())),
            Value::Object(map) => {
                let mut children = HashMap::with_capacity(map.len());
                for (key, child) in map {
                    let child_path = if key_path.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", key_path, key)
                    };
                    if let Some(node) = Self::from_json_at(child, &child_path) {
                        children.insert(key.clone(), node);
                    }
                }
                Some(TranslationNode::Branch(children))
            }
            Value::Null | Value::Array(_) => {
                warn!(key = %key_path, "Skipping translation entry that is neither text nor a section");
                None
            }
        }
    }

    /// Child node for a key segment; leaves have no children
    pub fn child(&self, segment: &str) -> Option<&TranslationNode> {
        match self {
            TranslationNode::Branch(children) => children.get(segment),
            TranslationNode::Leaf(_) => None,
        }
    }

    /// Text of a leaf node
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TranslationNode::Leaf(text) => Some(text.as_str()),
            TranslationNode::Branch(_) => None,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, TranslationNode::Branch(_))
    }

    /// Recursively count leaves under this node
    pub fn leaf_count(&self) -> usize {
        match self {
            TranslationNode::Leaf(_) => 1,
            TranslationNode::Branch(children) => children.values().map(Self::leaf_count).sum(),
        }
    }

    /// Dotted keys of every leaf under this node
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_leaf_keys("", &mut keys);
        keys
    }

    fn collect_leaf_keys(&self, prefix: &str, keys: &mut Vec<String>) {
        match self {
            TranslationNode::Leaf(_) => keys.push(prefix.to_string()),
            TranslationNode::Branch(children) => {
                for (key, child) in children {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    child.collect_leaf_keys(&path, keys);
                }
            }
        }
    }
}
