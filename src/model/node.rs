//! Generic named-node configuration tree.
//!
//! Plugin configuration is an ordered tree of named nodes, each with an
//! optional text value and an ordered list of children. The tree is owned by
//! the project's build model; this module exposes exactly the two mutations
//! the injector needs (get-or-create a child by name, append a leaf) and
//! nothing that removes or reorders existing nodes.

use serde::{Deserialize, Serialize};

/// A named node in a plugin configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigNode {
    /// Node name (e.g. "configuration", "compilerArgs", "arg").
    pub name: String,

    /// Text value, for leaf nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Ordered child nodes. Order is preserved verbatim: downstream tooling
    /// consumes argument lists in exactly this order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Create an empty interior node.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Create a leaf node holding a text value.
    pub fn leaf(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value.to_string()),
            children: Vec::new(),
        }
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&ConfigNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Get a direct child by name, creating an empty one at the end of the
    /// child list if none exists.
    pub fn child_mut_or_create(&mut self, name: &str) -> &mut ConfigNode {
        let index = match self.children.iter().position(|child| child.name == name) {
            Some(index) => index,
            None => {
                self.children.push(ConfigNode::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Append a leaf child holding `value`.
    pub fn append_leaf(&mut self, name: &str, value: &str) {
        self.children.push(ConfigNode::leaf(name, value));
    }
}
