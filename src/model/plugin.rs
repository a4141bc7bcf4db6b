//! Build plugins declared by the project descriptor.

use serde::{Deserialize, Serialize};

use super::node::ConfigNode;

/// Name of a plugin's configuration root node.
const CONFIGURATION_NODE: &str = "configuration";

/// A build plugin declared by the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPlugin {
    /// Plugin provider / group identifier.
    pub group: String,

    /// Plugin artifact name.
    pub artifact: String,

    /// Plugin configuration tree, if the project declared one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigNode>,
}

impl BuildPlugin {
    /// Two-part identity key, `"<group>:<artifact>"`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    /// Get the configuration root, attaching an empty `configuration` node
    /// if the plugin declared none.
    pub fn configuration_mut_or_create(&mut self) -> &mut ConfigNode {
        self.configuration
            .get_or_insert_with(|| ConfigNode::new(CONFIGURATION_NODE))
    }
}

/// The `[build]` section of the descriptor: declared build plugins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildSection {
    /// Declared plugins, in declaration order.
    #[serde(default)]
    pub plugins: Vec<BuildPlugin>,
}

impl BuildSection {
    /// Find a plugin by its `"<group>:<artifact>"` key.
    pub fn plugin(&self, key: &str) -> Option<&BuildPlugin> {
        self.plugins.iter().find(|plugin| plugin.key() == key)
    }

    /// Find a plugin by key, mutably.
    pub fn plugin_mut(&mut self, key: &str) -> Option<&mut BuildPlugin> {
        self.plugins.iter_mut().find(|plugin| plugin.key() == key)
    }
}
