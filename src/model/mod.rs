//! Build model: the project-owned structures the injector mutates.
//!
//! The model is deliberately narrow, a named-node tree plus a plugin list,
//! so the external build tool's side of the contract stays small and easy to
//! construct in tests.

mod node;
mod plugin;

pub use node::ConfigNode;
pub use plugin::{BuildPlugin, BuildSection};
