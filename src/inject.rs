//! Compiler-plugin configuration injection.
//!
//! Appends generated NullAway flags to the compiler plugin's `compilerArgs`
//! list inside the project's build model. The target plugin must already be
//! declared by the project; the configuration node and the argument list are
//! created on demand.

use crate::model::BuildSection;

/// Group identifier of the compiler plugin the flags are injected into.
pub const COMPILER_PLUGIN_GROUP: &str = "org.apache.maven.plugins";

/// Artifact name of the compiler plugin.
pub const COMPILER_PLUGIN_ARTIFACT: &str = "maven-compiler-plugin";

/// Node holding the compiler's argument list.
const COMPILER_ARGS_NODE: &str = "compilerArgs";

/// Leaf name for a single compiler argument.
const ARG_NODE: &str = "arg";

/// Injection failures.
#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    /// The compiler plugin is not declared by the project.
    #[error(
        "{group}:{artifact} not found in the project's build plugins; \
         add it under [[build.plugins]] in the descriptor before configuring NullAway"
    )]
    CompilerPluginMissing { group: String, artifact: String },
}

/// Identity key of the compiler plugin in the build section.
pub fn compiler_plugin_key() -> String {
    format!("{}:{}", COMPILER_PLUGIN_GROUP, COMPILER_PLUGIN_ARTIFACT)
}

/// Append `args` to the compiler plugin's argument list.
///
/// An empty list is a no-op. The plugin lookup is checked before any tree
/// mutation, so a missing plugin leaves the build section untouched. This
/// function only ever appends: pre-existing arguments are preserved
/// verbatim, and calling it twice with the same list appends a second copy
/// of every flag. The duplicates are intended behavior and must not be
/// collapsed; downstream builds may depend on the exact argument-list shape
/// across multiple plugin executions.
pub fn inject_compiler_args(build: &mut BuildSection, args: &[String]) -> Result<(), InjectError> {
    if args.is_empty() {
        return Ok(());
    }

    let key = compiler_plugin_key();
    let plugin = build
        .plugin_mut(&key)
        .ok_or_else(|| InjectError::CompilerPluginMissing {
            group: COMPILER_PLUGIN_GROUP.to_string(),
            artifact: COMPILER_PLUGIN_ARTIFACT.to_string(),
        })?;

    let configuration = plugin.configuration_mut_or_create();
    let compiler_args = configuration.child_mut_or_create(COMPILER_ARGS_NODE);
    for arg in args {
        compiler_args.append_leaf(ARG_NODE, arg);
    }

    Ok(())
}
