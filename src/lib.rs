//! NullAway compiler-configuration wiring.
//!
//! This crate wires the NullAway nullability check into a project's compiler
//! configuration: it reads declarative options from the project descriptor,
//! validates them, renders them as Error Prone command-line flags, and
//! appends the flags to the compiler plugin's argument list in the build
//! model.

pub mod descriptor;
pub mod inject;
pub mod model;
pub mod pipeline;

pub use descriptor::{DescriptorError, ProjectDescriptor};
pub use inject::{compiler_plugin_key, inject_compiler_args, InjectError};
pub use model::{BuildPlugin, BuildSection, ConfigNode};
pub use nullaway_args::{generate, validate, CheckSeverity, NullAwayOptions, ValidationError};
pub use pipeline::{ConfigureReport, PipelineConfig, PipelineError};
