//! Configure pipeline for NullAway wiring.
//!
//! One build invocation runs the pipeline once: load the descriptor, apply
//! CLI overrides, validate the options, generate the Error Prone flags, and
//! inject them into the compiler plugin's argument list. Everything is
//! synchronous and in-memory; the only I/O is reading the descriptor and
//! (in the CLI) writing the report.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nullaway_args::{generate, validate, CheckSeverity, OptionError, ValidationError};

use crate::descriptor::{DescriptorError, ProjectDescriptor};
use crate::inject::{compiler_plugin_key, inject_compiler_args, InjectError};
use crate::model::BuildPlugin;

/// Schema version for the configure report.
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier.
pub const SCHEMA_ID: &str = "nullaway-wire/report@1";

/// Pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("invalid override: {0}")]
    Override(#[from] OptionError),

    #[error("configuration error: {0}")]
    Validation(#[from] ValidationError),

    #[error("injection error: {0}")]
    Inject(#[from] InjectError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PipelineError {
    /// Exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Descriptor(_) => 1,
            PipelineError::Override(_) => 1,
            PipelineError::Validation(_) => 10,
            PipelineError::Inject(_) => 20,
            PipelineError::Io(_) => 1,
            PipelineError::Serialization(_) => 1,
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path to the project descriptor.
    pub descriptor_path: PathBuf,

    /// CLI option overrides, applied in order after the descriptor is
    /// parsed.
    pub overrides: Vec<(String, String)>,

    /// Print a progress line per stage and list every generated flag.
    pub verbose: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            descriptor_path: PathBuf::from("nullaway.toml"),
            overrides: Vec::new(),
            verbose: false,
        }
    }
}

/// Descriptor provenance carried in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorSource {
    /// Descriptor file path as given.
    pub path: String,

    /// SHA-256 digest of the raw descriptor bytes.
    pub digest: String,
}

/// Configure report artifact.
///
/// Emitted as JSON after a successful run so downstream tooling (and humans)
/// can see exactly which flags were produced from which descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigureReport {
    /// Schema version.
    pub schema_version: u32,

    /// Schema identifier.
    pub schema_id: String,

    /// When this report was produced.
    pub created_at: DateTime<Utc>,

    /// Effective severity. Absent means the checker's default severity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<CheckSeverity>,

    /// Generated flags, in emission order.
    pub flags: Vec<String>,

    /// Whether the flags were injected into the compiler plugin. False when
    /// the check is disabled (severity OFF): flags are still generated and
    /// reported, but the build model is left untouched.
    pub injected: bool,

    /// Descriptor provenance.
    pub source: DescriptorSource,

    /// The compiler plugin entry after injection (present when injected).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler_plugin: Option<BuildPlugin>,
}

impl ConfigureReport {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the report to a file.
    pub fn write_to_file(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)
    }
}

/// Run the configure pipeline.
pub fn run(config: &PipelineConfig) -> Result<ConfigureReport, PipelineError> {
    if config.verbose {
        eprintln!("Loading descriptor: {}", config.descriptor_path.display());
    }
    let (mut descriptor, digest) = ProjectDescriptor::from_file(&config.descriptor_path)?;

    for (key, value) in &config.overrides {
        descriptor.nullaway.apply_override(key, value)?;
    }

    if config.verbose {
        eprintln!("Validating configuration...");
    }
    validate(&descriptor.nullaway)?;

    let flags = generate(&descriptor.nullaway);
    if config.verbose {
        eprintln!("Generated {} argument(s):", flags.len());
        for flag in &flags {
            eprintln!("  {}", flag);
        }
    }

    let injected = if descriptor.nullaway.is_disabled() {
        if config.verbose {
            eprintln!("NullAway is disabled (severity OFF); skipping injection.");
        }
        false
    } else {
        if config.verbose {
            eprintln!("Injecting into {}...", compiler_plugin_key());
        }
        inject_compiler_args(&mut descriptor.build, &flags)?;
        true
    };

    let compiler_plugin = if injected {
        descriptor.build.plugin(&compiler_plugin_key()).cloned()
    } else {
        None
    };

    Ok(ConfigureReport {
        schema_version: SCHEMA_VERSION,
        schema_id: SCHEMA_ID.to_string(),
        created_at: Utc::now(),
        severity: descriptor.nullaway.severity,
        flags,
        injected,
        source: DescriptorSource {
            path: config.descriptor_path.display().to_string(),
            digest,
        },
        compiler_plugin,
    })
}
