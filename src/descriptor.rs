//! Project descriptor (`nullaway.toml`) loading.
//!
//! The descriptor declares the NullAway options under `[nullaway]` and the
//! project's build plugins under `[[build.plugins]]`. Loading records a
//! SHA-256 digest of the raw file bytes; the digest travels into the
//! configure report so a build can be audited against the exact descriptor
//! that produced it.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::Path;

use nullaway_args::NullAwayOptions;

use crate::model::BuildSection;

/// Errors from descriptor loading.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("failed to read descriptor: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parsed project descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDescriptor {
    /// NullAway options; everything absent when the `[nullaway]` section is
    /// missing.
    pub nullaway: NullAwayOptions,

    /// Declared build plugins.
    pub build: BuildSection,
}

impl ProjectDescriptor {
    /// Load and parse a descriptor file, returning it together with the
    /// SHA-256 digest of the raw bytes.
    pub fn from_file(path: &Path) -> Result<(Self, String), DescriptorError> {
        let bytes = fs::read(path)?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes).map_err(|e| {
            DescriptorError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("descriptor is not valid UTF-8: {}", e),
            ))
        })?;

        let descriptor = Self::from_str(&contents)?;
        Ok((descriptor, digest))
    }

    /// Parse a descriptor from a TOML string.
    pub fn from_str(s: &str) -> Result<Self, DescriptorError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nullaway_args::CheckSeverity;

    #[test]
    fn test_parse_minimal_descriptor() {
        let descriptor = ProjectDescriptor::from_str("").unwrap();
        assert_eq!(descriptor.nullaway, NullAwayOptions::default());
        assert!(descriptor.build.plugins.is_empty());
    }

    #[test]
    fn test_parse_options_section() {
        let toml = r#"
            [nullaway]
            severity = "ERROR"
            annotated_packages = ["com.example", "com.test"]
            jspecify_mode = true
            cast_to_non_null_method = "com.example.Utils.castToNonNull"
        "#;

        let descriptor = ProjectDescriptor::from_str(toml).unwrap();
        assert_eq!(descriptor.nullaway.severity, Some(CheckSeverity::Error));
        assert_eq!(
            descriptor.nullaway.annotated_packages,
            vec!["com.example", "com.test"]
        );
        assert_eq!(descriptor.nullaway.jspecify_mode, Some(true));
        assert_eq!(
            descriptor.nullaway.cast_to_non_null_method.as_deref(),
            Some("com.example.Utils.castToNonNull")
        );
        // Undeclared options stay absent.
        assert_eq!(descriptor.nullaway.check_contracts, None);
    }

    #[test]
    fn test_parse_build_plugins() {
        let toml = r#"
            [[build.plugins]]
            group = "org.apache.maven.plugins"
            artifact = "maven-compiler-plugin"

            [build.plugins.configuration]
            name = "configuration"
            children = [
                { name = "release", value = "17" },
                { name = "compilerArgs", children = [{ name = "arg", value = "-parameters" }] },
            ]
        "#;

        let descriptor = ProjectDescriptor::from_str(toml).unwrap();
        assert_eq!(descriptor.build.plugins.len(), 1);

        let plugin = descriptor
            .build
            .plugin("org.apache.maven.plugins:maven-compiler-plugin")
            .unwrap();
        let configuration = plugin.configuration.as_ref().unwrap();
        assert_eq!(
            configuration.child("release").and_then(|c| c.value.as_deref()),
            Some("17")
        );
        let compiler_args = configuration.child("compilerArgs").unwrap();
        assert_eq!(compiler_args.children[0].value.as_deref(), Some("-parameters"));
    }

    #[test]
    fn test_reject_unknown_severity() {
        let toml = r#"
            [nullaway]
            severity = "FATAL"
        "#;
        let result = ProjectDescriptor::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_reject_malformed_toml() {
        let result = ProjectDescriptor::from_str("[nullaway");
        assert!(matches!(result, Err(DescriptorError::Parse(_))));
    }

    #[test]
    fn test_from_file_records_digest() {
        use std::io::Write;

        let mut temp = tempfile::NamedTempFile::new().unwrap();
        writeln!(temp, "[nullaway]").unwrap();
        writeln!(temp, "only_null_marked = true").unwrap();

        let (descriptor, digest) = ProjectDescriptor::from_file(temp.path()).unwrap();
        assert_eq!(descriptor.nullaway.only_null_marked, Some(true));
        // SHA-256 as hex is 64 characters.
        assert_eq!(digest.len(), 64);

        // Same bytes, same digest.
        let (_, digest_again) = ProjectDescriptor::from_file(temp.path()).unwrap();
        assert_eq!(digest, digest_again);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = ProjectDescriptor::from_file(Path::new("/nonexistent/nullaway.toml"));
        assert!(matches!(result, Err(DescriptorError::Io(_))));
    }
}
