//! The NullAway configuration record.
//!
//! `NullAwayOptions` is an immutable snapshot of every option the check
//! recognizes, in the three shapes the checker contract uses: tri-state
//! booleans, optional strings, and ordered string lists. Absent is the
//! default everywhere; an empty string or empty list is treated the same as
//! absent when flags are rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested severity for the NullAway check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckSeverity {
    /// Disable the check.
    Off,
    /// Report findings as warnings.
    Warn,
    /// Report findings as errors (fails the build).
    Error,
    /// Enable the check at Error Prone's default severity.
    Default,
}

impl CheckSeverity {
    /// The uppercase literal used in the check-enable flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckSeverity::Off => "OFF",
            CheckSeverity::Warn => "WARN",
            CheckSeverity::Error => "ERROR",
            CheckSeverity::Default => "DEFAULT",
        }
    }
}

impl fmt::Display for CheckSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OFF" => Ok(CheckSeverity::Off),
            "WARN" => Ok(CheckSeverity::Warn),
            "ERROR" => Ok(CheckSeverity::Error),
            "DEFAULT" => Ok(CheckSeverity::Default),
            other => Err(format!(
                "unknown severity '{}' (expected OFF, WARN, ERROR, or DEFAULT)",
                other
            )),
        }
    }
}

/// Errors from applying a command-line option override.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OptionError {
    /// The override key does not name a recognized option.
    #[error("unknown option '{0}' (option names use snake_case, e.g. 'annotated_packages')")]
    UnknownOption(String),

    /// The override value does not parse for the option's type.
    #[error("invalid value '{value}' for option '{option}': {expected}")]
    InvalidValue {
        option: String,
        value: String,
        expected: String,
    },
}

/// Declarative NullAway configuration.
///
/// This is the full option surface of the check. Every field defaults to
/// absent, so a descriptor only declares what it needs. The record is
/// read-only once constructed: validation and flag generation never mutate
/// it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullAwayOptions {
    /// Severity of the check. Absent means the checker's default severity.
    pub severity: Option<CheckSeverity>,

    /// Treat only @NullMarked code as annotated, per the JSpecify
    /// specification. Mutually exclusive with `annotated_packages`.
    pub only_null_marked: Option<bool>,

    /// Packages considered properly annotated according to the NullAway
    /// convention. Either this or `only_null_marked` must be set while the
    /// check is enabled.
    pub annotated_packages: Vec<String>,

    /// Subpackages excluded from `annotated_packages`.
    pub unannotated_sub_packages: Vec<String>,

    /// Classes within annotated packages to treat as unannotated.
    pub unannotated_classes: Vec<String>,

    /// Third-party methods NullAway should treat as initializers.
    pub known_initializers: Vec<String>,

    /// Annotations that exclude a class from nullability analysis.
    pub excluded_class_annotations: Vec<String>,

    /// Classes excluded from nullability analysis.
    pub excluded_classes: Vec<String>,

    /// Annotations that exclude a field from initialization checking.
    pub excluded_field_annotations: Vec<String>,

    /// Annotations equivalent to @Initializer.
    pub custom_initializer_annotations: Vec<String>,

    /// Annotations marking classes as externally initialized.
    pub external_init_annotations: Vec<String>,

    /// Treat @Generated classes as unannotated when used from other classes.
    pub treat_generated_as_unannotated: Option<bool>,

    /// Acknowledge restrictive nullability annotations in unannotated code.
    pub acknowledge_restrictive_annotations: Option<bool>,

    /// Check .get() accesses on potentially empty Optional values.
    pub check_optional_emptiness: Option<bool>,

    /// Suggest suppressions via Error Prone's suggested-fix machinery.
    pub suggest_suppressions: Option<bool>,

    /// Assume assertions are enabled at runtime and reason from them.
    pub asserts_enabled: Option<bool>,

    /// Check every method for overrides rather than relying on @Override.
    pub exhaustive_override: Option<bool>,

    /// Fully qualified method used to downcast to a non-null value.
    pub cast_to_non_null_method: Option<String>,

    /// Classes treated as Optional implementations.
    pub check_optional_emptiness_custom_classes: Vec<String>,

    /// Comment added alongside suggested @SuppressWarnings annotations.
    pub auto_fix_suppression_comment: Option<String>,

    /// Reason from test-library assertions such as assertThat(...).isNotNull().
    pub handle_test_assertion_libraries: Option<bool>,

    /// Treat @RecentlyNullable/@RecentlyNonNull as @Nullable/@NonNull.
    /// Requires `acknowledge_restrictive_annotations`.
    pub acknowledge_android_recent: Option<bool>,

    /// Check @Contract annotations.
    pub check_contracts: Option<bool>,

    /// Annotations equivalent to @Contract.
    pub custom_contract_annotations: Vec<String>,

    /// Annotations equivalent to @Nullable.
    pub custom_nullable_annotations: Vec<String>,

    /// Annotations equivalent to @NonNull.
    pub custom_nonnull_annotations: Vec<String>,

    /// Annotations equivalent to @Generated.
    pub custom_generated_code_annotations: Vec<String>,

    /// Enable JSpecify-based checks (generic types).
    pub jspecify_mode: Option<bool>,

    /// Classes treated equivalently to Guava Futures and FluentFuture.
    pub extra_futures_classes: Vec<String>,

    /// Suppression names honored in addition to "NullAway".
    pub suppression_name_aliases: Vec<String>,
}

impl NullAwayOptions {
    /// Whether the check is disabled outright (severity OFF).
    pub fn is_disabled(&self) -> bool {
        self.severity == Some(CheckSeverity::Off)
    }

    /// Apply a single `option=value` override on top of the parsed record.
    ///
    /// Keys are the snake_case option names used in the descriptor. Booleans
    /// accept `true`/`false`, severities the uppercase literals, lists a
    /// comma-separated value (empty clears the list), and string options take
    /// the value verbatim.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), OptionError> {
        match key {
            "severity" => self.severity = Some(parse_severity(key, value)?),
            "only_null_marked" => self.only_null_marked = Some(parse_bool(key, value)?),
            "annotated_packages" => self.annotated_packages = parse_list(value),
            "unannotated_sub_packages" => self.unannotated_sub_packages = parse_list(value),
            "unannotated_classes" => self.unannotated_classes = parse_list(value),
            "known_initializers" => self.known_initializers = parse_list(value),
            "excluded_class_annotations" => self.excluded_class_annotations = parse_list(value),
            "excluded_classes" => self.excluded_classes = parse_list(value),
            "excluded_field_annotations" => self.excluded_field_annotations = parse_list(value),
            "custom_initializer_annotations" => {
                self.custom_initializer_annotations = parse_list(value)
            }
            "external_init_annotations" => self.external_init_annotations = parse_list(value),
            "treat_generated_as_unannotated" => {
                self.treat_generated_as_unannotated = Some(parse_bool(key, value)?)
            }
            "acknowledge_restrictive_annotations" => {
                self.acknowledge_restrictive_annotations = Some(parse_bool(key, value)?)
            }
            "check_optional_emptiness" => {
                self.check_optional_emptiness = Some(parse_bool(key, value)?)
            }
            "suggest_suppressions" => self.suggest_suppressions = Some(parse_bool(key, value)?),
            "asserts_enabled" => self.asserts_enabled = Some(parse_bool(key, value)?),
            "exhaustive_override" => self.exhaustive_override = Some(parse_bool(key, value)?),
            "cast_to_non_null_method" => self.cast_to_non_null_method = Some(value.to_string()),
            "check_optional_emptiness_custom_classes" => {
                self.check_optional_emptiness_custom_classes = parse_list(value)
            }
            "auto_fix_suppression_comment" => {
                self.auto_fix_suppression_comment = Some(value.to_string())
            }
            "handle_test_assertion_libraries" => {
                self.handle_test_assertion_libraries = Some(parse_bool(key, value)?)
            }
            "acknowledge_android_recent" => {
                self.acknowledge_android_recent = Some(parse_bool(key, value)?)
            }
            "check_contracts" => self.check_contracts = Some(parse_bool(key, value)?),
            "custom_contract_annotations" => {
                self.custom_contract_annotations = parse_list(value)
            }
            "custom_nullable_annotations" => {
                self.custom_nullable_annotations = parse_list(value)
            }
            "custom_nonnull_annotations" => self.custom_nonnull_annotations = parse_list(value),
            "custom_generated_code_annotations" => {
                self.custom_generated_code_annotations = parse_list(value)
            }
            "jspecify_mode" => self.jspecify_mode = Some(parse_bool(key, value)?),
            "extra_futures_classes" => self.extra_futures_classes = parse_list(value),
            "suppression_name_aliases" => self.suppression_name_aliases = parse_list(value),
            other => return Err(OptionError::UnknownOption(other.to_string())),
        }
        Ok(())
    }
}

fn parse_severity(option: &str, value: &str) -> Result<CheckSeverity, OptionError> {
    value.parse().map_err(|_| OptionError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
        expected: "one of OFF, WARN, ERROR, DEFAULT".to_string(),
    })
}

fn parse_bool(option: &str, value: &str) -> Result<bool, OptionError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(OptionError::InvalidValue {
            option: option.to_string(),
            value: value.to_string(),
            expected: "'true' or 'false'".to_string(),
        }),
    }
}

/// Split a comma-separated override value, keeping entries verbatim.
/// An empty value clears the list (equivalent to absent).
fn parse_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_all_absent() {
        let options = NullAwayOptions::default();
        assert_eq!(options.severity, None);
        assert_eq!(options.only_null_marked, None);
        assert!(options.annotated_packages.is_empty());
        assert_eq!(options.cast_to_non_null_method, None);
        assert!(options.suppression_name_aliases.is_empty());
        assert!(!options.is_disabled());
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("OFF".parse::<CheckSeverity>(), Ok(CheckSeverity::Off));
        assert_eq!("WARN".parse::<CheckSeverity>(), Ok(CheckSeverity::Warn));
        assert_eq!("ERROR".parse::<CheckSeverity>(), Ok(CheckSeverity::Error));
        assert_eq!("DEFAULT".parse::<CheckSeverity>(), Ok(CheckSeverity::Default));
        assert!("error".parse::<CheckSeverity>().is_err());
        assert!("".parse::<CheckSeverity>().is_err());
    }

    #[test]
    fn test_severity_display_is_uppercase() {
        assert_eq!(CheckSeverity::Warn.to_string(), "WARN");
        assert_eq!(CheckSeverity::Default.to_string(), "DEFAULT");
    }

    #[test]
    fn test_apply_override_severity() {
        let mut options = NullAwayOptions::default();
        options.apply_override("severity", "ERROR").unwrap();
        assert_eq!(options.severity, Some(CheckSeverity::Error));
    }

    #[test]
    fn test_apply_override_bool() {
        let mut options = NullAwayOptions::default();
        options.apply_override("jspecify_mode", "true").unwrap();
        options.apply_override("asserts_enabled", "false").unwrap();
        assert_eq!(options.jspecify_mode, Some(true));
        assert_eq!(options.asserts_enabled, Some(false));
    }

    #[test]
    fn test_apply_override_list_preserves_order() {
        let mut options = NullAwayOptions::default();
        options
            .apply_override("annotated_packages", "com.example,com.test")
            .unwrap();
        assert_eq!(options.annotated_packages, vec!["com.example", "com.test"]);
    }

    #[test]
    fn test_apply_override_empty_list_clears() {
        let mut options = NullAwayOptions {
            annotated_packages: vec!["com.example".to_string()],
            ..Default::default()
        };
        options.apply_override("annotated_packages", "").unwrap();
        assert!(options.annotated_packages.is_empty());
    }

    #[test]
    fn test_apply_override_scalar_verbatim() {
        let mut options = NullAwayOptions::default();
        options
            .apply_override("cast_to_non_null_method", "com.example.Utils.castToNonNull")
            .unwrap();
        assert_eq!(
            options.cast_to_non_null_method,
            Some("com.example.Utils.castToNonNull".to_string())
        );
    }

    #[test]
    fn test_apply_override_unknown_option() {
        let mut options = NullAwayOptions::default();
        let err = options.apply_override("annotatedPackages", "com.example");
        assert_eq!(
            err,
            Err(OptionError::UnknownOption("annotatedPackages".to_string()))
        );
    }

    #[test]
    fn test_apply_override_bad_bool() {
        let mut options = NullAwayOptions::default();
        let err = options.apply_override("check_contracts", "yes").unwrap_err();
        assert!(err.to_string().contains("invalid value 'yes'"));
    }

    #[test]
    fn test_apply_override_bad_severity() {
        let mut options = NullAwayOptions::default();
        let err = options.apply_override("severity", "FATAL").unwrap_err();
        assert!(err.to_string().contains("FATAL"));
    }

    #[test]
    fn test_is_disabled_only_for_off() {
        let mut options = NullAwayOptions::default();
        options.severity = Some(CheckSeverity::Off);
        assert!(options.is_disabled());
        options.severity = Some(CheckSeverity::Error);
        assert!(!options.is_disabled());
    }
}
