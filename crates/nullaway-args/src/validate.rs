//! Configuration validation rules.
//!
//! Validation runs once, before any flag is generated. Each rule is a hard
//! failure: nothing is generated or injected for an invalid record.

use crate::options::NullAwayOptions;

/// Configuration conflicts that abort the pipeline.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    /// `only_null_marked` and `annotated_packages` are mutually exclusive.
    #[error(
        "cannot set both only_null_marked = true and annotated_packages; \
         use only_null_marked for JSpecify @NullMarked code only, or \
         annotated_packages for the traditional NullAway annotation model"
    )]
    OnlyNullMarkedConflict,

    /// The check is enabled but nothing marks code as annotated.
    #[error(
        "either only_null_marked = true or annotated_packages must be set \
         while NullAway is enabled; see \
         https://github.com/uber/NullAway/wiki/Configuration"
    )]
    MissingAnnotatedScope,

    /// `acknowledge_android_recent` depends on
    /// `acknowledge_restrictive_annotations`.
    #[error("acknowledge_android_recent requires acknowledge_restrictive_annotations = true")]
    AndroidRecentRequiresRestrictive,
}

/// Validate an options record.
///
/// Rules, in the order they are checked:
/// - `only_null_marked = true` with a non-empty `annotated_packages` list is
///   a conflict;
/// - unless the check is disabled, one of the two must be set;
/// - `acknowledge_android_recent = true` requires
///   `acknowledge_restrictive_annotations = true`.
pub fn validate(options: &NullAwayOptions) -> Result<(), ValidationError> {
    let only_null_marked = options.only_null_marked == Some(true);
    let has_annotated_packages = !options.annotated_packages.is_empty();

    if only_null_marked && has_annotated_packages {
        return Err(ValidationError::OnlyNullMarkedConflict);
    }

    if !only_null_marked && !has_annotated_packages && !options.is_disabled() {
        return Err(ValidationError::MissingAnnotatedScope);
    }

    if options.acknowledge_android_recent == Some(true)
        && options.acknowledge_restrictive_annotations != Some(true)
    {
        return Err(ValidationError::AndroidRecentRequiresRestrictive);
    }

    Ok(())
}
