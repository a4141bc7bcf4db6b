//! Configuration record and argument generator for the NullAway Error Prone
//! check.
//!
//! This crate is the pure core: an options record, the validation rules for
//! option combinations, and a deterministic renderer from the record to the
//! flat `-Xep:...` flag list the checker consumes. No I/O happens here.

mod options;
mod validate;

pub use options::{CheckSeverity, NullAwayOptions, OptionError};
pub use validate::{validate, ValidationError};

/// Error Prone check name for NullAway.
pub const CHECK_NAME: &str = "NullAway";

/// Generate the Error Prone argument list for an options record.
///
/// The first element is always the check-enable flag: `-Xep:NullAway` when
/// the severity is absent or DEFAULT, `-Xep:NullAway:<SEVERITY>` otherwise.
/// Option flags (`-XepOpt:NullAway:<Name>=<value>`) follow in a fixed order;
/// absent options emit nothing. The emission order is part of the output
/// contract: downstream tooling sees these flags verbatim, in this order.
///
/// Generation is pure and infallible; invalid option combinations are caught
/// by [`validate`] before this runs.
pub fn generate(options: &NullAwayOptions) -> Vec<String> {
    let mut args = vec![severity_flag(options.severity)];

    let candidates = [
        list_option("AnnotatedPackages", &options.annotated_packages),
        flag_option("OnlyNullMarked", options.only_null_marked),
        list_option("UnannotatedSubPackages", &options.unannotated_sub_packages),
        list_option("UnannotatedClasses", &options.unannotated_classes),
        list_option("KnownInitializers", &options.known_initializers),
        list_option("ExcludedClassAnnotations", &options.excluded_class_annotations),
        list_option("ExcludedClasses", &options.excluded_classes),
        list_option("ExcludedFieldAnnotations", &options.excluded_field_annotations),
        list_option(
            "CustomInitializerAnnotations",
            &options.custom_initializer_annotations,
        ),
        list_option("ExternalInitAnnotations", &options.external_init_annotations),
        flag_option(
            "TreatGeneratedAsUnannotated",
            options.treat_generated_as_unannotated,
        ),
        flag_option(
            "AcknowledgeRestrictiveAnnotations",
            options.acknowledge_restrictive_annotations,
        ),
        flag_option("CheckOptionalEmptiness", options.check_optional_emptiness),
        flag_option("SuggestSuppressions", options.suggest_suppressions),
        flag_option("AssertsEnabled", options.asserts_enabled),
        flag_option("ExhaustiveOverride", options.exhaustive_override),
        scalar_option("CastToNonNullMethod", options.cast_to_non_null_method.as_deref()),
        list_option(
            "CheckOptionalEmptinessCustomClasses",
            &options.check_optional_emptiness_custom_classes,
        ),
        scalar_option(
            "AutoFixSuppressionComment",
            options.auto_fix_suppression_comment.as_deref(),
        ),
        flag_option(
            "HandleTestAssertionLibraries",
            options.handle_test_assertion_libraries,
        ),
        flag_option("AcknowledgeAndroidRecent", options.acknowledge_android_recent),
        flag_option("CheckContracts", options.check_contracts),
        list_option("CustomContractAnnotations", &options.custom_contract_annotations),
        list_option("CustomNullableAnnotations", &options.custom_nullable_annotations),
        list_option("CustomNonnullAnnotations", &options.custom_nonnull_annotations),
        list_option(
            "CustomGeneratedCodeAnnotations",
            &options.custom_generated_code_annotations,
        ),
        flag_option("JSpecifyMode", options.jspecify_mode),
        list_option("ExtraFuturesClasses", &options.extra_futures_classes),
        list_option("SuppressionNameAliases", &options.suppression_name_aliases),
    ];

    args.extend(candidates.into_iter().flatten());
    args
}

/// Format the check-enable flag. DEFAULT and absent both map to the bare
/// form.
fn severity_flag(severity: Option<CheckSeverity>) -> String {
    match severity {
        None | Some(CheckSeverity::Default) => format!("-Xep:{}", CHECK_NAME),
        Some(severity) => format!("-Xep:{}:{}", CHECK_NAME, severity),
    }
}

/// Format a list option: comma-joined in original order, no sorting or
/// deduplication. Empty means absent.
fn list_option(name: &str, values: &[String]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(format!(
        "-XepOpt:{}:{}={}",
        CHECK_NAME,
        name,
        values.join(",")
    ))
}

/// Format a tri-state boolean option. Absent means absent.
fn flag_option(name: &str, value: Option<bool>) -> Option<String> {
    value.map(|v| format!("-XepOpt:{}:{}={}", CHECK_NAME, name, v))
}

/// Format a string option, verbatim. Empty string means absent.
fn scalar_option(name: &str, value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(format!("-XepOpt:{}:{}={}", CHECK_NAME, name, v)),
        _ => None,
    }
}
