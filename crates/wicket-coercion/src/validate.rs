//! # Presence Validation
//!
//! Presence/absence and required-field policy, run before any
//! conversion rule. A value is absent iff it is the empty string —
//! `null` and missing-key cases are resolved to the empty string by the
//! transport collaborator before the engine is invoked.
//!
//! The policy is a set of plain functions over immutable per-call
//! arguments; no validator object holds state between calls.

use wicket_openapi::Parameter;

use crate::error::CoercionError;

/// Per-call validation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoercionOptions {
    /// When `Some(true)`, forces the parameter to be required
    /// regardless of the schema's own flag. ORed with
    /// `Parameter::required` — either source suffices.
    pub required: Option<bool>,
}

impl CoercionOptions {
    /// Options that force the parameter to be required.
    pub fn require() -> Self {
        Self {
            required: Some(true),
        }
    }
}

/// Outcome of a successful presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// The value is present; coercion proceeds.
    Present,
    /// The value is absent and the parameter is optional; the caller
    /// short-circuits and returns the raw value unchanged.
    Absent,
}

/// The sole absence test: a raw value is absent iff it is empty.
pub fn is_absent(value: &str) -> bool {
    value.is_empty()
}

/// Resolve the effective required flag:
/// `parameter.required OR options.required`.
pub fn is_required(parameter: &Parameter, options: Option<&CoercionOptions>) -> bool {
    parameter.required || options.and_then(|opts| opts.required).unwrap_or(false)
}

/// Check presence before coercion.
///
/// # Errors
///
/// Returns `CoercionError::MissingRequired` iff the value is absent and
/// the resolved required flag is set.
pub fn check_presence(
    value: &str,
    parameter: &Parameter,
    options: Option<&CoercionOptions>,
) -> Result<Presence, CoercionError> {
    if !is_absent(value) {
        return Ok(Presence::Present);
    }
    if is_required(parameter, options) {
        return Err(CoercionError::MissingRequired {
            name: parameter.name.clone(),
        });
    }
    Ok(Presence::Absent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wicket_openapi::ParameterLocation;

    fn param(required: bool) -> Parameter {
        Parameter::new("token", ParameterLocation::Header)
            .unwrap()
            .with_required(required)
    }

    #[test]
    fn test_only_empty_string_is_absent() {
        assert!(is_absent(""));
        assert!(!is_absent(" "));
        assert!(!is_absent("0"));
        assert!(!is_absent("null"));
    }

    #[test]
    fn test_required_resolution_ors_both_sources() {
        let optional = param(false);
        let required = param(true);
        assert!(!is_required(&optional, None));
        assert!(is_required(&required, None));
        assert!(is_required(&optional, Some(&CoercionOptions::require())));
        assert!(is_required(&required, Some(&CoercionOptions::default())));
        assert!(!is_required(
            &optional,
            Some(&CoercionOptions {
                required: Some(false)
            })
        ));
    }

    #[test]
    fn test_absent_required_rejects() {
        let err = check_presence("", &param(true), None).unwrap_err();
        assert_eq!(
            err,
            CoercionError::MissingRequired {
                name: "token".to_string()
            }
        );
    }

    #[test]
    fn test_absent_optional_short_circuits() {
        assert_eq!(check_presence("", &param(false), None), Ok(Presence::Absent));
    }

    #[test]
    fn test_present_value_proceeds() {
        assert_eq!(
            check_presence("abc", &param(true), None),
            Ok(Presence::Present)
        );
    }

    #[test]
    fn test_options_override_forces_rejection() {
        let err = check_presence("", &param(false), Some(&CoercionOptions::require()));
        assert!(err.is_err());
    }
}
