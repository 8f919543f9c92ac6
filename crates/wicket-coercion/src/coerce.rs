//! # Coercion Dispatch & Conversion Rules
//!
//! The per-call pipeline: reference-marker passthrough, presence check,
//! kind selection, conversion. One conversion rule per
//! [`CoercionKind`], matched exhaustively.
//!
//! ## Failure Absorption
//!
//! Most conversion rules absorb malformed input into a typed sentinel
//! instead of rejecting:
//!
//! | kind | malformed input becomes |
//! |---|---|
//! | `Byte` | best-effort decode of the recognizable base64 content |
//! | `Date`/`DateTime` | `Timestamp(None)` ("invalid date") |
//! | `Double` | `Float(NaN)` |
//! | `Long` | `Integer(None)` |
//! | `Integer` | `Integer(None)` |
//! | `Boolean` | `Boolean(None)` |
//! | `Number` | **rejected** — `InvalidValue` |
//!
//! The lone rejecting row is the compatibility contract's intentional
//! asymmetry; see the crate docs.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

use wicket_openapi::{Parameter, SchemaOrRef};

use crate::classify::{classify, CoercionKind};
use crate::error::CoercionError;
use crate::validate::{check_presence, CoercionOptions, Presence};
use crate::value::CoercedValue;

/// Standard-alphabet base64 engine that tolerates absent or present
/// padding and ragged trailing bits. Combined with the non-alphabet
/// filter in [`decode_base64_forgiving`], decoding cannot fail —
/// malformed input is not specially detected, a documented weak point
/// of the contract.
const FORGIVING_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Coerce a raw wire value according to its parameter's declared schema.
///
/// - A parameter whose schema is absent or a `$ref` marker returns the
///   raw value unchanged, regardless of the required flag —
///   dereferencing is deferred to collaborators.
/// - An absent (empty) value returns unchanged when the parameter is
///   optional and rejects with
///   [`MissingRequired`](CoercionError::MissingRequired) when required
///   (`parameter.required OR options.required`).
/// - Otherwise the value is converted per the classified kind.
///
/// # Errors
///
/// [`CoercionError::MissingRequired`] for an absent required value;
/// [`CoercionError::InvalidValue`] for a plain-`number` value that
/// parses to NaN. No other input rejects.
pub fn coerce_parameter(
    raw: &str,
    parameter: &Parameter,
    options: Option<&CoercionOptions>,
) -> Result<CoercedValue, CoercionError> {
    let schema = match &parameter.schema {
        Some(SchemaOrRef::Inline(schema)) => schema,
        Some(SchemaOrRef::Ref(reference)) => {
            debug!(
                name = %parameter.name,
                target = %reference.target,
                "schema reference not coerced; dereferencing is not supported"
            );
            return Ok(CoercedValue::Raw(raw.to_string()));
        }
        None => {
            debug!(name = %parameter.name, "parameter has no schema; value passed through");
            return Ok(CoercedValue::Raw(raw.to_string()));
        }
    };

    if check_presence(raw, parameter, options)? == Presence::Absent {
        return Ok(CoercedValue::Raw(raw.to_string()));
    }

    let kind = classify(&schema.ty, schema.format());
    debug!(name = %parameter.name, ?kind, "coercing parameter");

    let value = match kind {
        CoercionKind::Byte => CoercedValue::Bytes(decode_base64_forgiving(raw)),
        CoercionKind::Date | CoercionKind::DateTime => {
            CoercedValue::Timestamp(parse_timestamp(raw))
        }
        CoercionKind::Double => CoercedValue::Float(parse_float_prefix(raw)),
        CoercionKind::Number => {
            let parsed = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
            if parsed.is_nan() {
                return Err(CoercionError::InvalidValue {
                    value: raw.to_string(),
                    name: parameter.name.clone(),
                });
            }
            CoercedValue::Float(parsed)
        }
        CoercionKind::Long => CoercedValue::Integer(parse_long(raw)),
        CoercionKind::Integer => CoercedValue::Integer(parse_integer_prefix(raw)),
        CoercionKind::Boolean => CoercedValue::Boolean(parse_boolean(raw)),
        CoercionKind::String
        | CoercionKind::Password
        | CoercionKind::Binary
        | CoercionKind::Unknown
        | CoercionKind::Composite => CoercedValue::Raw(raw.to_string()),
    };
    Ok(value)
}

/// Truthiness sets: `true`/`1` and `false`/`0`. Anything else is the
/// undefined-boolean sentinel.
fn parse_boolean(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Generic numeric parse truncated toward zero. Non-finite parses map
/// to the not-a-number sentinel.
fn parse_long(raw: &str) -> Option<i64> {
    let parsed = raw.trim().parse::<f64>().ok()?;
    if parsed.is_finite() {
        Some(parsed as i64)
    } else {
        None
    }
}

/// Longest leading base-10 integer prefix, after optional leading
/// whitespace and sign (`"42abc"` → 42). No digit prefix yields the
/// not-a-number sentinel. Prefixes beyond the i64 range saturate.
fn parse_integer_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    match rest[..digits_len].parse::<i64>() {
        Ok(magnitude) => Some(if negative { -magnitude } else { magnitude }),
        Err(_) => Some(if negative { i64::MIN } else { i64::MAX }),
    }
}

/// Longest leading float prefix, after optional leading whitespace
/// (`"3.5cm"` → 3.5), plus the literal `Infinity` forms. No usable
/// prefix yields NaN.
fn parse_float_prefix(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    if let Some(rest) = trimmed.strip_prefix('-') {
        if rest.starts_with("Infinity") {
            return f64::NEG_INFINITY;
        }
    }
    if trimmed.starts_with("Infinity") || trimmed.strip_prefix('+').is_some_and(|r| r.starts_with("Infinity")) {
        return f64::INFINITY;
    }

    let mut end = trimmed
        .bytes()
        .take_while(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
        .count();
    while end > 0 {
        if let Ok(parsed) = trimmed[..end].parse::<f64>() {
            return parsed;
        }
        end -= 1;
    }
    f64::NAN
}

/// Parse a calendar timestamp: RFC 3339, then `YYYY-MM-DDTHH:MM:SS`
/// (assumed UTC), then date-only `YYYY-MM-DD` (midnight UTC).
/// Unparseable input is the "invalid date" sentinel.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&parsed));
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&parsed.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Best-effort base64 decode: non-alphabet characters (including
/// padding) are dropped, then a lone trailing character — which cannot
/// encode a full byte — is discarded before decoding.
fn decode_base64_forgiving(raw: &str) -> Vec<u8> {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/'))
        .collect();
    let keep = if filtered.len() % 4 == 1 {
        filtered.len() - 1
    } else {
        filtered.len()
    };
    FORGIVING_BASE64.decode(&filtered[..keep]).unwrap_or_default()
}
