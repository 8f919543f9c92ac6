//! # Type Classification
//!
//! Maps a schema's declared `type`/`format` pair to exactly one
//! [`CoercionKind`]. The mapping is a pure total function: unknown
//! combinations fall back to a defined passthrough kind, never an
//! error. The engine matches the resulting kind exhaustively, so every
//! kind is guaranteed a conversion rule at compile time.

/// The closed set of conversion behaviors the engine implements.
///
/// Selected once per call by [`classify`]; `type` is checked first,
/// `format` as tiebreaker. `format` only matters for `string`,
/// `number`, and `integer` — meaningless combinations (e.g.
/// `boolean` + `date`) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoercionKind {
    /// Plain string; returned unchanged.
    String,
    /// `password` format; treated as a plain string.
    Password,
    /// `byte` format; base64-decoded into a byte sequence.
    Byte,
    /// `binary` format; opaque passthrough.
    Binary,
    /// `date` format; parsed as a calendar timestamp.
    Date,
    /// `date-time` format; parsed as a calendar timestamp.
    DateTime,
    /// Truthiness tokens mapped to a tri-state boolean.
    Boolean,
    /// Plain `number`; strict float parse, NaN rejects.
    Number,
    /// `float`/`double` formats; prefix float parse, NaN accepted.
    Double,
    /// `integer` + `int64`; generic numeric parse truncated to i64.
    Long,
    /// Plain `integer`; longest leading integer prefix.
    Integer,
    /// `object`/`array` — composite coercion is unsupported; the raw
    /// value passes through.
    Composite,
    /// Unrecognized `type` value; passthrough, no coercion.
    Unknown,
}

impl CoercionKind {
    /// Kinds whose conversion rule returns the raw value unchanged.
    pub fn is_passthrough(self) -> bool {
        matches!(
            self,
            Self::String | Self::Password | Self::Binary | Self::Unknown | Self::Composite
        )
    }
}

/// Select the coercion kind for a `type`/`format` pair.
///
/// Total and deterministic over arbitrary strings.
pub fn classify(ty: &str, format: Option<&str>) -> CoercionKind {
    match ty {
        "object" | "array" => CoercionKind::Composite,
        "string" => match format {
            Some("byte") => CoercionKind::Byte,
            Some("binary") => CoercionKind::Binary,
            Some("date") => CoercionKind::Date,
            Some("date-time") => CoercionKind::DateTime,
            Some("password") => CoercionKind::Password,
            _ => CoercionKind::String,
        },
        "boolean" => CoercionKind::Boolean,
        "number" => match format {
            Some("float") | Some("double") => CoercionKind::Double,
            _ => CoercionKind::Number,
        },
        "integer" => match format {
            Some("int64") => CoercionKind::Long,
            _ => CoercionKind::Integer,
        },
        _ => CoercionKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_string_formats() {
        assert_eq!(classify("string", Some("byte")), CoercionKind::Byte);
        assert_eq!(classify("string", Some("binary")), CoercionKind::Binary);
        assert_eq!(classify("string", Some("date")), CoercionKind::Date);
        assert_eq!(classify("string", Some("date-time")), CoercionKind::DateTime);
        assert_eq!(classify("string", Some("password")), CoercionKind::Password);
        assert_eq!(classify("string", None), CoercionKind::String);
        assert_eq!(classify("string", Some("uuid")), CoercionKind::String);
    }

    #[test]
    fn test_numeric_formats() {
        assert_eq!(classify("number", Some("float")), CoercionKind::Double);
        assert_eq!(classify("number", Some("double")), CoercionKind::Double);
        assert_eq!(classify("number", None), CoercionKind::Number);
        assert_eq!(classify("number", Some("int32")), CoercionKind::Number);
        assert_eq!(classify("integer", Some("int64")), CoercionKind::Long);
        assert_eq!(classify("integer", None), CoercionKind::Integer);
        assert_eq!(classify("integer", Some("int32")), CoercionKind::Integer);
    }

    #[test]
    fn test_composites_pass_through() {
        assert_eq!(classify("object", None), CoercionKind::Composite);
        assert_eq!(classify("array", Some("csv")), CoercionKind::Composite);
        assert!(CoercionKind::Composite.is_passthrough());
    }

    #[test]
    fn test_meaningless_format_ignored() {
        // format only matters for string/number/integer.
        assert_eq!(classify("boolean", Some("date")), CoercionKind::Boolean);
        assert_eq!(classify("boolean", None), CoercionKind::Boolean);
    }

    #[test]
    fn test_unknown_type_falls_back() {
        assert_eq!(classify("file", None), CoercionKind::Unknown);
        assert_eq!(classify("", Some("byte")), CoercionKind::Unknown);
        assert!(CoercionKind::Unknown.is_passthrough());
    }

    proptest! {
        // classify is total (never panics) and deterministic for every
        // (type, format) pair.
        #[test]
        fn prop_classify_total_and_deterministic(
            ty in ".{0,24}",
            format in proptest::option::of(".{0,24}"),
        ) {
            let first = classify(&ty, format.as_deref());
            let second = classify(&ty, format.as_deref());
            prop_assert_eq!(first, second);
        }
    }
}
