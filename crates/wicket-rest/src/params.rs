//! # Request Parameter Resolution
//!
//! Per-location raw value maps and the per-operation resolution loop.
//!
//! [`RawParams`] is populated by whatever extractors the hosting
//! application uses. Lookups for keys the request did not carry return
//! the empty string, the engine's absence encoding: "missing from the
//! request" and "present but empty" are the same case, and the
//! required flag decides what happens next.

use std::collections::HashMap;

use axum::http::HeaderMap;
use tracing::debug;

use wicket_coercion::{coerce_parameter, CoercedValue};
use wicket_openapi::{Parameter, ParameterLocation};

use crate::error::RestError;

/// Raw wire values for one request, keyed by parameter location.
///
/// Header names are stored and looked up case-insensitively; query,
/// path, and cookie names are exact.
#[derive(Debug, Clone, Default)]
pub struct RawParams {
    query: HashMap<String, String>,
    path: HashMap<String, String>,
    header: HashMap<String, String>,
    cookie: HashMap<String, String>,
}

impl RawParams {
    /// An empty set of raw values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query-string value.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Add a path-segment value.
    #[must_use]
    pub fn with_path(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path.insert(name.into(), value.into());
        self
    }

    /// Add a single header value.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Add every header from an Axum header map. Values that are not
    /// valid UTF-8 are skipped.
    #[must_use]
    pub fn with_headers(mut self, headers: &HeaderMap) -> Self {
        for (name, value) in headers {
            if let Ok(value) = value.to_str() {
                self.header.insert(name.as_str().to_string(), value.to_string());
            }
        }
        self
    }

    /// Add the cookies from a `Cookie` request header
    /// (`name=value; other=value` pairs).
    #[must_use]
    pub fn with_cookie_header(mut self, header: &str) -> Self {
        for pair in header.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                self.cookie.insert(name.to_string(), value.to_string());
            }
        }
        self
    }

    /// Look up the raw value for a declared parameter. Missing keys
    /// resolve to the empty string.
    pub fn get(&self, location: ParameterLocation, name: &str) -> &str {
        let value = match location {
            ParameterLocation::Query => self.query.get(name),
            ParameterLocation::Path => self.path.get(name),
            ParameterLocation::Header => self.header.get(&name.to_ascii_lowercase()),
            ParameterLocation::Cookie => self.cookie.get(name),
        };
        value.map_or("", String::as_str)
    }
}

/// Typed values for one operation's declared parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoercedParams {
    values: HashMap<String, CoercedValue>,
}

impl CoercedParams {
    /// The coerced value for a parameter, if the operation declared it.
    pub fn get(&self, name: &str) -> Option<&CoercedValue> {
        self.values.get(name)
    }

    /// Number of resolved parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the operation declared no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CoercedValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Resolve every declared parameter of an operation against the raw
/// values extracted from a request. The first rejection aborts
/// resolution and maps to a 400 response.
///
/// # Errors
///
/// `RestError::BadRequest` wrapping the engine's rejection.
pub fn resolve_parameters(
    parameters: &[Parameter],
    raw: &RawParams,
) -> Result<CoercedParams, RestError> {
    let mut values = HashMap::with_capacity(parameters.len());
    for parameter in parameters {
        let raw_value = raw.get(parameter.location, &parameter.name);
        let value = coerce_parameter(raw_value, parameter, None)?;
        values.insert(parameter.name.clone(), value);
    }
    debug!(count = values.len(), "resolved operation parameters");
    Ok(CoercedParams { values })
}
