//! # Transport Error
//!
//! Maps coercion rejections to structured HTTP responses. Both
//! rejection kinds — missing required parameter and invalid value —
//! are client faults and render as 400 Bad Request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use wicket_coercion::CoercionError;

/// Transport-level error for parameter resolution.
#[derive(Error, Debug)]
pub enum RestError {
    /// A declared parameter failed presence validation or coercion.
    #[error("bad request: {0}")]
    BadRequest(#[from] CoercionError),
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = match &self {
            RestError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_maps_to_400() {
        let err = RestError::from(CoercionError::MissingRequired {
            name: "age".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_value_maps_to_400() {
        let err = RestError::from(CoercionError::InvalidValue {
            value: "oops".to_string(),
            name: "score".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_error_body_is_structured() {
        let err = RestError::from(CoercionError::MissingRequired {
            name: "age".to_string(),
        });
        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], 400);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("age"));
    }
}
