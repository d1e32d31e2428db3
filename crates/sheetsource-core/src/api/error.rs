use thiserror::Error;

use crate::models::SheetName;

/// Failure talking to the Sheets API. Never cached, never retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unauthorized - API key may be invalid")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(truncated),
            404 => ApiError::NotFound(truncated),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(truncated),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}

/// A row that does not fit its record's column layout.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{sheet} row {row}, column {column}: {reason}")]
pub struct DecodeError {
    pub sheet: SheetName,
    /// Zero-based index into the fetched rows.
    pub row: usize,
    pub column: &'static str,
    pub reason: String,
}

/// Error from the typed record operations.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error(transparent)]
    Fetch(#[from] ApiError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_maps_known_codes() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, "API key not valid"),
            ApiError::AccessDenied(ref body) if body == "API key not valid"
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "no such sheet"),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            ApiError::RateLimited
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, "upstream"),
            ApiError::ServerError(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_REQUEST, "Unable to parse range"),
            ApiError::InvalidResponse(ref msg) if msg.contains("400") && msg.contains("Unable to parse range")
        ));
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(2000);
        match ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body) {
            ApiError::ServerError(msg) => {
                assert!(msg.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
                assert!(msg.ends_with("(truncated, 2000 total bytes)"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 3-byte chars put byte 500 mid-character
        let body = "€".repeat(300);
        let truncated = ApiError::truncate_body(&body);
        assert!(truncated.contains("(truncated, 900 total bytes)"));
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError {
            sheet: SheetName::Services,
            row: 3,
            column: "name",
            reason: "missing required cell".to_string(),
        };
        assert_eq!(err.to_string(), "Services row 3, column name: missing required cell");
    }
}
