//! API Response types
//!
//! Standardized response envelope used by every backend endpoint.

use serde::{Deserialize, Serialize};

/// Standard API response code
pub const API_CODE_SUCCESS: &str = "E0000";

/// Unified API response structure
///
/// All backend responses follow this format:
/// ```json
/// {
///     "code": "E0000",
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (E0000 = success, others = error codes)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Whether the response carries a success code
    ///
    /// The backend can return an error envelope on a 2xx response, so the
    /// code must be checked before the payload is trusted.
    pub fn is_success(&self) -> bool {
        self.code == API_CODE_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_determined_by_code_not_payload() {
        let response: ApiResponse<i32> = serde_json::from_str(
            r#"{"code": "E0000", "message": "Success", "data": 1}"#,
        )
        .unwrap();
        assert!(response.is_success());

        // A 2xx envelope can still carry an error code alongside data
        let response: ApiResponse<i32> = serde_json::from_str(
            r#"{"code": "E9001", "message": "Internal server error", "data": 1}"#,
        )
        .unwrap();
        assert!(!response.is_success());
    }
}
