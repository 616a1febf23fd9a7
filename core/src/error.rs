//! Error types for the shop API clients.
//!
//! # Design
//! Only failures of this crate's own making are errors. The remote API
//! reports business outcomes (bad request, unknown user, ...) through the
//! `responseCode` field of an otherwise successful reply; those are returned
//! as normalized responses, never as `ApiError`.

/// Errors returned by the API clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body is not valid JSON.
    #[error("response body is not JSON: {0}")]
    Parse(String),

    /// The body is JSON but does not have the expected shape.
    #[error("response does not match the expected schema: {0}")]
    Schema(String),

    /// Raised only when a caller opts into `validate_response_code`.
    #[error("expected response code {expected} but got {actual}. Message: {}", message.as_deref().unwrap_or("<none>"))]
    UnexpectedResponseCode {
        expected: u16,
        actual: u16,
        message: Option<String>,
    },

    /// A record field that must be populated before sending was empty.
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    /// Client configuration could not be read.
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_code_message_includes_both_codes() {
        let err = ApiError::UnexpectedResponseCode {
            expected: 200,
            actual: 404,
            message: Some("User not found!".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "expected response code 200 but got 404. Message: User not found!"
        );
    }

    #[test]
    fn unexpected_code_without_message() {
        let err = ApiError::UnexpectedResponseCode {
            expected: 201,
            actual: 400,
            message: None,
        };
        assert!(err.to_string().ends_with("Message: <none>"));
    }
}
