use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Interaction request failed Ed25519 signature verification.
    ///
    /// Covers missing signature or timestamp headers, malformed hex and
    /// signatures that do not match the body. Results in a 401 Unauthorized
    /// response so Discord's endpoint validation sees the rejection.
    #[error("Invalid signature")]
    InvalidSignature,
}

/// Converts authentication errors into HTTP responses.
///
/// Discord only inspects the status code, so the body is the bare message as
/// plain text.
///
/// # Returns
/// - 401 Unauthorized - For `InvalidSignature`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidSignature => {
                tracing::debug!("Rejected interaction with invalid signature");

                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
        }
    }
}
