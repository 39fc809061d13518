//! Ed25519 verification of interaction requests.
//!
//! Discord signs `timestamp ++ body` with the application's key and sends the
//! hex encoded signature alongside the timestamp. Verification runs on the
//! raw body bytes, before any JSON is parsed.

use axum::http::HeaderMap;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::server::error::{auth::AuthError, AppError};

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Checks a detached signature over `timestamp ++ body`.
///
/// Missing parts, non-hex input and signatures of the wrong length are all
/// reported as `false`.
pub fn verify_signature(
    key: &VerifyingKey,
    signature: Option<&str>,
    timestamp: Option<&str>,
    body: &[u8],
) -> bool {
    let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
        return false;
    };

    let Ok(bytes) = hex::decode(signature) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(&bytes) else {
        return false;
    };

    let message = [timestamp.as_bytes(), body].concat();

    key.verify(&message, &signature).is_ok()
}

/// Rejects requests that were not signed by Discord.
pub struct SignatureGuard<'a> {
    key: &'a VerifyingKey,
}

impl<'a> SignatureGuard<'a> {
    pub fn new(key: &'a VerifyingKey) -> Self {
        Self { key }
    }

    /// Verifies the signature headers against the raw request body.
    ///
    /// # Returns
    /// - `Ok(())` - Signature is valid for this body and timestamp
    /// - `Err(AuthError::InvalidSignature)` - Anything else
    pub fn require(&self, headers: &HeaderMap, body: &[u8]) -> Result<(), AppError> {
        let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());

        if verify_signature(
            self.key,
            header(SIGNATURE_HEADER),
            header(TIMESTAMP_HEADER),
            body,
        ) {
            Ok(())
        } else {
            Err(AuthError::InvalidSignature.into())
        }
    }
}
