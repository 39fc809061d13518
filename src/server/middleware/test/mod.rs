use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::signature::{
        verify_signature, SignatureGuard, SIGNATURE_HEADER, TIMESTAMP_HEADER,
    },
};
use axum::http::{HeaderMap, HeaderValue};
use test_utils::signing::{foreign_signer, TestSigner};
