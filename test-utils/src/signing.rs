//! Deterministic Ed25519 signing of interaction requests.

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};

/// Seed of the key pair shared by every test signer.
const SEED: [u8; 32] = [7; 32];

/// Signs request bodies the way Discord does for interaction webhooks.
///
/// The signature covers the timestamp header followed by the raw body and is
/// transmitted hex encoded.
///
/// # Example
///
/// ```rust,ignore
/// let signer = TestSigner::new();
/// let signature = signer.sign("1700000000", body.as_bytes());
/// ```
pub struct TestSigner {
    key: SigningKey,
}

impl TestSigner {
    /// Creates the signer from a fixed seed so keys are stable across runs.
    pub fn new() -> Self {
        Self {
            key: SigningKey::from_bytes(&SEED),
        }
    }

    /// Public half of the key pair.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }

    /// Public key hex encoded, as shown in the Discord developer portal.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.verifying_key().as_bytes())
    }

    /// Signs `timestamp ++ body` and returns the hex encoded signature.
    pub fn sign(&self, timestamp: &str, body: &[u8]) -> String {
        let message = [timestamp.as_bytes(), body].concat();
        hex::encode(self.key.sign(&message).to_bytes())
    }
}

impl Default for TestSigner {
    fn default() -> Self {
        Self::new()
    }
}

/// A signer whose key differs from `TestSigner`, for forged requests.
pub fn foreign_signer() -> TestSigner {
    TestSigner {
        key: SigningKey::from_bytes(&[9; 32]),
    }
}
