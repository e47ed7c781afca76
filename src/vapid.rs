//! VAPID key generation and validation (RFC 8292).
//!
//! The push service authenticates the sender by the P-256 ECDSA keypair
//! whose public half the browser supplied as `applicationServerKey` when
//! subscribing. Keys are handled base64url-encoded end to end: the
//! private key as the raw 32-byte scalar (the exact format
//! `VapidSignatureBuilder::from_base64()` expects, not SEC1 or PKCS8
//! DER), the public key as the 65-byte uncompressed SEC1 point.

// Rust guideline compliant 2026-02

use anyhow::{Context, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};
use p256::ecdsa::SigningKey;
use p256::elliptic_curve::rand_core::OsRng;
use serde::{Deserialize, Serialize};

use crate::subscription::P256DH_LEN;

/// VAPID private key scalar length.
const PRIVATE_KEY_LEN: usize = 32;

/// VAPID keypair for web push authentication.
#[derive(Debug, Serialize, Deserialize)]
pub struct VapidKeys {
    /// Raw 32-byte P-256 private key scalar (base64url).
    private_key_b64: String,
    /// Uncompressed public key bytes (base64url, 65 bytes decoded).
    public_key_b64: String,
}

impl VapidKeys {
    /// Generate a fresh VAPID keypair.
    pub fn generate() -> Result<Self> {
        let signing_key = SigningKey::random(&mut OsRng);
        let verifying_key = signing_key.verifying_key();

        // SEC1 uncompressed public key (65 bytes: 0x04 || x || y)
        let public_key_b64 = BASE64URL.encode(verifying_key.to_encoded_point(false).as_bytes());
        let private_key_b64 = BASE64URL.encode(signing_key.to_bytes().as_slice());

        Ok(Self {
            private_key_b64,
            public_key_b64,
        })
    }

    /// Reconstruct a keypair from base64url-encoded strings.
    ///
    /// Validates both shapes: the public key must be a 65-byte
    /// uncompressed P-256 point, the private key a valid 32-byte scalar.
    pub fn from_base64url(public_key_b64: &str, private_key_b64: &str) -> Result<Self> {
        let pub_bytes = BASE64URL
            .decode(public_key_b64)
            .context("Invalid base64url for VAPID public key")?;
        anyhow::ensure!(
            pub_bytes.len() == P256DH_LEN && pub_bytes[0] == 0x04,
            "VAPID public key must be {P256DH_LEN}-byte uncompressed P-256 point"
        );

        let priv_bytes = BASE64URL
            .decode(private_key_b64)
            .context("Invalid base64url for VAPID private key")?;
        anyhow::ensure!(
            priv_bytes.len() == PRIVATE_KEY_LEN,
            "VAPID private key must be {PRIVATE_KEY_LEN}-byte P-256 scalar, got {} bytes",
            priv_bytes.len()
        );
        SigningKey::from_bytes(priv_bytes.as_slice().into())
            .context("VAPID private key is not a valid P-256 scalar")?;

        Ok(Self {
            private_key_b64: private_key_b64.to_string(),
            public_key_b64: public_key_b64.to_string(),
        })
    }

    /// Base64url-encoded uncompressed public key (65 bytes decoded).
    ///
    /// This is handed to browsers as the `applicationServerKey` for
    /// `pushManager.subscribe()`.
    pub fn public_key_base64url(&self) -> &str {
        &self.public_key_b64
    }

    /// Base64url-encoded raw 32-byte private key scalar.
    pub fn private_key_base64url(&self) -> &str {
        &self.private_key_b64
    }
}
