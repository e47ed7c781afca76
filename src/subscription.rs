//! Browser push subscription shape and key-encoding adapters.
//!
//! A browser hands its subscription to the server in one of two forms:
//! the JSON from `PushSubscription.toJSON()`, where both keys are already
//! base64url strings, or the raw `ArrayBuffer`s from
//! `subscription.getKey('p256dh')` / `getKey('auth')`. Both paths are
//! kept as explicit constructors: [`PushSubscription::from_encoded`]
//! takes the client's encoding as-is, [`PushSubscription::from_raw_keys`]
//! encodes the bytes server-side.

// Rust guideline compliant 2026-02

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};
use serde::{Deserialize, Serialize};

use crate::error::SubscriptionError;

/// Uncompressed SEC1 P-256 point length (0x04 || x || y).
pub(crate) const P256DH_LEN: usize = 65;
/// Shared auth secret length per RFC 8291.
pub(crate) const AUTH_SECRET_LEN: usize = 16;

/// Key material from a browser push subscription (base64url).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionKeys {
    /// Browser's P-256 ECDH public key (base64url).
    pub p256dh: String,
    /// Shared auth secret (base64url).
    pub auth: String,
}

/// A browser's push subscription.
///
/// Matches the `PushSubscription.toJSON()` wire shape. Unknown fields
/// such as `expirationTime` are ignored on deserialization; missing
/// `endpoint` or key fields fail it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSubscription {
    /// Push service endpoint URL.
    pub endpoint: String,
    /// ECDH public key and auth secret.
    pub keys: SubscriptionKeys,
}

impl PushSubscription {
    /// Build from client-supplied base64url key strings, taken as-is.
    ///
    /// Nothing is decoded here; call [`validate`](Self::validate) (or let
    /// [`SubscriptionStore::subscribe`](crate::store::SubscriptionStore::subscribe)
    /// do it) to check the shape.
    pub fn from_encoded(
        endpoint: impl Into<String>,
        p256dh: impl Into<String>,
        auth: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            keys: SubscriptionKeys {
                p256dh: p256dh.into(),
                auth: auth.into(),
            },
        }
    }

    /// Build from raw key buffers as returned by `subscription.getKey()`,
    /// encoding them base64url server-side.
    pub fn from_raw_keys(endpoint: impl Into<String>, p256dh: &[u8], auth: &[u8]) -> Self {
        Self {
            endpoint: endpoint.into(),
            keys: SubscriptionKeys {
                p256dh: BASE64URL.encode(p256dh),
                auth: BASE64URL.encode(auth),
            },
        }
    }

    /// Check that the subscription has the shape web push delivery needs.
    ///
    /// The endpoint must parse as an http(s) URL, `p256dh` must decode to
    /// a 65-byte uncompressed P-256 point and `auth` to a 16-byte secret.
    pub fn validate(&self) -> Result<(), SubscriptionError> {
        if self.endpoint.is_empty() {
            return Err(SubscriptionError::EmptyEndpoint);
        }
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| SubscriptionError::InvalidEndpoint(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SubscriptionError::InvalidEndpoint(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        let p256dh = BASE64URL
            .decode(&self.keys.p256dh)
            .map_err(|e| SubscriptionError::InvalidP256dh(e.to_string()))?;
        if p256dh.len() != P256DH_LEN {
            return Err(SubscriptionError::InvalidP256dh(format!(
                "expected {P256DH_LEN} bytes, got {}",
                p256dh.len()
            )));
        }
        if p256dh[0] != 0x04 {
            return Err(SubscriptionError::InvalidP256dh(
                "not an uncompressed SEC1 point".to_string(),
            ));
        }

        let auth = BASE64URL
            .decode(&self.keys.auth)
            .map_err(|e| SubscriptionError::InvalidAuth(e.to_string()))?;
        if auth.len() != AUTH_SECRET_LEN {
            return Err(SubscriptionError::InvalidAuth(format!(
                "expected {AUTH_SECRET_LEN} bytes, got {}",
                auth.len()
            )));
        }

        Ok(())
    }
}
