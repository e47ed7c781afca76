//! VAPID identity from environment configuration.
//!
//! Deployments set the keypair produced by
//! [`VapidKeys::generate`](crate::vapid::VapidKeys::generate) plus a
//! contact subject:
//!
//! - `PUSHRELAY_VAPID_PUBLIC_KEY` - base64url uncompressed P-256 point
//! - `PUSHRELAY_VAPID_PRIVATE_KEY` - base64url raw 32-byte scalar
//! - `PUSHRELAY_VAPID_SUBJECT` - `mailto:` or `https:` contact URI
//!   (optional, defaults to `mailto:admin@localhost`)
//!
//! Push is optional: with neither key set, [`VapidConfig::from_env`]
//! returns `Ok(None)` and the embedding application skips notifications.

// Rust guideline compliant 2026-02

use anyhow::{Context, Result};

use crate::vapid::VapidKeys;

/// Environment variable holding the base64url VAPID public key.
pub const ENV_VAPID_PUBLIC_KEY: &str = "PUSHRELAY_VAPID_PUBLIC_KEY";
/// Environment variable holding the base64url VAPID private key scalar.
pub const ENV_VAPID_PRIVATE_KEY: &str = "PUSHRELAY_VAPID_PRIVATE_KEY";
/// Environment variable holding the VAPID contact subject.
pub const ENV_VAPID_SUBJECT: &str = "PUSHRELAY_VAPID_SUBJECT";

const DEFAULT_SUBJECT: &str = "mailto:admin@localhost";

/// VAPID identity used to authenticate against push services.
#[derive(Debug)]
pub struct VapidConfig {
    keys: VapidKeys,
    subject: String,
}

impl VapidConfig {
    /// Build from explicit keys and contact subject.
    pub fn new(keys: VapidKeys, subject: impl Into<String>) -> Self {
        Self {
            keys,
            subject: subject.into(),
        }
    }

    /// Read the VAPID identity from the environment.
    ///
    /// Returns `Ok(None)` when neither key variable is set (push
    /// disabled for this deployment).
    ///
    /// # Errors
    ///
    /// Fails when only one of the two key variables is set, or when a
    /// key does not pass shape validation.
    pub fn from_env() -> Result<Option<Self>> {
        let public = read_env(ENV_VAPID_PUBLIC_KEY);
        let private = read_env(ENV_VAPID_PRIVATE_KEY);

        let (public, private) = match (public, private) {
            (None, None) => return Ok(None),
            (Some(public), Some(private)) => (public, private),
            _ => anyhow::bail!(
                "Both {ENV_VAPID_PUBLIC_KEY} and {ENV_VAPID_PRIVATE_KEY} must be set"
            ),
        };

        let keys = VapidKeys::from_base64url(&public, &private)
            .context("Invalid VAPID keys in environment")?;
        let subject = read_env(ENV_VAPID_SUBJECT).unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

        Ok(Some(Self { keys, subject }))
    }

    /// Base64url public key handed to browsers as `applicationServerKey`.
    pub fn public_key_base64url(&self) -> &str {
        self.keys.public_key_base64url()
    }

    /// Contact URI placed in the VAPID `sub` claim.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub(crate) fn private_key_base64url(&self) -> &str {
        self.keys.private_key_base64url()
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // from_env tests mutate process-wide env vars; serialize them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var(ENV_VAPID_PUBLIC_KEY);
        std::env::remove_var(ENV_VAPID_PRIVATE_KEY);
        std::env::remove_var(ENV_VAPID_SUBJECT);
    }

    #[test]
    fn test_from_env_unset_means_disabled() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        clear_env();

        assert!(VapidConfig::from_env().expect("from_env").is_none());
    }

    #[test]
    fn test_from_env_requires_both_keys() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        clear_env();

        let keys = VapidKeys::generate().expect("generate keys");
        std::env::set_var(ENV_VAPID_PUBLIC_KEY, keys.public_key_base64url());
        assert!(VapidConfig::from_env().is_err());

        clear_env();
    }

    #[test]
    fn test_from_env_roundtrips_generated_keys() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        clear_env();

        let keys = VapidKeys::generate().expect("generate keys");
        std::env::set_var(ENV_VAPID_PUBLIC_KEY, keys.public_key_base64url());
        std::env::set_var(ENV_VAPID_PRIVATE_KEY, keys.private_key_base64url());
        std::env::set_var(ENV_VAPID_SUBJECT, "mailto:ops@example.com");

        let config = VapidConfig::from_env()
            .expect("from_env")
            .expect("configured");
        assert_eq!(config.public_key_base64url(), keys.public_key_base64url());
        assert_eq!(config.subject(), "mailto:ops@example.com");

        clear_env();
    }

    #[test]
    fn test_from_env_defaults_subject() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        clear_env();

        let keys = VapidKeys::generate().expect("generate keys");
        std::env::set_var(ENV_VAPID_PUBLIC_KEY, keys.public_key_base64url());
        std::env::set_var(ENV_VAPID_PRIVATE_KEY, keys.private_key_base64url());

        let config = VapidConfig::from_env()
            .expect("from_env")
            .expect("configured");
        assert_eq!(config.subject(), "mailto:admin@localhost");

        clear_env();
    }

    #[test]
    fn test_from_env_rejects_garbage_keys() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        clear_env();

        std::env::set_var(ENV_VAPID_PUBLIC_KEY, "garbage");
        std::env::set_var(ENV_VAPID_PRIVATE_KEY, "garbage");
        assert!(VapidConfig::from_env().is_err());

        clear_env();
    }
}
