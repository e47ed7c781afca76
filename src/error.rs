//! Categorical errors for subscription handling and push delivery.
//!
//! Failures are returned as values, never propagated as panics: a caller
//! that gets [`NotifyError::NoSubscription`] re-subscribes, a caller that
//! gets [`NotifyError::Transport`] re-sends. Unsubscribing never fails.

// Rust guideline compliant 2026-02

use thiserror::Error;

/// Why a subscription was rejected as malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The endpoint field is empty.
    #[error("Subscription endpoint is empty")]
    EmptyEndpoint,
    /// The endpoint is not an http(s) URL.
    #[error("Invalid subscription endpoint: {0}")]
    InvalidEndpoint(String),
    /// `keys.p256dh` is not a base64url 65-byte uncompressed P-256 point.
    #[error("Invalid p256dh key: {0}")]
    InvalidP256dh(String),
    /// `keys.auth` is not a base64url 16-byte secret.
    #[error("Invalid auth secret: {0}")]
    InvalidAuth(String),
}

/// Why a notification could not be delivered.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Nothing is subscribed; the caller must subscribe first.
    #[error("No subscription available")]
    NoSubscription,
    /// The stored subscription no longer passes shape validation.
    #[error("Invalid subscription format: {0}")]
    InvalidSubscription(#[from] SubscriptionError),
    /// The push service could not be reached or refused the message.
    #[error("Failed to send notification: {0}")]
    Transport(String),
}
