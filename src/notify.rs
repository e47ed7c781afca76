//! Web push message sending.
//!
//! Serializes the `{title, body, icon}` payload and forwards it through
//! the `web-push` crate (RFC 8291 payload encryption, RFC 8292 VAPID
//! signing), then sends the HTTP request via reqwest. Transport problems
//! come back as [`NotifyError::Transport`] values rather than
//! propagating; the caller decides whether to re-send.

// Rust guideline compliant 2026-02

use serde::{Deserialize, Serialize};
use web_push::{ContentEncoding, SubscriptionInfo, VapidSignatureBuilder, WebPushMessageBuilder};

use crate::config::VapidConfig;
use crate::error::NotifyError;
use crate::store::SubscriptionStore;

/// Push message TTL in seconds (24 hours).
const PUSH_TTL_SECS: u32 = 86_400;

const DEFAULT_TITLE: &str = "Test Notification";
const DEFAULT_ICON: &str = "/icon.png";

/// The notification payload shown by the browser's service worker.
///
/// Wire format is the JSON object `{title, body, icon}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notification {
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// Notification icon path or URL.
    pub icon: String,
}

impl Notification {
    /// Notification with explicit title, body and icon.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: icon.into(),
        }
    }

    /// Body-only notification with the default title and icon.
    pub fn from_message(body: impl Into<String>) -> Self {
        Self::new(DEFAULT_TITLE, body, DEFAULT_ICON)
    }
}

/// Sends web push messages to the currently stored subscription.
///
/// Owns the HTTP client and VAPID identity; the subscription store is
/// passed in per call so the caller decides where that state lives.
#[derive(Debug)]
pub struct Notifier {
    client: reqwest::Client,
    vapid: VapidConfig,
}

impl Notifier {
    /// Create a notifier with its own connection-pooled HTTP client.
    pub fn new(vapid: VapidConfig) -> Self {
        Self::with_client(reqwest::Client::new(), vapid)
    }

    /// Create a notifier reusing an existing reqwest client.
    pub fn with_client(client: reqwest::Client, vapid: VapidConfig) -> Self {
        Self { client, vapid }
    }

    /// Send `notification` to the subscription held by `store`.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::NoSubscription`] when the store is empty
    /// - [`NotifyError::InvalidSubscription`] when the stored value no
    ///   longer passes shape validation
    /// - [`NotifyError::Transport`] when signing, the HTTP request, or
    ///   the push service fails
    pub async fn send(
        &self,
        store: &SubscriptionStore,
        notification: &Notification,
    ) -> Result<(), NotifyError> {
        let Some(subscription) = store.current() else {
            return Err(NotifyError::NoSubscription);
        };
        subscription.validate()?;

        let payload = serde_json::to_vec(notification)
            .map_err(|e| NotifyError::Transport(format!("Failed to serialize payload: {e}")))?;

        let sub_info = SubscriptionInfo::new(
            &subscription.endpoint,
            &subscription.keys.p256dh,
            &subscription.keys.auth,
        );

        let mut sig_builder =
            VapidSignatureBuilder::from_base64(self.vapid.private_key_base64url(), &sub_info)
                .map_err(|e| {
                    NotifyError::Transport(format!("Failed to build VAPID signature: {e}"))
                })?;
        sig_builder.add_claim("sub", self.vapid.subject());
        let sig = sig_builder
            .build()
            .map_err(|e| NotifyError::Transport(format!("Failed to sign VAPID JWT: {e}")))?;

        let mut builder = WebPushMessageBuilder::new(&sub_info);
        builder.set_payload(ContentEncoding::Aes128Gcm, &payload);
        builder.set_vapid_signature(sig);
        builder.set_ttl(PUSH_TTL_SECS);

        let message = builder
            .build()
            .map_err(|e| NotifyError::Transport(format!("Failed to build push message: {e}")))?;

        let mut request = self
            .client
            .post(message.endpoint.to_string())
            .header("TTL", message.ttl.to_string());

        if let Some(urgency) = message.urgency {
            request = request.header("Urgency", urgency.to_string());
        }

        if let Some(topic) = message.topic {
            request = request.header("Topic", topic);
        }

        if let Some(push_payload) = message.payload {
            request = request
                .header("Content-Encoding", push_payload.content_encoding.to_str())
                .header("Content-Type", "application/octet-stream");

            for (key, value) in &push_payload.crypto_headers {
                request = request.header(*key, value.as_str());
            }

            request = request.body(push_payload.content);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NotifyError::Transport(format!("Web push request failed: {e}")))?;
        let status = response.status();

        match status.as_u16() {
            200..=299 => {
                log::info!("[WebPush] Notification sent (HTTP {status})");
                Ok(())
            }
            410 => {
                log::info!("[WebPush] Subscription expired (410 Gone)");
                Err(NotifyError::Transport(
                    "subscription expired (410 Gone)".to_string(),
                ))
            }
            429 => {
                log::warn!("[WebPush] Rate limited (429)");
                Err(NotifyError::Transport("rate limited (429)".to_string()))
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                log::warn!("[WebPush] Push service returned HTTP {status}");
                Err(NotifyError::Transport(format!(
                    "push service returned HTTP {status}: {body}"
                )))
            }
        }
    }
}
