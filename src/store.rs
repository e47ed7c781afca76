//! Single-slot subscription store.
//!
//! Holds at most one push subscription in memory. The store is an
//! explicit object passed to the notifier, not a process-wide global, so
//! callers decide where the state lives. Contents reset on restart; a
//! deployment that needs durability persists subscriptions elsewhere and
//! re-subscribes on startup.

// Rust guideline compliant 2026-02

use crate::error::SubscriptionError;
use crate::subscription::PushSubscription;

/// Stores the current push subscription, if any.
///
/// A later subscribe replaces the slot wholesale; there is no history
/// and no per-user identity. Methods take `&mut self` without internal
/// locking - callers sharing the store across tasks wrap it themselves,
/// and last write wins.
#[derive(Debug, Default)]
pub struct SubscriptionStore {
    current: Option<PushSubscription>,
}

impl SubscriptionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a subscription, replacing any prior one.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionError`] when the subscription is malformed
    /// (missing/invalid endpoint or keys). The prior subscription, if
    /// any, is kept in that case.
    pub fn subscribe(&mut self, subscription: PushSubscription) -> Result<(), SubscriptionError> {
        subscription.validate()?;
        log::info!("[WebPush] Subscribed: {}", subscription.endpoint);
        self.current = Some(subscription);
        Ok(())
    }

    /// Clear the stored subscription.
    ///
    /// Never fails; clearing an empty store is a no-op.
    pub fn unsubscribe(&mut self) {
        if self.current.take().is_some() {
            log::info!("[WebPush] Unsubscribed");
        }
    }

    /// The stored subscription, if any.
    pub fn current(&self) -> Option<&PushSubscription> {
        self.current.as_ref()
    }

    /// Whether the store holds no subscription.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Fill the slot without validation, to exercise send-time shape
    /// re-checks.
    #[cfg(test)]
    pub(crate) fn insert_unchecked(&mut self, subscription: PushSubscription) {
        self.current = Some(subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};

    fn valid_subscription(endpoint: &str) -> PushSubscription {
        let mut point = vec![0x04];
        point.extend_from_slice(&[0xAB; 64]);
        PushSubscription::from_raw_keys(endpoint, &point, &[0x11u8; 16])
    }

    #[test]
    fn test_subscribe_stores_subscription() {
        let mut store = SubscriptionStore::new();
        assert!(store.is_empty());

        store
            .subscribe(valid_subscription("https://push.example.com/reg/1"))
            .expect("subscribe");
        assert!(!store.is_empty());
        assert_eq!(
            store.current().expect("stored").endpoint,
            "https://push.example.com/reg/1"
        );
    }

    #[test]
    fn test_second_subscribe_overwrites_first() {
        let mut store = SubscriptionStore::new();
        store
            .subscribe(valid_subscription("https://push.example.com/reg/1"))
            .expect("first subscribe");
        store
            .subscribe(valid_subscription("https://push.example.com/reg/2"))
            .expect("second subscribe");

        assert_eq!(
            store.current().expect("stored").endpoint,
            "https://push.example.com/reg/2"
        );
    }

    #[test]
    fn test_subscribe_rejects_malformed_and_keeps_prior() {
        let mut store = SubscriptionStore::new();
        store
            .subscribe(valid_subscription("https://push.example.com/reg/1"))
            .expect("subscribe");

        let mut point = vec![0x04];
        point.extend_from_slice(&[0xAB; 64]);
        let bad = PushSubscription::from_encoded(
            "https://push.example.com/reg/2",
            BASE64URL.encode(&point),
            "not!base64url!",
        );
        assert!(matches!(
            store.subscribe(bad),
            Err(SubscriptionError::InvalidAuth(_))
        ));

        // Prior subscription survives a rejected replacement
        assert_eq!(
            store.current().expect("stored").endpoint,
            "https://push.example.com/reg/1"
        );
    }

    #[test]
    fn test_unsubscribe_clears_slot() {
        let mut store = SubscriptionStore::new();
        store
            .subscribe(valid_subscription("https://push.example.com/reg/1"))
            .expect("subscribe");

        store.unsubscribe();
        assert!(store.is_empty());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_unsubscribe_on_empty_store_is_noop() {
        let mut store = SubscriptionStore::new();
        store.unsubscribe();
        store.unsubscribe();
        assert!(store.is_empty());
    }
}
