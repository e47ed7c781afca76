//! Pushrelay - in-memory web push subscription relay.
//!
//! Registers a single browser push subscription in process memory and
//! relays notifications to it through the browser's push service, using
//! web push (RFC 8030) with VAPID authentication (RFC 8292).
//!
//! # Architecture
//!
//! ```text
//! Browser registers with pushManager.subscribe(applicationServerKey)
//!     ↓
//! Subscription (endpoint + keys) handed to SubscriptionStore
//!     ↓
//! Notifier encrypts {title, body, icon} payload (RFC 8291)
//!     ↓
//! Push service delivers to service worker
//! ```
//!
//! The store holds at most one subscription and is passed explicitly to
//! the notifier rather than living in process-wide state. There is no
//! persistence, no fan-out and no retry: a failed send is reported to the
//! caller, who re-sends or re-subscribes.
//!
//! # Modules
//!
//! - [`store`] - Single-slot subscription store
//! - [`subscription`] - Subscription shape and key-encoding adapters
//! - [`notify`] - Payload serialization and web push delivery
//! - [`vapid`] - VAPID keypair generation and validation
//! - [`config`] - VAPID identity from environment variables

// Rust guideline compliant 2026-02

pub mod config;
pub mod error;
pub mod notify;
pub mod store;
pub mod subscription;
pub mod vapid;

// Re-export commonly used types
pub use config::VapidConfig;
pub use error::{NotifyError, SubscriptionError};
pub use notify::{Notification, Notifier};
pub use store::SubscriptionStore;
pub use subscription::{PushSubscription, SubscriptionKeys};
pub use vapid::VapidKeys;
