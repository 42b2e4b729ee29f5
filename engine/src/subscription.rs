//! Subscription store and its provisioning scope.
//!
//! The store is the single source of truth for premium access. Screens never
//! hold the flag themselves; they reach the store through a
//! [`SubscriptionProvider`] and re-read it on every frame.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

/// Process-wide subscription state.
///
/// `subscribe` and `unsubscribe` are unconditional and idempotent. Observers
/// obtained from [`SubscriptionStore::watch`] are notified only on an actual
/// change of value.
pub trait SubscriptionStore: Send + Sync + fmt::Debug {
    fn is_subscribed(&self) -> bool;
    fn subscribe(&self);
    fn unsubscribe(&self);
    fn watch(&self) -> watch::Receiver<bool>;
}

/// In-memory store. Starts unsubscribed; nothing survives a restart.
#[derive(Debug)]
pub struct InMemorySubscriptionStore {
    state: watch::Sender<bool>,
}

impl InMemorySubscriptionStore {
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self { state }
    }

    fn set(&self, value: bool) {
        let changed = self.state.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
        if changed {
            tracing::info!(subscribed = value, "Subscription state changed");
        } else {
            tracing::debug!(subscribed = value, "Subscription state unchanged");
        }
    }
}

impl Default for InMemorySubscriptionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionStore for InMemorySubscriptionStore {
    fn is_subscribed(&self) -> bool {
        *self.state.borrow()
    }

    fn subscribe(&self) {
        self.set(true);
    }

    fn unsubscribe(&self) {
        self.set(false);
    }

    fn watch(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubscriptionError {
    #[error("{consumer} must be used within a SubscriptionProvider")]
    OutsideProvider { consumer: &'static str },
}

/// Access point that hands the shared store to screens.
///
/// An unprovided scope is a wiring bug: every access fails with
/// [`SubscriptionError::OutsideProvider`] instead of reporting a default.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionProvider {
    store: Option<Arc<dyn SubscriptionStore>>,
}

impl SubscriptionProvider {
    #[must_use]
    pub fn new(store: Arc<dyn SubscriptionStore>) -> Self {
        Self { store: Some(store) }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySubscriptionStore::new()))
    }

    /// A scope with no store behind it.
    #[must_use]
    pub fn unprovided() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_provided(&self) -> bool {
        self.store.is_some()
    }

    /// `consumer` names the caller in the error.
    pub fn use_subscription(
        &self,
        consumer: &'static str,
    ) -> Result<&dyn SubscriptionStore, SubscriptionError> {
        self.store
            .as_deref()
            .ok_or(SubscriptionError::OutsideProvider { consumer })
    }
}
