//! Change signals and scoped subscriptions.
//!
//! A component that shows a derived view of a list (a count badge, a cart
//! page) holds a [`Subscription`] for as long as it is mounted. The
//! subscription merges two sources:
//!
//! - same-tab signals broadcast by the store after each mutation
//! - storage events raised when another tab writes the shared backend
//!
//! Dropping the subscription unsubscribes from both.

use shopfront_core::TabId;
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};

use super::keys::ListKey;
use crate::storage::StorageEvent;

/// Same-tab signal fired after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSignal {
    /// The cart list changed; re-read it.
    CartUpdated,
    /// The wishlist changed; re-read it.
    WishlistUpdated,
}

impl StoreSignal {
    /// List the signal refers to.
    #[must_use]
    pub const fn key(self) -> ListKey {
        match self {
            Self::CartUpdated => ListKey::Cart,
            Self::WishlistUpdated => ListKey::Wishlist,
        }
    }

    /// Event name, for logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CartUpdated => "cartUpdated",
            Self::WishlistUpdated => "wishlistUpdated",
        }
    }
}

/// What a subscriber should re-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// One list changed.
    List(ListKey),
    /// Notifications were missed; re-read everything.
    All,
}

impl Refresh {
    /// Returns true if this refresh requires re-reading `key`.
    #[must_use]
    pub fn covers(self, key: ListKey) -> bool {
        match self {
            Self::List(changed) => changed == key,
            Self::All => true,
        }
    }
}

/// A mounted component's view of store changes.
#[derive(Debug)]
pub struct Subscription {
    tab: TabId,
    signals: broadcast::Receiver<StoreSignal>,
    storage: broadcast::Receiver<StorageEvent>,
}

impl Subscription {
    pub(crate) const fn new(
        tab: TabId,
        signals: broadcast::Receiver<StoreSignal>,
        storage: broadcast::Receiver<StorageEvent>,
    ) -> Self {
        Self {
            tab,
            signals,
            storage,
        }
    }

    /// Wait for the next relevant change.
    ///
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<Refresh> {
        loop {
            tokio::select! {
                signal = self.signals.recv() => match signal {
                    Ok(signal) => return Some(Refresh::List(signal.key())),
                    Err(RecvError::Lagged(missed)) => {
                        tracing::debug!(missed, "Store signal subscriber lagged");
                        return Some(Refresh::All);
                    }
                    Err(RecvError::Closed) => return None,
                },
                event = self.storage.recv() => match event {
                    Ok(event) => {
                        if let Some(refresh) = self.from_storage(&event) {
                            return Some(refresh);
                        }
                    }
                    Err(RecvError::Lagged(missed)) => {
                        tracing::debug!(missed, "Storage event subscriber lagged");
                        return Some(Refresh::All);
                    }
                    Err(RecvError::Closed) => return None,
                },
            }
        }
    }

    /// Take the next pending change without waiting.
    ///
    /// Same-tab signals are drained before storage events.
    pub fn try_changed(&mut self) -> Option<Refresh> {
        match self.signals.try_recv() {
            Ok(signal) => return Some(Refresh::List(signal.key())),
            Err(TryRecvError::Lagged(_)) => return Some(Refresh::All),
            Err(TryRecvError::Empty | TryRecvError::Closed) => {}
        }

        loop {
            match self.storage.try_recv() {
                Ok(event) => {
                    if let Some(refresh) = self.from_storage(&event) {
                        return Some(refresh);
                    }
                }
                Err(TryRecvError::Lagged(_)) => return Some(Refresh::All),
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Storage events from this tab's own writes are already covered by the
    /// same-tab signal, and unknown keys are not ours.
    fn from_storage(&self, event: &StorageEvent) -> Option<Refresh> {
        if event.origin == self.tab {
            return None;
        }
        ListKey::parse(&event.key).map(Refresh::List)
    }
}
