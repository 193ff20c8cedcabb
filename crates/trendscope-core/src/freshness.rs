//! Request tokens that keep stale responses out of view state.
//!
//! Each logical request takes a token from a [`RequestTracker`] before it
//! starts. When its result arrives, [`Latest::apply`] stores it only if no
//! newer request has been issued since, so out-of-order resolution can never
//! overwrite newer state. In-flight work is never aborted; stale results are
//! dropped on arrival.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

/// Monotonic token identifying one logical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing request tokens.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token newer than every token issued so far.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` is the most recently issued one.
    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

#[derive(Debug)]
struct Stamped<T> {
    token: RequestToken,
    value: T,
}

/// Slot holding the result of the most recent request.
#[derive(Debug)]
pub struct Latest<T> {
    tracker: RequestTracker,
    slot: RwLock<Option<Stamped<T>>>,
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self {
            tracker: RequestTracker::new(),
            slot: RwLock::new(None),
        }
    }
}

impl<T: Clone> Latest<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier ones.
    pub fn begin(&self) -> RequestToken {
        self.tracker.begin()
    }

    /// Whether `token` still belongs to the newest request.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.tracker.is_latest(token)
    }

    /// Store `value` if `token` is still current. Returns whether it was stored.
    pub async fn apply(&self, token: RequestToken, value: T) -> bool {
        let mut slot = self.slot.write().await;
        if !self.tracker.is_latest(token) {
            debug!(
                request_token = token.value(),
                stale = true,
                "Discarding superseded result"
            );
            return false;
        }
        if let Some(existing) = slot.as_ref() {
            if existing.token > token {
                return false;
            }
        }
        *slot = Some(Stamped { token, value });
        true
    }

    /// Current value, if any request has completed.
    pub async fn get(&self) -> Option<T> {
        self.slot.read().await.as_ref().map(|s| s.value.clone())
    }

    /// Current value together with the token that produced it.
    pub async fn get_stamped(&self) -> Option<(RequestToken, T)> {
        self.slot
            .read()
            .await
            .as_ref()
            .map(|s| (s.token, s.value.clone()))
    }

    /// Replace the stored value if it still carries `token`.
    ///
    /// Used for follow-up updates (such as regenerated ideas) that belong to
    /// the request that produced the current value.
    pub async fn update_if<F>(&self, token: RequestToken, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let mut slot = self.slot.write().await;
        match slot.as_mut() {
            Some(stamped) if stamped.token == token && self.tracker.is_latest(token) => {
                stamped.value = f(&stamped.value);
                true
            }
            _ => false,
        }
    }
}
