use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;
use tracing::debug;

use crate::utils;

/// How long an issued `state` stays valid for the callback.
pub const STATE_TTL: Duration = Duration::from_secs(600);

/// Upper bound on outstanding `state` tokens; the oldest is evicted past it.
pub const MAX_PENDING_STATES: usize = 1024;

/// `state` tokens handed out by `/login` that have not come back yet.
///
/// Each token is accepted by [`PendingStates::consume`] at most once and only
/// within its lifetime, so a callback that was not started by this server
/// (or is replayed) is refused before any code is exchanged. At most
/// [`MAX_PENDING_STATES`] tokens are kept; pruning only looks at the oldest
/// entries, so issuing stays constant time per call.
#[derive(Debug, Clone)]
pub struct PendingStates {
    inner: Arc<Mutex<Issued>>,
    ttl: Duration,
    capacity: usize,
}

/// Issued tokens plus their issue order, oldest first.
///
/// `order` may still hold tokens that were already consumed; they are
/// skipped when they reach the front.
#[derive(Debug, Default)]
struct Issued {
    by_state: HashMap<String, Instant>,
    order: VecDeque<String>,
}

impl Issued {
    /// Drops expired tokens from the front, then the oldest ones until at most
    /// `capacity` remain in the queue.
    fn prune(&mut self, now: Instant, ttl: Duration, capacity: usize) {
        while let Some(front) = self.order.front() {
            let expired = match self.by_state.get(front) {
                Some(at) => now.duration_since(*at) >= ttl,
                None => true,
            };
            if !expired && self.order.len() <= capacity {
                break;
            }
            if let Some(oldest) = self.order.pop_front() {
                self.by_state.remove(&oldest);
            }
        }
    }
}

impl Default for PendingStates {
    fn default() -> Self {
        Self::new(STATE_TTL)
    }
}

impl PendingStates {
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, MAX_PENDING_STATES)
    }

    /// A store keeping at most `capacity` outstanding tokens; issuing past it
    /// evicts the oldest one.
    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Issued::default())),
            ttl,
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Generates and records a fresh state token.
    pub async fn issue(&self) -> String {
        let state = utils::generate_state(utils::STATE_LENGTH);
        let now = Instant::now();
        let mut issued = self.inner.lock().await;

        issued.by_state.insert(state.clone(), now);
        issued.order.push_back(state.clone());
        issued.prune(now, self.ttl, self.capacity);

        if issued.by_state.len() == self.capacity {
            debug!(capacity = self.capacity, "pending state store is full");
        }
        state
    }

    /// Removes `state` and reports whether it was issued and still fresh.
    pub async fn consume(&self, state: &str) -> bool {
        let mut issued = self.inner.lock().await;
        match issued.by_state.remove(state) {
            Some(at) => at.elapsed() < self.ttl,
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.by_state.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
