//! Per-session recency state.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};
use mixology_core::CatalogEntity;

use crate::recency::{MAX_RECENT, RecencyTracker};

/// Caller-supplied key isolating one user's recency state from another's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a caller-provided identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Sessions remembered before the least recently recorded one is evicted.
pub const MAX_SESSIONS: usize = 1024;

#[derive(Debug)]
struct SessionEntry {
    last_recorded: u64,
    tracker: RecencyTracker,
}

#[derive(Debug, Default)]
struct Sessions {
    clock: u64,
    entries: HashMap<SessionId, SessionEntry>,
}

impl Sessions {
    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_recorded)
            .map(|(id, _)| id.clone());
        if let Some(id) = oldest {
            debug!("evicting recency for idle session '{id}'");
            self.entries.remove(&id);
        }
    }
}

/// Recency trackers keyed by session, behind a single lock.
///
/// At most `max_sessions` sessions are kept; recording for a new session
/// beyond that evicts the session whose last recording is oldest. A
/// poisoned lock is recovered rather than propagated.
#[derive(Debug)]
pub struct SessionRecency {
    capacity: usize,
    max_sessions: usize,
    sessions: Mutex<Sessions>,
}

impl Default for SessionRecency {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRecency {
    /// Construct an empty registry whose trackers hold [`MAX_RECENT`] ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_RECENT)
    }

    /// Construct an empty registry whose trackers hold `capacity` ids.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_limits(capacity, MAX_SESSIONS)
    }

    /// Construct an empty registry holding at most `max_sessions` sessions
    /// of `capacity` ids each. A `max_sessions` of zero behaves like one.
    #[must_use]
    pub fn with_limits(capacity: usize, max_sessions: usize) -> Self {
        Self {
            capacity,
            max_sessions: max_sessions.max(1),
            sessions: Mutex::new(Sessions::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sessions> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Entities eligible for `session`, excluding its recent picks.
    ///
    /// Falls back to every entity when exclusion would leave fewer than
    /// `min_candidates`.
    #[must_use]
    pub fn candidates(
        &self,
        session: &SessionId,
        entities: &[CatalogEntity],
        min_candidates: usize,
    ) -> Vec<CatalogEntity> {
        let sessions = self.lock();
        let Some(tracker) = sessions
            .entries
            .get(session)
            .map(|entry| &entry.tracker)
            .filter(|tracker| !tracker.is_empty())
        else {
            return entities.to_vec();
        };
        let filtered = tracker.filter_out(entities);
        if filtered.len() < min_candidates && filtered.len() < entities.len() {
            warn!(
                "recency filter for session '{session}' left {} of {} candidates; using the full catalog",
                filtered.len(),
                entities.len()
            );
            return entities.to_vec();
        }
        filtered
    }

    /// Record `entities` as returned to `session`, in order.
    pub fn record<'a, I>(&self, session: &SessionId, entities: I)
    where
        I: IntoIterator<Item = &'a CatalogEntity>,
    {
        let mut sessions = self.lock();
        if !sessions.entries.contains_key(session) && sessions.entries.len() >= self.max_sessions {
            sessions.evict_oldest();
        }
        sessions.clock = sessions.clock.wrapping_add(1);
        let clock = sessions.clock;
        let entry = sessions
            .entries
            .entry(session.clone())
            .or_insert_with(|| SessionEntry {
                last_recorded: clock,
                tracker: RecencyTracker::with_capacity(self.capacity),
            });
        entry.last_recorded = clock;
        for entity in entities {
            entry.tracker.record(entity);
        }
    }

    /// Clear one session, or every session when `session` is `None`.
    pub fn reset(&self, session: Option<&SessionId>) {
        let mut sessions = self.lock();
        match session {
            Some(id) => {
                sessions.entries.remove(id);
            }
            None => sessions.entries.clear(),
        }
    }

    /// Identifiers recently returned to `session`, oldest first.
    #[must_use]
    pub fn recent_ids(&self, session: &SessionId) -> Vec<String> {
        self.lock()
            .entries
            .get(session)
            .map(|entry| entry.tracker.ids().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    /// Number of sessions with recorded history.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.lock().entries.len()
    }
}
