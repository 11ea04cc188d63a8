//! Bounded anti-repetition memory of recently returned entities.

use std::collections::VecDeque;

use mixology_core::CatalogEntity;

/// Default number of identifiers a tracker remembers.
pub const MAX_RECENT: usize = 20;

/// FIFO set of recently returned entity identifiers.
///
/// Recording an identifier that is already present moves it to the newest
/// position. Once more than `capacity` identifiers are held the oldest is
/// evicted.
///
/// # Examples
/// ```
/// use mixology_recommender::RecencyTracker;
///
/// let mut recent = RecencyTracker::with_capacity(2);
/// recent.record_id("a");
/// recent.record_id("b");
/// recent.record_id("c");
/// assert_eq!(recent.ids().collect::<Vec<_>>(), ["b", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyTracker {
    ids: VecDeque<String>,
    capacity: usize,
}

impl Default for RecencyTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RecencyTracker {
    /// Construct an empty tracker holding up to [`MAX_RECENT`] identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_RECENT)
    }

    /// Construct an empty tracker holding up to `capacity` identifiers.
    ///
    /// A capacity of zero disables tracking.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of identifiers retained.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remember that `entity` was just returned.
    pub fn record(&mut self, entity: &CatalogEntity) {
        self.record_id(&entity.id);
    }

    /// Remember that the entity with `id` was just returned.
    pub fn record_id(&mut self, id: &str) {
        if let Some(position) = self.ids.iter().position(|known| known == id) {
            self.ids.remove(position);
        }
        self.ids.push_back(id.to_owned());
        while self.ids.len() > self.capacity {
            self.ids.pop_front();
        }
    }

    /// Report whether `id` was returned recently.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// Return the entities whose identifiers are not held.
    #[must_use]
    pub fn filter_out(&self, entities: &[CatalogEntity]) -> Vec<CatalogEntity> {
        entities
            .iter()
            .filter(|entity| !self.contains(&entity.id))
            .cloned()
            .collect()
    }

    /// Forget every identifier.
    pub fn reset(&mut self) {
        self.ids.clear();
    }

    /// Number of identifiers held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Report whether nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate held identifiers, oldest first.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixology_core::test_support::{daiquiri, martini, numbered_entities};
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    fn eviction_keeps_the_most_recent(#[case] overflow: usize) {
        let mut recent = RecencyTracker::new();
        let total = MAX_RECENT + overflow;
        for index in 0..total {
            recent.record_id(&format!("id{index:03}"));
        }
        assert_eq!(recent.len(), MAX_RECENT);
        let expected: Vec<String> = (overflow..total).map(|i| format!("id{i:03}")).collect();
        assert_eq!(recent.ids().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn re_recording_refreshes_position() {
        let mut recent = RecencyTracker::with_capacity(2);
        recent.record_id("a");
        recent.record_id("b");
        recent.record_id("a");
        recent.record_id("c");
        assert_eq!(recent.ids().collect::<Vec<_>>(), ["a", "c"]);
    }

    #[rstest]
    fn filter_out_removes_recent_entities() {
        let mut recent = RecencyTracker::new();
        recent.record(&martini());
        let kept = recent.filter_out(&[martini(), daiquiri()]);
        assert_eq!(kept, vec![daiquiri()]);
    }

    #[rstest]
    fn reset_clears_everything() {
        let mut recent = RecencyTracker::new();
        for entity in numbered_entities(5, &["gin"]) {
            recent.record(&entity);
        }
        recent.reset();
        assert!(recent.is_empty());
        assert!(!recent.contains("e00"));
    }

    #[rstest]
    fn zero_capacity_tracks_nothing() {
        let mut recent = RecencyTracker::with_capacity(0);
        recent.record_id("a");
        assert!(recent.is_empty());
    }
}
