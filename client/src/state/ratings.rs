//! Rating submission state for the user store list.

#[cfg(test)]
#[path = "ratings_test.rs"]
mod ratings_test;

use std::collections::BTreeSet;

/// Stores whose rating request is in flight. Each store's buttons stay
/// disabled until its own request settles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RatingSubmission {
    pending: BTreeSet<i64>,
}

impl RatingSubmission {
    /// Start submitting for `store_id`. Refused while that store is pending.
    pub fn begin(&mut self, store_id: i64) -> bool {
        self.pending.insert(store_id)
    }

    pub fn finish(&mut self, store_id: i64) {
        self.pending.remove(&store_id);
    }

    pub fn is_pending(&self, store_id: i64) -> bool {
        self.pending.contains(&store_id)
    }
}
