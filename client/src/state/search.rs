//! Filters of the last submitted search.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Holds what the user last searched for. Refetches reuse these so text typed
/// into the filter inputs changes nothing until it is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppliedFilters<F> {
    current: F,
}

impl<F: Clone> AppliedFilters<F> {
    /// Record a submitted search and return the filters to fetch with.
    pub fn submit(&mut self, filters: F) -> F {
        self.current = filters;
        self.current.clone()
    }

    pub fn current(&self) -> F {
        self.current.clone()
    }
}
