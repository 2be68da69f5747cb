//! Fetch state for dashboard panels.
//!
//! DESIGN
//! ======
//! Each fetch gets a sequence number. A response is applied only if it belongs
//! to the latest request, so a slow response to an old filter cannot overwrite
//! a newer result.

#[cfg(test)]
#[path = "loadable_test.rs"]
mod loadable_test;

/// Data fetched from the API plus its loading/error status.
#[derive(Clone, Debug, PartialEq)]
pub struct Loadable<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl<T> Default for Loadable<T> {
    /// Panels start loading: the first fetch is issued on mount.
    fn default() -> Self {
        Self { data: None, loading: true, error: None, seq: 0 }
    }
}

impl<T> Loadable<T> {
    /// Start a fetch and return its ticket.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    /// Apply the result for `ticket`. Returns `false` for a superseded ticket.
    pub fn finish(&mut self, ticket: u64, result: Result<T, String>) -> bool {
        if ticket != self.seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => self.data = Some(data),
            Err(message) => self.error = Some(message),
        }
        true
    }
}

impl<T> Loadable<Vec<T>> {
    /// Loaded successfully with nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.data.as_ref().is_none_or(Vec::is_empty)
    }

    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or_default()
    }
}
