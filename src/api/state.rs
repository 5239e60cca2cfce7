//! Application state for the portfolio stats API.
//!
//! This module defines the shared state available to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::config::ContentLoader;

/// Shared application state.
///
/// Holds the loaded content and the clock that supplies "today" for every
/// calculation. Both are read-only after construction.
#[derive(Clone)]
pub struct AppState {
    /// The loaded portfolio content.
    content: Arc<ContentLoader>,
    /// The source of the evaluation date.
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state that reads the system clock.
    pub fn new(content: ContentLoader) -> Self {
        Self::with_clock(content, SystemClock)
    }

    /// Creates a new application state with a specific clock.
    pub fn with_clock<C: Clock + 'static>(content: ContentLoader, clock: C) -> Self {
        Self {
            content: Arc::new(content),
            clock: Arc::new(clock),
        }
    }

    /// Returns a reference to the content loader.
    pub fn content(&self) -> &ContentLoader {
        &self.content
    }

    /// Returns today's date according to the configured clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_uses_injected_clock() {
        let content = ContentLoader::load("./content").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let state = AppState::with_clock(content, FixedClock(date));
        assert_eq!(state.today(), date);
        assert_eq!(state.clone().today(), date);
    }
}
