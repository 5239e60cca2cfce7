//! Wrap-around positions for the recognition carousel.

use serde::{Deserialize, Serialize};

/// The entries visible around the selected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselWindow {
    /// Index shown before the current entry.
    pub previous: usize,
    /// The selected index.
    pub current: usize,
    /// Index shown after the current entry.
    pub next: usize,
}

/// Returns the window centred on `index` in a carousel of `total` entries.
///
/// Indexes past the end wrap back to the start, and both neighbours wrap
/// around the ends. Returns `None` for an empty carousel.
///
/// # Example
///
/// ```
/// use portfolio_stats::calculation::carousel_window;
///
/// let window = carousel_window(3, 0).unwrap();
/// assert_eq!((window.previous, window.current, window.next), (2, 0, 1));
/// assert!(carousel_window(0, 0).is_none());
/// ```
pub fn carousel_window(total: usize, index: usize) -> Option<CarouselWindow> {
    if total == 0 {
        return None;
    }
    let current = index % total;
    Some(CarouselWindow {
        previous: (current + total - 1) % total,
        current,
        next: (current + 1) % total,
    })
}
