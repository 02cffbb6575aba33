//! Display reference counter for coalesced show/hide
//!
//! Tracks how many callers currently want an overlay on screen. The overlay
//! is visible exactly while the count is positive; increment/decrement report
//! the edges so callers only touch the UI on 0->1 and 1->0 transitions.

/// A saturating show/hide reference counter
///
/// `increment` and `decrement` return `true` only when the call crossed the
/// zero boundary, i.e. when visibility actually changed. The count never goes
/// below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayCount {
    count: usize,
}

impl DisplayCount {
    /// Create a counter starting at zero (hidden)
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Register one more shower; returns `true` if this made the overlay visible
    pub fn increment(&mut self) -> bool {
        self.count += 1;
        self.count == 1
    }

    /// Release one shower; returns `true` if this hid the overlay
    ///
    /// A decrement with no matching increment is a no-op and returns `false`;
    /// the count saturates at zero.
    pub fn decrement(&mut self) -> bool {
        match self.count {
            0 => false,
            1 => {
                self.count = 0;
                true
            }
            _ => {
                self.count -= 1;
                false
            }
        }
    }

    /// Drop all showers at once; returns `true` if the overlay was visible
    pub fn reset(&mut self) -> bool {
        let was_visible = self.count > 0;
        self.count = 0;
        was_visible
    }

    /// Whether any shower is active
    pub fn is_visible(&self) -> bool {
        self.count > 0
    }

    /// Current number of active showers
    pub fn get(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_count_edges() {
        let mut count = DisplayCount::new();
        assert!(!count.is_visible());
        assert!(count.increment()); // 0 -> 1 shows
        assert!(!count.increment()); // 1 -> 2 coalesces
        assert!(!count.decrement()); // 2 -> 1 stays visible
        assert!(count.decrement()); // 1 -> 0 hides
        assert!(!count.is_visible());
    }

    #[test]
    fn test_display_count_never_negative() {
        let mut count = DisplayCount::new();
        assert!(!count.decrement());
        assert!(!count.decrement());
        assert_eq!(count.get(), 0);
        assert!(count.increment());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_display_count_coalesces_nested_showers() {
        let mut count = DisplayCount::new();
        let mut visible_edges = 0;
        for _ in 0..5 {
            if count.increment() {
                visible_edges += 1;
            }
        }
        assert_eq!(visible_edges, 1);
        assert_eq!(count.get(), 5);
        assert!(count.is_visible());
    }

    #[test]
    fn test_display_count_reset_unconditional() {
        let mut count = DisplayCount::new();
        count.increment();
        count.increment();
        count.increment();
        assert!(count.reset());
        assert_eq!(count.get(), 0);
        assert!(!count.reset()); // already hidden
    }
}
