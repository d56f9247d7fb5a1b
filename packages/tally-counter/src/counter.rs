//! The counter view-model.
//!
//! [`Counter`] is plain data. It knows nothing about Dioxus; the view holds it inside a
//! [`Signal`](dioxus::prelude::Signal) and calls into it from event handlers, which is what makes
//! the bound text re-render.

use std::fmt;

/// A single tally count.
///
/// The only ways to change the count during normal operation are [`Counter::tally`] and
/// [`Counter::reset`]. [`Counter::with_count`] and [`Counter::set_count`] exist so tests and
/// callers can seed an arbitrary value, including [`u64::MAX`].
///
/// ```rust
/// use tally_counter::Counter;
///
/// let mut counter = Counter::new();
/// counter.tally();
/// counter.tally();
/// assert_eq!(counter.count(), 2);
///
/// counter.reset();
/// assert_eq!(counter.count(), 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Counter {
    count: u64,
}

impl Counter {
    /// Create a counter at zero.
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Create a counter already holding `count`.
    pub const fn with_count(count: u64) -> Self {
        Self { count }
    }

    /// The current count.
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Overwrite the current count.
    pub fn set_count(&mut self, count: u64) {
        self.count = count;
    }

    /// Add one to the count.
    ///
    /// Once the count reaches [`u64::MAX`] it stays there.
    pub fn tally(&mut self) {
        self.count = self.count.saturating_add(1);
        tracing::debug!(count = self.count, "tally");
    }

    /// Set the count back to zero.
    pub fn reset(&mut self) {
        self.count = 0;
        tracing::debug!(count = self.count, "reset");
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)
    }
}
