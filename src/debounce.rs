//! Debounce primitive: a timing filter over a sequence of values.
//!
//! The filter is driven by an injected clock rather than an async runtime,
//! so components stay deterministic under test and free of any executor:
//! the host forwards edits with the current [`Instant`] and calls
//! [`Debounced::poll`] from its event loop tick.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
	value: T,
	deadline: Instant,
}

/// Delays propagation of a rapidly-changing value until it has been
/// stable for the configured delay.
///
/// At most one timer is pending at a time: every [`set`](Self::set)
/// cancels the previously scheduled update before scheduling a new one,
/// so a burst of N changes inside the window settles exactly once, with
/// the last value of the burst.
///
/// # Examples
///
/// ```
/// use formflow::Debounced;
/// use std::time::{Duration, Instant};
///
/// let delay = Duration::from_millis(300);
/// let mut debounced = Debounced::new(String::new(), delay);
/// let t0 = Instant::now();
///
/// debounced.set("a".to_string(), t0);
/// debounced.set("ab".to_string(), t0 + Duration::from_millis(100));
///
/// // Not settled yet: the second edit reset the timer.
/// assert!(debounced.poll(t0 + Duration::from_millis(350)).is_none());
///
/// // Stable for the full delay: settles with the last value.
/// let settled = debounced.poll(t0 + Duration::from_millis(450));
/// assert_eq!(settled.map(String::as_str), Some("ab"));
/// assert_eq!(debounced.value(), "ab");
/// ```
#[derive(Debug, Clone)]
pub struct Debounced<T> {
	settled: T,
	pending: Option<Pending<T>>,
	delay: Duration,
}

impl<T> Debounced<T> {
	/// Create a filter holding `initial` as the settled value.
	pub fn new(initial: T, delay: Duration) -> Self {
		Self {
			settled: initial,
			pending: None,
			delay,
		}
	}

	/// Record a new input value, replacing any pending timer.
	pub fn set(&mut self, value: T, now: Instant) {
		self.pending = Some(Pending {
			value,
			deadline: now + self.delay,
		});
	}

	/// Settle the pending value if its quiet period has elapsed.
	///
	/// Returns the newly settled value exactly once per settle; later
	/// polls return `None` until the next [`set`](Self::set).
	pub fn poll(&mut self, now: Instant) -> Option<&T> {
		if let Some(pending) = self.pending.take() {
			if now >= pending.deadline {
				self.settled = pending.value;
				return Some(&self.settled);
			}
			self.pending = Some(pending);
		}
		None
	}

	/// The last settled value.
	pub fn value(&self) -> &T {
		&self.settled
	}

	/// Whether an update is scheduled but not yet settled.
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Drop the pending timer without settling it.
	///
	/// Called on teardown of the owning field so an unmounted component
	/// never observes a late update.
	pub fn cancel(&mut self) {
		self.pending = None;
	}

	/// The configured quiet period.
	pub fn delay(&self) -> Duration {
		self.delay
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ms(n: u64) -> Duration {
		Duration::from_millis(n)
	}

	#[test]
	fn test_burst_settles_once_with_last_value() {
		// Arrange
		let mut debounced = Debounced::new(0u32, ms(300));
		let t0 = Instant::now();

		// Act: burst of edits inside the window
		debounced.set(1, t0);
		debounced.set(2, t0 + ms(50));
		debounced.set(3, t0 + ms(100));

		// Assert: one settle, last value, then quiet
		assert!(debounced.poll(t0 + ms(350)).is_none());
		assert_eq!(debounced.poll(t0 + ms(400)), Some(&3));
		assert!(debounced.poll(t0 + ms(10_000)).is_none());
		assert_eq!(debounced.value(), &3);
	}

	#[test]
	fn test_settles_exactly_at_deadline() {
		let mut debounced = Debounced::new(0u32, ms(300));
		let t0 = Instant::now();

		debounced.set(7, t0);
		assert!(debounced.poll(t0 + ms(299)).is_none());
		assert_eq!(debounced.poll(t0 + ms(300)), Some(&7));
	}

	#[test]
	fn test_cancel_drops_pending_update() {
		// Arrange
		let mut debounced = Debounced::new("initial".to_string(), ms(300));
		let t0 = Instant::now();
		debounced.set("edited".to_string(), t0);

		// Act
		debounced.cancel();

		// Assert: the settled value never changes
		assert!(!debounced.is_pending());
		assert!(debounced.poll(t0 + ms(1_000)).is_none());
		assert_eq!(debounced.value(), "initial");
	}

	#[test]
	fn test_each_set_resets_the_timer() {
		let mut debounced = Debounced::new(0u32, ms(300));
		let t0 = Instant::now();

		debounced.set(1, t0);
		// Just before the first deadline, a new edit arrives.
		debounced.set(2, t0 + ms(299));

		// The first deadline passes without settling.
		assert!(debounced.poll(t0 + ms(300)).is_none());
		assert!(debounced.is_pending());

		// The second deadline settles value 2.
		assert_eq!(debounced.poll(t0 + ms(599)), Some(&2));
	}
}
