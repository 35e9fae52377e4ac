//! Free-text input with debounced validation.

use crate::debounce::Debounced;
use crate::field::{FieldDescriptor, FieldEvent, FieldState, FieldValue};
use crate::validation::{ValidationRules, validate_alphabetic};
use std::time::{Duration, Instant};

/// Default quiet period before a text edit is validated.
pub const TEXT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// A controlled text input.
///
/// Edits propagate upward immediately as [`FieldEvent::ValueChanged`];
/// validation runs only once the debounce window settles, at which point
/// the composite rule set is evaluated first and the alphabetic check
/// second — the first failing check's message wins.
///
/// # Examples
///
/// ```
/// use formflow::fields::TextInput;
/// use formflow::{FieldEvent, FieldState, ValidationRules};
/// use std::time::{Duration, Instant};
///
/// let mut input = TextInput::new("first_name")
/// 	.with_rules(ValidationRules::new().required());
/// let t0 = Instant::now();
///
/// let events = input.input("Ada", t0);
/// assert_eq!(events.len(), 1); // value reported immediately
/// assert_eq!(input.state(), FieldState::Editing);
///
/// let events = input.tick(t0 + Duration::from_millis(300));
/// assert_eq!(input.state(), FieldState::Validated);
/// assert_eq!(
/// 	events,
/// 	vec![FieldEvent::ErrorChanged { name: "first_name".into(), error: String::new() }],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TextInput {
	descriptor: FieldDescriptor,
	hint_text: Option<String>,
	value: String,
	debounced: Debounced<String>,
	state: FieldState,
	error: String,
}

impl TextInput {
	/// Create a text input for the given field name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			descriptor: FieldDescriptor::new(name),
			hint_text: None,
			value: String::new(),
			debounced: Debounced::new(String::new(), TEXT_DEBOUNCE_DELAY),
			state: FieldState::Pristine,
			error: String::new(),
		}
	}

	/// Set the display label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.descriptor = self.descriptor.with_label(label);
		self
	}

	/// Mark the field required for the aggregator's submit pass.
	pub fn required(mut self) -> Self {
		self.descriptor = self.descriptor.required();
		self
	}

	/// Attach the composite rule set evaluated after each debounce settle.
	pub fn with_rules(mut self, rules: ValidationRules) -> Self {
		self.descriptor = self.descriptor.with_rules(rules);
		self
	}

	/// Set the placeholder hint.
	pub fn with_hint_text(mut self, hint: impl Into<String>) -> Self {
		self.hint_text = Some(hint.into());
		self
	}

	/// Override the debounce delay.
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.debounced = Debounced::new(self.debounced.value().clone(), delay);
		self
	}

	/// The descriptor to register with the form aggregator.
	pub fn descriptor(&self) -> &FieldDescriptor {
		&self.descriptor
	}

	pub fn state(&self) -> FieldState {
		self.state
	}

	/// The current (not yet debounced) value.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// The field's own error slot (empty = no error).
	pub fn error(&self) -> &str {
		&self.error
	}

	pub fn hint_text(&self) -> Option<&str> {
		self.hint_text.as_deref()
	}

	/// Record a user edit. The new value is reported upward immediately;
	/// only the validation is debounced.
	pub fn input(&mut self, value: impl Into<String>, now: Instant) -> Vec<FieldEvent> {
		let value = value.into();
		self.value = value.clone();
		self.state = FieldState::Editing;
		self.debounced.set(value.clone(), now);

		vec![FieldEvent::ValueChanged {
			name: self.descriptor.name.clone(),
			value: FieldValue::Text(value),
		}]
	}

	/// Advance time. When the debounce window settles, the validators run
	/// against the settled value and the error slot is reported upward.
	pub fn tick(&mut self, now: Instant) -> Vec<FieldEvent> {
		let Some(settled) = self.debounced.poll(now) else {
			return vec![];
		};
		let settled = settled.clone();
		tracing::trace!(field = %self.descriptor.name, "text input settled, validating");

		self.error = self.validation_error(&settled);
		self.state = FieldState::Validated;

		vec![FieldEvent::ErrorChanged {
			name: self.descriptor.name.clone(),
			error: self.error.clone(),
		}]
	}

	/// Cancel the pending debounce timer. Called on teardown so an
	/// unmounted field never runs a late validation pass.
	pub fn teardown(&mut self) {
		self.debounced.cancel();
	}

	fn validation_error(&self, value: &str) -> String {
		let label = self.descriptor.display_label();
		let composite = self
			.descriptor
			.rules
			.as_ref()
			.map_or(Ok(()), |rules| rules.validate(label, &FieldValue::Text(value.to_string())));

		composite
			.and_then(|()| validate_alphabetic(value))
			.err()
			.map(|e| e.to_string())
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	fn ms(n: u64) -> Duration {
		Duration::from_millis(n)
	}

	#[test]
	fn test_value_propagates_immediately_validation_waits() {
		// Arrange
		let mut input = TextInput::new("name");
		let t0 = Instant::now();

		// Act
		let events = input.input("Ada", t0);

		// Assert: value reported, no error event yet
		assert_eq!(
			events,
			vec![FieldEvent::ValueChanged {
				name: "name".to_string(),
				value: FieldValue::Text("Ada".to_string()),
			}]
		);
		assert!(input.tick(t0 + ms(100)).is_empty());
		assert_eq!(input.state(), FieldState::Editing);
	}

	#[test]
	fn test_burst_validates_once_with_last_value() {
		// Arrange: digits are rejected by the alphabetic check
		let mut input = TextInput::new("name");
		let t0 = Instant::now();

		// Act: three keystrokes inside the window, last one invalid
		input.input("A", t0);
		input.input("Ad", t0 + ms(50));
		input.input("Ad4", t0 + ms(100));
		let events = input.tick(t0 + ms(400));

		// Assert: exactly one validation pass, against "Ad4"
		assert_eq!(
			events,
			vec![FieldEvent::ErrorChanged {
				name: "name".to_string(),
				error: "Only alphabetic characters are allowed".to_string(),
			}]
		);
		assert_eq!(input.state(), FieldState::Validated);
		assert!(input.tick(t0 + ms(10_000)).is_empty());
	}

	#[test]
	fn test_rules_run_before_alphabetic_check() {
		// Arrange: "ab1" violates both min_length and the alphabetic check
		let mut input =
			TextInput::new("name").with_rules(ValidationRules::new().with_min_length(5));
		let t0 = Instant::now();

		// Act
		input.input("ab1", t0);
		let events = input.tick(t0 + ms(300));

		// Assert: the composite rule message wins
		assert_eq!(
			events,
			vec![FieldEvent::ErrorChanged {
				name: "name".to_string(),
				error: "name must be at least 5 characters.".to_string(),
			}]
		);
	}

	#[test]
	fn test_edit_after_validation_restarts_cycle() {
		let mut input = TextInput::new("name");
		let t0 = Instant::now();

		input.input("Ada", t0);
		input.tick(t0 + ms(300));
		assert_eq!(input.state(), FieldState::Validated);

		input.input("Ada1", t0 + ms(400));
		assert_eq!(input.state(), FieldState::Editing);
	}

	#[test]
	fn test_teardown_cancels_pending_validation() {
		let mut input = TextInput::new("name");
		let t0 = Instant::now();

		input.input("Ad4", t0);
		input.teardown();

		assert!(input.tick(t0 + ms(10_000)).is_empty());
		assert_eq!(input.error(), "");
	}
}
