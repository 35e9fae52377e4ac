//! Email input with debounced validation.

use crate::debounce::Debounced;
use crate::field::{FieldDescriptor, FieldEvent, FieldState, FieldValue};
use crate::validation::{ValidationRules, validate_email};
use std::time::{Duration, Instant};

use super::text::TEXT_DEBOUNCE_DELAY;

/// A controlled email input.
///
/// Behaves like [`TextInput`](super::TextInput) but the settled value is
/// checked against the fixed `local@domain.tld` shape after the composite
/// rule set.
///
/// # Examples
///
/// ```
/// use formflow::fields::EmailInput;
/// use formflow::FieldEvent;
/// use std::time::{Duration, Instant};
///
/// let mut input = EmailInput::new("email").required();
/// let t0 = Instant::now();
///
/// input.input("not-an-email", t0);
/// let events = input.tick(t0 + Duration::from_millis(300));
/// assert_eq!(
/// 	events,
/// 	vec![FieldEvent::ErrorChanged {
/// 		name: "email".into(),
/// 		error: "Invalid email address".into(),
/// 	}],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EmailInput {
	descriptor: FieldDescriptor,
	hint_text: Option<String>,
	value: String,
	debounced: Debounced<String>,
	state: FieldState,
	error: String,
}

impl EmailInput {
	/// Create an email input for the given field name.
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

	/// Attach the composite rule set evaluated before the email check.
	pub fn with_rules(mut self, rules: ValidationRules) -> Self {
		self.descriptor = self.descriptor.with_rules(rules);
		self
	}

	/// Set the pattern the aggregator re-checks at submit time.
	pub fn with_pattern(mut self, pattern: regex::Regex) -> Self {
		self.descriptor = self.descriptor.with_pattern(pattern);
		self
	}

	/// Set the placeholder hint.
	pub fn with_hint_text(mut self, hint: impl Into<String>) -> Self {
		self.hint_text = Some(hint.into());
		self
	}

	/// The descriptor to register with the form aggregator.
	pub fn descriptor(&self) -> &FieldDescriptor {
		&self.descriptor
	}

	pub fn state(&self) -> FieldState {
		self.state
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn error(&self) -> &str {
		&self.error
	}

	pub fn hint_text(&self) -> Option<&str> {
		self.hint_text.as_deref()
	}

	/// Record a user edit; the value is reported upward immediately.
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

	/// Advance time; validates once the debounce window settles.
	pub fn tick(&mut self, now: Instant) -> Vec<FieldEvent> {
		let Some(settled) = self.debounced.poll(now) else {
			return vec![];
		};
		let settled = settled.clone();
		tracing::trace!(field = %self.descriptor.name, "email input settled, validating");

		self.error = self.validation_error(&settled);
		self.state = FieldState::Validated;

		vec![FieldEvent::ErrorChanged {
			name: self.descriptor.name.clone(),
			error: self.error.clone(),
		}]
	}

	/// Cancel the pending debounce timer on teardown.
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
			.and_then(|()| validate_email(value))
			.err()
			.map(|e| e.to_string())
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::time::Duration;

	fn ms(n: u64) -> Duration {
		Duration::from_millis(n)
	}

	#[rstest]
	#[case("a@b.com", "")]
	#[case("user@example.org", "")]
	#[case("missing-at.com", "Invalid email address")]
	#[case("a@nodot", "Invalid email address")]
	fn test_settled_value_is_shape_checked(#[case] value: &str, #[case] expected: &str) {
		// Arrange
		let mut input = EmailInput::new("email");
		let t0 = Instant::now();

		// Act
		input.input(value, t0);
		let events = input.tick(t0 + ms(300));

		// Assert
		assert_eq!(
			events,
			vec![FieldEvent::ErrorChanged {
				name: "email".to_string(),
				error: expected.to_string(),
			}]
		);
	}

	#[test]
	fn test_rules_take_precedence_over_shape_check() {
		// Arrange: required rule fails before the email shape runs
		let mut input = EmailInput::new("email")
			.with_rules(ValidationRules::new().required());
		let t0 = Instant::now();

		input.input("a", t0);
		input.tick(t0 + ms(300));

		// Act: clearing the field settles an empty value
		input.input("", t0 + ms(400));
		let events = input.tick(t0 + ms(700));

		// Assert
		assert_eq!(
			events,
			vec![FieldEvent::ErrorChanged {
				name: "email".to_string(),
				error: "email is required.".to_string(),
			}]
		);
	}

	#[test]
	fn test_only_last_value_of_burst_is_validated() {
		let mut input = EmailInput::new("email");
		let t0 = Instant::now();

		input.input("a", t0);
		input.input("a@", t0 + ms(100));
		input.input("a@b.com", t0 + ms(200));

		let events = input.tick(t0 + ms(500));
		assert_eq!(
			events,
			vec![FieldEvent::ErrorChanged {
				name: "email".to_string(),
				error: String::new(),
			}]
		);
	}
}
