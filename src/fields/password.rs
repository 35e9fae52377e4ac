//! Password input with debounced strength evaluation.

use crate::debounce::Debounced;
use crate::field::{FieldDescriptor, FieldEvent, FieldState, FieldValue};
use crate::password::{PasswordStrength, validate_password};
use std::time::{Duration, Instant};

/// Default quiet period before a password edit is strength-checked.
pub const PASSWORD_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// A controlled password input.
///
/// The strength checklist is recomputed from the settled (debounced)
/// value. Unlike the text-like inputs, the error slot is reported on
/// blur and on submit — not on every settle — matching a field that
/// gives live per-rule hints while typing but only commits an error
/// message once the user leaves the field. Once the form-level
/// submitted flag flips true, every settle re-reports the error so
/// feedback appears without further interaction.
#[derive(Debug, Clone)]
pub struct PasswordInput {
	descriptor: FieldDescriptor,
	hint_text: Option<String>,
	value: String,
	debounced: Debounced<String>,
	strength: PasswordStrength,
	state: FieldState,
	error: String,
	focused: bool,
	tooltip_visible: bool,
	submitted: bool,
}

impl PasswordInput {
	/// Create a password input for the given field name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			descriptor: FieldDescriptor::new(name),
			hint_text: None,
			value: String::new(),
			debounced: Debounced::new(String::new(), PASSWORD_DEBOUNCE_DELAY),
			strength: validate_password(""),
			state: FieldState::Pristine,
			error: String::new(),
			focused: false,
			tooltip_visible: false,
			submitted: false,
		}
	}

	/// Set the display label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.descriptor = self.descriptor.with_label(label);
		self
	}

	/// Mark the field required.
	pub fn required(mut self) -> Self {
		self.descriptor = self.descriptor.required();
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

	/// Per-rule checklist for the settled value, in fixed rule order.
	pub fn strength(&self) -> &PasswordStrength {
		&self.strength
	}

	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Whether the per-rule hint tooltip is showing.
	pub fn tooltip_visible(&self) -> bool {
		self.tooltip_visible
	}

	/// Record a user edit; the value is reported upward immediately,
	/// the strength check waits for the debounce window.
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

	/// Advance time. A settle recomputes the strength checklist; the
	/// error slot is re-reported only once the submitted flag is set.
	pub fn tick(&mut self, now: Instant) -> Vec<FieldEvent> {
		if self.debounced.poll(now).is_none() {
			return vec![];
		}
		self.strength = validate_password(self.debounced.value());
		self.state = FieldState::Validated;

		if self.submitted {
			vec![self.report_error()]
		} else {
			vec![]
		}
	}

	pub fn focus(&mut self) {
		self.focused = true;
	}

	/// Hovering the validity marker shows the per-rule tooltip while any
	/// rule is unmet.
	pub fn set_tooltip_visible(&mut self, visible: bool) {
		self.tooltip_visible = visible && !self.strength.all_rules_satisfied;
	}

	/// Leaving the field commits the current validity into the error slot.
	pub fn blur(&mut self) -> Vec<FieldEvent> {
		self.focused = false;
		self.tooltip_visible = false;
		vec![self.report_error()]
	}

	/// Called when the form-level submitted flag flips true: the field
	/// must show validation feedback even without further interaction.
	pub fn set_submitted(&mut self) -> Vec<FieldEvent> {
		self.submitted = true;
		vec![self.report_error()]
	}

	/// Cancel the pending debounce timer on teardown.
	pub fn teardown(&mut self) {
		self.debounced.cancel();
	}

	// Required check runs on the raw value; the strength verdict comes
	// from the settled value, so it can lag a fast typist until the
	// window settles.
	fn report_error(&mut self) -> FieldEvent {
		self.error = if self.descriptor.required && self.value.trim().is_empty() {
			"Password is required.".to_string()
		} else if !self.strength.all_rules_satisfied {
			"Password does not meet requirements".to_string()
		} else {
			String::new()
		};

		FieldEvent::ErrorChanged {
			name: self.descriptor.name.clone(),
			error: self.error.clone(),
		}
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
	fn test_strength_follows_settled_value() {
		// Arrange
		let mut input = PasswordInput::new("password");
		let t0 = Instant::now();

		// Act
		input.input("Str0ng!pass", t0);

		// Assert: strength still reflects the old settled value
		assert!(!input.strength().all_rules_satisfied);

		input.tick(t0 + ms(500));
		assert!(input.strength().all_rules_satisfied);
		assert_eq!(input.strength().per_rule_results.len(), 5);
	}

	#[test]
	fn test_blur_commits_error_slot() {
		// Arrange
		let mut input = PasswordInput::new("password").required();
		let t0 = Instant::now();
		input.input("weak", t0);
		input.tick(t0 + ms(500));

		// Act
		let events = input.blur();

		// Assert
		assert_eq!(
			events,
			vec![FieldEvent::ErrorChanged {
				name: "password".to_string(),
				error: "Password does not meet requirements".to_string(),
			}]
		);
	}

	#[test]
	fn test_required_empty_beats_strength_message() {
		let mut input = PasswordInput::new("password").required();

		let events = input.blur();
		assert_eq!(
			events,
			vec![FieldEvent::ErrorChanged {
				name: "password".to_string(),
				error: "Password is required.".to_string(),
			}]
		);
	}

	#[test]
	fn test_no_error_report_on_settle_before_submit() {
		// Arrange
		let mut input = PasswordInput::new("password");
		let t0 = Instant::now();

		// Act: settle without blur or submit
		input.input("weak", t0);
		let events = input.tick(t0 + ms(500));

		// Assert: strength updated silently
		assert!(events.is_empty());
		assert!(!input.strength().all_rules_satisfied);
	}

	#[test]
	fn test_submitted_flag_forces_feedback_on_every_settle() {
		// Arrange
		let mut input = PasswordInput::new("password").required();
		let t0 = Instant::now();

		// Act: flag flips true with no input yet
		let events = input.set_submitted();
		assert_eq!(
			events,
			vec![FieldEvent::ErrorChanged {
				name: "password".to_string(),
				error: "Password is required.".to_string(),
			}]
		);

		// Later edits re-report on settle without further blur
		input.input("Str0ng!pass", t0);
		let events = input.tick(t0 + ms(500));
		assert_eq!(
			events,
			vec![FieldEvent::ErrorChanged {
				name: "password".to_string(),
				error: String::new(),
			}]
		);
	}

	#[test]
	fn test_tooltip_only_shows_while_rules_unmet() {
		let mut input = PasswordInput::new("password");
		let t0 = Instant::now();

		input.input("weak", t0);
		input.tick(t0 + ms(500));
		input.set_tooltip_visible(true);
		assert!(input.tooltip_visible());

		input.input("Str0ng!pass", t0 + ms(600));
		input.tick(t0 + ms(1_200));
		input.set_tooltip_visible(true);
		assert!(!input.tooltip_visible());
	}
}
