//! Password input with a confirmation field.
//!
//! The confirmation value is a second, independently debounced value;
//! equality against the primary settled value is a pure derivation shown
//! as a colored marker. A mismatch is presentation-only: it never writes
//! the error slot and never blocks submission by itself. Hosts that want
//! a blocking confirmation wire it through the surrounding form's rule
//! set instead.

use crate::debounce::Debounced;
use crate::field::{FieldDescriptor, FieldEvent, FieldState, FieldValue};
use crate::password::{PasswordStrength, validate_password};
use std::time::Instant;

use super::password::PASSWORD_DEBOUNCE_DELAY;

/// The confirmation marker next to the confirm input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchIndicator {
	/// Confirm field unfocused or still empty; show nothing.
	Hidden,
	Match,
	Mismatch,
}

/// A password input paired with a confirmation input.
///
/// The primary half behaves exactly like
/// [`PasswordInput`](super::PasswordInput); the confirmation half is
/// never reported upward — only the primary value reaches the form
/// aggregator.
#[derive(Debug, Clone)]
pub struct ConfirmPasswordInput {
	descriptor: FieldDescriptor,
	hint_text: Option<String>,
	value: String,
	confirm_value: String,
	debounced: Debounced<String>,
	confirm_debounced: Debounced<String>,
	strength: PasswordStrength,
	state: FieldState,
	error: String,
	focused: bool,
	confirm_focused: bool,
	tooltip_visible: bool,
	submitted: bool,
}

impl ConfirmPasswordInput {
	/// Create a confirm-password input for the given field name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			descriptor: FieldDescriptor::new(name),
			hint_text: None,
			value: String::new(),
			confirm_value: String::new(),
			debounced: Debounced::new(String::new(), PASSWORD_DEBOUNCE_DELAY),
			confirm_debounced: Debounced::new(String::new(), PASSWORD_DEBOUNCE_DELAY),
			strength: validate_password(""),
			state: FieldState::Pristine,
			error: String::new(),
			focused: false,
			confirm_focused: false,
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

	/// Set the placeholder hint for the primary input.
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

	pub fn confirm_value(&self) -> &str {
		&self.confirm_value
	}

	pub fn error(&self) -> &str {
		&self.error
	}

	pub fn strength(&self) -> &PasswordStrength {
		&self.strength
	}

	pub fn tooltip_visible(&self) -> bool {
		self.tooltip_visible
	}

	/// The marker state, derived from the two settled values.
	///
	/// Hidden until the confirmation field is focused and non-empty.
	pub fn match_indicator(&self) -> MatchIndicator {
		if !self.confirm_focused || self.confirm_value.is_empty() {
			return MatchIndicator::Hidden;
		}
		if self.debounced.value() == self.confirm_debounced.value() {
			MatchIndicator::Match
		} else {
			MatchIndicator::Mismatch
		}
	}

	/// Record an edit of the primary password; reported upward immediately.
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

	/// Record an edit of the confirmation value.
	///
	/// Returns no events: the confirmation is local presentation state
	/// and is never forwarded to the aggregator.
	pub fn input_confirm(&mut self, value: impl Into<String>, now: Instant) -> Vec<FieldEvent> {
		let value = value.into();
		self.confirm_value = value.clone();
		self.confirm_debounced.set(value, now);
		vec![]
	}

	/// Advance both debounce windows; strength follows the primary
	/// settled value, the marker follows both.
	pub fn tick(&mut self, now: Instant) -> Vec<FieldEvent> {
		let mut events = vec![];

		if self.debounced.poll(now).is_some() {
			self.strength = validate_password(self.debounced.value());
			self.state = FieldState::Validated;
			if self.submitted {
				events.push(self.report_error());
			}
		}

		// The confirm settle only refreshes the derived marker.
		self.confirm_debounced.poll(now);

		events
	}

	pub fn focus(&mut self) {
		self.focused = true;
	}

	pub fn focus_confirm(&mut self) {
		self.confirm_focused = true;
	}

	pub fn blur_confirm(&mut self) {
		self.confirm_focused = false;
	}

	pub fn set_tooltip_visible(&mut self, visible: bool) {
		self.tooltip_visible = visible && !self.strength.all_rules_satisfied;
	}

	/// Leaving the primary field commits the current validity into the
	/// error slot; the confirmation marker is unaffected.
	pub fn blur(&mut self) -> Vec<FieldEvent> {
		self.focused = false;
		self.tooltip_visible = false;
		vec![self.report_error()]
	}

	/// Called when the form-level submitted flag flips true.
	pub fn set_submitted(&mut self) -> Vec<FieldEvent> {
		self.submitted = true;
		vec![self.report_error()]
	}

	/// Cancel both pending debounce timers on teardown.
	pub fn teardown(&mut self) {
		self.debounced.cancel();
		self.confirm_debounced.cancel();
	}

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
