//! Checkbox option group.

use crate::field::{FieldDescriptor, FieldEvent, FieldValue};

use super::ChoiceOption;

/// A group of checkboxes sharing one field name.
///
/// Toggling an option updates the local selected set and reports the
/// toggled option value upward immediately — discrete inputs have no
/// debounce cycle. Required enforcement happens in the aggregator's
/// submit pass.
///
/// # Examples
///
/// ```
/// use formflow::fields::{CheckboxInput, ChoiceOption};
///
/// let mut group = CheckboxInput::new("interests")
/// 	.with_options(vec![
/// 		ChoiceOption::new("rust", "Rust"),
/// 		ChoiceOption::new("go", "Go"),
/// 	]);
///
/// group.toggle("rust");
/// assert!(group.is_selected("rust"));
///
/// group.toggle("rust");
/// assert!(!group.is_selected("rust"));
/// ```
#[derive(Debug, Clone)]
pub struct CheckboxInput {
	descriptor: FieldDescriptor,
	options: Vec<ChoiceOption>,
	selected: Vec<String>,
}

impl CheckboxInput {
	/// Create a checkbox group for the given field name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			descriptor: FieldDescriptor::new(name),
			options: vec![],
			selected: vec![],
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

	/// Set the selectable options.
	pub fn with_options(mut self, options: Vec<ChoiceOption>) -> Self {
		self.options = options;
		self
	}

	/// The descriptor to register with the form aggregator.
	pub fn descriptor(&self) -> &FieldDescriptor {
		&self.descriptor
	}

	pub fn options(&self) -> &[ChoiceOption] {
		&self.options
	}

	pub fn selected_values(&self) -> &[String] {
		&self.selected
	}

	pub fn is_selected(&self, value: &str) -> bool {
		self.selected.iter().any(|v| v == value)
	}

	/// Toggle an option and report the toggled value upward.
	///
	/// Unknown option values are ignored and produce no events.
	pub fn toggle(&mut self, value: &str) -> Vec<FieldEvent> {
		if !self.options.iter().any(|o| o.value == value) {
			return vec![];
		}

		if let Some(pos) = self.selected.iter().position(|v| v == value) {
			self.selected.remove(pos);
		} else {
			self.selected.push(value.to_string());
		}

		vec![FieldEvent::ValueChanged {
			name: self.descriptor.name.clone(),
			value: FieldValue::Text(value.to_string()),
		}]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn group() -> CheckboxInput {
		CheckboxInput::new("interests").with_options(vec![
			ChoiceOption::new("rust", "Rust"),
			ChoiceOption::new("go", "Go"),
		])
	}

	#[test]
	fn test_toggle_reports_toggled_value() {
		// Arrange
		let mut input = group();

		// Act
		let events = input.toggle("rust");

		// Assert
		assert_eq!(
			events,
			vec![FieldEvent::ValueChanged {
				name: "interests".to_string(),
				value: FieldValue::Text("rust".to_string()),
			}]
		);
		assert_eq!(input.selected_values(), ["rust".to_string()]);
	}

	#[test]
	fn test_toggle_twice_deselects_but_still_reports() {
		let mut input = group();

		input.toggle("go");
		let events = input.toggle("go");

		assert!(!input.is_selected("go"));
		assert_eq!(events.len(), 1);
	}

	#[test]
	fn test_unknown_option_is_ignored() {
		let mut input = group();

		let events = input.toggle("cobol");

		assert!(events.is_empty());
		assert!(input.selected_values().is_empty());
	}
}
