//! Dropdown select input.

use crate::field::{FieldDescriptor, FieldEvent, FieldValue};

use super::ChoiceOption;

/// A single-choice dropdown.
///
/// Choosing an option reports it upward immediately; an unknown option
/// value is ignored.
#[derive(Debug, Clone)]
pub struct SelectInput {
	descriptor: FieldDescriptor,
	options: Vec<ChoiceOption>,
	selected: Option<String>,
}

impl SelectInput {
	/// Create a select input for the given field name.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::fields::{ChoiceOption, SelectInput};
	///
	/// let mut select = SelectInput::new("country")
	/// 	.with_options(vec![ChoiceOption::new("fr", "France")]);
	///
	/// select.select("fr");
	/// assert_eq!(select.selected_value(), Some("fr"));
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			descriptor: FieldDescriptor::new(name),
			options: vec![],
			selected: None,
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

	pub fn selected_value(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Choose an option and report it upward.
	pub fn select(&mut self, value: &str) -> Vec<FieldEvent> {
		if !self.options.iter().any(|o| o.value == value) {
			return vec![];
		}
		self.selected = Some(value.to_string());

		vec![FieldEvent::ValueChanged {
			name: self.descriptor.name.clone(),
			value: FieldValue::Text(value.to_string()),
		}]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_select_known_option() {
		// Arrange
		let mut input = SelectInput::new("country").with_options(vec![
			ChoiceOption::new("fr", "France"),
			ChoiceOption::new("jp", "Japan"),
		]);

		// Act
		let events = input.select("jp");

		// Assert
		assert_eq!(input.selected_value(), Some("jp"));
		assert_eq!(
			events,
			vec![FieldEvent::ValueChanged {
				name: "country".to_string(),
				value: FieldValue::Text("jp".to_string()),
			}]
		);
	}

	#[test]
	fn test_select_unknown_option_is_ignored() {
		let mut input = SelectInput::new("country")
			.with_options(vec![ChoiceOption::new("fr", "France")]);

		assert!(input.select("atlantis").is_empty());
		assert_eq!(input.selected_value(), None);
	}
}
