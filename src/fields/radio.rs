//! Radio option group.

use crate::field::{FieldDescriptor, FieldEvent, FieldValue};

use super::ChoiceOption;

/// A group of radio buttons holding at most one selected value.
///
/// Selecting an option reports it upward immediately; selecting an
/// unknown value is ignored.
#[derive(Debug, Clone)]
pub struct RadioInput {
	descriptor: FieldDescriptor,
	options: Vec<ChoiceOption>,
	selected: Option<String>,
}

impl RadioInput {
	/// Create a radio group for the given field name.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::fields::{ChoiceOption, RadioInput};
	///
	/// let mut group = RadioInput::new("plan")
	/// 	.with_options(vec![
	/// 		ChoiceOption::new("free", "Free"),
	/// 		ChoiceOption::new("pro", "Pro"),
	/// 	]);
	///
	/// group.select("pro");
	/// assert_eq!(group.selected_value(), Some("pro"));
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

	/// Select an option and report it upward.
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
	fn test_select_replaces_previous_choice() {
		// Arrange
		let mut input = RadioInput::new("plan").with_options(vec![
			ChoiceOption::new("free", "Free"),
			ChoiceOption::new("pro", "Pro"),
		]);

		// Act
		input.select("free");
		let events = input.select("pro");

		// Assert
		assert_eq!(input.selected_value(), Some("pro"));
		assert_eq!(
			events,
			vec![FieldEvent::ValueChanged {
				name: "plan".to_string(),
				value: FieldValue::Text("pro".to_string()),
			}]
		);
	}

	#[test]
	fn test_unknown_value_is_ignored() {
		let mut input = RadioInput::new("plan")
			.with_options(vec![ChoiceOption::new("free", "Free")]);

		assert!(input.select("enterprise").is_empty());
		assert_eq!(input.selected_value(), None);
	}
}
