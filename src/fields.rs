// Debounced text-like inputs
pub mod confirm_password;
pub mod email;
pub mod password;
pub mod text;

// Discrete inputs (no debounce; they report immediately)
pub mod checkbox;
pub mod file;
pub mod radio;
pub mod select;

pub use checkbox::CheckboxInput;
pub use confirm_password::{ConfirmPasswordInput, MatchIndicator};
pub use email::EmailInput;
pub use file::{FileInput, UploadIndicator};
pub use password::PasswordInput;
pub use radio::RadioInput;
pub use select::SelectInput;
pub use text::TextInput;

use serde::{Deserialize, Serialize};

/// One selectable option of a checkbox group, radio group, or select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
	pub value: String,
	pub label: String,
}

impl ChoiceOption {
	/// Create an option.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::fields::ChoiceOption;
	///
	/// let option = ChoiceOption::new("us", "United States");
	/// assert_eq!(option.value, "us");
	/// ```
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}
