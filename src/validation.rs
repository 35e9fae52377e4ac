//! Pure, synchronous field validators.
//!
//! Every validator maps a value (and optional rule set) to a message or
//! `Ok(())`; nothing here has side effects or suspends. Composite rule
//! evaluation short-circuits: the first failing check's message wins and
//! later checks are not evaluated.

use crate::field::{FieldError, FieldResult, FieldValue};
use regex::Regex;
use std::sync::LazyLock;

// Email shape: any non-whitespace local part, a domain with at least one
// dot, no embedded whitespace anywhere.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// ASCII letters only; the empty string passes.
static ALPHABETIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z]*$").expect("ALPHABETIC_REGEX: invalid regex pattern")
});

/// Composite rule set for a single field.
///
/// Evaluation order is fixed: required first (short-circuits on failure),
/// then minimum length, maximum length, pattern. Length bounds and the
/// pattern apply to text values only; a boolean or file value that passes
/// the required check passes the whole set.
///
/// # Examples
///
/// ```
/// use formflow::{FieldValue, ValidationRules};
///
/// let rules = ValidationRules::new().required().with_min_length(3);
///
/// assert!(rules.validate("username", &FieldValue::Text("bob".into())).is_ok());
/// assert!(rules.validate("username", &FieldValue::Text("".into())).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationRules {
	pub required: bool,
	pub min_length: Option<usize>,
	pub max_length: Option<usize>,
	pub pattern: Option<Regex>,
}

impl ValidationRules {
	/// Create an empty rule set that accepts any value.
	pub fn new() -> Self {
		Self::default()
	}

	/// Require a non-empty value.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::ValidationRules;
	///
	/// let rules = ValidationRules::new().required();
	/// assert!(rules.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the minimum length in characters.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::ValidationRules;
	///
	/// let rules = ValidationRules::new().with_min_length(3);
	/// assert_eq!(rules.min_length, Some(3));
	/// ```
	pub fn with_min_length(mut self, min: usize) -> Self {
		self.min_length = Some(min);
		self
	}

	/// Set the maximum length in characters.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::ValidationRules;
	///
	/// let rules = ValidationRules::new().with_max_length(20);
	/// assert_eq!(rules.max_length, Some(20));
	/// ```
	pub fn with_max_length(mut self, max: usize) -> Self {
		self.max_length = Some(max);
		self
	}

	/// Set a pattern the full value must match.
	pub fn with_pattern(mut self, pattern: Regex) -> Self {
		self.pattern = Some(pattern);
		self
	}

	/// Evaluate the rule set against a value.
	///
	/// `label` is used in the failure message and usually comes from
	/// [`FieldDescriptor::display_label`](crate::FieldDescriptor::display_label).
	pub fn validate(&self, label: &str, value: &FieldValue) -> FieldResult<()> {
		if self.required {
			validate_required(label, value)?;
		}

		if let FieldValue::Text(text) = value {
			validate_length(label, text, self.min_length, self.max_length)?;
			if let Some(pattern) = &self.pattern {
				validate_pattern(label, text, pattern)?;
			}
		}

		Ok(())
	}
}

/// Fails when the value is empty (see [`FieldValue::is_empty`]).
///
/// # Examples
///
/// ```
/// use formflow::validation::validate_required;
/// use formflow::FieldValue;
///
/// assert!(validate_required("name", &FieldValue::Text("Ada".into())).is_ok());
/// assert!(validate_required("name", &FieldValue::Text("".into())).is_err());
/// ```
pub fn validate_required(label: &str, value: &FieldValue) -> FieldResult<()> {
	if value.is_empty() {
		Err(FieldError::Required(label.to_string()))
	} else {
		Ok(())
	}
}

/// Checks character-count bounds. Counts chars, not bytes, so multi-byte
/// text (CJK, emoji) is measured the way the user perceives it.
///
/// # Examples
///
/// ```
/// use formflow::validation::validate_length;
///
/// assert!(validate_length("name", "abc", Some(3), Some(5)).is_ok());
/// assert!(validate_length("name", "ab", Some(3), None).is_err());
/// assert!(validate_length("name", "toolong", None, Some(5)).is_err());
/// ```
pub fn validate_length(
	label: &str,
	value: &str,
	min: Option<usize>,
	max: Option<usize>,
) -> FieldResult<()> {
	let char_count = value.chars().count();

	if let Some(min) = min
		&& char_count < min
	{
		return Err(FieldError::Validation(format!(
			"{label} must be at least {min} characters."
		)));
	}

	if let Some(max) = max
		&& char_count > max
	{
		return Err(FieldError::Validation(format!(
			"{label} must not exceed {max} characters."
		)));
	}

	Ok(())
}

/// Fails unless the pattern matches the value over its full length.
///
/// The pattern does not need explicit `^`/`$` anchors; a match that
/// covers only part of the value is rejected.
///
/// # Examples
///
/// ```
/// use formflow::validation::validate_pattern;
/// use regex::Regex;
///
/// let digits = Regex::new(r"[0-9]+").unwrap();
/// assert!(validate_pattern("code", "12345", &digits).is_ok());
/// assert!(validate_pattern("code", "12a45", &digits).is_err());
/// ```
pub fn validate_pattern(label: &str, value: &str, pattern: &Regex) -> FieldResult<()> {
	let full_match = pattern
		.find(value)
		.is_some_and(|m| m.start() == 0 && m.end() == value.len());

	if full_match {
		Ok(())
	} else {
		Err(FieldError::Invalid(label.to_string()))
	}
}

/// Fails when the value is not shaped like `local@domain.tld`.
///
/// Accepts any non-whitespace local part and any domain containing at
/// least one dot; rejects embedded whitespace anywhere.
///
/// # Examples
///
/// ```
/// use formflow::validation::validate_email;
///
/// assert!(validate_email("a@b.com").is_ok());
/// assert!(validate_email("no-at-sign").is_err());
/// assert!(validate_email("a b@c.com").is_err());
/// ```
pub fn validate_email(value: &str) -> FieldResult<()> {
	if EMAIL_REGEX.is_match(value) {
		Ok(())
	} else {
		Err(FieldError::Validation("Invalid email address".to_string()))
	}
}

/// Fails when the value contains anything other than ASCII letters.
/// The empty string passes.
///
/// # Examples
///
/// ```
/// use formflow::validation::validate_alphabetic;
///
/// assert!(validate_alphabetic("Hello").is_ok());
/// assert!(validate_alphabetic("").is_ok());
/// assert!(validate_alphabetic("h3llo").is_err());
/// ```
pub fn validate_alphabetic(value: &str) -> FieldResult<()> {
	if ALPHABETIC_REGEX.is_match(value) {
		Ok(())
	} else {
		Err(FieldError::Validation(
			"Only alphabetic characters are allowed".to_string(),
		))
	}
}
