//! Core field vocabulary: values, descriptors, errors, and upward events.
//!
//! Every input component in this crate speaks the same small protocol:
//! it owns a [`FieldDescriptor`], mutates its own local state in response
//! to host-forwarded edits, and reports `(name, value)` and `(name, error)`
//! pairs upward as [`FieldEvent`]s for the form aggregator to fold in.

use serde::{Deserialize, Serialize};

/// A file selected by the user, as the host reports it.
///
/// Rendering and actual byte transfer stay in the host; components only
/// see this handle and validate its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
	pub filename: String,
	pub mime_type: String,
	pub size_bytes: u64,
}

impl FileHandle {
	/// Create a new file handle.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::FileHandle;
	///
	/// let file = FileHandle::new("report.pdf", "application/pdf", 42_000);
	/// assert_eq!(file.filename, "report.pdf");
	/// ```
	pub fn new(
		filename: impl Into<String>,
		mime_type: impl Into<String>,
		size_bytes: u64,
	) -> Self {
		Self {
			filename: filename.into(),
			mime_type: mime_type.into(),
			size_bytes,
		}
	}
}

/// A scalar field value: text, boolean, or a file handle.
///
/// Values are keyed by field name in a flat map owned by the form
/// aggregator; only the owning field component writes its own entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
	Text(String),
	Bool(bool),
	File(FileHandle),
}

impl FieldValue {
	/// Returns the text content, if this is a text value.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			FieldValue::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Whether this value counts as "not provided" for a required check.
	///
	/// Empty or whitespace-only text and `false` booleans are empty;
	/// any file handle counts as present.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::FieldValue;
	///
	/// assert!(FieldValue::Text("   ".into()).is_empty());
	/// assert!(FieldValue::Bool(false).is_empty());
	/// assert!(!FieldValue::Text("x".into()).is_empty());
	/// ```
	pub fn is_empty(&self) -> bool {
		match self {
			FieldValue::Text(s) => s.trim().is_empty(),
			FieldValue::Bool(b) => !b,
			FieldValue::File(_) => false,
		}
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::Text(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		FieldValue::Bool(value)
	}
}

impl From<FileHandle> for FieldValue {
	fn from(value: FileHandle) -> Self {
		FieldValue::File(value)
	}
}

/// Validation failure for a single field.
///
/// Validators return a message, never panic; all failures are
/// recoverable by user correction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0} is required.")]
	Required(String),
	#[error("{0} is invalid.")]
	Invalid(String),
	#[error("{0}")]
	Validation(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Static description of a field, registered with the form aggregator.
///
/// Declared once per field instance and immutable after registration.
/// The aggregator reads only `name`, `label`, `required`, and `pattern`
/// during its submit-time pass; the full `rules` set belongs to the
/// field's own debounced validation cycle.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub pattern: Option<regex::Regex>,
	pub rules: Option<crate::validation::ValidationRules>,
}

impl FieldDescriptor {
	/// Create a descriptor for the given field name.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::FieldDescriptor;
	///
	/// let field = FieldDescriptor::new("username");
	/// assert_eq!(field.name, "username");
	/// assert!(!field.required);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			pattern: None,
			rules: None,
		}
	}

	/// Mark the field as required.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::FieldDescriptor;
	///
	/// let field = FieldDescriptor::new("email").required();
	/// assert!(field.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the display label used in error messages.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::FieldDescriptor;
	///
	/// let field = FieldDescriptor::new("email").with_label("Email address");
	/// assert_eq!(field.label.as_deref(), Some("Email address"));
	/// ```
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the pattern the aggregator re-checks at submit time.
	///
	/// The value must match the pattern over its full length.
	pub fn with_pattern(mut self, pattern: regex::Regex) -> Self {
		self.pattern = Some(pattern);
		self
	}

	/// Attach the composite rule set evaluated by the field itself.
	pub fn with_rules(mut self, rules: crate::validation::ValidationRules) -> Self {
		self.rules = Some(rules);
		self
	}

	/// Label used in error messages, falling back to the field name.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::FieldDescriptor;
	///
	/// assert_eq!(FieldDescriptor::new("email").display_label(), "email");
	/// assert_eq!(
	/// 	FieldDescriptor::new("email").with_label("Email").display_label(),
	/// 	"Email",
	/// );
	/// ```
	pub fn display_label(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.name)
	}
}

/// A field's upward report to the form aggregator.
///
/// `ValueChanged` fires immediately on every edit; `ErrorChanged` fires
/// only once the field's debounce window settles and its validators run.
/// An empty `error` string clears the field's error slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FieldEvent {
	ValueChanged { name: String, value: FieldValue },
	ErrorChanged { name: String, error: String },
}

/// Per-field edit/validation lifecycle.
///
/// ```mermaid
/// stateDiagram-v2
///     [*] --> Pristine
///     Pristine --> Editing: first edit (value reported immediately)
///     Editing --> Editing: further edits reset the debounce timer
///     Editing --> Validated: debounce settles, validators run
///     Validated --> Editing: next edit restarts the cycle
/// ```
#[cfg_attr(doc, aquamarine::aquamarine)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
	#[default]
	Pristine,
	Editing,
	Validated,
}
