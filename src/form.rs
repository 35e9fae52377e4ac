//! Form aggregator: the single source of truth for descendant field
//! values and errors, and the submit gate.
//!
//! Fields register a [`FieldDescriptor`] at mount and deregister at
//! unmount; only registered (named) fields participate in the
//! submit-time pass — anything else is decoration the form never touches.
//! Between submits the form folds in [`FieldEvent`]s as they arrive, in
//! whatever order the independent fields produce them: the value map and
//! error map share a key space but are never assumed to be in sync.

use crate::field::{FieldDescriptor, FieldEvent, FieldValue};
use std::collections::HashMap;

/// Form-level failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("submission blocked by {} validation error(s)", .0.len())]
	Blocked(HashMap<String, String>),
}

pub type FormResult<T> = Result<T, FormError>;

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
	/// No blocking errors: the collected value map was forwarded.
	Submitted(HashMap<String, FieldValue>),
	/// The authoritative pass found errors; submission was blocked and
	/// the error map replaced with exactly these entries.
	Blocked(HashMap<String, String>),
}

type SubmitHandler = Box<dyn Fn(&HashMap<String, FieldValue>) + Send + Sync>;

/// Collects field values and errors, and gates submission.
///
/// On submit the form re-derives `required`/`pattern` errors for every
/// registered field from the collected values — a second, authoritative
/// pass that does not trust child-reported errors, because a child's
/// debounce cycle may not have settled yet. Length, email-shape, and
/// strength rules stay with the fields themselves, so a stale
/// self-reported error neither blocks a submit nor gets cleared by a
/// successful one; that asymmetry is inherited behavior, kept on
/// purpose.
///
/// # Examples
///
/// ```
/// use formflow::{FieldDescriptor, FieldValue, Form, SubmitOutcome};
///
/// let mut form = Form::new();
/// form.register(FieldDescriptor::new("email").required());
///
/// // Nothing entered: blocked with a field-specific message.
/// let SubmitOutcome::Blocked(errors) = form.submit() else { panic!() };
/// assert_eq!(errors["email"], "email is required");
///
/// form.handle_input_change("email", FieldValue::Text("a@b.com".into()));
/// let SubmitOutcome::Submitted(values) = form.submit() else { panic!() };
/// assert_eq!(values["email"], FieldValue::Text("a@b.com".into()));
/// ```
#[derive(Default)]
pub struct Form {
	fields: Vec<FieldDescriptor>,
	values: HashMap<String, FieldValue>,
	errors: HashMap<String, String>,
	is_submitted: bool,
	on_submit: Option<SubmitHandler>,
}

impl Form {
	/// Create an empty form.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::Form;
	///
	/// let form = Form::new();
	/// assert!(!form.is_submitted());
	/// assert!(form.values().is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the handler invoked with the value map on successful submit.
	pub fn set_on_submit<F>(&mut self, handler: F)
	where
		F: Fn(&HashMap<String, FieldValue>) + Send + Sync + 'static,
	{
		self.on_submit = Some(Box::new(handler));
	}

	/// Register a field at mount.
	///
	/// Registering a name twice replaces the earlier descriptor in place,
	/// keeping its position in display order.
	pub fn register(&mut self, descriptor: FieldDescriptor) {
		if let Some(existing) = self
			.fields
			.iter_mut()
			.find(|f| f.name == descriptor.name)
		{
			*existing = descriptor;
		} else {
			self.fields.push(descriptor);
		}
	}

	/// Deregister a field at unmount.
	///
	/// Drops the descriptor and the field's value and error entries, so
	/// no state is ever forwarded to a field that no longer exists.
	pub fn deregister(&mut self, name: &str) {
		self.fields.retain(|f| f.name != name);
		self.values.remove(name);
		self.errors.remove(name);
	}

	/// Registered descriptors, in registration order.
	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	/// Fold in a field's upward report.
	pub fn apply(&mut self, event: FieldEvent) {
		match event {
			FieldEvent::ValueChanged { name, value } => self.handle_input_change(&name, value),
			FieldEvent::ErrorChanged { name, error } => self.handle_error(&name, error),
		}
	}

	/// Record a value report and clear the field's error entry — the
	/// user is editing, so the old message no longer applies.
	pub fn handle_input_change(&mut self, name: &str, value: FieldValue) {
		self.values.insert(name.to_string(), value);
		self.errors.insert(name.to_string(), String::new());
	}

	/// Record an error report. Last writer wins per key.
	pub fn handle_error(&mut self, name: &str, error: String) {
		tracing::trace!(field = %name, error = %error, "field error reported");
		self.errors.insert(name.to_string(), error);
	}

	/// Whether a submit has been attempted.
	///
	/// Fields that validate only on blur re-check when this flips true;
	/// hosts propagate the flip via each field's `set_submitted`.
	pub fn is_submitted(&self) -> bool {
		self.is_submitted
	}

	/// The collected value map.
	pub fn values(&self) -> &HashMap<String, FieldValue> {
		&self.values
	}

	/// The current error map (empty string = no error for that field).
	pub fn errors(&self) -> &HashMap<String, String> {
		&self.errors
	}

	/// The error string for one field, if any is recorded.
	pub fn error_for(&self, name: &str) -> Option<&str> {
		self.errors.get(name).map(String::as_str)
	}

	/// Non-empty errors in field registration order, for the submit
	/// banner. Errors reported for unregistered names are not shown.
	pub fn visible_errors(&self) -> Vec<(&str, &str)> {
		self.fields
			.iter()
			.filter_map(|f| {
				let error = self.errors.get(&f.name)?;
				(!error.is_empty()).then_some((f.name.as_str(), error.as_str()))
			})
			.collect()
	}

	/// Attempt submission.
	///
	/// Sets the submitted flag, then re-derives required/pattern errors
	/// for every registered field from the collected values. A non-empty
	/// result replaces the error map and blocks; otherwise the value map
	/// is forwarded to the submit handler. Successful submission does
	/// not reset any state — clearing is the caller's responsibility,
	/// and a second submit with unchanged valid input forwards an
	/// identical map.
	pub fn submit(&mut self) -> SubmitOutcome {
		self.is_submitted = true;

		let mut new_errors = HashMap::new();
		for field in &self.fields {
			let label = field.display_label();
			let value = self.values.get(&field.name);
			let missing = value.is_none_or(FieldValue::is_empty);

			if field.required && missing {
				new_errors.insert(field.name.clone(), format!("{label} is required"));
			} else if let Some(pattern) = &field.pattern
				&& let Some(FieldValue::Text(text)) = value
				&& !full_match(pattern, text)
			{
				new_errors.insert(field.name.clone(), format!("{label} is not valid"));
			}
		}

		if !new_errors.is_empty() {
			tracing::debug!(errors = new_errors.len(), "submission blocked");
			self.errors = new_errors.clone();
			return SubmitOutcome::Blocked(new_errors);
		}

		tracing::debug!(fields = self.fields.len(), "submission forwarded");
		if let Some(handler) = &self.on_submit {
			handler(&self.values);
		}
		SubmitOutcome::Submitted(self.values.clone())
	}

	/// [`submit`](Self::submit) with a `Result` shape, for callers that
	/// propagate with `?`.
	///
	/// # Examples
	///
	/// ```
	/// use formflow::{FieldDescriptor, FieldValue, Form};
	///
	/// let mut form = Form::new();
	/// form.register(FieldDescriptor::new("name").required());
	/// form.handle_input_change("name", FieldValue::Text("Ada".into()));
	///
	/// let values = form.try_submit().expect("valid form");
	/// assert_eq!(values["name"], FieldValue::Text("Ada".into()));
	/// ```
	pub fn try_submit(&mut self) -> FormResult<HashMap<String, FieldValue>> {
		match self.submit() {
			SubmitOutcome::Submitted(values) => Ok(values),
			SubmitOutcome::Blocked(errors) => Err(FormError::Blocked(errors)),
		}
	}
}

// Submit-time patterns match over the full value, same as the fields'
// own pattern rule.
fn full_match(pattern: &regex::Regex, value: &str) -> bool {
	pattern
		.find(value)
		.is_some_and(|m| m.start() == 0 && m.end() == value.len())
}
