//! Form field components with debounced validation and submit aggregation.
//!
//! This crate provides the state, timing, and validation layer of a form
//! UI — rendering stays in the hosting application:
//! - A clock-driven [`Debounced`] primitive that lets a burst of edits
//!   settle into a single validation pass
//! - Pure validators (required, length bounds, pattern, email shape,
//!   password strength) that return a message instead of throwing
//! - Field components (text, email, password, confirm-password,
//!   checkbox, radio, select, file) that own their edit/validation
//!   state machine and report `(name, value)` and `(name, error)` pairs
//!   upward as [`FieldEvent`]s
//! - A [`Form`] aggregator that collects those reports, re-derives
//!   required/pattern errors at submit time, and either blocks
//!   submission or forwards the value map to a caller-supplied handler
//!
//! ## Example
//!
//! ```
//! use formflow::fields::EmailInput;
//! use formflow::{Form, SubmitOutcome};
//! use std::time::{Duration, Instant};
//!
//! let mut form = Form::new();
//! let mut email = EmailInput::new("email").required();
//! form.register(email.descriptor().clone());
//!
//! let t0 = Instant::now();
//! for event in email.input("a@b.com", t0) {
//! 	form.apply(event);
//! }
//! for event in email.tick(t0 + Duration::from_millis(300)) {
//! 	form.apply(event);
//! }
//!
//! let SubmitOutcome::Submitted(values) = form.submit() else {
//! 	panic!("no blocking errors");
//! };
//! assert_eq!(values["email"].as_text(), Some("a@b.com"));
//! ```

pub mod debounce;
pub mod field;
pub mod fields;
pub mod form;
pub mod password;
pub mod validation;

pub use debounce::Debounced;
pub use field::{
	FieldDescriptor, FieldError, FieldEvent, FieldResult, FieldState, FieldValue, FileHandle,
};
pub use form::{Form, FormError, FormResult, SubmitOutcome};
pub use password::{PASSWORD_REQUIREMENTS, PasswordRequirement, PasswordStrength, validate_password};
pub use validation::ValidationRules;
