//! File input with type/size constraints.

use crate::field::{FieldDescriptor, FieldEvent, FieldValue, FileHandle};
use std::time::{Duration, Instant};

/// How long the cosmetic "uploading" indicator runs after an accepted
/// selection.
pub const UPLOAD_INDICATOR_DURATION: Duration = Duration::from_millis(1_500);

/// The cosmetic upload indicator shown after a file is accepted.
///
/// Purely presentational: it never changes the reported value or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadIndicator {
	Idle,
	Uploading { until: Instant },
	Done,
}

/// A file picker with an optional MIME allow-list and size ceiling.
///
/// A selection that violates a constraint sets the error slot and is NOT
/// forwarded upward; an accepted selection clears the error, forwards
/// the handle, and starts the bounded [`UploadIndicator`].
///
/// # Examples
///
/// ```
/// use formflow::fields::FileInput;
/// use formflow::{FieldEvent, FileHandle};
/// use std::time::Instant;
///
/// let mut input = FileInput::new("avatar").with_max_size_mb(1);
/// let too_big = FileHandle::new("photo.png", "image/png", 2 * 1024 * 1024);
///
/// let events = input.select_file(Some(too_big), Instant::now());
/// assert_eq!(input.error(), "File size exceeds 1 MB.");
/// // The rejected file is never forwarded.
/// assert!(!events.iter().any(|e| matches!(e, FieldEvent::ValueChanged { .. })));
/// ```
#[derive(Debug, Clone)]
pub struct FileInput {
	descriptor: FieldDescriptor,
	allowed_types: Option<Vec<String>>,
	max_size_mb: Option<u64>,
	file: Option<FileHandle>,
	error: String,
	indicator: UploadIndicator,
	upload_duration: Duration,
}

impl FileInput {
	/// Create a file input for the given field name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			descriptor: FieldDescriptor::new(name),
			allowed_types: None,
			max_size_mb: None,
			file: None,
			error: String::new(),
			indicator: UploadIndicator::Idle,
			upload_duration: UPLOAD_INDICATOR_DURATION,
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

	/// Restrict selections to the given MIME types (exact match).
	///
	/// # Examples
	///
	/// ```
	/// use formflow::fields::FileInput;
	///
	/// let input = FileInput::new("avatar")
	/// 	.with_allowed_types(vec!["image/png".into(), "image/jpeg".into()]);
	/// ```
	pub fn with_allowed_types(mut self, types: Vec<String>) -> Self {
		self.allowed_types = Some(types);
		self
	}

	/// Reject files larger than `max` megabytes.
	pub fn with_max_size_mb(mut self, max: u64) -> Self {
		self.max_size_mb = Some(max);
		self
	}

	/// Override how long the cosmetic indicator runs.
	pub fn with_upload_duration(mut self, duration: Duration) -> Self {
		self.upload_duration = duration;
		self
	}

	/// The descriptor to register with the form aggregator.
	pub fn descriptor(&self) -> &FieldDescriptor {
		&self.descriptor
	}

	/// The last accepted file, if any.
	pub fn file(&self) -> Option<&FileHandle> {
		self.file.as_ref()
	}

	pub fn error(&self) -> &str {
		&self.error
	}

	pub fn indicator(&self) -> UploadIndicator {
		self.indicator
	}

	/// Handle a selection from the host's file picker.
	///
	/// `None` means the user cleared the selection. Constraint checks run
	/// in order: required, type allow-list, size ceiling; the first
	/// violation sets the error and nothing is forwarded.
	pub fn select_file(&mut self, file: Option<FileHandle>, now: Instant) -> Vec<FieldEvent> {
		let Some(file) = file else {
			self.file = None;
			if self.descriptor.required {
				return vec![self.set_error("File is required.".to_string())];
			}
			return vec![self.set_error(String::new())];
		};

		if let Some(allowed) = &self.allowed_types
			&& !allowed.iter().any(|t| t == &file.mime_type)
		{
			return vec![self.set_error("File type is not allowed.".to_string())];
		}

		if let Some(max_mb) = self.max_size_mb
			&& file.size_bytes > max_mb * 1024 * 1024
		{
			return vec![self.set_error(format!("File size exceeds {max_mb} MB."))];
		}

		tracing::debug!(
			field = %self.descriptor.name,
			filename = %file.filename,
			size = file.size_bytes,
			"file accepted"
		);
		self.file = Some(file.clone());
		self.indicator = UploadIndicator::Uploading {
			until: now + self.upload_duration,
		};

		vec![
			self.set_error(String::new()),
			FieldEvent::ValueChanged {
				name: self.descriptor.name.clone(),
				value: FieldValue::File(file),
			},
		]
	}

	/// Advance time; settles the cosmetic indicator without touching the
	/// reported value or error.
	pub fn tick(&mut self, now: Instant) -> Vec<FieldEvent> {
		if let UploadIndicator::Uploading { until } = self.indicator
			&& now >= until
		{
			self.indicator = UploadIndicator::Done;
		}
		vec![]
	}

	fn set_error(&mut self, error: String) -> FieldEvent {
		self.error = error.clone();
		FieldEvent::ErrorChanged {
			name: self.descriptor.name.clone(),
			error,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const MB: u64 = 1024 * 1024;

	#[test]
	fn test_oversized_file_is_rejected_and_not_forwarded() {
		// Arrange
		let mut input = FileInput::new("upload").with_max_size_mb(1);
		let file = FileHandle::new("big.bin", "application/octet-stream", 2 * MB);

		// Act
		let events = input.select_file(Some(file), Instant::now());

		// Assert
		assert_eq!(
			events,
			vec![FieldEvent::ErrorChanged {
				name: "upload".to_string(),
				error: "File size exceeds 1 MB.".to_string(),
			}]
		);
		assert!(input.file().is_none());
		assert_eq!(input.indicator(), UploadIndicator::Idle);
	}

	#[rstest]
	#[case("image/png", true)]
	#[case("image/jpeg", true)]
	#[case("application/pdf", false)]
	fn test_type_allow_list(#[case] mime: &str, #[case] accepted: bool) {
		// Arrange
		let mut input = FileInput::new("avatar")
			.with_allowed_types(vec!["image/png".to_string(), "image/jpeg".to_string()]);
		let file = FileHandle::new("f", mime, 100);

		// Act
		let events = input.select_file(Some(file), Instant::now());

		// Assert
		let forwarded = events
			.iter()
			.any(|e| matches!(e, FieldEvent::ValueChanged { .. }));
		assert_eq!(forwarded, accepted);
		if !accepted {
			assert_eq!(input.error(), "File type is not allowed.");
		}
	}

	#[test]
	fn test_accepted_file_forwards_handle_and_clears_error() {
		// Arrange: start from a rejected state
		let mut input = FileInput::new("upload").with_max_size_mb(1);
		let t0 = Instant::now();
		input.select_file(Some(FileHandle::new("big", "text/plain", 2 * MB)), t0);
		assert!(!input.error().is_empty());

		// Act
		let ok = FileHandle::new("small.txt", "text/plain", MB / 2);
		let events = input.select_file(Some(ok.clone()), t0);

		// Assert
		assert_eq!(
			events,
			vec![
				FieldEvent::ErrorChanged {
					name: "upload".to_string(),
					error: String::new(),
				},
				FieldEvent::ValueChanged {
					name: "upload".to_string(),
					value: FieldValue::File(ok),
				},
			]
		);
	}

	#[test]
	fn test_indicator_is_bounded_and_cosmetic() {
		// Arrange
		let mut input = FileInput::new("upload");
		let t0 = Instant::now();
		input.select_file(Some(FileHandle::new("a.txt", "text/plain", 10)), t0);
		assert!(matches!(input.indicator(), UploadIndicator::Uploading { .. }));

		// Act: settle the indicator
		let events = input.tick(t0 + UPLOAD_INDICATOR_DURATION);

		// Assert: no events, value and error untouched
		assert!(events.is_empty());
		assert_eq!(input.indicator(), UploadIndicator::Done);
		assert!(input.file().is_some());
		assert_eq!(input.error(), "");
	}

	#[test]
	fn test_cleared_selection_on_required_field() {
		let mut input = FileInput::new("upload").required();

		let events = input.select_file(None, Instant::now());

		assert_eq!(
			events,
			vec![FieldEvent::ErrorChanged {
				name: "upload".to_string(),
				error: "File is required.".to_string(),
			}]
		);
		assert!(input.file().is_none());
	}
}
