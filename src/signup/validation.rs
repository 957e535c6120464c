use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `local@domain.tld`, where no part may contain whitespace or a second `@`.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("pattern is a literal"));

/// An input of the signup form. Displays as the key it carries on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display, Deserialize, Serialize)]
pub enum Field {
	#[display("email")]
	Email,
	#[display("instagramId")]
	Handle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum FieldErrorKind {
	/// Required field was empty at submit time.
	MissingField,
	/// Email was non-empty but not shaped like an address.
	InvalidFormat,
	/// The request itself could not be completed. Always reported on [`Field::Email`].
	SubmissionFailed,
}

/// A validation failure scoped to one input, rendered inline under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_new::new)]
pub struct FieldError {
	pub field: Field,
	pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let msg = match (self.field, self.kind) {
			(_, FieldErrorKind::SubmissionFailed) => "Something went wrong. Please try again.",
			(Field::Email, FieldErrorKind::MissingField) => "Email is required",
			(Field::Email, FieldErrorKind::InvalidFormat) => "Please enter a valid email address",
			(Field::Handle, FieldErrorKind::MissingField) => "Instagram handle is required",
			(Field::Handle, FieldErrorKind::InvalidFormat) => "Please enter a valid Instagram handle",
		};
		f.write_str(msg)
	}
}

/// Per-field error slots. Empty means the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
	email: Option<FieldErrorKind>,
	handle: Option<FieldErrorKind>,
}

impl FieldErrors {
	/// The generic error shown after a transport failure.
	pub fn submission_failed() -> Self {
		Self {
			email: Some(FieldErrorKind::SubmissionFailed),
			handle: None,
		}
	}

	pub fn get(&self, field: Field) -> Option<FieldError> {
		self.slot(field).map(|kind| FieldError::new(field, kind))
	}

	pub fn set(&mut self, field: Field, kind: FieldErrorKind) {
		*self.slot_mut(field) = Some(kind);
	}

	pub fn clear(&mut self, field: Field) {
		*self.slot_mut(field) = None;
	}

	pub fn is_empty(&self) -> bool {
		self.email.is_none() && self.handle.is_none()
	}

	pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
		[Field::Email, Field::Handle].into_iter().filter_map(|field| self.get(field))
	}

	fn slot(&self, field: Field) -> Option<FieldErrorKind> {
		match field {
			Field::Email => self.email,
			Field::Handle => self.handle,
		}
	}

	fn slot_mut(&mut self, field: Field) -> &mut Option<FieldErrorKind> {
		match field {
			Field::Email => &mut self.email,
			Field::Handle => &mut self.handle,
		}
	}
}

pub fn validate_email(email: &str) -> Option<FieldErrorKind> {
	if email.is_empty() {
		Some(FieldErrorKind::MissingField)
	} else if !EMAIL_SHAPE.is_match(email) {
		Some(FieldErrorKind::InvalidFormat)
	} else {
		None
	}
}

pub fn validate_handle(handle: &str) -> Option<FieldErrorKind> {
	match handle.trim().is_empty() {
		true => Some(FieldErrorKind::MissingField),
		false => None,
	}
}

/// Checks both inputs; only failing fields end up in the result.
pub fn validate(email: &str, handle: &str) -> FieldErrors {
	let mut errors = FieldErrors::default();
	if let Some(kind) = validate_email(email) {
		errors.set(Field::Email, kind);
	}
	if let Some(kind) = validate_handle(handle) {
		errors.set(Field::Handle, kind);
	}
	errors
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_inputs_are_missing() {
		let errors = validate("", "");
		assert_eq!(errors.get(Field::Email).map(|e| e.kind), Some(FieldErrorKind::MissingField));
		assert_eq!(errors.get(Field::Handle).map(|e| e.kind), Some(FieldErrorKind::MissingField));
		assert_eq!(errors.iter().count(), 2);
	}

	#[test]
	fn malformed_emails_are_invalid_format() {
		for email in ["plainaddress", "a@b", "@b.com", "a@.com", "a@b.", "a b@c.com", "a@b@c.com", " ", "a@b .com"] {
			assert_eq!(validate_email(email), Some(FieldErrorKind::InvalidFormat), "{email:?}");
		}
	}

	#[test]
	fn well_shaped_emails_pass() {
		for email in ["a@b.com", "first.last+tag@sub.domain.io", "x@y.z", "ü@例え.jp", "a@b.c.d"] {
			assert_eq!(validate_email(email), None, "{email:?}");
		}
	}

	#[test]
	fn whitespace_handle_is_missing() {
		assert_eq!(validate_handle("   "), Some(FieldErrorKind::MissingField));
		assert_eq!(validate_handle("\t\n"), Some(FieldErrorKind::MissingField));
		assert_eq!(validate_handle(" @someuser "), None);
	}

	#[test]
	fn valid_form_has_no_errors() {
		let errors = validate("a@b.com", "@someuser");
		assert!(errors.is_empty());
		assert_eq!(errors.iter().next(), None);
	}

	#[test]
	fn messages() {
		assert_eq!(FieldError::new(Field::Email, FieldErrorKind::MissingField).to_string(), "Email is required");
		assert_eq!(FieldError::new(Field::Email, FieldErrorKind::InvalidFormat).to_string(), "Please enter a valid email address");
		assert_eq!(FieldError::new(Field::Handle, FieldErrorKind::MissingField).to_string(), "Instagram handle is required");
		assert_eq!(
			FieldErrors::submission_failed().get(Field::Email).map(|e| e.to_string()).as_deref(),
			Some("Something went wrong. Please try again.")
		);
		assert_eq!(Field::Handle.to_string(), "instagramId");
	}
}
