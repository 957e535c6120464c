use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
	transport::SignupPayload,
	validation::{self, Field, FieldErrors},
};

/// Lifecycle stage of one submit action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, derive_more::Display, Deserialize, Serialize)]
pub enum SubmissionState {
	#[default]
	Idle,
	Submitting,
	Succeeded,
	Failed,
}

impl SubmissionState {
	pub fn is_terminal(self) -> bool {
		matches!(self, Self::Succeeded | Self::Failed)
	}
}

/// Everything the waitlist form shows. Constructed empty and `Idle` when the form mounts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupState {
	pub email: String,
	pub handle: String,
	pub errors: FieldErrors,
	pub submission: SubmissionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
	/// Keystroke in one of the inputs.
	Edit { field: Field, value: String },
	/// Submit was attempted with invalid input.
	SubmitRejected(FieldErrors),
	SubmitStarted,
	/// The request completed, whatever the status code.
	SubmitCompleted,
	/// The request could not be sent or completed.
	SubmitFailed,
}

/// What a submit attempt should do, decided from a snapshot of the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitPlan {
	/// A request from this form is still in flight.
	Busy,
	Reject(FieldErrors),
	Send(SignupPayload),
}

impl SignupState {
	pub fn value(&self, field: Field) -> &str {
		match field {
			Field::Email => &self.email,
			Field::Handle => &self.handle,
		}
	}

	pub fn is_submitting(&self) -> bool {
		self.submission == SubmissionState::Submitting
	}

	pub fn validate(&self) -> FieldErrors {
		validation::validate(&self.email, &self.handle)
	}

	pub fn payload(&self) -> SignupPayload {
		SignupPayload::new(self.email.clone(), self.handle.clone())
	}

	pub fn plan_submit(&self) -> SubmitPlan {
		if self.is_submitting() {
			return SubmitPlan::Busy;
		}
		let errors = self.validate();
		match errors.is_empty() {
			true => SubmitPlan::Send(self.payload()),
			false => SubmitPlan::Reject(errors),
		}
	}

	/// Pure transition: `(state, event) -> state`.
	pub fn apply(mut self, event: Event) -> Self {
		debug!(from = %self.submission, ?event, "signup transition");
		match event {
			Event::Edit { field, value } => {
				match field {
					Field::Email => self.email = value,
					Field::Handle => self.handle = value,
				}
				self.errors.clear(field);
				// any edit after a finished cycle starts a new attempt
				if self.submission.is_terminal() {
					self.submission = SubmissionState::Idle;
				}
			}
			Event::SubmitRejected(errors) => {
				self.errors = errors;
			}
			Event::SubmitStarted => {
				self.errors = FieldErrors::default();
				self.submission = SubmissionState::Submitting;
			}
			Event::SubmitCompleted if self.is_submitting() => {
				self.submission = SubmissionState::Succeeded;
				self.email.clear();
				self.handle.clear();
			}
			Event::SubmitFailed if self.is_submitting() => {
				self.submission = SubmissionState::Failed;
				self.errors = FieldErrors::submission_failed();
			}
			Event::SubmitCompleted | Event::SubmitFailed => {
				debug!("ignoring completion outside of a submission");
			}
		}
		self
	}
}
