use color_eyre::eyre::Report;
use tracing::{info, instrument, warn};

use super::{
	state::{Event, SignupState, SubmitPlan},
	store::SignupStore,
	transport::SignupTransport,
	validation::{Field, FieldErrors},
};

#[derive(Debug)]
pub enum SubmitOutcome {
	/// Input was invalid; the errors are now in the state and nothing was sent.
	Rejected(FieldErrors),
	/// A previous submit from this form hasn't finished yet; nothing was sent.
	InFlight,
	Succeeded,
	/// The request could not be completed. Field values are kept for a retry.
	Failed(Report),
}

/// Drives one waitlist form: field edits, validation and the single outbound request per valid submit.
#[derive(Clone, Debug)]
pub struct SignupController<T> {
	store: SignupStore,
	transport: T,
}

impl<T: SignupTransport> SignupController<T> {
	pub fn new(transport: T) -> Self {
		Self {
			store: SignupStore::new(),
			transport,
		}
	}

	pub fn store(&self) -> &SignupStore {
		&self.store
	}

	pub fn state(&self) -> SignupState {
		self.store.get_state()
	}

	/// Sets the raw value and drops that field's error. Does not revalidate.
	pub fn update_field(&self, field: Field, value: impl Into<String>) -> SignupState {
		self.store.update(Event::Edit { field, value: value.into() })
	}

	pub fn validate(&self) -> FieldErrors {
		self.store.get_state().validate()
	}

	#[instrument(skip(self))]
	pub async fn submit(&self) -> SubmitOutcome {
		let payload = match self.store.begin_submit() {
			SubmitPlan::Busy => return SubmitOutcome::InFlight,
			SubmitPlan::Reject(errors) => return SubmitOutcome::Rejected(errors),
			SubmitPlan::Send(payload) => payload,
		};

		match self.transport.send(&payload).await {
			Ok(()) => {
				info!(email = %payload.email, instagram_id = %payload.instagram_id, "joined waitlist");
				self.store.update(Event::SubmitCompleted);
				SubmitOutcome::Succeeded
			}
			Err(e) => {
				warn!("Waitlist signup failed: {e:?}");
				self.store.update(Event::SubmitFailed);
				SubmitOutcome::Failed(e)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{Arc, Mutex};

	use color_eyre::eyre::eyre;
	use futures::channel::oneshot;

	use super::*;
	use crate::signup::{
		state::SubmissionState,
		transport::SignupPayload,
		validation::FieldErrorKind,
	};

	#[derive(Clone, Default)]
	struct RecordingTransport {
		sent: Arc<Mutex<Vec<SignupPayload>>>,
		fail: bool,
	}

	impl RecordingTransport {
		fn failing() -> Self {
			Self { fail: true, ..Default::default() }
		}

		fn sent(&self) -> Vec<SignupPayload> {
			self.sent.lock().unwrap().clone()
		}
	}

	impl SignupTransport for RecordingTransport {
		async fn send(&self, payload: &SignupPayload) -> color_eyre::eyre::Result<()> {
			self.sent.lock().unwrap().push(payload.clone());
			match self.fail {
				true => Err(eyre!("connection refused")),
				false => Ok(()),
			}
		}
	}

	/// Holds every request open until the gate is released.
	#[derive(Clone)]
	struct GatedTransport {
		gate: Arc<Mutex<Option<oneshot::Receiver<()>>>>,
		calls: Arc<Mutex<usize>>,
	}

	impl SignupTransport for GatedTransport {
		async fn send(&self, _payload: &SignupPayload) -> color_eyre::eyre::Result<()> {
			*self.calls.lock().unwrap() += 1;
			let gate = self.gate.lock().unwrap().take();
			if let Some(gate) = gate {
				let _ = gate.await;
			}
			Ok(())
		}
	}

	fn filled<T: SignupTransport>(transport: T) -> SignupController<T> {
		let controller = SignupController::new(transport);
		controller.update_field(Field::Email, "a@b.com");
		controller.update_field(Field::Handle, "@someuser");
		controller
	}

	#[tokio::test]
	async fn valid_submit_sends_once_and_resets() {
		let transport = RecordingTransport::default();
		let controller = filled(transport.clone());

		let outcome = controller.submit().await;

		assert!(matches!(outcome, SubmitOutcome::Succeeded));
		assert_eq!(transport.sent(), vec![SignupPayload::new("a@b.com".into(), "@someuser".into())]);
		let state = controller.state();
		assert_eq!(state.submission, SubmissionState::Succeeded);
		assert_eq!(state.email, "");
		assert_eq!(state.handle, "");
		assert!(state.errors.is_empty());
	}

	#[tokio::test]
	async fn invalid_submit_sends_nothing() {
		let transport = RecordingTransport::default();
		let controller = SignupController::new(transport.clone());
		controller.update_field(Field::Email, "a@b.com");
		controller.update_field(Field::Handle, "   ");

		let SubmitOutcome::Rejected(errors) = controller.submit().await else {
			panic!("whitespace handle must be rejected");
		};

		assert_eq!(errors.get(Field::Handle).map(|e| e.kind), Some(FieldErrorKind::MissingField));
		assert!(transport.sent().is_empty());
		let state = controller.state();
		assert_eq!(state.submission, SubmissionState::Idle);
		assert_eq!(state.errors, errors);
	}

	#[tokio::test]
	async fn transport_failure_keeps_values() {
		let transport = RecordingTransport::failing();
		let controller = filled(transport.clone());

		let outcome = controller.submit().await;

		assert!(matches!(outcome, SubmitOutcome::Failed(_)));
		assert_eq!(transport.sent().len(), 1);
		let state = controller.state();
		assert_eq!(state.submission, SubmissionState::Failed);
		assert_eq!(state.email, "a@b.com");
		assert_eq!(state.handle, "@someuser");
		assert_eq!(
			state.errors.get(Field::Email).map(|e| e.to_string()).as_deref(),
			Some("Something went wrong. Please try again.")
		);
	}

	#[tokio::test]
	async fn retry_after_failure() {
		let transport = RecordingTransport::failing();
		let controller = filled(transport.clone());
		controller.submit().await;

		let outcome = controller.submit().await;

		assert!(matches!(outcome, SubmitOutcome::Failed(_)));
		assert_eq!(transport.sent().len(), 2);
	}

	#[tokio::test]
	async fn duplicate_submit_while_in_flight() {
		let (release, gate) = oneshot::channel();
		let transport = GatedTransport {
			gate: Arc::new(Mutex::new(Some(gate))),
			calls: Arc::new(Mutex::new(0)),
		};
		let controller = filled(transport.clone());

		let (first, second) = futures::join!(controller.submit(), async {
			let outcome = controller.submit().await;
			assert!(controller.state().is_submitting());
			release.send(()).unwrap();
			outcome
		});

		assert!(matches!(first, SubmitOutcome::Succeeded));
		assert!(matches!(second, SubmitOutcome::InFlight));
		assert_eq!(*transport.calls.lock().unwrap(), 1);
		assert_eq!(controller.state().submission, SubmissionState::Succeeded);
	}

	#[tokio::test]
	async fn store_subscribers_follow_the_submission() {
		let controller = filled(RecordingTransport::default());
		let seen = Arc::new(Mutex::new(Vec::new()));
		controller.store().subscribe({
			let seen = Arc::clone(&seen);
			move |s: &SignupState| seen.lock().unwrap().push(s.submission)
		});

		controller.submit().await;

		assert_eq!(*seen.lock().unwrap(), vec![SubmissionState::Submitting, SubmissionState::Succeeded]);
	}
}
