use std::sync::{Arc, PoisonError, RwLock};

use super::state::{Event, SignupState, SubmitPlan};

pub type SubscriptionId = u64;

type Listener = Arc<dyn Fn(&SignupState) + Send + Sync>;

#[derive(Default)]
struct Inner {
	state: SignupState,
	listeners: Vec<(SubscriptionId, Listener)>,
	next_id: SubscriptionId,
}

/// Observable holder of one form's [`SignupState`].
///
/// Every change goes through [`SignupState::apply`]; listeners are called after the lock is released,
/// only when the state actually changed, in subscription order.
#[derive(Clone, Default)]
pub struct SignupStore {
	inner: Arc<RwLock<Inner>>,
}

impl std::fmt::Debug for SignupStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
		f.debug_struct("SignupStore").field("state", &inner.state).field("listeners", &inner.listeners.len()).finish()
	}
}

impl SignupStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get_state(&self) -> SignupState {
		self.inner.read().unwrap_or_else(PoisonError::into_inner).state.clone()
	}

	pub fn update(&self, event: Event) -> SignupState {
		self.transition(|_| (Some(event), ())).0
	}

	/// Atomically decides what a submit should do and records the matching transition,
	/// so two submits racing on the same form can't both start a request.
	pub fn begin_submit(&self) -> SubmitPlan {
		self.transition(|state| {
			let plan = state.plan_submit();
			let event = match &plan {
				SubmitPlan::Busy => None,
				SubmitPlan::Reject(errors) => Some(Event::SubmitRejected(errors.clone())),
				SubmitPlan::Send(_) => Some(Event::SubmitStarted),
			};
			(event, plan)
		})
		.1
	}

	pub fn subscribe(&self, listener: impl Fn(&SignupState) + Send + Sync + 'static) -> SubscriptionId {
		let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
		let id = inner.next_id;
		inner.next_id += 1;
		inner.listeners.push((id, Arc::new(listener)));
		id
	}

	/// Returns whether the listener was still registered.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
		let before = inner.listeners.len();
		inner.listeners.retain(|(listener_id, _)| *listener_id != id);
		inner.listeners.len() != before
	}

	fn transition<R>(&self, decide: impl FnOnce(&SignupState) -> (Option<Event>, R)) -> (SignupState, R) {
		let (snapshot, listeners, out) = {
			let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
			let (event, out) = decide(&inner.state);
			let Some(event) = event else {
				return (inner.state.clone(), out);
			};
			let next = inner.state.clone().apply(event);
			if next == inner.state {
				return (next, out);
			}
			inner.state = next.clone();
			let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
			(next, listeners, out)
		};

		for listener in listeners {
			listener(&snapshot);
		}
		(snapshot, out)
	}
}
