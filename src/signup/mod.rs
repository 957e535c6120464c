//! Waitlist signup: field validation, the submission state machine and the one outbound request.
//!
//! Nothing in here knows about rendering. The page mirrors [`SignupStore`] into its reactive state
//! and forwards DOM events to [`SignupController`].

mod controller;
mod state;
mod store;
mod transport;
mod validation;

pub use controller::*;
pub use state::*;
pub use store::*;
pub use transport::*;
pub use validation::*;
