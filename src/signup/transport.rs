use std::future::Future;

use color_eyre::eyre::{Result, WrapErr};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

pub const SIGNUP_PATH: &str = "/api/waitlist/signup";

/// Body of the signup request.
#[derive(Clone, Debug, PartialEq, Eq, derive_new::new, Deserialize, Serialize)]
pub struct SignupPayload {
	pub email: String,
	#[serde(rename = "instagramId")]
	pub instagram_id: String,
}

/// Delivers one signup to the waitlist.
///
/// `Ok` means the request completed, not that it was accepted: the response is never inspected.
/// `Err` is reserved for requests that could not be sent or completed.
pub trait SignupTransport {
	fn send(&self, payload: &SignupPayload) -> impl Future<Output = Result<()>>;
}

/// Resolves the signup endpoint under the configured base URL.
pub fn signup_endpoint(base_url: &str) -> Result<Url> {
	let base = Url::parse(base_url).wrap_err_with(|| format!("Invalid waitlist base url: {base_url:?}"))?;
	base.join(SIGNUP_PATH).wrap_err("Failed to build signup endpoint")
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
	client: reqwest::Client,
	endpoint: String,
}

impl HttpTransport {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			endpoint: endpoint.into(),
		}
	}

	pub fn from_base_url(base_url: &str) -> Result<Self> {
		Ok(Self::new(signup_endpoint(base_url)?))
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

impl SignupTransport for HttpTransport {
	#[instrument(skip(self, payload), fields(endpoint = %self.endpoint))]
	async fn send(&self, payload: &SignupPayload) -> Result<()> {
		let response = self
			.client
			.post(&self.endpoint)
			.json(payload)
			.send()
			.await
			.wrap_err_with(|| format!("Failed to reach {}", self.endpoint))?;

		let status = response.status();
		//Q: error statuses count as delivered too. Should they?
		if status.is_success() {
			debug!(%status, "signup delivered");
		} else {
			warn!(%status, "waitlist endpoint answered with an error status, treating the signup as delivered");
		}
		Ok(())
	}
}
