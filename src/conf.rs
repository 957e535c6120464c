extern crate clap;

use color_eyre::eyre;
use reqwest::Url;

#[derive(Clone, Debug, v_utils::macros::MyConfigPrimitives)]
#[cfg_attr(feature = "ssr", derive(v_utils::macros::Settings))]
pub struct Settings {
	#[serde(default)]
	pub waitlist: WaitlistConfig,
	/// Product name shown in the page header and title
	#[serde(default = "__default_brand")]
	#[primitives(skip)]
	pub brand: String,
}

fn __default_brand() -> String {
	"LikFit".to_string()
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			waitlist: WaitlistConfig::default(),
			brand: __default_brand(),
		}
	}
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct WaitlistConfig {
	/// Scheme and host of the waitlist API. The signup path is appended to it.
	#[serde(default = "__default_api_base_url")]
	pub api_base_url: String,
}

impl Default for WaitlistConfig {
	fn default() -> Self {
		Self {
			api_base_url: __default_api_base_url(),
		}
	}
}

fn __default_api_base_url() -> String {
	"https://linkfit.app".to_string()
}

impl WaitlistConfig {
	pub fn signup_endpoint(&self) -> eyre::Result<Url> {
		crate::signup::signup_endpoint(&self.api_base_url)
	}
}
