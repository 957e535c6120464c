mod waitlist_form;

use leptos::{html::*, prelude::*, svg::svg};
use leptos_meta::{Title, TitleProps};
pub use waitlist_form::*;

use crate::conf::Settings;

const SELLING_POINTS: [&str; 4] = [
	"Transform your Instagram influence into a profitable business venture today",
	"Create and curate stunning collections from your favorite luxury fashion brands",
	"Share your personally curated style directly through Instagram reels and posts",
	"Earn substantial commission from every purchase through your generated links",
];

/// Seconds between consecutive selling points fading in.
const STAGGER_SECS: f32 = 0.2;

/// Two-pane landing page: value proposition on the left, waitlist form on the right.
#[component]
pub fn LandingPage() -> impl IntoView {
	let settings = use_context::<Settings>().unwrap_or_default();
	let endpoint = match settings.waitlist.signup_endpoint() {
		Ok(url) => url.to_string(),
		Err(e) => {
			// submits will fail at the transport and surface the generic error
			tracing::error!("Waitlist endpoint is misconfigured: {e:?}");
			String::new()
		}
	};

	div().class("min-h-screen flex flex-col md:flex-row").child((
		Title(TitleProps {
			formatter: None,
			text: Some(format!("{} | Join the Waitlist", settings.brand).into()),
		}),
		div()
			.class("w-full md:w-1/2 bg-green-500 p-8 md:p-16 flex items-center justify-center overflow-hidden")
			.child(ValueProposition()),
		div().class("w-full md:w-1/2 bg-white p-8 md:p-16 flex items-center justify-center").child(
			div().class("w-full max-w-md").child((
				BrandHeader(BrandHeaderProps { brand: settings.brand }),
				WaitlistForm(WaitlistFormProps { endpoint }),
			)),
		),
	))
}

#[component]
fn BrandHeader(brand: String) -> impl IntoView {
	div().class("flex items-center justify-center mb-8").child((
		svg()
			.attr("viewBox", "0 0 24 24")
			.attr("fill", "none")
			.attr("stroke", "currentColor")
			.attr("stroke-width", "2")
			.class("text-green-500 w-8 h-8 mr-2")
			.child(leptos::svg::path().attr("d", "M12 3l1.9 5.8L20 10.5l-5 3.7 1.9 5.8L12 16.3 7.1 20l1.9-5.8-5-3.7 6.1-1.7z")),
		span().class("text-2xl font-bold text-gray-800").child(brand),
	))
}

#[component]
fn ValueProposition() -> impl IntoView {
	div().class("relative w-full max-w-2xl").child((
		AnimatedLines(),
		div().class("space-y-8 mt-20").child(
			SELLING_POINTS
				.iter()
				.enumerate()
				.map(|(i, sentence)| {
					let delay = i as f32 * STAGGER_SECS;
					div().class("flex items-start space-x-4 animate-slide-in")
						.style(format!("animation-delay: {delay}s"))
						.child((
							div().class("flex-shrink-0 w-3 h-3 mt-1.5 bg-white rounded-full animate-pop-in")
								.style(format!("animation-delay: {}s", delay + 0.3)),
							span().class("text-white text-lg font-medium leading-relaxed").child(*sentence),
						))
				})
				.collect::<Vec<_>>(),
		),
	))
}

/// Three lines sweeping across the top of the pane, on a loop.
#[component]
fn AnimatedLines() -> impl IntoView {
	div().class("absolute top-0 left-0 w-full").child(
		(0..3)
			.map(|i| {
				div()
					.class("h-[2px] bg-white/30 mb-4 origin-left animate-line-sweep")
					.style(format!("animation-delay: {}s", i as f32 * 0.5))
			})
			.collect::<Vec<_>>(),
	)
}
