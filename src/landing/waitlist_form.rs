use leptos::{ev, html::*, prelude::*, svg::svg};

use crate::signup::{Field, HttpTransport, SignupController, SignupState, SubmissionState};

/// The waitlist form. `endpoint` is the full signup URL, resolved from config on the server.
#[island]
pub fn WaitlistForm(endpoint: String) -> impl IntoView {
	let controller = SignupController::new(HttpTransport::new(endpoint));

	let state = RwSignal::new(controller.state());
	let subscription = controller.store().subscribe(move |s: &SignupState| {
		// the island may be gone by the time a response lands
		let _ = state.try_set(s.clone());
	});
	on_cleanup({
		let store = controller.store().clone();
		move || {
			store.unsubscribe(subscription);
		}
	});

	let on_submit = {
		let controller = controller.clone();
		move |e: web_sys::SubmitEvent| {
			e.prevent_default();
			let controller = controller.clone();
			leptos::task::spawn_local(async move {
				controller.submit().await;
			});
		}
	};
	let on_edit = move |field: Field| {
		let controller = controller.clone();
		move |e: web_sys::Event| {
			controller.update_field(field, event_target_value(&e));
		}
	};

	let is_submitting = move || state.with(|s| s.is_submitting());

	div().class("w-full max-w-md p-8 animate-slide-up").child((
		div().class("text-center mb-8").child((
			h2().class("text-3xl font-bold text-gray-800 mb-4").child("Join the Waitlist"),
			p().class("text-gray-600").child("Be among the first creators to monetize your fashion influence"),
		)),
		move || {
			state.with(|s| s.submission == SubmissionState::Succeeded).then(|| {
				div().class("mb-6 p-4 bg-green-100 text-green-700 rounded-lg animate-slide-down")
					.child("Thanks for joining! We'll be in touch soon.")
			})
		},
		form().class("space-y-6").on(ev::submit, on_submit).child((
			div().child((
				label().attr("for", "email").class("block text-sm font-medium text-gray-700 mb-2").child("Email Address"),
				input()
					.attr("type", "email")
					.attr("id", "email")
					.attr("placeholder", "your@email.com")
					.class(move || input_classes(state, Field::Email))
					.prop("value", move || state.with(|s| s.email.clone()))
					.on(ev::input, on_edit(Field::Email)),
				field_error(state, Field::Email),
			)),
			div().child((
				label().attr("for", "instagram").class("block text-sm font-medium text-gray-700 mb-2").child("Instagram Handle"),
				div().class("relative").child((
					instagram_icon(),
					input()
						.attr("type", "text")
						.attr("id", "instagram")
						.attr("placeholder", "@yourusername")
						.class(move || format!("pl-10 pr-4 {}", input_classes(state, Field::Handle)))
						.prop("value", move || state.with(|s| s.handle.clone()))
						.on(ev::input, on_edit(Field::Handle)),
				)),
				field_error(state, Field::Handle),
			)),
			button()
				.attr("type", "submit")
				.class("w-full bg-green-500 text-white py-3 rounded-lg font-medium hover:bg-green-600 active:scale-[0.98] transition-colors disabled:opacity-50 disabled:cursor-not-allowed")
				.prop("disabled", is_submitting)
				.child(move || match is_submitting() {
					true => span().class("flex items-center justify-center").child((spinner(), "Processing...")).into_any(),
					false => span().child("Join Waitlist").into_any(),
				}),
		)),
	))
}

fn input_classes(state: RwSignal<SignupState>, field: Field) -> &'static str {
	match state.with(|s| s.errors.get(field).is_some()) {
		true => "w-full px-4 py-3 rounded-lg border border-red-300 focus:ring-red-500 focus:ring-2 focus:border-transparent transition-all",
		false => "w-full px-4 py-3 rounded-lg border border-gray-300 focus:ring-green-500 focus:ring-2 focus:border-transparent transition-all",
	}
}

fn field_error(state: RwSignal<SignupState>, field: Field) -> impl IntoView {
	move || {
		state.with(|s| s.errors.get(field)).map(|err| {
			div().class("mt-2 flex items-center text-sm text-red-600 animate-slide-down").child((
				svg()
					.attr("viewBox", "0 0 24 24")
					.attr("fill", "none")
					.attr("stroke", "currentColor")
					.attr("stroke-width", "2")
					.class("w-4 h-4 mr-1")
					.child(leptos::svg::path().attr("d", "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z")),
				err.to_string(),
			))
		})
	}
}

fn instagram_icon() -> impl IntoView {
	svg()
		.attr("viewBox", "0 0 24 24")
		.attr("fill", "none")
		.attr("stroke", "currentColor")
		.attr("stroke-width", "2")
		.class("absolute left-3 top-1/2 transform -translate-y-1/2 text-gray-400 w-5 h-5")
		.child(leptos::svg::path().attr("d", "M8 3h8a5 5 0 015 5v8a5 5 0 01-5 5H8a5 5 0 01-5-5V8a5 5 0 015-5zm4 5a4 4 0 100 8 4 4 0 000-8zm5.5-1.5h.01"))
}

fn spinner() -> impl IntoView {
	svg()
		.attr("viewBox", "0 0 24 24")
		.attr("fill", "none")
		.class("animate-spin -ml-1 mr-3 h-5 w-5 text-white")
		.child((
			leptos::svg::circle()
				.class("opacity-25")
				.attr("cx", "12")
				.attr("cy", "12")
				.attr("r", "10")
				.attr("stroke", "currentColor")
				.attr("stroke-width", "4"),
			leptos::svg::path()
				.class("opacity-75")
				.attr("fill", "currentColor")
				.attr("d", "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"),
		))
}
