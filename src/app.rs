use leptos::{html::*, prelude::*};
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, StylesheetProps, Title, TitleProps};
use leptos_routable::prelude::*;
use leptos_router::components::Router;

use crate::landing::LandingPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
	view! {
		<!DOCTYPE html>
		<html lang="en">
			<head>
				<meta charset="utf-8" />
				<meta name="viewport" content="width=device-width, initial-scale=1" />
				<AutoReload options=options.clone() />
				<HydrationScripts options islands=true />
				<MetaTags />
			</head>
			<body>
				<App />
			</body>
		</html>
	}
}

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	(
		Stylesheet(StylesheetProps {
			id: Some("leptos".to_owned()),
			href: format!("/pkg/{}.css", env!("CARGO_PKG_NAME")),
		}),
		view! {
			<Router>
				<main class="min-h-screen">{move || AppRoutes::routes()}</main>
			</Router>
		},
	)
}

#[derive(Routable)]
#[routes(view_prefix = "", view_suffix = "View", transition = false)]
pub enum AppRoutes {
	#[route(path = "/")]
	Home,
	#[fallback]
	#[route(path = "/404")]
	NotFound,
}

#[component]
fn HomeView() -> impl IntoView {
	LandingPage()
}

#[component]
pub fn NotFoundView() -> impl IntoView {
	section().class("p-4 text-center mt-16").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Not Found".into()),
		}),
		h1().class("text-2xl font-bold").child("404: Not Found"),
		p().child("Sorry, we can't find that page."),
		a().attr("href", "/")
			.class("inline-block px-4 py-2 bg-green-500 text-white rounded mt-4")
			.child("Join the Waitlist"),
	))
}
