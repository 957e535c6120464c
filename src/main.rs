#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
	#[clap(flatten)]
	settings: linkfit_site::conf::SettingsFlags,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
	use axum::Router;
	use clap::Parser as _;
	use color_eyre::eyre::WrapErr as _;
	use leptos::prelude::*;
	use leptos_axum::{generate_route_list, LeptosRoutes};
	use linkfit_site::{app::*, conf::Settings};
	use tracing::{debug, info};

	v_utils::clientside!();
	let cli = Cli::parse();
	let settings = Settings::try_build(cli.settings)?;
	// fail at startup rather than on the first signup
	let endpoint = settings.waitlist.signup_endpoint()?;
	info!(%endpoint, "waitlist signups will be posted to");

	let conf = get_configuration(None)?;
	let addr = conf.leptos_options.site_addr;
	let leptos_options = conf.leptos_options;

	let routes = generate_route_list(App);
	debug!(?routes);

	let app = Router::new()
		.leptos_routes_with_context(&leptos_options, routes, move || provide_context(settings.clone()), {
			let leptos_options = leptos_options.clone();
			move || shell(leptos_options.clone())
		})
		.fallback(leptos_axum::file_and_error_handler(shell))
		.with_state(leptos_options);

	let listener = tokio::net::TcpListener::bind(&addr).await.wrap_err_with(|| format!("Failed to bind {addr}"))?;
	info!("listening on http://{}", &addr);
	axum::serve(listener, app.into_make_service()).await.wrap_err("Server error")?;
	Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// hydration is bootstrapped in [./lib.rs]
	panic!("not the correct access point");
}
