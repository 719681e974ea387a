//! Leptos client-side dashboard of game statistics: per-year category lists on
//! the overview, rating, playtime and genre-network charts per game.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod charts;
mod components;
mod config;
mod controller;
mod data;
mod pages;
mod selection;

pub use crate::config::DashboardConfig;

// Top-Level pages
use crate::pages::game_info::GameInfo;
use crate::pages::not_found::NotFound;
use crate::pages::overview::Overview;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(level: Level) {
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!("Logging initialized at {level}");
}

/// An app router for the overview and per-game pages, with a 404 fallback.
#[component]
pub fn App(
	/// Settings shared with every page; defaults when absent.
	#[prop(optional)]
	config: Option<DashboardConfig>,
) -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(config.unwrap_or_default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Game Statistics" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Overview />
				<Route path=path!("/game-info/:game_name") view=GameInfo />
			</Routes>
		</Router>
	}
}
