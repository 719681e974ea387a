use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use log::debug;

use crate::controller::{DatasetController, LoadState};

pub mod game_info;
pub mod not_found;
pub mod overview;

/// Path of the detail page for `title`.
pub fn game_path(title: &str) -> String {
	format!("/game-info/{}", String::from(js_sys::encode_uri_component(title)))
}

/// Setting the returned signal to a title opens that game's detail page.
pub fn use_game_opener() -> RwSignal<Option<String>> {
	let navigate = use_navigate();
	let target = RwSignal::new(None::<String>);
	Effect::new(move |_| {
		if let Some(title) = target.get() {
			debug!("opening {title:?}");
			navigate(&game_path(&title), Default::default());
		}
	});
	target
}

/// Shown in place of a section whose dataset is loading or failed to load.
#[component]
pub fn LoadNote(controller: DatasetController) -> impl IntoView {
	move || {
		controller.with(|c| match c.state() {
			LoadState::Loading => Some(view! { <p class="load-note">"Loading..."</p> }.into_any()),
			LoadState::Error(_) => Some(
				view! { <p class="load-note load-error">"Could not load data"</p> }.into_any(),
			),
			LoadState::Idle | LoadState::Ready(_) => None,
		})
	}
}
