use leptos::prelude::*;

use crate::selection::Selection;

pub const SELECTED_SWATCH: &str = "yellow";
pub const GENRE_SWATCH: &str = "#ff7f0e";

/// Clickable genre swatches sharing one [`Selection`] with the network graph.
#[component]
pub fn GenreLegend(
	#[prop(into)] genres: Signal<Vec<String>>,
	selection: RwSignal<Selection>,
) -> impl IntoView {
	view! {
		<div class="genre-legend">
			<For
				each=move || genres.get()
				key=|genre| genre.clone()
				children=move |genre| {
					let key = genre.clone();
					let swatch = {
						let key = key.clone();
						move || {
							let color = if selection.with(|s| s.contains(&key)) {
								SELECTED_SWATCH
							} else {
								GENRE_SWATCH
							};
							format!("background-color: {color};")
						}
					};
					view! {
						<button
							class="legend-entry"
							on:click=move |_| selection.update(|s| s.toggle(&key))
						>
							<span class="legend-swatch" style=swatch></span>
							<span class="legend-label">{genre}</span>
						</button>
					}
				}
			/>
		</div>
	}
}
