use leptos::prelude::*;

use super::{LoadNote, use_game_opener};
use crate::charts::model;
use crate::charts::scene::format_value;
use crate::charts::{BarChart, BarStyle, ChartView, ScatterChart};
use crate::components::ChartCanvas;
use crate::config::DashboardConfig;
use crate::controller::{DatasetController, use_dataset, use_records};
use crate::data::{Dataset, YearlyGameSummary};
use crate::selection::SelectionDelta;

const OVERVIEW_KEY: &str = "overview";
const COMPARISON_HEIGHT: f64 = 120.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
	#[default]
	Backlogged,
	Completed,
	Rated,
	Retired,
}

impl Category {
	pub const ALL: [Category; 4] = [
		Category::Backlogged,
		Category::Completed,
		Category::Rated,
		Category::Retired,
	];

	pub fn dataset(self) -> Dataset {
		match self {
			Category::Backlogged => Dataset::Backlogged,
			Category::Completed => Dataset::Completed,
			Category::Rated => Dataset::Rated,
			Category::Retired => Dataset::Retired,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Category::Backlogged => "Backlogged",
			Category::Completed => "Completed",
			Category::Rated => "Rated",
			Category::Retired => "Retired",
		}
	}

	fn index(self) -> usize {
		self as usize
	}
}

/// Per-year category lists and the playtime scatter of the main category.
#[component]
pub fn Overview() -> impl IntoView {
	let config = use_context::<DashboardConfig>().unwrap_or_default();
	let controllers = Category::ALL.map(|c| use_dataset(c.dataset(), || OVERVIEW_KEY.to_string()));
	let records: [Memo<Vec<YearlyGameSummary>>; 4] = controllers.map(use_records);

	// The year list follows the Backlogged file.
	let years = Memo::new(move |_| records[Category::Backlogged.index()].with(|r| model::years(r)));
	let picked_year = RwSignal::new(None::<String>);
	let year = Memo::new(move |_| {
		picked_year
			.get()
			.or_else(|| years.with(|y| y.first().cloned()))
			.unwrap_or_default()
	});
	let main = RwSignal::new(Category::default());
	let open = use_game_opener();

	let scatter = Signal::derive(move || {
		let games = records[main.get().index()];
		games.with(|r| {
			year.with(|y| {
				let points = model::playtime_scatter(model::leaderboard(r, y, None));
				ChartView::from(ScatterChart::playtime(points))
			})
		})
	});
	let on_point = Callback::new(move |delta: SelectionDelta| {
		if let SelectionDelta::Toggle(title) = delta {
			open.set(Some(title));
		}
	});

	view! {
		<div class="overview">
			<header class="overview-header">
				<h1>"Game Statistics"</h1>
				<label class="year-select">
					"Year "
					<select on:change=move |ev| picked_year.set(Some(event_target_value(&ev)))>
						<For
							each=move || years.get()
							key=|y| y.clone()
							children=move |y| {
								let label = y.clone();
								let value = label.clone();
								let selected = move || year.with(|current| *current == y);
								view! {
									<option value=value selected=selected>
										{label}
									</option>
								}
							}
						/>
					</select>
				</label>
			</header>
			<div class="category-panels">
				{Category::ALL
					.into_iter()
					.map(|category| {
						view! {
							<CategoryPanel
								category=category
								controller=controllers[category.index()]
								records=records[category.index()]
								year=year
								main=main
								open=open
								preview_rows=config.preview_rows
							/>
						}
					})
					.collect_view()}
			</div>
			<section class="scatter-panel">
				<h2>{move || format!("{} games: Average Playing vs Main Story", main.get().label())}</h2>
				<ChartCanvas chart=scatter height=config.chart_height on_select=on_point />
			</section>
		</div>
	}
}

#[component]
fn CategoryPanel(
	category: Category,
	controller: DatasetController,
	records: Memo<Vec<YearlyGameSummary>>,
	year: Memo<String>,
	main: RwSignal<Category>,
	open: RwSignal<Option<String>>,
	preview_rows: usize,
) -> impl IntoView {
	let is_main = move || main.get() == category;
	let rows = move || {
		let top = (!is_main()).then_some(preview_rows);
		records.with(|r| {
			year.with(|y| {
				model::leaderboard(r, y, top)
					.into_iter()
					.cloned()
					.collect::<Vec<_>>()
			})
		})
	};

	view! {
		<section class=move || if is_main() { "category-panel main" } else { "category-panel" }>
			<h2 class="category-title" on:click=move |_| main.set(category)>
				{category.label()}
			</h2>
			<LoadNote controller=controller />
			{move || {
				let expanded = is_main();
				rows()
					.into_iter()
					.map(|game| view! { <GameRow game=game expanded=expanded open=open /> })
					.collect_view()
			}}
		</section>
	}
}

#[component]
fn GameRow(game: YearlyGameSummary, expanded: bool, open: RwSignal<Option<String>>) -> impl IntoView {
	let title = game.title.clone();
	let details = expanded.then(|| {
		let comparison = ChartView::from(BarChart::new(
			model::playtime_comparison(&game),
			BarStyle::playtime_comparison(),
		));
		let chart = Signal::derive(move || comparison.clone());
		view! {
			<ChartCanvas chart=chart height=COMPARISON_HEIGHT />
			<span class="logged">{format!("Logged: {}", format_value(game.logged))}</span>
		}
	});

	view! {
		<div class="game-row">
			<button class="game-title" on:click=move |_| open.set(Some(title.clone()))>
				{game.title.clone()}
			</button>
			{details}
		</div>
	}
}
