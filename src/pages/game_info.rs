use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use log::warn;
use wasm_bindgen::JsValue;

use super::LoadNote;
use crate::charts::model;
use crate::charts::{BarChart, BarStyle, ChartView, DonutChart, Heatmap};
use crate::components::force_graph::GraphData;
use crate::components::{ChartCanvas, ForceGraphCanvas, GenreLegend};
use crate::config::DashboardConfig;
use crate::controller::{DatasetController, use_dataset, use_records};
use crate::data::{
	Dataset, GameInfo as GameDetails, GenreEdge, PlatformRating, PlayersByPlatform,
	PlaytimeByPlatform, RatingDistribution, RatingRetirement, filter_by_title, find_by_title,
};
use crate::selection::{Selection, SelectionDelta};

const PIE_HEIGHT: f64 = 220.0;

/// Which pair of chart groups the detail page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Combination {
	#[default]
	RatingRetirement,
	PlaytimePlayers,
}

impl Combination {
	pub const ALL: [Combination; 2] = [Combination::RatingRetirement, Combination::PlaytimePlayers];

	pub fn label(self) -> &'static str {
		match self {
			Combination::RatingRetirement => "Rating & Retirement Analysis",
			Combination::PlaytimePlayers => "Platform Playtime & Players",
		}
	}

	fn value(self) -> &'static str {
		match self {
			Combination::RatingRetirement => "combination1",
			Combination::PlaytimePlayers => "combination2",
		}
	}

	fn from_value(value: &str) -> Self {
		Self::ALL
			.into_iter()
			.find(|c| c.value() == value)
			.unwrap_or_default()
	}
}

fn history_back() {
	let back = web_sys::window()
		.ok_or_else(|| JsValue::from_str("no window"))
		.and_then(|w| w.history())
		.and_then(|h| h.back());
	if let Err(e) = back {
		warn!("could not go back: {e:?}");
	}
}

/// Detail view for the game named in the route.
#[component]
pub fn GameInfo() -> impl IntoView {
	let config = use_context::<DashboardConfig>().unwrap_or_default();
	let params = use_params_map();
	// Path params arrive percent-decoded.
	let title = Memo::new(move |_| params.with(|p| p.get("game_name").unwrap_or_default()));

	let games_info = use_dataset(Dataset::GamesInfo, move || title.get());
	let games_platform = use_dataset(Dataset::GamesPlatform, move || title.get());
	let genres_games = use_dataset(Dataset::GenresGames, move || title.get());
	let combination = RwSignal::new(Combination::default());

	view! {
		<Title text=move || title.get() />
		<div class="game-info">
			<button class="back-button" on:click=move |_| history_back()>
				"Back to Game Selection"
			</button>
			<div class="game-info-columns">
				<TextInfo title=title controller=games_info />
				<div class="game-info-charts">
					<select
						class="combination-select"
						on:change=move |ev| combination.set(Combination::from_value(&event_target_value(&ev)))
					>
						{Combination::ALL
							.into_iter()
							.map(|c| {
								view! {
									<option value=c.value() selected=move || combination.get() == c>
										{c.label()}
									</option>
								}
							})
							.collect_view()}
					</select>
					{move || match combination.get() {
						Combination::RatingRetirement => {
							view! {
								<RatingRetirementCharts
									title=title
									controller=games_info
									height=config.chart_height
								/>
							}
								.into_any()
						}
						Combination::PlaytimePlayers => {
							view! {
								<PlaytimePlayersCharts
									title=title
									controller=games_platform
									height=config.chart_height
								/>
							}
								.into_any()
						}
					}}
				</div>
			</div>
			<GenreNetwork title=title controller=genres_games height=config.graph_height />
		</div>
	}
}

#[component]
fn TextInfo(title: Memo<String>, controller: DatasetController) -> impl IntoView {
	let games = use_records::<GameDetails>(controller);
	let game = Memo::new(move |_| games.with(|g| title.with(|t| find_by_title(g, t).cloned())));

	view! {
		<div class="text-info">
			<LoadNote controller=controller />
			{move || {
				let loaded = controller.with(|c| c.ready().is_some());
				match game.get() {
					Some(game) => {
						let cover = (!game.image_url.is_empty())
							.then(|| {
								let alt = format!("{} cover", game.title);
								view! { <img class="cover" src=game.image_url.clone() alt=alt /> }
							});
						view! {
							{cover}
							<h2>{game.title.clone()}</h2>
							<p><strong>"Introduction: "</strong>{game.introduction.clone()}</p>
							<p><strong>"Genres: "</strong>{game.genres.clone()}</p>
							<p><strong>"Developer: "</strong>{game.developer.clone()}</p>
							<p><strong>"Publisher: "</strong>{game.publisher.clone()}</p>
							<p><strong>"Platforms: "</strong>{game.platforms.clone()}</p>
						}
							.into_any()
					}
					None if loaded => {
						view! { <p class="load-note">{format!("No details for {}", title.get())}</p> }
							.into_any()
					}
					None => ().into_any(),
				}
			}}
		</div>
	}
}

#[component]
fn RatingRetirementCharts(title: Memo<String>, controller: DatasetController, height: f64) -> impl IntoView {
	let ratings = use_records::<RatingRetirement>(controller);
	let distributions = use_records::<RatingDistribution>(controller);
	let platforms = use_records::<PlatformRating>(controller);

	let pies = Memo::new(move |_| {
		ratings.with(|r| title.with(|t| model::rating_retirement_pies(find_by_title(r, t))))
	});
	let rating_pie = Signal::derive(move || {
		pies.get()
			.map(|(rating, _)| DonutChart::average_rating(rating).into())
			.unwrap_or(ChartView::Empty)
	});
	let retirement_pie = Signal::derive(move || {
		pies.get()
			.map(|(_, retirement)| DonutChart::retirement(retirement).into())
			.unwrap_or(ChartView::Empty)
	});
	let distribution = Signal::derive(move || {
		distributions.with(|r| {
			title.with(|t| {
				let data = model::rating_distribution(find_by_title(r, t));
				ChartView::from(BarChart::new(data, BarStyle::rating_distribution()))
			})
		})
	});
	let platform_rating = Signal::derive(move || {
		platforms.with(|r| {
			title.with(|t| {
				let data = model::platform_rating(find_by_title(r, t));
				ChartView::from(BarChart::new(data, BarStyle::platform_rating()))
			})
		})
	});

	view! {
		<div class="combination">
			<div class="pie-row">
				<div class="pie"><ChartCanvas chart=rating_pie height=PIE_HEIGHT /></div>
				<div class="pie"><ChartCanvas chart=retirement_pie height=PIE_HEIGHT /></div>
			</div>
			<ChartCanvas chart=distribution height=height />
			<ChartCanvas chart=platform_rating height=height />
		</div>
	}
}

/// Heatmap and players chart share one platform selection.
#[component]
fn PlaytimePlayersCharts(title: Memo<String>, controller: DatasetController, height: f64) -> impl IntoView {
	let playtime = use_records::<PlaytimeByPlatform>(controller);
	let players = use_records::<PlayersByPlatform>(controller);
	let platforms = RwSignal::new(Selection::new());
	Effect::new(move |_| {
		title.track();
		platforms.set(Selection::new());
	});

	let heatmap = Signal::derive(move || {
		playtime.with(|r| {
			title.with(|t| platforms.with(|s| ChartView::from(Heatmap::build(filter_by_title(r, t), s))))
		})
	});
	let players_chart = Signal::derive(move || {
		players.with(|r| {
			title.with(|t| {
				let data = model::players_by_platform(filter_by_title(r, t));
				ChartView::from(BarChart::new(data, BarStyle::players()).with_selection(platforms.get()))
			})
		})
	});
	let on_select = Callback::new(move |delta: SelectionDelta| platforms.update(|s| s.apply(delta)));

	view! {
		<div class="combination">
			<LoadNote controller=controller />
			<ChartCanvas chart=heatmap height=height on_select=on_select />
			<ChartCanvas chart=players_chart height=height on_select=on_select />
		</div>
	}
}

#[component]
fn GenreNetwork(title: Memo<String>, controller: DatasetController, height: f64) -> impl IntoView {
	let edges = use_records::<GenreEdge>(controller);
	let graph = Memo::new(move |_| edges.with(|e| title.with(|t| GraphData::build(e, t))));
	let genres = RwSignal::new(Selection::new());
	Effect::new(move |_| {
		title.track();
		genres.set(Selection::new());
	});

	let legend = Signal::derive(move || graph.with(GraphData::genres));
	let highlight = Signal::derive(move || graph.with(|g| genres.with(|s| g.highlight(s))));

	view! {
		<section class="network">
			<LoadNote controller=controller />
			<ForceGraphCanvas data=graph highlight=highlight height=height />
			<GenreLegend genres=legend selection=genres />
		</section>
	}
}
