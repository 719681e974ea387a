//! Platform × playtime-metric matrix.
//!
//! The fastest/slowest columns are presence markers with fixed colours. The other
//! metrics share one clamped sequential scale whose domain is the [5th, 95th]
//! percentile of their pooled values.

use crate::data::PlaytimeByPlatform;
use crate::selection::{DIMMED_OPACITY, Selection};

use super::color::{EMPTY_CELL, Ramp};
use super::scale::{BandScale, SequentialScale, percentile_domain};
use super::scene::{Align, Baseline, Label, Margin, Scene, Shape, Size, format_value};

const MARGIN: Margin = Margin::new(40.0, 20.0, 80.0, 100.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaytimeMetric {
	MainStory,
	MainSides,
	Completionist,
	Fastest,
	Slowest,
}

impl PlaytimeMetric {
	pub const ALL: [PlaytimeMetric; 5] = [
		PlaytimeMetric::MainStory,
		PlaytimeMetric::MainSides,
		PlaytimeMetric::Completionist,
		PlaytimeMetric::Fastest,
		PlaytimeMetric::Slowest,
	];

	pub fn label(self) -> &'static str {
		match self {
			PlaytimeMetric::MainStory => "Main Story",
			PlaytimeMetric::MainSides => "Main + Sides",
			PlaytimeMetric::Completionist => "Completionist",
			PlaytimeMetric::Fastest => "Fastest",
			PlaytimeMetric::Slowest => "Slowest",
		}
	}

	/// Fixed colour for marker metrics; `None` for metrics on the shared scale.
	pub fn marker_color(self) -> Option<&'static str> {
		match self {
			PlaytimeMetric::Fastest => Some("#FFFF00"),
			PlaytimeMetric::Slowest => Some("#FF0000"),
			_ => None,
		}
	}

	pub fn value(self, row: &PlaytimeByPlatform) -> f64 {
		match self {
			PlaytimeMetric::MainStory => row.main_story,
			PlaytimeMetric::MainSides => row.main_sides,
			PlaytimeMetric::Completionist => row.completionist,
			PlaytimeMetric::Fastest => row.fastest,
			PlaytimeMetric::Slowest => row.slowest,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum CellFill {
	/// Position along the shared ramp, in [0, 1].
	Scaled(f64),
	/// A marker metric with a non-zero value.
	Marker(&'static str),
	/// A marker metric that is absent (0).
	Absent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatCell {
	pub value: f64,
	pub fill: CellFill,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapRow {
	pub platform: String,
	pub cells: Vec<HeatCell>,
	/// Full opacity when the platform passes the selection filter.
	pub selected: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Heatmap {
	pub rows: Vec<HeatmapRow>,
	pub domain: Option<(f64, f64)>,
	pub ramp: Option<Ramp>,
}

impl Heatmap {
	pub fn metrics(&self) -> [PlaytimeMetric; 5] {
		PlaytimeMetric::ALL
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn build<'a>(rows: impl IntoIterator<Item = &'a PlaytimeByPlatform>, selection: &Selection) -> Self {
		let rows: Vec<&PlaytimeByPlatform> = rows.into_iter().collect();
		let domain = percentile_domain(rows.iter().flat_map(|r| {
			PlaytimeMetric::ALL
				.into_iter()
				.filter(|m| m.marker_color().is_none())
				.map(move |m| m.value(r))
		}));
		let scale = domain.map(|d| SequentialScale::new(d, Ramp::Blues).clamped());

		let rows = rows
			.iter()
			.map(|r| HeatmapRow {
				platform: r.platform.clone(),
				selected: selection.admits(&r.platform),
				cells: PlaytimeMetric::ALL
					.into_iter()
					.map(|m| {
						let value = m.value(r);
						let fill = match (m.marker_color(), &scale) {
							(Some(color), _) if value > 0.0 => CellFill::Marker(color),
							(Some(_), _) => CellFill::Absent,
							(None, Some(scale)) => CellFill::Scaled(scale.normalize(value)),
							(None, None) => CellFill::Scaled(0.5),
						};
						HeatCell { value, fill }
					})
					.collect(),
			})
			.collect();

		Self {
			rows,
			domain,
			ramp: scale.map(|s| s.ramp),
		}
	}
}

impl Heatmap {
	/// Draw the matrix; platform rows outside the selection fade but keep their place.
	pub fn scene(&self, size: Size) -> Scene {
		if self.is_empty() {
			return Scene::skipped(size);
		}
		let Some(inner) = MARGIN.inner(size) else {
			return Scene::skipped(size);
		};
		let mut scene = Scene::new(size);
		let metrics: Vec<String> = self.metrics().iter().map(|m| m.label().to_string()).collect();
		let platforms: Vec<String> = self.rows.iter().map(|r| r.platform.clone()).collect();
		let x = BandScale::new(metrics, (0.0, inner.width), 0.05);
		let y = BandScale::new(platforms, (0.0, inner.height), 0.05);
		let ramp = self.ramp.unwrap_or(Ramp::Blues);

		scene.title("Platform Playtime Heat Map", MARGIN.top - 10.0, 16.0);
		scene.band_axis_bottom(&x, MARGIN.left, MARGIN.top + inner.height, "", true);
		scene.band_axis_left(&y, MARGIN.left, MARGIN.top);

		for (ri, row) in self.rows.iter().enumerate() {
			let ry = MARGIN.top + y.position_at(ri);
			let opacity = if row.selected { 1.0 } else { DIMMED_OPACITY };
			for (ci, cell) in row.cells.iter().enumerate() {
				let cx = MARGIN.left + x.position_at(ci);
				let fill = match cell.fill {
					CellFill::Scaled(t) => ramp.at(t),
					CellFill::Marker(color) => color.to_string(),
					CellFill::Absent => EMPTY_CELL.to_string(),
				};
				scene.push(Shape::Rect {
					x: cx,
					y: ry,
					w: x.bandwidth(),
					h: y.bandwidth(),
					fill,
					stroke: Some(EMPTY_CELL.to_string()),
					opacity,
				});
				scene.text(
					Label::new(cx + x.bandwidth() / 2.0, ry + y.bandwidth() / 2.0, format_value(cell.value))
						.color("black")
						.bold()
						.align(Align::Middle)
						.baseline(Baseline::Middle)
						.opacity(opacity),
				);
			}
			scene.hit(0.0, ry, MARGIN.left + inner.width, y.bandwidth(), row.platform.as_str());
		}
		scene
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(platform: &str, main: f64, sides: f64, comp: f64, fastest: f64, slowest: f64) -> PlaytimeByPlatform {
		PlaytimeByPlatform {
			title: "X".into(),
			platform: platform.into(),
			main_story: main,
			main_sides: sides,
			completionist: comp,
			fastest,
			slowest,
		}
	}

	#[test]
	fn markers_are_outside_the_shared_scale() {
		let rows = [row("PC", 10.0, 20.0, 30.0, 900.0, 0.0)];
		let map = Heatmap::build(&rows, &Selection::new());
		assert_eq!(map.domain, Some((10.0, 30.0)));
		let cells = &map.rows[0].cells;
		assert_eq!(cells[0].fill, CellFill::Scaled(0.0));
		assert_eq!(cells[2].fill, CellFill::Scaled(1.0));
		assert_eq!(cells[3].fill, CellFill::Marker("#FFFF00"));
		assert_eq!(cells[4].fill, CellFill::Absent);
	}

	#[test]
	fn outliers_are_clamped() {
		let mut rows: Vec<_> = (0..20)
			.map(|i| row(&format!("P{i}"), 10.0 + i as f64, 12.0 + i as f64, 15.0 + i as f64, 0.0, 0.0))
			.collect();
		rows.push(row("Outlier", 10_000.0, 10_000.0, 10_000.0, 0.0, 0.0));
		let map = Heatmap::build(&rows, &Selection::new());
		let (lo, hi) = map.domain.unwrap();
		assert!(hi < 10_000.0);
		for r in &map.rows {
			for c in &r.cells {
				if let CellFill::Scaled(t) = c.fill {
					assert!((0.0..=1.0).contains(&t));
				}
			}
		}
		let last = map.rows.last().unwrap();
		assert_eq!(last.cells[0].fill, CellFill::Scaled(1.0));
		assert!(lo >= 10.0);
	}

	#[test]
	fn selection_marks_rows_without_hiding_them() {
		let rows = [row("PC", 1.0, 2.0, 3.0, 0.0, 0.0), row("Mac", 1.0, 2.0, 3.0, 0.0, 0.0)];
		let mut selection = Selection::new();
		selection.toggle("Mac");
		let map = Heatmap::build(&rows, &selection);
		assert_eq!(map.rows.len(), 2);
		assert!(!map.rows[0].selected);
		assert!(map.rows[1].selected);
	}

	#[test]
	fn scene_dims_unselected_rows_and_toggles_on_click() {
		let rows = [row("PC", 1.0, 2.0, 3.0, 1.0, 0.0), row("Mac", 4.0, 5.0, 6.0, 0.0, 2.0)];
		let mut selection = Selection::new();
		selection.toggle("PC");
		let scene = Heatmap::build(&rows, &selection).scene(Size::new(600.0, 400.0));

		let opacities: Vec<f64> = scene
			.rects()
			.map(|s| match s {
				Shape::Rect { opacity, .. } => *opacity,
				_ => unreachable!(),
			})
			.collect();
		assert_eq!(opacities.len(), 10);
		assert!(opacities[..5].iter().all(|o| *o == 1.0));
		assert!(opacities[5..].iter().all(|o| *o == DIMMED_OPACITY));

		let mac = scene.hits.iter().find(|h| h.key == "Mac").unwrap();
		assert_eq!(scene.key_at(mac.x + 1.0, mac.y + 1.0), Some("Mac"));
		assert!(Heatmap::default().scene(Size::new(600.0, 400.0)).is_empty());
	}

	#[test]
	fn no_rows_is_empty() {
		let map = Heatmap::build(&[], &Selection::new());
		assert!(map.is_empty());
		assert_eq!(map.domain, None);
	}
}
