//! Donut rendering of a [`ProportionPie`].

use std::f64::consts::TAU;

use super::color::EMPTY_CELL;
use super::model::ProportionPie;
use super::scene::{Align, Baseline, Label, Margin, Scene, Shape, Size};

const MARGIN: Margin = Margin::new(20.0, 20.0, 20.0, 20.0);
const RING: f64 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct DonutChart {
	pub pie: ProportionPie,
	pub caption: &'static str,
	pub color: &'static str,
}

impl DonutChart {
	pub fn average_rating(pie: ProportionPie) -> Self {
		Self {
			pie,
			caption: "Rating",
			color: "#3b82f6",
		}
	}

	pub fn retirement(pie: ProportionPie) -> Self {
		Self {
			pie,
			caption: "Retirement",
			color: "#10b981",
		}
	}

	pub fn scene(&self, size: Size) -> Scene {
		let Some(inner) = MARGIN.inner(size) else {
			return Scene::skipped(size);
		};
		let mut scene = Scene::new(size);
		let outer = inner.width.min(inner.height) / 2.0;
		let (cx, cy) = (MARGIN.left + inner.width / 2.0, MARGIN.top + inner.height / 2.0);

		let mut start = 0.0;
		for (i, share) in self.pie.slices().into_iter().enumerate() {
			let end = start + TAU * share / 100.0;
			if end > start {
				scene.push(Shape::Arc {
					cx,
					cy,
					inner: (outer - RING).max(0.0),
					outer,
					start,
					end,
					fill: if i == 0 { self.color } else { EMPTY_CELL }.to_string(),
				});
			}
			start = end;
		}

		scene.text(
			Label::new(cx, cy, self.pie.label())
				.size(18.0)
				.bold()
				.align(Align::Middle)
				.baseline(Baseline::Middle),
		);
		scene.text(
			Label::new(cx, cy + 30.0, self.caption)
				.size(14.0)
				.bold()
				.align(Align::Middle),
		);
		scene
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn arcs(scene: &Scene) -> Vec<(f64, f64, String)> {
		scene
			.shapes
			.iter()
			.filter_map(|s| match s {
				Shape::Arc { start, end, fill, .. } => Some((*start, *end, fill.clone())),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn slices_cover_the_full_turn() {
		let chart = DonutChart::average_rating(ProportionPie::new(82.0));
		let scene = chart.scene(Size::new(300.0, 300.0));
		let arcs = arcs(&scene);
		assert_eq!(arcs.len(), 2);
		assert_eq!(arcs[0].0, 0.0);
		assert!((arcs[0].1 - TAU * 0.82).abs() < 1e-12);
		assert!((arcs[1].1 - TAU).abs() < 1e-12);
		assert_eq!(arcs[0].2, "#3b82f6");
		assert_eq!(arcs[1].2, EMPTY_CELL);
		assert!(scene.labels().any(|l| l.text == "82%"));
	}

	#[test]
	fn full_share_has_no_remainder_slice() {
		let scene = DonutChart::retirement(ProportionPie::new(100.0)).scene(Size::new(300.0, 300.0));
		assert_eq!(arcs(&scene).len(), 1);
	}

	#[test]
	fn skipped_without_room() {
		let chart = DonutChart::retirement(ProportionPie::new(15.0));
		assert!(chart.scene(Size::new(0.0, 0.0)).is_empty());
		assert!(chart.scene(Size::new(40.0, 300.0)).is_empty());
	}
}
