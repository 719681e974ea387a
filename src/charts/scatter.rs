//! Point cloud of per-game playtimes.

use super::color::{STEELBLUE, TEXT};
use super::model::ScatterPoint;
use super::scale::LinearScale;
use super::scene::{Align, Label, Margin, Scene, Shape, Size};

const MARGIN: Margin = Margin::new(30.0, 20.0, 40.0, 50.0);
const POINT_RADIUS: f64 = 5.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatterChart {
	pub points: Vec<ScatterPoint>,
	pub x_label: &'static str,
	pub y_label: &'static str,
}

impl ScatterChart {
	pub fn playtime(points: Vec<ScatterPoint>) -> Self {
		Self {
			points,
			x_label: "Average Playing",
			y_label: "Main Story",
		}
	}

	/// Clicking a point yields its label as the hit key.
	pub fn scene(&self, size: Size) -> Scene {
		if self.points.is_empty() {
			return Scene::skipped(size);
		}
		let Some(inner) = MARGIN.inner(size) else {
			return Scene::skipped(size);
		};
		let mut scene = Scene::new(size);
		let max_x = self.points.iter().map(|p| p.x).fold(0.0, f64::max);
		let max_y = self.points.iter().map(|p| p.y).fold(0.0, f64::max);
		let x = LinearScale::new((0.0, max_x), (0.0, inner.width));
		let y = LinearScale::new((0.0, max_y), (inner.height, 0.0));

		scene.linear_axis_bottom(&x, MARGIN.left, MARGIN.top + inner.height, 8);
		scene.linear_axis_left(&y, MARGIN.left, MARGIN.top, 6);
		scene.text(Label::new(MARGIN.left + inner.width, size.height - 4.0, self.x_label).align(Align::End));
		scene.text(Label::new(MARGIN.left, MARGIN.top - 10.0, self.y_label).align(Align::Middle));

		for p in &self.points {
			let (cx, cy) = (MARGIN.left + x.map(p.x), MARGIN.top + y.map(p.y));
			scene.push(Shape::Circle {
				cx,
				cy,
				r: POINT_RADIUS,
				fill: STEELBLUE.to_string(),
				stroke: Some(TEXT.to_string()),
				opacity: 1.0,
			});
			let r = POINT_RADIUS + 2.0;
			scene.hit(cx - r, cy - r, 2.0 * r, 2.0 * r, p.label.as_str());
		}
		scene
	}
}
