//! From typed records to drawable scenes.
//!
//! View models live in [`model`] and [`heatmap`]; each chart type turns its view
//! model plus a size into a [`Scene`]. [`ChartView`] is the closed set of charts a
//! [`ChartCanvas`](crate::components::ChartCanvas) can host.

pub mod bars;
pub mod color;
pub mod heatmap;
pub mod model;
pub mod pie;
pub mod scale;
pub mod scatter;
pub mod scene;

pub use bars::{BarChart, BarStyle};
pub use heatmap::Heatmap;
pub use pie::DonutChart;
pub use scatter::ScatterChart;
pub use scene::{Scene, Size};

#[derive(Clone, Debug, PartialEq)]
pub enum ChartView {
	Bars(BarChart),
	Donut(DonutChart),
	Heatmap(Heatmap),
	Scatter(ScatterChart),
	/// Nothing loaded or nothing matched.
	Empty,
}

impl ChartView {
	pub fn scene(&self, size: Size) -> Scene {
		if !size.is_drawable() {
			return Scene::skipped(size);
		}
		match self {
			ChartView::Bars(chart) => chart.scene(size),
			ChartView::Donut(chart) => chart.scene(size),
			ChartView::Heatmap(chart) => chart.scene(size),
			ChartView::Scatter(chart) => chart.scene(size),
			ChartView::Empty => Scene::skipped(size),
		}
	}
}

impl From<BarChart> for ChartView {
	fn from(chart: BarChart) -> Self {
		ChartView::Bars(chart)
	}
}

impl From<DonutChart> for ChartView {
	fn from(chart: DonutChart) -> Self {
		ChartView::Donut(chart)
	}
}

impl From<Heatmap> for ChartView {
	fn from(chart: Heatmap) -> Self {
		ChartView::Heatmap(chart)
	}
}

impl From<ScatterChart> for ChartView {
	fn from(chart: ScatterChart) -> Self {
		ChartView::Scatter(chart)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::charts::model::{CategoryChart, ZeroPolicy};

	#[test]
	fn nothing_is_drawn_before_size_is_known() {
		let data = CategoryChart::from_pairs([("PC", 1.0)], ZeroPolicy::Keep);
		let view: ChartView = BarChart::new(data, BarStyle::players()).into();
		assert!(view.scene(Size::default()).is_empty());
		assert!(!view.scene(Size::new(600.0, 300.0)).is_empty());
		assert!(ChartView::Empty.scene(Size::new(600.0, 300.0)).is_empty());
	}
}
