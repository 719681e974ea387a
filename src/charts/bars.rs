//! Category bar charts, vertical and horizontal, configured by a [`BarStyle`].

use crate::selection::Selection;

use super::color::{ORANGE, PLATFORM_PALETTE, Ramp, STEELBLUE};
use super::model::CategoryChart;
use super::scale::{BandScale, LinearScale, SequentialScale};
use super::scene::{Align, Baseline, Label, Margin, Scene, Shape, Size, format_value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
	/// Categories along x, values up.
	Vertical,
	/// Categories down the y axis, values to the right.
	Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarPalette {
	/// Viridis across the bar index.
	Gradient,
	/// Fixed colours cycled by index.
	Cycle(&'static [&'static str]),
	/// The largest bar stands out from the rest.
	HighlightMax { max: &'static str, other: &'static str },
}

impl BarPalette {
	fn color(&self, index: usize, count: usize, value: f64, max: f64) -> String {
		match self {
			BarPalette::Gradient => {
				let scale = SequentialScale::new((0.0, count.saturating_sub(1) as f64), Ramp::Viridis);
				scale.color(index as f64)
			}
			BarPalette::Cycle(colors) => colors[index % colors.len()].to_string(),
			BarPalette::HighlightMax { max: hi, other } => {
				(if value == max { hi } else { other }).to_string()
			}
		}
	}
}

/// How the value axis's upper bound is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DomainRule {
	Max,
	/// Round the maximum up to a multiple of the step.
	CeilTo(f64),
	/// Extend to the next round tick.
	Nice,
}

impl DomainRule {
	fn upper(&self, max: f64, ticks: usize) -> f64 {
		match self {
			DomainRule::Max => max,
			DomainRule::CeilTo(step) => (max / step).ceil() * step,
			DomainRule::Nice => LinearScale::new((0.0, max), (0.0, 1.0)).nice(ticks).domain.1,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarStyle {
	pub title: &'static str,
	pub orientation: Orientation,
	pub margin: Margin,
	pub palette: BarPalette,
	pub domain: DomainRule,
	pub ticks: usize,
	pub tick_suffix: &'static str,
	/// Fixed band thickness; the scene grows to fit instead of squeezing bars.
	pub band: Option<f64>,
	pub padding: f64,
	pub value_labels: bool,
	/// Categories are clickable and toggle the selection.
	pub interactive: bool,
}

impl BarStyle {
	pub fn rating_distribution() -> Self {
		Self {
			title: "Distribution of Ratings",
			orientation: Orientation::Vertical,
			margin: Margin::new(40.0, 20.0, 100.0, 60.0),
			palette: BarPalette::Gradient,
			domain: DomainRule::Max,
			ticks: 10,
			tick_suffix: "%",
			band: None,
			padding: 0.1,
			value_labels: true,
			interactive: false,
		}
	}

	pub fn platform_rating() -> Self {
		Self {
			title: "Platform Rating Distribution",
			margin: Margin::new(70.0, 20.0, 100.0, 60.0),
			domain: DomainRule::CeilTo(10.0),
			ticks: 5,
			tick_suffix: "",
			..Self::rating_distribution()
		}
	}

	pub fn players() -> Self {
		Self {
			title: "Players by Platform",
			orientation: Orientation::Horizontal,
			margin: Margin::new(40.0, 50.0, 50.0, 150.0),
			palette: BarPalette::Cycle(PLATFORM_PALETTE),
			domain: DomainRule::Max,
			ticks: 6,
			tick_suffix: "",
			band: Some(30.0),
			padding: 0.2,
			value_labels: true,
			interactive: true,
		}
	}

	pub fn playtime_comparison() -> Self {
		Self {
			title: "Avg Play Time v.s. Main Story Time",
			orientation: Orientation::Horizontal,
			margin: Margin::new(40.0, 20.0, 40.0, 50.0),
			palette: BarPalette::HighlightMax {
				max: ORANGE,
				other: STEELBLUE,
			},
			domain: DomainRule::Nice,
			ticks: 5,
			tick_suffix: "",
			band: None,
			padding: 0.2,
			value_labels: false,
			interactive: false,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
	pub data: CategoryChart,
	pub style: BarStyle,
	pub selection: Selection,
}

impl BarChart {
	pub fn new(data: CategoryChart, style: BarStyle) -> Self {
		Self {
			data,
			style,
			selection: Selection::new(),
		}
	}

	pub fn with_selection(mut self, selection: Selection) -> Self {
		self.selection = selection;
		self
	}

	/// Height the chart wants at `height`; fixed-band charts size themselves.
	pub fn preferred_height(&self, height: f64) -> f64 {
		match self.style.band {
			Some(band) => self.data.len() as f64 * band + self.style.margin.top + self.style.margin.bottom,
			None => height,
		}
	}

	pub fn scene(&self, size: Size) -> Scene {
		if self.data.is_empty() || !size.is_drawable() {
			return Scene::skipped(size);
		}
		let size = Size::new(size.width, self.preferred_height(size.height));
		let Some(inner) = self.style.margin.inner(size) else {
			return Scene::skipped(size);
		};
		match self.style.orientation {
			Orientation::Vertical => self.vertical(size, inner),
			Orientation::Horizontal => self.horizontal(size, inner),
		}
	}

	fn fill(&self, index: usize, value: f64) -> String {
		self.style.palette.color(index, self.data.len(), value, self.data.max())
	}

	fn vertical(&self, size: Size, inner: Size) -> Scene {
		let style = &self.style;
		let Margin { top, left, .. } = style.margin;
		let mut scene = Scene::new(size);

		let x = BandScale::new(self.data.labels(), (0.0, inner.width), style.padding);
		let y = LinearScale::new((0.0, style.domain.upper(self.data.max(), style.ticks)), (inner.height, 0.0));

		scene.title(style.title, top / 2.0, 18.0);
		scene.band_axis_bottom(&x, left, top + inner.height, style.tick_suffix, true);
		scene.linear_axis_left(&y, left, top, style.ticks);

		for (i, entry) in self.data.entries.iter().enumerate() {
			let bx = left + x.position_at(i);
			let by = top + y.map(entry.value);
			let opacity = self.selection.opacity_for(&entry.label);
			scene.push(Shape::Rect {
				x: bx,
				y: by,
				w: x.bandwidth(),
				h: top + inner.height - by,
				fill: self.fill(i, entry.value),
				stroke: None,
				opacity,
			});
			if style.value_labels {
				scene.text(
					Label::new(bx + x.bandwidth() / 2.0, by - 5.0, format_value(entry.value))
						.bold()
						.align(Align::Middle)
						.opacity(opacity),
				);
			}
			if style.interactive {
				scene.hit(bx, top, x.bandwidth(), size.height - top, entry.label.as_str());
			}
		}
		scene
	}

	fn horizontal(&self, size: Size, inner: Size) -> Scene {
		let style = &self.style;
		let Margin { top, left, .. } = style.margin;
		let mut scene = Scene::new(size);

		let y = BandScale::new(self.data.labels(), (0.0, inner.height), style.padding);
		let x = LinearScale::new((0.0, style.domain.upper(self.data.max(), style.ticks)), (0.0, inner.width));

		scene.title(style.title, top / 2.0, if style.value_labels { 16.0 } else { 14.0 });
		scene.band_axis_left(&y, left, top);
		scene.linear_axis_bottom(&x, left, top + inner.height, style.ticks);

		for (i, entry) in self.data.entries.iter().enumerate() {
			let by = top + y.position_at(i);
			let w = x.map(entry.value);
			let opacity = self.selection.opacity_for(&entry.label);
			scene.push(Shape::Rect {
				x: left,
				y: by,
				w,
				h: y.bandwidth(),
				fill: self.fill(i, entry.value),
				stroke: None,
				opacity,
			});
			if style.value_labels {
				let lx = (left + w + 5.0).min(left + inner.width - 10.0);
				scene.text(
					Label::new(lx, by + y.bandwidth() / 2.0, format_value(entry.value))
						.bold()
						.baseline(Baseline::Middle)
						.opacity(opacity),
				);
			}
			if style.interactive {
				scene.hit(0.0, by, left + inner.width, y.bandwidth(), entry.label.as_str());
			}
		}
		scene
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::charts::model::ZeroPolicy;
	use crate::selection::DIMMED_OPACITY;

	fn rect_opacities(scene: &Scene) -> Vec<f64> {
		scene
			.rects()
			.map(|s| match s {
				Shape::Rect { opacity, .. } => *opacity,
				_ => unreachable!(),
			})
			.collect()
	}

	fn rect_heights(scene: &Scene) -> Vec<f64> {
		scene
			.rects()
			.map(|s| match s {
				Shape::Rect { h, .. } => *h,
				_ => unreachable!(),
			})
			.collect()
	}

	fn players() -> CategoryChart {
		CategoryChart::from_pairs([("PC", 100.0), ("Mac", 0.0)], ZeroPolicy::Keep)
	}

	#[test]
	fn zero_bar_is_drawn_at_full_opacity() {
		let chart = BarChart::new(players(), BarStyle::players());
		let scene = chart.scene(Size::new(600.0, 400.0));
		assert_eq!(rect_opacities(&scene), [1.0, 1.0]);
		let widths: Vec<f64> = scene
			.rects()
			.map(|s| match s {
				Shape::Rect { w, .. } => *w,
				_ => unreachable!(),
			})
			.collect();
		assert!(widths[0] > 0.0);
		assert_eq!(widths[1], 0.0);
	}

	#[test]
	fn unselected_platforms_are_dimmed_not_removed() {
		let mut selection = Selection::new();
		selection.toggle("Mac");
		let chart = BarChart::new(players(), BarStyle::players()).with_selection(selection);
		let scene = chart.scene(Size::new(600.0, 400.0));
		assert_eq!(rect_opacities(&scene), [DIMMED_OPACITY, 1.0]);
	}

	#[test]
	fn clicking_a_platform_row_toggles_it() {
		let chart = BarChart::new(players(), BarStyle::players());
		let scene = chart.scene(Size::new(600.0, 400.0));
		let region = scene.hits.iter().find(|h| h.key == "Mac").unwrap();
		let key = scene.key_at(region.x + 1.0, region.y + 1.0);
		assert_eq!(key, Some("Mac"));
	}

	#[test]
	fn fixed_band_chart_sizes_itself() {
		let chart = BarChart::new(players(), BarStyle::players());
		assert_eq!(chart.preferred_height(999.0), 2.0 * 30.0 + 40.0 + 50.0);
		assert_eq!(chart.scene(Size::new(600.0, 999.0)).size.height, 150.0);
	}

	#[test]
	fn zero_size_or_no_data_draws_nothing() {
		let chart = BarChart::new(players(), BarStyle::rating_distribution());
		assert!(chart.scene(Size::new(0.0, 400.0)).is_empty());
		assert!(chart.scene(Size::new(600.0, 0.0)).is_empty());
		let empty = BarChart::new(CategoryChart::default(), BarStyle::rating_distribution());
		assert!(empty.scene(Size::new(600.0, 400.0)).is_empty());
	}

	#[test]
	fn all_zero_distribution_keeps_flat_bars() {
		let data = CategoryChart::from_pairs([("100", 0.0), ("90", 0.0)], ZeroPolicy::Keep);
		let scene = BarChart::new(data, BarStyle::rating_distribution()).scene(Size::new(500.0, 400.0));
		assert_eq!(rect_heights(&scene), [0.0, 0.0]);
	}

	#[test]
	fn largest_bar_is_highlighted() {
		let data = CategoryChart::from_pairs([("Avg", 12.0), ("Main", 30.0)], ZeroPolicy::Keep);
		let scene = BarChart::new(data, BarStyle::playtime_comparison()).scene(Size::new(400.0, 150.0));
		let fills: Vec<&str> = scene
			.rects()
			.map(|s| match s {
				Shape::Rect { fill, .. } => fill.as_str(),
				_ => unreachable!(),
			})
			.collect();
		assert_eq!(fills, [STEELBLUE, ORANGE]);
	}

	#[test]
	fn platform_axis_rounds_up_to_ten() {
		assert_eq!(DomainRule::CeilTo(10.0).upper(83.0, 5), 90.0);
		assert_eq!(DomainRule::Nice.upper(27.0, 5), 30.0);
	}

	#[test]
	fn rating_ticks_carry_percent_suffix() {
		let data = CategoryChart::from_pairs([("100", 3.0), ("90", 1.0)], ZeroPolicy::Keep);
		let scene = BarChart::new(data, BarStyle::rating_distribution()).scene(Size::new(500.0, 400.0));
		assert!(scene.labels().any(|l| l.text == "100%"));
		assert!(scene.labels().any(|l| l.text == "Distribution of Ratings"));
	}
}
