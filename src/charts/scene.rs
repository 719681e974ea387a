//! Retained description of one chart's drawing, independent of the canvas API.
//!
//! A [`Scene`] is rebuilt from scratch for every render; painting it always
//! starts from a cleared surface, so nothing from a previous frame survives.

use crate::selection::SelectionDelta;

use super::color::{AXIS, TEXT};
use super::scale::{BandScale, LinearScale};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Both dimensions known and non-zero.
	pub fn is_drawable(&self) -> bool {
		self.width > 0.0 && self.height > 0.0
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
	pub left: f64,
}

impl Margin {
	pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
		Self { top, right, bottom, left }
	}

	/// Inner plotting area, `None` when the margins leave no room.
	pub fn inner(&self, size: Size) -> Option<Size> {
		let inner = Size::new(size.width - self.left - self.right, size.height - self.top - self.bottom);
		inner.is_drawable().then_some(inner)
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
	#[default]
	Start,
	Middle,
	End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Baseline {
	#[default]
	Alphabetic,
	Middle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
	pub x: f64,
	pub y: f64,
	pub text: String,
	pub color: String,
	pub size: f64,
	pub bold: bool,
	pub align: Align,
	pub baseline: Baseline,
	/// Clockwise rotation in radians around `(x, y)`.
	pub rotate: f64,
	pub opacity: f64,
}

impl Label {
	pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
		Self {
			x,
			y,
			text: text.into(),
			color: TEXT.to_string(),
			size: 12.0,
			bold: false,
			align: Align::Start,
			baseline: Baseline::Alphabetic,
			rotate: 0.0,
			opacity: 1.0,
		}
	}

	pub fn size(mut self, size: f64) -> Self {
		self.size = size;
		self
	}

	pub fn bold(mut self) -> Self {
		self.bold = true;
		self
	}

	pub fn color(mut self, color: impl Into<String>) -> Self {
		self.color = color.into();
		self
	}

	pub fn align(mut self, align: Align) -> Self {
		self.align = align;
		self
	}

	pub fn baseline(mut self, baseline: Baseline) -> Self {
		self.baseline = baseline;
		self
	}

	pub fn rotate(mut self, radians: f64) -> Self {
		self.rotate = radians;
		self
	}

	pub fn opacity(mut self, opacity: f64) -> Self {
		self.opacity = opacity;
		self
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
	Rect {
		x: f64,
		y: f64,
		w: f64,
		h: f64,
		fill: String,
		stroke: Option<String>,
		opacity: f64,
	},
	/// Annular sector; angles in radians, clockwise from twelve o'clock.
	Arc {
		cx: f64,
		cy: f64,
		inner: f64,
		outer: f64,
		start: f64,
		end: f64,
		fill: String,
	},
	Circle {
		cx: f64,
		cy: f64,
		r: f64,
		fill: String,
		stroke: Option<String>,
		opacity: f64,
	},
	Line {
		x1: f64,
		y1: f64,
		x2: f64,
		y2: f64,
		stroke: String,
		width: f64,
	},
	Text(Label),
}

/// A clickable area that toggles `key` in the owner's selection.
#[derive(Clone, Debug, PartialEq)]
pub struct HitRegion {
	pub x: f64,
	pub y: f64,
	pub w: f64,
	pub h: f64,
	pub key: String,
}

impl HitRegion {
	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	pub size: Size,
	pub shapes: Vec<Shape>,
	pub hits: Vec<HitRegion>,
}

impl Scene {
	pub fn new(size: Size) -> Self {
		Self {
			size,
			shapes: Vec::new(),
			hits: Vec::new(),
		}
	}

	/// Nothing to draw: zero size or an empty view model.
	pub fn skipped(size: Size) -> Self {
		Self::new(size)
	}

	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.shapes.is_empty()
	}

	pub fn push(&mut self, shape: Shape) {
		self.shapes.push(shape);
	}

	pub fn text(&mut self, label: Label) {
		self.shapes.push(Shape::Text(label));
	}

	pub fn hit(&mut self, x: f64, y: f64, w: f64, h: f64, key: impl Into<String>) {
		self.hits.push(HitRegion {
			x,
			y,
			w,
			h,
			key: key.into(),
		});
	}

	/// Key under `(x, y)`, topmost region first.
	pub fn key_at(&self, x: f64, y: f64) -> Option<&str> {
		self.hits
			.iter()
			.rev()
			.find(|h| h.contains(x, y))
			.map(|h| h.key.as_str())
	}

	/// Translate a click into a selection change.
	pub fn on_click(&self, x: f64, y: f64) -> Option<SelectionDelta> {
		self.key_at(x, y).map(|k| SelectionDelta::Toggle(k.to_string()))
	}

	#[cfg(test)]
	pub fn rects(&self) -> impl Iterator<Item = &Shape> {
		self.shapes.iter().filter(|s| matches!(s, Shape::Rect { .. }))
	}

	#[cfg(test)]
	pub fn labels(&self) -> impl Iterator<Item = &Label> {
		self.shapes.iter().filter_map(|s| match s {
			Shape::Text(l) => Some(l),
			_ => None,
		})
	}

	/// Chart heading centred horizontally.
	pub fn title(&mut self, text: &str, y: f64, size: f64) {
		if text.is_empty() {
			return;
		}
		self.text(
			Label::new(self.size.width / 2.0, y, text)
				.size(size)
				.bold()
				.align(Align::Middle),
		);
	}

	fn axis_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
		self.push(Shape::Line {
			x1,
			y1,
			x2,
			y2,
			stroke: AXIS.to_string(),
			width: 1.0,
		});
	}

	/// Category axis along the bottom edge at `y`, labels optionally slanted.
	pub fn band_axis_bottom(&mut self, scale: &BandScale, ox: f64, y: f64, suffix: &str, slant: bool) {
		let (start, end) = band_extent(scale);
		self.axis_line(ox + start, y, ox + end, y);
		for (i, key) in scale.domain().iter().enumerate() {
			let cx = ox + scale.position_at(i) + scale.bandwidth() / 2.0;
			self.axis_line(cx, y, cx, y + 6.0);
			let label = Label::new(cx, y + 18.0, format!("{key}{suffix}"));
			self.text(if slant {
				label.rotate(-std::f64::consts::FRAC_PI_4).align(Align::End)
			} else {
				label.align(Align::Middle)
			});
		}
	}

	/// Category axis along the left edge at `x`.
	pub fn band_axis_left(&mut self, scale: &BandScale, x: f64, oy: f64) {
		let (start, end) = band_extent(scale);
		self.axis_line(x, oy + start, x, oy + end);
		for (i, key) in scale.domain().iter().enumerate() {
			let cy = oy + scale.position_at(i) + scale.bandwidth() / 2.0;
			self.axis_line(x - 6.0, cy, x, cy);
			self.text(
				Label::new(x - 9.0, cy, key.as_str())
					.align(Align::End)
					.baseline(Baseline::Middle),
			);
		}
	}

	/// Numeric axis along the bottom edge at `y`.
	pub fn linear_axis_bottom(&mut self, scale: &LinearScale, ox: f64, y: f64, ticks: usize) {
		self.axis_line(ox + scale.range.0, y, ox + scale.range.1, y);
		for v in scale.ticks(ticks) {
			let x = ox + scale.map(v);
			self.axis_line(x, y, x, y + 6.0);
			self.text(Label::new(x, y + 18.0, format_value(v)).align(Align::Middle));
		}
	}

	/// Numeric axis along the left edge at `x`.
	pub fn linear_axis_left(&mut self, scale: &LinearScale, x: f64, oy: f64, ticks: usize) {
		self.axis_line(x, oy + scale.range.0, x, oy + scale.range.1);
		for v in scale.ticks(ticks) {
			let y = oy + scale.map(v);
			self.axis_line(x - 6.0, y, x, y);
			self.text(
				Label::new(x - 9.0, y, format_value(v))
					.align(Align::End)
					.baseline(Baseline::Middle),
			);
		}
	}
}

fn band_extent(scale: &BandScale) -> (f64, f64) {
	let n = scale.domain().len();
	if n == 0 {
		return (0.0, 0.0);
	}
	(scale.position_at(0), scale.position_at(n - 1) + scale.bandwidth())
}

/// Shortest decimal form: `100`, `12.5`.
pub fn format_value(v: f64) -> String {
	let rounded = (v * 1e6).round() / 1e6;
	if rounded == 0.0 { "0".to_string() } else { rounded.to_string() }
}
