use std::f64::consts::FRAC_PI_2;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::charts::color::BACKGROUND;
use crate::charts::scene::{Align, Baseline, Label, Scene, Shape};

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Clear the whole surface, then draw every shape of `scene` in order.
pub fn paint(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (scene.size.width, scene.size.height);
	ctx.clear_rect(0.0, 0.0, w, h);
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, w, h);

	for shape in &scene.shapes {
		match shape {
			Shape::Rect {
				x,
				y,
				w,
				h,
				fill,
				stroke,
				opacity,
			} => {
				ctx.set_global_alpha(*opacity);
				ctx.set_fill_style_str(fill);
				ctx.fill_rect(*x, *y, *w, *h);
				if let Some(stroke) = stroke {
					ctx.set_stroke_style_str(stroke);
					ctx.set_line_width(1.0);
					ctx.stroke_rect(*x, *y, *w, *h);
				}
			}
			Shape::Arc {
				cx,
				cy,
				inner,
				outer,
				start,
				end,
				fill,
			} => {
				// Scene angles start at twelve o'clock; canvas angles at three.
				let (a0, a1) = (start - FRAC_PI_2, end - FRAC_PI_2);
				ctx.set_global_alpha(1.0);
				ctx.begin_path();
				let _ = ctx.arc(*cx, *cy, *outer, a0, a1);
				let _ = ctx.arc_with_anticlockwise(*cx, *cy, *inner, a1, a0, true);
				ctx.close_path();
				ctx.set_fill_style_str(fill);
				ctx.fill();
			}
			Shape::Circle {
				cx,
				cy,
				r,
				fill,
				stroke,
				opacity,
			} => {
				ctx.set_global_alpha(*opacity);
				ctx.begin_path();
				let _ = ctx.arc(*cx, *cy, *r, 0.0, 2.0 * std::f64::consts::PI);
				ctx.set_fill_style_str(fill);
				ctx.fill();
				if let Some(stroke) = stroke {
					ctx.set_stroke_style_str(stroke);
					ctx.set_line_width(1.0);
					ctx.stroke();
				}
			}
			Shape::Line {
				x1,
				y1,
				x2,
				y2,
				stroke,
				width,
			} => {
				ctx.set_global_alpha(1.0);
				ctx.begin_path();
				ctx.move_to(*x1, *y1);
				ctx.line_to(*x2, *y2);
				ctx.set_stroke_style_str(stroke);
				ctx.set_line_width(*width);
				ctx.stroke();
			}
			Shape::Text(label) => draw_label(label, ctx),
		}
	}
	ctx.set_global_alpha(1.0);
}

fn draw_label(label: &Label, ctx: &CanvasRenderingContext2d) {
	ctx.save();
	let _ = ctx.translate(label.x, label.y);
	if label.rotate != 0.0 {
		let _ = ctx.rotate(label.rotate);
	}
	ctx.set_global_alpha(label.opacity);
	ctx.set_fill_style_str(&label.color);
	ctx.set_font(&format!(
		"{}{}px sans-serif",
		if label.bold { "bold " } else { "" },
		label.size
	));
	ctx.set_text_align(match label.align {
		Align::Start => "start",
		Align::Middle => "center",
		Align::End => "end",
	});
	ctx.set_text_baseline(match label.baseline {
		Baseline::Alphabetic => "alphabetic",
		Baseline::Middle => "middle",
	});
	let _ = ctx.fill_text(&label.text, 0.0, 0.0);
	ctx.restore();
}
