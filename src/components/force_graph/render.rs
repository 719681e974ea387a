use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NODE_RADIUS};
use crate::charts::color::{BACKGROUND, TEXT};

pub const TITLE: &str = "Genres Connection Network Graph";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	draw_title(state, ctx);
}

fn draw_title(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(TEXT);
	ctx.set_font("bold 16px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	let _ = ctx.fill_text(TITLE, state.width / 2.0, 10.0);
	ctx.set_text_align("start");
	ctx.set_text_baseline("alphabetic");
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("#999");
	ctx.set_line_width(1.5 / state.transform.k);
	state.graph.visit_edges(|n1, n2, _| {
		ctx.set_global_alpha(0.6 * state.link_opacity(n1.index(), n2.index()));
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let mut hovered = None;

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let info = &node.data.user_data;
		ctx.set_global_alpha(info.opacity);
		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(info.color);
		ctx.fill();
		if state.is_hovered(node.index()) {
			hovered = Some((x, y, info.id.clone()));
		}
	});
	ctx.set_global_alpha(1.0);

	// Drawn last so the label sits above neighbouring nodes.
	let Some((x, y, label)) = hovered else {
		return;
	};
	let t = ease_out_cubic(state.hover.highlight_t);
	ctx.begin_path();
	let _ = ctx.arc(x, y, NODE_RADIUS + 2.0 / k, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.3 + 0.7 * t));
	ctx.set_line_width(2.0 / k);
	ctx.stroke();

	ctx.set_fill_style_str(TEXT);
	ctx.set_font(&format!("{}px sans-serif", 12.0 / k.max(0.5)));
	let _ = ctx.fill_text(&label, x + NODE_RADIUS + 4.0 / k, y - NODE_RADIUS);
}
