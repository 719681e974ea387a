use leptos::ev;
use leptos::prelude::*;
use log::warn;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::paint;
use crate::charts::{ChartView, Scene, Size};
use crate::selection::SelectionDelta;

/// A canvas owned by one chart. It measures its container, rebuilds the scene
/// whenever the view or the size changes, and repaints from a blank surface.
#[component]
pub fn ChartCanvas(
	#[prop(into)] chart: Signal<ChartView>,
	#[prop(default = 400.0)] height: f64,
	#[prop(default = None)] width: Option<f64>,
	/// Receives the selection change for clicks on interactive regions.
	#[prop(optional)]
	on_select: Option<Callback<SelectionDelta>>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let size = RwSignal::new(Size::default());

	let measure = move || {
		let Some(container) = container_ref.get_untracked() else {
			return;
		};
		let w = width.unwrap_or_else(|| container.client_width() as f64);
		size.set(Size::new(w, height));
	};

	Effect::new(move |_| {
		if container_ref.get().is_some() {
			measure();
		}
	});
	let resize = window_event_listener(ev::resize, move |_| measure());
	on_cleanup(move || resize.remove());

	let scene = Memo::new(move |_| chart.with(|c| c.scene(size.get())));

	Effect::new(move |_| {
		let scene = scene.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(scene.size.width as u32);
		canvas.set_height(scene.size.height as u32);
		match paint::context_2d(&canvas) {
			Some(ctx) => paint::paint(&scene, &ctx),
			None => warn!("chart canvas has no 2d context"),
		}
	});

	let local_point = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let on_click = move |ev: MouseEvent| {
		let (Some(callback), Some((x, y))) = (on_select, local_point(&ev)) else {
			return;
		};
		if let Some(delta) = scene.with_untracked(|s: &Scene| s.on_click(x, y)) {
			callback.run(delta);
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let over = on_select.is_some() && scene.with_untracked(|s| s.key_at(x, y).is_some());
		let cursor = if over { "pointer" } else { "default" };
		let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor);
	};

	view! {
		<div node_ref=container_ref class="chart-container" style="width: 100%;">
			<canvas
				node_ref=canvas_ref
				class="chart-canvas"
				on:click=on_click
				on:mousemove=on_mousemove
				style="display: block;"
			/>
		</div>
	}
}
