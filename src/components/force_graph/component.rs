use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::ev;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::ForceGraphState;
use super::types::{GraphData, Highlight};
use crate::components::chart_canvas::context_2d;

const FALLBACK_WIDTH: f64 = 800.0;

/// Once the component is gone, drop the simulation and the frame callback.
///
/// The callback holds a handle to its own slot, so clearing the slot is what
/// lets both be freed. wasm-bindgen defers freeing a closure that is still
/// running, so the frame callback may call this on itself.
fn release_when_stopped<S, C>(
	alive: &AtomicBool,
	state: &RefCell<Option<S>>,
	frame: &RefCell<Option<C>>,
) -> bool {
	if alive.load(Ordering::Relaxed) {
		return false;
	}
	state.borrow_mut().take();
	frame.borrow_mut().take();
	debug!("network animation stopped");
	true
}

/// Force-directed genre network. The simulation is rebuilt when `data`
/// changes; `highlight` only restyles the existing layout.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into)] highlight: Signal<Highlight>,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));

	let width = RwSignal::new(0.0);

	let measure = move || -> Option<f64> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		let w = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(FALLBACK_WIDTH);
		Some(w)
	};

	let state_build = state.clone();
	Effect::new(move |_| {
		let data = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let w = measure().unwrap_or(FALLBACK_WIDTH);
		canvas.set_width(w as u32);
		canvas.set_height(height as u32);
		debug!(
			"building network with {} nodes and {} links",
			data.nodes.len(),
			data.links.len()
		);
		let mut fresh = ForceGraphState::new(&data, w, height);
		fresh.apply_highlight(&highlight.get_untracked());
		*state_build.borrow_mut() = Some(fresh);
	});

	let state_hl = state.clone();
	Effect::new(move |_| {
		let highlight = highlight.get();
		if let Some(s) = state_hl.borrow_mut().as_mut() {
			s.apply_highlight(&highlight);
		}
	});

	let resize = window_event_listener(ev::resize, move |_| {
		if let Some(w) = measure() {
			width.set(w);
		}
	});

	let state_resize = state.clone();
	Effect::new(move |_| {
		let w = width.get();
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		if w <= 0.0 {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(w as u32);
		if let Some(s) = state_resize.borrow_mut().as_mut() {
			s.resize(w, height);
		}
	});

	let (state_anim, animate_init, alive_anim) = (state.clone(), animate.clone(), alive.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if animate_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			warn!("network canvas has no 2d context");
			return;
		};
		let (state_frame, animate_inner, alive_frame) =
			(state_anim.clone(), animate_init.clone(), alive_anim.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if release_when_stopped(&alive_frame, &state_frame, &animate_inner) {
				return;
			}
			if let Some(s) = state_frame.borrow_mut().as_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(window), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref())
			{
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), animate_init.borrow().as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	on_cleanup(move || {
		alive.store(false, Ordering::Relaxed);
		resize.remove();
	});

	let local_point = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		if let Some(s) = state_md.borrow_mut().as_mut() {
			match s.node_at_position(x, y) {
				Some(idx) => s.begin_drag(idx, x, y),
				None => {
					s.pan.active = true;
					s.pan.start_x = x;
					s.pan.start_y = y;
					s.pan.transform_start_x = s.transform.x;
					s.pan.transform_start_y = s.transform.y;
				}
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		if let Some(s) = state_mm.borrow_mut().as_mut() {
			if s.drag.active {
				s.drag_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
				if s.pan.active {
					s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
					s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
				}
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(s) = state_mu.borrow_mut().as_mut() {
			s.release();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(s) = state_ml.borrow_mut().as_mut() {
			s.release();
			s.set_hover(None);
		}
	};

	let state_wh = state;
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(&*ev) else {
			return;
		};
		if let Some(s) = state_wh.borrow_mut().as_mut() {
			s.zoom_at(x, y, ev.delta_y() < 0.0);
		}
	};

	view! {
		<div class="network-container" style="width: 100%;">
			<canvas
				node_ref=canvas_ref
				class="force-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	type Frame = Box<dyn FnMut()>;

	#[test]
	fn stopped_loop_frees_its_state_and_callback() {
		let state = Rc::new(RefCell::new(Some(vec![1u32, 2, 3])));
		let slot: Rc<RefCell<Option<Frame>>> = Rc::new(RefCell::new(None));
		let alive = AtomicBool::new(true);

		let (state_frame, slot_frame) = (state.clone(), slot.clone());
		*slot.borrow_mut() = Some(Box::new(move || {
			let _ = (&state_frame, &slot_frame);
		}));
		assert_eq!(Rc::strong_count(&state), 2);
		assert_eq!(Rc::strong_count(&slot), 2);

		assert!(!release_when_stopped(&alive, &state, &slot));
		assert!(slot.borrow().is_some());

		alive.store(false, Ordering::Relaxed);
		assert!(release_when_stopped(&alive, &state, &slot));
		assert!(state.borrow().is_none());
		assert!(slot.borrow().is_none());
		assert_eq!(Rc::strong_count(&state), 1);
		assert_eq!(Rc::strong_count(&slot), 1);
	}
}
