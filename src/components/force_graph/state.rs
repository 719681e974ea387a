use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{GraphData, GraphLink, Highlight};

pub const NODE_RADIUS: f64 = 8.0;
pub const HIT_RADIUS: f64 = 12.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub color: &'static str,
	pub opacity: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	/// Eased 0..1 intensity of the hover ring.
	pub highlight_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	links: Vec<(DefaultNodeIdx, DefaultNodeIdx, GraphLink)>,
	link_opacity: HashMap<(DefaultNodeIdx, DefaultNodeIdx), f64>,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 300.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut links = Vec::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let (x, y) = if node.is_focus {
				(0.0, 0.0)
			} else {
				let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
				((150.0 * angle.cos()) as f32, (150.0 * angle.sin()) as f32)
			};
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					color: node.color(),
					opacity: 1.0,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				links.push((src, tgt, link.clone()));
			}
		}

		Self {
			graph,
			links,
			link_opacity: HashMap::new(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node != node {
			self.hover.node = node;
			self.hover.highlight_t = 0.0;
		}
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
	}

	/// Pushes node and link opacities from `highlight` into the simulation.
	pub fn apply_highlight(&mut self, highlight: &Highlight) {
		self.graph.visit_nodes_mut(|node| {
			let info = &mut node.data.user_data;
			info.opacity = highlight.node_opacity(&info.id);
		});
		self.link_opacity = self
			.links
			.iter()
			.map(|(src, tgt, link)| ((*src, *tgt), highlight.link_opacity(link)))
			.collect();
	}

	pub fn link_opacity(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> f64 {
		self.link_opacity
			.get(&(a, b))
			.or_else(|| self.link_opacity.get(&(b, a)))
			.copied()
			.unwrap_or(1.0)
	}

	pub fn begin_drag(&mut self, idx: DefaultNodeIdx, x: f64, y: f64) {
		self.drag.active = true;
		self.drag.node_idx = Some(idx);
		self.drag.start_x = x;
		self.drag.start_y = y;
		let drag = &mut self.drag;
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				drag.node_start_x = node.data.x;
				drag.node_start_y = node.data.y;
				node.data.is_anchor = true;
			}
		});
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		let (dx, dy) = (
			(x - self.drag.start_x) / self.transform.k,
			(y - self.drag.start_y) / self.transform.k,
		);
		let (nx, ny) = (
			self.drag.node_start_x + dx as f32,
			self.drag.node_start_y + dy as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
			}
		});
	}

	/// Ends any drag or pan. A dragged node is released back to the simulation.
	pub fn release(&mut self) {
		if let Some(idx) = self.drag.node_idx.take() {
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.is_anchor = false;
				}
			});
		}
		self.drag.active = false;
		self.pan.active = false;
	}

	pub fn zoom_at(&mut self, x: f64, y: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		if self.hover.node.is_some() {
			self.hover.highlight_t += (1.0 - self.hover.highlight_t) * 6.0 * dt as f64;
			self.hover.highlight_t = self.hover.highlight_t.min(1.0);
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::GenreEdge;
	use crate::selection::{DIMMED_OPACITY, Selection};

	fn state() -> (GraphData, ForceGraphState) {
		let edges: Vec<GenreEdge> = [("X", "RPG"), ("Y", "RPG"), ("Y", "Action")]
			.iter()
			.map(|(t, g)| GenreEdge {
				title: t.to_string(),
				genre: g.to_string(),
			})
			.collect();
		let data = GraphData::build(&edges, "X");
		let state = ForceGraphState::new(&data, 400.0, 300.0);
		(data, state)
	}

	fn node_idx(state: &ForceGraphState, id: &str) -> DefaultNodeIdx {
		let mut found = None;
		state.graph.visit_nodes(|node| {
			if node.data.user_data.id == id {
				found = Some(node.index());
			}
		});
		found.unwrap()
	}

	#[test]
	fn focus_node_starts_at_view_centre() {
		let (_, state) = state();
		let idx = node_idx(&state, "X");
		assert_eq!(state.node_at_position(200.0, 150.0), Some(idx));
	}

	#[test]
	fn highlight_sets_node_and_link_opacity() {
		let (data, mut state) = state();
		let mut selection = Selection::new();
		selection.toggle("Action");
		state.apply_highlight(&data.highlight(&selection));

		let mut opacity = HashMap::new();
		state.graph.visit_nodes(|node| {
			opacity.insert(node.data.user_data.id.clone(), node.data.user_data.opacity);
		});
		assert_eq!(opacity["Y"], 1.0);
		assert_eq!(opacity["Action"], 1.0);
		assert_eq!(opacity["X"], DIMMED_OPACITY);

		let (x, rpg) = (node_idx(&state, "X"), node_idx(&state, "RPG"));
		assert_eq!(state.link_opacity(x, rpg), DIMMED_OPACITY);
		assert_eq!(state.link_opacity(rpg, x), DIMMED_OPACITY);
	}

	#[test]
	fn drag_pins_then_releases() {
		let (_, mut state) = state();
		let idx = node_idx(&state, "X");
		state.begin_drag(idx, 200.0, 150.0);
		state.drag_to(220.0, 170.0);

		let mut pinned = None;
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				pinned = Some((node.data.is_anchor, node.x(), node.y()));
			}
		});
		assert_eq!(pinned, Some((true, 20.0, 20.0)));

		state.release();
		let mut anchored = true;
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				anchored = node.data.is_anchor;
			}
		});
		assert!(!anchored);
		assert!(!state.drag.active);
	}

	#[test]
	fn zoom_keeps_cursor_point_fixed() {
		let (_, mut state) = state();
		let before = state.screen_to_graph(250.0, 100.0);
		state.zoom_at(250.0, 100.0, true);
		let after = state.screen_to_graph(250.0, 100.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
		assert!(state.transform.k > 1.0);
	}
}
