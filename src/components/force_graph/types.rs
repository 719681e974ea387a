use std::collections::{HashMap, HashSet};

use crate::data::GenreEdge;
use crate::selection::{DIMMED_OPACITY, Selection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Game,
	Genre,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
	pub id: String,
	pub kind: NodeKind,
	pub is_focus: bool,
	/// A game whose genres include every genre of the focus game.
	pub shares_all_genres: bool,
}

impl GraphNode {
	pub fn color(&self) -> &'static str {
		if self.is_focus {
			"red"
		} else if self.shares_all_genres {
			"green"
		} else {
			match self.kind {
				NodeKind::Game => "#1f77b4",
				NodeKind::Genre => "#ff7f0e",
			}
		}
	}
}

/// Undirected game → genre membership.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

/// Genre neighbourhood of one focus game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// The focus game, its genres, every game sharing one of them, and those
	/// games' own genres. Each game links to each of its own genres.
	pub fn build(edges: &[GenreEdge], focus: &str) -> Self {
		let mut genres_of: HashMap<&str, Vec<&str>> = HashMap::new();
		let mut titles: Vec<&str> = Vec::new();
		for edge in edges {
			if edge.title.is_empty() || edge.genre.is_empty() {
				continue;
			}
			let genres = genres_of.entry(edge.title.as_str()).or_insert_with(|| {
				titles.push(edge.title.as_str());
				Vec::new()
			});
			if !genres.contains(&edge.genre.as_str()) {
				genres.push(edge.genre.as_str());
			}
		}

		let focus_genres: Vec<&str> = genres_of.get(focus).cloned().unwrap_or_default();
		let shares_all = |title: &str| {
			let genres = genres_of.get(title).map(Vec::as_slice).unwrap_or_default();
			focus_genres.iter().all(|g| genres.contains(g))
		};

		let mut graph = GraphData::default();
		let mut seen: HashSet<String> = HashSet::new();
		let mut push_node = |graph: &mut GraphData, id: &str, kind: NodeKind| {
			if seen.insert(id.to_string()) {
				graph.nodes.push(GraphNode {
					id: id.to_string(),
					kind,
					is_focus: kind == NodeKind::Game && id == focus,
					shares_all_genres: kind == NodeKind::Game && shares_all(id),
				});
			}
		};

		push_node(&mut graph, focus, NodeKind::Game);
		for &genre in &focus_genres {
			push_node(&mut graph, genre, NodeKind::Genre);
		}

		let mut linked: HashSet<GraphLink> = HashSet::new();
		for &title in &titles {
			let genres = &genres_of[title];
			if !genres.iter().any(|g| focus_genres.contains(g)) {
				continue;
			}
			push_node(&mut graph, title, NodeKind::Game);
			for &genre in genres {
				push_node(&mut graph, genre, NodeKind::Genre);
				let link = GraphLink {
					source: title.to_string(),
					target: genre.to_string(),
				};
				if linked.insert(link.clone()) {
					graph.links.push(link);
				}
			}
		}
		graph
	}

	#[cfg(test)]
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Genre node ids in graph order, for the legend.
	pub fn genres(&self) -> Vec<String> {
		self.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Genre)
			.map(|n| n.id.clone())
			.collect()
	}

	/// Which nodes and links stay at full opacity for `selection`.
	///
	/// A game is related when it links to every selected genre; everything
	/// else is dimmed but kept in place.
	pub fn highlight(&self, selection: &Selection) -> Highlight {
		if selection.is_empty() {
			return Highlight::All;
		}
		let mut genres_of: HashMap<&str, HashSet<&str>> = HashMap::new();
		for link in &self.links {
			genres_of
				.entry(link.source.as_str())
				.or_default()
				.insert(link.target.as_str());
		}
		let related: HashSet<String> = genres_of
			.iter()
			.filter(|(_, genres)| selection.all_within(|g| genres.contains(g)))
			.map(|(game, _)| game.to_string())
			.collect();

		let nodes = self
			.nodes
			.iter()
			.filter(|n| match n.kind {
				NodeKind::Genre => selection.contains(&n.id),
				NodeKind::Game => related.contains(&n.id),
			})
			.map(|n| n.id.clone())
			.collect();
		let links = self
			.links
			.iter()
			.filter(|l| related.contains(&l.source) && selection.contains(&l.target))
			.cloned()
			.collect();
		Highlight::Only { nodes, links }
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
	#[default]
	All,
	Only {
		nodes: HashSet<String>,
		links: HashSet<GraphLink>,
	},
}

impl Highlight {
	pub fn node_opacity(&self, id: &str) -> f64 {
		match self {
			Highlight::All => 1.0,
			Highlight::Only { nodes, .. } if nodes.contains(id) => 1.0,
			Highlight::Only { .. } => DIMMED_OPACITY,
		}
	}

	pub fn link_opacity(&self, link: &GraphLink) -> f64 {
		match self {
			Highlight::All => 1.0,
			Highlight::Only { links, .. } if links.contains(link) => 1.0,
			Highlight::Only { .. } => DIMMED_OPACITY,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edges(pairs: &[(&str, &str)]) -> Vec<GenreEdge> {
		pairs
			.iter()
			.map(|(t, g)| GenreEdge {
				title: t.to_string(),
				genre: g.to_string(),
			})
			.collect()
	}

	fn sample() -> Vec<GenreEdge> {
		edges(&[
			("X", "RPG"),
			("X", "Action"),
			("Both", "RPG"),
			("Both", "Action"),
			("Both", "Open World"),
			("OnlyRpg", "RPG"),
			("OnlyRpg", "Strategy"),
			("Unrelated", "Puzzle"),
		])
	}

	#[test]
	fn every_link_endpoint_is_a_node() {
		for focus in ["X", "Both", "OnlyRpg", "Unrelated", "Missing"] {
			let graph = GraphData::build(&sample(), focus);
			for link in &graph.links {
				assert!(graph.node(&link.source).is_some(), "{focus}: {}", link.source);
				assert!(graph.node(&link.target).is_some(), "{focus}: {}", link.target);
			}
			assert_eq!(graph.nodes.iter().filter(|n| n.is_focus).count(), 1, "{focus}");
			let mut ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
			ids.sort_unstable();
			ids.dedup();
			assert_eq!(ids.len(), graph.nodes.len());
		}
	}

	#[test]
	fn neighbourhood_includes_genres_of_related_games() {
		let graph = GraphData::build(&sample(), "X");
		let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["X", "RPG", "Action", "Both", "Open World", "OnlyRpg", "Strategy"]);
		assert!(graph.node("Unrelated").is_none());
		assert!(graph.links.contains(&GraphLink {
			source: "OnlyRpg".into(),
			target: "Strategy".into(),
		}));
		assert!(!graph.links.iter().any(|l| l.source == "OnlyRpg" && l.target == "Action"));
	}

	#[test]
	fn shares_all_genres_is_superset() {
		let graph = GraphData::build(&sample(), "X");
		assert!(graph.node("Both").unwrap().shares_all_genres);
		assert!(!graph.node("OnlyRpg").unwrap().shares_all_genres);
		assert_eq!(graph.node("X").unwrap().color(), "red");
		assert_eq!(graph.node("Both").unwrap().color(), "green");
		assert_eq!(graph.node("OnlyRpg").unwrap().color(), "#1f77b4");
		assert_eq!(graph.node("RPG").unwrap().color(), "#ff7f0e");
	}

	#[test]
	fn focus_without_genres_is_still_present() {
		let graph = GraphData::build(&sample(), "Missing");
		assert_eq!(graph.nodes.len(), 1);
		assert!(graph.nodes[0].is_focus);
		assert!(graph.links.is_empty());
	}

	#[test]
	fn selected_genres_use_and_semantics() {
		let graph = GraphData::build(&sample(), "X");
		let mut selection = Selection::new();
		selection.toggle("RPG");
		let hl = graph.highlight(&selection);
		assert_eq!(hl.node_opacity("OnlyRpg"), 1.0);

		selection.toggle("Action");
		let hl = graph.highlight(&selection);
		assert_eq!(hl.node_opacity("Both"), 1.0);
		assert_eq!(hl.node_opacity("X"), 1.0);
		assert_eq!(hl.node_opacity("RPG"), 1.0);
		assert_eq!(hl.node_opacity("OnlyRpg"), DIMMED_OPACITY);
		assert_eq!(hl.node_opacity("Strategy"), DIMMED_OPACITY);
		assert!(graph.node("OnlyRpg").is_some());

		let kept = GraphLink {
			source: "Both".into(),
			target: "Action".into(),
		};
		let dimmed = GraphLink {
			source: "OnlyRpg".into(),
			target: "RPG".into(),
		};
		assert_eq!(hl.link_opacity(&kept), 1.0);
		assert_eq!(hl.link_opacity(&dimmed), DIMMED_OPACITY);
	}

	#[test]
	fn empty_selection_highlights_everything() {
		let graph = GraphData::build(&sample(), "X");
		assert_eq!(graph.highlight(&Selection::new()), Highlight::All);
		assert_eq!(Highlight::All.node_opacity("anything"), 1.0);
	}
}
