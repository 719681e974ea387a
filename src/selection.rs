//! User-highlighted categorical keys shared by a chart and its legend.

/// Opacity of elements outside a non-empty selection.
pub const DIMMED_OPACITY: f64 = 0.1;

/// An insertion-ordered set of selected keys.
///
/// Empty means "no filter": every element matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	keys: Vec<String>,
}

/// A change to a [`Selection`] requested by an interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionDelta {
	Toggle(String),
	Clear,
}

impl Selection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add `key` if absent, remove it if present.
	pub fn toggle(&mut self, key: &str) {
		match self.keys.iter().position(|k| k == key) {
			Some(i) => {
				self.keys.remove(i);
			}
			None => self.keys.push(key.to_string()),
		}
	}

	pub fn apply(&mut self, delta: SelectionDelta) {
		match delta {
			SelectionDelta::Toggle(key) => self.toggle(&key),
			SelectionDelta::Clear => self.keys.clear(),
		}
	}

	pub fn contains(&self, key: &str) -> bool {
		self.keys.iter().any(|k| k == key)
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	#[cfg(test)]
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.keys.iter().map(String::as_str)
	}

	/// OR semantics: `key` is shown when nothing is selected or it is selected.
	pub fn admits(&self, key: &str) -> bool {
		self.is_empty() || self.contains(key)
	}

	/// AND semantics: `has` must hold for every selected key.
	pub fn all_within(&self, has: impl Fn(&str) -> bool) -> bool {
		self.keys.iter().all(|k| has(k))
	}

	pub fn opacity_for(&self, key: &str) -> f64 {
		if self.admits(key) { 1.0 } else { DIMMED_OPACITY }
	}
}
