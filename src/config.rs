//! Runtime settings for the dashboard, provided to the component tree as context.

use log::Level;

use crate::data::Dataset;

pub const DEFAULT_DATA_ROOT: &str = "/data";

/// Data location, chart sizes and log level.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
	/// URL prefix the dataset files are served under.
	pub data_root: String,
	/// Height of a chart canvas in pixels.
	pub chart_height: f64,
	/// Height of the genre network canvas in pixels.
	pub graph_height: f64,
	/// How many titles a collapsed overview panel shows.
	pub preview_rows: usize,
	/// Maximum level sent to the browser console.
	pub log_level: Level,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			data_root: DEFAULT_DATA_ROOT.to_string(),
			chart_height: 400.0,
			graph_height: 600.0,
			preview_rows: 5,
			log_level: Level::Debug,
		}
	}
}

impl DashboardConfig {
	/// Defaults, overridden by `<meta name="data-root">` and `<meta name="log-level">`
	/// when the host page carries them.
	pub fn from_document() -> Self {
		let mut config = Self::default();
		if let Some(root) = meta_content("data-root") {
			config.data_root = root;
		}
		if let Some(level) = meta_content("log-level").and_then(|l| l.parse().ok()) {
			config.log_level = level;
		}
		config
	}

	#[cfg(test)]
	pub(crate) fn with_data_root(mut self, root: impl Into<String>) -> Self {
		self.data_root = root.into();
		self
	}

	pub(crate) fn dataset_url(&self, dataset: Dataset) -> String {
		let root = self.data_root.trim_end_matches('/');
		format!("{root}/{}", dataset.file_name())
	}
}

fn meta_content(name: &str) -> Option<String> {
	let document = web_sys::window()?.document()?;
	let meta = document
		.query_selector(&format!("meta[name=\"{name}\"]"))
		.ok()??;
	meta.get_attribute("content").filter(|c| !c.trim().is_empty())
}
