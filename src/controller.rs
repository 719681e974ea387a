//! Load lifecycle of a page's datasets.
//!
//! Every fetch is tagged with a [`RequestToken`]. A response is applied only if
//! its token is still the latest one issued, so a slow reply for a page the user
//! already left can never overwrite the state of the page they are on.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error, info, warn};

use crate::config::DashboardConfig;
use crate::data::{DataError, Dataset, Record, Table, fetch_table, project};

/// A dataset's load lifecycle, shared by the views that read it.
pub type DatasetController = RwSignal<PageController<Arc<Table>>>;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
	#[default]
	Idle,
	Loading,
	Ready(T),
	/// SourceLoadFailure, kept as a readable message.
	Error(String),
}

/// Identifies one fetch: the navigation key it was issued for and its generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestToken {
	key: String,
	generation: u64,
}

impl RequestToken {
	pub fn key(&self) -> &str {
		&self.key
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageController<T> {
	state: LoadState<T>,
	generation: u64,
	key: Option<String>,
}

impl<T> Default for PageController<T> {
	fn default() -> Self {
		Self {
			state: LoadState::Idle,
			generation: 0,
			key: None,
		}
	}
}

impl<T> PageController<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start a load for `key`, superseding any load still in flight.
	pub fn begin(&mut self, key: impl Into<String>) -> RequestToken {
		self.generation += 1;
		let key = key.into();
		self.key = Some(key.clone());
		self.state = LoadState::Loading;
		RequestToken {
			key,
			generation: self.generation,
		}
	}

	/// Apply the outcome of the load identified by `token`.
	///
	/// Returns `false` and leaves the state untouched when the token is stale.
	pub fn resolve(&mut self, token: RequestToken, result: Result<T, DataError>) -> bool {
		if token.generation != self.generation || self.key.as_deref() != Some(token.key()) {
			debug!(
				"discarding stale response for {:?} (generation {} < {})",
				token.key, token.generation, self.generation
			);
			return false;
		}
		self.state = match result {
			Ok(value) => LoadState::Ready(value),
			Err(e) => LoadState::Error(e.to_string()),
		};
		true
	}

	pub fn state(&self) -> &LoadState<T> {
		&self.state
	}

	pub fn ready(&self) -> Option<&T> {
		match &self.state {
			LoadState::Ready(value) => Some(value),
			_ => None,
		}
	}

	#[cfg(test)]
	pub fn is_loading(&self) -> bool {
		matches!(self.state, LoadState::Loading)
	}

	#[cfg(test)]
	pub fn error(&self) -> Option<&str> {
		match &self.state {
			LoadState::Error(message) => Some(message),
			_ => None,
		}
	}

	#[cfg(test)]
	pub fn key(&self) -> Option<&str> {
		self.key.as_deref()
	}
}

/// Fetch `dataset` whenever `key` changes and track the outcome in a controller.
///
/// There is no retry: a failed load stays failed until `key` changes or the
/// owning page is mounted again.
pub fn use_dataset(
	dataset: Dataset,
	key: impl Fn() -> String + 'static,
) -> DatasetController {
	let config = use_context::<DashboardConfig>().unwrap_or_default();
	let controller = RwSignal::new(PageController::new());

	Effect::new(move |_| {
		let key = key();
		let Some(token) = controller.try_update(|c| c.begin(key.clone())) else {
			return;
		};
		let url = config.dataset_url(dataset);
		debug!("loading {url} for {key:?}");

		spawn_local(async move {
			let result = fetch_table(&url).await.map(Arc::new);
			match &result {
				Ok(table) if table.is_empty() => warn!("{url} has a header but no rows"),
				Ok(table) => info!(
					"loaded {} rows ({} columns) from {url}",
					table.len(),
					table.columns().len()
				),
				Err(e) => error!("could not load {url}: {e}"),
			}
			let _ = controller.try_update(|c| c.resolve(token, result));
		});
	});

	controller
}

/// Typed records of a loaded dataset; empty while loading or after a failure.
pub fn use_records<R>(controller: DatasetController) -> Memo<Vec<R>>
where
	R: Record + PartialEq + Send + Sync + 'static,
{
	Memo::new(move |_| {
		controller.with(|c| c.ready().map(|table| project(table.rows())).unwrap_or_default())
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn idle_until_first_load() {
		let c = PageController::<u32>::new();
		assert_eq!(c.state(), &LoadState::Idle);
		assert!(c.ready().is_none());
	}

	#[test]
	fn loading_to_ready() {
		let mut c = PageController::new();
		let token = c.begin("Hades");
		assert!(c.is_loading());
		assert!(c.resolve(token, Ok(3)));
		assert_eq!(c.ready(), Some(&3));
		assert_eq!(c.key(), Some("Hades"));
	}

	#[test]
	fn loading_to_error_is_readable() {
		let mut c = PageController::<u32>::new();
		let token = c.begin("Hades");
		let err = DataError::Status {
			url: "/data/GamesInfo.csv".into(),
			status: 500,
		};
		assert!(c.resolve(token, Err(err)));
		assert!(c.error().is_some_and(|m| m.contains("500")));
	}

	#[test]
	fn stale_response_is_discarded() {
		let mut c = PageController::new();
		let first = c.begin("Hades");
		let second = c.begin("Celeste");

		assert!(c.resolve(second, Ok("celeste")));
		assert!(!c.resolve(first, Ok("hades")));
		assert_eq!(c.ready(), Some(&"celeste"));
	}

	#[test]
	fn stale_response_while_newer_in_flight_keeps_loading() {
		let mut c = PageController::new();
		let first = c.begin("Hades");
		let _second = c.begin("Celeste");
		assert!(!c.resolve(first, Ok(1)));
		assert!(c.is_loading());
	}

	#[test]
	fn reload_of_same_key_supersedes_earlier_request() {
		let mut c = PageController::new();
		let first = c.begin("Hades");
		let second = c.begin("Hades");
		assert!(!c.resolve(first, Ok(1)));
		assert!(c.resolve(second, Ok(2)));
		assert_eq!(c.ready(), Some(&2));
	}
}
