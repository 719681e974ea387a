//! Failures while loading a tabular source.

/// Convenience result type for dataset loading.
pub type DataResult<T> = Result<T, DataError>;

/// Everything that can go wrong between issuing a fetch and holding a parsed table.
///
/// These are all SourceLoadFailures: a missing record is not an error and is
/// never represented here.
#[derive(thiserror::Error, Debug)]
pub enum DataError {
	/// No browser `window` (e.g. running outside a document).
	#[error("no window available")]
	NoWindow,

	/// The request could not be built or the network call rejected.
	#[error("request for {url} failed: {reason}")]
	Request { url: String, reason: String },

	/// The server answered with a non-success status.
	#[error("request for {url} returned HTTP {status}")]
	Status { url: String, status: u16 },

	/// The response body could not be read as text.
	#[error("could not read body of {url}: {reason}")]
	Body { url: String, reason: String },

	/// The body was not valid delimited text.
	#[error("malformed csv: {0}")]
	Parse(#[from] csv::Error),
}

impl DataError {
	pub(crate) fn request(url: &str, reason: impl std::fmt::Debug) -> Self {
		Self::Request {
			url: url.to_string(),
			reason: format!("{reason:?}"),
		}
	}

	pub(crate) fn body(url: &str, reason: impl std::fmt::Debug) -> Self {
		Self::Body {
			url: url.to_string(),
			reason: format!("{reason:?}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_resource() {
		let err = DataError::Status {
			url: "/data/GamesInfo.csv".into(),
			status: 404,
		};
		assert_eq!(err.to_string(), "request for /data/GamesInfo.csv returned HTTP 404");

		let err = DataError::request("/data/x.csv", "offline");
		assert!(err.to_string().contains("/data/x.csv"));
		assert!(err.to_string().contains("offline"));
	}
}
