//! Browser fetch of a dataset file.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::error::{DataError, DataResult};
use super::table::Table;

/// GET `url` and parse the body as a header-first CSV table.
pub async fn fetch_table(url: &str) -> DataResult<Table> {
	let window = web_sys::window().ok_or(DataError::NoWindow)?;

	let opts = RequestInit::new();
	opts.set_method("GET");
	opts.set_mode(RequestMode::SameOrigin);

	let request = Request::new_with_str_and_init(url, &opts).map_err(|e| DataError::request(url, e))?;
	let response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(|e| DataError::request(url, e))?
		.dyn_into::<Response>()
		.map_err(|e| DataError::request(url, e))?;

	if !response.ok() {
		return Err(DataError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}

	let body = response.text().map_err(|e| DataError::body(url, e))?;
	let text = JsFuture::from(body)
		.await
		.map_err(|e| DataError::body(url, e))?
		.as_string()
		.ok_or_else(|| DataError::body(url, "body is not a string"))?;

	Table::parse(&text)
}
