//! CSR entrypoint: read the host page's settings and mount the dashboard.

// Every other dependency is used by the library half of the package.
#![allow(unused_crate_dependencies)]

use game_stats_dashboard::{App, DashboardConfig, init_logging};
use leptos::prelude::*;

fn main() {
	let config = DashboardConfig::from_document();
	init_logging(config.log_level);
	mount_to_body(move || view! { <App config=config.clone() /> });
}
