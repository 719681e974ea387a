//! Tabular sources and the typed records projected from them.

mod error;
mod records;
mod source;
mod table;

pub use error::{DataError, DataResult};
pub use records::{
	GameInfo, GenreEdge, PlatformRating, PlayersByPlatform, PlaytimeByPlatform, RATED_PLATFORMS,
	RATING_BANDS, RatingDistribution, RatingRetirement, Record, Titled, YearlyGameSummary,
	coerce_number, filter_by_title, find_by_title, project,
};
pub use source::fetch_table;
pub use table::{Dataset, DatasetRow, Table};
