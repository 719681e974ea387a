//! Typed records projected from dataset rows.

use super::table::DatasetRow;

pub const MISSING: &str = "-";

/// Rating bands in display order, each read from a `Rating_<band>` column.
pub const RATING_BANDS: [u32; 10] = [100, 90, 80, 70, 60, 50, 40, 30, 20, 10];

/// Platform columns of the games-info dataset, in display order.
pub const RATED_PLATFORMS: [&str; 10] = [
	"PC",
	"PlayStation 5",
	"Xbox Series X/S",
	"Mac",
	"Nintendo Switch",
	"PlayStation 4",
	"Xbox One",
	"Amazon Luna",
	"Google Stadia",
	"Mobile",
];

/// Parse a decimal, tolerating a trailing `%`.
///
/// Blank, unparsable, negative and non-finite inputs (including the `-` sentinel)
/// all coerce to 0.
pub fn coerce_number(raw: &str) -> f64 {
	let raw = raw.trim();
	if raw == MISSING {
		return 0.0;
	}
	let raw = raw.strip_suffix('%').unwrap_or(raw).trim_end();
	match raw.parse::<f64>() {
		Ok(v) if v.is_finite() && v >= 0.0 => v,
		_ => 0.0,
	}
}

/// A schema-typed view of one row of a known dataset.
pub trait Record: Sized {
	fn from_row(row: &DatasetRow) -> Self;
}

/// Records that are joined to a game by exact title match.
pub trait Titled {
	fn title(&self) -> &str;
}

pub fn project<R: Record>(rows: &[DatasetRow]) -> Vec<R> {
	rows.iter().map(R::from_row).collect()
}

/// First record whose title equals `title` exactly.
pub fn find_by_title<'a, R: Titled>(records: &'a [R], title: &str) -> Option<&'a R> {
	let found = records.iter().find(|r| r.title() == title);
	if found.is_none() && !records.is_empty() {
		log::debug!("no record titled {title:?} among {}", records.len());
	}
	found
}

/// Every record whose title equals `title`, in source order.
pub fn filter_by_title<'a, R: Titled>(records: &'a [R], title: &'a str) -> impl Iterator<Item = &'a R> {
	records.iter().filter(move |r| r.title() == title)
}

macro_rules! titled {
	($($ty:ty),* $(,)?) => {
		$(impl Titled for $ty {
			fn title(&self) -> &str {
				&self.title
			}
		})*
	};
}

titled!(
	GameInfo,
	RatingRetirement,
	RatingDistribution,
	PlatformRating,
	PlaytimeByPlatform,
	PlayersByPlatform,
	GenreEdge,
	YearlyGameSummary,
);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameInfo {
	pub title: String,
	pub introduction: String,
	pub genres: String,
	pub developer: String,
	pub publisher: String,
	pub platforms: String,
	pub image_url: String,
}

impl Record for GameInfo {
	fn from_row(row: &DatasetRow) -> Self {
		Self {
			title: row.text("Title"),
			introduction: row.text("Introduction"),
			genres: row.text("Genres"),
			developer: row.text("Developer"),
			publisher: row.text("Publisher"),
			platforms: row.text("Platforms"),
			image_url: row.text("ImageURL"),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatingRetirement {
	pub title: String,
	/// Percent in [0, 100].
	pub average_rating: f64,
	/// Percent in [0, 100].
	pub retirement_rate: f64,
}

impl Record for RatingRetirement {
	fn from_row(row: &DatasetRow) -> Self {
		Self {
			title: row.text("Title"),
			average_rating: row.number("Average Rating"),
			retirement_rate: row.number("Retirement"),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatingDistribution {
	pub title: String,
	/// Counts aligned with [`RATING_BANDS`].
	pub bands: [f64; 10],
}

impl Record for RatingDistribution {
	fn from_row(row: &DatasetRow) -> Self {
		Self {
			title: row.text("Title"),
			bands: RATING_BANDS.map(|band| row.number(&format!("Rating_{band}"))),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlatformRating {
	pub title: String,
	/// Ratings aligned with [`RATED_PLATFORMS`].
	pub ratings: [f64; 10],
}

impl Record for PlatformRating {
	fn from_row(row: &DatasetRow) -> Self {
		Self {
			title: row.text("Title"),
			ratings: RATED_PLATFORMS.map(|platform| row.number(platform)),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaytimeByPlatform {
	pub title: String,
	pub platform: String,
	pub main_story: f64,
	pub main_sides: f64,
	pub completionist: f64,
	pub fastest: f64,
	pub slowest: f64,
}

impl Record for PlaytimeByPlatform {
	fn from_row(row: &DatasetRow) -> Self {
		Self {
			title: row.text("Title"),
			platform: row.text("Platform"),
			main_story: row.number("Main Story"),
			main_sides: row.number("Main + Sides"),
			completionist: row.number("Completionist"),
			fastest: row.number("Fastest"),
			slowest: row.number("Slowest"),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayersByPlatform {
	pub title: String,
	pub platform: String,
	pub players: f64,
}

impl Record for PlayersByPlatform {
	fn from_row(row: &DatasetRow) -> Self {
		Self {
			title: row.text("Title"),
			platform: row.text("Platform"),
			players: row.number("Players"),
		}
	}
}

/// One (game, genre) membership.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenreEdge {
	pub title: String,
	pub genre: String,
}

impl Record for GenreEdge {
	fn from_row(row: &DatasetRow) -> Self {
		Self {
			title: row.text("Title"),
			genre: row.text("Genres").trim().to_string(),
		}
	}
}

/// A game's entry in one of the per-year category lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct YearlyGameSummary {
	pub year: String,
	pub title: String,
	pub average_playing: f64,
	pub main_story: f64,
	pub logged: f64,
}

impl Record for YearlyGameSummary {
	fn from_row(row: &DatasetRow) -> Self {
		Self {
			year: row.text("Year").trim().to_string(),
			title: row.text("Title"),
			average_playing: row.number("Average Playing"),
			main_story: row.number("Main Story"),
			logged: row.number("Logged"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Table;

	#[test]
	fn percentages_strip_the_suffix() {
		for p in [0u32, 1, 15, 50, 82, 99, 100] {
			assert_eq!(coerce_number(&format!("{p}%")), p as f64);
		}
		assert_eq!(coerce_number("82.5%"), 82.5);
		assert_eq!(coerce_number(" 7 % "), 7.0);
	}

	#[test]
	fn sentinels_and_garbage_coerce_to_zero() {
		for raw in ["-", "", "  ", "n/a", "%", "NaN", "inf", "-3", "1e400"] {
			assert_eq!(coerce_number(raw), 0.0, "{raw:?}");
		}
	}

	#[test]
	fn rating_retirement_scenario() {
		let row: DatasetRow = [("Title", "X"), ("Average Rating", "82%"), ("Retirement", "15%")]
			.into_iter()
			.collect();
		let record = RatingRetirement::from_row(&row);
		assert_eq!(record.title, "X");
		assert_eq!(record.average_rating, 82.0);
		assert_eq!(record.retirement_rate, 15.0);
	}

	#[test]
	fn games_info_projects_every_view() {
		let table = Table::parse(concat!(
			"Title,Genres,Average Rating,Retirement,Rating_100,Rating_90,Rating_10,PC,Mac,Mobile,Unused\n",
			"Hades,Roguelike,95%,3%,40,30,1,92,,-,zzz\n",
		))
		.unwrap();

		let dist: Vec<RatingDistribution> = project(table.rows());
		assert_eq!(dist[0].bands[0], 40.0);
		assert_eq!(dist[0].bands[1], 30.0);
		assert_eq!(dist[0].bands[2], 0.0);
		assert_eq!(dist[0].bands[9], 1.0);

		let platforms: Vec<PlatformRating> = project(table.rows());
		assert_eq!(platforms[0].ratings[0], 92.0);
		assert_eq!(platforms[0].ratings[3], 0.0);
		assert_eq!(platforms[0].ratings[9], 0.0);

		let info: Vec<GameInfo> = project(table.rows());
		assert_eq!(info[0].genres, "Roguelike");
		assert_eq!(info[0].developer, "");
	}

	#[test]
	fn playtime_completionist_sentinel() {
		let row: DatasetRow = [
			("Title", "X"),
			("Platform", "PC"),
			("Main Story", "10"),
			("Main + Sides", "14.5"),
			("Completionist", "-"),
			("Fastest", "3"),
			("Slowest", "0"),
		]
		.into_iter()
		.collect();
		let p = PlaytimeByPlatform::from_row(&row);
		assert_eq!(p.main_sides, 14.5);
		assert_eq!(p.completionist, 0.0);
		assert_eq!(p.fastest, 3.0);
	}

	#[test]
	fn lookup_is_exact() {
		let records = vec![
			GenreEdge { title: "Doom".into(), genre: "Shooter".into() },
			GenreEdge { title: "Doom Eternal".into(), genre: "Shooter".into() },
		];
		assert_eq!(find_by_title(&records, "Doom Eternal").map(|r| r.title.as_str()), Some("Doom Eternal"));
		assert!(find_by_title(&records, "doom").is_none());
		assert_eq!(filter_by_title(&records, "Doom").count(), 1);
	}

	#[test]
	fn yearly_summaries_share_one_schema_across_category_files() {
		let completed = "Year,Title,Average Playing,Main Story,Logged\n2023,Hades,25.5,22,1200\n";
		let retired = "Title,Year,Logged,Main Story,Average Playing\nCeleste,2022,900,8,-\n";
		let completed: Vec<YearlyGameSummary> = project(Table::parse(completed).unwrap().rows());
		let retired: Vec<YearlyGameSummary> = project(Table::parse(retired).unwrap().rows());
		assert_eq!(completed[0].average_playing, 25.5);
		assert_eq!(completed[0].logged, 1200.0);
		assert_eq!(retired[0].year, "2022");
		assert_eq!(retired[0].average_playing, 0.0);
		assert_eq!(retired[0].logged, 900.0);
	}
}
