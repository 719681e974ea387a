//! View models: the minimal data each chart draws, rebuilt from records and the
//! current selection on every change. Missing inputs give an empty model.

use crate::data::{
	PlatformRating, PlayersByPlatform, RATED_PLATFORMS, RATING_BANDS, RatingDistribution,
	RatingRetirement, YearlyGameSummary,
};

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryValue {
	pub label: String,
	pub value: f64,
}

/// What to do with categories whose value is 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZeroPolicy {
	/// Draw a zero-height bar.
	Keep,
	/// Leave the category out entirely.
	Drop,
}

/// Ordered category → value pairs for a bar chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryChart {
	pub entries: Vec<CategoryValue>,
}

impl CategoryChart {
	pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, f64)>, zeros: ZeroPolicy) -> Self {
		Self {
			entries: pairs
				.into_iter()
				.filter(|(_, v)| zeros == ZeroPolicy::Keep || *v != 0.0)
				.map(|(label, value)| CategoryValue {
					label: label.into(),
					value,
				})
				.collect(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn max(&self) -> f64 {
		self.entries.iter().map(|e| e.value).fold(0.0, f64::max)
	}

	pub fn labels(&self) -> Vec<String> {
		self.entries.iter().map(|e| e.label.clone()).collect()
	}
}

/// Rating bands 100..10, zero bands kept.
pub fn rating_distribution(record: Option<&RatingDistribution>) -> CategoryChart {
	let Some(record) = record else {
		return CategoryChart::default();
	};
	CategoryChart::from_pairs(
		RATING_BANDS.iter().map(|b| b.to_string()).zip(record.bands),
		ZeroPolicy::Keep,
	)
}

/// Per-platform ratings. Platforms rated 0 are unreleased there and are dropped.
pub fn platform_rating(record: Option<&PlatformRating>) -> CategoryChart {
	let Some(record) = record else {
		return CategoryChart::default();
	};
	CategoryChart::from_pairs(RATED_PLATFORMS.into_iter().zip(record.ratings), ZeroPolicy::Drop)
}

/// Player counts for one game's platforms, in source order, zeros kept.
pub fn players_by_platform<'a>(rows: impl IntoIterator<Item = &'a PlayersByPlatform>) -> CategoryChart {
	CategoryChart::from_pairs(
		rows.into_iter().map(|r| (r.platform.clone(), r.players)),
		ZeroPolicy::Keep,
	)
}

/// Average playing time against main-story length for one game.
pub fn playtime_comparison(game: &YearlyGameSummary) -> CategoryChart {
	CategoryChart::from_pairs(
		[("Avg", game.average_playing), ("Main", game.main_story)],
		ZeroPolicy::Keep,
	)
}

/// A two-slice partition of 100: the percentage and its remainder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProportionPie {
	percent: f64,
}

impl ProportionPie {
	/// `percent` is pinned to [0, 100].
	pub fn new(percent: f64) -> Self {
		let percent = if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 };
		Self { percent }
	}

	pub fn slices(&self) -> [f64; 2] {
		[self.percent, 100.0 - self.percent]
	}

	pub fn label(&self) -> String {
		format!("{}%", self.percent.round())
	}
}

/// Average-rating and retirement pies, computed independently from one record.
pub fn rating_retirement_pies(record: Option<&RatingRetirement>) -> Option<(ProportionPie, ProportionPie)> {
	record.map(|r| (ProportionPie::new(r.average_rating), ProportionPie::new(r.retirement_rate)))
}

/// Distinct years in first-appearance order.
pub fn years(records: &[YearlyGameSummary]) -> Vec<String> {
	let mut out: Vec<String> = Vec::new();
	for r in records {
		if !r.year.is_empty() && !out.contains(&r.year) {
			out.push(r.year.clone());
		}
	}
	out
}

/// Records for `year` in source order, truncated to the first `top` when given.
pub fn leaderboard<'a>(records: &'a [YearlyGameSummary], year: &str, top: Option<usize>) -> Vec<&'a YearlyGameSummary> {
	records
		.iter()
		.filter(|r| r.year == year)
		.take(top.unwrap_or(usize::MAX))
		.collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
	pub x: f64,
	pub y: f64,
	pub label: String,
}

/// Average playing (x) against main story (y) for the given games.
pub fn playtime_scatter<'a>(games: impl IntoIterator<Item = &'a YearlyGameSummary>) -> Vec<ScatterPoint> {
	games
		.into_iter()
		.map(|g| ScatterPoint {
			x: g.average_playing,
			y: g.main_story,
			label: g.title.clone(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn summary(year: &str, title: &str) -> YearlyGameSummary {
		YearlyGameSummary {
			year: year.into(),
			title: title.into(),
			..Default::default()
		}
	}

	#[test]
	fn pie_partition_sums_to_100() {
		for p in (0..=200).map(|i| i as f64 * 0.5) {
			let pie = ProportionPie::new(p);
			let [a, b] = pie.slices();
			assert_eq!(a + b, 100.0, "{p}");
			assert_eq!(a, p);
		}
		assert_eq!(ProportionPie::new(140.0).slices(), [100.0, 0.0]);
		assert_eq!(ProportionPie::new(f64::NAN).slices(), [0.0, 100.0]);
	}

	#[test]
	fn rating_retirement_scenario() {
		let record = RatingRetirement {
			title: "X".into(),
			average_rating: 82.0,
			retirement_rate: 15.0,
		};
		let (rating, retirement) = rating_retirement_pies(Some(&record)).unwrap();
		assert_eq!(rating.slices(), [82.0, 18.0]);
		assert_eq!(retirement.slices(), [15.0, 85.0]);
		assert_eq!(rating.label(), "82%");
		assert_eq!(ProportionPie::new(82.5).label(), "83%");
		assert!(rating_retirement_pies(None).is_none());
	}

	#[test]
	fn distribution_keeps_zero_bands() {
		let record = RatingDistribution {
			title: "X".into(),
			bands: [5.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
		};
		let chart = rating_distribution(Some(&record));
		assert_eq!(chart.len(), 10);
		assert_eq!(chart.entries[0].label, "100");
		assert_eq!(chart.entries[9].label, "10");
		assert_eq!(chart.entries[1].value, 0.0);
		assert!(rating_distribution(None).is_empty());
	}

	#[test]
	fn platform_rating_drops_zero_platforms() {
		let mut ratings = [0.0; 10];
		ratings[0] = 88.0;
		ratings[4] = 71.0;
		let chart = platform_rating(Some(&PlatformRating {
			title: "X".into(),
			ratings,
		}));
		assert_eq!(chart.labels(), ["PC", "Nintendo Switch"]);
	}

	#[test]
	fn players_keep_zero_counts_in_source_order() {
		let rows = [
			PlayersByPlatform { title: "X".into(), platform: "PC".into(), players: 100.0 },
			PlayersByPlatform { title: "X".into(), platform: "Mac".into(), players: 0.0 },
		];
		let chart = players_by_platform(&rows);
		assert_eq!(chart.labels(), ["PC", "Mac"]);
		assert_eq!(chart.max(), 100.0);
	}

	#[test]
	fn leaderboard_keeps_source_order_and_truncates() {
		let records = vec![
			summary("2023", "B"),
			summary("2024", "A"),
			summary("2023", "C"),
			summary("2023", "A"),
		];
		let all: Vec<_> = leaderboard(&records, "2023", None).iter().map(|r| r.title.as_str()).collect();
		assert_eq!(all, ["B", "C", "A"]);
		let top: Vec<_> = leaderboard(&records, "2023", Some(2)).iter().map(|r| r.title.as_str()).collect();
		assert_eq!(top, ["B", "C"]);
		assert!(leaderboard(&records, "1999", Some(5)).is_empty());
		assert_eq!(years(&records), ["2023", "2024"]);
	}
}
