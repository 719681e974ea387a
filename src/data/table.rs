//! In-memory form of a delimited dataset: a header plus rows addressed by column name.

use std::collections::HashMap;

use super::error::DataResult;
use super::records::coerce_number;

/// The static datasets the dashboard reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dataset {
	GamesInfo,
	GamesPlatform,
	GenresGames,
	Backlogged,
	Completed,
	Rated,
	Retired,
}

impl Dataset {
	pub fn file_name(self) -> &'static str {
		match self {
			Dataset::GamesInfo => "GamesInfo.csv",
			Dataset::GamesPlatform => "GamesPlatform.csv",
			Dataset::GenresGames => "GenresGames.csv",
			Dataset::Backlogged => "Backlogged.csv",
			Dataset::Completed => "Completed.csv",
			Dataset::Rated => "Rated.csv",
			Dataset::Retired => "Retired.csv",
		}
	}
}

/// One source record. Column names are matched exactly, spaces and case included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetRow {
	cells: HashMap<String, String>,
}

impl DatasetRow {
	pub fn get(&self, column: &str) -> Option<&str> {
		self.cells.get(column).map(String::as_str)
	}

	/// Text value of a column, empty when the column is absent.
	pub fn text(&self, column: &str) -> String {
		self.get(column).unwrap_or_default().to_string()
	}

	/// Numeric value of a column; absent, blank and sentinel values read as 0.
	pub fn number(&self, column: &str) -> f64 {
		self.get(column).map(coerce_number).unwrap_or(0.0)
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DatasetRow {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			cells: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
	columns: Vec<String>,
	rows: Vec<DatasetRow>,
}

impl Table {
	/// Parse comma-delimited text whose first line is the header.
	///
	/// Short rows leave their trailing columns absent; extra cells beyond the
	/// header are ignored.
	pub fn parse(text: &str) -> DataResult<Self> {
		let mut reader = csv::ReaderBuilder::new()
			.has_headers(true)
			.flexible(true)
			.from_reader(text.as_bytes());

		let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
		let mut rows = Vec::new();
		for record in reader.records() {
			let record = record?;
			rows.push(
				columns
					.iter()
					.zip(record.iter())
					.map(|(c, v)| (c.clone(), v.to_string()))
					.collect(),
			);
		}
		Ok(Self { columns, rows })
	}

	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	pub fn rows(&self) -> &[DatasetRow] {
		&self.rows
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}
