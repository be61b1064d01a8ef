use super::Category;
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Quality label (e.g. `1080p`) to playback value.
pub type QualityMap = BTreeMap<String, String>;

/// Seasons of one series keyed by folder id.
pub type SeasonMap = BTreeMap<String, SeasonFolder>;

/// Series title to its seasons.
pub type SeriesTree = BTreeMap<String, SeasonMap>;

/// One season of a series listing. Serialized as `{"title", "quality"}`;
/// the id is the key of the enclosing map.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SeasonFolder {
	#[serde(skip)]
	pub id: String,
	pub title: String,
	pub quality: QualityMap,
}

/// Per-translation stream data. A dataset holds either film or series
/// entries, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamDataset {
	Film(BTreeMap<String, QualityMap>),
	Series(BTreeMap<String, SeriesTree>),
}

impl StreamDataset {
	pub fn empty(category: Category) -> Self {
		match category {
			Category::Film => StreamDataset::Film(BTreeMap::new()),
			Category::Series => StreamDataset::Series(BTreeMap::new()),
		}
	}

	pub fn category(&self) -> Category {
		match self {
			StreamDataset::Film(_) => Category::Film,
			StreamDataset::Series(_) => Category::Series,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			StreamDataset::Film(films) => films.len(),
			StreamDataset::Series(series) => series.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn translations(&self) -> Vec<&str> {
		match self {
			StreamDataset::Film(films) => films.keys().map(String::as_str).collect(),
			StreamDataset::Series(series) => series.keys().map(String::as_str).collect(),
		}
	}

	pub fn film(&self, translation: &str) -> Option<&QualityMap> {
		match self {
			StreamDataset::Film(films) => films.get(translation),
			StreamDataset::Series(_) => None,
		}
	}

	pub fn series(&self, translation: &str) -> Option<&SeriesTree> {
		match self {
			StreamDataset::Series(series) => series.get(translation),
			StreamDataset::Film(_) => None,
		}
	}
}

impl Serialize for StreamDataset {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			StreamDataset::Film(films) => films.serialize(serializer),
			StreamDataset::Series(series) => series.serialize(serializer),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn quality(pairs: &[(&str, &str)]) -> QualityMap {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn season_serializes_title_and_quality() {
		let season = SeasonFolder {
			id: "1".into(),
			title: "S1".into(),
			quality: quality(&[("HD", "x"), ("title", "u")]),
		};
		assert_eq!(
			serde_json::to_value(&season).unwrap(),
			json!({"title": "S1", "quality": {"HD": "x", "title": "u"}})
		);
	}

	#[test]
	fn empty_dataset_keeps_category() {
		let films = StreamDataset::empty(Category::Film);
		assert!(films.is_empty());
		assert_eq!(films.category(), Category::Film);
		assert_eq!(serde_json::to_value(&films).unwrap(), json!({}));
		assert_eq!(StreamDataset::empty(Category::Series).category(), Category::Series);
	}

	#[test]
	fn lookups_respect_the_variant() {
		let mut films = BTreeMap::new();
		films.insert("Original".to_owned(), quality(&[("HD", "u1")]));
		let dataset = StreamDataset::Film(films);
		assert_eq!(dataset.translations(), vec!["Original"]);
		assert_eq!(dataset.film("Original").unwrap()["HD"], "u1");
		assert!(dataset.series("Original").is_none());
	}
}
