use crate::error::{ExtractError, Result};
use crate::fetcher::JsonFetcher;
use crate::models::{SeasonFolder, SeasonMap, SeriesTree};
use crate::quality::parse_quality_string;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Deserialize, Debug)]
struct ListingSeries {
	#[serde(default)]
	title: Option<String>,
	#[serde(default)]
	folder: Option<Vec<ListingFolder>>,
}

#[derive(Deserialize, Debug)]
struct ListingFolder {
	#[serde(default)]
	id: Value,
	#[serde(default)]
	title: Option<String>,
	#[serde(default)]
	file: Option<String>,
}

fn folder_id(id: &Value) -> String {
	match id {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Reshape a season listing into `title -> season id -> season`.
pub fn series_tree_from_listing(listing: Value) -> Result<SeriesTree> {
	if !listing.is_array() {
		return Err(ExtractError::MalformedResponse(
			"series listing is not an array".into(),
		));
	}
	let listing: Vec<ListingSeries> = serde_json::from_value(listing)?;

	let mut tree = SeriesTree::new();
	for series in listing {
		let mut seasons = SeasonMap::new();
		for folder in series.folder.unwrap_or_default() {
			let id = folder_id(&folder.id);
			let season = SeasonFolder {
				id: id.clone(),
				title: folder.title.unwrap_or_default().trim().to_owned(),
				quality: parse_quality_string(folder.file.as_deref().unwrap_or_default()),
			};
			seasons.insert(id, season);
		}
		let title = series.title.unwrap_or_default().trim().to_owned();
		tree.insert(title, seasons);
	}
	Ok(tree)
}

/// Fetches the listing a decoded series payload points at and builds its tree.
pub struct SeriesTreeBuilder<F> {
	fetcher: F,
}

impl<F: JsonFetcher> SeriesTreeBuilder<F> {
	pub fn new(fetcher: F) -> Self {
		Self { fetcher }
	}

	pub async fn build(&self, listing_url: &str) -> Result<SeriesTree> {
		if listing_url.is_empty() {
			return Err(ExtractError::EmptyPayload);
		}
		debug!("fetching series listing {}", listing_url);
		let listing = self.fetcher.fetch_json(listing_url).await?;
		series_tree_from_listing(listing)
	}
}
