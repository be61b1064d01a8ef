use crate::decoder::Decoder;
use crate::error::{ExtractError, OkOrMalformed, Result};
use crate::fetcher::JsonFetcher;
use crate::models::{Category, QualityMap, SeriesTree, StreamDataset};
use crate::quality::parse_quality_string;
use crate::series::SeriesTreeBuilder;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{info, warn};

const SUCCESS_STATUS: &str = "success";
const VIDEO_PATH: [&str; 3] = ["message", "translations", "video"];

/// What came of a single translation.
#[derive(Debug)]
pub struct TranslationOutcome<T> {
	pub translation: String,
	pub result: Result<T>,
}

/// Every translation's outcome, failures included.
#[derive(Debug)]
pub enum Extraction {
	Film(Vec<TranslationOutcome<QualityMap>>),
	Series(Vec<TranslationOutcome<SeriesTree>>),
}

impl Extraction {
	fn empty(category: Category) -> Self {
		match category {
			Category::Film => Extraction::Film(Vec::new()),
			Category::Series => Extraction::Series(Vec::new()),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Extraction::Film(outcomes) => outcomes.len(),
			Extraction::Series(outcomes) => outcomes.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Translations that failed, with the reason.
	pub fn failures(&self) -> Vec<(&str, &ExtractError)> {
		fn collect<T>(outcomes: &[TranslationOutcome<T>]) -> Vec<(&str, &ExtractError)> {
			outcomes
				.iter()
				.filter_map(|o| o.result.as_ref().err().map(|e| (o.translation.as_str(), e)))
				.collect()
		}
		match self {
			Extraction::Film(outcomes) => collect(outcomes),
			Extraction::Series(outcomes) => collect(outcomes),
		}
	}

	/// Keep the successful translations; failed ones are logged and dropped.
	pub fn into_dataset(self) -> StreamDataset {
		fn keep<T>(outcomes: Vec<TranslationOutcome<T>>) -> BTreeMap<String, T> {
			let mut kept = BTreeMap::new();
			for outcome in outcomes {
				match outcome.result {
					Ok(data) => {
						kept.insert(outcome.translation, data);
					}
					Err(err) => warn!("failed to process {}: {}", outcome.translation, err),
				}
			}
			kept
		}
		match self {
			Extraction::Film(outcomes) => StreamDataset::Film(keep(outcomes)),
			Extraction::Series(outcomes) => StreamDataset::Series(keep(outcomes)),
		}
	}
}

/// Turns a player-data response into per-translation stream data.
#[derive(Debug, Clone)]
pub struct StreamDataExtractor {
	category: Category,
	decoder: Decoder,
}

impl StreamDataExtractor {
	pub fn new(category: Category) -> Self {
		Self::with_decoder(category, Decoder::default())
	}

	pub fn with_decoder(category: Category, decoder: Decoder) -> Self {
		Self { category, decoder }
	}

	pub fn category(&self) -> Category {
		self.category
	}

	/// Extract the dataset, skipping translations whose series listing could
	/// not be fetched or parsed.
	///
	/// A response whose `type` is not `success` gives an empty dataset. Only
	/// a structurally broken response is an error.
	pub async fn extract<F: JsonFetcher>(
		&self,
		response: &Value,
		fetcher: F,
	) -> Result<StreamDataset> {
		let extraction = self.extract_outcomes(response, fetcher).await?;
		let total = extraction.len();
		let dataset = extraction.into_dataset();
		info!(
			"extracted {} of {} translations ({})",
			dataset.len(),
			total,
			self.category
		);
		Ok(dataset)
	}

	/// Like [`Self::extract`], but reports each translation's outcome instead
	/// of dropping failures.
	pub async fn extract_outcomes<F: JsonFetcher>(
		&self,
		response: &Value,
		fetcher: F,
	) -> Result<Extraction> {
		let root = response
			.as_object()
			.ok_or_malformed("response is not a JSON object")?;

		if root.get("type").and_then(Value::as_str) != Some(SUCCESS_STATUS) {
			info!("player data was not a success response");
			return Ok(Extraction::empty(self.category));
		}

		let blobs = video_blobs(root)?;
		match self.category {
			Category::Film => {
				let mut outcomes = Vec::with_capacity(blobs.len());
				for (translation, blob) in blobs {
					let blob = blob_str(&translation, blob)?;
					let quality = parse_quality_string(&self.decoder.decode(blob));
					outcomes.push(TranslationOutcome {
						translation,
						result: Ok(quality),
					});
				}
				Ok(Extraction::Film(outcomes))
			}
			Category::Series => {
				let builder = SeriesTreeBuilder::new(fetcher);
				let mut outcomes = Vec::with_capacity(blobs.len());
				for (translation, blob) in blobs {
					let result = match blob_str(&translation, blob) {
						Ok(blob) => builder.build(&self.decoder.decode(blob)).await,
						Err(err) => Err(err),
					};
					outcomes.push(TranslationOutcome {
						translation,
						result,
					});
				}
				Ok(Extraction::Series(outcomes))
			}
		}
	}
}

/// The `message.translations.video` entries. Absent levels mean no videos;
/// `null` or otherwise non-object levels mean a broken response.
fn video_blobs(root: &Map<String, Value>) -> Result<Vec<(String, &Value)>> {
	let mut level = root;
	for key in VIDEO_PATH {
		match level.get(key) {
			None => return Ok(Vec::new()),
			Some(value) => {
				level = value
					.as_object()
					.ok_or_malformed(format!("'{}' is not a JSON object", key))?;
			}
		}
	}

	Ok(level
		.iter()
		.map(|(translation, blob)| (translation.clone(), blob))
		.collect())
}

fn blob_str<'a>(translation: &str, blob: &'a Value) -> Result<&'a str> {
	blob.as_str()
		.ok_or_malformed(format!("video for '{}' is not a string", translation))
}
