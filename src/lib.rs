#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod decoder;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod provider;
pub mod quality;
pub mod requester;
pub mod series;
pub mod util;

pub use config::ProviderConfig;
pub use decoder::{Decoder, TokenTable};
pub use error::{ExtractError, Result};
pub use extractor::{Extraction, StreamDataExtractor, TranslationOutcome};
pub use fetcher::JsonFetcher;
pub use models::{Category, QualityMap, SeasonFolder, SeriesTree, StreamDataset};
pub use provider::Provider;
pub use quality::parse_quality_list;
pub use series::SeriesTreeBuilder;
