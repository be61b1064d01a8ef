use crate::config::ProviderConfig;
use crate::decoder::Decoder;
use crate::error::Result;
use crate::extractor::StreamDataExtractor;
use crate::models::{Category, StreamDataset};
use crate::requester::Requester;
use crate::util::{category_from_url, player_data_url, stream_id_from_url};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Stream data for one page on the site.
pub struct Provider {
	page_url: String,
	stream_id: u64,
	requester: Requester,
	extractor: StreamDataExtractor,
}

impl Provider {
	pub fn new(page_url: impl Into<String>, config: ProviderConfig) -> Result<Self> {
		let page_url = page_url.into();
		let stream_id = stream_id_from_url(&page_url);
		let category = category_from_url(&page_url)?;
		let requester = Requester::new(&config)?;
		let extractor = StreamDataExtractor::with_decoder(category, Decoder::new(config.tokens));
		Ok(Provider {
			page_url,
			stream_id,
			requester,
			extractor,
		})
	}

	pub fn stream_id(&self) -> u64 {
		self.stream_id
	}

	pub fn category(&self) -> Category {
		self.extractor.category()
	}

	pub fn is_movie(&self) -> bool {
		self.category().is_film()
	}

	pub async fn get_stream_data(&self) -> Result<StreamDataset> {
		let timestamp = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map(|d| d.as_secs())
			.unwrap_or_default();
		let url = player_data_url(&self.page_url, timestamp)?;
		info!("fetching {} stream {}", self.category(), self.stream_id);
		let response = self.requester.get_player_data(&url, self.stream_id).await?;
		self.extractor.extract(&response, &self.requester).await
	}
}
