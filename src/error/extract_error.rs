use thiserror::Error;

/// Everything that can go wrong while turning a player-data response into a dataset.
///
/// Decode failures and unlabeled quality items are not errors; they are
/// absorbed where they happen.
#[derive(Error, Debug)]
pub enum ExtractError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("status code was not 2xx: {status} ({url})")]
	UnexpectedStatus { status: u16, url: String },

	#[error("invalid JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error("malformed response: {0}")]
	MalformedResponse(String),

	#[error("invalid URL: {0}")]
	InvalidUrl(String),

	#[error("decoded payload was empty")]
	EmptyPayload,
}

impl From<url::ParseError> for ExtractError {
	fn from(err: url::ParseError) -> Self {
		ExtractError::InvalidUrl(err.to_string())
	}
}
