use crate::config::ProviderConfig;
use crate::error::{ExtractError, Result};
use crate::fetcher::JsonFetcher;
use futures::future::{BoxFuture, FutureExt};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

/// Owns the HTTP session shared by the player-data and series listing requests.
pub struct Requester {
	net: Client,
	cookie: String,
}

impl Requester {
	pub fn new(config: &ProviderConfig) -> Result<Requester> {
		let net = Client::builder()
			.timeout(config.timeout)
			.user_agent(config.user_agent.as_str())
			.build()?;
		Ok(Requester {
			net,
			cookie: config.cookie_header(),
		})
	}

	async fn read_json(response: Response) -> Result<Value> {
		let status = response.status();
		if !status.is_success() {
			return Err(ExtractError::UnexpectedStatus {
				status: status.as_u16(),
				url: response.url().to_string(),
			});
		}

		let text = response.text().await?;
		let json = serde_json::from_str::<Value>(&text)?;
		Ok(json)
	}

	fn player_data_headers(&self) -> Result<HeaderMap> {
		let mut headers = HeaderMap::new();
		headers.insert("x-requested-with", HeaderValue::from_static("XMLHttpRequest"));
		let cookie = HeaderValue::from_str(&self.cookie)
			.map_err(|e| ExtractError::MalformedResponse(format!("bad session cookie: {}", e)))?;
		headers.insert(COOKIE, cookie);
		Ok(headers)
	}

	/// Ask the player-data endpoint for every translation of `stream_id`.
	pub async fn get_player_data(&self, player_data_url: &str, stream_id: u64) -> Result<Value> {
		debug!("requesting player data for {} from {}", stream_id, player_data_url);
		let post_id = stream_id.to_string();
		let response = self
			.net
			.post(player_data_url)
			.headers(self.player_data_headers()?)
			.form(&[("post_id", post_id.as_str()), ("showfull", "true")])
			.send()
			.await?;
		Self::read_json(response).await
	}

	pub async fn get_json(&self, url: &str) -> Result<Value> {
		debug!("requesting {}", url);
		let response = self.net.get(url).send().await?;
		Self::read_json(response).await
	}
}

impl JsonFetcher for Requester {
	fn fetch_json<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Value>> {
		self.get_json(url).boxed()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn player_data_headers_carry_cookie() {
		let config = ProviderConfig::default().with_session_cookie("abc");
		let requester = Requester::new(&config).unwrap();
		let headers = requester.player_data_headers().unwrap();
		assert_eq!(headers[COOKIE], "FILMIXNET=abc");
		assert_eq!(headers["x-requested-with"], "XMLHttpRequest");
	}

	#[test]
	fn invalid_cookie_is_rejected() {
		let config = ProviderConfig::default().with_session_cookie("bad\nvalue");
		let requester = Requester::new(&config).unwrap();
		assert!(requester.player_data_headers().is_err());
	}

	#[tokio::test]
	async fn unreachable_listing_is_an_http_error() {
		let config = ProviderConfig::default();
		let requester = Requester::new(&config).unwrap();
		let err = requester.fetch_json("http://127.0.0.1:9/list.txt").await.unwrap_err();
		assert!(matches!(err, ExtractError::Http(_)));
	}
}
