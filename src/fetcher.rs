use crate::error::Result;
use futures::future::BoxFuture;
use serde_json::Value;

/// Fetches a URL and parses the body as JSON.
///
/// [`crate::requester::Requester`] is the network implementation; tests plug in
/// in-memory ones.
pub trait JsonFetcher: Send + Sync {
	fn fetch_json<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Value>>;
}

impl<T: JsonFetcher + ?Sized> JsonFetcher for &T {
	fn fetch_json<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Value>> {
		(**self).fetch_json(url)
	}
}
