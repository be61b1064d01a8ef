use crate::error::{ExtractError, Result};
use crate::models::Category;
use url::Url;

const PLAYER_DATA_PATH: &str = "/api/movies/player-data";

/// Numeric id in the last path segment, e.g. `173398` in
/// `.../film/triller/173398-some-title.html`. Zero when there is none.
pub fn stream_id_from_url(url: &str) -> u64 {
	let last = url.rsplit('/').next().unwrap_or_default();
	let id = last.split('-').next().unwrap_or_default();
	id.parse().unwrap_or(0)
}

/// The first path segment (`film`, `serial`, ...) decides the category.
pub fn category_from_url(url: &str) -> Result<Category> {
	let url = Url::parse(url)?;
	let token = url
		.path()
		.trim_matches('/')
		.split('/')
		.next()
		.unwrap_or_default();
	Ok(Category::from_token(token))
}

/// Player-data endpoint on the same origin as the page, cache-busted by `timestamp`.
pub fn player_data_url(page_url: &str, timestamp: u64) -> Result<String> {
	let mut url = Url::parse(page_url)?;
	if url.cannot_be_a_base() {
		return Err(ExtractError::InvalidUrl(page_url.to_owned()));
	}
	url.set_path(PLAYER_DATA_PATH);
	url.set_query(Some(&format!("t={}", timestamp)));
	url.set_fragment(None);
	Ok(url.into())
}

#[cfg(test)]
mod tests {
	use super::*;

	const FILM_URL: &str =
		"https://filmix.my/film/triller/173398-v-megan-k-vashim-uslugam-2024.html";

	#[test]
	fn id_is_leading_number_of_last_segment() {
		assert_eq!(stream_id_from_url(FILM_URL), 173398);
		assert_eq!(stream_id_from_url("https://site/serial/42"), 42);
		assert_eq!(stream_id_from_url("https://site/serial/title-42"), 0);
		assert_eq!(stream_id_from_url("https://site/serial/"), 0);
		assert_eq!(stream_id_from_url(""), 0);
	}

	#[test]
	fn category_comes_from_first_segment() {
		assert_eq!(category_from_url(FILM_URL).unwrap(), Category::Film);
		assert_eq!(
			category_from_url("https://filmix.my/serialy/drama/1-x.html").unwrap(),
			Category::Series
		);
		assert_eq!(category_from_url("https://filmix.my/").unwrap(), Category::Series);
		assert!(category_from_url("not a url").is_err());
	}

	#[test]
	fn player_data_url_keeps_origin() {
		assert_eq!(
			player_data_url(FILM_URL, 1700000000).unwrap(),
			"https://filmix.my/api/movies/player-data?t=1700000000"
		);
		assert_eq!(
			player_data_url("http://localhost:8080/film/1-a.html?x=1#frag", 5).unwrap(),
			"http://localhost:8080/api/movies/player-data?t=5"
		);
		assert!(player_data_url("mailto:someone@example.com", 1).is_err());
	}
}
