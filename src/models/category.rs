use std::fmt::{self, Display, Formatter};

const FILM_TOKEN: &str = "film";

/// Which shape the per-translation payloads take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	/// A single video; each payload is a flat list of quality variants.
	Film,
	/// Anything else; each payload points at a season listing.
	Series,
}

impl Category {
	/// Only the literal `film` token is a film, every other token is series-like.
	pub fn from_token(token: impl AsRef<str>) -> Self {
		if token.as_ref() == FILM_TOKEN {
			Category::Film
		} else {
			Category::Series
		}
	}

	pub fn is_film(self) -> bool {
		self == Category::Film
	}
}

impl Display for Category {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Category::Film => f.write_str("Film"),
			Category::Series => f.write_str("Serial"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_film_token_is_film() {
		assert_eq!(Category::from_token("film"), Category::Film);
		assert_eq!(Category::from_token("serial"), Category::Series);
		assert_eq!(Category::from_token("multserialy"), Category::Series);
		assert_eq!(Category::from_token("Film"), Category::Series);
		assert_eq!(Category::from_token(""), Category::Series);
	}

	#[test]
	fn display_matches_cli_labels() {
		assert_eq!(Category::Film.to_string(), "Film");
		assert_eq!(Category::Series.to_string(), "Serial");
	}
}
