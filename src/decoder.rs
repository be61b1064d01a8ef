use base64::{engine::general_purpose::STANDARD, Engine};
use std::borrow::Cow;
use tracing::debug;

const DEFAULT_DELIMITER: &str = ":<:";
const DEFAULT_TOKENS: &[&str] = &[
	":<:bzl3UHQwaWk0MkdXZVM3TDdB",
	":<:SURhQnQwOEM5V2Y3bFlyMGVI",
	":<:bE5qSTlWNVUxZ01uc3h0NFFy",
	":<:Mm93S0RVb0d6c3VMTkV5aE54",
	":<:MTluMWlLQnI4OXVic2tTNXpU",
];
const DEFAULT_MAX_PASSES: usize = 16;
const PREFIX_LEN: usize = 2;

/// The junk markers the player injects into its base64 payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
	delimiter: Cow<'static, str>,
	tokens: Vec<Cow<'static, str>>,
	max_passes: usize,
}

impl TokenTable {
	pub fn new<D, I, T>(delimiter: D, tokens: I) -> Self
	where
		D: Into<Cow<'static, str>>,
		I: IntoIterator<Item = T>,
		T: Into<Cow<'static, str>>,
	{
		Self {
			delimiter: delimiter.into(),
			tokens: tokens.into_iter().map(Into::into).collect(),
			max_passes: DEFAULT_MAX_PASSES,
		}
	}

	/// Upper bound on stripping passes, for inputs the table does not fully cover.
	pub fn with_max_passes(mut self, max_passes: usize) -> Self {
		self.max_passes = max_passes.max(1);
		self
	}

	pub fn delimiter(&self) -> &str {
		&self.delimiter
	}

	pub fn tokens(&self) -> impl Iterator<Item = &str> {
		self.tokens.iter().map(|t| t.as_ref())
	}

	pub fn max_passes(&self) -> usize {
		self.max_passes
	}
}

impl Default for TokenTable {
	fn default() -> Self {
		Self::new(DEFAULT_DELIMITER, DEFAULT_TOKENS.iter().copied())
	}
}

/// Reverses the player's blob obfuscation: a 2 character marker prefix,
/// escaped slashes and junk tokens layered over plain base64.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
	table: TokenTable,
}

impl Decoder {
	pub fn new(table: TokenTable) -> Self {
		Self { table }
	}

	pub fn table(&self) -> &TokenTable {
		&self.table
	}

	/// Decode a blob into plain text. Never fails: anything that is not valid
	/// base64 or UTF-8 after cleaning comes back as an empty string.
	pub fn decode(&self, blob: &str) -> String {
		let start = match blob.char_indices().nth(PREFIX_LEN) {
			Some((i, _)) => i,
			None if blob.chars().count() < PREFIX_LEN => return blob.to_owned(),
			None => blob.len(),
		};

		let mut clean = blob[start..].replace("\\/", "/");
		self.strip_tokens(&mut clean);

		let bytes = match STANDARD.decode(clean.as_bytes()) {
			Ok(bytes) => bytes,
			Err(err) => {
				debug!("blob is not valid base64: {}", err);
				return String::new();
			}
		};
		String::from_utf8(bytes).unwrap_or_else(|err| {
			debug!("decoded blob is not valid UTF-8: {}", err);
			String::new()
		})
	}

	fn strip_tokens(&self, clean: &mut String) {
		let delimiter = self.table.delimiter();
		let mut passes = 0;
		while clean.contains(delimiter) {
			if passes == self.table.max_passes() {
				debug!("giving up on junk tokens after {} passes", passes);
				break;
			}
			passes += 1;

			let before = clean.len();
			for token in self.table.tokens() {
				if clean.contains(token) {
					*clean = clean.replace(token, "");
				}
			}
			if clean.len() == before {
				debug!("unknown junk token left in blob");
				break;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn encode(text: &str) -> String {
		STANDARD.encode(text)
	}

	#[test]
	fn short_blobs_are_returned_unchanged() {
		let decoder = Decoder::default();
		assert_eq!(decoder.decode(""), "");
		assert_eq!(decoder.decode("x"), "x");
		assert_eq!(decoder.decode("é"), "é");
	}

	#[test]
	fn prefix_only_decodes_to_empty() {
		assert_eq!(Decoder::default().decode("#2"), "");
	}

	#[test]
	fn recovers_plain_base64_behind_any_prefix() {
		let decoder = Decoder::default();
		let text = "[720p]https://cdn.example/a.mp4,[1080p]https://cdn.example/b.mp4";
		for prefix in ["#2", "ab", "žý"] {
			assert_eq!(decoder.decode(&format!("{}{}", prefix, encode(text))), text);
		}
	}

	#[test]
	fn strips_concatenated_junk_tokens() {
		let decoder = Decoder::default();
		let text = "https://cdn.example/list/series.txt";
		let encoded = encode(text);
		let (head, tail) = encoded.split_at(8);
		let blob = format!(
			"#2{}{}{}:<:MTluMWlLQnI4OXVic2tTNXpU{}",
			head, DEFAULT_TOKENS[0], DEFAULT_TOKENS[3], tail
		);
		assert_eq!(decoder.decode(&blob), text);
	}

	#[test]
	fn unescapes_slashes_inside_the_base64_text() {
		// "???>" encodes to "Pz8/Pg==", which carries a slash.
		let blob = "#2Pz8\\/Pg==";
		assert_eq!(Decoder::default().decode(blob), "???>");
	}

	#[test]
	fn nested_tokens_are_removed_over_several_passes() {
		let decoder = Decoder::default();
		let text = "nested";
		let encoded = encode(text);
		// Removing the inner token leaves the outer one assembled.
		let outer = DEFAULT_TOKENS[1];
		let (left, right) = outer.split_at(10);
		let blob = format!("#2{}{}{}{}", encoded, left, DEFAULT_TOKENS[2], right);
		assert_eq!(decoder.decode(&blob), text);
	}

	#[test]
	fn unknown_tokens_do_not_hang_and_yield_empty() {
		let decoder = Decoder::default();
		let blob = format!("#2{}:<:unknownToken", encode("hello"));
		assert_eq!(decoder.decode(&blob), "");
	}

	#[test]
	fn invalid_base64_yields_empty() {
		assert_eq!(Decoder::default().decode("#2not base64!!"), "");
	}

	#[test]
	fn invalid_utf8_yields_empty() {
		let blob = format!("#2{}", STANDARD.encode([0xff, 0xfe, 0xfd]));
		assert_eq!(Decoder::default().decode(&blob), "");
	}

	#[test]
	fn custom_table_is_used() {
		let table = TokenTable::new("##", vec!["##junk".to_owned()]).with_max_passes(2);
		let decoder = Decoder::new(table);
		let blob = format!("xx##junk{}", encode("custom"));
		assert_eq!(decoder.decode(&blob), "custom");
		assert_eq!(decoder.table().max_passes(), 2);
	}
}
