use crate::models::QualityMap;

lazy_static! {
	static ref QUALITY_LABEL_REGEX: regex::Regex = regex::Regex::new(r"\[(.*?)\]").unwrap();
}

/// Build a label to value map from items like `[1080p]https://...`.
///
/// The first bracketed label of an item is its key; the value is the item
/// with that bracket text removed and trimmed. Items without a label are
/// skipped, and a repeated label keeps the last value.
pub fn parse_quality_list<I, S>(items: I) -> QualityMap
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut quality_list = QualityMap::new();
	for item in items {
		let item = item.as_ref();
		let Some(caps) = QUALITY_LABEL_REGEX.captures(item) else {
			continue;
		};
		let label = caps[1].to_owned();
		let value = item.replace(&caps[0], "").trim().to_owned();
		quality_list.insert(label, value);
	}
	quality_list
}

/// [`parse_quality_list`] over a comma separated string.
pub fn parse_quality_string(text: &str) -> QualityMap {
	parse_quality_list(text.split(','))
}
