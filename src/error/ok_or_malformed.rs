use super::extract_error::ExtractError;

pub trait OkOrMalformed<T> {
	fn ok_or_malformed<S: ToString>(self, msg: S) -> Result<T, ExtractError>;
}

impl<T> OkOrMalformed<T> for Option<T> {
	fn ok_or_malformed<S: ToString>(self, msg: S) -> Result<T, ExtractError> {
		self.ok_or_else(|| ExtractError::MalformedResponse(msg.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn none_becomes_malformed_response() {
		let err = None::<u8>.ok_or_malformed("missing field").unwrap_err();
		assert!(matches!(err, ExtractError::MalformedResponse(ref m) if m == "missing field"));
	}

	#[test]
	fn some_passes_through() {
		assert_eq!(Some(3).ok_or_malformed("unused").unwrap(), 3);
	}
}
