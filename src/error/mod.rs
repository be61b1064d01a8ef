pub mod extract_error;
pub mod ok_or_malformed;

pub use extract_error::ExtractError;
pub use ok_or_malformed::OkOrMalformed;

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
