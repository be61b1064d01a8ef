use crate::decoder::TokenTable;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str =
	"Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_SESSION_COOKIE: &str = "ah3mgjr8vgfe84u86vcvu5gcp9";

/// Settings for talking to the player-data API.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
	/// Per-request timeout
	pub timeout: Duration,
	pub user_agent: String,
	/// Value of the `FILMIXNET` session cookie
	pub session_cookie: String,
	/// Junk tokens stripped from video blobs
	pub tokens: TokenTable,
}

impl Default for ProviderConfig {
	fn default() -> Self {
		Self {
			timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
			user_agent: DEFAULT_USER_AGENT.to_owned(),
			session_cookie: DEFAULT_SESSION_COOKIE.to_owned(),
			tokens: TokenTable::default(),
		}
	}
}

impl ProviderConfig {
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();
		self
	}

	pub fn with_session_cookie(mut self, session_cookie: impl Into<String>) -> Self {
		self.session_cookie = session_cookie.into();
		self
	}

	pub fn with_tokens(mut self, tokens: TokenTable) -> Self {
		self.tokens = tokens;
		self
	}

	pub(crate) fn cookie_header(&self) -> String {
		format!("FILMIXNET={}", self.session_cookie)
	}
}
