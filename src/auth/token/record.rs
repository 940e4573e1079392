//! Immutable token results, expiry helpers, and builders.

// self
use crate::{_prelude::*, auth::token::secret::Secret};

/// Token type LWA issues for every grant.
pub const BEARER: &str = "bearer";

/// Errors produced by [`TokenResultBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum TokenResultBuilderError {
	/// Issued when no access token value was provided.
	#[error("Access token is required.")]
	MissingAccessToken,
	/// Issued when no expiry (absolute or relative) was configured.
	#[error("Expiry must be supplied via expires_at or expires_in.")]
	MissingExpiry,
	/// Issued when the expiry would precede the issued-at instant.
	#[error("Expiry must not precede the issued-at instant.")]
	ExpiryBeforeIssue,
	/// Issued when `issued_at + expires_in` falls outside the representable date range.
	#[error("Expiry falls outside the supported date range.")]
	ExpiryOutOfRange,
}

/// Tokens issued by a successful exchange.
///
/// `expires_at` is stamped when the response is received, never taken from the
/// server verbatim. The access token is opaque; nothing here inspects its contents.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenResult {
	/// Access token secret; callers must avoid logging it.
	pub access_token: Secret,
	/// Refresh token, absent for grantless tokens.
	pub refresh_token: Option<Secret>,
	/// Token type reported by the server (`bearer`).
	pub token_type: String,
	/// Instant the response was received.
	pub issued_at: OffsetDateTime,
	/// Absolute expiry instant.
	pub expires_at: OffsetDateTime,
}
impl TokenResult {
	/// Returns a builder for constructing token results.
	pub fn builder() -> TokenResultBuilder {
		TokenResultBuilder::default()
	}

	/// Returns `true` if the access token is expired at the provided instant.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at
	}

	/// Returns `true` if the access token is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}

	/// Returns `true` if the token expires within `window` of `instant`.
	pub fn expires_within(&self, window: Duration, instant: OffsetDateTime) -> bool {
		self.expires_at - instant <= window
	}

	/// Remaining lifetime at `instant`, clamped at zero.
	pub fn remaining_at(&self, instant: OffsetDateTime) -> Duration {
		let remaining = self.expires_at - instant;

		if remaining.is_negative() { Duration::ZERO } else { remaining }
	}
}
impl Debug for TokenResult {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenResult")
			.field("access_token", &"<redacted>")
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
			.field("token_type", &self.token_type)
			.field("issued_at", &self.issued_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

/// Builder for [`TokenResult`].
#[derive(Clone, Debug, Default)]
pub struct TokenResultBuilder {
	access_token: Option<Secret>,
	refresh_token: Option<Secret>,
	token_type: Option<String>,
	issued_at: Option<OffsetDateTime>,
	expires_at: Option<OffsetDateTime>,
	expires_in: Option<Duration>,
}
impl TokenResultBuilder {
	/// Sets the issued-at instant.
	pub fn issued_at(mut self, instant: OffsetDateTime) -> Self {
		self.issued_at = Some(instant);

		self
	}

	/// Sets an absolute expiry instant.
	pub fn expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.expires_at = Some(instant);

		self
	}

	/// Sets a relative expiry duration from the issued instant.
	pub fn expires_in(mut self, duration: Duration) -> Self {
		self.expires_in = Some(duration);

		self
	}

	/// Provides the access token value.
	pub fn access_token(mut self, token: impl Into<String>) -> Self {
		self.access_token = Some(Secret::new(token));

		self
	}

	/// Provides the refresh token value.
	pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
		self.refresh_token = Some(Secret::new(token));

		self
	}

	/// Overrides the token type (defaults to `bearer`).
	pub fn token_type(mut self, token_type: impl Into<String>) -> Self {
		self.token_type = Some(token_type.into());

		self
	}

	/// Consumes the builder and produces a [`TokenResult`].
	pub fn build(self) -> Result<TokenResult, TokenResultBuilderError> {
		let access_token = self.access_token.ok_or(TokenResultBuilderError::MissingAccessToken)?;
		let issued_at = self.issued_at.unwrap_or_else(OffsetDateTime::now_utc);
		let expires_at = match (self.expires_at, self.expires_in) {
			(Some(instant), _) => instant,
			(None, Some(delta)) => issued_at
				.checked_add(delta)
				.ok_or(TokenResultBuilderError::ExpiryOutOfRange)?,
			(None, None) => return Err(TokenResultBuilderError::MissingExpiry),
		};

		if expires_at < issued_at {
			return Err(TokenResultBuilderError::ExpiryBeforeIssue);
		}

		Ok(TokenResult {
			access_token,
			refresh_token: self.refresh_token,
			token_type: self.token_type.unwrap_or_else(|| BEARER.into()),
			issued_at,
			expires_at,
		})
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn builder_handles_relative_expiry() {
		let result = TokenResult::builder()
			.access_token("Atza|access")
			.refresh_token("Atzr|refresh")
			.issued_at(macros::datetime!(2025-01-01 00:00 UTC))
			.expires_in(Duration::seconds(3600))
			.build()
			.expect("Token result builder should support relative expiry calculations.");

		assert_eq!(result.expires_at, macros::datetime!(2025-01-01 01:00 UTC));
		assert_eq!(result.token_type, BEARER);
		assert_eq!(result.refresh_token.as_ref().map(Secret::expose), Some("Atzr|refresh"));
	}

	#[test]
	fn builder_rejects_missing_fields_and_backwards_expiry() {
		assert_eq!(
			TokenResult::builder().expires_in(Duration::minutes(5)).build(),
			Err(TokenResultBuilderError::MissingAccessToken)
		);
		assert_eq!(
			TokenResult::builder().access_token("a").build(),
			Err(TokenResultBuilderError::MissingExpiry)
		);
		assert_eq!(
			TokenResult::builder()
				.access_token("a")
				.issued_at(macros::datetime!(2025-01-01 01:00 UTC))
				.expires_at(macros::datetime!(2025-01-01 00:00 UTC))
				.build(),
			Err(TokenResultBuilderError::ExpiryBeforeIssue)
		);
		assert_eq!(
			TokenResult::builder()
				.access_token("a")
				.issued_at(macros::datetime!(2025-01-01 00:00 UTC))
				.expires_in(Duration::MAX)
				.build(),
			Err(TokenResultBuilderError::ExpiryOutOfRange)
		);
	}

	#[test]
	fn expiry_helpers_track_the_clock() {
		let issued = macros::datetime!(2025-01-01 00:00 UTC);
		let result = TokenResult::builder()
			.access_token("a")
			.issued_at(issued)
			.expires_in(Duration::minutes(60))
			.build()
			.expect("Token result fixture should build.");

		assert!(!result.is_expired_at(macros::datetime!(2025-01-01 00:59 UTC)));
		assert!(result.is_expired_at(macros::datetime!(2025-01-01 01:00 UTC)));
		assert!(result.expires_within(Duration::minutes(5), macros::datetime!(2025-01-01 00:56 UTC)));
		assert!(!result.expires_within(Duration::minutes(5), issued));
		assert_eq!(result.remaining_at(issued), Duration::minutes(60));
		assert_eq!(result.remaining_at(macros::datetime!(2025-01-01 02:00 UTC)), Duration::ZERO);
	}

	#[test]
	fn debug_output_redacts_tokens() {
		let result = TokenResult::builder()
			.access_token("Atza|visible?")
			.refresh_token("Atzr|visible?")
			.expires_in(Duration::minutes(1))
			.build()
			.expect("Token result fixture should build.");
		let rendered = format!("{result:?}");

		assert!(!rendered.contains("visible?"));
		assert!(rendered.contains("<redacted>"));
	}
}
