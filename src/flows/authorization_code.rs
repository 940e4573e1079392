//! Consent redirect handling and the `authorization_code` exchange.

// self
use crate::{
	_prelude::*,
	auth::{self, RedirectPayload, TokenResult},
	flows::LwaClient,
	http::TokenHttpClient,
	oauth::{OAuth2Facade, TransportErrorMapper},
	obs::FlowKind,
};

impl<C, M> LwaClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Validates the redirect `state` and exchanges the returned authorization code.
	///
	/// A state mismatch fails with [`Error::StateMismatch`] before any request is sent.
	pub async fn tokens_from_redirect(
		&self,
		expected_state: &str,
		payload: &RedirectPayload,
	) -> Result<TokenResult> {
		self.observe(FlowKind::AuthorizationCode, "tokens_from_redirect", async {
			auth::validate_state(expected_state, &payload.state)?;

			self.exchange_code(&payload.authorization_code).await
		})
		.await
	}

	/// Parses the redirect URL Amazon sent the user agent to, then behaves like
	/// [`LwaClient::tokens_from_redirect`].
	pub async fn tokens_from_redirect_url(
		&self,
		expected_state: &str,
		redirect: &Url,
	) -> Result<TokenResult> {
		self.observe(FlowKind::AuthorizationCode, "tokens_from_redirect_url", async {
			let payload = RedirectPayload::from_redirect_url(redirect)?;

			auth::validate_state(expected_state, &payload.state)?;

			self.exchange_code(&payload.authorization_code).await
		})
		.await
	}

	/// Exchanges an authorization code using the configured redirect URL.
	pub async fn tokens_from_authorization_code(&self, code: &str) -> Result<TokenResult> {
		self.observe(FlowKind::AuthorizationCode, "tokens_from_authorization_code", async {
			self.exchange_code(code).await
		})
		.await
	}

	async fn exchange_code(&self, code: &str) -> Result<TokenResult> {
		let facade = self.facade()?;

		facade.exchange_authorization_code(code, &self.config.redirect_url).await
	}
}
