//! Seller Central consent URLs.
//!
//! The consent page lives at `{base_authorization_url}/apps/authorize/consent`. The optional
//! `redirect_url` (form-encoded, verbatim as configured) and `state` parameters are appended in
//! that order, and each is left out entirely when absent.

// self
use crate::{
	_prelude::*, flows::LwaClient, http::TokenHttpClient, marketplace::MarketplaceRegistry,
	oauth::TransportErrorMapper,
};

const REDIRECT_URL_PARAM: &str = "redirect_url";
const STATE_PARAM: &str = "state";

/// Builds the consent URL for `marketplace_id`.
///
/// Empty `state` values are treated as absent. Fails with
/// [`ConfigError::UnknownMarketplace`](crate::error::ConfigError::UnknownMarketplace) when the
/// registry does not know the marketplace.
pub fn authorization_url(
	registry: &MarketplaceRegistry,
	marketplace_id: &str,
	redirect_url: Option<&str>,
	state: Option<&str>,
) -> Result<Url> {
	let mut url = registry.resolve(marketplace_id)?.consent_url()?;
	let state = state.filter(|value| !value.is_empty());

	if redirect_url.is_some() || state.is_some() {
		let mut pairs = url.query_pairs_mut();

		if let Some(redirect) = redirect_url {
			pairs.append_pair(REDIRECT_URL_PARAM, redirect);
		}
		if let Some(state) = state {
			pairs.append_pair(STATE_PARAM, state);
		}
	}

	Ok(url)
}

impl<C, M> LwaClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Consent URL for the configured marketplace, redirecting to the configured redirect URL.
	pub fn authorization_url(&self, state: Option<&str>) -> Result<Url> {
		authorization_url(
			self.config.registry,
			&self.config.marketplace_id,
			Some(self.config.redirect_url.as_str()),
			state,
		)
	}

	/// Consent URL for the configured marketplace with an explicit (or no) redirect URL.
	pub fn authorization_url_with_redirect(
		&self,
		redirect_url: Option<&str>,
		state: Option<&str>,
	) -> Result<Url> {
		authorization_url(self.config.registry, &self.config.marketplace_id, redirect_url, state)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::ConfigError;

	#[test]
	fn bare_url_has_no_query() {
		let registry = MarketplaceRegistry::builtin();

		for marketplace in registry.iter() {
			let url = authorization_url(registry, marketplace.id, None, None)
				.expect("Consent URL should build for every registered marketplace.");

			assert_eq!(
				url.as_str(),
				format!("{}/apps/authorize/consent", marketplace.base_authorization_url)
			);
			assert!(url.query().is_none());
		}
	}

	#[test]
	fn redirect_is_encoded_and_precedes_state() {
		let redirect = Url::parse("https://app.example.com/amazon/callback?tenant=a b")
			.expect("Redirect fixture should parse.");
		let url = authorization_url(
			MarketplaceRegistry::builtin(),
			"A1PA6795UKMFR9",
			Some(redirect.as_str()),
			Some("s7ate"),
		)
		.expect("Consent URL should build.");

		assert_eq!(
			url.as_str(),
			"https://sellercentral-europe.amazon.com/apps/authorize/consent?redirect_url=https%3A%2F%2Fapp.example.com%2Famazon%2Fcallback%3Ftenant%3Da%2520b&state=s7ate"
		);
	}

	#[test]
	fn redirect_is_sent_as_given() {
		let url = authorization_url(
			MarketplaceRegistry::builtin(),
			"ATVPDKIKX0DER",
			Some("https://app.example.com"),
			None,
		)
		.expect("Consent URL should build.");

		assert_eq!(
			url.as_str(),
			"https://sellercentral.amazon.com/apps/authorize/consent?redirect_url=https%3A%2F%2Fapp.example.com"
		);
	}

	#[test]
	fn absent_parameters_are_omitted() {
		let registry = MarketplaceRegistry::builtin();
		let state_only = authorization_url(registry, "A1VC38T7YXB528", None, Some("xyz"))
			.expect("Consent URL should build.");

		assert_eq!(
			state_only.as_str(),
			"https://sellercentral.amazon.co.jp/apps/authorize/consent?state=xyz"
		);

		let empty_state = authorization_url(registry, "A1VC38T7YXB528", None, Some(""))
			.expect("Consent URL should build.");

		assert!(empty_state.query().is_none());
	}

	#[test]
	fn unknown_marketplace_is_a_config_error() {
		let err = authorization_url(MarketplaceRegistry::builtin(), "NOPE", None, None)
			.expect_err("Unknown marketplace should fail.");

		assert!(matches!(err, Error::Config(ConfigError::UnknownMarketplace(ref id)) if id == "NOPE"));
	}
}
