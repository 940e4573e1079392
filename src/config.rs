//! Application credentials, redirect target, marketplace, and hook configuration.
//!
//! [`AuthConfig`] is owned by the caller and shared read-only (behind `Arc`) by every flow.
//! The optional hooks in [`AuthHooks`] are the only extension points and run synchronously
//! on the calling task.

/// Builder API for assembling configurations.
pub mod builder;
/// Hook signatures and invocation helpers.
pub mod hooks;

pub use builder::*;
pub use hooks::*;

// self
use crate::{
	_prelude::*,
	auth::{MarketplaceId, Secret},
	error::ConfigError,
	marketplace::{Marketplace, MarketplaceRegistry},
	oauth::oauth2::RedirectUrl,
};

/// Login with Amazon token endpoint shared by every region.
pub const LWA_TOKEN_ENDPOINT: &str = "https://api.amazon.com/auth/o2/token";

/// LWA application credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApplicationKeys {
	/// LWA client identifier.
	pub lwa_client_id: String,
	/// LWA client secret; never logged.
	pub lwa_client_secret: Secret,
}
impl ApplicationKeys {
	/// Creates a key pair.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self { lwa_client_id: client_id.into(), lwa_client_secret: Secret::new(client_secret) }
	}
}
impl Debug for ApplicationKeys {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApplicationKeys")
			.field("lwa_client_id", &self.lwa_client_id)
			.field("lwa_client_secret", &self.lwa_client_secret)
			.finish()
	}
}

/// Plain, deserializable settings (env/file/secret-store friendly) that convert into an
/// [`AuthConfig`] without hooks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthSettings {
	/// LWA client identifier.
	pub lwa_client_id: String,
	/// LWA client secret.
	pub lwa_client_secret: Secret,
	/// Redirect URL registered for the application.
	pub redirect_url: RedirectUrl,
	/// Marketplace the consent page is served from.
	pub marketplace_id: MarketplaceId,
	/// Token endpoint override.
	#[serde(default)]
	pub token_endpoint: Option<Url>,
}
impl TryFrom<AuthSettings> for AuthConfig {
	type Error = ConfigError;

	fn try_from(settings: AuthSettings) -> Result<Self, Self::Error> {
		let mut builder = AuthConfig::builder()
			.client_id(settings.lwa_client_id)
			.client_secret(settings.lwa_client_secret.expose())
			.redirect_url(settings.redirect_url.as_str())
			.marketplace(settings.marketplace_id);

		if let Some(endpoint) = settings.token_endpoint {
			builder = builder.token_endpoint(endpoint);
		}

		builder.build()
	}
}

/// Validated configuration consumed by [`LwaClient`](crate::flows::LwaClient).
#[derive(Clone)]
pub struct AuthConfig {
	/// Application credentials.
	pub keys: ApplicationKeys,
	/// Redirect URL used by default for consent links and the code exchange.
	///
	/// Sent exactly as configured; the parsed form only validates it.
	pub redirect_url: RedirectUrl,
	/// Marketplace the consent page is served from.
	pub marketplace_id: MarketplaceId,
	/// Token endpoint receiving every grant.
	pub token_endpoint: Url,
	/// Registry used to resolve marketplaces.
	pub registry: &'static MarketplaceRegistry,
	/// Optional callbacks.
	pub hooks: AuthHooks,
}
impl AuthConfig {
	/// Creates a new builder.
	pub fn builder() -> AuthConfigBuilder {
		AuthConfigBuilder::new()
	}

	/// Resolves the configured marketplace.
	pub fn marketplace(&self) -> Result<&'static Marketplace, ConfigError> {
		self.registry.resolve(&self.marketplace_id)
	}
}
impl Debug for AuthConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthConfig")
			.field("keys", &self.keys)
			.field("redirect_url", &self.redirect_url)
			.field("marketplace_id", &self.marketplace_id)
			.field("token_endpoint", &self.token_endpoint)
			.field("hooks", &self.hooks)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn settings_deserialize_into_config() {
		let settings: AuthSettings = serde_json::from_str(
			r#"{
				"lwa_client_id": "amzn1.application-oa2-client.abc",
				"lwa_client_secret": "shh",
				"redirect_url": "https://app.example.com/amazon/callback",
				"marketplace_id": "A1F83G8C2ARO7P"
			}"#,
		)
		.expect("Settings fixture should deserialize.");
		let config = AuthConfig::try_from(settings).expect("Settings should build a config.");

		assert_eq!(config.token_endpoint.as_str(), LWA_TOKEN_ENDPOINT);
		assert_eq!(config.keys.lwa_client_id, "amzn1.application-oa2-client.abc");
		assert_eq!(
			config.marketplace().expect("Configured marketplace should resolve.").country_code,
			"UK"
		);
		assert!(!format!("{config:?}").contains("shh"));
	}

	#[test]
	fn redirect_url_keeps_its_configured_spelling() {
		let settings: AuthSettings = serde_json::from_str(
			r#"{
				"lwa_client_id": "amzn1.application-oa2-client.abc",
				"lwa_client_secret": "shh",
				"redirect_url": "https://app.example.com",
				"marketplace_id": "ATVPDKIKX0DER"
			}"#,
		)
		.expect("Settings fixture should deserialize.");
		let config = AuthConfig::try_from(settings).expect("Settings should build a config.");

		assert_eq!(config.redirect_url.as_str(), "https://app.example.com");
		assert_eq!(config.redirect_url.url().as_str(), "https://app.example.com/");
		assert!(serde_json::from_str::<AuthSettings>(
			r#"{
				"lwa_client_id": "id",
				"lwa_client_secret": "secret",
				"redirect_url": "not a url",
				"marketplace_id": "ATVPDKIKX0DER"
			}"#,
		)
		.is_err());
	}

	#[test]
	fn settings_with_unknown_marketplace_fail() {
		let settings = AuthSettings {
			lwa_client_id: "id".into(),
			lwa_client_secret: Secret::new("secret"),
			redirect_url: RedirectUrl::new("https://app.example.com/cb".into())
				.expect("Redirect fixture should parse."),
			marketplace_id: MarketplaceId::new("UNKNOWN").expect("Identifier should be valid."),
			token_endpoint: None,
		};

		assert!(matches!(AuthConfig::try_from(settings), Err(ConfigError::UnknownMarketplace(_))));
	}
}
