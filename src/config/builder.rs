// self
use crate::{
	_prelude::*,
	auth::{MarketplaceId, Secret, TokenResult},
	config::{
		ApplicationKeys, AuthConfig, AuthHooks, HookResult, LWA_TOKEN_ENDPOINT, ResponseHook,
		TokensSavedHook,
	},
	error::ConfigError,
	http::RawResponse,
	marketplace::MarketplaceRegistry,
	oauth::oauth2::RedirectUrl,
};

/// Builder for [`AuthConfig`] values.
#[derive(Debug)]
pub struct AuthConfigBuilder {
	client_id: Option<String>,
	client_secret: Option<Secret>,
	redirect_url: Option<String>,
	marketplace_id: Option<MarketplaceId>,
	token_endpoint: Option<Url>,
	registry: &'static MarketplaceRegistry,
	hooks: AuthHooks,
}
impl AuthConfigBuilder {
	/// Creates an empty builder backed by the built-in marketplace registry.
	pub fn new() -> Self {
		Self {
			client_id: None,
			client_secret: None,
			redirect_url: None,
			marketplace_id: None,
			token_endpoint: None,
			registry: MarketplaceRegistry::builtin(),
			hooks: AuthHooks::default(),
		}
	}

	/// Sets the LWA client identifier.
	pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Sets the LWA client secret.
	pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
		self.client_secret = Some(Secret::new(client_secret));

		self
	}

	/// Sets both credentials from an [`ApplicationKeys`] pair.
	pub fn keys(mut self, keys: ApplicationKeys) -> Self {
		self.client_id = Some(keys.lwa_client_id);
		self.client_secret = Some(keys.lwa_client_secret);

		self
	}

	/// Sets the redirect URL registered for the application.
	///
	/// The text is kept verbatim for the consent link and the `redirect_uri` form field, so pass
	/// the exact string registered with Amazon. A [`Url`] works too but is already normalized.
	pub fn redirect_url(mut self, url: impl AsRef<str>) -> Self {
		self.redirect_url = Some(url.as_ref().to_owned());

		self
	}

	/// Sets the marketplace identifier.
	pub fn marketplace(mut self, marketplace_id: MarketplaceId) -> Self {
		self.marketplace_id = Some(marketplace_id);

		self
	}

	/// Overrides the token endpoint (defaults to [`LWA_TOKEN_ENDPOINT`]).
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Overrides the marketplace registry.
	pub fn registry(mut self, registry: &'static MarketplaceRegistry) -> Self {
		self.registry = registry;

		self
	}

	/// Registers the save-tokens hook.
	pub fn on_tokens_saved<F>(mut self, hook: F) -> Self
	where
		F: 'static + Fn(&TokenResult) -> HookResult + Send + Sync,
	{
		let hook: TokensSavedHook = Arc::new(hook);

		self.hooks.on_tokens_saved = Some(hook);

		self
	}

	/// Registers the authentication-error hook.
	pub fn on_auth_error<F>(mut self, hook: F) -> Self
	where
		F: 'static + Fn(&RawResponse) -> HookResult + Send + Sync,
	{
		let hook: ResponseHook = Arc::new(hook);

		self.hooks.on_auth_error = Some(hook);

		self
	}

	/// Registers the any-response hook.
	pub fn on_any_response<F>(mut self, hook: F) -> Self
	where
		F: 'static + Fn(&RawResponse) -> HookResult + Send + Sync,
	{
		let hook: ResponseHook = Arc::new(hook);

		self.hooks.on_any_response = Some(hook);

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<AuthConfig, ConfigError> {
		let lwa_client_id = self
			.client_id
			.filter(|id| !id.trim().is_empty())
			.ok_or(ConfigError::MissingClientId)?;
		let lwa_client_secret = self
			.client_secret
			.filter(|secret| !secret.is_empty())
			.ok_or(ConfigError::MissingClientSecret)?;
		let redirect_url = self.redirect_url.ok_or(ConfigError::MissingRedirectUrl)?;
		let redirect_url = RedirectUrl::new(redirect_url)
			.map_err(|source| ConfigError::InvalidRedirect { source })?;
		let marketplace_id = self.marketplace_id.ok_or(ConfigError::MissingMarketplace)?;

		self.registry.resolve(&marketplace_id)?;

		let token_endpoint = match self.token_endpoint {
			Some(url) => url,
			None => Url::parse(LWA_TOKEN_ENDPOINT)
				.map_err(|source| ConfigError::InvalidTokenEndpoint { source })?,
		};

		Ok(AuthConfig {
			keys: ApplicationKeys { lwa_client_id, lwa_client_secret },
			redirect_url,
			marketplace_id,
			token_endpoint,
			registry: self.registry,
			hooks: self.hooks,
		})
	}
}
impl Default for AuthConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}
