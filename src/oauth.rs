//! Internal OAuth client facade over the `oauth2` crate.
//!
//! Every grant goes through the same settle step: take the captured raw response, hand it to
//! `on_any_response`, then route failures to the classifier (non-2xx responses) or the
//! transport mapper (no response at all).

pub use oauth2;

// std
use std::borrow::Cow;
// crates.io
use oauth2::{
	AuthType, AuthorizationCode, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
	HttpClientError, RedirectUrl, RefreshToken, RequestTokenError, Scope, TokenResponse,
	TokenUrl,
	basic::{BasicClient, BasicRequestTokenError, BasicTokenResponse},
};
// self
use crate::{
	_prelude::*,
	auth::{GrantType, TokenResult},
	classify,
	config::{AuthConfig, AuthHooks},
	error::{ConfigError, ResponseError, TransportError},
	http::{RawResponse, ResponseCapture, TokenHttpClient},
};

type ConfiguredBasicClient =
	BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;
type FacadeFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;
type FacadeRequestError<E> = BasicRequestTokenError<HttpClientError<E>>;

/// Maps HTTP transport failures (no usable response) into crate [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an [`HttpClientError`] emitted by the transport into a crate error.
	fn map_transport_error(
		&self,
		grant: GrantType,
		response: Option<&RawResponse>,
		error: HttpClientError<E>,
	) -> Error;
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(
		&self,
		_grant: GrantType,
		_response: Option<&RawResponse>,
		err: HttpClientError<ReqwestError>,
	) -> Error {
		match err {
			HttpClientError::Reqwest(inner) if inner.is_builder() =>
				ConfigError::from(*inner).into(),
			HttpClientError::Reqwest(inner) => TransportError::from(*inner).into(),
			HttpClientError::Http(inner) => ConfigError::from(inner).into(),
			HttpClientError::Io(inner) => TransportError::Io(inner).into(),
			HttpClientError::Other(message) =>
				TransportError::Network { source: message.into() }.into(),
			_ => TransportError::Network {
				source: "HTTP client failed while calling the token endpoint.".into(),
			}
			.into(),
		}
	}
}

pub(crate) trait OAuth2Facade {
	fn exchange_authorization_code<'a>(
		&'a self,
		code: &'a str,
		redirect_uri: &'a RedirectUrl,
	) -> FacadeFuture<'a, TokenResult>;

	fn refresh_token<'a>(&'a self, refresh_token: &'a str) -> FacadeFuture<'a, TokenResult>;

	fn exchange_client_credentials<'a>(&'a self, scope: &'a str) -> FacadeFuture<'a, TokenResult>;
}

pub(crate) struct BasicFacade<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	oauth_client: ConfiguredBasicClient,
	http_client: Arc<C>,
	error_mapper: Arc<M>,
	hooks: AuthHooks,
}
impl<C, M> BasicFacade<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Builds a client that posts `client_id` and `client_secret` in the form body, which is
	/// what LWA expects for every grant.
	pub(crate) fn from_config(
		config: &AuthConfig,
		http_client: impl Into<Arc<C>>,
		error_mapper: impl Into<Arc<M>>,
	) -> Result<Self> {
		let token_url = TokenUrl::new(config.token_endpoint.to_string())
			.map_err(|source| ConfigError::InvalidTokenEndpoint { source })?;
		let oauth_client = BasicClient::new(ClientId::new(config.keys.lwa_client_id.clone()))
			.set_client_secret(ClientSecret::new(config.keys.lwa_client_secret.expose().to_owned()))
			.set_token_uri(token_url)
			.set_auth_type(AuthType::RequestBody);

		Ok(Self {
			oauth_client,
			http_client: http_client.into(),
			error_mapper: error_mapper.into(),
			hooks: config.hooks.clone(),
		})
	}

	fn settle(
		&self,
		grant: GrantType,
		capture: &ResponseCapture,
		outcome: Result<BasicTokenResponse, FacadeRequestError<C::TransportError>>,
	) -> Result<BasicTokenResponse> {
		let raw = capture.take();

		if let Some(raw) = &raw {
			self.hooks.any_response(raw)?;
		}

		match (outcome, raw) {
			(Ok(response), _) => Ok(response),
			(Err(_), Some(raw)) if !raw.is_success() =>
				Err(classify::classify_failure(&self.hooks, raw)),
			(Err(err), raw) =>
				Err(map_request_error(grant, raw.as_ref(), err, self.error_mapper.as_ref())),
		}
	}
}
impl<C, M> OAuth2Facade for BasicFacade<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn exchange_authorization_code<'a>(
		&'a self,
		code: &'a str,
		redirect_uri: &'a RedirectUrl,
	) -> FacadeFuture<'a, TokenResult> {
		let capture = ResponseCapture::default();

		Box::pin(async move {
			let instrumented = self.http_client.with_capture(capture.clone());
			let outcome = self
				.oauth_client
				.exchange_code(AuthorizationCode::new(code.to_owned()))
				.set_redirect_uri(Cow::Borrowed(redirect_uri))
				.request_async(&instrumented)
				.await;
			let response = self.settle(GrantType::AuthorizationCode, &capture, outcome)?;
			let refresh_token = response.refresh_token().map(|token| token.secret().as_str());

			token_result(&response, refresh_token)
		})
	}

	fn refresh_token<'a>(&'a self, refresh_token: &'a str) -> FacadeFuture<'a, TokenResult> {
		let capture = ResponseCapture::default();

		Box::pin(async move {
			let instrumented = self.http_client.with_capture(capture.clone());
			let refresh_secret = RefreshToken::new(refresh_token.to_owned());
			let outcome = self
				.oauth_client
				.exchange_refresh_token(&refresh_secret)
				.request_async(&instrumented)
				.await;
			let response = self.settle(GrantType::RefreshToken, &capture, outcome)?;
			// LWA does not always rotate the refresh token; keep the caller's when omitted.
			let rotated = response.refresh_token().map(|token| token.secret().as_str());

			token_result(&response, Some(rotated.unwrap_or(refresh_token)))
		})
	}

	fn exchange_client_credentials<'a>(&'a self, scope: &'a str) -> FacadeFuture<'a, TokenResult> {
		let capture = ResponseCapture::default();

		Box::pin(async move {
			let instrumented = self.http_client.with_capture(capture.clone());
			let outcome = self
				.oauth_client
				.exchange_client_credentials()
				.add_scope(Scope::new(scope.to_owned()))
				.request_async(&instrumented)
				.await;
			let response = self.settle(GrantType::ClientCredentials, &capture, outcome)?;

			token_result(&response, None)
		})
	}
}

fn token_result(response: &BasicTokenResponse, refresh_token: Option<&str>) -> Result<TokenResult> {
	let expires_in = response.expires_in().ok_or(ResponseError::MissingExpiresIn)?.as_secs();
	let expires_in = i64::try_from(expires_in).map_err(|_| ResponseError::ExpiresInOutOfRange)?;
	let issued_at = OffsetDateTime::now_utc();
	let expires_at = issued_at
		.checked_add(Duration::seconds(expires_in))
		.ok_or(ResponseError::ExpiresInOutOfRange)?;
	let mut builder = TokenResult::builder()
		.access_token(response.access_token().secret().to_owned())
		.token_type(response.token_type().as_ref())
		.issued_at(issued_at)
		.expires_at(expires_at);

	if let Some(refresh) = refresh_token {
		builder = builder.refresh_token(refresh);
	}

	builder.build().map_err(|e| ResponseError::from(e).into())
}

fn map_request_error<E, M>(
	grant: GrantType,
	raw: Option<&RawResponse>,
	err: FacadeRequestError<E>,
	mapper: &M,
) -> Error
where
	E: 'static + Send + Sync + StdError,
	M: ?Sized + TransportErrorMapper<E>,
{
	let status = raw.map(|response| response.status);

	match err {
		RequestTokenError::ServerResponse(response) => ResponseError::Unexpected {
			message: format!("OAuth error `{}`", response.error().as_ref()),
			status,
		}
		.into(),
		RequestTokenError::Request(error) => mapper.map_transport_error(grant, raw, error),
		RequestTokenError::Parse(source, _body) => ResponseError::Parse { source, status }.into(),
		RequestTokenError::Other(message) => ResponseError::Unexpected { message, status }.into(),
	}
}
