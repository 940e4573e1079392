//! High-level LWA flows: consent URLs and the three token exchanges.

pub mod authorize_url;
pub mod grantless;

mod authorization_code;
mod common;
mod refresh;

pub use authorize_url::*;
pub use grantless::*;

// self
use crate::{_prelude::*, config::AuthConfig, http::TokenHttpClient, oauth::TransportErrorMapper};
#[cfg(feature = "reqwest")]
use crate::{http::ReqwestHttpClient, oauth::ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestLwaClient = LwaClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Runs LWA flows for one application against the configured token endpoint.
///
/// The client owns the HTTP transport and shares the immutable [`AuthConfig`] across calls.
/// It holds no per-call state, so independent exchanges may run concurrently. Every exchange
/// is a single request: nothing is cached, deduplicated, or retried.
#[derive(Clone)]
pub struct LwaClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP client wrapper used for every token request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	/// Credentials, redirect URL, marketplace, and hooks.
	pub config: Arc<AuthConfig>,
}
impl<C, M> LwaClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		config: impl Into<Arc<AuthConfig>>,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			config: config.into(),
		}
	}
}
#[cfg(feature = "reqwest")]
impl LwaClient<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(config: impl Into<Arc<AuthConfig>>) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default(), ReqwestTransportErrorMapper)
	}
}
impl<C, M> Debug for LwaClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LwaClient").field("config", &self.config).finish()
	}
}
