//! Transport primitives for LWA token exchanges.
//!
//! The module exposes [`TokenHttpClient`] alongside [`RawResponse`] and
//! [`ResponseCapture`] so downstream crates can plug in custom HTTP clients without
//! losing the raw-response hooks. Implementations call [`ResponseCapture::take`] before
//! dispatching a request and [`ResponseCapture::store`] once the status, headers, and body
//! are known, so the flows can hand the untouched response to the configured hooks and
//! classify failures from it.

// std
use std::{borrow::Cow, ops::Deref};
// crates.io
use oauth2::{
	AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse,
	http::{HeaderMap, StatusCode},
};
// self
use crate::_prelude::*;

/// Abstraction over HTTP transports capable of executing LWA token exchanges while
/// publishing the raw response to the hook pipeline.
///
/// The trait is the crate's only dependency on an HTTP stack. Callers provide an
/// implementation (typically behind `Arc<T>`) and each exchange requests a short-lived
/// [`AsyncHttpClient`] handle carrying a clone of a [`ResponseCapture`]. Implementations
/// must be `Send + Sync + 'static` and their request futures must be `Send`.
pub trait TokenHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// [`AsyncHttpClient`] handle tied to a [`ResponseCapture`].
	type Handle: for<'c> AsyncHttpClient<
			'c,
			Error = HttpClientError<Self::TransportError>,
			Future: 'c + Send,
		>
		+ 'static
		+ Send
		+ Sync;

	/// Builds an [`AsyncHttpClient`] handle that records the response in `capture`.
	///
	/// # Capture Contract
	///
	/// - Call [`ResponseCapture::take`] before submitting the HTTP request so a stale response
	///   never leaks into the new exchange.
	/// - Once any HTTP response (successful or not) has been read, save it with
	///   [`ResponseCapture::store`].
	fn with_capture(&self, capture: ResponseCapture) -> Self::Handle;
}

/// Untouched token endpoint response handed to hooks and transport errors.
#[derive(Clone)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers.
	pub headers: HeaderMap,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Creates a response from its parts.
	pub fn new(status: u16, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
		Self { status, headers, body: body.into() }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Returns `true` for HTTP 401.
	pub fn is_unauthorized(&self) -> bool {
		self.status == StatusCode::UNAUTHORIZED.as_u16()
	}

	/// Body decoded as UTF-8, lossily.
	pub fn text(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.body)
	}

	/// Body parsed as JSON, or `None` when it is empty or malformed.
	pub fn json(&self) -> Option<serde_json::Value> {
		serde_json::from_slice(&self.body).ok()
	}
}
impl Debug for RawResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RawResponse")
			.field("status", &self.status)
			.field("headers", &self.headers.len())
			.field("body_len", &self.body.len())
			.finish()
	}
}

/// Thread-safe slot for sharing the [`RawResponse`] between transport and flow layers.
///
/// Each exchange creates a fresh capture and reads it once `oauth2` resolves. Transport
/// implementations hold a clone only for the lifetime of their handle.
#[derive(Clone, Debug, Default)]
pub struct ResponseCapture(Arc<Mutex<Option<RawResponse>>>);
impl ResponseCapture {
	/// Stores the response for the current exchange.
	pub fn store(&self, response: RawResponse) {
		*self.0.lock() = Some(response);
	}

	/// Returns the captured response, if any, consuming it from the slot.
	pub fn take(&self) -> Option<RawResponse> {
		self.0.lock().take()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Token requests should not follow redirects; configure any custom [`ReqwestClient`]
/// accordingly before wrapping it.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client that never follows redirects.
	pub fn without_redirects() -> Result<Self> {
		let client = ReqwestClient::builder()
			.redirect(reqwest::redirect::Policy::none())
			.build()
			.map_err(crate::error::ConfigError::from)?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl TokenHttpClient for ReqwestHttpClient {
	type Handle = CapturingHandle;
	type TransportError = ReqwestError;

	fn with_capture(&self, capture: ResponseCapture) -> Self::Handle {
		CapturingHandle::new(self.0.clone(), capture)
	}
}

#[cfg(feature = "reqwest")]
struct CapturingHttpClient {
	client: ReqwestClient,
	capture: ResponseCapture,
}

/// Handle returned by [`ReqwestHttpClient`] that records every response it reads.
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct CapturingHandle(Arc<CapturingHttpClient>);
#[cfg(feature = "reqwest")]
impl CapturingHandle {
	fn new(client: ReqwestClient, capture: ResponseCapture) -> Self {
		Self(Arc::new(CapturingHttpClient { client, capture }))
	}
}
#[cfg(feature = "reqwest")]
impl<'c> AsyncHttpClient<'c> for CapturingHandle {
	type Error = HttpClientError<ReqwestError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send + Sync>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let inner = Arc::clone(&self.0);

		Box::pin(async move {
			inner.capture.take();

			let response = inner
				.client
				.execute(request.try_into().map_err(Box::new)?)
				.await
				.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let body = response.bytes().await.map_err(Box::new)?.to_vec();

			inner.capture.store(RawResponse::new(status.as_u16(), headers.clone(), body.clone()));

			let mut response_new = HttpResponse::new(body);

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
