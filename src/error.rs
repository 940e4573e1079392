//! Crate-level error taxonomy shared by URL builders, flows, and hooks.

// self
use crate::{_prelude::*, http::RawResponse};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The `state` returned on the redirect differs from the one that was sent.
	#[error("State returned from Amazon does not match the original state")]
	StateMismatch,
	/// The redirect callback is missing a required query parameter.
	#[error("Redirect callback is missing the `{parameter}` parameter.")]
	MalformedRedirect {
		/// Name of the missing query parameter.
		parameter: &'static str,
	},
	/// Token endpoint answered with HTTP 401.
	#[error(transparent)]
	Authentication(#[from] AuthenticationError),
	/// Any other failed HTTP exchange (non-2xx status, network, IO).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Token endpoint answered successfully but the payload was unusable.
	#[error(transparent)]
	Response(#[from] ResponseError),
	/// A registered hook failed; its error replaces the call's own outcome.
	#[error(transparent)]
	Callback(#[from] CallbackError),
}

impl Error {
	/// Stable label for the error family, used by metrics and spans.
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::Config(_) => "config",
			Self::StateMismatch => "state_mismatch",
			Self::MalformedRedirect { .. } => "malformed_redirect",
			Self::Authentication(_) => "authentication",
			Self::Transport(_) => "transport",
			Self::Response(_) => "response",
			Self::Callback(_) => "callback",
		}
	}

	/// HTTP status of the token endpoint response behind this error, when there was one.
	pub fn http_status(&self) -> Option<u16> {
		match self {
			Self::Authentication(e) => Some(e.http_status),
			Self::Transport(e) => e.status(),
			Self::Response(ResponseError::Parse { status, .. })
			| Self::Response(ResponseError::Unexpected { status, .. }) => *status,
			_ => None,
		}
	}
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Configured token endpoint is not a valid URL.
	#[error("Token endpoint URL is invalid.")]
	InvalidTokenEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Redirect URL cannot be parsed.
	#[error("Redirect URL is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Marketplace table entry carries a malformed base URL.
	#[error("Marketplace `{marketplace}` has an invalid authorization URL.")]
	InvalidMarketplaceUrl {
		/// Marketplace identifier.
		marketplace: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Marketplace identifier is not present in the registry.
	#[error("Marketplace `{0}` is not supported.")]
	UnknownMarketplace(String),
	/// Identifier failed validation.
	#[error(transparent)]
	InvalidIdentifier(#[from] crate::auth::IdentifierError),
	/// LWA client identifier was not supplied.
	#[error("LWA client id is required.")]
	MissingClientId,
	/// LWA client secret was not supplied.
	#[error("LWA client secret is required.")]
	MissingClientSecret,
	/// Redirect URL was not supplied.
	#[error("Redirect URL is required.")]
	MissingRedirectUrl,
	/// Marketplace identifier was not supplied.
	#[error("Marketplace identifier is required.")]
	MissingMarketplace,
	/// Grantless requests need a scope.
	#[error("Grantless token requests require a scope.")]
	MissingScope,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// HTTP 401 from the token endpoint, enriched with the OAuth error fields.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct AuthenticationError {
	/// HTTP status code (always 401 today).
	pub http_status: u16,
	/// OAuth `error` field, e.g. `invalid_client`.
	pub oauth_error_code: Option<String>,
	/// OAuth `error_description` field.
	pub oauth_error_description: Option<String>,
	/// Human-readable message derived from the fields above.
	pub message: String,
}

/// Transport-level failures propagated without reinterpretation.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Token endpoint returned a non-success status other than 401.
	#[error("HTTP request returned status code {}.", .0.status)]
	Status(Box<RawResponse>),
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the token endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// HTTP status code carried by the failure, when one was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status(response) => Some(response.status),
			_ => None,
		}
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Successful HTTP exchanges whose payload cannot become a token result.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// Token endpoint responded with malformed JSON.
	#[error("Token endpoint returned malformed JSON.")]
	Parse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Token endpoint returned something the OAuth client could not interpret.
	#[error("Token endpoint returned an unexpected response: {message}.")]
	Unexpected {
		/// Summary of the failure.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Token endpoint response omitted `expires_in`.
	#[error("Token endpoint response is missing expires_in.")]
	MissingExpiresIn,
	/// Token endpoint returned an excessively large `expires_in`.
	#[error("The expires_in value exceeds the supported range.")]
	ExpiresInOutOfRange,
	/// Parsed fields could not form a token result.
	#[error(transparent)]
	TokenResult(#[from] crate::auth::TokenResultBuilderError),
}

/// Failure raised by a user-registered hook.
#[derive(Debug)]
pub struct CallbackError(BoxError);
impl CallbackError {
	/// Wraps an arbitrary error raised inside a hook.
	pub fn new(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self(Box::new(src))
	}

	/// Builds a hook error from a plain message.
	pub fn msg(message: impl Into<String>) -> Self {
		let message: String = message.into();

		Self(message.into())
	}

	/// Borrows the wrapped error.
	pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
		self.0.as_ref()
	}

	/// Attempts to downcast the wrapped error into a concrete type.
	pub fn downcast_ref<T>(&self) -> Option<&T>
	where
		T: 'static + std::error::Error,
	{
		self.0.downcast_ref::<T>()
	}
}
impl Display for CallbackError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.0, f)
	}
}
impl StdError for CallbackError {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		self.0.source()
	}
}
