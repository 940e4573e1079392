//! Classification of failed token endpoint responses.
//!
//! HTTP 401 always becomes an [`AuthenticationError`], whatever the body looks like. Every
//! other failure status is surfaced untouched as [`TransportError::Status`] so callers can tell
//! "you are not authorized" apart from malformed requests and server faults.

// self
use crate::{
	_prelude::*,
	config::AuthHooks,
	error::{AuthenticationError, TransportError},
	http::RawResponse,
};

/// Message used when a 401 body carries neither `error` nor `error_description`.
pub const ACCESS_DENIED_MESSAGE: &str = "Access to requested resource is denied.";

/// OAuth error fields LWA places in failure bodies.
///
/// Each field is read on its own: a missing, empty, or non-string value only drops that field.
#[derive(Debug, Default)]
struct OAuthErrorBody {
	error: Option<String>,
	error_description: Option<String>,
}
impl OAuthErrorBody {
	fn parse(response: &RawResponse) -> Self {
		let Some(body) = response.json() else {
			return Self::default();
		};
		let field = |name: &str| {
			body.get(name)
				.and_then(serde_json::Value::as_str)
				.filter(|value| !value.is_empty())
				.map(str::to_owned)
		};

		Self { error: field("error"), error_description: field("error_description") }
	}
}

/// Builds the [`AuthenticationError`] describing an unauthorized response.
///
/// The message prefers `error_description`, then `error`, then [`ACCESS_DENIED_MESSAGE`].
pub fn authentication_error(response: &RawResponse) -> AuthenticationError {
	let OAuthErrorBody { error, error_description } = OAuthErrorBody::parse(response);
	let message = match (&error_description, &error) {
		(Some(description), _) => format!("Description: {description}"),
		(None, Some(code)) => format!("Error: {code}"),
		(None, None) => ACCESS_DENIED_MESSAGE.to_owned(),
	};

	AuthenticationError {
		http_status: response.status,
		oauth_error_code: error,
		oauth_error_description: error_description,
		message,
	}
}

/// Turns a non-success response into the error returned to the caller.
///
/// For 401 the `on_auth_error` hook is notified first; if it fails, its error is returned
/// instead of the authentication error.
pub fn classify_failure(hooks: &AuthHooks, response: RawResponse) -> Error {
	if !response.is_unauthorized() {
		return TransportError::Status(Box::new(response)).into();
	}

	let classified = authentication_error(&response);

	match hooks.auth_error(&response) {
		Ok(()) => classified.into(),
		Err(e) => e.into(),
	}
}
