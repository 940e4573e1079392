// self
use crate::{_prelude::*, auth::TokenResult, error::CallbackError, http::RawResponse};

/// Result returned by every hook; an `Err` aborts the current call and propagates unchanged.
pub type HookResult = Result<(), CallbackError>;
/// Hook invoked with every successfully issued [`TokenResult`].
pub type TokensSavedHook = Arc<dyn Fn(&TokenResult) -> HookResult + Send + Sync>;
/// Hook invoked with a raw token endpoint response.
pub type ResponseHook = Arc<dyn Fn(&RawResponse) -> HookResult + Send + Sync>;

/// Optional callbacks registered on an [`AuthConfig`](crate::config::AuthConfig).
#[derive(Clone, Default)]
pub struct AuthHooks {
	/// Persists tokens after each successful exchange.
	pub on_tokens_saved: Option<TokensSavedHook>,
	/// Notified with the raw response before an authentication error is returned.
	pub on_auth_error: Option<ResponseHook>,
	/// Sees every raw response before it is interpreted.
	pub on_any_response: Option<ResponseHook>,
}
impl AuthHooks {
	pub(crate) fn tokens_saved(&self, tokens: &TokenResult) -> HookResult {
		self.on_tokens_saved.as_ref().map_or(Ok(()), |hook| hook(tokens))
	}

	pub(crate) fn auth_error(&self, response: &RawResponse) -> HookResult {
		self.on_auth_error.as_ref().map_or(Ok(()), |hook| hook(response))
	}

	pub(crate) fn any_response(&self, response: &RawResponse) -> HookResult {
		self.on_any_response.as_ref().map_or(Ok(()), |hook| hook(response))
	}
}
impl Debug for AuthHooks {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthHooks")
			.field("on_tokens_saved", &self.on_tokens_saved.is_some())
			.field("on_auth_error", &self.on_auth_error.is_some())
			.field("on_any_response", &self.on_any_response.is_some())
			.finish()
	}
}
