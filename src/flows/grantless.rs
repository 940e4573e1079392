//! Grantless (`client_credentials`) tokens for operations that need no seller authorization.

// self
use crate::{
	_prelude::*,
	auth::TokenResult,
	error::ConfigError,
	flows::LwaClient,
	http::TokenHttpClient,
	oauth::{OAuth2Facade, TransportErrorMapper},
	obs::FlowKind,
};

/// Scopes LWA accepts for grantless operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrantlessScope {
	/// Notifications API destinations and subscriptions.
	#[serde(rename = "sellingpartnerapi::notifications")]
	Notifications,
	/// Application client secret rotation.
	#[serde(rename = "sellingpartnerapi::client_credential:rotation")]
	ClientCredentialRotation,
	/// Authorization API migration from MWS.
	#[serde(rename = "sellingpartnerapi::migration")]
	Migration,
}
impl GrantlessScope {
	/// Every known scope.
	pub const ALL: [Self; 3] = [Self::Notifications, Self::ClientCredentialRotation, Self::Migration];

	/// Returns the wire value sent as `scope`.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Notifications => "sellingpartnerapi::notifications",
			Self::ClientCredentialRotation => "sellingpartnerapi::client_credential:rotation",
			Self::Migration => "sellingpartnerapi::migration",
		}
	}
}
impl AsRef<str> for GrantlessScope {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl Display for GrantlessScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for GrantlessScope {
	type Err = UnknownGrantlessScope;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|scope| scope.as_str() == s)
			.ok_or_else(|| UnknownGrantlessScope(s.to_owned()))
	}
}

/// Error returned when parsing an unrecognized grantless scope.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Grantless scope `{0}` is not recognized.")]
pub struct UnknownGrantlessScope(pub String);

impl<C, M> LwaClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Requests a grantless access token for `scope`.
	///
	/// Accepts a [`GrantlessScope`] or any raw scope string. The result never carries a refresh
	/// token.
	pub async fn grantless_access_token(&self, scope: impl AsRef<str>) -> Result<TokenResult> {
		let scope = scope.as_ref();

		self.observe(FlowKind::Grantless, "grantless_access_token", async {
			if scope.trim().is_empty() {
				return Err(ConfigError::MissingScope.into());
			}

			let facade = self.facade()?;

			facade.exchange_client_credentials(scope).await
		})
		.await
	}
}
