//! Grant types sent as `grant_type` to the token endpoint.

// self
use crate::_prelude::*;

/// OAuth 2.0 grant types accepted by the LWA token endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Exchange of the `spapi_oauth_code` returned on the consent redirect.
	AuthorizationCode,
	/// Refresh Token grant for seller-authorized calls.
	RefreshToken,
	/// Client Credentials grant backing grantless operations.
	ClientCredentials,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::RefreshToken => "refresh_token",
			GrantType::ClientCredentials => "client_credentials",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
