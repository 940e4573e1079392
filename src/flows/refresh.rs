// self
use crate::{
	_prelude::*,
	auth::TokenResult,
	flows::LwaClient,
	http::TokenHttpClient,
	oauth::{OAuth2Facade, TransportErrorMapper},
	obs::FlowKind,
};

impl<C, M> LwaClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Trades a refresh token for a new access token.
	///
	/// When the response omits `refresh_token`, the result keeps the one passed in.
	pub async fn access_token_from_refresh_token(
		&self,
		refresh_token: &str,
	) -> Result<TokenResult> {
		self.observe(FlowKind::Refresh, "access_token_from_refresh_token", async {
			let facade = self.facade()?;

			facade.refresh_token(refresh_token).await
		})
		.await
	}
}
