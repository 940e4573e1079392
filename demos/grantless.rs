//! Requests a grantless Notifications API token through the default reqwest transport,
//! persisting it with the save hook.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use parking_lot::Mutex;
// self
use amzn_spa_auth::{
	auth::{MarketplaceId, TokenResult},
	config::AuthConfig,
	flows::{GrantlessScope, LwaClient},
	http::ReqwestHttpClient,
	oauth::ReqwestTransportErrorMapper,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/token")
				.body_includes("scope=sellingpartnerapi%3A%3Anotifications");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"Atc|demo-access\",\"token_type\":\"bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let vault: Arc<Mutex<Option<TokenResult>>> = Default::default();
	let sink = vault.clone();
	let config = AuthConfig::builder()
		.client_id("amzn1.application-oa2-client.demo")
		.client_secret("demo-secret")
		.redirect_url("https://app.example.com/amazon/callback")
		.marketplace(MarketplaceId::new("ATVPDKIKX0DER")?)
		.token_endpoint(Url::parse(&server.url("/token"))?)
		.on_tokens_saved(move |tokens| {
			*sink.lock() = Some(tokens.clone());

			Ok(())
		})
		.build()?;
	let client = <LwaClient<ReqwestHttpClient, ReqwestTransportErrorMapper>>::with_http_client(
		config,
		ReqwestHttpClient::without_redirects()?,
		ReqwestTransportErrorMapper,
	);
	let tokens = client.grantless_access_token(GrantlessScope::Notifications).await?;

	println!("Grantless token {:?} expires at {}.", tokens.access_token, tokens.expires_at);
	println!("Saved by hook: {}.", vault.lock().is_some());

	token_mock.assert_async().await;

	Ok(())
}
