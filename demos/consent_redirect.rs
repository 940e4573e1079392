//! Walks the seller consent round trip: build the consent URL, simulate Amazon's redirect,
//! validate the state, and exchange the code. A final refresh shows token preservation.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use amzn_spa_auth::{
	auth::{self, MarketplaceId, RedirectPayload},
	config::AuthConfig,
	flows::LwaClient,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let code_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token").body_includes("grant_type=authorization_code");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"Atza|demo\",\"refresh_token\":\"Atzr|demo\",\"token_type\":\"bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let refresh_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token").body_includes("grant_type=refresh_token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"Atza|renewed\",\"token_type\":\"bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let config = AuthConfig::builder()
		.client_id("amzn1.application-oa2-client.demo")
		.client_secret("demo-secret")
		.redirect_url("https://app.example.com/amazon/callback")
		.marketplace(MarketplaceId::new("A1F83G8C2ARO7P")?)
		.token_endpoint(Url::parse(&server.url("/token"))?)
		.build()?;
	let client = LwaClient::new(config);
	let state = auth::generate_state();
	let consent = client.authorization_url(Some(&state))?;

	println!("Send the seller to: {consent}");

	let callback = Url::parse(&format!(
		"https://app.example.com/amazon/callback?state={state}&selling_partner_id=A3DEMO&spapi_oauth_code=RHxdemo"
	))?;
	let payload = RedirectPayload::from_redirect_url(&callback)?;
	let tokens = client.tokens_from_redirect(&state, &payload).await?;

	println!(
		"Seller {:?} authorized; token expires at {}.",
		payload.selling_partner_id, tokens.expires_at
	);

	let refresh_token =
		tokens.refresh_token.as_ref().map(|token| token.expose()).unwrap_or_default();
	let renewed = client.access_token_from_refresh_token(refresh_token).await?;

	println!("Refresh token kept: {}.", renewed.refresh_token == tokens.refresh_token);

	code_mock.assert_async().await;
	refresh_mock.assert_async().await;

	Ok(())
}
