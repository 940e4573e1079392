#![allow(dead_code)]

// std
use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};
// crates.io
use httpmock::prelude::*;
// self
use amzn_spa_auth::{
	auth::MarketplaceId,
	config::{AuthConfig, AuthConfigBuilder},
	flows::{LwaClient, ReqwestLwaClient},
	url::Url,
};

pub const CLIENT_ID: &str = "amzn1.application-oa2-client.test";
pub const CLIENT_SECRET: &str = "lwa-secret-value";
pub const REDIRECT_URL: &str = "https://app.example.com/amazon/callback";
pub const MARKETPLACE_ID: &str = "ATVPDKIKX0DER";

/// Builder pre-filled with credentials and pointed at the mock `/token` endpoint.
pub fn config_builder(server: &MockServer) -> AuthConfigBuilder {
	AuthConfig::builder()
		.client_id(CLIENT_ID)
		.client_secret(CLIENT_SECRET)
		.redirect_url(redirect_url())
		.marketplace(MarketplaceId::new(MARKETPLACE_ID).expect("Marketplace id should be valid."))
		.token_endpoint(
			Url::parse(&server.url("/token")).expect("Mock token endpoint should parse."),
		)
}

pub fn client(config: AuthConfig) -> ReqwestLwaClient {
	LwaClient::new(config)
}

pub fn redirect_url() -> Url {
	Url::parse(REDIRECT_URL).expect("Redirect fixture should parse.")
}

/// Counts hook invocations across the `'static` closure boundary.
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);
impl CallCounter {
	pub fn hit(&self) {
		self.0.fetch_add(1, Ordering::SeqCst);
	}

	pub fn get(&self) -> usize {
		self.0.load(Ordering::SeqCst)
	}
}

pub async fn mock_json<'a>(
	server: &'a MockServer,
	status: u16,
	body: &'static str,
) -> httpmock::Mock<'a> {
	server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(status).header("content-type", "application/json").body(body);
		})
		.await
}
