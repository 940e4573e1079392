mod common;

// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
use parking_lot::Mutex;
// self
use amzn_spa_auth::{
	error::{CallbackError, Error, TransportError},
	flows::GrantlessScope,
};
use common::CallCounter;

async fn refresh_error(status: u16, body: &'static str) -> Error {
	let server = MockServer::start_async().await;
	let mock = common::mock_json(&server, status, body).await;
	let client = common::client(
		common::config_builder(&server).build().expect("Config should build."),
	);
	let err = client
		.access_token_from_refresh_token("Atzr|refresh")
		.await
		.expect_err("Failed exchanges should surface an error.");

	mock.assert_async().await;

	err
}

fn auth_message(err: &Error) -> &str {
	match err {
		Error::Authentication(auth) => &auth.message,
		other => panic!("Expected an authentication error, got {other:?}."),
	}
}

#[tokio::test]
async fn unauthorized_prefers_error_description() {
	let err = refresh_error(
		401,
		"{\"error\":\"invalid_client\",\"error_description\":\"Client authentication failed\"}",
	)
	.await;

	assert_eq!(auth_message(&err), "Description: Client authentication failed");
	assert_eq!(err.to_string(), "Description: Client authentication failed");

	let Error::Authentication(auth) = err else { unreachable!() };

	assert_eq!(auth.http_status, 401);
	assert_eq!(auth.oauth_error_code.as_deref(), Some("invalid_client"));
}

#[tokio::test]
async fn unauthorized_falls_back_to_error_code() {
	let err = refresh_error(401, "{\"error\":\"invalid_client\"}").await;

	assert_eq!(auth_message(&err), "Error: invalid_client");
}

#[tokio::test]
async fn unauthorized_without_body_is_denied() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(401).header("content-type", "text/html").body("<html>nope</html>");
		})
		.await;
	let client = common::client(
		common::config_builder(&server).build().expect("Config should build."),
	);
	let err = client
		.grantless_access_token(GrantlessScope::Notifications)
		.await
		.expect_err("Unauthorized exchanges should fail.");

	mock.assert_async().await;

	assert_eq!(auth_message(&err), "Access to requested resource is denied.");

	let err = refresh_error(401, "").await;

	assert_eq!(auth_message(&err), "Access to requested resource is denied.");
}

#[tokio::test]
async fn other_failures_keep_the_transport_error() {
	let err = refresh_error(400, "{\"error\":\"invalid_grant\",\"error_description\":\"bad\"}").await;

	match err {
		Error::Transport(TransportError::Status(raw)) => {
			assert_eq!(raw.status, 400);
			assert!(raw.text().contains("invalid_grant"));
		},
		other => panic!("Expected a transport status error, got {other:?}."),
	}

	let err = refresh_error(503, "").await;

	assert!(matches!(err, Error::Transport(ref transport) if transport.status() == Some(503)));
}

#[tokio::test]
async fn auth_error_hook_runs_once_per_401() {
	let server = MockServer::start_async().await;
	let _mock = common::mock_json(&server, 401, "{\"error\":\"invalid_client\"}").await;
	let statuses: Arc<Mutex<Vec<u16>>> = Default::default();
	let sink = statuses.clone();
	let client = common::client(
		common::config_builder(&server)
			.on_auth_error(move |raw| {
				sink.lock().push(raw.status);

				Ok(())
			})
			.build()
			.expect("Config should build."),
	);
	let err = client
		.access_token_from_refresh_token("Atzr|refresh")
		.await
		.expect_err("Unauthorized refresh should fail.");

	assert_eq!(auth_message(&err), "Error: invalid_client");
	assert_eq!(*statuses.lock(), vec![401]);
}

#[tokio::test]
async fn auth_error_hook_failure_replaces_the_error() {
	let server = MockServer::start_async().await;
	let _mock = common::mock_json(&server, 401, "{\"error\":\"invalid_client\"}").await;
	let client = common::client(
		common::config_builder(&server)
			.on_auth_error(|_| Err(CallbackError::msg("seller must re-consent")))
			.build()
			.expect("Config should build."),
	);
	let err = client
		.tokens_from_authorization_code("RHxcode")
		.await
		.expect_err("Unauthorized exchange should fail.");

	assert!(matches!(err, Error::Callback(ref hook) if hook.to_string() == "seller must re-consent"));
}

#[tokio::test]
async fn auth_error_hook_ignores_other_statuses() {
	let server = MockServer::start_async().await;
	let _mock = common::mock_json(&server, 400, "{\"error\":\"invalid_grant\"}").await;
	let calls = CallCounter::default();
	let counter = calls.clone();
	let client = common::client(
		common::config_builder(&server)
			.on_auth_error(move |_| {
				counter.hit();

				Ok(())
			})
			.build()
			.expect("Config should build."),
	);
	let err = client
		.access_token_from_refresh_token("Atzr|refresh")
		.await
		.expect_err("Bad request should fail.");

	assert!(matches!(err, Error::Transport(TransportError::Status(_))));
	assert_eq!(calls.get(), 0);
}

#[tokio::test]
async fn any_response_hook_runs_before_classification() {
	let server = MockServer::start_async().await;
	let _mock = common::mock_json(&server, 401, "{\"error\":\"invalid_client\"}").await;
	let order: Arc<Mutex<Vec<&'static str>>> = Default::default();
	let any_sink = order.clone();
	let auth_sink = order.clone();
	let client = common::client(
		common::config_builder(&server)
			.on_any_response(move |_| {
				any_sink.lock().push("any_response");

				Ok(())
			})
			.on_auth_error(move |_| {
				auth_sink.lock().push("auth_error");

				Ok(())
			})
			.build()
			.expect("Config should build."),
	);
	let _ = client.access_token_from_refresh_token("Atzr|refresh").await;

	assert_eq!(*order.lock(), vec!["any_response", "auth_error"]);
}

#[tokio::test]
async fn any_response_hook_error_wins() {
	let server = MockServer::start_async().await;
	let _mock = common::mock_json(&server, 400, "{\"error\":\"invalid_request\"}").await;
	let auth_calls = CallCounter::default();
	let counter = auth_calls.clone();
	let client = common::client(
		common::config_builder(&server)
			.on_any_response(|raw| {
				Err(CallbackError::msg(format!("intercepted {}", raw.status)))
			})
			.on_auth_error(move |_| {
				counter.hit();

				Ok(())
			})
			.build()
			.expect("Config should build."),
	);
	let err = client
		.access_token_from_refresh_token("Atzr|refresh")
		.await
		.expect_err("Intercepted exchange should fail.");

	assert!(matches!(err, Error::Callback(ref hook) if hook.to_string() == "intercepted 400"));
	assert_eq!(auth_calls.get(), 0);
}

#[tokio::test]
async fn any_response_hook_sees_successes_too() {
	let server = MockServer::start_async().await;
	let _mock = common::mock_json(
		&server,
		200,
		"{\"access_token\":\"AT1\",\"token_type\":\"bearer\",\"expires_in\":3600}",
	)
	.await;
	let seen = CallCounter::default();
	let saved = CallCounter::default();
	let seen_counter = seen.clone();
	let saved_counter = saved.clone();
	let client = common::client(
		common::config_builder(&server)
			.on_any_response(move |raw| {
				assert!(raw.is_success());

				seen_counter.hit();

				Ok(())
			})
			.on_tokens_saved(move |_| {
				saved_counter.hit();

				Ok(())
			})
			.build()
			.expect("Config should build."),
	);

	client
		.grantless_access_token(GrantlessScope::ClientCredentialRotation)
		.await
		.expect("Grantless exchange should succeed.");

	assert_eq!(seen.get(), 1);
	assert_eq!(saved.get(), 1);
}
