//! Anti-CSRF state generation/validation and the consent redirect payload.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::{_prelude::*, auth::SellingPartnerId};

const STATE_LEN: usize = 32;

/// Generates a fresh opaque state value for the consent round trip.
///
/// Callers own storage (typically the user session) and pass the value back to
/// [`validate_state`] when Amazon redirects.
pub fn generate_state() -> String {
	rand::rng().sample_iter(Alphanumeric).take(STATE_LEN).map(char::from).collect()
}

/// Checks the `state` returned on the redirect against the one that was sent.
///
/// Comparison is exact. The check is neither time-limited nor single-use.
pub fn validate_state(expected: &str, received: &str) -> Result<()> {
	if expected == received { Ok(()) } else { Err(Error::StateMismatch) }
}

/// Query parameters Amazon appends to the redirect URL after consent.
#[derive(Clone)]
pub struct RedirectPayload {
	/// State echoed back by Amazon.
	pub state: String,
	/// One-time authorization code (`spapi_oauth_code`).
	pub authorization_code: String,
	/// Seller or vendor that granted consent, when reported.
	pub selling_partner_id: Option<SellingPartnerId>,
}
impl RedirectPayload {
	const AUTHORIZATION_CODE_PARAM: &'static str = "spapi_oauth_code";
	const SELLING_PARTNER_PARAM: &'static str = "selling_partner_id";
	const STATE_PARAM: &'static str = "state";

	/// Creates a payload from already-extracted values.
	pub fn new(state: impl Into<String>, authorization_code: impl Into<String>) -> Self {
		Self {
			state: state.into(),
			authorization_code: authorization_code.into(),
			selling_partner_id: None,
		}
	}

	/// Extracts the payload from the full redirect URL hit by the user agent.
	pub fn from_redirect_url(url: &Url) -> Result<Self> {
		Self::from_query_pairs(url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())))
	}

	/// Extracts the payload from decoded query pairs (e.g. a web framework's query map).
	///
	/// `state` and `spapi_oauth_code` are required. An empty `selling_partner_id` counts as
	/// absent; a malformed one fails like a missing required parameter.
	pub fn from_query_pairs<I, K, V>(pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut state = None;
		let mut authorization_code = None;
		let mut selling_partner_id = None;

		for (key, value) in pairs {
			match key.as_ref() {
				Self::STATE_PARAM => state = Some(value.into()),
				Self::AUTHORIZATION_CODE_PARAM => authorization_code = Some(value.into()),
				Self::SELLING_PARTNER_PARAM => {
					let value: String = value.into();

					if !value.is_empty() {
						selling_partner_id = Some(SellingPartnerId::new(value).map_err(|_| {
							Error::MalformedRedirect { parameter: Self::SELLING_PARTNER_PARAM }
						})?);
					}
				},
				_ => {},
			}
		}

		let state = state.ok_or(Error::MalformedRedirect { parameter: Self::STATE_PARAM })?;
		let authorization_code = authorization_code
			.ok_or(Error::MalformedRedirect { parameter: Self::AUTHORIZATION_CODE_PARAM })?;

		Ok(Self { state, authorization_code, selling_partner_id })
	}
}
impl Debug for RedirectPayload {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RedirectPayload")
			.field("state", &self.state)
			.field("authorization_code", &"<redacted>")
			.field("selling_partner_id", &self.selling_partner_id)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn state_validation_errors_on_mismatch() {
		let state = generate_state();

		assert_eq!(state.len(), STATE_LEN);
		assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
		assert!(validate_state(&state, &state).is_ok());

		let err = validate_state(&state, "forged").expect_err("State mismatch should fail.");

		assert!(matches!(err, Error::StateMismatch));
		assert_eq!(err.to_string(), "State returned from Amazon does not match the original state");
	}

	#[test]
	fn generated_states_differ() {
		assert_ne!(generate_state(), generate_state());
	}

	#[test]
	fn redirect_payload_parses_callback_url() {
		let url = Url::parse(
			"https://app.example.com/callback?state=abc&selling_partner_id=A3SELLER&spapi_oauth_code=RHxcode",
		)
		.expect("Callback URL fixture should parse.");
		let payload = RedirectPayload::from_redirect_url(&url).expect("Payload should parse.");

		assert_eq!(payload.state, "abc");
		assert_eq!(payload.authorization_code, "RHxcode");
		assert_eq!(payload.selling_partner_id.as_deref(), Some("A3SELLER"));
		assert!(!format!("{payload:?}").contains("RHxcode"));
	}

	#[test]
	fn redirect_payload_reports_missing_parameters() {
		let err = RedirectPayload::from_query_pairs([("state", "abc")])
			.expect_err("Missing code should fail.");

		assert!(matches!(err, Error::MalformedRedirect { parameter: "spapi_oauth_code" }));

		let err = RedirectPayload::from_query_pairs([("spapi_oauth_code", "code")])
			.expect_err("Missing state should fail.");

		assert!(matches!(err, Error::MalformedRedirect { parameter: "state" }));
	}

	#[test]
	fn redirect_payload_checks_selling_partner_id() {
		let err = RedirectPayload::from_query_pairs([
			("state", "abc"),
			("spapi_oauth_code", "code"),
			("selling_partner_id", "not a seller"),
		])
		.expect_err("Malformed selling partner id should fail.");

		assert!(matches!(err, Error::MalformedRedirect { parameter: "selling_partner_id" }));

		let payload = RedirectPayload::from_query_pairs([
			("state", "abc"),
			("spapi_oauth_code", "code"),
			("selling_partner_id", ""),
		])
		.expect("Empty selling partner id should be ignored.");

		assert_eq!(payload.selling_partner_id, None);
	}
}
