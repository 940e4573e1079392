//! Shared plumbing for exchange flows: facade construction, spans, metrics, and the save hook.

// self
use crate::{
	_prelude::*,
	auth::TokenResult,
	flows::LwaClient,
	http::TokenHttpClient,
	oauth::{BasicFacade, TransportErrorMapper},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
};

impl<C, M> LwaClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	pub(crate) fn facade(&self) -> Result<BasicFacade<C, M>> {
		BasicFacade::from_config(
			&self.config,
			self.http_client.clone(),
			self.transport_mapper.clone(),
		)
	}

	/// Runs `exchange` inside the flow span, hands the result to `on_tokens_saved`, and
	/// records the outcome.
	pub(crate) async fn observe<F>(
		&self,
		kind: FlowKind,
		stage: &'static str,
		exchange: F,
	) -> Result<TokenResult>
	where
		F: Future<Output = Result<TokenResult>>,
	{
		let span = FlowSpan::new(kind, stage);

		obs::record_flow_outcome(kind, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let tokens = exchange.await?;

				self.config.hooks.tokens_saved(&tokens)?;

				Ok(tokens)
			})
			.await;

		span.record_result(&result);

		match &result {
			Ok(_) => obs::record_flow_outcome(kind, FlowOutcome::Success),
			Err(e) => {
				obs::record_flow_outcome(kind, FlowOutcome::Failure);
				obs::record_flow_error(kind, e);
			},
		}

		result
	}
}
