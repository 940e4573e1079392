// self
#[cfg(feature = "tracing")] use crate::obs::FlowOutcome;
use crate::{_prelude::*, obs::FlowKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// Span wrapper used around every token exchange.
///
/// The span carries `flow` and `stage` from creation and an `outcome` field filled in once
/// the exchange settles. HTTP status codes are recorded for failed exchanges; bodies and token
/// values never are.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Creates a new span tagged with the provided flow kind + stage.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"amzn_spa_auth.flow",
				flow = kind.as_str(),
				stage,
				outcome = tracing::field::Empty,
				error = tracing::field::Empty,
				http_status = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Records how the exchange ended, plus the error kind and HTTP status on failure.
	pub fn record_result<T>(&self, result: &Result<T>) {
		#[cfg(feature = "tracing")]
		{
			match result {
				Ok(_) => {
					self.span.record("outcome", FlowOutcome::Success.as_str());
				},
				Err(e) => {
					self.span.record("outcome", FlowOutcome::Failure.as_str());
					self.span.record("error", e.kind());

					if let Some(status) = e.http_status() {
						self.span.record("http_status", status);
					}
				},
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = result;
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}
