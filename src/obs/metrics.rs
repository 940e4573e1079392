// self
use crate::{
	_prelude::*,
	obs::{FlowKind, FlowOutcome},
};

/// Records a flow outcome via the global metrics recorder (when enabled).
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"amzn_spa_auth_flow_total",
			"flow" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Counts a failed exchange by error kind (`authentication`, `transport`, `callback`, ...).
pub fn record_flow_error(kind: FlowKind, error: &Error) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"amzn_spa_auth_flow_errors_total",
			"flow" => kind.as_str(),
			"error" => error.kind()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, error);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recording_is_a_noop_without_a_recorder() {
		record_flow_outcome(FlowKind::Grantless, FlowOutcome::Attempt);
		record_flow_error(FlowKind::AuthorizationCode, &Error::StateMismatch);
	}
}
