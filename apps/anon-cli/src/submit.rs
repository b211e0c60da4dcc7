//! Cool-down gated submission.

use serde_json::Value;

use anon_core::error::CooldownError;
use anon_core::ports::{Clock, CooldownStore, StoreError};
use anon_core::{CooldownGate, CooldownState};

use crate::client::{ServiceClient, Submission};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Cooldown(#[from] CooldownError),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Load the last submission time. Unreadable contents count as never posted,
/// and the next accepted submission overwrites them.
pub fn restore_gate<C, S>(gate: &mut CooldownGate<C, S>) -> Result<CooldownState, StoreError>
where
    C: Clock,
    S: CooldownStore,
{
    match gate.restore() {
        Err(StoreError::Corrupt(reason)) => {
            tracing::warn!(%reason, "Ignoring unreadable cool-down state");
            Ok(gate.state())
        }
        other => other,
    }
}

/// Submit unless the cool-down is active. The cool-down restarts only after
/// the service accepted the submission.
pub async fn submit_gated<C, S>(
    gate: &mut CooldownGate<C, S>,
    client: &ServiceClient,
    submission: &Submission,
) -> Result<Value, SubmitError>
where
    C: Clock,
    S: CooldownStore,
{
    gate.check()?;

    let body = client.submit(submission).await?;

    if let Err(e) = gate.record_success() {
        // Already accepted upstream; report and carry on.
        tracing::warn!(error = %e, "Failed to persist cool-down state");
    }

    Ok(body)
}
