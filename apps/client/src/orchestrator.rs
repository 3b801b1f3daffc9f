//! Request lifecycle shared by the campaign, pitch and lead pages.
//!
//! `Idle → Submitting → Success | Failure`, re-entrant: a new submission
//! always clears the previous result and error. Responses are applied in
//! completion order (last write wins); a completion for an older submission
//! is logged but still applied.

use std::marker::PhantomData;

use tracing::{debug, info, warn};

use crate::errors::ServiceError;
use crate::models::{CampaignEndpoint, Endpoint, LeadEndpoint, PitchEndpoint};
use crate::service::GenerationService;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Submitting,
    Success(T),
    Failure(String),
}

impl<T> RequestState<T> {
    pub fn result(&self) -> Option<&T> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Ticket for one issued request, carrying the form snapshot that was sent.
#[derive(Debug)]
pub struct Submission {
    pub sequence: u64,
    pub body: serde_json::Value,
}

pub struct Orchestrator<E: Endpoint> {
    state: RequestState<E::Output>,
    issued: u64,
    _endpoint: PhantomData<E>,
}

pub type CampaignOrchestrator = Orchestrator<CampaignEndpoint>;
pub type PitchOrchestrator = Orchestrator<PitchEndpoint>;
pub type LeadOrchestrator = Orchestrator<LeadEndpoint>;

impl<E: Endpoint> Default for Orchestrator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Endpoint> Orchestrator<E> {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            issued: 0,
            _endpoint: PhantomData,
        }
    }

    pub fn state(&self) -> &RequestState<E::Output> {
        &self.state
    }

    pub fn into_state(self) -> RequestState<E::Output> {
        self.state
    }

    /// The submit control is disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, RequestState::Submitting)
    }

    /// Moves to `Submitting` and snapshots the form.
    ///
    /// A form that cannot be serialized fails immediately with the endpoint
    /// fallback message; no request is issued for it.
    pub fn begin(&mut self, form: &E::Form) -> Option<Submission> {
        self.issued += 1;
        self.state = RequestState::Submitting;
        info!(endpoint = E::LABEL, sequence = self.issued, "submitting");

        match serde_json::to_value(form) {
            Ok(body) => Some(Submission {
                sequence: self.issued,
                body,
            }),
            Err(e) => {
                warn!(endpoint = E::LABEL, "could not serialize form: {e}");
                self.state = RequestState::Failure(E::FALLBACK_MESSAGE.to_string());
                None
            }
        }
    }

    /// Applies the outcome of `submission`.
    pub fn complete(
        &mut self,
        submission: Submission,
        outcome: Result<serde_json::Value, ServiceError>,
    ) {
        if submission.sequence != self.issued {
            debug!(
                endpoint = E::LABEL,
                sequence = submission.sequence,
                latest = self.issued,
                "applying response of a superseded submission"
            );
        }

        let outcome = outcome.and_then(|value| {
            serde_json::from_value::<E::Output>(value).map_err(ServiceError::from)
        });

        self.state = match outcome {
            Ok(result) => {
                info!(endpoint = E::LABEL, sequence = submission.sequence, "succeeded");
                RequestState::Success(result)
            }
            Err(e) => {
                warn!(endpoint = E::LABEL, sequence = submission.sequence, "failed: {e}");
                RequestState::Failure(e.user_message(E::FALLBACK_MESSAGE))
            }
        };
    }

    /// Issues exactly one request for `form` and records its outcome.
    pub async fn submit(&mut self, service: &dyn GenerationService, form: &E::Form) {
        let Some(submission) = self.begin(form) else {
            return;
        };
        let outcome = service.post_json(E::PATH, submission.body.clone()).await;
        self.complete(submission, outcome);
    }
}
