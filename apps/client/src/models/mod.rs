//! Request and response contracts of the generation service.

pub mod campaign;
pub mod lead;
pub mod pitch;

use serde::{de::DeserializeOwned, Serialize};

pub use campaign::{CampaignForm, CampaignResult, GeneratedContentItem};
pub use lead::{LeadForm, LeadScoreResult};
pub use pitch::{PitchForm, PitchResult, PitchVariant};

/// One request/response contract of the generation service.
///
/// Orchestrators are generic over this trait, so the three pages share
/// one request lifecycle.
pub trait Endpoint {
    type Form: Serialize + Send + Sync;
    type Output: DeserializeOwned + Send;

    /// Path relative to the service base URL.
    const PATH: &'static str;
    /// Short name used in logs.
    const LABEL: &'static str;
    /// Message shown when the service fails without a usable `detail`.
    const FALLBACK_MESSAGE: &'static str;
    /// Progress text shown while a request is in flight.
    const BUSY_LABEL: &'static str;
}

pub struct CampaignEndpoint;

impl Endpoint for CampaignEndpoint {
    type Form = CampaignForm;
    type Output = CampaignResult;

    const PATH: &'static str = "campaign/generate";
    const LABEL: &'static str = "campaign";
    const FALLBACK_MESSAGE: &'static str = "Failed to generate campaign. Please check backend.";
    const BUSY_LABEL: &'static str = "Generating Strategy";
}

pub struct PitchEndpoint;

impl Endpoint for PitchEndpoint {
    type Form = PitchForm;
    type Output = PitchResult;

    const PATH: &'static str = "pitch/generate";
    const LABEL: &'static str = "pitch";
    const FALLBACK_MESSAGE: &'static str = "Failed to generate pitch. Please check backend.";
    const BUSY_LABEL: &'static str = "Crafting Pitch";
}

pub struct LeadEndpoint;

impl Endpoint for LeadEndpoint {
    type Form = LeadForm;
    type Output = LeadScoreResult;

    const PATH: &'static str = "lead/score";
    const LABEL: &'static str = "lead";
    const FALLBACK_MESSAGE: &'static str = "Failed to analyze lead.";
    const BUSY_LABEL: &'static str = "Analyzing";
}
