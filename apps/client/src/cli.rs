//! Command-line front-end: one subcommand per page.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::errors::FormError;
use crate::forms::{self, PlatformSelection, RequiredFields};
use crate::models::campaign::DEFAULT_TONE;
use crate::models::{CampaignForm, Endpoint, LeadForm, PitchForm};
use crate::orchestrator::{Orchestrator, RequestState};
use crate::render::{status_banner, CampaignPreview, PitchPreview};
use crate::scorecard::Scorecard;
use crate::service::probe::MediaProbe;
use crate::service::GenerationService;

#[derive(Parser, Debug)]
#[command(name = "marketmind", version, about = "Generate campaign, pitch and lead previews")]
pub struct Cli {
    /// Generation service base URL (overrides MARKETMIND_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Print the structured result as JSON instead of a preview
    #[arg(long, global = true)]
    pub json: bool,

    /// Check that preview images load, substituting placeholders when they do not
    #[arg(long, global = true)]
    pub check_media: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Platform-specific campaign content
    Campaign(CampaignArgs),
    /// Sales pitch variants for a persona
    Pitch(PitchArgs),
    /// Lead qualification scorecard
    Lead(LeadArgs),
}

#[derive(Args, Debug)]
pub struct CampaignArgs {
    /// JSON file holding the whole form; field flags are ignored when set
    #[arg(long)]
    pub form: Option<PathBuf>,
    #[arg(long, default_value = "")]
    pub product_name: String,
    #[arg(long, default_value = "")]
    pub product_description: String,
    #[arg(long, default_value = "")]
    pub target_audience: String,
    /// Repeat to select several; defaults to LinkedIn, Twitter and Instagram
    #[arg(long = "platform")]
    pub platforms: Vec<String>,
    #[arg(long, default_value = DEFAULT_TONE)]
    pub tone: String,
}

#[derive(Args, Debug)]
pub struct PitchArgs {
    #[arg(long)]
    pub form: Option<PathBuf>,
    #[arg(long, default_value = "")]
    pub product_name: String,
    #[arg(long, default_value = "")]
    pub product_description: String,
    #[arg(long, default_value = "")]
    pub persona: String,
    #[arg(long, default_value = "")]
    pub industry: String,
    #[arg(long, default_value = "Professional")]
    pub tone: String,
}

#[derive(Args, Debug)]
pub struct LeadArgs {
    #[arg(long)]
    pub form: Option<PathBuf>,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub company: String,
    #[arg(long, default_value = "")]
    pub budget: String,
    #[arg(long, default_value = "Medium")]
    pub urgency: String,
    #[arg(long, default_value = "")]
    pub needs: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("failed to read form file {path}: {source}")]
    FormFile {
        path: String,
        source: std::io::Error,
    },

    #[error("form file {path} is not a valid form: {source}")]
    FormParse {
        path: String,
        source: serde_json::Error,
    },

    /// The request failed; carries the page failure banner.
    #[error("{0}")]
    Request(String),

    #[error("failed to render output: {0}")]
    Output(serde_json::Error),
}

impl CliError {
    /// Process exit code: 2 for input problems, 1 for request failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Form(_) | CliError::FormFile { .. } | CliError::FormParse { .. } => 2,
            CliError::Request(_) | CliError::Output(_) => 1,
        }
    }
}

/// Per-run options shared by all subcommands.
#[derive(Default)]
pub struct RunOptions {
    pub json: bool,
    pub probe: Option<MediaProbe>,
    pub fallback_keyword: Option<String>,
    /// Print the in-flight banner to stderr while a request is pending.
    pub show_progress: bool,
}

fn read_form<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| CliError::FormFile {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::FormParse {
        path: display,
        source,
    })
}

impl CampaignArgs {
    pub fn to_form(&self) -> Result<CampaignForm, CliError> {
        if let Some(path) = &self.form {
            return read_form(path);
        }
        let platforms = if self.platforms.is_empty() {
            PlatformSelection::default()
        } else {
            self.platforms.iter().map(String::as_str).collect()
        };
        Ok(CampaignForm {
            product_name: self.product_name.clone(),
            product_description: self.product_description.clone(),
            target_audience: self.target_audience.clone(),
            platforms,
            tone: self.tone.clone(),
        })
    }
}

impl PitchArgs {
    pub fn to_form(&self) -> Result<PitchForm, CliError> {
        if let Some(path) = &self.form {
            return read_form(path);
        }
        Ok(PitchForm {
            product_name: self.product_name.clone(),
            product_description: self.product_description.clone(),
            persona: self.persona.clone(),
            industry: self.industry.clone(),
            tone: self.tone.clone(),
        })
    }
}

impl LeadArgs {
    pub fn to_form(&self) -> Result<LeadForm, CliError> {
        if let Some(path) = &self.form {
            return read_form(path);
        }
        Ok(LeadForm {
            name: self.name.clone(),
            company: self.company.clone(),
            budget: self.budget.clone(),
            urgency: self.urgency.clone(),
            needs: self.needs.clone(),
            notes: self.notes.clone(),
        })
    }
}

/// Runs one page cycle and returns the text to print on success.
pub async fn execute(
    command: &Command,
    options: &RunOptions,
    service: &dyn GenerationService,
) -> Result<String, CliError> {
    match command {
        Command::Campaign(args) => {
            let form = args.to_form()?;
            form.validate()?;

            let result = run_page::<crate::models::CampaignEndpoint>(service, &form, options).await?;
            if options.json {
                return to_json(&result);
            }

            let keyword = keyword_for(&form.product_name, options.fallback_keyword.as_deref());
            let mut preview = CampaignPreview::build(&result, keyword);
            if let Some(probe) = &options.probe {
                for card in &mut preview.cards {
                    let kind = card.kind();
                    if let Some(slot) = card.media_mut() {
                        debug!(?kind, "checking preview media");
                        probe.settle(slot).await;
                    }
                }
            }
            Ok(preview.to_string())
        }
        Command::Pitch(args) => {
            let form = args.to_form()?;
            form.validate()?;
            forms::check_pitch_tone(&form)?;

            let result = run_page::<crate::models::PitchEndpoint>(service, &form, options).await?;
            if options.json {
                return to_json(&result);
            }
            Ok(PitchPreview(&result).to_string())
        }
        Command::Lead(args) => {
            let form = args.to_form()?;
            form.validate()?;
            forms::check_urgency(&form)?;

            let result = run_page::<crate::models::LeadEndpoint>(service, &form, options).await?;
            if options.json {
                return to_json(&result);
            }
            Ok(Scorecard::from_result(&result).to_string())
        }
    }
}

async fn run_page<E: Endpoint>(
    service: &dyn GenerationService,
    form: &E::Form,
    options: &RunOptions,
) -> Result<E::Output, CliError> {
    if options.show_progress {
        if let Some(banner) = status_banner(&RequestState::<()>::Submitting, E::BUSY_LABEL) {
            eprintln!("{banner}");
        }
    }

    let mut orchestrator = Orchestrator::<E>::new();
    orchestrator.submit(service, form).await;

    match orchestrator.into_state() {
        RequestState::Success(result) => Ok(result),
        other => Err(CliError::Request(
            status_banner(&other, E::BUSY_LABEL)
                .unwrap_or_else(|| E::FALLBACK_MESSAGE.to_string()),
        )),
    }
}

fn keyword_for<'a>(product_name: &'a str, fallback: Option<&'a str>) -> &'a str {
    if product_name.trim().is_empty() {
        fallback.unwrap_or_default()
    } else {
        info!(keyword = product_name, "placeholder keyword");
        product_name
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::Output)
}
