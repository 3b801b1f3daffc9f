use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use marketmind::cli::{self, Cli, RunOptions};
use marketmind::config::{parse_api_url, Config};
use marketmind::service::probe::MediaProbe;
use marketmind::service::HttpGenerationService;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config.api_url = parse_api_url(api_url)?;
    }

    // Logs go to stderr; stdout carries the preview.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting MarketMind client v{}", env!("CARGO_PKG_VERSION"));

    let service = HttpGenerationService::new(&config.api_url, config.timeout)?;
    info!("Generation service at {}", service.base_url());

    let options = RunOptions {
        json: cli.json,
        probe: if cli.check_media {
            Some(MediaProbe::new()?)
        } else {
            None
        },
        fallback_keyword: config.fallback_keyword.clone(),
        show_progress: !cli.json,
    };

    match cli::execute(&cli.command, &options, &service).await {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
