use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use talent_rank::config::{LoggingSettings, Settings};
use talent_rank::error::AppError;
use talent_rank::models::ErrorResponse;
use talent_rank::{CandidateRanker, RankingService};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "talent-rank",
    about = "Rank job candidates against a job profile and assign tiers",
    version
)]
struct Cli {
    /// Ranking request JSON document (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Settings file to load instead of config/default.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Pretty-print the JSON response
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            return report(AppError::from(e), cli.pretty);
        }
    };

    init_logging(&settings.logging);
    info!("Configuration loaded successfully");

    match run(&cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e, cli.pretty),
    }
}

fn run(cli: &Cli, settings: &Settings) -> Result<(), AppError> {
    let ranking_config = settings.ranking.to_ranking_config()?;
    info!("Ranker initialized with weights: {:?}", ranking_config.weights());

    let service = RankingService::new(CandidateRanker::new(ranking_config));

    let body = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let response = service.rank_json(&body)?;

    let mut stdout = io::stdout().lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut stdout, &response)?;
    } else {
        serde_json::to_writer(&mut stdout, &response)?;
    }
    writeln!(stdout)?;

    Ok(())
}

/// Logs go to stderr so stdout carries only the JSON document
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn report(err: AppError, pretty: bool) -> ExitCode {
    error!("{}", err);

    let body = ErrorResponse {
        error: err.code().to_string(),
        message: err.to_string(),
    };
    let rendered = if pretty {
        serde_json::to_string_pretty(&body)
    } else {
        serde_json::to_string(&body)
    };
    if let Ok(rendered) = rendered {
        println!("{}", rendered);
    }

    ExitCode::FAILURE
}
