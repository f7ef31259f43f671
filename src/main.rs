mod cli;

use clap::Parser;
use ocean_health::classifier::SimulatedClassifier;
use ocean_health::types::config::OceanConfig;
use ocean_health::{config, ingest, report, score, snapshot, Observation, OceanError};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // try_init: a subscriber may already be installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_observations(path: Option<&Path>) -> Result<Vec<Observation>, OceanError> {
    match path {
        Some(path) => ingest::discover(path),
        None => {
            debug!("no dataset path given, using built-in sample");
            Ok(ingest::sample::observations())
        }
    }
}

fn run() -> Result<i32, OceanError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    info!(version = env!("CARGO_PKG_VERSION"), "ocean-health starting");

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    let cfg = loaded.unwrap_or_else(|| {
        debug!("no config layers found, using defaults");
        OceanConfig::default()
    });

    match cli.command {
        cli::Commands::Score(cmd) => {
            let weights = cfg.weights()?.rebalance_all(&cmd.assignments);
            let params = cfg.scoring_params();
            let observations = load_observations(cmd.path.as_deref())?;
            let health_report = score::build_report(&observations, &weights, &params);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Csv => report::OutputFormat::Csv,
            };
            let rendered = report::render(&health_report, output_format)?;
            println!("{}", rendered.trim_end());

            if cmd.save {
                let path = snapshot::write_snapshot(
                    &cmd.out_dir,
                    &snapshot::ReportSnapshot::new(&health_report),
                )?;
                eprintln!("snapshot: {}", path.display());
            }

            let below_floor = cmd
                .fail_on
                .map(|status| health_report.any_at_or_below(status.into()))
                .unwrap_or(false);

            if health_report.has_blocking() || below_floor {
                Ok(exit_code::BLOCKING)
            } else if !health_report.findings.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Check(cmd) => {
            let observations = load_observations(cmd.path.as_deref())?;
            let findings = score::lint::input_findings(&observations);

            if findings.is_empty() {
                println!("check: {} observations, no findings", observations.len());
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Weights(cmd) => {
            let weights = cfg.weights()?.rebalance_all(&cmd.assignments);
            let output_format = match cmd.format {
                cli::WeightsFormat::Json => report::OutputFormat::Json,
                cli::WeightsFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render_weights(&weights, output_format)?;
            println!("{}", rendered.trim_end());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Classify(cmd) => {
            let settings = cfg.classifier_settings();
            let mut classifier = match cmd.seed {
                Some(seed) => SimulatedClassifier::with_seed(settings, seed),
                None => SimulatedClassifier::new(settings),
            };

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let classification = runtime.block_on(async {
                let cancel = async {
                    if tokio::signal::ctrl_c().await.is_err() {
                        std::future::pending::<()>().await;
                    }
                };
                classifier.classify(&cmd.image, cancel).await
            })?;

            println!("Identified species: {}", classification.species);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
