mod analysis;
mod catalog;
mod cli;
mod config;
mod errors;
mod extraction;
mod jobs;
mod models;
mod report;
mod state;

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::pipeline::{run_analysis, AnalysisRequest};
use crate::cli::Cli;
use crate::config::Config;
use crate::errors::AppError;
use crate::extraction::document::extractor_for;
use crate::report::render;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        if e.is_fatal_config() {
            error!("Role skills data could not be loaded: {e}");
        }
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    cli.apply_to(&mut config);

    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting skillgap v{}", env!("CARGO_PKG_VERSION"));

    // Catalog first: a missing, malformed or empty catalog stops the run
    // before the resume is touched.
    let state = AppState::from_config(config)?;

    let target_role = match cli.role {
        Some(role) => role.trim().to_string(),
        None => prompt_for_role(std::io::stdin().lock(), &mut std::io::stderr())?,
    };

    let request = AnalysisRequest {
        resume_path: state.config.resume_path.clone(),
        target_role,
        fetch_jobs: !cli.skip_jobs,
    };
    let extractor = extractor_for(&request.resume_path)?;

    let report = run_analysis(&state, extractor.as_ref(), &request).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&report, cli.format, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Asks for the target role. The prompt goes to `prompt_out` (stderr in
/// production) so stdout holds nothing but the report.
fn prompt_for_role<R, W>(mut input: R, prompt_out: &mut W) -> Result<String, AppError>
where
    R: BufRead,
    W: Write,
{
    write!(prompt_out, "Enter Target Role: ")?;
    prompt_out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read target role from stdin")?;
    Ok(line.trim().to_string())
}
