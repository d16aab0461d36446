// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr, so stdout only carries the report)
// 2. Parse command-line arguments, or prompt for them
// 3. Run the scraper, racing it against Ctrl+C
// 4. Print the results and save them if asked
// 5. Exit with a proper code (0 = done, 2 = error, 130 = interrupted)
// =============================================================================

mod cli;
mod config;
mod error;
mod pacing;
mod prompt;
mod report;
mod pipeline;
mod search;
mod tools;

use anyhow::{bail, Result};
use clap::Parser;
use cli::Cli;
use report::{EmailResults, ReportFormat};
use pipeline::SiteScraper;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() {
    // RUST_LOG=email_recon=debug shows every request and pacing delay
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("email_recon=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let mut config = cli.to_config()?;
    let format = cli.report_format();

    let emails = if cli.is_interactive() {
        let emails = prompt::emails()?;
        prompt::tool_toggles(&mut config)?;
        emails
    } else {
        cli.email_list()?
    };

    if emails.is_empty() {
        bail!("no email addresses given");
    }

    let scraper = SiteScraper::new(emails, config)?;
    let results = scraper.results();

    let interrupted = tokio::select! {
        _ = scraper.run() => false,
        _ = interrupt() => true,
    };

    let snapshot = results.snapshot();
    report::display(&snapshot, format)?;

    if interrupted {
        eprintln!("Cancelled by user.");
        // Partial results are only saved where the user already asked for them
        if let Some(path) = &cli.output {
            save(&snapshot, path, format);
        }
        return Ok(EXIT_INTERRUPTED);
    }

    let target = match &cli.output {
        Some(path) => Some(path.clone()),
        None if cli.is_interactive() => prompt::save_path()?,
        None => None,
    };

    if let Some(path) = target {
        save(&snapshot, &path, format);
    }

    Ok(0)
}

// Resolves on Ctrl+C; never resolves if the handler can't be installed
async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

// Saving is best effort: a failure is reported, the run still succeeded
fn save(snapshot: &[EmailResults], path: &Path, format: ReportFormat) {
    match report::persist(snapshot, path, format) {
        Ok(()) => eprintln!("Results saved to {}", path.display()),
        Err(e) => tracing::error!(path = %path.display(), error = %e, "error saving results to file"),
    }
}
