//! `ooni-explorer` — browse OONI network measurement results from the terminal.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and set up logging ([`logging`]).
//! 2. Load config ([`config::load_config`]); `--api-url` wins over the file
//!    and `MEASUREMENTS_URL`.
//! 3. Query the measurements API ([`api`]):
//!    - `search` fetches one page of the index,
//!    - `measurement` looks up a report, then fetches its raw content,
//!    - `tests` needs no request and lists the test registry.
//! 4. Shape each record for display ([`measurement`], [`test_info`]).
//! 5. Render the requested report ([`report`]).

mod api;
mod cli;
mod config;
mod error;
mod logging;
mod measurement;
mod models;
mod report;
mod test_info;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::{debug, info};

use api::measurements::{fetch_measurement, search};
use cli::{Cli, Command, MeasurementArgs, ReportFormat, SearchArgs};
use config::{load_config, Config};
use error::ApiError;
use logging::{init_logging, Verbosity};
use measurement::display::{build_detail_header, build_row};
use models::ResultRow;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?.with_base_url(cli.api_url.clone());
    config.validate()?;
    debug!(base_url = %config.api.base_url, timeout_secs = config.api.timeout_secs, "configuration loaded");

    let client = api::build_client(config.api.timeout_secs)?;

    match &cli.command {
        Command::Search(args) => run_search(&cli, &config, &client, args).await,
        Command::Measurement(args) => run_measurement(&cli, &config, &client, args).await,
        Command::Tests => {
            let entries = test_info::catalog();
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_catalog(&entries)?,
                ReportFormat::Json => println!("{}", report::json::catalog(&entries)?),
            }
            Ok(())
        }
    }
}

async fn run_search(cli: &Cli, config: &Config, client: &Client, args: &SearchArgs) -> Result<()> {
    let query = args.to_query(config.display.page_size);

    let pb = spinner(cli.quiet, "Fetching measurements")?;
    let result = search(client, &config.api.base_url, &query).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let page = result?;
    info!(results = page.results.len(), "search complete");

    let rows: Vec<ResultRow> = page.results.iter().map(build_row).collect();

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render_results(&rows, &page.metadata, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", report::json::results(&rows, &page.metadata)?);
        }
    }
    Ok(())
}

async fn run_measurement(
    cli: &Cli,
    config: &Config,
    client: &Client,
    args: &MeasurementArgs,
) -> Result<()> {
    let pb = spinner(cli.quiet, "Fetching measurement")?;
    let result = fetch_measurement(
        client,
        &config.api.base_url,
        &args.report_id,
        args.input.as_deref(),
    )
    .await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let Some(detail) = result? else {
        return Err(ApiError::NotFound {
            report_id: args.report_id.clone(),
        }
        .into());
    };

    let header = build_detail_header(&detail.measurement);

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render_detail(&header, &detail, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", report::json::detail(&header, &detail)?);
        }
    }
    Ok(())
}

/// Spinner on stderr while a request is in flight; `None` with `--quiet`.
fn spinner(quiet: bool, message: &str) -> Result<Option<ProgressBar>> {
    if quiet {
        return Ok(None);
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(Some(pb))
}
