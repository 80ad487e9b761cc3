use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::measurements::SearchQuery;

static COUNTRY_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());
static ASN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^AS[0-9]+$").unwrap());

#[derive(Parser, Debug)]
#[command(
    name = "ooni-explorer",
    about = "Browse OONI network measurement results",
    version
)]
pub struct Cli {
    /// Config file [default: ./.ooni-explorer/config.toml, fallback ~/.config/ooni-explorer/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Measurements API base URL (overrides config and MEASUREMENTS_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Report format
    #[arg(long, global = true, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print results, no progress or logs below error
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List measurements matching the given filters
    Search(SearchArgs),
    /// Show a single measurement with its raw data
    Measurement(MeasurementArgs),
    /// List the known test names and their groups
    Tests,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Only measurements of this report
    #[arg(long)]
    pub report_id: Option<String>,

    /// Only measurements of this input (usually a URL)
    #[arg(long)]
    pub input: Option<String>,

    /// Two-letter country code, e.g. IT
    #[arg(long, value_name = "CC", value_parser = parse_country_code)]
    pub probe_cc: Option<String>,

    /// Network, e.g. AS30722
    #[arg(long, value_name = "ASN", value_parser = parse_asn)]
    pub probe_asn: Option<String>,

    /// Test identifier, e.g. web_connectivity
    #[arg(long)]
    pub test_name: Option<String>,

    /// Start of the time range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub since: Option<String>,

    /// End of the time range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub until: Option<String>,

    /// Results per page [default: display.page_size]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

impl SearchArgs {
    /// Build the index query; `page_size` applies when `--limit` is absent.
    pub fn to_query(&self, page_size: u32) -> SearchQuery {
        let limit = self.limit.unwrap_or(page_size);
        SearchQuery {
            report_id: self.report_id.clone(),
            input: self.input.clone(),
            probe_cc: self.probe_cc.clone(),
            probe_asn: self.probe_asn.clone(),
            test_name: self.test_name.clone(),
            since: self.since.clone(),
            until: self.until.clone(),
            limit: Some(limit),
            offset: Some(self.page.saturating_sub(1).saturating_mul(limit)),
        }
    }
}

#[derive(Args, Debug)]
pub struct MeasurementArgs {
    /// Report identifier
    pub report_id: String,

    /// Input within the report (usually a URL)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

fn parse_country_code(value: &str) -> Result<String, String> {
    if COUNTRY_CODE_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(format!("expected two uppercase letters, got {:?}", value))
    }
}

fn parse_asn(value: &str) -> Result<String, String> {
    if ASN_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(format!("expected AS followed by digits, got {:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from([
            "ooni-explorer",
            "search",
            "--probe-cc",
            "IT",
            "--probe-asn",
            "AS30722",
            "--limit",
            "20",
            "--page",
            "3",
        ]);
        let Command::Search(args) = cli.command else {
            panic!("expected search command");
        };
        let q = args.to_query(50);
        assert_eq!(q.probe_cc.as_deref(), Some("IT"));
        assert_eq!(q.limit, Some(20));
        assert_eq!(q.offset, Some(40));
    }

    #[test]
    fn test_page_size_default() {
        let cli = Cli::parse_from(["ooni-explorer", "search"]);
        let Command::Search(args) = cli.command else {
            panic!("expected search command");
        };
        let q = args.to_query(50);
        assert_eq!(q.limit, Some(50));
        assert_eq!(q.offset, Some(0));
    }

    #[test]
    fn test_invalid_filters_rejected() {
        assert!(Cli::try_parse_from(["ooni-explorer", "search", "--probe-cc", "italy"]).is_err());
        assert!(Cli::try_parse_from(["ooni-explorer", "search", "--probe-asn", "30722"]).is_err());
        assert!(Cli::try_parse_from(["ooni-explorer", "search", "--page", "0"]).is_err());
    }

    #[test]
    fn test_filter_parsers() {
        assert_eq!(parse_country_code("BR"), Ok("BR".to_string()));
        assert!(parse_country_code("br").is_err());
        assert_eq!(parse_asn("AS3269"), Ok("AS3269".to_string()));
        assert!(parse_asn("AS").is_err());
        assert!(parse_asn("AS1").is_ok());
    }

    #[test]
    fn test_parse_measurement_with_global_flags() {
        let cli = Cli::parse_from([
            "ooni-explorer",
            "measurement",
            "20170811T151022Z_AS30722_abc",
            "--input",
            "http://x.com",
            "--report",
            "json",
            "-q",
        ]);
        assert!(cli.quiet);
        assert!(matches!(cli.report, ReportFormat::Json));
        let Command::Measurement(args) = cli.command else {
            panic!("expected measurement command");
        };
        assert_eq!(args.report_id, "20170811T151022Z_AS30722_abc");
        assert_eq!(args.input.as_deref(), Some("http://x.com"));
    }

    #[test]
    fn test_parse_tests_command() {
        let cli = Cli::parse_from(["ooni-explorer", "tests"]);
        assert!(matches!(cli.command, Command::Tests));
    }
}
