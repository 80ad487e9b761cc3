//! Async HTTP client for the OONI measurements API.
//!
//! - [`measurements`] — index search and the two-step detail fetch
//!   (index lookup, then raw content by `measurement_url`).

pub mod measurements;

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

pub const USER_AGENT: &str = concat!("ooni-explorer/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client with the configured request timeout.
pub fn build_client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}
