//! Typed failures of the measurements API client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The API answered with a non-success status code.
    #[error("request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// The index lookup matched nothing.
    #[error("no measurement found for report_id {report_id}")]
    NotFound { report_id: String },

    /// An index result carried no `measurement_url` to fetch.
    #[error("index result for report_id {report_id} has no measurement_url")]
    MissingMeasurementUrl { report_id: String },

    /// The base URL or a returned measurement URL could not be parsed.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
