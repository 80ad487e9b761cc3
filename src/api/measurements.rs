use anyhow::Result;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{MeasurementDetail, ResultsPage};

const INDEX_PATH: &str = "/api/v1/measurements";

/// Filters accepted by the measurements index. Only present fields are sent.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub report_id: Option<String>,
    pub input: Option<String>,
    pub probe_cc: Option<String>,
    pub probe_asn: Option<String>,
    pub test_name: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SearchQuery {
    /// Query lookup of a single report, optionally narrowed to one input.
    pub fn for_report(report_id: &str, input: Option<&str>) -> Self {
        SearchQuery {
            report_id: Some(report_id.to_string()),
            input: input.filter(|i| !i.is_empty()).map(str::to_string),
            ..Default::default()
        }
    }

    /// Query parameters in a stable order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let strings = [
            ("report_id", &self.report_id),
            ("input", &self.input),
            ("probe_cc", &self.probe_cc),
            ("probe_asn", &self.probe_asn),
            ("test_name", &self.test_name),
            ("since", &self.since),
            ("until", &self.until),
        ];
        let mut params: Vec<(&'static str, String)> = strings
            .into_iter()
            .filter_map(|(k, v)| v.clone().map(|v| (k, v)))
            .collect();

        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        params
    }
}

/// Fetch one page of the measurements index.
pub async fn search(client: &Client, base_url: &str, query: &SearchQuery) -> Result<ResultsPage> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), INDEX_PATH);
    let params = query.params();
    debug!(%url, ?params, "querying measurements index");

    let response = client
        .get(&url)
        .query(&params)
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url,
        }
        .into());
    }

    let page: ResultsPage = response.json().await?;
    debug!(results = page.results.len(), "index page received");
    Ok(page)
}

/// Look up a measurement by report id (and optional input), then fetch its raw content.
///
/// Returns `Ok(None)` when the index has no match. The raw-content request is
/// only issued after the index lookup succeeds and always targets the first
/// result's `measurement_url`. More than one index result is reported through
/// [`MeasurementDetail::duplicates`]. Failures are returned as-is; nothing is retried.
pub async fn fetch_measurement(
    client: &Client,
    base_url: &str,
    report_id: &str,
    input: Option<&str>,
) -> Result<Option<MeasurementDetail>> {
    let page = search(client, base_url, &SearchQuery::for_report(report_id, input)).await?;

    let Some(first) = page.results.first() else {
        debug!(report_id, "index lookup returned no results");
        return Ok(None);
    };

    let measurement_url = first
        .measurement_url
        .as_deref()
        .ok_or_else(|| ApiError::MissingMeasurementUrl {
            report_id: report_id.to_string(),
        })?;

    let duplicates = page.results.len() > 1;
    if duplicates {
        warn!(
            report_id,
            results = page.results.len(),
            "duplicate results for measurement lookup, using the first"
        );
    }

    let measurement = fetch_raw(client, base_url, measurement_url).await?;
    Ok(Some(MeasurementDetail {
        measurement,
        duplicates,
    }))
}

/// Fetch the raw JSON content of a measurement.
pub async fn fetch_raw(client: &Client, base_url: &str, measurement_url: &str) -> Result<Value> {
    let url = resolve_url(base_url, measurement_url)?;
    debug!(%url, "fetching raw measurement");

    let response = client
        .get(url.clone())
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        }
        .into());
    }

    Ok(response.json().await?)
}

/// Absolute URLs are used as-is; anything else is appended to `base_url`,
/// keeping any path prefix the base carries.
pub fn resolve_url(base_url: &str, target: &str) -> Result<Url, ApiError> {
    if let Ok(url) = Url::parse(target) {
        return Ok(url);
    }
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        target.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| ApiError::InvalidUrl {
        url: joined.clone(),
        reason: e.to_string(),
    })
}
