use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

use crate::measurement::classifier::classify;
use crate::measurement::input::format_input;
use crate::measurement::link::build_detail_link;
use crate::models::{DetailHeader, Measurement, ResultRow};
use crate::test_info::{resolve_test_metadata, test_display_name};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%SZ"];

/// Render `"AS1234"` as `"AS 1234"`. Values without the prefix are returned as-is.
pub fn format_asn(asn: &str) -> String {
    match asn.split("AS").nth(1) {
        Some(number) => format!("AS {}", number),
        None => asn.to_string(),
    }
}

/// Parse the timestamp shapes the measurements API emits.
pub fn parse_timestamp(ts: &str) -> Option<NaiveDateTime> {
    let ts = ts.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(ts, fmt).ok())
}

/// `YYYY-MM-DD`, or the input verbatim when it cannot be parsed.
pub fn format_date(ts: &str) -> String {
    match parse_timestamp(ts) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => ts.to_string(),
    }
}

/// Long form used in the detail header, e.g. `Aug 11, 2017 3:10 PM`.
pub fn format_timestamp(ts: &str) -> String {
    match parse_timestamp(ts) {
        Some(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => ts.to_string(),
    }
}

/// Derive the list row for a measurement.
pub fn build_row(msmt: &Measurement) -> ResultRow {
    let input = msmt.input.as_deref();
    ResultRow {
        classification: classify(msmt),
        probe_cc: msmt.probe_cc.clone().unwrap_or_default(),
        asn: format_asn(msmt.probe_asn.as_deref().unwrap_or_default()),
        input: format_input(input),
        test_name: test_display_name(msmt.test_name.as_deref().unwrap_or_default()),
        date: format_date(msmt.measurement_start_time.as_deref().unwrap_or_default()),
        detail_link: build_detail_link(msmt.report_id.as_deref().unwrap_or_default(), input),
    }
}

/// Derive the detail-view header from a raw measurement.
pub fn build_detail_header(raw: &Value) -> DetailHeader {
    DetailHeader {
        country_code: field(raw, "probe_cc"),
        metadata: resolve_test_metadata(&field(raw, "test_name")),
        start_time: format_timestamp(&field(raw, "test_start_time")),
        input: format_input(raw.get("input").and_then(Value::as_str)),
        network: field(raw, "probe_asn"),
        platform: field(raw, "software_name"),
        runtime: field(raw, "test_runtime"),
    }
}

/// String form of a top-level scalar field; empty when absent or null.
fn field(raw: &Value, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
