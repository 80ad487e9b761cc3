use anyhow::Result;
use serde_json::{json, Value};

use crate::models::{DetailHeader, MeasurementDetail, PageMetadata, ResultRow, TestMetadata};

/// Search results with their derived presentation fields.
pub fn results(rows: &[ResultRow], metadata: &PageMetadata) -> Result<String> {
    let doc = json!({
        "metadata": metadata,
        "results": rows,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// A measurement with its header and the duplicates flag.
pub fn detail(header: &DetailHeader, detail: &MeasurementDetail) -> Result<String> {
    let doc: Value = json!({
        "header": header,
        "duplicates": detail.duplicates,
        "measurement": detail.measurement,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// The test catalogue keyed by identifier.
pub fn catalog(entries: &[(&str, TestMetadata)]) -> Result<String> {
    let doc: serde_json::Map<String, Value> = entries
        .iter()
        .map(|(id, meta)| -> Result<(String, Value)> {
            Ok((id.to_string(), serde_json::to_value(meta)?))
        })
        .collect::<Result<_>>()?;
    Ok(serde_json::to_string_pretty(&doc)?)
}
