use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::measurement::classifier::legend;
use crate::models::{
    ColorToken, DetailHeader, DisplayFragments, MeasurementDetail, PageMetadata, ResultRow,
    TagStyle, TestMetadata,
};

/// Render the search results list.
pub fn render_results(rows: &[ResultRow], metadata: &PageMetadata, quiet: bool) -> Result<()> {
    if !quiet {
        println!(
            "\n {} v{}\n",
            "ooni-explorer".bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!(" {}\n", legend_line());
    }

    if rows.is_empty() {
        println!(" No measurements found.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(""),
            Cell::new("Country").add_attribute(Attribute::Bold),
            Cell::new("Network").add_attribute(Attribute::Bold),
            Cell::new("Input").add_attribute(Attribute::Bold),
            Cell::new("Test").add_attribute(Attribute::Bold),
            Cell::new("Date").add_attribute(Attribute::Bold),
            Cell::new("Result").add_attribute(Attribute::Bold),
            Cell::new("Details").add_attribute(Attribute::Bold),
        ]);

    for row in rows {
        let c = &row.classification;
        table.add_row(vec![
            Cell::new(paint("█", c.color).to_string()),
            Cell::new(&row.probe_cc).add_attribute(Attribute::Bold),
            Cell::new(&row.asn),
            Cell::new(row.input.as_ref().map(styled_input).unwrap_or_default()),
            Cell::new(&row.test_name),
            Cell::new(&row.date),
            Cell::new(styled_tag(c.label, c.tag_style)).set_alignment(CellAlignment::Center),
            Cell::new(&row.detail_link),
        ]);
    }

    println!("{}", table);
    println!(" {}", page_footer(metadata, rows.len()));
    Ok(())
}

/// Render the detail view of one measurement.
pub fn render_detail(header: &DetailHeader, detail: &MeasurementDetail, quiet: bool) -> Result<()> {
    let meta = &header.metadata;
    let (r, g, b) = meta.color.rgb();

    println!();
    if !header.country_code.is_empty() {
        println!(" {}", header.country_code);
    }
    println!(
        " {}  {}",
        paint(&meta.name, meta.color).bold(),
        format!(" {} {} ", meta.icon, meta.group_name)
            .on_truecolor(255, 255, 255)
            .truecolor(r, g, b)
    );
    println!(" {}\n", header.start_time);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    let input = header.input.as_ref().map(styled_input).unwrap_or_default();
    for (label, value) in [
        ("URL", input.as_str()),
        ("Network", header.network.as_str()),
        ("Platform", header.platform.as_str()),
        ("Runtime", header.runtime.as_str()),
    ] {
        table.add_row(vec![
            Cell::new(format!("{}:", label)).add_attribute(Attribute::Bold),
            Cell::new(value),
        ]);
    }
    println!("{}\n", table);

    if detail.duplicates {
        println!(
            " {} The lookup matched more than one measurement; showing the first.\n",
            "[WARN]".yellow().bold()
        );
    }

    if !quiet {
        println!(" {}\n", "Raw Measurement Data".bold());
    }
    println!("{}", serde_json::to_string_pretty(&detail.measurement)?);
    Ok(())
}

/// Render the test registry as a table.
pub fn render_catalog(entries: &[(&str, TestMetadata)]) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Identifier").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Group").add_attribute(Attribute::Bold),
            Cell::new("Icon").add_attribute(Attribute::Bold),
        ]);

    for (id, meta) in entries {
        table.add_row(vec![
            Cell::new(id),
            Cell::new(&meta.name),
            Cell::new(paint(&meta.group_name, meta.color).to_string()),
            Cell::new(meta.icon),
        ]);
    }

    println!("{}", table);
    Ok(())
}

/// Input with an emphasized `https` prefix and a highlighted host.
fn styled_input(fragments: &DisplayFragments) -> String {
    match fragments {
        DisplayFragments::Plain { host, path } => format!("{}{}", host.bold(), path),
        DisplayFragments::Secure { host, path } => format!(
            "{}://{}{}",
            paint("https", ColorToken::Green8),
            host.bold(),
            path
        ),
        DisplayFragments::Raw { text } => text.clone(),
    }
}

fn styled_tag(label: &str, style: TagStyle) -> String {
    let (r, g, b) = ColorToken::Gray7.rgb();
    match style {
        TagStyle::Filled => format!(" {} ", label)
            .white()
            .on_truecolor(r, g, b)
            .to_string(),
        TagStyle::Outlined => format!("( {} )", label).truecolor(r, g, b).to_string(),
        TagStyle::Plain => label.to_string(),
    }
}

fn legend_line() -> String {
    legend()
        .iter()
        .map(|(color, label)| format!("{} {}", paint("●", *color), label))
        .collect::<Vec<_>>()
        .join("   ")
}

fn paint(text: &str, color: ColorToken) -> ColoredString {
    let (r, g, b) = color.rgb();
    text.truecolor(r, g, b)
}

/// `Page 2/60 · 50 of 2983 measurements`, degrading when the index omits metadata.
fn page_footer(metadata: &PageMetadata, shown: usize) -> String {
    let page = match (metadata.current_page, metadata.pages) {
        (Some(current), Some(pages)) => format!("Page {}/{} · ", current, pages),
        (Some(current), None) => format!("Page {} · ", current),
        _ => String::new(),
    };
    let count = match metadata.count {
        Some(total) => format!("{} of {} measurements", shown, total),
        None => format!("{} measurements", shown),
    };
    format!("{}{}", page, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_footer() {
        let meta = PageMetadata {
            count: Some(2983),
            current_page: Some(2),
            pages: Some(60),
            ..Default::default()
        };
        assert_eq!(page_footer(&meta, 50), "Page 2/60 · 50 of 2983 measurements");
        assert_eq!(page_footer(&PageMetadata::default(), 3), "3 measurements");
    }

    #[test]
    fn test_plain_tag_is_unstyled() {
        assert_eq!(styled_tag("Normal", TagStyle::Plain), "Normal");
        assert!(styled_tag("Anomaly", TagStyle::Outlined).contains("( Anomaly )"));
    }

    #[test]
    fn test_raw_input_is_unstyled() {
        let raw = DisplayFragments::Raw {
            text: "dns://8.8.8.8".to_string(),
        };
        assert_eq!(styled_input(&raw), "dns://8.8.8.8");
    }
}
