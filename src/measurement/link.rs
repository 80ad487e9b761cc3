/// Route of the measurement detail page.
pub const MEASUREMENT_ROUTE: &str = "/measurement";

/// Build the relative link to a measurement's detail page.
///
/// `report_id` always comes first; `input` is appended only when present and
/// non-empty. Values are not percent-encoded, so an `input` containing `&` or
/// `=` produces an ambiguous query string.
pub fn build_detail_link(report_id: &str, input: Option<&str>) -> String {
    let mut href = format!("{}?report_id={}", MEASUREMENT_ROUTE, report_id);
    if let Some(input) = input.filter(|i| !i.is_empty()) {
        href.push_str("&input=");
        href.push_str(input);
    }
    href
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_id_only() {
        assert_eq!(build_detail_link("r1", None), "/measurement?report_id=r1");
    }

    #[test]
    fn test_with_input() {
        assert_eq!(
            build_detail_link("r1", Some("http://x.com")),
            "/measurement?report_id=r1&input=http://x.com"
        );
    }

    #[test]
    fn test_empty_input_omitted() {
        assert_eq!(build_detail_link("r1", Some("")), "/measurement?report_id=r1");
    }

    #[test]
    fn test_input_not_encoded() {
        assert_eq!(
            build_detail_link("r1", Some("http://x.com/?a=1&b=2")),
            "/measurement?report_id=r1&input=http://x.com/?a=1&b=2"
        );
    }
}
