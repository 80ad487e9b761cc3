use crate::models::{Category, Classification, ColorToken, Measurement, TagStyle};

pub const COLOR_NORMAL: ColorToken = ColorToken::Green7;
pub const COLOR_ERROR: ColorToken = ColorToken::Yellow5;
pub const COLOR_CONFIRMED: ColorToken = ColorToken::Red8;
pub const COLOR_ANOMALY: ColorToken = ColorToken::Yellow8;

/// Classify a measurement for display.
///
/// Precedence, first match wins:
/// - `confirmed == true` → Confirmed (filled tag)
/// - `anomaly == true`   → Anomaly (outlined tag)
/// - otherwise           → Normal
///
/// Absent flags count as `false`. The `failure` flag is not consulted.
pub fn classify(msmt: &Measurement) -> Classification {
    if msmt.is_confirmed() {
        return Classification {
            category: Category::Confirmed,
            color: COLOR_CONFIRMED,
            label: "Confirmed",
            tag_style: TagStyle::Filled,
        };
    }

    // TODO: add a Failure category (orange4) once the index reports
    // `failure` consistently.
    if msmt.is_anomaly() {
        return Classification {
            category: Category::Anomaly,
            color: COLOR_ANOMALY,
            label: "Anomaly",
            tag_style: TagStyle::Outlined,
        };
    }

    Classification {
        category: Category::Normal,
        color: COLOR_NORMAL,
        label: "Normal",
        tag_style: TagStyle::Plain,
    }
}

/// Entries of the color legend shown above the results list, in display order.
pub fn legend() -> [(ColorToken, &'static str); 4] {
    [
        (COLOR_ANOMALY, "Anomaly"),
        (COLOR_CONFIRMED, "Confirmed"),
        (COLOR_NORMAL, "OK"),
        (COLOR_ERROR, "Error"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msmt(confirmed: Option<bool>, anomaly: Option<bool>) -> Measurement {
        Measurement {
            confirmed,
            anomaly,
            ..Default::default()
        }
    }

    #[test]
    fn test_confirmed_wins_over_anomaly() {
        for anomaly in [None, Some(false), Some(true)] {
            let c = classify(&msmt(Some(true), anomaly));
            assert_eq!(c.category, Category::Confirmed);
            assert_eq!(c.color, ColorToken::Red8);
            assert_eq!(c.label, "Confirmed");
            assert_eq!(c.tag_style, TagStyle::Filled);
        }
    }

    #[test]
    fn test_anomaly_when_not_confirmed() {
        for confirmed in [None, Some(false)] {
            let c = classify(&msmt(confirmed, Some(true)));
            assert_eq!(c.category, Category::Anomaly);
            assert_eq!(c.color, ColorToken::Yellow8);
            assert_eq!(c.tag_style, TagStyle::Outlined);
        }
    }

    #[test]
    fn test_normal_when_no_flags() {
        let c = classify(&Measurement::default());
        assert_eq!(c.category, Category::Normal);
        assert_eq!(c.color, ColorToken::Green7);
        assert_eq!(c.label, "Normal");

        assert_eq!(classify(&msmt(Some(false), Some(false))).category, Category::Normal);
    }

    #[test]
    fn test_failure_flag_is_ignored() {
        let m = Measurement {
            failure: Some(true),
            ..Default::default()
        };
        assert_eq!(classify(&m).category, Category::Normal);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let m = msmt(None, Some(true));
        assert_eq!(classify(&m), classify(&m));
    }

    #[test]
    fn test_legend_order() {
        let labels: Vec<&str> = legend().iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, vec!["Anomaly", "Confirmed", "OK", "Error"]);
    }
}
