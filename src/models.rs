use serde::{Deserialize, Serialize};

/// One measurement as returned by the index API or the raw-content fetch.
///
/// Every field is optional: the index returns sparse summaries and raw
/// measurements vary by test. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Measurement {
    pub report_id: Option<String>,
    pub measurement_id: Option<String>,
    pub measurement_url: Option<String>,
    pub input: Option<String>,
    pub probe_cc: Option<String>,
    pub probe_asn: Option<String>,
    pub test_name: Option<String>,
    pub measurement_start_time: Option<String>,
    pub confirmed: Option<bool>,
    pub anomaly: Option<bool>,
    /// Carried for completeness; classification does not consult it.
    pub failure: Option<bool>,
}

impl Measurement {
    pub fn is_confirmed(&self) -> bool {
        self.confirmed == Some(true)
    }

    pub fn is_anomaly(&self) -> bool {
        self.anomaly == Some(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Confirmed,
    Anomaly,
    Normal,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Confirmed => write!(f, "Confirmed"),
            Category::Anomaly => write!(f, "Anomaly"),
            Category::Normal => write!(f, "Normal"),
        }
    }
}

/// Visual treatment of the result tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStyle {
    Filled,
    Outlined,
    Plain,
}

/// Palette tokens, named after the open-color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Gray5,
    Gray7,
    Red8,
    Pink6,
    Grape6,
    Violet8,
    Blue5,
    Cyan6,
    Green7,
    Green8,
    Yellow5,
    Yellow8,
}

impl ColorToken {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorToken::Gray5 => (0xad, 0xb5, 0xbd),
            ColorToken::Gray7 => (0x49, 0x50, 0x57),
            ColorToken::Red8 => (0xe0, 0x31, 0x31),
            ColorToken::Pink6 => (0xe6, 0x49, 0x80),
            ColorToken::Grape6 => (0xbe, 0x4b, 0xdb),
            ColorToken::Violet8 => (0x70, 0x48, 0xe8),
            ColorToken::Blue5 => (0x33, 0x9a, 0xf0),
            ColorToken::Cyan6 => (0x15, 0xaa, 0xbf),
            ColorToken::Green7 => (0x37, 0xb2, 0x4d),
            ColorToken::Green8 => (0x2f, 0x9e, 0x44),
            ColorToken::Yellow5 => (0xfc, 0xc4, 0x19),
            ColorToken::Yellow8 => (0xf5, 0x9f, 0x00),
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorToken::Gray5 => "gray5",
            ColorToken::Gray7 => "gray7",
            ColorToken::Red8 => "red8",
            ColorToken::Pink6 => "pink6",
            ColorToken::Grape6 => "grape6",
            ColorToken::Violet8 => "violet8",
            ColorToken::Blue5 => "blue5",
            ColorToken::Cyan6 => "cyan6",
            ColorToken::Green7 => "green7",
            ColorToken::Green8 => "green8",
            ColorToken::Yellow5 => "yellow5",
            ColorToken::Yellow8 => "yellow8",
        };
        write!(f, "{}", name)
    }
}

/// Output of [`classify`](crate::measurement::classifier::classify).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub color: ColorToken,
    pub label: &'static str,
    pub tag_style: TagStyle,
}

/// Descriptive metadata for a test, resolved from the static registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestMetadata {
    pub name: String,
    pub group_name: String,
    pub icon: &'static str,
    pub color: ColorToken,
}

/// How a measurement `input` should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayFragments {
    /// `http:` URL, shown as host followed by the (truncated) path.
    Plain { host: String, path: String },
    /// `https:` URL, shown with an emphasized `https` prefix.
    Secure { host: String, path: String },
    /// Anything else, shown verbatim.
    Raw { text: String },
}

impl std::fmt::Display for DisplayFragments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayFragments::Plain { host, path } => write!(f, "{}{}", host, path),
            DisplayFragments::Secure { host, path } => write!(f, "https://{}{}", host, path),
            DisplayFragments::Raw { text } => write!(f, "{}", text),
        }
    }
}

/// Paging metadata of the measurements index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    pub count: Option<u64>,
    pub current_page: Option<u64>,
    pub pages: Option<u64>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub next_url: Option<String>,
}

/// One page of the measurements index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsPage {
    #[serde(default)]
    pub results: Vec<Measurement>,
    #[serde(default)]
    pub metadata: PageMetadata,
}

/// Raw content of a measurement looked up by report id.
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementDetail {
    pub measurement: serde_json::Value,
    /// The index returned more than one result for the lookup.
    pub duplicates: bool,
}

/// A list entry with everything the renderers need, derived from a [`Measurement`].
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub classification: Classification,
    pub probe_cc: String,
    pub asn: String,
    pub input: Option<DisplayFragments>,
    pub test_name: String,
    pub date: String,
    pub detail_link: String,
}

/// Summary shown above the raw data of a measurement detail view.
#[derive(Debug, Clone, Serialize)]
pub struct DetailHeader {
    pub country_code: String,
    pub metadata: TestMetadata,
    pub start_time: String,
    pub input: Option<DisplayFragments>,
    pub network: String,
    pub platform: String,
    pub runtime: String,
}
