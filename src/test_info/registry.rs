use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::ColorToken;

/// Display metadata shared by every test in a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestGroup {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: ColorToken,
}

/// A registered test and the group it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestInfo {
    pub name: &'static str,
    pub group: &'static str,
}

pub const DEFAULT_GROUP: &str = "default";

const DEFAULT: TestGroup = TestGroup {
    name: "Legacy Tests",
    icon: "NettestGroupLegacy",
    color: ColorToken::Gray7,
};

static TEST_GROUPS: Lazy<HashMap<&'static str, TestGroup>> = Lazy::new(|| {
    HashMap::from([
        (
            "websites",
            TestGroup {
                name: "Websites",
                icon: "NettestGroupWebsites",
                color: ColorToken::Blue5,
            },
        ),
        (
            "im",
            TestGroup {
                name: "Instant Messaging",
                icon: "NettestGroupInstantMessaging",
                color: ColorToken::Cyan6,
            },
        ),
        (
            "middlebox",
            TestGroup {
                name: "Middleboxes",
                icon: "NettestGroupMiddleBoxes",
                color: ColorToken::Violet8,
            },
        ),
        (
            "performance",
            TestGroup {
                name: "Performance",
                icon: "NettestGroupPerformance",
                color: ColorToken::Grape6,
            },
        ),
        (
            "circumvention",
            TestGroup {
                name: "Circumvention",
                icon: "NettestGroupCircumvention",
                color: ColorToken::Pink6,
            },
        ),
        (DEFAULT_GROUP, DEFAULT),
    ])
});

static TEST_NAMES: Lazy<HashMap<&'static str, TestInfo>> = Lazy::new(|| {
    let entries: [(&'static str, &'static str, &'static str); 18] = [
        // Websites
        ("web_connectivity", "Web Connectivity", "websites"),
        ("http_requests", "HTTP Requests", "websites"),
        ("dns_consistency", "DNS Consistency", "websites"),
        ("http_host", "HTTP Host", "websites"),
        ("dns_injection", "DNS Injection", "websites"),
        ("tcp_connect", "TCP Connect", "websites"),
        // Middleboxes
        ("http_invalid_request_line", "HTTP Invalid Request Line", "middlebox"),
        ("http_header_field_manipulation", "HTTP Header Field Manipulation", "middlebox"),
        // Performance
        ("ndt", "NDT", "performance"),
        ("dash", "DASH", "performance"),
        // Instant messaging
        ("whatsapp", "WhatsApp", "im"),
        ("facebook_messenger", "Facebook Messenger", "im"),
        ("telegram", "Telegram", "im"),
        // Circumvention
        ("bridge_reachability", "Bridge Reachability", "circumvention"),
        ("vanilla_tor", "Vanilla Tor", "circumvention"),
        ("meek_fronted_requests_test", "Meek Fronted Requests", "circumvention"),
        ("psiphon", "Psiphon", "circumvention"),
        ("tor", "Tor", "circumvention"),
    ];

    entries
        .into_iter()
        .map(|(id, name, group)| (id, TestInfo { name, group }))
        .collect()
});

/// Look up a registered test by identifier.
pub fn test_info(id: &str) -> Option<TestInfo> {
    TEST_NAMES.get(id).copied()
}

/// Look up a group by identifier.
pub fn test_group(id: &str) -> Option<TestGroup> {
    TEST_GROUPS.get(id).copied()
}

pub fn default_group() -> TestGroup {
    DEFAULT
}

/// Identifiers of all registered tests, sorted.
pub fn test_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = TEST_NAMES.keys().copied().collect();
    ids.sort_unstable();
    ids
}
