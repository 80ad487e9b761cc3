//! Test-name metadata.
//!
//! - [`registry`] — the static test and test-group tables.
//! - [`resolve_test_metadata`] — total lookup of a test identifier, falling
//!   back to the default group.
//! - [`catalog`] — every registered test, for the `tests` command.

pub mod registry;

use crate::models::TestMetadata;
use registry::{default_group, test_group, test_info};

/// Resolve display metadata for a test identifier.
///
/// Unknown identifiers resolve to the default group and keep the identifier
/// itself as their name.
pub fn resolve_test_metadata(test_name: &str) -> TestMetadata {
    let Some(test) = test_info(test_name) else {
        let group = default_group();
        return TestMetadata {
            name: test_name.to_string(),
            group_name: group.name.to_string(),
            icon: group.icon,
            color: group.color,
        };
    };

    let group = test_group(test.group).unwrap_or_else(default_group);
    TestMetadata {
        name: test.name.to_string(),
        group_name: group.name.to_string(),
        icon: group.icon,
        color: group.color,
    }
}

/// Every registered test with its resolved metadata, sorted by identifier.
pub fn catalog() -> Vec<(&'static str, TestMetadata)> {
    registry::test_ids()
        .into_iter()
        .map(|id| (id, resolve_test_metadata(id)))
        .collect()
}

/// Human-readable test name, or the identifier when it is not registered.
pub fn test_display_name(test_name: &str) -> String {
    test_info(test_name)
        .map(|t| t.name.to_string())
        .unwrap_or_else(|| test_name.to_string())
}
