//! Pure string helpers for UI5 version display and normalization

use crate::config::{SNAPSHOT_SUFFIX, SNAPSHOT_VERSION};

/// Reduce a version to its first three dot-segments, discarding the
/// build timestamp and anything after it.
///
/// Examples:
/// - "1.95.0.34566363464" -> "1.95.0"
/// - "1.120.0" -> "1.120.0"
pub fn remove_timestamp_from_version(version: &str) -> String {
    version.split('.').take(3).collect::<Vec<_>>().join(".")
}

/// Reduce a version to major.minor, dropping the micro part.
pub fn remove_micro_part(version: &str) -> String {
    version.split('.').take(2).collect::<Vec<_>>().join(".")
}

/// Rewrite a snapshot version into the form the preview CDN serves it
/// under: "1.96.0-snapshot" -> "snapshot-1.96". Released versions pass
/// through unchanged.
pub fn get_formatted_version(version: &str) -> String {
    if version.contains(SNAPSHOT_VERSION) {
        let base = version.split('-').next().unwrap_or(version);
        format!("{}-{}", SNAPSHOT_VERSION, remove_micro_part(base))
    } else {
        version.to_string()
    }
}

/// Snapshot marker for a system-detected version.
///
/// Returns `"-snapshot"` exactly when the raw version carries a 4th
/// (timestamp) segment and its released form is not `latest_version`;
/// `""` otherwise. A system on an unreleased build of the latest
/// version is not flagged.
pub fn add_snapshot(version: &str, latest_version: &str) -> &'static str {
    let has_timestamp = version.split('.').nth(3).is_some();
    if has_timestamp && remove_timestamp_from_version(version) != latest_version {
        SNAPSHOT_SUFFIX
    } else {
        ""
    }
}

/// Strip any trailing display label such as " (latest)" or
/// " (system version)" to recover the raw version token.
pub fn get_trimmed_version(version: &str) -> &str {
    match version.find(" (") {
        Some(index) => version[..index].trim(),
        None => version.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.95.0.34566363464", "1.95.0")]
    #[case("1.120.0", "1.120.0")]
    #[case("1.96", "1.96")]
    #[case("1.119.1-snapshot", "1.119.1-snapshot")]
    fn remove_timestamp_keeps_first_three_segments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(remove_timestamp_from_version(input), expected);
    }

    #[rstest]
    #[case("1.87.3", "1.87")]
    #[case("1.87", "1.87")]
    #[case("1.120.4.5678", "1.120")]
    fn remove_micro_part_keeps_major_minor(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(remove_micro_part(input), expected);
    }

    #[rstest]
    #[case("1.96.0-snapshot", "snapshot-1.96")]
    #[case("1.118.5", "1.118.5")]
    #[case("1.120.0", "1.120.0")]
    fn formatted_version_rewrites_snapshots_only(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(get_formatted_version(input), expected);
    }

    #[rstest]
    // timestamp segment present, not the latest -> marked
    #[case("1.95.0.34566363464", "1.120.0", "-snapshot")]
    // timestamp segment present but it is a build of the latest -> unmarked
    #[case("1.120.0.34566363464", "1.120.0", "")]
    // released three-segment version -> unmarked
    #[case("1.95.0", "1.120.0", "")]
    // "-snapshot" suffix alone is not a timestamp
    #[case("1.119.1-snapshot", "1.120.0", "")]
    fn add_snapshot_requires_timestamp_segment(
        #[case] version: &str,
        #[case] latest: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(add_snapshot(version, latest), expected);
    }

    #[rstest]
    #[case("1.120.0 (latest)", "1.120.0")]
    #[case("1.119.1-snapshot (system version)", "1.119.1-snapshot")]
    #[case("1.119.1 (system version) (latest)", "1.119.1")]
    #[case("1.118.5", "1.118.5")]
    #[case("  1.118.5 ", "1.118.5")]
    fn trimmed_version_strips_labels(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(get_trimmed_version(input), expected);
    }
}
