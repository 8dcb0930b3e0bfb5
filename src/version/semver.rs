//! Numeric UI5 version semantics

use semver::Version;

use crate::version::format::get_trimmed_version;

/// Parse a UI5 version string into a `semver::Version`.
///
/// Snapshot qualifiers ("snapshot", "snapshot-untested", a "-snapshot"
/// suffix) and trailing display labels are stripped before parsing; any
/// segments beyond the third are ignored. Each of the three remaining
/// segments is read as its leading decimal digits.
///
/// Returns `None` when fewer than three numeric segments remain, e.g.
/// for "snapshot" or "snapshot-1.96" - callers treat that as "unknown"
/// and stay permissive.
pub fn parse_ui5_version(version: &str) -> Option<Version> {
    let stripped = get_trimmed_version(version)
        .replace("snapshot-untested", "")
        .replace("snapshot-", "")
        .replace("snapshot", "");
    let stripped = stripped.trim().trim_matches('-');

    let mut segments = stripped.split('.');
    let major = leading_number(segments.next()?)?;
    let minor = leading_number(segments.next()?)?;
    let patch = leading_number(segments.next()?)?;
    Some(Version::new(major, minor, patch))
}

/// Leading decimal digits of a segment, so "0-" parses as 0.
fn leading_number(segment: &str) -> Option<u64> {
    let digits = segment
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    segment[..digits].parse().ok()
}

/// Whether `version` is at least `feature_version`.
///
/// Versions that do not parse (snapshots, sentinels, malformed input)
/// are treated as supported - the permissive default for builds whose
/// real level cannot be determined.
pub fn is_feature_supported_version(feature_version: &str, version: &str) -> bool {
    let Some(parsed) = parse_ui5_version(version) else {
        return true;
    };
    let Some(feature) = parse_ui5_version(feature_version) else {
        return true;
    };
    parsed >= feature
}
