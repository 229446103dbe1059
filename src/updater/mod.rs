/// Whether `current` is older than the minimum launcher version the client
/// still accepts.
#[must_use]
pub fn is_outdated(current: &str, minimum: &str) -> bool {
    compare_versions(&normalize_version(current), &normalize_version(minimum))
        == VersionComparison::Less
}

#[derive(Debug, PartialEq, Eq)]
enum VersionComparison {
    Greater,
    Equal,
    Less,
}

/// Normalize version string by removing 'v' prefix and cleaning up.
fn normalize_version(version: &str) -> String {
    version.trim().trim_start_matches('v').to_owned()
}

/// Compare two dotted versions.
/// Returns Greater if `a` > `b`, Equal if `a` == `b`, Less if `a` < `b`.
fn compare_versions(a: &str, b: &str) -> VersionComparison {
    let parts_a: Vec<u32> = parse_version_parts(a);
    let parts_b: Vec<u32> = parse_version_parts(b);

    let max_len = parts_a.len().max(parts_b.len());

    for i in 0..max_len {
        let a_part = parts_a.get(i).copied().unwrap_or(0);
        let b_part = parts_b.get(i).copied().unwrap_or(0);

        if a_part > b_part {
            return VersionComparison::Greater;
        } else if a_part < b_part {
            return VersionComparison::Less;
        }
    }

    VersionComparison::Equal
}

/// Parse version string into parts (e.g., "2.1.0" -> [2, 1, 0]).
fn parse_version_parts(version: &str) -> Vec<u32> {
    version
        .split('.')
        .filter_map(|part| part.parse::<u32>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_version_strings() {
        assert_eq!(normalize_version("v2.1.0"), "2.1.0");
        assert_eq!(normalize_version("2.1.0"), "2.1.0");
        assert_eq!(normalize_version("  v1.2.3  "), "1.2.3");
    }

    #[test]
    fn parses_version_parts_correctly() {
        assert_eq!(parse_version_parts("2.1.0"), vec![2, 1, 0]);
        assert_eq!(parse_version_parts("10.0"), vec![10, 0]);
        assert_eq!(parse_version_parts("invalid"), Vec::<u32>::new());
    }

    #[test]
    fn compares_versions_correctly() {
        assert_eq!(compare_versions("2.1.1", "2.1.0"), VersionComparison::Greater);
        assert_eq!(compare_versions("3.0.0", "2.9.9"), VersionComparison::Greater);
        assert_eq!(compare_versions("2.1.0", "2.1.0"), VersionComparison::Equal);
        assert_eq!(compare_versions("2.0.9", "2.1.0"), VersionComparison::Less);
        assert_eq!(compare_versions("2.1", "2.1.0"), VersionComparison::Equal);
    }

    #[test]
    fn detects_outdated_launcher() {
        assert!(is_outdated("2.0.4", "2.1.0"));
        assert!(is_outdated("v1.9", "2"));
        assert!(!is_outdated("2.1.0", "2.1.0"));
        assert!(!is_outdated("2.1.0", "v2.0.0"));
        assert!(!is_outdated("2.1", "2.1.0"));
    }
}
