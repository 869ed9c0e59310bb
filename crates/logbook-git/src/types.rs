//! Git types

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

/// Trailing version in a tag name: `v1.2.3`, `cli-v1.2.3`, `pkg@1.2.3`, `release/1.2`
static TAG_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[@/_-])v?(?P<version>\d+\.\d+(?:\.\d+)?(?:[-+][0-9A-Za-z.+-]+)?)$")
        .expect("Invalid regex")
});

/// A tag and the commit it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    /// Short tag name (without `refs/tags/`)
    pub name: String,
    /// Commit id the tag peels to
    pub commit: String,
    /// Semantic version parsed from the name
    pub version: Option<Version>,
}

impl TagInfo {
    pub fn new(name: impl Into<String>, commit: impl Into<String>) -> Self {
        let name = name.into();
        let version = parse_tag_version(&name);
        Self {
            name,
            commit: commit.into(),
            version,
        }
    }

    /// Order by version, unversioned tags sorting first
    pub fn cmp_version(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

/// Parse the semantic version at the end of a tag name.
///
/// Two-component versions (`1.4`) are read as `1.4.0`.
pub fn parse_tag_version(tag: &str) -> Option<Version> {
    let caps = TAG_VERSION_REGEX.captures(tag)?;
    let raw = caps.name("version")?.as_str();

    if let Ok(version) = Version::parse(raw) {
        return Some(version);
    }

    // major.minor with optional suffix
    let split = raw.find(['-', '+']).unwrap_or(raw.len());
    let (core, suffix) = raw.split_at(split);
    Version::parse(&format!("{}.0{}", core, suffix)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(tag: &str) -> Option<String> {
        parse_tag_version(tag).map(|v| v.to_string())
    }

    #[test]
    fn test_parse_tag_version() {
        assert_eq!(version("v1.0.0").as_deref(), Some("1.0.0"));
        assert_eq!(version("1.0.0").as_deref(), Some("1.0.0"));
        assert_eq!(version("widgets@1.2.0").as_deref(), Some("1.2.0"));
        assert_eq!(version("widgets@v1.2.0").as_deref(), Some("1.2.0"));
        assert_eq!(version("cli-v2.0.0-rc.1").as_deref(), Some("2.0.0-rc.1"));
        assert_eq!(version("release/1.4").as_deref(), Some("1.4.0"));
    }

    #[test]
    fn test_unversioned_tags() {
        assert_eq!(version("nightly"), None);
        assert_eq!(version("v1"), None);
        assert_eq!(version("build1.2.3"), None);
    }

    #[test]
    fn test_cmp_version() {
        let old = TagInfo::new("v1.9.0", "a");
        let new = TagInfo::new("v1.10.0", "b");
        let none = TagInfo::new("nightly", "c");
        assert_eq!(old.cmp_version(&new), Ordering::Less);
        assert_eq!(none.cmp_version(&old), Ordering::Less);
    }
}
