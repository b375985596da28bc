use semver::Version;
use serde::Deserialize;
use std::fmt;

/// The registry's record of the latest published release
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseMetadata {
    pub version: String,
    /// Source revision the release was built from, when the registry knows it
    #[serde(rename = "gitHead", default)]
    pub git_head: Option<String>,
}

impl ReleaseMetadata {
    /// True when this release was built from exactly `revision`
    pub fn is_built_from(&self, revision: &str) -> bool {
        self.git_head.as_deref() == Some(revision)
    }
}

/// Publish access level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    #[default]
    Public,
    Restricted,
}

impl Access {
    pub fn from_private(private: bool) -> Self {
        if private {
            Access::Restricted
        } else {
            Access::Public
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Restricted => "restricted",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a release run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The current revision is already the latest release
    Skipped,
    /// A new version was published
    Released(Version),
    /// The new version was computed but nothing was written
    DryRun(Version),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_registry_latest() {
        let json = r#"{"name":"widget","version":"1.0.0","gitHead":"abc123","dist":{}}"#;
        let meta: ReleaseMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.version, "1.0.0");
        assert_eq!(meta.git_head.as_deref(), Some("abc123"));
        assert!(meta.is_built_from("abc123"));
        assert!(!meta.is_built_from("def456"));
    }

    #[test]
    fn test_deserialize_without_git_head() {
        let meta: ReleaseMetadata = serde_json::from_str(r#"{"version":"0.3.1"}"#).unwrap();
        assert_eq!(meta.git_head, None);
        assert!(!meta.is_built_from(""));
    }

    #[test]
    fn test_access() {
        assert_eq!(Access::from_private(true), Access::Restricted);
        assert_eq!(Access::from_private(false).to_string(), "public");
        assert_eq!(Access::Restricted.to_string(), "restricted");
    }
}
