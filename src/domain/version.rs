use crate::error::{ReleaseError, Result};
use semver::{BuildMetadata, Prerelease, Version};
use std::fmt;

/// Magnitude of a semantic version bump.
///
/// Ordered by precedence so the strongest signal in a commit range wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum IncrementKind {
    #[default]
    Patch,
    Minor,
    Major,
}

impl IncrementKind {
    /// Apply this increment to a baseline version.
    ///
    /// Lower components reset to zero; pre-release and build metadata are
    /// always dropped, so the result is strictly greater than `current`.
    pub fn apply(&self, current: &Version) -> Version {
        let mut next = current.clone();
        match self {
            IncrementKind::Major => {
                next.major += 1;
                next.minor = 0;
                next.patch = 0;
            }
            IncrementKind::Minor => {
                next.minor += 1;
                next.patch = 0;
            }
            IncrementKind::Patch => {
                next.patch += 1;
            }
        }
        next.pre = Prerelease::EMPTY;
        next.build = BuildMetadata::EMPTY;
        next
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IncrementKind::Major => "major",
            IncrementKind::Minor => "minor",
            IncrementKind::Patch => "patch",
        }
    }
}

impl fmt::Display for IncrementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The baseline read from the registry and the version it becomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTransition {
    pub current: Version,
    pub next: Version,
    pub kind: IncrementKind,
}

impl VersionTransition {
    pub fn new(current: Version, kind: IncrementKind) -> Self {
        let next = kind.apply(&current);
        VersionTransition {
            current,
            next,
            kind,
        }
    }

    /// Tag name for the new version (e.g. `v1.4.0`)
    pub fn tag_name(&self) -> String {
        tag_name(&self.next)
    }
}

/// Format a version as a release tag name
pub fn tag_name(version: &Version) -> String {
    format!("v{}", version)
}

/// Parse a version as printed by a package manager.
///
/// Tolerates surrounding whitespace, quotes and a leading `v`, since
/// `npm view` output ends with a newline and tags carry the prefix.
pub fn parse_version(raw: &str) -> Result<Version> {
    let clean = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim_start_matches('v')
        .trim_start_matches('V');

    Version::parse(clean)
        .map_err(|e| ReleaseError::version(format!("Invalid version '{}': {}", raw.trim(), e)))
}
