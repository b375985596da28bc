use crate::config::Config;
use crate::domain::{CommitRecord, IncrementKind};
use crate::error::{ReleaseError, Result};
use regex::Regex;

const BREAKING_MARKERS: [&str; 2] = ["BREAKING CHANGE", "BREAKING-CHANGE"];

/// Decides the increment kind for a set of commits.
///
/// Prefix lists come from [`Config`] and are compiled once into
/// case-insensitive patterns anchored at the start of the header. Entries
/// are regular expressions, so `feat|perf` and `feat` behave as expected.
#[derive(Debug, Clone)]
pub struct CommitClassifier {
    minor: Option<Regex>,
    major: Option<Regex>,
}

impl CommitClassifier {
    /// Create a classifier from the run configuration
    pub fn new(config: &Config) -> Result<Self> {
        Self::from_types(&config.minor_types, &config.major_types)
    }

    /// Create a classifier from explicit prefix lists
    pub fn from_types(minor_types: &[String], major_types: &[String]) -> Result<Self> {
        Ok(CommitClassifier {
            minor: compile_prefixes(minor_types)?,
            major: compile_prefixes(major_types)?,
        })
    }

    /// True if the commit signals a breaking change
    pub fn is_major(&self, commit: &CommitRecord) -> bool {
        if commit.header.contains("!:") {
            return true;
        }

        if has_breaking_marker(&commit.header)
            || commit.body.as_deref().is_some_and(has_breaking_marker)
        {
            return true;
        }

        self.major
            .as_ref()
            .is_some_and(|re| re.is_match(&commit.header))
    }

    /// True if the commit header starts with a configured minor type
    pub fn is_minor(&self, commit: &CommitRecord) -> bool {
        self.minor
            .as_ref()
            .is_some_and(|re| re.is_match(&commit.header))
    }

    /// Classify a commit range.
    ///
    /// Any breaking commit makes the range major, otherwise any minor
    /// commit makes it minor. Order does not matter and an empty range is
    /// a patch.
    pub fn classify(&self, commits: &[CommitRecord]) -> IncrementKind {
        if commits.iter().any(|c| self.is_major(c)) {
            IncrementKind::Major
        } else if commits.iter().any(|c| self.is_minor(c)) {
            IncrementKind::Minor
        } else {
            IncrementKind::Patch
        }
    }
}

fn has_breaking_marker(text: &str) -> bool {
    BREAKING_MARKERS.iter().any(|marker| text.contains(marker))
}

fn compile_prefixes(types: &[String]) -> Result<Option<Regex>> {
    let alternatives: Vec<&str> = types
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    let pattern = format!("(?i)^(?:{})", alternatives.join("|"));
    Regex::new(&pattern).map(Some).map_err(|e| {
        ReleaseError::config(format!(
            "Invalid commit type pattern '{}': {}",
            alternatives.join(","),
            e
        ))
    })
}
