use std::fmt;

/// Non-fatal conditions met while collecting the commit range.
///
/// Each one means the run continues with a fallback source; they are
/// reported to the user but never abort the release.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The registry has no release for the package
    NoPublishedRelease { package: String },
    /// The latest release does not record the revision it was built from
    UnknownReleaseRevision { version: String },
    /// History between the released revision and the current one is unreadable
    HistoryUnavailable {
        from: String,
        to: String,
        reason: String,
    },
    /// The CI event payload could not be read
    EventUnavailable { path: String, reason: String },
    /// Neither source produced any commits
    NoCommits,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPublishedRelease { package } => {
                write!(
                    f,
                    "No published release found for '{}', using CI event commits",
                    package
                )
            }
            BoundaryWarning::UnknownReleaseRevision { version } => {
                write!(
                    f,
                    "Release {} does not record a git revision, using CI event commits",
                    version
                )
            }
            BoundaryWarning::HistoryUnavailable { from, to, reason } => {
                write!(
                    f,
                    "Cannot read history {}..{} ({}), using CI event commits",
                    short(from),
                    short(to),
                    reason
                )
            }
            BoundaryWarning::EventUnavailable { path, reason } => {
                write!(f, "Cannot read CI event '{}': {}", path, reason)
            }
            BoundaryWarning::NoCommits => {
                write!(f, "No commits found, defaulting to a patch release")
            }
        }
    }
}

fn short(revision: &str) -> &str {
    match revision.char_indices().nth(7) {
        Some((idx, _)) => &revision[..idx],
        None => revision,
    }
}
