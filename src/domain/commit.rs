/// A single commit as seen by the classifier.
///
/// Produced either from git history or from the CI event payload. Only the
/// header (first line) is used for prefix matching; the body is searched
/// for breaking-change markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub revision: String,
    pub header: String,
    pub body: Option<String>,
}

impl CommitRecord {
    pub fn new(
        revision: impl Into<String>,
        header: impl Into<String>,
        body: Option<String>,
    ) -> Self {
        CommitRecord {
            revision: revision.into(),
            header: header.into(),
            body: body.filter(|b| !b.trim().is_empty()),
        }
    }

    /// Split a raw commit message into header and body.
    ///
    /// The header is everything up to the first `\n` or `\r\n`.
    pub fn from_message(revision: impl Into<String>, message: &str) -> Self {
        let (header, body) = match message.split_once('\n') {
            Some((header, body)) => (header.trim_end_matches('\r'), Some(body)),
            None => (message, None),
        };

        CommitRecord::new(
            revision,
            header,
            body.map(|b| b.trim_matches(|c| c == '\r' || c == '\n').to_string()),
        )
    }

    /// Abbreviated revision for display
    pub fn short_revision(&self) -> &str {
        match self.revision.char_indices().nth(7) {
            Some((idx, _)) => &self.revision[..idx],
            None => &self.revision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_message_header_only() {
        let commit = CommitRecord::from_message("abc123", "feat: add widget");
        assert_eq!(commit.header, "feat: add widget");
        assert_eq!(commit.body, None);
    }

    #[test]
    fn test_from_message_with_body() {
        let commit = CommitRecord::from_message(
            "abc123",
            "fix: rename field\n\nBREAKING CHANGE: field renamed\n",
        );
        assert_eq!(commit.header, "fix: rename field");
        assert_eq!(commit.body.as_deref(), Some("BREAKING CHANGE: field renamed"));
    }

    #[test]
    fn test_from_message_crlf() {
        let commit = CommitRecord::from_message("abc123", "feat: windows\r\n\r\nbody text");
        assert_eq!(commit.header, "feat: windows");
        assert_eq!(commit.body.as_deref(), Some("body text"));
    }

    #[test]
    fn test_blank_body_is_dropped() {
        let commit = CommitRecord::new("abc", "chore: deps", Some("   ".to_string()));
        assert_eq!(commit.body, None);
    }

    #[test]
    fn test_short_revision() {
        let commit = CommitRecord::new("def4567890abcdef", "x", None);
        assert_eq!(commit.short_revision(), "def4567");
        let short = CommitRecord::new("abc", "x", None);
        assert_eq!(short.short_revision(), "abc");
    }
}
