use crate::domain::CommitRecord;
use crate::error::{ReleaseError, Result};
use crate::git::VersionControl;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Mock repository for testing without actual git operations.
///
/// History is a flat list of commits; `log_between` returns everything
/// after `from` up to and including `to`. Writes are recorded so tests can
/// assert on them.
#[derive(Default)]
pub struct MockRepository {
    head: String,
    commits: Vec<CommitRecord>,
    fail_log: bool,
    fail_push: bool,
    tags: RefCell<Vec<(String, String)>>,
    pushes: RefCell<Vec<String>>,
    restored: RefCell<Vec<PathBuf>>,
}

impl MockRepository {
    /// Create a new empty mock repository at `head`
    pub fn new(head: impl Into<String>) -> Self {
        MockRepository {
            head: head.into(),
            ..Default::default()
        }
    }

    /// Add a commit to the mock history
    pub fn add_commit(&mut self, revision: impl Into<String>, message: &str) {
        self.commits
            .push(CommitRecord::from_message(revision, message));
    }

    /// Make every `log_between` call fail, as in a shallow clone
    pub fn fail_log(&mut self) {
        self.fail_log = true;
    }

    /// Make `push_tags` fail, as when the remote rejects the tag
    pub fn fail_push(&mut self) {
        self.fail_push = true;
    }

    /// Tags created so far as `(name, revision)`
    pub fn tags(&self) -> Vec<(String, String)> {
        self.tags.borrow().clone()
    }

    /// Remote URLs tags were pushed to
    pub fn pushes(&self) -> Vec<String> {
        self.pushes.borrow().clone()
    }

    /// Paths restored from HEAD
    pub fn restored(&self) -> Vec<PathBuf> {
        self.restored.borrow().clone()
    }

    fn position(&self, revision: &str) -> Option<usize> {
        self.commits.iter().position(|c| c.revision == revision)
    }
}

impl VersionControl for MockRepository {
    fn head_revision(&self) -> Result<String> {
        Ok(self.head.clone())
    }

    fn log_between(&self, from: &str, to: &str) -> Result<Vec<CommitRecord>> {
        if self.fail_log {
            return Err(ReleaseError::command(
                format!("git log {}..{}", from, to),
                Some(128),
                "fatal: shallow history",
            ));
        }

        let start = self.position(from).ok_or_else(|| {
            ReleaseError::command(format!("git log {}..{}", from, to), Some(128), "unknown revision")
        })?;
        let end = self.position(to).unwrap_or(self.commits.len() - 1);

        Ok(self
            .commits
            .get(start + 1..=end)
            .map(<[CommitRecord]>::to_vec)
            .unwrap_or_default())
    }

    fn create_tag(&self, name: &str, revision: &str) -> Result<()> {
        self.tags
            .borrow_mut()
            .push((name.to_string(), revision.to_string()));
        Ok(())
    }

    fn push_tags(&self, remote_url: &str) -> Result<()> {
        if self.fail_push {
            return Err(ReleaseError::command(
                "git push --tags",
                None,
                "remote rejected refs/tags: already exists",
            ));
        }

        self.pushes.borrow_mut().push(remote_url.to_string());
        Ok(())
    }

    fn restore_path(&self, path: &Path) -> Result<()> {
        self.restored.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> MockRepository {
        let mut repo = MockRepository::new("ccc");
        repo.add_commit("aaa", "chore: init");
        repo.add_commit("bbb", "feat: add widget");
        repo.add_commit("ccc", "fix: crash");
        repo
    }

    #[test]
    fn test_mock_log_between() {
        let commits = repo().log_between("aaa", "ccc").unwrap();
        let headers: Vec<_> = commits.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, vec!["feat: add widget", "fix: crash"]);
    }

    #[test]
    fn test_mock_log_unknown_from() {
        assert!(repo().log_between("zzz", "ccc").is_err());
    }

    #[test]
    fn test_mock_log_same_revision_is_empty() {
        assert!(repo().log_between("ccc", "ccc").unwrap().is_empty());
    }

    #[test]
    fn test_mock_fail_log() {
        let mut repo = repo();
        repo.fail_log();
        assert!(repo.log_between("aaa", "ccc").is_err());
    }

    #[test]
    fn test_mock_fail_push() {
        let mut repo = repo();
        repo.fail_push();
        assert!(repo.push_tags("https://a:b@github.com/o/r.git").is_err());
        assert!(repo.pushes().is_empty());
    }

    #[test]
    fn test_mock_records_writes() {
        let repo = repo();
        repo.create_tag("v1.1.0", "ccc").unwrap();
        repo.push_tags("https://a:b@github.com/o/r.git").unwrap();
        repo.restore_path(Path::new("/work/package.json")).unwrap();

        assert_eq!(repo.tags(), vec![("v1.1.0".to_string(), "ccc".to_string())]);
        assert_eq!(repo.pushes().len(), 1);
        assert_eq!(repo.restored(), vec![PathBuf::from("/work/package.json")]);
    }
}
