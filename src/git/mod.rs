//! Git operations abstraction layer
//!
//! The engine only needs a handful of version-control operations: reading
//! the history between two revisions, tagging, pushing tags and restoring a
//! file. They sit behind the [VersionControl] trait so the release decision
//! can be exercised without a real repository.
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation that records writes

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::CommitRecord;
use crate::error::Result;
use std::path::Path;

/// Version-control operations used by a release run
///
/// ## Error Handling
///
/// Failures from [VersionControl::log_between] are recovered by the engine
/// (it falls back to the CI event). Every write operation failing is fatal.
pub trait VersionControl {
    /// Full revision id of the checked-out HEAD
    fn head_revision(&self) -> Result<String>;

    /// Commits reachable from `to` but not from `from`, oldest first.
    ///
    /// # Returns
    /// * `Err` - If either revision cannot be resolved, e.g. in a shallow clone
    fn log_between(&self, from: &str, to: &str) -> Result<Vec<CommitRecord>>;

    /// Create a lightweight tag `name` pointing at `revision`
    fn create_tag(&self, name: &str, revision: &str) -> Result<()>;

    /// Push every local tag to `remote_url`
    fn push_tags(&self, remote_url: &str) -> Result<()>;

    /// Discard working-tree changes to `path`, restoring it from HEAD
    fn restore_path(&self, path: &Path) -> Result<()>;
}

impl<T: VersionControl + ?Sized> VersionControl for &T {
    fn head_revision(&self) -> Result<String> {
        (**self).head_revision()
    }

    fn log_between(&self, from: &str, to: &str) -> Result<Vec<CommitRecord>> {
        (**self).log_between(from, to)
    }

    fn create_tag(&self, name: &str, revision: &str) -> Result<()> {
        (**self).create_tag(name, revision)
    }

    fn push_tags(&self, remote_url: &str) -> Result<()> {
        (**self).push_tags(remote_url)
    }

    fn restore_path(&self, path: &Path) -> Result<()> {
        (**self).restore_path(path)
    }
}
