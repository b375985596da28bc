//! Domain logic - pure release rules independent of registries, git and npm

pub mod commit;
pub mod release;
pub mod version;

pub use commit::CommitRecord;
pub use release::{Access, Outcome, ReleaseMetadata};
pub use version::{IncrementKind, VersionTransition};
