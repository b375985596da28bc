//! Package manager and package metadata.
//!
//! [PackageManager] covers the commands a release shells out for: reading
//! the authoritative published version and publishing. The `package.json`
//! files themselves are edited in-process through [manifest].

pub mod manifest;
pub mod mock;
pub mod npm;

pub use manifest::PackageManifest;
pub use mock::MockPackageManager;
pub use npm::Npm;

use crate::domain::Access;
use crate::error::Result;
use semver::Version;
use std::path::Path;

/// Package manager operations used by a release run.
///
/// Every failure is fatal; implementations report the command and its
/// exit status through [crate::error::ReleaseError::Command].
pub trait PackageManager {
    /// Version the registry currently serves for `package`
    fn view_version(&self, package: &str, dir: &Path) -> Result<Version>;

    /// Publish the package in `dir` with the given access level
    fn publish(&self, dir: &Path, access: Access) -> Result<()>;

    /// Run a script declared in the package's `scripts` table
    fn run_script(&self, dir: &Path, script: &str) -> Result<()>;
}

impl<T: PackageManager + ?Sized> PackageManager for &T {
    fn view_version(&self, package: &str, dir: &Path) -> Result<Version> {
        (**self).view_version(package, dir)
    }

    fn publish(&self, dir: &Path, access: Access) -> Result<()> {
        (**self).publish(dir, access)
    }

    fn run_script(&self, dir: &Path, script: &str) -> Result<()> {
        (**self).run_script(dir, script)
    }
}
