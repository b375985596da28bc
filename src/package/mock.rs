use crate::domain::Access;
use crate::error::{ReleaseError, Result};
use crate::package::PackageManager;
use semver::Version;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// A publish recorded by [MockPackageManager]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Published {
    Default { dir: PathBuf, access: Access },
    Script { dir: PathBuf, script: String },
}

/// Package manager for testing; never spawns a process
#[derive(Default)]
pub struct MockPackageManager {
    version: Option<Version>,
    fail_publish: Option<i32>,
    published: RefCell<Vec<Published>>,
}

impl MockPackageManager {
    /// A package manager reporting `version` as the published version
    pub fn with_version(version: Version) -> Self {
        MockPackageManager {
            version: Some(version),
            ..Default::default()
        }
    }

    /// Make publishing exit with `code`
    pub fn fail_publish(&mut self, code: i32) {
        self.fail_publish = Some(code);
    }

    pub fn published(&self) -> Vec<Published> {
        self.published.borrow().clone()
    }

    fn record(&self, publish: Published) -> Result<()> {
        if let Some(code) = self.fail_publish {
            return Err(ReleaseError::command("npm publish", Some(code), "E403"));
        }
        self.published.borrow_mut().push(publish);
        Ok(())
    }
}

impl PackageManager for MockPackageManager {
    fn view_version(&self, package: &str, _dir: &Path) -> Result<Version> {
        self.version.clone().ok_or_else(|| {
            ReleaseError::command(format!("npm view {} version", package), Some(1), "E404")
        })
    }

    fn publish(&self, dir: &Path, access: Access) -> Result<()> {
        self.record(Published::Default {
            dir: dir.to_path_buf(),
            access,
        })
    }

    fn run_script(&self, dir: &Path, script: &str) -> Result<()> {
        self.record(Published::Script {
            dir: dir.to_path_buf(),
            script: script.to_string(),
        })
    }
}
