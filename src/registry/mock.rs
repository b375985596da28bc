use crate::domain::ReleaseMetadata;
use crate::registry::Registry;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory registry for testing
#[derive(Default)]
pub struct MockRegistry {
    releases: HashMap<String, ReleaseMetadata>,
    lookups: RefCell<Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a published release
    pub fn publish(&mut self, package: impl Into<String>, version: &str, git_head: Option<&str>) {
        self.releases.insert(
            package.into(),
            ReleaseMetadata {
                version: version.to_string(),
                git_head: git_head.map(str::to_string),
            },
        );
    }

    /// Package names looked up so far
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl Registry for MockRegistry {
    fn latest(&self, package: &str) -> Option<ReleaseMetadata> {
        self.lookups.borrow_mut().push(package.to_string());
        self.releases.get(package).cloned()
    }
}
