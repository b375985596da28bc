//! CI platform integration: the triggering event payload and step outputs.

use crate::domain::CommitRecord;
use crate::error::Result;
use serde::Deserialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// The subset of a push event payload the release needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CiEvent {
    #[serde(default)]
    pub commits: Vec<EventCommit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventCommit {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub body: Option<String>,
}

impl EventCommit {
    /// Convert to a commit record, appending `body` to the message
    pub fn to_record(&self) -> CommitRecord {
        match self.body.as_deref().filter(|b| !b.trim().is_empty()) {
            Some(body) => {
                CommitRecord::from_message(&self.id, &format!("{}\n{}", self.message, body))
            }
            None => CommitRecord::from_message(&self.id, &self.message),
        }
    }
}

impl CiEvent {
    /// Read an event payload from disk
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn records(&self) -> Vec<CommitRecord> {
        self.commits.iter().map(EventCommit::to_record).collect()
    }
}

/// Destination for machine-readable step outputs
#[derive(Debug, Clone, Default)]
pub struct StepOutput {
    path: Option<PathBuf>,
}

impl StepOutput {
    /// Outputs appended to `path`, or printed to stdout when `None`
    pub fn new(path: Option<PathBuf>) -> Self {
        StepOutput { path }
    }

    /// Emit `key=value`
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        match &self.path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}={}", key, value)?;
            }
            None => println!("{}={}", key, value),
        }
        Ok(())
    }
}
