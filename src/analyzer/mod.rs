//! Analysis engine for determining the increment kind of a commit range

pub mod commit_classifier;

pub use commit_classifier::CommitClassifier;
