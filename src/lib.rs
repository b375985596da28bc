pub mod analyzer;
pub mod boundary;
pub mod ci;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod git;
pub mod package;
pub mod registry;
pub mod ui;

pub use error::{ReleaseError, Result};
