use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for merge-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error in {}: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Command `{command}` failed with exit code {}{}", format_code(.code), format_stderr(.stderr))]
    Command {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in merge-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

fn format_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a manifest error for the given `package.json`
    pub fn manifest(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        ReleaseError::Manifest {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create an external command failure
    pub fn command(command: impl Into<String>, code: Option<i32>, stderr: impl Into<String>) -> Self {
        ReleaseError::Command {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Process exit status for this error.
    ///
    /// A failed external command hands its own status through; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReleaseError::Command {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("missing NPM_AUTH_TOKEN");
        assert_eq!(
            err.to_string(),
            "Configuration error: missing NPM_AUTH_TOKEN"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_command_error_carries_exit_code() {
        let err = ReleaseError::command("npm publish --access=public", Some(127), "");
        assert_eq!(err.exit_code(), 127);
        assert_eq!(
            err.to_string(),
            "Command `npm publish --access=public` failed with exit code 127"
        );
    }

    #[test]
    fn test_command_error_without_code() {
        let err = ReleaseError::command("npm view pkg version", None, "killed\n");
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("exit code unknown: killed"));
    }

    #[test]
    fn test_manifest_error_names_path() {
        let err = ReleaseError::manifest("/tmp/pkg/package.json", "missing \"name\"");
        let msg = err.to_string();
        assert!(msg.starts_with("Manifest error in /tmp/pkg/package.json"));
        assert!(msg.contains("missing \"name\""));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::version("x"), "Version parsing error"),
            (ReleaseError::command("git tag", Some(1), ""), "Command"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
