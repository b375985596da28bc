use crate::domain::version::parse_version;
use crate::domain::Access;
use crate::error::{ReleaseError, Result};
use crate::package::PackageManager;
use semver::Version;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Package manager backed by the `npm` executable
pub struct Npm {
    program: String,
    registry_url: String,
    auth_token: String,
}

impl Npm {
    pub fn new(registry_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Npm {
            program: "npm".to_string(),
            registry_url: registry_url.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Use a different executable, e.g. a wrapper script
    #[cfg(test)]
    fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self, args: &[&str], dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .arg(format!("--registry={}", self.registry_url))
            .current_dir(dir)
            .env("NPM_AUTH_TOKEN", &self.auth_token)
            .env("NODE_AUTH_TOKEN", &self.auth_token);
        cmd
    }

    fn display(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    /// Run with inherited stdio so the tool's own output reaches the log
    fn run_inherited(&self, args: &[&str], dir: &Path) -> Result<()> {
        let command = self.display(args);
        debug!(%command, dir = %dir.display(), "running");

        let status = self
            .command(args, dir)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| ReleaseError::command(&command, None, e.to_string()))?;

        if !status.success() {
            return Err(ReleaseError::command(command, status.code(), ""));
        }

        Ok(())
    }

    fn run_captured(&self, args: &[&str], dir: &Path) -> Result<String> {
        let command = self.display(args);
        debug!(%command, dir = %dir.display(), "running");

        let output = self
            .command(args, dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ReleaseError::command(&command, None, e.to_string()))?;

        if !output.status.success() {
            return Err(ReleaseError::command(
                command,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl PackageManager for Npm {
    fn view_version(&self, package: &str, dir: &Path) -> Result<Version> {
        let stdout = self.run_captured(&["view", package, "version"], dir)?;
        parse_version(&stdout)
    }

    fn publish(&self, dir: &Path, access: Access) -> Result<()> {
        let access = format!("--access={}", access);
        self.run_inherited(&["publish", &access], dir)
    }

    fn run_script(&self, dir: &Path, script: &str) -> Result<()> {
        self.run_inherited(&["run", script], dir)
    }
}
