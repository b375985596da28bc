//! Command-line and environment surface.
//!
//! Every setting can be given as a flag or through the environment
//! variable the CI platform already exports. Parsing stays separate from
//! [`Config`] so the rest of the crate never touches `std::env`.

use clap::ArgAction;

use crate::config::{self, Config, GithubConfig, DEFAULT_EVENT_PATH, DEFAULT_REGISTRY_URL};
use crate::domain::Access;
use crate::error::{ReleaseError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, clap::Parser)]
#[command(
    name = "merge-release",
    version,
    about = "Publish an npm package with a version derived from conventional commits"
)]
pub struct Args {
    #[arg(long, env = "NPM_REGISTRY_URL", default_value = DEFAULT_REGISTRY_URL, help = "Registry base URL")]
    pub registry_url: String,

    #[arg(long, env = "NPM_AUTH_TOKEN", hide_env_values = true, help = "Registry auth token (required)")]
    pub npm_auth_token: Option<String>,

    #[arg(long, env = "DEPLOY_DIR", default_value = "./", help = "Directory that gets published")]
    pub deploy_dir: PathBuf,

    #[arg(long, env = "SRC_PACKAGE_DIR", default_value = "./", help = "Directory of the source package.json")]
    pub src_package_dir: PathBuf,

    #[arg(long, env = "NPM_PRIVATE", action = ArgAction::Set, value_parser = flag, default_value = "false", num_args = 0..=1, default_missing_value = "true", help = "Publish with restricted access")]
    pub npm_private: bool,

    #[arg(long, env = "DISABLE_GIT_TAG", action = ArgAction::Set, value_parser = flag, default_value = "false", num_args = 0..=1, default_missing_value = "true", help = "Skip creating and pushing the release tag")]
    pub disable_git_tag: bool,

    #[arg(long, env = "MINOR_TYPES", default_value = "feat", help = "Comma-separated commit types that trigger a minor bump")]
    pub minor_types: String,

    #[arg(long, env = "MAJOR_TYPES", default_value = "", help = "Comma-separated commit types that trigger a major bump")]
    pub major_types: String,

    #[arg(long, env = "GITHUB_SHA", help = "Revision being released (defaults to HEAD)")]
    pub revision: Option<String>,

    #[arg(long, env = "GITHUB_EVENT_PATH", default_value = DEFAULT_EVENT_PATH, help = "CI event payload")]
    pub event_path: PathBuf,

    #[arg(long, env = "GITHUB_OUTPUT", help = "File receiving step outputs")]
    pub output: Option<PathBuf>,

    #[arg(long, env = "GITHUB_ACTOR", default_value = "")]
    pub github_actor: String,

    #[arg(long, env = "GITHUB_TOKEN", default_value = "", hide_env_values = true)]
    pub github_token: String,

    #[arg(long, env = "GITHUB_REPOSITORY", default_value = "")]
    pub github_repository: String,

    #[arg(long, env = "DEBUG", action = ArgAction::Set, value_parser = flag, default_value = "false", num_args = 0..=1, default_missing_value = "true", help = "Verbose diagnostics")]
    pub debug: bool,

    #[arg(long, env = "DRY_RUN", action = ArgAction::Set, value_parser = flag, default_value = "false", num_args = 0..=1, default_missing_value = "true", help = "Compute the next version without publishing")]
    pub dry_run: bool,
}

fn flag(raw: &str) -> std::result::Result<bool, String> {
    Ok(config::parse_flag(raw))
}

impl Args {
    /// Validate arguments and build the run configuration.
    ///
    /// Relative directories are resolved against `cwd`. Fails when no auth
    /// token is available, before anything touches the registry or disk.
    pub fn into_config(self, cwd: &Path) -> Result<Config> {
        let auth_token = self
            .npm_auth_token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ReleaseError::config("merge-release requires NPM_AUTH_TOKEN"))?;

        let revision = self.revision.filter(|rev| !rev.trim().is_empty());

        Ok(Config {
            registry_url: self.registry_url,
            auth_token,
            deploy_dir: cwd.join(self.deploy_dir),
            src_package_dir: cwd.join(self.src_package_dir),
            access: Access::from_private(self.npm_private),
            disable_git_tag: self.disable_git_tag,
            minor_types: config::parse_list(&self.minor_types),
            major_types: config::parse_list(&self.major_types),
            revision,
            event_path: self.event_path,
            output_path: self.output.filter(|p| !p.as_os_str().is_empty()),
            github: GithubConfig {
                actor: self.github_actor,
                token: self.github_token,
                repository: self.github_repository,
            },
            debug: self.debug,
            dry_run: self.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["merge-release"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_build_config() {
        let args = parse(&[
            "--npm-auth-token",
            "tok",
            "--deploy-dir",
            "dist",
            "--npm-private",
            "true",
            "--minor-types",
            "feat,perf",
            "--major-types",
            "breaking",
            "--revision",
            "def456",
        ]);
        let config = args.into_config(Path::new("/work")).unwrap();

        assert_eq!(config.auth_token, "tok");
        assert_eq!(config.deploy_dir, PathBuf::from("/work/dist"));
        assert_eq!(config.src_package_dir, PathBuf::from("/work/./"));
        assert_eq!(config.access, Access::Restricted);
        assert_eq!(config.minor_types, vec!["feat", "perf"]);
        assert_eq!(config.major_types, vec!["breaking"]);
        assert_eq!(config.revision.as_deref(), Some("def456"));
        assert!(config.has_separate_deploy_dir());
    }

    #[test]
    fn test_bare_flag_means_true() {
        let args = parse(&["--npm-auth-token", "tok", "--dry-run", "--disable-git-tag"]);
        assert!(args.dry_run);
        assert!(args.disable_git_tag);
    }

    #[test]
    fn test_non_true_values_are_false() {
        let args = parse(&["--npm-auth-token", "tok", "--npm-private", "yes"]);
        let config = args.into_config(Path::new("/work")).unwrap();
        assert_eq!(config.access, Access::Public);
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let args = parse(&["--npm-auth-token", "  "]);
        let err = args.into_config(Path::new("/work")).unwrap_err();
        assert!(err.to_string().contains("NPM_AUTH_TOKEN"));
    }

    #[test]
    fn test_empty_revision_means_head() {
        let args = parse(&["--npm-auth-token", "tok", "--revision", ""]);
        let config = args.into_config(Path::new("/work")).unwrap();
        assert_eq!(config.revision, None);
    }
}
