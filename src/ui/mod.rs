//! User interface module - console reporting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - The run configuration summary printed at start-up

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_commit_analysis, display_error, display_status,
    display_success, display_transition,
};

use crate::config::Config;

/// Print the effective configuration, without secrets.
pub fn display_config(config: &Config) {
    for (label, value) in config_summary(config) {
        println!("{:>36} : {}", label, value);
    }
}

/// Label/value pairs describing a configuration
pub fn config_summary(config: &Config) -> Vec<(&'static str, String)> {
    let mut summary = vec![
        ("using deploy directory", config.deploy_dir.display().to_string()),
        (
            "using src directory (package.json)",
            config.src_package_dir.display().to_string(),
        ),
        ("deploy to NPM with access", config.access.to_string()),
        ("registry", config.registry_url.clone()),
        ("minor types", config.minor_types.join(",")),
    ];

    if !config.major_types.is_empty() {
        summary.push(("major types", config.major_types.join(",")));
    }
    if config.disable_git_tag {
        summary.push(("git tag", "disabled".to_string()));
    }
    if config.dry_run {
        summary.push(("mode", "dry run".to_string()));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_summary_hides_token() {
        let config = Config::new("super-secret", Path::new("/work"));
        let summary = config_summary(&config);
        assert!(summary.iter().all(|(_, value)| !value.contains("super-secret")));
        assert!(summary
            .iter()
            .any(|(label, value)| *label == "deploy to NPM with access" && value == "public"));
    }

    #[test]
    fn test_summary_optional_lines() {
        let mut config = Config::new("tok", Path::new("/work"));
        assert!(!config_summary(&config).iter().any(|(l, _)| *l == "mode"));

        config.dry_run = true;
        config.disable_git_tag = true;
        config.major_types = vec!["breaking".to_string()];
        let labels: Vec<_> = config_summary(&config).into_iter().map(|(l, _)| l).collect();
        assert!(labels.contains(&"mode"));
        assert!(labels.contains(&"git tag"));
        assert!(labels.contains(&"major types"));
    }
}
