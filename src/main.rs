use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use merge_release::cli::Args;
use merge_release::domain::Outcome;
use merge_release::engine::ReleaseEngine;
use merge_release::git::Git2Repository;
use merge_release::package::Npm;
use merge_release::registry::HttpRegistry;
use merge_release::{ui, ReleaseError};

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    match run(args) {
        Ok(Outcome::Skipped) => {}
        Ok(Outcome::DryRun(version)) => {
            ui::display_success(&format!("Dry run complete, next version would be {}", version));
        }
        Ok(Outcome::Released(version)) => {
            println!("\n{} Successfully released {}\n", console::style("✓").green(), version);
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            let code = e
                .downcast_ref::<ReleaseError>()
                .map_or(1, ReleaseError::exit_code);
            std::process::exit(code);
        }
    }
}

fn run(args: Args) -> Result<Outcome> {
    let cwd = std::env::current_dir().context("Cannot determine working directory")?;

    // Validation happens here, before any registry or git access
    let config = args.into_config(&cwd)?;
    ui::display_config(&config);

    let registry = HttpRegistry::new(config.registry_url.as_str())?;
    let repo = Git2Repository::open(&cwd).context("Not in a git repository")?;
    let npm = Npm::new(config.registry_url.as_str(), config.auth_token.as_str());

    let engine = ReleaseEngine::new(&config, registry, repo, npm)?;
    Ok(engine.run()?)
}

fn init_tracing(debug: bool) {
    let default_level = if debug {
        "merge_release=debug"
    } else {
        "merge_release=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
