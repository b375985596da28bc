//! Pure formatting functions for console output.
//!
//! Everything user-facing goes through here so the engine never formats
//! text itself. Colours come from `console` and switch off automatically
//! when stdout is not a terminal.

use crate::boundary::BoundaryWarning;
use crate::domain::{CommitRecord, IncrementKind, VersionTransition};
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal fallback warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    println!("{} {}", style("⚠").yellow().bold(), warning);
}

/// Display the commits that were classified.
///
/// Shows up to 10 headers; commits that drove the verdict are marked with
/// their increment kind.
pub fn display_commit_analysis(commits: &[(CommitRecord, Option<IncrementKind>)], source: &str) {
    println!(
        "\n{}",
        style(format!("Analyzing {} commits from {}", commits.len(), source)).bold()
    );

    for (i, (commit, signal)) in commits.iter().take(10).enumerate() {
        println!("  {}", format_commit_line(i + 1, commit, *signal));
    }

    if commits.len() > 10 {
        println!("  ... and {} more commits", commits.len() - 10);
    }
}

/// Display the version transition.
pub fn display_transition(transition: &VersionTransition) {
    println!("\n{}", style("Version:").bold());
    println!(
        "  {} {} → {}",
        style(transition.kind).cyan(),
        style(&transition.current).red(),
        style(&transition.next).green()
    );
}

/// One line of the commit listing, e.g. `2. [minor] def4567 feat: add widget`
pub fn format_commit_line(index: usize, commit: &CommitRecord, signal: Option<IncrementKind>) -> String {
    let header = truncate(&commit.header, 60);
    let marker = match signal {
        Some(kind) => format!("[{}] ", kind),
        None => String::new(),
    };
    format!("{}. {}{} {}", index, marker, commit.short_revision(), header)
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
