//! Release orchestration.
//!
//! [ReleaseEngine::run] drives one release: find what was last published,
//! collect the commits since then, classify them, compute the next version,
//! write it, publish, and tag. Collaborators are injected so the decision
//! logic runs the same against mocks and against npm/git.

use crate::analyzer::CommitClassifier;
use crate::boundary::BoundaryWarning;
use crate::ci::{CiEvent, StepOutput};
use crate::config::Config;
use crate::domain::{CommitRecord, IncrementKind, Outcome, ReleaseMetadata, VersionTransition};
use crate::error::Result;
use crate::git::VersionControl;
use crate::package::{manifest, PackageManager, PackageManifest};
use crate::registry::Registry;
use crate::ui;
use semver::Version;
use tracing::{debug, info};

/// Where the classified commits came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitSource {
    History,
    Event,
}

impl CommitSource {
    fn describe(&self) -> &'static str {
        match self {
            CommitSource::History => "git history",
            CommitSource::Event => "CI event",
        }
    }
}

pub struct ReleaseEngine<'a, R, V, P> {
    config: &'a Config,
    classifier: CommitClassifier,
    registry: R,
    vcs: V,
    packages: P,
    output: StepOutput,
}

impl<'a, R, V, P> ReleaseEngine<'a, R, V, P>
where
    R: Registry,
    V: VersionControl,
    P: PackageManager,
{
    /// Create an engine for one run.
    ///
    /// Fails only if the configured commit types are not valid patterns.
    pub fn new(config: &'a Config, registry: R, vcs: V, packages: P) -> Result<Self> {
        Ok(ReleaseEngine {
            config,
            classifier: CommitClassifier::new(config)?,
            registry,
            vcs,
            packages,
            output: StepOutput::new(config.output_path.clone()),
        })
    }

    /// Run the release.
    ///
    /// Returns [Outcome::Skipped] without touching anything when the
    /// current revision is already the latest release.
    pub fn run(&self) -> Result<Outcome> {
        let deploy_manifest = PackageManifest::load(&self.config.deploy_dir)?;
        let package = deploy_manifest.name()?.to_string();
        let revision = self.current_revision()?;
        debug!(%package, %revision, "starting release");

        let latest = self.registry.latest(&package);
        if let Some(release) = &latest {
            if release.is_built_from(&revision) {
                ui::display_success("SHA matches latest release, skipping.");
                info!(%revision, version = %release.version, "already released");
                return Ok(Outcome::Skipped);
            }
        }

        let (commits, source) = self.collect_commits(&package, latest.as_ref(), &revision);
        let kind = self.classify(&commits, source);

        let current = self
            .packages
            .view_version(&package, &self.config.src_package_dir)?;
        let transition = VersionTransition::new(current, kind);
        ui::display_transition(&transition);

        if self.config.dry_run {
            ui::display_status(&format!(
                "Dry run: would publish {} and tag {}",
                transition.next,
                transition.tag_name()
            ));
            return Ok(Outcome::DryRun(transition.next));
        }

        self.write_version(&transition.current)?;
        self.write_version(&transition.next)?;

        self.publish(&deploy_manifest)?;

        self.vcs.restore_path(deploy_manifest.path())?;
        self.output.set("version", &transition.tag_name())?;

        if self.config.disable_git_tag {
            debug!("git tag disabled");
        } else {
            self.tag_and_push(&transition, &revision)?;
        }

        ui::display_success(&format!("Released {}@{}", package, transition.next));
        Ok(Outcome::Released(transition.next))
    }

    fn current_revision(&self) -> Result<String> {
        match &self.config.revision {
            Some(revision) => Ok(revision.clone()),
            None => self.vcs.head_revision(),
        }
    }

    /// Commits since the latest release, falling back to the CI event
    /// whenever the release revision is unknown or its history unreadable.
    pub fn collect_commits(
        &self,
        package: &str,
        latest: Option<&ReleaseMetadata>,
        revision: &str,
    ) -> (Vec<CommitRecord>, CommitSource) {
        let warning = match latest {
            None => BoundaryWarning::NoPublishedRelease {
                package: package.to_string(),
            },
            Some(ReleaseMetadata {
                git_head: None,
                version,
            }) => BoundaryWarning::UnknownReleaseRevision {
                version: version.clone(),
            },
            Some(ReleaseMetadata {
                git_head: Some(head),
                ..
            }) => match self.vcs.log_between(head, revision) {
                Ok(commits) => return (commits, CommitSource::History),
                Err(e) => BoundaryWarning::HistoryUnavailable {
                    from: head.clone(),
                    to: revision.to_string(),
                    reason: e.to_string(),
                },
            },
        };

        ui::display_boundary_warning(&warning);
        (self.event_commits(), CommitSource::Event)
    }

    fn event_commits(&self) -> Vec<CommitRecord> {
        match CiEvent::load(&self.config.event_path) {
            Ok(event) => event.records(),
            Err(e) => {
                ui::display_boundary_warning(&BoundaryWarning::EventUnavailable {
                    path: self.config.event_path.display().to_string(),
                    reason: e.to_string(),
                });
                Vec::new()
            }
        }
    }

    fn classify(&self, commits: &[CommitRecord], source: CommitSource) -> IncrementKind {
        if commits.is_empty() {
            ui::display_boundary_warning(&BoundaryWarning::NoCommits);
        } else {
            let analysis: Vec<_> = commits
                .iter()
                .map(|commit| (commit.clone(), self.signal(commit)))
                .collect();
            ui::display_commit_analysis(&analysis, source.describe());
        }

        let kind = self.classifier.classify(commits);
        debug!(%kind, count = commits.len(), source = source.describe(), "classified");
        kind
    }

    fn signal(&self, commit: &CommitRecord) -> Option<IncrementKind> {
        if self.classifier.is_major(commit) {
            Some(IncrementKind::Major)
        } else if self.classifier.is_minor(commit) {
            Some(IncrementKind::Minor)
        } else {
            None
        }
    }

    /// Write `version` to the source manifest and mirror it to the deploy one
    fn write_version(&self, version: &Version) -> Result<()> {
        manifest::write_version(&self.config.src_package_dir, version)?;
        if self.config.has_separate_deploy_dir() {
            manifest::write_version(&self.config.deploy_dir, version)?;
        }
        debug!(%version, "wrote version");
        Ok(())
    }

    fn publish(&self, deploy_manifest: &PackageManifest) -> Result<()> {
        let dir = &self.config.deploy_dir;
        if deploy_manifest.publish_script().is_some() {
            ui::display_status("Running custom publish script");
            self.packages.run_script(dir, "publish")
        } else {
            ui::display_status(&format!("Publishing with access {}", self.config.access));
            self.packages.publish(dir, self.config.access)
        }
    }

    fn tag_and_push(&self, transition: &VersionTransition, revision: &str) -> Result<()> {
        let tag = transition.tag_name();
        self.vcs.create_tag(&tag, revision)?;
        ui::display_success(&format!("Created tag: {}", tag));

        ui::display_status(&format!(
            "Pushing tags to {}",
            self.config.github.display_remote()
        ));
        self.vcs.push_tags(&self.config.github.remote_url())?;
        ui::display_success(&format!("Pushed tag: {}", tag));
        Ok(())
    }
}
