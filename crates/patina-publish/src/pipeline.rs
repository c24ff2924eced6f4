//! Publish pipeline runner.
//!
//! The pipeline is an ordered list of fallible steps, each wrapping one
//! external call. The runner executes them strictly in sequence and stops at
//! the first failure; there are no retries and no partial-completion
//! reporting beyond the returned error.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use crate::config::PublishConfig;
use crate::remote::{RemoteError, RemotePull};
use crate::site::{SiteBuildError, SiteBuilder};
use crate::webhook::{LifecycleEvent, WebhookError, WebhookNotifier};

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The step's external call completed
    Completed,
    /// The step decided it had nothing to do
    Skipped,
}

/// One fallible step of the publish pipeline.
#[async_trait]
pub trait PipelineStep: Send + Sync {
    /// Step identifier used in logs and error reporting.
    fn name(&self) -> &'static str;

    async fn run(&self) -> Result<StepStatus, PipelineError>;
}

/// Summary of a completed pipeline run.
#[derive(Debug)]
pub struct PipelineReport {
    pub completed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
}

/// Sequential fail-fast runner over an ordered list of steps.
pub struct Pipeline {
    steps: Vec<Box<dyn PipelineStep>>,
    dry_run: bool,
}

impl Pipeline {
    pub fn new(steps: Vec<Box<dyn PipelineStep>>, dry_run: bool) -> Self {
        Self { steps, dry_run }
    }

    /// Assemble the standard publish pipeline:
    /// notify pull-started, pull remote content, notify build-started,
    /// run the site build, notify published.
    ///
    /// When `token` is `None` the pull step stays in the sequence but skips
    /// its remote call with a warning.
    pub fn publish(
        config: &PublishConfig,
        token: Option<String>,
        dry_run: bool,
    ) -> Result<Self, PipelineError> {
        let notifier = Arc::new(WebhookNotifier::new(&config.webhooks)?);
        let remote = match token {
            Some(token) => Some(RemotePull::new(config.remote.clone(), token)?),
            None => None,
        };

        let steps: Vec<Box<dyn PipelineStep>> = vec![
            Box::new(NotifyStep {
                notifier: notifier.clone(),
                event: LifecycleEvent::PullStarted,
            }),
            Box::new(PullStep {
                remote,
                project: config.webhooks.project.clone(),
            }),
            Box::new(NotifyStep {
                notifier: notifier.clone(),
                event: LifecycleEvent::BuildStarted,
            }),
            Box::new(BuildStep {
                builder: SiteBuilder::new(&config.site.build_command),
            }),
            Box::new(NotifyStep {
                notifier,
                event: LifecycleEvent::Published,
            }),
        ];

        Ok(Self::new(steps, dry_run))
    }

    /// Run every step in order, stopping at the first failure.
    pub async fn run(&self) -> Result<PipelineReport, PipelineError> {
        let start = Instant::now();
        let mut completed = 0usize;
        let mut skipped = 0usize;

        tracing::info!(steps = self.steps.len(), dry_run = self.dry_run, "Starting publish pipeline");

        for (index, step) in self.steps.iter().enumerate() {
            if self.dry_run {
                tracing::info!(step = step.name(), "Dry run, skipping");
                skipped += 1;
                continue;
            }

            tracing::debug!(step = step.name(), index, "Running step");

            match step.run().await {
                Ok(StepStatus::Completed) => completed += 1,
                Ok(StepStatus::Skipped) => skipped += 1,
                Err(e) => {
                    tracing::error!(step = step.name(), error = %e, "Step failed, aborting");
                    return Err(e);
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(completed, skipped, duration_ms, "Publish pipeline finished");

        Ok(PipelineReport {
            completed,
            skipped,
            duration_ms,
        })
    }
}

/// Errors that can abort the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Webhook(#[from] WebhookError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Build(#[from] SiteBuildError),
}

struct NotifyStep {
    notifier: Arc<WebhookNotifier>,
    event: LifecycleEvent,
}

#[async_trait]
impl PipelineStep for NotifyStep {
    fn name(&self) -> &'static str {
        match self.event {
            LifecycleEvent::PullStarted => "notify-pull-started",
            LifecycleEvent::BuildStarted => "notify-build-started",
            LifecycleEvent::Published => "notify-published",
        }
    }

    async fn run(&self) -> Result<StepStatus, PipelineError> {
        self.notifier.notify(self.event).await?;
        Ok(StepStatus::Completed)
    }
}

struct PullStep {
    remote: Option<RemotePull>,
    project: String,
}

#[async_trait]
impl PipelineStep for PullStep {
    fn name(&self) -> &'static str {
        "remote-pull"
    }

    async fn run(&self) -> Result<StepStatus, PipelineError> {
        let Some(remote) = &self.remote else {
            tracing::warn!(
                "{} is not set, skipping remote content pull",
                crate::config::TOKEN_ENV_VAR
            );
            return Ok(StepStatus::Skipped);
        };

        remote.pull(&self.project).await?;
        Ok(StepStatus::Completed)
    }
}

struct BuildStep {
    builder: SiteBuilder,
}

#[async_trait]
impl PipelineStep for BuildStep {
    fn name(&self) -> &'static str {
        "site-build"
    }

    async fn run(&self) -> Result<StepStatus, PipelineError> {
        self.builder.build().await?;
        Ok(StepStatus::Completed)
    }
}
