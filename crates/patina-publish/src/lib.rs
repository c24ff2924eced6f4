//! Publish pipeline for patina blogs.
//!
//! Sequences the external calls around a static-site build: lifecycle webhook
//! notifications, an optional remote content pull, and the generator's build
//! command. Execution is strictly sequential and fail-fast; the first error
//! aborts the remaining steps.

pub mod config;
pub mod pipeline;
pub mod remote;
pub mod site;
pub mod webhook;

pub use config::{ConfigError, PublishConfig, TOKEN_ENV_VAR};
pub use pipeline::{Pipeline, PipelineError, PipelineReport, PipelineStep, StepStatus};
pub use remote::{RemoteError, RemotePull};
pub use site::{SiteBuildError, SiteBuilder};
pub use webhook::{LifecycleEvent, WebhookError, WebhookNotifier};
