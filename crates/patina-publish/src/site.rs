//! External static-site build invocation.

use tokio::process::Command;

/// Runs the external static-site generator.
///
/// The generator is a black box: patina only cares about its exit status.
/// Stdio is inherited so the generator's own output reaches the operator
/// directly, since that output is the main diagnostic when a build fails.
pub struct SiteBuilder {
    build_command: String,
}

impl SiteBuilder {
    pub fn new(build_command: impl Into<String>) -> Self {
        Self {
            build_command: build_command.into(),
        }
    }

    /// Run the build command to completion.
    pub async fn build(&self) -> Result<(), SiteBuildError> {
        tracing::info!(command = %self.build_command, "Running site build");

        let status = Command::new("sh")
            .arg("-c")
            .arg(&self.build_command)
            .status()
            .await
            .map_err(|e| SiteBuildError::Spawn {
                command: self.build_command.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(SiteBuildError::Failed {
                command: self.build_command.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Errors that can occur when running the site build.
#[derive(Debug, thiserror::Error)]
pub enum SiteBuildError {
    #[error("Failed to spawn build command '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Build command '{command}' exited with status {code:?}")]
    Failed { command: String, code: Option<i32> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn succeeds_on_zero_exit() {
        let result = SiteBuilder::new("true").build().await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn fails_on_nonzero_exit() {
        let result = SiteBuilder::new("exit 3").build().await;

        assert!(matches!(
            result,
            Err(SiteBuildError::Failed { code: Some(3), .. })
        ));
    }
}
