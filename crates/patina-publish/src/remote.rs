//! Remote content pull.
//!
//! When a content API token is configured, the pipeline pulls the latest
//! home-page document from the remote content service before building. The
//! token is passed in explicitly; deciding whether to skip the pull is the
//! pipeline's job.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use tokio::fs;

use crate::config::RemoteConfig;

const USER_AGENT: &str = concat!("patina/", env!("CARGO_PKG_VERSION"));

/// Pulls remote content configuration into the working tree.
pub struct RemotePull {
    client: Client,
    api_base: String,
    homepage_path: PathBuf,
    token: String,
}

impl RemotePull {
    pub fn new(config: RemoteConfig, token: String) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RemoteError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            homepage_path: config.homepage_path,
            token,
        })
    }

    /// Fetch the home-page document for `project` and write it to the
    /// configured path.
    pub async fn pull(&self, project: &str) -> Result<(), RemoteError> {
        let url = format!("{}/projects/{}/homepage", self.api_base, project);

        tracing::debug!(url = %url, "Pulling remote content");

        let body = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| RemoteError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| RemoteError::Status(e.to_string()))?
            .text()
            .await
            .map_err(|e| RemoteError::Request(e.to_string()))?;

        if let Some(parent) = self.homepage_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.homepage_path, &body).await?;

        tracing::info!(
            path = %self.homepage_path.display(),
            bytes = body.len(),
            "Remote content pulled"
        );
        Ok(())
    }
}

/// Errors that can occur during a remote pull.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Content pull request failed: {0}")]
    Request(String),

    #[error("Content API returned an error status: {0}")]
    Status(String),

    #[error("Failed to write pulled content: {0}")]
    Write(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::extract::Path as AxumPath;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::Router;

    const DOCUMENT: &str = "---\ntitle: Pulled\n---\n";

    async fn spawn_content_server() -> String {
        let app = Router::new().route(
            "/projects/{project}/homepage",
            get(|AxumPath(_project): AxumPath<String>, headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                if auth == "Bearer sekrit" {
                    (StatusCode::OK, DOCUMENT.to_string())
                } else {
                    (StatusCode::UNAUTHORIZED, String::new())
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn pulls_and_writes_homepage() {
        let api_base = spawn_content_server().await;
        let tmp = tempfile::tempdir().unwrap();
        let homepage_path = tmp.path().join("content/_index.md");

        let remote = RemotePull::new(
            RemoteConfig {
                api_base,
                homepage_path: homepage_path.clone(),
            },
            "sekrit".to_string(),
        )
        .unwrap();

        remote.pull("blog").await.unwrap();

        let written = std::fs::read_to_string(homepage_path).unwrap();
        assert_eq!(written, DOCUMENT);
    }

    #[tokio::test]
    async fn bad_token_is_a_failure() {
        let api_base = spawn_content_server().await;
        let tmp = tempfile::tempdir().unwrap();

        let remote = RemotePull::new(
            RemoteConfig {
                api_base,
                homepage_path: tmp.path().join("_index.md"),
            },
            "wrong".to_string(),
        )
        .unwrap();

        let result = remote.pull("blog").await;

        assert!(matches!(result, Err(RemoteError::Status(_))));
    }
}
