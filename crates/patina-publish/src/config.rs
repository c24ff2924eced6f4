//! Publish configuration (patina.toml).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable holding the remote content API token.
pub const TOKEN_ENV_VAR: &str = "PATINA_API_TOKEN";

/// Configuration file structure (patina.toml).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PublishConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub webhooks: WebhookConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Content source directory
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Shell command that runs the external static-site generator
    #[serde(default = "default_build_command")]
    pub build_command: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Base URL of the project-management webhook endpoint
    #[serde(default = "default_webhook_base")]
    pub base_url: String,

    /// Project identifier keyed into every webhook URL
    #[serde(default = "default_project")]
    pub project: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the remote content API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Where the pulled home-page document is written
    #[serde(default = "default_homepage_path")]
    pub homepage_path: PathBuf,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}
fn default_build_command() -> String {
    "hugo --minify".to_string()
}
fn default_webhook_base() -> String {
    "https://hooks.example.com".to_string()
}
fn default_project() -> String {
    "blog".to_string()
}
fn default_api_base() -> String {
    "https://content.example.com/api".to_string()
}
fn default_homepage_path() -> PathBuf {
    PathBuf::from("content/_index.md")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            build_command: default_build_command(),
        }
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            base_url: default_webhook_base(),
            project: default_project(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            homepage_path: default_homepage_path(),
        }
    }
}

impl PublishConfig {
    /// Load configuration from a patina.toml file.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: PublishConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Read the remote content API token from the environment.
    ///
    /// An empty value counts as unset.
    pub fn token_from_env() -> Option<String> {
        env::var(TOKEN_ENV_VAR).ok().filter(|v| !v.is_empty())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_uses_defaults() {
        let config = PublishConfig::load(Path::new("/nonexistent/patina.toml")).unwrap();

        assert_eq!(config.site.build_command, "hugo --minify");
        assert_eq!(config.webhooks.project, "blog");
    }

    #[test]
    fn loads_partial_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("patina.toml");
        fs::write(
            &path,
            "[webhooks]\nbase_url = \"http://127.0.0.1:9/hooks\"\nproject = \"garden\"\n",
        )
        .unwrap();

        let config = PublishConfig::load(&path).unwrap();

        assert_eq!(config.webhooks.project, "garden");
        assert_eq!(config.webhooks.base_url, "http://127.0.0.1:9/hooks");
        // Unspecified sections fall back to defaults
        assert_eq!(config.site.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn rejects_malformed_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("patina.toml");
        fs::write(&path, "[site\nbroken").unwrap();

        let result = PublishConfig::load(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
