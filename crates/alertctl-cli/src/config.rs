//! Resolved run configuration.
//!
//! Built exactly once at startup from CLI flags and environment (via clap)
//! merged over an optional JSON configuration file, then passed by reference
//! to every command. No component reads ambient process state directly.

use std::fs;
use std::path::Path;

use alertctl_client::{AlertClient, Cloud};
use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;
use crate::error::CliError;

/// Immutable configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cloud region hosting the alerting service.
    pub cloud: Cloud,
    /// Base URL of the alert-definition API, normally derived from the cloud.
    pub api_url: String,
    /// URL of the query endpoint, normally derived from the cloud.
    pub query_url: String,
    /// Source credential.
    pub token: String,
    /// Target credential, required by `copy` and `domain --target`.
    pub target_token: Option<String>,
    /// Source domain override; skips remote resolution when set.
    pub domain: Option<String>,
    /// Target domain override; skips remote resolution when set.
    pub target_domain: Option<String>,
}

/// On-disk configuration file shape. Every field optional; flags and
/// environment values take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileConfig {
    cloud: Option<String>,
    token: Option<String>,
    target_token: Option<String>,
    domain: Option<String>,
    target_domain: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, CliError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = serde_json::from_str(&raw).map_err(|e| {
            CliError::Config(format!("malformed config file {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

impl Config {
    /// Resolve the configuration for this invocation.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown cloud or a missing source
    /// token, and a config error for an unreadable or malformed file.
    pub fn resolve(cli: &Cli) -> Result<Self, CliError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let cloud_raw = first_present(cli.cloud.as_deref(), file.cloud.as_deref())
            .ok_or_else(|| {
                CliError::Validation(
                    "no cloud configured: pass --cloud us (or eu), or set ALERTCTL_CLOUD".into(),
                )
            })?;
        let cloud: Cloud = cloud_raw
            .parse()
            .map_err(|e| CliError::Validation(format!("{e}; pass --cloud us or --cloud eu")))?;

        let token = first_present(cli.token.as_deref(), file.token.as_deref())
            .ok_or_else(|| {
                CliError::Validation(
                    "no API token configured: pass --token <TOKEN> or set ALERTCTL_TOKEN".into(),
                )
            })?
            .to_string();

        Ok(Self {
            cloud,
            api_url: cli.api_url.clone().unwrap_or_else(|| cloud.api_base()),
            query_url: cli.query_url.clone().unwrap_or_else(|| cloud.query_url()),
            token,
            target_token: first_present(cli.target_token.as_deref(), file.target_token.as_deref())
                .map(str::to_string),
            domain: first_present(cli.domain.as_deref(), file.domain.as_deref())
                .map(str::to_string),
            target_domain: first_present(
                cli.target_domain.as_deref(),
                file.target_domain.as_deref(),
            )
            .map(str::to_string),
        })
    }

    /// Build a client for the source credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn source_client(&self) -> Result<AlertClient, CliError> {
        self.client(&self.token)
    }

    /// Build a client for the target credential.
    ///
    /// # Errors
    ///
    /// Returns a validation error when no target token is configured.
    pub fn target_client(&self) -> Result<AlertClient, CliError> {
        let token = self.target_token()?.to_string();
        self.client(&token)
    }

    fn client(&self, token: &str) -> Result<AlertClient, CliError> {
        Ok(AlertClient::with_urls(&self.api_url, &self.query_url, token)?)
    }

    /// The target credential, or a validation error explaining how to set it.
    ///
    /// # Errors
    ///
    /// Returns a validation error when no target token is configured.
    pub fn target_token(&self) -> Result<&str, CliError> {
        self.target_token.as_deref().ok_or_else(|| {
            CliError::Validation(
                "no target token configured: pass --target-token <TOKEN> or set \
                 ALERTCTL_TARGET_TOKEN"
                    .into(),
            )
        })
    }
}

/// First value that is present and non-empty, flag/env before file.
fn first_present<'a>(flag: Option<&'a str>, file: Option<&'a str>) -> Option<&'a str> {
    flag.filter(|s| !s.is_empty())
        .or_else(|| file.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use clap::Parser;

    fn cli_from(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    // One directory per test and per process so concurrent runs never share
    // fixture paths.
    fn write_config(label: &str, body: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("alertctl-{label}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("alertctl.json");
        fs::write(&path, body).expect("config written");
        path
    }

    #[test]
    fn flags_alone_are_sufficient() {
        let cli = cli_from(&["alertctl", "--cloud", "us", "--token", "abc", "list"]);
        let config = Config::resolve(&cli).expect("resolves");
        assert_eq!(config.cloud, Cloud::Us);
        assert_eq!(config.token, "abc");
        assert!(config.target_token.is_none());
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn file_fills_the_gaps() {
        let path = write_config(
            "config-gaps",
            r#"{ "cloud": "eu", "token": "from-file", "targetToken": "t2", "domain": "acme" }"#,
        );

        let cli = cli_from(&["alertctl", "--config", path.to_str().expect("utf8"), "list"]);
        let config = Config::resolve(&cli).expect("resolves");
        assert_eq!(config.cloud, Cloud::Eu);
        assert_eq!(config.token, "from-file");
        assert_eq!(config.target_token.as_deref(), Some("t2"));
        assert_eq!(config.domain.as_deref(), Some("acme"));
    }

    #[test]
    fn flags_override_the_file() {
        let path = write_config("config-precedence", r#"{ "cloud": "eu", "token": "from-file" }"#);

        let cli = cli_from(&[
            "alertctl",
            "--config",
            path.to_str().expect("utf8"),
            "--cloud",
            "us",
            "--token",
            "from-flag",
            "list",
        ]);
        let config = Config::resolve(&cli).expect("resolves");
        assert_eq!(config.cloud, Cloud::Us);
        assert_eq!(config.token, "from-flag");
    }

    #[test]
    fn urls_derive_from_cloud_unless_overridden() {
        let cli = cli_from(&["alertctl", "--cloud", "eu", "--token", "abc", "list"]);
        let config = Config::resolve(&cli).expect("resolves");
        assert_eq!(config.api_url, "https://api-eu.alerting.cloud/alerts/v1");
        assert_eq!(config.query_url, "https://api-eu.alerting.cloud/search/query");

        let cli = cli_from(&[
            "alertctl",
            "--cloud",
            "eu",
            "--token",
            "abc",
            "--api-url",
            "http://localhost:8080",
            "list",
        ]);
        let config = Config::resolve(&cli).expect("resolves");
        assert_eq!(config.api_url, "http://localhost:8080");
    }

    #[test]
    fn unknown_cloud_is_a_validation_error() {
        let cli = cli_from(&["alertctl", "--cloud", "mars", "--token", "abc", "list"]);
        let err = Config::resolve(&cli).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("--cloud us"));
    }

    #[test]
    fn missing_token_is_a_validation_error() {
        let cli = cli_from(&["alertctl", "--cloud", "us", "list"]);
        let err = Config::resolve(&cli).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("ALERTCTL_TOKEN"));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let cli = cli_from(&["alertctl", "--cloud", "us", "--token", "", "list"]);
        assert!(Config::resolve(&cli).is_err());
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let cli = cli_from(&[
            "alertctl",
            "--config",
            "/nonexistent/alertctl.json",
            "--cloud",
            "us",
            "--token",
            "abc",
            "list",
        ]);
        let err = Config::resolve(&cli).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn missing_target_token_reported_with_hint() {
        let cli = cli_from(&["alertctl", "--cloud", "us", "--token", "abc", "list"]);
        let config = Config::resolve(&cli).expect("resolves");
        let err = config.target_token().unwrap_err();
        assert!(err.to_string().contains("ALERTCTL_TARGET_TOKEN"));
    }
}
