//! Create command implementation.

use std::fs;
use std::io::Write;
use std::path::Path;

use alertctl_client::{AlertCollection, AlertDefinition};
use tracing::debug;

use crate::batch::save_all;
use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// Create command executor.
///
/// Reads one definition or an array of definitions from a JSON file and
/// saves each sequentially: definitions with an `id` are updated, the rest
/// created.
pub struct CreateCommand<'a> {
    config: &'a Config,
}

impl<'a> CreateCommand<'a> {
    /// Create a new create command.
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Execute the create command.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed, or when a
    /// request fails at the transport level. Per-definition application
    /// failures are counted in the result instead.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        file: &Path,
    ) -> Result<(), CliError> {
        let definitions = read_definitions(file)?;
        debug!(count = definitions.len(), file = %file.display(), "loaded definitions");

        let client = self.config.source_client()?;
        let result = save_all(&client, &definitions, out).await?;
        format.write(out, &result)?;
        Ok(())
    }
}

/// Read a definition file holding either one object or an array of them.
fn read_definitions(path: &Path) -> Result<AlertCollection, CliError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::Validation(format!("cannot read {}: {e}", path.display())))?;

    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| CliError::Validation(format!("malformed JSON in {}: {e}", path.display())))?;

    let definitions: AlertCollection = if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value::<AlertDefinition>(value).map(|def| vec![def])
    }
    .map_err(|e| {
        CliError::Validation(format!(
            "{} does not hold alert definitions: {e}",
            path.display()
        ))
    })?;

    Ok(definitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;
    use alertctl_client::Cloud;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        Config {
            cloud: Cloud::Us,
            api_url: server.uri(),
            query_url: format!("{}/query", server.uri()),
            token: "tok".into(),
            target_token: None,
            domain: None,
            target_domain: None,
        }
    }

    // Per-process directory so concurrent runs never share fixture paths;
    // file names are unique per test.
    fn write_file(name: &str, body: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("alertctl-create-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join(name);
        fs::write(&path, body).expect("file written");
        path
    }

    #[tokio::test]
    async fn creates_every_definition_in_an_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/alertDefinitions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(2)
            .mount(&server)
            .await;

        let file = write_file(
            "array.json",
            r#"[{ "name": "A", "subcategory": "ops" }, { "name": "B", "subcategory": "ops" }]"#,
        );
        let config = config_for(&server);
        let cmd = CreateCommand::new(&config);
        let mut out = Vec::new();
        cmd.execute(&mut out, &OutputFormat::new(Format::Table), &file)
            .await
            .expect("create succeeds");

        let output = String::from_utf8(out).expect("utf8");
        assert!(output.contains("[1/2] created 'A'"));
        assert!(output.contains("[2/2] created 'B'"));
        assert!(output.contains("✓ 2 definition(s) processed"));
    }

    #[tokio::test]
    async fn a_single_object_updates_when_it_carries_an_id() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/alertDefinitions"))
            .and(body_partial_json(serde_json::json!({ "id": 7 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let file = write_file("single.json", r#"{ "id": 7, "name": "A" }"#);
        let config = config_for(&server);
        let cmd = CreateCommand::new(&config);
        let mut out = Vec::new();
        cmd.execute(&mut out, &OutputFormat::new(Format::Table), &file)
            .await
            .expect("update succeeds");

        let output = String::from_utf8(out).expect("utf8");
        assert!(output.contains("[1/1] updated 'A'"));
    }

    #[tokio::test]
    async fn malformed_file_fails_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/alertDefinitions"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let file = write_file("broken.json", "{ not json");
        let config = config_for(&server);
        let cmd = CreateCommand::new(&config);
        let mut out = Vec::new();
        let err = cmd
            .execute(&mut out, &OutputFormat::new(Format::Table), &file)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_file_is_a_validation_error() {
        let server = MockServer::start().await;
        let config = config_for(&server);
        let cmd = CreateCommand::new(&config);
        let mut out = Vec::new();
        let err = cmd
            .execute(
                &mut out,
                &OutputFormat::new(Format::Table),
                Path::new("/nonexistent/defs.json"),
            )
            .await
            .unwrap_err();

        assert!(err.to_string().contains("/nonexistent/defs.json"));
    }
}
