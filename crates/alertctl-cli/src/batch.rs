//! Batch mutation support: the confirmation gate and per-item accounting.
//!
//! Destructive operations never issue a mutating call before the operator
//! has seen every affected definition name and explicitly affirmed.

use std::io::{BufRead, Write};

use alertctl_client::{AlertClient, AlertDefinition};
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::output::TableDisplay;

/// Aggregate outcome of a batch mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    /// Number of definitions the batch covered.
    pub processed: usize,
    /// Number of definitions mutated successfully.
    pub succeeded: usize,
    /// Number of definitions that failed with an application error.
    pub failed: usize,
}

impl BatchResult {
    /// A whole batch that succeeded or failed as one unit.
    #[must_use]
    pub const fn whole(processed: usize) -> Self {
        Self {
            processed,
            succeeded: processed,
            failed: 0,
        }
    }
}

impl TableDisplay for BatchResult {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.failed == 0 {
            writeln!(writer, "✓ {} definition(s) processed", self.processed)?;
        } else {
            writeln!(
                writer,
                "✗ {} of {} definition(s) failed ({} succeeded)",
                self.failed, self.processed, self.succeeded
            )?;
        }
        Ok(())
    }
}

/// Show the affected names and ask the operator to affirm.
///
/// Only a case-insensitive `y` proceeds; anything else aborts the whole
/// batch before a single mutating call.
///
/// # Errors
///
/// Returns [`CliError::Aborted`] on decline, or an IO error.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    action: &str,
    names: &[String],
) -> Result<(), CliError> {
    writeln!(
        out,
        "The following {} alert definition(s) will be {action}:",
        names.len()
    )?;
    for name in names {
        writeln!(out, "  - {name}")?;
    }
    write!(out, "Proceed? [y/N] ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.trim().eq_ignore_ascii_case("y") {
        Ok(())
    } else {
        Err(CliError::Aborted)
    }
}

/// Create or update every definition, sequentially and in collection order.
///
/// Emits a `[i/n]` progress line per item. Application-level failures are
/// counted and the batch continues; transport failures abort immediately.
///
/// # Errors
///
/// Returns an error on transport failure or when progress cannot be written.
pub async fn save_all<W: Write>(
    client: &AlertClient,
    definitions: &[AlertDefinition],
    out: &mut W,
) -> Result<BatchResult, CliError> {
    let processed = definitions.len();
    let mut failed = 0;

    for (index, def) in definitions.iter().enumerate() {
        let verb = if def.id.is_some() { "updated" } else { "created" };
        match client.save(def).await {
            Ok(()) => {
                writeln!(out, "[{}/{processed}] {verb} '{}'", index + 1, def.name)?;
            }
            Err(e) if e.is_transport() => return Err(e.into()),
            Err(e) => {
                failed += 1;
                writeln!(out, "[{}/{processed}] failed '{}': {e}", index + 1, def.name)?;
            }
        }
    }

    debug!(processed, failed, "batch finished");
    Ok(BatchResult {
        processed,
        succeeded: processed - failed,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;
    use crate::output::OutputFormat;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn portable_def(name: &str) -> AlertDefinition {
        AlertDefinition {
            id: None,
            name: name.into(),
            subcategory: "ops".into(),
            is_active: None,
            is_favorite: None,
            is_alert_chain: None,
            creation_date: None,
            category_id: None,
            subcategory_id: None,
            alert_correlation_context: None,
            action_policy_id: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn confirm_accepts_y_in_any_case() {
        for answer in ["y\n", "Y\n", " y \n"] {
            let mut input = answer.as_bytes();
            let mut out = Vec::new();
            confirm(&mut input, &mut out, "deleted", &names(&["A"])).expect("affirmed");
        }
    }

    #[test]
    fn confirm_rejects_everything_else() {
        for answer in ["n\n", "yes\n", "\n", "q\n"] {
            let mut input = answer.as_bytes();
            let mut out = Vec::new();
            let err = confirm(&mut input, &mut out, "deleted", &names(&["A"])).unwrap_err();
            assert!(matches!(err, CliError::Aborted));
        }
    }

    #[test]
    fn confirm_lists_every_affected_name() {
        let mut input = "y\n".as_bytes();
        let mut out = Vec::new();
        confirm(&mut input, &mut out, "disabled", &names(&["A", "B"])).expect("affirmed");

        let prompt = String::from_utf8(out).expect("utf8");
        assert!(prompt.contains("2 alert definition(s) will be disabled"));
        assert!(prompt.contains("  - A"));
        assert!(prompt.contains("  - B"));
        assert!(prompt.contains("Proceed? [y/N]"));
    }

    #[tokio::test]
    async fn create_batch_counts_application_failures() {
        let server = MockServer::start().await;
        // First response fails at application level, the rest succeed.
        Mock::given(method("POST"))
            .and(path("/alertDefinitions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error": "dup" })),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/alertDefinitions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client =
            AlertClient::with_urls(server.uri(), format!("{}/query", server.uri()), "tok")
                .expect("client builds");
        let defs = vec![portable_def("A"), portable_def("B"), portable_def("C")];

        let mut out = Vec::new();
        let result = save_all(&client, &defs, &mut out).await.expect("batch runs");

        assert_eq!(
            result,
            BatchResult {
                processed: 3,
                succeeded: 2,
                failed: 1
            }
        );

        let progress = String::from_utf8(out).expect("utf8");
        assert!(progress.contains("[1/3] failed 'A': service error: dup"));
        assert!(progress.contains("[2/3] created 'B'"));
        assert!(progress.contains("[3/3] created 'C'"));
    }

    #[tokio::test]
    async fn empty_batch_touches_nothing() {
        let client = AlertClient::with_urls("http://127.0.0.1:9", "http://127.0.0.1:9", "tok")
            .expect("client builds");
        let mut out = Vec::new();
        let result = save_all(&client, &[], &mut out).await.expect("no-op");
        assert_eq!(result.processed, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn batch_result_rendering() {
        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&BatchResult::whole(4)).expect("should format");
        assert!(output.contains("✓ 4 definition(s) processed"));

        let output = fmt
            .to_string(&BatchResult {
                processed: 4,
                succeeded: 3,
                failed: 1,
            })
            .expect("should format");
        assert!(output.contains("✗ 1 of 4 definition(s) failed (3 succeeded)"));
    }
}
