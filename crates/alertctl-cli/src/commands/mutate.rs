//! Batched delete / enable / disable command implementation.
//!
//! These operations share one shape: select, confirm with the full name
//! list, then issue a single batched request carrying every id.

use std::io::{BufRead, Write};

use alertctl_client::{AlertDefinition, fetch_selected};

use crate::batch::{BatchResult, confirm};
use crate::cli::FilterArgs;
use crate::commands::selection_from;
use crate::config::Config;
use crate::error::CliError;
use crate::output::{Message, OutputFormat};

/// Which batched mutation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutateOp {
    /// Delete the selected definitions.
    Delete,
    /// Enable the selected definitions.
    Enable,
    /// Disable the selected definitions.
    Disable,
}

impl MutateOp {
    /// Past-tense verb for prompts and reports.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Delete => "deleted",
            Self::Enable => "enabled",
            Self::Disable => "disabled",
        }
    }
}

/// Delete/enable/disable command executor.
pub struct MutateCommand<'a> {
    config: &'a Config,
    op: MutateOp,
    assume_yes: bool,
}

impl<'a> MutateCommand<'a> {
    /// Create a new mutate command.
    #[must_use]
    pub const fn new(config: &'a Config, op: MutateOp, assume_yes: bool) -> Self {
        Self {
            config,
            op,
            assume_yes,
        }
    }

    /// Execute the mutation across the selected definitions.
    ///
    /// An empty selection reports zero found and issues no network mutation
    /// and no prompt. A declined prompt aborts with no partial effect.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid input, user abort, or a failed request.
    pub async fn execute<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        format: &OutputFormat,
        filter: &FilterArgs,
    ) -> Result<(), CliError> {
        let selection = selection_from(filter)?;
        let client = self.config.source_client()?;
        let collection = fetch_selected(&client, &selection).await?;

        // Only id-bearing definitions can be addressed; the prompt and the
        // report both cover exactly that set.
        let targets: Vec<&AlertDefinition> = collection
            .iter()
            .filter(|def| def.id.is_some())
            .collect();

        if targets.is_empty() {
            format.write(
                out,
                &Message::info(format!(
                    "No alert definitions matched the selection ({})",
                    selection.describe()
                )),
            )?;
            return Ok(());
        }

        if !self.assume_yes {
            let names: Vec<String> = targets.iter().map(|def| def.name.clone()).collect();
            confirm(input, out, self.op.verb(), &names)?;
        }

        let ids: Vec<u64> = targets.iter().filter_map(|def| def.id).collect();
        match self.op {
            MutateOp::Delete => client.delete_by_ids(&ids).await?,
            MutateOp::Enable => client.set_enabled(&ids, true).await?,
            MutateOp::Disable => client.set_enabled(&ids, false).await?,
        }

        format.write(out, &BatchResult::whole(ids.len()))?;
        Ok(())
    }
}
