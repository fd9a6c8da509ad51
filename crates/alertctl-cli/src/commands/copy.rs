//! Cross-domain copy command implementation.

use std::io::{BufRead, Write};

use alertctl_client::{fetch_selected, portable, resolve_domain};
use tracing::debug;

use crate::batch::{confirm, save_all};
use crate::cli::FilterArgs;
use crate::commands::selection_from;
use crate::config::Config;
use crate::error::CliError;
use crate::output::{Message, OutputFormat};

/// Copy command executor.
///
/// Fetches the selection from the source domain, strips server-assigned and
/// domain-specific state, and re-creates every definition under the target
/// credential.
pub struct CopyCommand<'a> {
    config: &'a Config,
    assume_yes: bool,
}

impl<'a> CopyCommand<'a> {
    /// Create a new copy command.
    #[must_use]
    pub const fn new(config: &'a Config, assume_yes: bool) -> Self {
        Self { config, assume_yes }
    }

    /// Execute the copy command.
    ///
    /// The target credential is validated before any network call; a missing
    /// one fails immediately. Creation against the target runs sequentially,
    /// counting application failures per item.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid input, a missing target token, user
    /// abort, or a transport failure against either domain.
    pub async fn execute<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        format: &OutputFormat,
        filter: &FilterArgs,
    ) -> Result<(), CliError> {
        let selection = selection_from(filter)?;
        self.config.target_token()?;

        let source = self.config.source_client()?;
        let collection = fetch_selected(&source, &selection).await?;
        if collection.is_empty() {
            format.write(
                out,
                &Message::info(format!(
                    "No alert definitions matched the selection ({})",
                    selection.describe()
                )),
            )?;
            return Ok(());
        }

        let source_domain = match &self.config.domain {
            Some(domain) => domain.clone(),
            None => resolve_domain(&source).await?,
        };
        debug!(source_domain, count = collection.len(), "copy prepared");

        let definitions = portable(collection, &source_domain);

        let target = self.config.target_client()?;
        let target_domain = match &self.config.target_domain {
            Some(domain) => domain.clone(),
            None => resolve_domain(&target).await?,
        };

        if !self.assume_yes {
            let names: Vec<String> = definitions.iter().map(|def| def.name.clone()).collect();
            let action = format!("copied into domain '{target_domain}'");
            confirm(input, out, &action, &names)?;
        }

        let result = save_all(&target, &definitions, out).await?;
        format.write(out, &result)?;
        Ok(())
    }
}
