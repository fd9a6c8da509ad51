//! List command implementation.

use std::io::Write;

use alertctl_client::fetch_selected;

use crate::cli::FilterArgs;
use crate::commands::selection_from;
use crate::config::Config;
use crate::error::CliError;
use crate::output::{AlertList, OutputFormat};

/// List command executor.
pub struct ListCommand<'a> {
    config: &'a Config,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid filter input or a failed fetch.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        filter: &FilterArgs,
    ) -> Result<(), CliError> {
        let selection = selection_from(filter)?;
        let client = self.config.source_client()?;
        let collection = fetch_selected(&client, &selection).await?;

        format.write(out, &AlertList::new(collection))?;
        Ok(())
    }
}
