//! Domain report command implementation.

use std::io::Write;

use alertctl_client::resolve_domain;

use crate::config::Config;
use crate::error::CliError;
use crate::output::{DomainReport, OutputFormat};

/// Domain command executor.
///
/// Reports the domain a credential belongs to, either from a configured
/// override or through remote resolution.
pub struct DomainCommand<'a> {
    config: &'a Config,
}

impl<'a> DomainCommand<'a> {
    /// Create a new domain command.
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Execute the domain command.
    ///
    /// # Errors
    ///
    /// Returns an error when the target credential is requested but not
    /// configured, or on a transport failure.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        target: bool,
    ) -> Result<(), CliError> {
        let (credential, override_domain, client) = if target {
            (
                "target",
                self.config.target_domain.clone(),
                self.config.target_client()?,
            )
        } else {
            (
                "source",
                self.config.domain.clone(),
                self.config.source_client()?,
            )
        };

        let domain = match override_domain {
            Some(domain) => domain,
            None => resolve_domain(&client).await?,
        };

        format.write(
            out,
            &DomainReport {
                credential: credential.to_string(),
                domain,
            },
        )?;
        Ok(())
    }
}
