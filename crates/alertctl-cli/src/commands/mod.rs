//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command:
//! - [`list`] - Render the selected definitions
//! - [`create`] - Create or update definitions from a file
//! - [`mutate`] - Batched delete / enable / disable
//! - [`copy`] - Cross-domain copy
//! - [`domain`] - Resolved-domain report

pub mod copy;
pub mod create;
pub mod domain;
pub mod list;
pub mod mutate;

pub use copy::CopyCommand;
pub use create::CreateCommand;
pub use domain::DomainCommand;
pub use list::ListCommand;
pub use mutate::{MutateCommand, MutateOp};

use alertctl_client::{Selection, parse_alert_id};

use crate::cli::FilterArgs;
use crate::error::CliError;

/// Build the selection criterion from the filter flags.
///
/// Clap guarantees mutual exclusion; the id form is validated here, before
/// any network call. No flag at all selects everything.
pub fn selection_from(filter: &FilterArgs) -> Result<Selection, CliError> {
    if filter.active {
        Ok(Selection::Active)
    } else if filter.inactive {
        Ok(Selection::Inactive)
    } else if filter.favorite {
        Ok(Selection::Favorite)
    } else if let Some(substr) = &filter.name {
        Ok(Selection::Name(substr.clone()))
    } else if let Some(substr) = &filter.subcategory {
        Ok(Selection::Subcategory(substr.clone()))
    } else if let Some(raw) = &filter.id {
        let id = parse_alert_id(raw)
            .map_err(|e| CliError::Validation(format!("{e}; try --id 173054")))?;
        Ok(Selection::Id(id))
    } else {
        Ok(Selection::All)
    }
}
