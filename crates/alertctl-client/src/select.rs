//! Selection of a working set from the alert-definition collection.
//!
//! Exactly one criterion is active per invocation; criteria never compose.
//! Name and id selection use the service's native filters; every other
//! criterion fetches the full page and filters locally.

use thiserror::Error;

use crate::client::AlertClient;
use crate::error::Result;
use crate::types::{AlertCollection, AlertDefinition};

/// A single selection criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every definition in the collection.
    All,
    /// Definitions that are currently enabled.
    Active,
    /// Definitions that are currently disabled.
    Inactive,
    /// Definitions marked as favorites.
    Favorite,
    /// Definitions whose name contains the substring, case-insensitive.
    Name(String),
    /// Definitions whose subcategory contains the substring, case-insensitive.
    Subcategory(String),
    /// The definition with this exact id.
    Id(u64),
}

impl Selection {
    /// Whether a definition matches this criterion.
    #[must_use]
    pub fn matches(&self, def: &AlertDefinition) -> bool {
        match self {
            Self::All => true,
            Self::Active => def.active(),
            Self::Inactive => !def.active(),
            Self::Favorite => def.favorite(),
            Self::Name(substr) => contains_ignore_case(&def.name, substr),
            Self::Subcategory(substr) => contains_ignore_case(&def.subcategory, substr),
            Self::Id(id) => def.id == Some(*id),
        }
    }

    /// Short human description, used in empty-selection reports.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::All => "all".into(),
            Self::Active => "active".into(),
            Self::Inactive => "inactive".into(),
            Self::Favorite => "favorite".into(),
            Self::Name(substr) => format!("name contains '{substr}'"),
            Self::Subcategory(substr) => format!("subcategory contains '{substr}'"),
            Self::Id(id) => format!("id {id}"),
        }
    }
}

/// Error returned when an alert id argument is not purely numeric.
///
/// Raised during argument validation, before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid alert id '{raw}': must contain only decimal digits")]
pub struct InvalidAlertId {
    /// The rejected input.
    pub raw: String,
}

/// Parse an alert id argument, accepting only decimal digits.
///
/// # Errors
///
/// Returns [`InvalidAlertId`] for empty input, any non-digit character, or a
/// value that does not fit in a `u64`.
pub fn parse_alert_id(raw: &str) -> std::result::Result<u64, InvalidAlertId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidAlertId {
            raw: raw.to_string(),
        });
    }
    raw.parse().map_err(|_| InvalidAlertId {
        raw: raw.to_string(),
    })
}

/// Narrow a fetched collection to the definitions matching the criterion.
#[must_use]
pub fn filter(collection: AlertCollection, selection: &Selection) -> AlertCollection {
    collection
        .into_iter()
        .filter(|def| selection.matches(def))
        .collect()
}

/// Fetch the working set for a criterion.
///
/// `Name` and `Id` use the server-side filters; everything else fetches the
/// full page and filters locally. An empty result is a normal outcome.
///
/// # Errors
///
/// Returns an error if the underlying fetch fails.
pub async fn fetch_selected(
    client: &AlertClient,
    selection: &Selection,
) -> Result<AlertCollection> {
    match selection {
        Selection::Name(substr) => client.fetch_by_name(substr).await,
        Selection::Id(id) => client.fetch_by_id(*id).await,
        _ => Ok(filter(client.fetch_all().await?, selection)),
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
