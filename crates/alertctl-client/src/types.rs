//! Core types for the alert-definition API.
//!
//! This module provides the fundamental types shared across the crate:
//! - [`Cloud`]: The cloud region the alerting service runs in
//! - [`AlertDefinition`]: An alert definition resource
//! - [`AlertCorrelationContext`]: Server-owned correlation metadata
//! - [`AlertCollection`]: A single fetched page of definitions

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Subcategory prefix marking library alerts that encode their owning domain.
///
/// A subcategory of the form `lib.my.<domain>.<rest>` belongs to `<domain>`.
pub const LIBRARY_SUBCATEGORY_PREFIX: &str = "lib.my.";

/// Cloud region hosting the alerting service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cloud {
    /// United States region.
    #[default]
    Us,
    /// European region.
    Eu,
}

impl Cloud {
    /// Returns the region as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
        }
    }

    /// Base URL of the alert-definition API for this region.
    #[must_use]
    pub fn api_base(&self) -> String {
        format!("https://api-{}.alerting.cloud/alerts/v1", self.as_str())
    }

    /// URL of the query endpoint used for domain aggregation lookups.
    #[must_use]
    pub fn query_url(&self) -> String {
        format!("https://api-{}.alerting.cloud/search/query", self.as_str())
    }
}

impl std::fmt::Display for Cloud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a cloud value is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cloud '{raw}': expected 'us' or 'eu'")]
pub struct InvalidCloud {
    /// The rejected input.
    pub raw: String,
}

impl FromStr for Cloud {
    type Err = InvalidCloud;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            _ => Err(InvalidCloud { raw: s.to_string() }),
        }
    }
}

/// An alert definition as stored by the remote service.
///
/// Only the fields the selection and transformation logic understands are
/// typed; everything else the server returns (message, query text, priority,
/// ...) is carried through the flattened `extra` map so that a definition can
/// be re-submitted without losing data.
///
/// Server-owned fields are optional: they are present on fetched definitions
/// and absent on definitions prepared for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDefinition {
    /// Server-assigned identifier. Absent on create, required on update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Human-readable alert name.
    pub name: String,

    /// Dot-delimited hierarchical classification path.
    #[serde(default)]
    pub subcategory: String,

    /// Whether the alert is currently enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Whether the alert is marked as a favorite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,

    /// Whether the alert is part of an alert chain. Server-owned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_alert_chain: Option<bool>,

    /// Creation timestamp. Server-owned, format opaque to this client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Value>,

    /// Category identifier. Server-owned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,

    /// Subcategory identifier. Server-owned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<u64>,

    /// Correlation metadata. Server-owned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_correlation_context: Option<AlertCorrelationContext>,

    /// Attached action policies, opaque identifiers.
    #[serde(default)]
    pub action_policy_id: Vec<Value>,

    /// Every other field the server returned, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AlertDefinition {
    /// Whether the definition is enabled. Missing state counts as disabled.
    #[must_use]
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }

    /// Whether the definition is a favorite.
    #[must_use]
    pub fn favorite(&self) -> bool {
        self.is_favorite.unwrap_or(false)
    }

    /// Whether the subcategory marks this as a domain-owned library alert.
    #[must_use]
    pub fn is_library_alert(&self) -> bool {
        self.subcategory.starts_with(LIBRARY_SUBCATEGORY_PREFIX)
    }
}

/// Server-owned correlation metadata attached to an alert definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCorrelationContext {
    /// Context identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Dot-delimited context name. Segment index 2 optionally encodes the
    /// owning domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_id: Option<String>,

    /// Email of the owning operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,

    /// Remaining server-owned context fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single fetched page of alert definitions.
///
/// The service is queried with a fixed page size of 1000 and no pagination
/// loop; larger collections are truncated to the first page.
pub type AlertCollection = Vec<AlertDefinition>;
