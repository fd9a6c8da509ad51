//! # alertctl-client
//!
//! Client library for a remote alerting service's alert-definition API.
//!
//! Provides:
//! - [`AlertClient`]: the HTTP resource client (fetch, create, update,
//!   batched delete and enable/disable, domain aggregation query)
//! - [`resolve_domain`]: the credential-to-domain fallback chain
//! - [`Selection`]: the closed set of selection criteria and local filtering
//! - [`portable`]: transformation into a domain-portable, create-eligible form
//!
//! The CLI in `alertctl-cli` drives these pieces:
//!
//! ```text
//! ┌──────────────┐      HTTPS (standAloneToken)      ┌──────────────────┐
//! │ alertctl-cli │◄─────────────────────────────────►│ alerting service │
//! └──────────────┘        via AlertClient            └──────────────────┘
//! ```
//!
//! All network calls are sequential; transport failures are fatal and never
//! retried, while application-level failures (an `error` key in a well-formed
//! response body) surface as [`ClientError::Api`] for per-item accounting.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod domain;
pub mod error;
pub mod select;
pub mod transform;
pub mod types;

pub use client::{AlertClient, DEFAULT_CONNECT_TIMEOUT};
pub use domain::{UNKNOWN_DOMAIN, resolve_domain};
pub use error::ClientError;
pub use select::{InvalidAlertId, Selection, fetch_selected, filter, parse_alert_id};
pub use transform::portable;
pub use types::{
    AlertCollection, AlertCorrelationContext, AlertDefinition, Cloud, InvalidCloud,
    LIBRARY_SUBCATEGORY_PREFIX,
};
