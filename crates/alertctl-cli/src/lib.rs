//! # alertctl-cli
//!
//! Command-line interface for managing alert definitions in a remote
//! alerting service.
//!
//! Provides commands for:
//! - Listing and selecting alert definitions
//! - Creating or updating definitions from a file
//! - Batched delete / enable / disable with confirmation
//! - Cross-domain copy
//! - Domain resolution reporting
//!
//! # Architecture
//!
//! The CLI talks to the alerting service's REST API through
//! [`alertctl_client::AlertClient`]. Configuration is resolved once at
//! startup from flags, environment, and an optional JSON file, then passed
//! by reference to every command.
//!
//! ```text
//! ┌──────────┐      HTTPS (standAloneToken)      ┌──────────────────┐
//! │ alertctl │◄─────────────────────────────────►│ alerting service │
//! └──────────┘                                   └──────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, CreateArgs, FilterArgs, Format};
pub use config::Config;
pub use error::CliError;
pub use output::OutputFormat;
