//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// alertctl - manage alert definitions in a remote alerting service.
#[derive(Parser, Debug, Clone)]
#[command(name = "alertctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Cloud region the alerting service runs in (us or eu).
    #[arg(short, long, env = "ALERTCTL_CLOUD")]
    pub cloud: Option<String>,

    /// API token of the source domain.
    #[arg(short, long, env = "ALERTCTL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API token of the target domain, used by `copy` and `domain --target`.
    #[arg(long, env = "ALERTCTL_TARGET_TOKEN", hide_env_values = true)]
    pub target_token: Option<String>,

    /// Source domain name; skips remote resolution when set.
    #[arg(long)]
    pub domain: Option<String>,

    /// Target domain name; skips remote resolution when set.
    #[arg(long)]
    pub target_domain: Option<String>,

    /// Path to a JSON configuration file.
    #[arg(long, env = "ALERTCTL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the alert-definition API base URL (testing/staging).
    #[arg(long, env = "ALERTCTL_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// Override the query endpoint URL (testing/staging).
    #[arg(long, env = "ALERTCTL_QUERY_URL", hide = true)]
    pub query_url: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Answer yes to every confirmation prompt.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List alert definitions.
    List(FilterArgs),

    /// Create or update alert definitions from a JSON file.
    ///
    /// Definitions carrying an `id` are updated in place; definitions
    /// without one are created.
    Create(CreateArgs),

    /// Delete the selected alert definitions.
    Delete(FilterArgs),

    /// Enable the selected alert definitions.
    Enable(FilterArgs),

    /// Disable the selected alert definitions.
    Disable(FilterArgs),

    /// Copy the selected alert definitions into the target domain.
    ///
    /// The selection is stripped of server-assigned and domain-specific
    /// fields and re-created under the target token.
    Copy(FilterArgs),

    /// Show the domain a credential belongs to.
    Domain {
        /// Resolve the target credential instead of the source one.
        #[arg(long)]
        target: bool,
    },
}

/// Selection criterion flags. At most one may be given; the default
/// selects everything.
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct FilterArgs {
    /// Select every alert definition (default).
    #[arg(long)]
    pub all: bool,

    /// Select enabled alert definitions.
    #[arg(long)]
    pub active: bool,

    /// Select disabled alert definitions.
    #[arg(long)]
    pub inactive: bool,

    /// Select favorite alert definitions.
    #[arg(long)]
    pub favorite: bool,

    /// Select by case-insensitive name substring.
    #[arg(long, value_name = "SUBSTRING")]
    pub name: Option<String>,

    /// Select by case-insensitive subcategory substring.
    #[arg(long, value_name = "SUBSTRING")]
    pub subcategory: Option<String>,

    /// Select a single alert definition by numeric id.
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,
}

/// Arguments for the create command.
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// JSON file holding one alert definition or an array of them.
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: PathBuf,
}
