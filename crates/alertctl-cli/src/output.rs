//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats.

use std::io::Write;

use alertctl_client::AlertCollection;
use serde::Serialize;

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => {
                value.write_table(writer)?;
            }
        }
        Ok(())
    }

    /// Write a serializable value to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// A listing of alert definitions.
#[derive(Debug, Clone, Serialize)]
pub struct AlertList {
    /// The selected definitions, in collection order.
    pub alerts: AlertCollection,
}

impl AlertList {
    /// Wrap a fetched collection for display.
    #[must_use]
    pub const fn new(alerts: AlertCollection) -> Self {
        Self { alerts }
    }
}

impl TableDisplay for AlertList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.alerts.is_empty() {
            writeln!(writer, "No alert definitions found")?;
            return Ok(());
        }

        writeln!(
            writer,
            "{:>8}  {:<40}  {:<8}  {:<8}  {}",
            "ID", "NAME", "ACTIVE", "FAVORITE", "SUBCATEGORY"
        )?;
        writeln!(writer, "{}", "─".repeat(100))?;

        for alert in &self.alerts {
            writeln!(
                writer,
                "{:>8}  {:<40}  {:<8}  {:<8}  {}",
                alert.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                truncate(&alert.name, 40),
                if alert.active() { "yes" } else { "no" },
                if alert.favorite() { "yes" } else { "no" },
                alert.subcategory
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total: {} definition(s)", self.alerts.len())?;
        Ok(())
    }
}

/// Resolved-domain report.
#[derive(Debug, Clone, Serialize)]
pub struct DomainReport {
    /// Which credential was resolved (`source` or `target`).
    pub credential: String,
    /// The resolved domain name, or the sentinel `unknown`.
    pub domain: String,
}

impl TableDisplay for DomainReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "{} domain: {}", self.credential, self.domain)?;
        Ok(())
    }
}

/// Simple message output.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Message text.
    pub message: String,
    /// Whether this is a success message.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub success: bool,
}

impl Message {
    /// Create a success message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create an informational message.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl TableDisplay for Message {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.success {
            writeln!(writer, "✓ {}", self.message)?;
        } else {
            writeln!(writer, "{}", self.message)?;
        }
        Ok(())
    }
}

/// Truncate a string to a maximum number of characters.
///
/// Cuts on character boundaries; names are arbitrary user strings and may
/// hold multi-byte characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = if max_len > 3 { max_len - 3 } else { max_len };
    let cut = s.char_indices().nth(keep).map_or(s.len(), |(i, _)| i);
    if max_len > 3 {
        format!("{}...", &s[..cut])
    } else {
        s[..cut].to_string()
    }
}
