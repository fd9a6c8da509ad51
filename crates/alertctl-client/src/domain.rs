//! Domain resolution for a credential.
//!
//! The domain a credential belongs to is purely informational: it feeds
//! display strings and the copy confirmation prompt, never authorization or
//! request construction.

use tracing::{debug, warn};

use crate::client::AlertClient;
use crate::error::Result;
use crate::types::LIBRARY_SUBCATEGORY_PREFIX;

/// Sentinel returned when no resolution step succeeds.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Resolve the domain associated with the client's credential.
///
/// Ordered fallback, short-circuiting on first success:
/// 1. Fetch the collection and read the domain out of the first library
///    alert's correlation `nameId` (dot-delimited, segment index 2).
/// 2. Ask the query endpoint's domain aggregation.
/// 3. Fall back to the sentinel [`UNKNOWN_DOMAIN`].
///
/// Application-level failures fall through to the next step; transport
/// failures escalate immediately.
///
/// # Errors
///
/// Returns an error only for transport failures.
pub async fn resolve_domain(client: &AlertClient) -> Result<String> {
    match client.fetch_all().await {
        Ok(collection) => {
            let from_library = collection
                .iter()
                .find(|def| def.subcategory.starts_with(LIBRARY_SUBCATEGORY_PREFIX))
                .and_then(|def| def.alert_correlation_context.as_ref())
                .and_then(|ctx| ctx.name_id.as_deref())
                .and_then(domain_from_name_id);

            if let Some(domain) = from_library {
                debug!(domain, "resolved domain from library alert");
                return Ok(domain);
            }
        }
        Err(e) if e.is_transport() => return Err(e),
        Err(e) => warn!(error = %e, "collection fetch failed during domain resolution"),
    }

    match client.query_domain().await {
        Ok(domain) => {
            debug!(domain, "resolved domain from aggregation query");
            Ok(domain)
        }
        Err(e) if e.is_transport() => Err(e),
        Err(e) => {
            warn!(error = %e, "domain aggregation failed, using sentinel");
            Ok(UNKNOWN_DOMAIN.to_string())
        }
    }
}

/// Extract the domain segment from a dot-delimited correlation `nameId`.
fn domain_from_name_id(name_id: &str) -> Option<String> {
    name_id
        .split('.')
        .nth(2)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
