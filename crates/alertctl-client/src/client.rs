//! HTTP client for the alert-definition collection and the query endpoint.
//!
//! The client owns no business logic: it issues the verbs the service
//! exposes, authenticates with the `standAloneToken` header, and classifies
//! failures into transport errors (fatal, never retried) and application
//! errors (a well-formed body carrying a top-level `error` key).
//!
//! # Example
//!
//! ```rust,no_run
//! use alertctl_client::{AlertClient, Cloud};
//!
//! # async fn example() -> Result<(), alertctl_client::ClientError> {
//! let client = AlertClient::new(Cloud::Us, "my-token")?;
//! let alerts = client.fetch_all().await?;
//! println!("{} definitions", alerts.len());
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::RequestBuilder;
use serde_json::{Value, json};
use tracing::{debug, trace, warn};

use crate::error::{ClientError, Result};
use crate::types::{AlertCollection, AlertDefinition, Cloud};

/// Header carrying the API credential on every request.
const TOKEN_HEADER: &str = "standAloneToken";

/// Fixed connect timeout applied to every request.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Page size of the single collection fetch. No pagination loop exists;
/// collections larger than one page are truncated.
const PAGE_SIZE: usize = 1000;

/// Aggregation query grouping consumption records by their owning domain.
const DOMAIN_QUERY: &str = "from system.consumption select domain group by domain";

/// Client for the alert-definition API of one cloud region.
///
/// Holds a single credential; a copy run constructs two clients, one per
/// credential.
pub struct AlertClient {
    /// Underlying HTTP client with a fixed connect timeout.
    http: reqwest::Client,
    /// Base URL of the alert-definition API.
    base_url: String,
    /// URL of the query endpoint.
    query_url: String,
    /// Credential sent as the `standAloneToken` header.
    token: String,
}

impl std::fmt::Debug for AlertClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertClient")
            .field("base_url", &self.base_url)
            .field("query_url", &self.query_url)
            .finish_non_exhaustive()
    }
}

impl AlertClient {
    /// Create a client for the given cloud region and credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(cloud: Cloud, token: impl Into<String>) -> Result<Self> {
        Self::with_urls(cloud.api_base(), cloud.query_url(), token)
    }

    /// Create a client against explicit endpoint URLs.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_urls(
        base_url: impl Into<String>,
        query_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Init {
                detail: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            query_url: query_url.into(),
            token: token.into(),
        })
    }

    fn alerts_url(&self) -> String {
        format!("{}/alertDefinitions", self.base_url)
    }

    /// Fetch the full collection (single page, size 1000).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an `error` response body.
    pub async fn fetch_all(&self) -> Result<AlertCollection> {
        let request = self
            .http
            .get(self.alerts_url())
            .query(&[("page", "0".to_string()), ("size", PAGE_SIZE.to_string())]);
        let body = self.execute(request, "fetch alert definitions").await?;
        let collection = Self::collection(body)?;

        if collection.len() >= PAGE_SIZE {
            warn!(
                count = collection.len(),
                "fetched a full page; definitions beyond the page size are not visible"
            );
        }

        Ok(collection)
    }

    /// Fetch definitions whose name contains the given substring
    /// (server-side filter).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an `error` response body.
    pub async fn fetch_by_name(&self, substr: &str) -> Result<AlertCollection> {
        let request = self
            .http
            .get(self.alerts_url())
            .query(&[("nameFilter", substr)]);
        let body = self.execute(request, "fetch alert definitions by name").await?;
        Self::collection(body)
    }

    /// Fetch the definition with the given id, as a singleton or empty
    /// collection (server-side filter).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an `error` response body.
    pub async fn fetch_by_id(&self, id: u64) -> Result<AlertCollection> {
        let request = self
            .http
            .get(self.alerts_url())
            .query(&[("idFilter", id.to_string())]);
        let body = self.execute(request, "fetch alert definition by id").await?;
        Self::collection(body)
    }

    /// Create a single alert definition.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an `error` response body.
    pub async fn create(&self, def: &AlertDefinition) -> Result<()> {
        let request = self.http.post(self.alerts_url()).json(def);
        self.execute(request, "create alert definition").await?;
        Ok(())
    }

    /// Update a single alert definition; the body must carry its `id`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an `error` response body.
    pub async fn update(&self, def: &AlertDefinition) -> Result<()> {
        let request = self.http.put(self.alerts_url()).json(def);
        self.execute(request, "update alert definition").await?;
        Ok(())
    }

    /// Create or update a definition, dispatching on `id` presence.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an `error` response body.
    pub async fn save(&self, def: &AlertDefinition) -> Result<()> {
        if def.id.is_some() {
            self.update(def).await
        } else {
            self.create(def).await
        }
    }

    /// Delete every listed definition in one batched request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an `error` response body.
    pub async fn delete_by_ids(&self, ids: &[u64]) -> Result<()> {
        let query: Vec<(&str, String)> =
            ids.iter().map(|id| ("alertIds", id.to_string())).collect();
        let request = self.http.delete(self.alerts_url()).query(&query);
        self.execute(request, "delete alert definitions").await?;
        Ok(())
    }

    /// Enable or disable every listed definition in one batched request.
    ///
    /// State is set, not toggled; re-running on an already-matching set is a
    /// no-op on the server.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an `error` response body.
    pub async fn set_enabled(&self, ids: &[u64], enabled: bool) -> Result<()> {
        let mut query: Vec<(&str, String)> =
            ids.iter().map(|id| ("alertIds", id.to_string())).collect();
        query.push(("enable", enabled.to_string()));

        let request = self
            .http
            .put(format!("{}/alertDefinitions/status", self.base_url))
            .query(&query);
        self.execute(request, "set alert definition status").await?;
        Ok(())
    }

    /// Ask the query endpoint which domain the credential belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the response carries an `error`
    /// key, [`ClientError::Parse`] when it carries no `domain` field.
    pub async fn query_domain(&self) -> Result<String> {
        let body = json!({
            "query": DOMAIN_QUERY,
            "from": "now()-1d",
            "to": "now()",
        });
        let request = self.http.post(&self.query_url).json(&body);
        let response = self.execute(request, "domain aggregation query").await?;

        response
            .get("domain")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ClientError::Parse {
                detail: "domain aggregation response carried no domain field".into(),
            })
    }

    /// Send a request and classify the response.
    ///
    /// Transport failures map to [`ClientError::Network`] or
    /// [`ClientError::Timeout`]. Bodies carrying a top-level `error` key map
    /// to [`ClientError::Api`] regardless of HTTP status.
    async fn execute(&self, request: RequestBuilder, what: &str) -> Result<Value> {
        trace!(request = what, "sending request");

        let response = request
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::from_transport(&e))?;
        debug!(request = what, status = status.as_u16(), "response received");

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str::<Value>(&text) {
                Ok(value) => value,
                Err(e) if status.is_success() => {
                    return Err(ClientError::Parse {
                        detail: format!("{what}: body is not JSON: {e}"),
                    });
                }
                Err(_) => Value::Null,
            }
        };

        if let Some(error) = body.get("error") {
            return Err(ClientError::Api {
                message: Self::error_message(error),
            });
        }

        if !status.is_success() {
            return Err(ClientError::Api {
                message: format!("{what}: HTTP {status}"),
            });
        }

        Ok(body)
    }

    fn error_message(error: &Value) -> String {
        match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        }
    }

    fn collection(body: Value) -> Result<AlertCollection> {
        serde_json::from_value(body).map_err(|e| ClientError::Parse {
            detail: format!("expected an alert definition list: {e}"),
        })
    }
}
