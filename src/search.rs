use std::time::Duration;

use opensearch::auth::Credentials;
use opensearch::cert::CertificateValidation;
use opensearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use opensearch::http::StatusCode;
use opensearch::indices::{IndicesCreateParts, IndicesExistsParts};
use opensearch::{IndexParts, OpenSearch};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::config::Config;
use crate::document::LogDocument;

/// Errors from search backend operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Index check error: {0}")]
    IndexCheck(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Thin wrapper over the search backend's HTTP client.
///
/// One instance is built at startup and shared by every handler invocation;
/// the transport handles connection reuse, no application-level locking.
pub struct SearchClient {
    client: OpenSearch,
}

impl SearchClient {
    /// Build a client for the configured backend. Basic auth, bounded request
    /// timeout. Certificate validation is turned off to match deployments
    /// running the backend with a self-signed certificate.
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let url = Url::parse(&config.search_url)
            .map_err(|e| SearchError::Connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(url);
        let transport = TransportBuilder::new(conn_pool)
            .auth(Credentials::Basic(
                config.search_user.clone(),
                config.search_password.clone(),
            ))
            .cert_validation(CertificateValidation::None)
            .timeout(Duration::from_secs(config.search_timeout_secs))
            .build()
            .map_err(|e| SearchError::Connection(e.to_string()))?;

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    /// Liveness check, run once at process start. A `false` here puts the bot
    /// into degraded mode: Discord keeps running, logging is skipped.
    pub async fn ping(&self) -> bool {
        match self.client.ping().send().await {
            Ok(response) => response.status_code().is_success(),
            Err(e) => {
                warn!("Search backend ping failed: {}", e);
                false
            }
        }
    }

    /// Make sure an index exists, creating it with default settings when it
    /// doesn't. Creation failure is tolerated (another writer may have raced
    /// us); only the existence check itself can error.
    pub async fn ensure_index(&self, name: &str) -> Result<(), SearchError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| SearchError::IndexCheck(e.to_string()))?;

        if response.status_code() == StatusCode::OK {
            return Ok(());
        }

        match self
            .client
            .indices()
            .create(IndicesCreateParts::Index(name))
            .send()
            .await
        {
            Ok(response) if response.status_code().is_success() => {
                info!("🆕 Created new index: {}", name);
            }
            Ok(response) => {
                warn!(
                    "Index creation for {} returned status {}",
                    name,
                    response.status_code()
                );
            }
            Err(e) => {
                warn!("Failed to create index {}: {}", name, e);
            }
        }

        Ok(())
    }

    /// Write one document to an index. The backend's response is inspected
    /// for the created indicator; anything else is logged as a warning and
    /// the document is dropped.
    pub async fn write_document(
        &self,
        index: &str,
        document: &LogDocument,
    ) -> Result<(), SearchError> {
        let response = self
            .client
            .index(IndexParts::Index(index))
            .body(document)
            .send()
            .await
            .map_err(|e| SearchError::Write(e.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        if write_accepted(&body) {
            info!("📌 Log sent to {}: {:?}", index, document);
        } else {
            warn!("⚠️ Log may not be saved properly: {}", body);
        }

        Ok(())
    }
}

/// A create-style write is accepted when the backend reports
/// `"result": "created"`.
fn write_accepted(body: &serde_json::Value) -> bool {
    body.get("result").and_then(|r| r.as_str()) == Some("created")
}
