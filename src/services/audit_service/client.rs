use crate::error::{AuditError, AuditResult};
use crate::models::{AuditInput, AuditOutput, HealthStatus};
use crate::utils::AuditConfig;
use log::{debug, info, warn};
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;

/// HTTP client for the remote audit service.
///
/// One attempt per call: no retries, no cache, and no timeout beyond the
/// reqwest default.
#[derive(Debug, Clone)]
pub struct AuditClient {
    http: Client,
    config: AuditConfig,
}

impl AuditClient {
    pub fn new(config: AuditConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(AuditConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Submits one transcript for scoring.
    pub async fn submit(&self, input: &AuditInput) -> AuditResult<AuditOutput> {
        let url = self.config.endpoint("audit");
        info!("Submitting audit for ticket {} to {}", input.ticket_id, url);

        let response = self
            .http
            .post(&url)
            .header(header::CACHE_CONTROL, "no-store")
            .json(input)
            .send()
            .await
            .inspect_err(|e| warn!("Audit request to {} failed: {}", url, e))?;

        let output: AuditOutput = read_body(response).await?;
        info!(
            "Audit for ticket {} scored overall {} (ztp triggered: {})",
            output.metadata.ticket_id, output.overall, output.zero_tolerance.triggered
        );
        Ok(output)
    }

    // Liveness probe of the service
    pub async fn health(&self) -> AuditResult<HealthStatus> {
        let url = self.config.endpoint("");
        debug!("Checking audit service health at {}", url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .inspect_err(|e| warn!("Health check against {} failed: {}", url, e))?;
        read_body(response).await
    }
}

// Non-2xx bodies are kept as raw text and never parsed as a result.
async fn read_body<T: DeserializeOwned>(response: Response) -> AuditResult<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("Audit service answered {}: {}", status, body);
        return Err(AuditError::Request {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        warn!("Audit service response did not match schema: {}", e);
        AuditError::Schema {
            message: e.to_string(),
            body,
        }
    })
}
