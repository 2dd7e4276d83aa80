use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Serialize, de::DeserializeOwned};
use slotwatch_core::TraceRecord;
use slotwatch_ports::{FetchError, FetchResult, TraceFetcher, TraceQuery};

use crate::config::ExporterConfig;
use crate::error::{ExporterError, MAX_ERROR_BODY_BYTES};
use crate::messages::{TraceRequest, TraceResponse};

pub const VALIDATOR_TRACES_PATH: &str = "/v1/exporter/traces/validator";

/// REST client for the validator-trace exporter
/// Infrastructure component - handles HTTP communication
#[derive(Clone)]
pub struct ExporterClient {
    client: Client,
    base_url: String,
}

impl ExporterClient {
    pub fn new(config: &ExporterConfig) -> Result<Self, ExporterError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(ExporterClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch validator traces for an inclusive slot range
    ///
    /// POST {base_url}/v1/exporter/traces/validator
    pub async fn get_validator_traces(
        &self,
        request: &TraceRequest,
    ) -> Result<TraceResponse, ExporterError> {
        self.post(VALIDATOR_TRACES_PATH, request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ExporterError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {}", url);
        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ExporterError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ExporterError::Status {
                status: status.as_u16(),
                body: read_error_body(resp).await,
            });
        }

        let bytes = resp.bytes().await?;
        log::debug!("Exporter responded {} with {} bytes", status, bytes.len());
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Read at most `MAX_ERROR_BODY_BYTES` of an error response
///
/// A body that fails midway keeps what was read; the status is the error
/// worth reporting.
async fn read_error_body(mut resp: reqwest::Response) -> String {
    let mut buf = Vec::new();
    while buf.len() < MAX_ERROR_BODY_BYTES {
        match resp.chunk().await {
            Ok(Some(chunk)) => {
                let take = chunk.len().min(MAX_ERROR_BODY_BYTES - buf.len());
                buf.extend_from_slice(&chunk[..take]);
            }
            Ok(None) => break,
            Err(e) => {
                log::debug!("Failed to read error body: {}", e);
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Implement TraceFetcher trait for ExporterClient (Dependency Inversion)
///
/// Converts infrastructure ExporterError to domain FetchError to maintain
/// proper dependency direction (infrastructure -> domain).
#[async_trait]
impl TraceFetcher for ExporterClient {
    async fn fetch_traces(&self, query: &TraceQuery) -> FetchResult<Vec<TraceRecord>> {
        let records = self
            .get_validator_traces(&TraceRequest::from(query))
            .await
            .map_err(FetchError::from)?
            .into_records();

        log::info!(
            "Fetched {} trace records for slots {}..={} (roles: {})",
            records.len(),
            query.from(),
            query.to(),
            query.roles().join(",")
        );
        Ok(records)
    }

    fn name(&self) -> &str {
        "ExporterClient"
    }
}
