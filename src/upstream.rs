use axum::http::StatusCode;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::ForwardError;

/// Calls methods on other services through the Dapr sidecar's HTTP
/// service-invocation API.
#[derive(Debug, Clone)]
pub struct DaprInvoker {
    endpoint: String,
    http: reqwest::Client,
}

impl DaprInvoker {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn method_url(&self, app_id: &str, method: &str) -> String {
        format!("{}/v1.0/invoke/{}/method/{}", self.endpoint, app_id, method)
    }

    /// Posts `body` to `app_id`/`method` and returns the upstream status and
    /// JSON body unchanged. An empty body comes back as `null`.
    pub async fn invoke(
        &self,
        app_id: &str,
        method: &str,
        body: &Value,
    ) -> Result<(StatusCode, Value), ForwardError> {
        let url = self.method_url(app_id, method);
        info!("Invoking {} on {}", method, app_id);

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let payload = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        if !status.is_success() {
            warn!("{} on {} answered {}", method, app_id, status);
        }

        Ok((status, payload))
    }
}
