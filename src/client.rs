use reqwest::Method;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::config::Config;
use crate::error::ClientError;
use crate::models::{Credentials, RegistrationPayload, UpdateRequest, UserPreferences};

/// HTTP client for the BFF. Sends finalized payloads; builds nothing itself.
#[derive(Debug, Clone)]
pub struct BffClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct PreferencesResponse {
    preferences: UserPreferences,
}

impl BffClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.bff_base_url.clone())
    }

    pub async fn register(&self, payload: &RegistrationPayload) -> Result<Value, ClientError> {
        self.send(Method::POST, "/users", payload).await
    }

    pub async fn fetch_preferences(
        &self,
        credentials: &Credentials,
    ) -> Result<UserPreferences, ClientError> {
        credentials.validate()?;
        let response: PreferencesResponse = self.send(Method::GET, "/users", credentials).await?;
        Ok(response.preferences)
    }

    pub async fn update(&self, request: &UpdateRequest) -> Result<Value, ClientError> {
        request.credentials().validate()?;
        self.send(Method::PUT, "/users", request).await
    }

    pub async fn delete(&self, credentials: &Credentials) -> Result<Value, ClientError> {
        credentials.validate()?;
        self.send(Method::DELETE, "/users", credentials).await
    }

    pub async fn fetch_news(&self, credentials: &Credentials) -> Result<Value, ClientError> {
        credentials.validate()?;
        self.send(Method::POST, "/news", credentials).await
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        info!("{} {}", method, url);

        let response = self.http.request(method, &url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("BFF responded with {} for {}", status, url);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
