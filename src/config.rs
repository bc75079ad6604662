use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 5003;
const DEFAULT_DAPR_HTTP_PORT: u16 = 3500;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub dapr_endpoint: String,
    pub users_manager_app_id: String,
    pub news_manager_app_id: String,
    pub frontend_dir: PathBuf,
    pub bff_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(&lookup, "APP_PORT", DEFAULT_PORT)?;

        let dapr_endpoint = match lookup("DAPR_HTTP_ENDPOINT") {
            Some(endpoint) => endpoint,
            None => {
                let dapr_port = parse_port(&lookup, "DAPR_HTTP_PORT", DEFAULT_DAPR_HTTP_PORT)?;
                format!("http://localhost:{}", dapr_port)
            }
        };

        Ok(Self {
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            dapr_endpoint: trim_slash(non_empty("DAPR_HTTP_ENDPOINT", dapr_endpoint)?),
            users_manager_app_id: non_empty(
                "USERS_MANAGER_APP_ID",
                lookup("USERS_MANAGER_APP_ID").unwrap_or_else(|| "users_manager".to_string()),
            )?,
            news_manager_app_id: non_empty(
                "NEWS_MANAGER_APP_ID",
                lookup("NEWS_MANAGER_APP_ID").unwrap_or_else(|| "news_manager".to_string()),
            )?,
            frontend_dir: lookup("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("frontend/build")),
            bff_base_url: trim_slash(
                lookup("BFF_BASE_URL").unwrap_or_else(|| format!("http://localhost:{}", DEFAULT_PORT)),
            ),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port<F>(lookup: &F, key: &'static str, default: u16) -> Result<u16, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { key, value }),
        None => Ok(default),
    }
}

fn non_empty(key: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { key });
    }
    Ok(value)
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
