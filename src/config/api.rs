use crate::utils::error::{Result, ValidateError};
use url::Url;

const HOST_ENV: &str = "SPARKPOST_HOST";
const API_KEY_ENV: &str = "SPARKPOST_API_KEY";
const DEFAULT_HOST: &str = "api.sparkpost.com";
const SINGLE_PATH: &str = "/api/v1/recipient-validation/single/";

/// API endpoint and credentials, built once at startup and passed by
/// reference into the client. No ambient state.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    api_key: String,
}

impl ApiConfig {
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Reads `SPARKPOST_HOST` (optional) and `SPARKPOST_API_KEY` (required).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ValidateError::config(format!("{API_KEY_ENV} environment variable must be set"))
            })?;
        let host = std::env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let base_url = Url::parse(&format!("https://{}{}", normalize_host(&host), SINGLE_PATH))?;
        Ok(Self::new(base_url, api_key))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Endpoint URL for a single address, percent-encoded as a path segment.
    pub fn single_url(&self, address: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ValidateError::config(format!("API base URL {} has no path", self.base_url)))?
            .pop_if_empty()
            .push(address);
        Ok(url)
    }
}

/// Accepts `host`, `https://host` or `host/` and returns the bare host.
fn normalize_host(raw: &str) -> &str {
    let host = raw.trim();
    let host = host.strip_prefix("https://").unwrap_or(host);
    let host = host.strip_prefix("http://").unwrap_or(host);
    host.trim_end_matches('/')
}
