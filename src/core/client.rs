use crate::config::ApiConfig;
use crate::domain::model::{ValidationOutcome, ValidationResult};
use crate::utils::error::Result;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// When and how often a failed request is retried. The default mirrors the
/// original tool: fixed 10 second cooldown, retry forever.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub cooldown: Duration,
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn fixed(cooldown: Duration) -> Self {
        Self {
            cooldown,
            max_attempts: None,
        }
    }

    pub fn bounded(cooldown: Duration, max_attempts: u32) -> Self {
        Self {
            cooldown,
            max_attempts: Some(max_attempts),
        }
    }

    fn allows_another(&self, attempts_made: u32) -> bool {
        self.max_attempts.map_or(true, |max| attempts_made < max)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(Duration::from_secs(10))
    }
}

/// Issues one recipient-validation request per address.
pub struct ValidationClient {
    client: Client,
    config: ApiConfig,
    retry: RetryPolicy,
}

impl ValidationClient {
    pub fn new(config: ApiConfig, retry: RetryPolicy) -> Self {
        Self {
            client: Client::new(),
            config,
            retry,
        }
    }

    /// Drives one address to a terminal outcome.
    ///
    /// Non-200 statuses and transport errors are transient: log, sleep the
    /// cooldown, try again until the policy says stop. A 200 whose body is
    /// not the expected `{"results": {...}}` shape is a protocol error: the
    /// body is logged and the address is skipped for good, since the server
    /// claimed success but gave nothing usable.
    pub async fn validate(&self, address: &str) -> Result<ValidationOutcome> {
        let url = self.config.single_url(address)?;
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let status = match self
                .client
                .get(url.clone())
                .header(AUTHORIZATION, self.config.api_key())
                .header(ACCEPT, "application/json")
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status == StatusCode::OK {
                        return self.handle_success(address, response).await;
                    }
                    tracing::warn!("{address}: HTTP {status}");
                    status.as_u16()
                }
                Err(e) => {
                    tracing::warn!("{address}: request failed: {e}");
                    0
                }
            };

            if !self.retry.allows_another(attempts) {
                tracing::error!("{address}: giving up after {attempts} attempts");
                return Ok(ValidationOutcome::Abandoned { status });
            }
            tracing::debug!("{address}: snoozing {:?} before retrying", self.retry.cooldown);
            tokio::time::sleep(self.retry.cooldown).await;
        }
    }

    async fn handle_success(
        &self,
        address: &str,
        response: reqwest::Response,
    ) -> Result<ValidationOutcome> {
        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("{address}: 200 response with unparseable body: {e}");
                return Ok(ValidationOutcome::Skipped);
            }
        };
        match body.get("results").filter(|r| r.is_object()) {
            Some(results) => match serde_json::from_value::<ValidationResult>(results.clone()) {
                Ok(mut row) => {
                    row.email = address.to_string();
                    Ok(ValidationOutcome::Row(row))
                }
                Err(e) => {
                    tracing::error!("{address}: results payload has unexpected shape: {e}");
                    Ok(ValidationOutcome::Skipped)
                }
            },
            None => {
                tracing::error!("{address}: unexpected response body: {body}");
                Ok(ValidationOutcome::Skipped)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_policy_always_allows_retry() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.cooldown, Duration::from_secs(10));
        assert!(policy.allows_another(1));
        assert!(policy.allows_another(10_000));
    }

    #[test]
    fn bounded_policy_stops_at_max() {
        let policy = RetryPolicy::bounded(Duration::from_millis(1), 3);
        assert!(policy.allows_another(1));
        assert!(policy.allows_another(2));
        assert!(!policy.allows_another(3));
    }
}
