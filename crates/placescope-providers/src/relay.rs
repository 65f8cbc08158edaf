//! Client for the external notification relay.
//!
//! The relay owns delivery, retries and formatting; this client only POSTs a
//! serialized payload to `{relay_url}/api/notifications` and reports whether
//! the relay accepted it.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;

use crate::error::RelayError;

pub struct RelayClient {
    client: Client,
    endpoint: Url,
}

impl RelayClient {
    /// # Errors
    ///
    /// Returns [`RelayError::InvalidUrl`] if `relay_url` does not parse, or
    /// [`RelayError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(relay_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", relay_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("api/notifications"))
            .map_err(|e| RelayError::InvalidUrl {
                url: relay_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    /// POST `payload` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Http`] on network failure, or
    /// [`RelayError::Rejected`] when the relay answers with a non-2xx status.
    pub async fn send<T>(&self, payload: &T) -> Result<(), RelayError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                "notification relay rejected payload"
            );
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(endpoint = %self.endpoint, "notification handed to relay");
        Ok(())
    }
}
