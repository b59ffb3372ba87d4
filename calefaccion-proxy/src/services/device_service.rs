use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;

use crate::configs::Device;
use crate::errors::ProxyError;

/// HTTP client for the relay device, retrying failed calls.
pub struct DeviceService {
    client: Client,
    device: Device,
    base_url: String,
}

impl DeviceService {
    pub fn new(device: Device) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_millis(device.timeout_ms))
            .no_proxy()
            .build()?;

        let base_url = device.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            device,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<Value, ProxyError> {
        self.send(Method::GET, path, &[]).await
    }

    pub async fn post(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ProxyError> {
        self.send(Method::POST, path, query).await
    }

    fn credentials(&self) -> Option<(&str, &str)> {
        if self.device.username.is_empty() || self.device.password.is_empty() {
            None
        } else {
            Some((&self.device.username, &self.device.password))
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ProxyError> {
        let url = format!("{}{}", self.base_url, path);
        let attempts = self.device.attempts.max(1);
        let mut attempt = 1;

        loop {
            tracing::debug!("{} {} attempt {}/{}", method, url, attempt, attempts);

            let mut request = self.client.request(method.clone(), &url).query(query);
            if let Some((username, password)) = self.credentials() {
                request = request.basic_auth(username, Some(password));
            }

            let result = match request.send().await.and_then(|r| r.error_for_status()) {
                Ok(response) => response.json::<Value>().await,
                Err(err) => Err(err),
            };

            match result {
                Ok(body) => return Ok(body),
                Err(err) if attempt < attempts => {
                    tracing::warn!("{} {} failed, retrying: {}", method, url, err);
                    tokio::time::sleep(Duration::from_millis(self.device.retry_delay_ms)).await;
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
