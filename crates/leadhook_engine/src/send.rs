use std::time::Duration;

use leadhook_logging::{hook_debug, hook_info};
use reqwest::header::{HeaderMap, CONTENT_TYPE, USER_AGENT};

use crate::{HttpResponse, SendError, SendFailureKind};

#[derive(Debug, Clone)]
pub struct SendSettings {
    /// `None`: wait for the transport to finish or fail.
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for SendSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            connect_timeout: None,
            user_agent: concat!("leadhook/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait WebhookSender: Send + Sync {
    /// POSTs `payload` as JSON to `url`. Any HTTP status is `Ok`.
    async fn send(&self, url: &str, payload: &str) -> Result<HttpResponse, SendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSender {
    settings: SendSettings,
}

impl ReqwestSender {
    pub fn new(settings: SendSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| SendError::new(SendFailureKind::Client, err.to_string()))
    }
}

#[async_trait::async_trait]
impl WebhookSender for ReqwestSender {
    async fn send(&self, url: &str, payload: &str) -> Result<HttpResponse, SendError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| SendError::new(SendFailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        hook_info!("POST {} payload_len={}", parsed, payload.len());
        let response = client
            .post(parsed)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, self.settings.user_agent.as_str())
            .body(payload.to_string())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let headers = flatten_headers(response.headers());
        let body = response.text().await.map_err(|err| {
            SendError::new(SendFailureKind::Body, err.to_string())
        })?;
        hook_debug!(
            "response status={} headers={} body_len={}",
            status.as_u16(),
            headers.len(),
            body.len()
        );

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            headers,
            body,
        })
    }
}

/// One value per header name, last value wins, in first-seen order.
pub fn flatten_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    let mut flat: Vec<(String, String)> = Vec::with_capacity(headers.keys_len());
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match flat.iter_mut().find(|(existing, _)| existing.as_str() == name.as_str()) {
            Some(slot) => slot.1 = value,
            None => flat.push((name.as_str().to_string(), value)),
        }
    }
    flat
}

fn map_reqwest_error(err: reqwest::Error) -> SendError {
    if err.is_timeout() {
        return SendError::new(SendFailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return SendError::new(SendFailureKind::Client, err.to_string());
    }
    if err.is_body() || err.is_decode() {
        return SendError::new(SendFailureKind::Body, err.to_string());
    }
    SendError::new(SendFailureKind::Network, err.to_string())
}
