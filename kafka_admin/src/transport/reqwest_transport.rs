use crate::connection_settings::{BasicCredentials, ConnectionSettings};
use crate::error::TransportError;
use crate::transport::{HttpMethod, HttpRequest, HttpTransport};
use anyhow::Context;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, trace, warn};

impl From<HttpMethod> for reqwest::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    credentials: Option<BasicCredentials>,
    retries: u32,
    retry_backoff: Duration,
    debug: bool,
}

impl ReqwestTransport {
    pub fn create(settings: &ConnectionSettings) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .build()
            .context("While creating http client")?;

        Ok(Self {
            client,
            credentials: settings.credentials.clone(),
            retries: settings.retries,
            retry_backoff: settings.retry_backoff,
            debug: settings.debug,
        })
    }

    async fn send_once(&self, request: &HttpRequest) -> Result<String, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }
        if let Some(credentials) = &self.credentials {
            builder = builder.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let transport_error = |status: Option<u16>, body: String| TransportError {
            method: request.method,
            url: request.url.clone(),
            status,
            body,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(e.status().map(|s| s.as_u16()), e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(Some(status.as_u16()), e.to_string()))?;

        if self.debug {
            info!("{} {} -> {}: {}", request.method, request.url, status, text);
        } else {
            trace!("{} {} -> {}", request.method, request.url, status);
        }

        if !status.is_success() {
            return Err(transport_error(Some(status.as_u16()), text));
        }

        Ok(text)
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<Value, anyhow::Error> {
        if self.debug {
            info!(
                "{} {} query: {:?}, body: {:?}",
                request.method, request.url, request.query, request.body
            );
        }

        let attempts = self.retries.max(1);
        let mut attempt = 1;
        let text = loop {
            match self.send_once(&request).await {
                Ok(text) => break text,
                Err(e) if attempt < attempts => {
                    warn!("Attempt {attempt}/{attempts} failed: {e}");
                    tokio::time::sleep(self.retry_backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        };

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).with_context(|| {
            format!("While parsing response of {} {}", request.method, request.url)
        })
    }
}
