use anyhow::bail;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub rest_proxy_url: String,
    pub cluster_id: String,
    pub credentials: Option<BasicCredentials>,
    pub retries: u32,
    pub retry_backoff: Duration,
    pub debug: bool,
}

impl ConnectionSettings {
    pub fn new(rest_proxy_url: impl Into<String>, cluster_id: impl Into<String>) -> Self {
        Self {
            rest_proxy_url: rest_proxy_url.into(),
            cluster_id: cluster_id.into(),
            credentials: None,
            retries: 3,
            retry_backoff: Duration::from_millis(1000),
            debug: false,
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(BasicCredentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.rest_proxy_url.trim().is_empty() {
            bail!("No REST proxy url specified")
        }
        if self.cluster_id.trim().is_empty() {
            bail!("No cluster id specified")
        }
        Ok(())
    }

    /// Base url without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.rest_proxy_url.trim_end_matches('/')
    }
}
