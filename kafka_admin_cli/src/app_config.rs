use anyhow::{bail, Context};
use config::Config;
use kafka_admin::models::DEFAULT_RETENTION_MS;
use kafka_admin::ConnectionSettings;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

#[derive(Deserialize)]
pub struct AppConfig {
    pub rest_proxy_url: String,
    pub cluster_id: String,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    #[serde(default)]
    pub verbose: u8,
    #[serde(default = "default_retention_ms")]
    pub retention_ms: i64,
}

fn default_retries() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

fn default_retention_ms() -> i64 {
    DEFAULT_RETENTION_MS
}

impl AppConfig {
    pub fn build() -> Result<Self, anyhow::Error> {
        let config = Config::builder()
            .add_source(config::File::with_name("kafka_admin").required(false))
            .add_source(config::Environment::with_prefix("KAFKA_ADMIN").separator("__"))
            .build()
            .context("While building config")?;

        let deserialized_config: AppConfig = config
            .try_deserialize()
            .context("While deserializing config")?;

        info!(
            "App config: url {}, cluster {}, retries {}, verbose {}",
            deserialized_config.rest_proxy_url,
            deserialized_config.cluster_id,
            deserialized_config.retries,
            deserialized_config.verbose
        );

        Ok(deserialized_config)
    }
}

impl TryFrom<&AppConfig> for ConnectionSettings {
    type Error = anyhow::Error;

    fn try_from(value: &AppConfig) -> Result<Self, Self::Error> {
        let mut settings = ConnectionSettings::new(&value.rest_proxy_url, &value.cluster_id);
        settings.retries = value.retries;
        settings.retry_backoff = Duration::from_millis(value.retry_backoff_ms);
        settings.debug = value.verbose >= 2;

        settings = match (&value.username, &value.password) {
            (Some(username), Some(password)) => settings.with_credentials(username, password),
            (None, None) => settings,
            _ => bail!("Both username and password must be set for basic auth"),
        };

        settings.validate()?;
        Ok(settings)
    }
}
