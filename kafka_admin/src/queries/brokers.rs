use crate::admin::AdminClient;
use crate::models::rest::KafkaBroker;
use crate::models::{config_entries_to_data, BrokerConfigs, Brokers, ConfigEntriesToSet};
use crate::pattern::Patterns;
use crate::transport::{HttpRequest, HttpTransport};
use anyhow::Context;
use serde_json::json;
use tracing::{debug, info};

impl<T: HttpTransport> AdminClient<T> {
    /// Brokers whose id, as a decimal string, matches `patterns`.
    pub async fn list_brokers(
        &self,
        patterns: impl Into<Patterns>,
    ) -> Result<Brokers, anyhow::Error> {
        let patterns: Patterns = patterns.into();

        let brokers = self
            .fetch_data::<KafkaBroker>(HttpRequest::get(self.cluster_url(["brokers"])))
            .await
            .context("While listing brokers")?;
        debug!("Got {} brokers", brokers.len());

        Ok(brokers
            .into_iter()
            .filter(|broker| patterns.matches(&broker.broker_id.to_string()))
            .map(|broker| (broker.broker_id, format!("{}:{}", broker.host, broker.port)))
            .collect())
    }

    /// Optionally alters broker configuration, then reports it for every matched broker.
    ///
    /// The proxy only exposes cluster-wide broker configs: a write applies to
    /// all brokers regardless of `patterns`, and the same cluster config is
    /// reported under each matched broker id.
    pub async fn get_or_set_broker_config(
        &self,
        patterns: impl Into<Patterns>,
        config: Option<&ConfigEntriesToSet>,
    ) -> Result<BrokerConfigs, anyhow::Error> {
        let brokers = self.list_brokers(patterns).await?;

        if let Some(config) = config {
            info!("Altering cluster-wide broker config: {:?}", config);
            let body = json!({ "data": config_entries_to_data(config) });
            self.send(HttpRequest::post(self.cluster_url(["broker-configs:alter"]), body))
                .await
                .context("While altering broker configs")?;
        }

        let cluster_config = self
            .fetch_config(self.cluster_url(["broker-configs"]))
            .await
            .context("While fetching broker configs")?;

        Ok(brokers
            .into_keys()
            .map(|broker_id| (broker_id, cluster_config.clone()))
            .collect())
    }
}
