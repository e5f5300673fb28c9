use crate::admin::AdminClient;
use crate::models::rest::KafkaTopic;
use crate::models::{config_entries_to_data, ConfigEntriesToSet, TopicConfigs};
use crate::pattern::Patterns;
use crate::transport::{HttpRequest, HttpTransport};
use anyhow::Context;
use serde_json::json;
use tracing::{debug, info};

impl<T: HttpTransport> AdminClient<T> {
    /// Names of the topics matching `patterns`, in catalog order.
    pub async fn list_topics(
        &self,
        patterns: impl Into<Patterns>,
    ) -> Result<Vec<String>, anyhow::Error> {
        let patterns: Patterns = patterns.into();
        let topics = self.fetch_topics().await?;

        Ok(patterns.filter(topics.into_iter().map(|topic| topic.topic_name)))
    }

    /// Optionally alters the configuration of every matching topic, then reads it back.
    pub async fn get_or_set_topic_config(
        &self,
        patterns: impl Into<Patterns>,
        config: Option<&ConfigEntriesToSet>,
    ) -> Result<TopicConfigs, anyhow::Error> {
        let topics = self.list_topics(patterns).await?;

        if let Some(config) = config {
            let body = json!({ "data": config_entries_to_data(config) });
            for topic in &topics {
                info!("Altering config of topic '{topic}': {:?}", config);
                let url = self.cluster_url(["topics", topic.as_str(), "configs:alter"]);
                self.send(HttpRequest::post(url, body.clone()))
                    .await
                    .with_context(|| format!("While altering config of topic '{topic}'"))?;
            }
        }

        let mut configs = TopicConfigs::new();
        for topic in topics {
            let config = self
                .fetch_config(self.cluster_url(["topics", topic.as_str(), "configs"]))
                .await
                .with_context(|| format!("While fetching config of topic '{topic}'"))?;
            configs.insert(topic, config);
        }

        Ok(configs)
    }

    pub(crate) async fn fetch_topics(&self) -> Result<Vec<KafkaTopic>, anyhow::Error> {
        let topics = self
            .fetch_data::<KafkaTopic>(HttpRequest::get(self.cluster_url(["topics"])))
            .await
            .context("While listing topics")?;
        debug!("Got {} topics", topics.len());

        Ok(topics)
    }
}
