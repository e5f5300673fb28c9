use crate::admin::AdminClient;
use crate::models::{config_entries_to_data, ConfigEntriesToSet, RETENTION_MS_KEY};
use crate::pattern::Patterns;
use crate::transport::{HttpRequest, HttpTransport};
use anyhow::Context;
use serde_json::json;
use tracing::info;

impl<T: HttpTransport> AdminClient<T> {
    /// Creates a topic and returns its name.
    ///
    /// `retention.ms` falls back to the client's default retention when `config` does not set it.
    pub async fn create_topic(
        &self,
        name: &str,
        partitions: u32,
        config: &ConfigEntriesToSet,
    ) -> Result<String, anyhow::Error> {
        let mut config = config.clone();
        config
            .entry(RETENTION_MS_KEY.to_owned())
            .or_insert_with(|| self.default_retention_ms().to_string());

        info!("Creating topic '{name}' with {partitions} partitions");
        let body = json!({
            "topic_name": name,
            "partitions_count": partitions,
            "configs": config_entries_to_data(&config),
        });
        self.send(HttpRequest::post(self.cluster_url(["topics"]), body))
            .await
            .with_context(|| format!("While creating topic '{name}'"))?;

        Ok(name.to_owned())
    }

    /// Deletes every topic matching `patterns` and returns the names that were targeted.
    pub async fn delete_topics(
        &self,
        patterns: impl Into<Patterns>,
    ) -> Result<Vec<String>, anyhow::Error> {
        let topics = self.list_topics(patterns).await?;

        for topic in &topics {
            info!("Deleting topic '{topic}'");
            let url = self.cluster_url(["topics", topic.as_str()]);
            self.send(HttpRequest::delete(url))
                .await
                .with_context(|| format!("While deleting topic '{topic}'"))?;
        }

        Ok(topics)
    }
}
