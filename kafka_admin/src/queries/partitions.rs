use crate::admin::AdminClient;
use crate::models::rest::{KafkaPartitionOffsets, KafkaReplica};
use crate::models::{MinMaxOffset, PartitionPlacement, Partitions, Watermarks};
use crate::pattern::Patterns;
use crate::transport::{HttpRequest, HttpTransport, KAFKA_V2_CONTENT_TYPE};
use anyhow::Context;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, trace};

impl<T: HttpTransport> AdminClient<T> {
    /// Partition counts of the matching topics, or with `verbose` the replica
    /// placement of every partition (one extra call per partition).
    #[tracing::instrument(skip_all)]
    pub async fn list_partitions(
        &self,
        patterns: impl Into<Patterns>,
        verbose: bool,
    ) -> Result<Partitions, anyhow::Error> {
        let patterns: Patterns = patterns.into();
        let counts = self.partition_counts(&patterns).await?;
        if !verbose {
            return Ok(Partitions::Counts(counts));
        }

        let mut placements = BTreeMap::new();
        for (topic, partitions_count) in counts {
            let mut topic_placements = BTreeMap::new();
            for partition in 0..partitions_count {
                let url = self.cluster_url([
                    "topics",
                    topic.as_str(),
                    "partitions",
                    partition.to_string().as_str(),
                    "replicas",
                ]);
                let replicas = self
                    .fetch_data::<KafkaReplica>(HttpRequest::get(url))
                    .await
                    .with_context(|| {
                        format!("While fetching replicas of topic '{topic}' partition {partition}")
                    })?;
                trace!("Topic '{topic}' partition {partition}: {} replicas", replicas.len());

                topic_placements.insert(partition, PartitionPlacement::from_replicas(replicas));
            }
            placements.insert(topic, topic_placements);
        }

        Ok(Partitions::Placements(placements))
    }

    /// Low and high offsets of every partition of the matching topics.
    ///
    /// `timeout` has no effect: the REST proxy offers no per-request timeout,
    /// each call is bounded only by the transport.
    pub async fn get_watermarks(
        &self,
        patterns: impl Into<Patterns>,
        timeout: Option<Duration>,
    ) -> Result<Watermarks, anyhow::Error> {
        if let Some(timeout) = timeout {
            debug!("Ignoring watermarks timeout of {timeout:?}");
        }

        let patterns: Patterns = patterns.into();
        let counts = self.partition_counts(&patterns).await?;

        let mut watermarks = Watermarks::new();
        for (topic, partitions_count) in counts {
            let topic_watermarks = watermarks.entry(topic.clone()).or_default();
            for partition in 0..partitions_count {
                let url = self.proxy_url([
                    "topics",
                    topic.as_str(),
                    "partitions",
                    partition.to_string().as_str(),
                    "offsets",
                ]);
                let request = HttpRequest::get(url).with_content_type(KAFKA_V2_CONTENT_TYPE);
                let offsets = self
                    .fetch::<KafkaPartitionOffsets>(request)
                    .await
                    .with_context(|| {
                        format!(
                            "While fetching watermarks of topic '{topic}' partition {partition}"
                        )
                    })?;

                topic_watermarks.insert(
                    partition,
                    MinMaxOffset {
                        min_offset: offsets.beginning_offset,
                        max_offset: offsets.end_offset,
                    },
                );
            }
        }

        Ok(watermarks)
    }

    async fn partition_counts(
        &self,
        patterns: &Patterns,
    ) -> Result<BTreeMap<String, u32>, anyhow::Error> {
        let topics = self.fetch_topics().await?;

        Ok(topics
            .into_iter()
            .filter(|topic| patterns.matches(&topic.topic_name))
            .map(|topic| (topic.topic_name, topic.partitions_count))
            .collect())
    }
}
