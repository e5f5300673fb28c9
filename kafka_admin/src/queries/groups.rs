use crate::admin::AdminClient;
use crate::error::UnsupportedOperation;
use crate::models::rest::{
    KafkaConsumer, KafkaConsumerAssignment, KafkaConsumerGroup, KafkaConsumerLag,
};
use crate::models::{
    ConsumerGroupDescription, GroupDescriptions, GroupListing, GroupOffsets, MemberDescription,
};
use crate::pattern::Patterns;
use crate::transport::{HttpRequest, HttpTransport};
use anyhow::Context;
use tracing::{debug, trace};

impl From<KafkaConsumerGroup> for ConsumerGroupDescription {
    fn from(value: KafkaConsumerGroup) -> Self {
        ConsumerGroupDescription {
            group_id: value.consumer_group_id,
            is_simple_consumer_group: value.is_simple,
            partition_assignor: value.partition_assignor,
            state: value.state.to_lowercase(),
            members: Vec::new(),
        }
    }
}

impl<T: HttpTransport> AdminClient<T> {
    /// Fetches the groups `patterns` may refer to, without filtering them.
    ///
    /// A single literal group id is looked up directly instead of listing every
    /// group of the cluster. Members are not fetched.
    pub async fn resolve_groups(
        &self,
        patterns: &Patterns,
    ) -> Result<Vec<ConsumerGroupDescription>, anyhow::Error> {
        let groups = match patterns.single_literal() {
            Some(group_id) => {
                debug!("Looking up single group '{group_id}'");
                let url = self.cluster_url(["consumer-groups", group_id]);
                let group = self
                    .fetch::<KafkaConsumerGroup>(HttpRequest::get(url))
                    .await
                    .with_context(|| format!("While fetching group '{group_id}'"))?;
                vec![group]
            }
            None => self
                .fetch_data::<KafkaConsumerGroup>(HttpRequest::get(
                    self.cluster_url(["consumer-groups"]),
                ))
                .await
                .context("While listing groups")?,
        };

        Ok(groups.into_iter().map(ConsumerGroupDescription::from).collect())
    }

    pub async fn list_groups(
        &self,
        name_patterns: impl Into<Patterns>,
        state_patterns: impl Into<Patterns>,
        include_state: bool,
    ) -> Result<GroupListing, anyhow::Error> {
        let name_patterns: Patterns = name_patterns.into();
        let state_patterns: Patterns = state_patterns.into();
        let groups = self.filtered_groups(&name_patterns, &state_patterns).await?;

        let listing = if include_state {
            GroupListing::WithState(
                groups
                    .into_iter()
                    .map(|group| (group.group_id, group.state))
                    .collect(),
            )
        } else {
            GroupListing::Names(groups.into_iter().map(|group| group.group_id).collect())
        };

        Ok(listing)
    }

    /// Describes every matching group with its members and their assignments.
    ///
    /// Issues one call per group and one per member. The first failing call
    /// aborts the whole operation.
    #[tracing::instrument(skip_all)]
    pub async fn describe_groups(
        &self,
        name_patterns: impl Into<Patterns>,
        state_patterns: impl Into<Patterns>,
    ) -> Result<GroupDescriptions, anyhow::Error> {
        let name_patterns: Patterns = name_patterns.into();
        let state_patterns: Patterns = state_patterns.into();
        let groups = self.filtered_groups(&name_patterns, &state_patterns).await?;

        let mut descriptions = GroupDescriptions::new();
        for mut group in groups {
            group.members = self
                .fetch_members(&group.group_id)
                .await
                .with_context(|| format!("While describing group '{}'", group.group_id))?;
            descriptions.insert(group.group_id.clone(), group);
        }

        Ok(descriptions)
    }

    /// Committed offsets of every matching group, read from the group lags.
    ///
    /// Setting offsets has no REST proxy endpoint; passing `offsets` fails
    /// before any request is sent.
    pub async fn group_offsets(
        &self,
        name_patterns: impl Into<Patterns>,
        state_patterns: impl Into<Patterns>,
        offsets: Option<&GroupOffsets>,
    ) -> Result<GroupOffsets, anyhow::Error> {
        if offsets.is_some() {
            return Err(UnsupportedOperation::new("Setting consumer group offsets").into());
        }

        let name_patterns: Patterns = name_patterns.into();
        let state_patterns: Patterns = state_patterns.into();
        let groups = self.filtered_groups(&name_patterns, &state_patterns).await?;

        let mut group_offsets = GroupOffsets::new();
        for group in groups {
            let url = self.cluster_url(["consumer-groups", group.group_id.as_str(), "lags"]);
            let lags = self
                .fetch_data::<KafkaConsumerLag>(HttpRequest::get(url))
                .await
                .with_context(|| format!("While fetching lags of group '{}'", group.group_id))?;

            let topic_offsets = group_offsets.entry(group.group_id).or_default();
            for lag in lags {
                topic_offsets
                    .entry(lag.topic_name)
                    .or_default()
                    .insert(lag.partition_id, lag.current_offset);
            }
        }

        Ok(group_offsets)
    }

    async fn filtered_groups(
        &self,
        name_patterns: &Patterns,
        state_patterns: &Patterns,
    ) -> Result<Vec<ConsumerGroupDescription>, anyhow::Error> {
        let groups = self.resolve_groups(name_patterns).await?;

        Ok(groups
            .into_iter()
            .filter(|group| name_patterns.matches(&group.group_id))
            .filter(|group| state_patterns.matches(&group.state))
            .collect())
    }

    async fn fetch_members(&self, group_id: &str) -> Result<Vec<MemberDescription>, anyhow::Error> {
        let url = self.cluster_url(["consumer-groups", group_id, "consumers"]);
        let consumers = self
            .fetch_data::<KafkaConsumer>(HttpRequest::get(url))
            .await
            .context("While fetching group members")?;

        let mut members = Vec::with_capacity(consumers.len());
        for consumer in consumers {
            let url = self.cluster_url([
                "consumer-groups",
                group_id,
                "consumers",
                consumer.consumer_id.as_str(),
                "assignments",
            ]);
            let assignments = self
                .fetch_data::<KafkaConsumerAssignment>(HttpRequest::get(url))
                .await
                .with_context(|| {
                    format!("While fetching assignments of member '{}'", consumer.consumer_id)
                })?;
            trace!(
                "Member '{}' has {} assignments",
                consumer.consumer_id,
                assignments.len()
            );

            members.push(consumer.into_member(assignments.into_iter().map(Into::into).collect()));
        }

        Ok(members)
    }
}
