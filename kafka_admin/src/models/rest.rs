//! Response bodies of the REST proxy, decoded at the transport boundary and
//! converted into the public records right away. Unknown fields (`kind`,
//! `metadata`, `related`, ...) are ignored.

use crate::models::{AclEntry, MemberDescription, TopicPartitionAssignment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct DataList<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KafkaAcl {
    pub resource_type: String,
    pub resource_name: String,
    pub pattern_type: String,
    pub principal: String,
    pub host: String,
    pub operation: String,
    pub permission: String,
}

impl From<KafkaAcl> for AclEntry {
    fn from(value: KafkaAcl) -> Self {
        AclEntry {
            resource_type: value.resource_type,
            resource_name: value.resource_name,
            pattern_type: value.pattern_type,
            principal: value.principal,
            host: value.host,
            operation: value.operation,
            permission: value.permission,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct KafkaBroker {
    pub broker_id: u32,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KafkaConfig {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KafkaConsumerGroup {
    pub consumer_group_id: String,
    pub is_simple: bool,
    pub partition_assignor: String,
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KafkaConsumer {
    pub cluster_id: String,
    pub consumer_id: String,
    pub client_id: String,
    #[serde(default)]
    pub instance_id: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
}

impl KafkaConsumer {
    // Older proxies do not report the member host; the cluster id stands in for it.
    pub fn into_member(self, assignments: Vec<TopicPartitionAssignment>) -> MemberDescription {
        MemberDescription {
            member_id: self.consumer_id,
            client_id: self.client_id,
            host: self.host.unwrap_or(self.cluster_id),
            group_instance_id: self.instance_id,
            assignments,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct KafkaConsumerAssignment {
    pub topic_name: String,
    pub partition_id: u32,
}

impl From<KafkaConsumerAssignment> for TopicPartitionAssignment {
    fn from(value: KafkaConsumerAssignment) -> Self {
        TopicPartitionAssignment {
            topic: value.topic_name,
            partition: value.partition_id,
            offset: None,
            metadata: None,
            error: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct KafkaConsumerLag {
    pub topic_name: String,
    pub partition_id: u32,
    pub current_offset: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KafkaTopic {
    pub topic_name: String,
    pub partitions_count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KafkaReplica {
    pub broker_id: u32,
    pub is_leader: bool,
    pub is_in_sync: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KafkaPartitionOffsets {
    pub beginning_offset: i64,
    pub end_offset: i64,
}
