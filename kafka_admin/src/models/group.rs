use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsumerGroupDescription {
    pub group_id: String,
    pub is_simple_consumer_group: bool,
    pub partition_assignor: String,
    pub state: String,
    pub members: Vec<MemberDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDescription {
    pub member_id: String,
    pub client_id: String,
    pub host: String,
    pub group_instance_id: Option<String>,
    pub assignments: Vec<TopicPartitionAssignment>,
}

/// The proxy reports only topic and partition; the remaining fields are always `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicPartitionAssignment {
    pub topic: String,
    pub partition: u32,
    pub offset: Option<i64>,
    pub metadata: Option<String>,
    pub error: Option<String>,
}

/// `Names` keeps the order the proxy listed the groups in. `WithState` is keyed
/// by group id and iterates in id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GroupListing {
    Names(Vec<String>),
    WithState(BTreeMap<String, String>),
}

/// Keyed by group id, in id order.
pub type GroupDescriptions = BTreeMap<String, ConsumerGroupDescription>;

/// Group id to topic to partition to committed offset.
///
/// A group that is present was queried; a topic missing under it had no lag reported.
pub type GroupOffsets = BTreeMap<String, BTreeMap<String, BTreeMap<u32, i64>>>;
