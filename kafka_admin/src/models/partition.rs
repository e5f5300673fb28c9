use crate::models::rest::KafkaReplica;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartitionPlacement {
    pub leader: Option<u32>,
    pub replicas: Vec<u32>,
    pub in_sync_replicas: Vec<u32>,
}

impl PartitionPlacement {
    pub(crate) fn from_replicas(replicas: Vec<KafkaReplica>) -> Self {
        let mut placement = Self::default();
        for replica in replicas {
            if replica.is_leader {
                placement.leader = Some(replica.broker_id);
            }
            placement.replicas.push(replica.broker_id);
            if replica.is_in_sync {
                placement.in_sync_replicas.push(replica.broker_id);
            }
        }
        placement
    }
}

/// Both variants are keyed by topic name and iterate in name order, not in
/// the order of the topic catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Partitions {
    Counts(BTreeMap<String, u32>),
    Placements(BTreeMap<String, BTreeMap<u32, PartitionPlacement>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinMaxOffset {
    pub min_offset: i64,
    pub max_offset: i64,
}

impl MinMaxOffset {
    pub fn messages_count(&self) -> i64 {
        self.max_offset.max(0) - self.min_offset.max(0)
    }
}

/// Topic name, then partition, in ascending order.
pub type Watermarks = BTreeMap<String, BTreeMap<u32, MinMaxOffset>>;
