use crate::models::ConfigEntries;
use std::collections::BTreeMap;

/// Broker id to `host:port`.
pub type Brokers = BTreeMap<u32, String>;

pub type BrokerConfigs = BTreeMap<u32, ConfigEntries>;
