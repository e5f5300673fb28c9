use serde_json::{json, Value};
use std::collections::BTreeMap;

pub const RETENTION_MS_KEY: &str = "retention.ms";

/// Seven days, the broker default for `retention.ms`.
pub const DEFAULT_RETENTION_MS: i64 = 604_800_000;

/// Configuration as read back from the proxy. Sensitive values come back as `None`.
pub type ConfigEntries = BTreeMap<String, Option<String>>;

pub type ConfigEntriesToSet = BTreeMap<String, String>;

pub type TopicConfigs = BTreeMap<String, ConfigEntries>;

pub(crate) fn config_entries_to_data(config: &ConfigEntriesToSet) -> Vec<Value> {
    config
        .iter()
        .map(|(name, value)| json!({ "name": name, "value": value }))
        .collect()
}
