use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use kafka_admin::models::{AclRequest, ConfigEntriesToSet, ANY};
use kafka_admin::transport::HttpTransport;
use kafka_admin::{AdminClient, Patterns};
use serde_json::Value;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "kafka_admin", about = "Administrative client for a Kafka REST proxy")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List ACLs
    Acls(AclArgs),
    /// Create an ACL
    CreateAcl(AclArgs),
    /// Delete the ACLs matching a filter
    DeleteAcl(AclArgs),
    /// List brokers by id pattern
    Brokers { patterns: Vec<String> },
    /// Show, and optionally alter, the cluster-wide broker config
    BrokerConfig {
        patterns: Vec<String>,
        #[arg(long = "set", value_parser = parse_key_value)]
        set: Vec<(String, String)>,
    },
    /// List consumer groups
    Groups {
        patterns: Vec<String>,
        #[arg(long = "state")]
        states: Vec<String>,
        #[arg(long)]
        with_state: bool,
    },
    /// Describe consumer groups with their members and assignments
    DescribeGroups {
        patterns: Vec<String>,
        #[arg(long = "state")]
        states: Vec<String>,
    },
    /// Committed offsets of consumer groups
    GroupOffsets {
        patterns: Vec<String>,
        #[arg(long = "state")]
        states: Vec<String>,
    },
    /// List topics
    Topics { patterns: Vec<String> },
    /// Show, and optionally alter, topic config
    TopicConfig {
        patterns: Vec<String>,
        #[arg(long = "set", value_parser = parse_key_value)]
        set: Vec<(String, String)>,
    },
    CreateTopic {
        name: String,
        #[arg(long, default_value_t = 1)]
        partitions: u32,
        #[arg(long = "set", value_parser = parse_key_value)]
        set: Vec<(String, String)>,
    },
    DeleteTopics {
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Partition counts, or replica placement with --verbose
    Partitions {
        patterns: Vec<String>,
        #[arg(long)]
        verbose: bool,
    },
    Watermarks {
        patterns: Vec<String>,
        /// Accepted for compatibility, has no effect
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

#[derive(Args, Debug)]
pub struct AclArgs {
    #[arg(long, default_value = ANY)]
    pub resource_type: String,
    #[arg(long)]
    pub resource_name: Option<String>,
    #[arg(long, default_value = ANY)]
    pub pattern_type: String,
    #[arg(long)]
    pub principal: Option<String>,
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long, default_value = ANY)]
    pub operation: String,
    #[arg(long, default_value = ANY)]
    pub permission: String,
}

impl From<AclArgs> for AclRequest {
    fn from(value: AclArgs) -> Self {
        AclRequest {
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

fn parse_key_value(value: &str) -> Result<(String, String), String> {
    let (key, value) = value
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{value}'"))?;
    Ok((key.to_owned(), value.to_owned()))
}

// No patterns on the command line means everything.
fn patterns(values: Vec<String>) -> Patterns {
    if values.is_empty() {
        Patterns::any()
    } else {
        values.into()
    }
}

fn config_to_set(values: Vec<(String, String)>) -> Option<ConfigEntriesToSet> {
    if values.is_empty() {
        None
    } else {
        Some(values.into_iter().collect())
    }
}

pub async fn run<T: HttpTransport>(
    command: Command,
    client: &AdminClient<T>,
) -> Result<Value, anyhow::Error> {
    let output = match command {
        Command::Acls(args) => {
            serde_json::to_value(client.list_acls(&AclRequest::from(args)).await?)
        }
        Command::CreateAcl(args) => {
            client.create_acl(&AclRequest::from(args)).await?;
            Ok(Value::Null)
        }
        Command::DeleteAcl(args) => {
            serde_json::to_value(client.delete_acl(&AclRequest::from(args)).await?)
        }
        Command::Brokers { patterns: values } => {
            serde_json::to_value(client.list_brokers(patterns(values)).await?)
        }
        Command::BrokerConfig {
            patterns: values,
            set,
        } => {
            let config = config_to_set(set);
            serde_json::to_value(
                client
                    .get_or_set_broker_config(patterns(values), config.as_ref())
                    .await?,
            )
        }
        Command::Groups {
            patterns: values,
            states,
            with_state,
        } => serde_json::to_value(
            client
                .list_groups(patterns(values), patterns(states), with_state)
                .await?,
        ),
        Command::DescribeGroups {
            patterns: values,
            states,
        } => serde_json::to_value(
            client
                .describe_groups(patterns(values), patterns(states))
                .await?,
        ),
        Command::GroupOffsets {
            patterns: values,
            states,
        } => serde_json::to_value(
            client
                .group_offsets(patterns(values), patterns(states), None)
                .await?,
        ),
        Command::Topics { patterns: values } => {
            serde_json::to_value(client.list_topics(patterns(values)).await?)
        }
        Command::TopicConfig {
            patterns: values,
            set,
        } => {
            let config = config_to_set(set);
            serde_json::to_value(
                client
                    .get_or_set_topic_config(patterns(values), config.as_ref())
                    .await?,
            )
        }
        Command::CreateTopic {
            name,
            partitions,
            set,
        } => {
            let config = config_to_set(set).unwrap_or_default();
            serde_json::to_value(client.create_topic(&name, partitions, &config).await?)
        }
        Command::DeleteTopics { patterns: values } => {
            serde_json::to_value(client.delete_topics(patterns(values)).await?)
        }
        Command::Partitions {
            patterns: values,
            verbose,
        } => serde_json::to_value(client.list_partitions(patterns(values), verbose).await?),
        Command::Watermarks {
            patterns: values,
            timeout_ms,
        } => serde_json::to_value(
            client
                .get_watermarks(patterns(values), timeout_ms.map(Duration::from_millis))
                .await?,
        ),
    };

    output.context("While serializing output")
}
