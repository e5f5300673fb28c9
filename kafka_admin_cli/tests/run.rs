use clap::Parser;
use kafka_admin::transport::{HttpMethod, HttpRequest, HttpTransport};
use kafka_admin::{AdminClient, ConnectionSettings, TransportError, UnsupportedOperation};
use kafka_admin_cli::cli::{run, Cli};
use serde_json::{json, Value};
use std::sync::Mutex;

const CLUSTER_URL: &str = "http://proxy.test/v3/clusters/c1";

#[derive(Default)]
struct CannedTransport {
    requests: Mutex<Vec<HttpRequest>>,
}

impl HttpTransport for CannedTransport {
    async fn send(&self, request: HttpRequest) -> Result<Value, anyhow::Error> {
        self.requests.lock().unwrap().push(request.clone());

        let response = match (request.method, request.url.strip_prefix(CLUSTER_URL)) {
            (HttpMethod::Get, Some("/brokers")) => json!({ "data": [
                { "broker_id": 1, "host": "b1", "port": 9092 },
                { "broker_id": 2, "host": "b2", "port": 9092 },
            ]}),
            (HttpMethod::Get, Some("/topics")) => json!({ "data": [
                { "topic_name": "orders", "partitions_count": 2 },
                { "topic_name": "payments", "partitions_count": 1 },
            ]}),
            (HttpMethod::Post, Some("/topics")) => json!({}),
            _ => {
                return Err(TransportError {
                    method: request.method,
                    url: request.url.clone(),
                    status: Some(404),
                    body: String::new(),
                }
                .into())
            }
        };

        Ok(response)
    }
}

fn client() -> AdminClient<CannedTransport> {
    AdminClient::with_transport(
        ConnectionSettings::new("http://proxy.test", "c1"),
        CannedTransport::default(),
    )
    .unwrap()
}

async fn run_args(
    client: &AdminClient<CannedTransport>,
    args: &[&str],
) -> Result<Value, anyhow::Error> {
    let cli = Cli::try_parse_from(std::iter::once("kafka_admin").chain(args.iter().copied()))?;
    run(cli.command, client).await
}

#[tokio::test]
async fn brokers_are_printed_by_id() {
    let client = client();

    let output = run_args(&client, &["brokers", "2"]).await.unwrap();

    assert_eq!(output, json!({ "2": "b2:9092" }));
}

#[tokio::test]
async fn partitions_without_patterns_cover_every_topic() {
    let client = client();

    let output = run_args(&client, &["partitions"]).await.unwrap();

    assert_eq!(output, json!({ "orders": 2, "payments": 1 }));
}

#[tokio::test]
async fn create_topic_passes_config_pairs() {
    let client = client();

    let output = run_args(
        &client,
        &["create-topic", "events", "--partitions", "6", "--set", "cleanup.policy=compact"],
    )
    .await
    .unwrap();

    assert_eq!(output, json!("events"));
    let requests = client.transport().requests.lock().unwrap().clone();
    let body = requests[0].body.clone().unwrap();
    assert_eq!(body["partitions_count"], 6);
    assert_eq!(body["configs"][0], json!({ "name": "cleanup.policy", "value": "compact" }));
    assert_eq!(body["configs"][1]["name"], "retention.ms");
}

#[tokio::test]
async fn transport_errors_reach_the_caller() {
    let client = client();

    let error = run_args(&client, &["groups", "orders-app"]).await.unwrap_err();

    assert!(error.downcast_ref::<TransportError>().is_some());
    assert!(error.downcast_ref::<UnsupportedOperation>().is_none());
}
