#![allow(dead_code)]

use kafka_admin::transport::{HttpMethod, HttpRequest, HttpTransport};
use kafka_admin::{AdminClient, ConnectionSettings, TransportError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

pub const PROXY_URL: &str = "http://rest-proxy.test:8082";
pub const CLUSTER_ID: &str = "lkc-test";

pub fn cluster_url(path: &str) -> String {
    format!("{PROXY_URL}/v3/clusters/{CLUSTER_ID}{path}")
}

pub fn proxy_url(path: &str) -> String {
    format!("{PROXY_URL}{path}")
}

/// Answers requests from a fixed route table and records every request it receives.
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<(HttpMethod, String), Result<Value, u16>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, method: HttpMethod, url: impl Into<String>, response: Value) -> Self {
        self.routes.insert((method, url.into()), Ok(response));
        self
    }

    pub fn on_get(self, url: impl Into<String>, response: Value) -> Self {
        self.on(HttpMethod::Get, url, response)
    }

    pub fn fail(mut self, method: HttpMethod, url: impl Into<String>, status: u16) -> Self {
        self.routes.insert((method, url.into()), Err(status));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<(HttpMethod, String)> {
        self.requests()
            .into_iter()
            .map(|request| (request.method, request.url))
            .collect()
    }

    pub fn count(&self, method: HttpMethod, url: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.method == method && request.url == url)
            .count()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<Value, anyhow::Error> {
        self.requests.lock().unwrap().push(request.clone());

        let route = self
            .routes
            .get(&(request.method, request.url.clone()))
            .cloned();

        let status = match route {
            Some(Ok(response)) => return Ok(response),
            Some(Err(status)) => status,
            None => 404,
        };

        Err(TransportError {
            method: request.method,
            url: request.url,
            status: Some(status),
            body: "mocked failure".to_owned(),
        }
        .into())
    }
}

pub fn client(transport: MockTransport) -> AdminClient<MockTransport> {
    AdminClient::with_transport(ConnectionSettings::new(PROXY_URL, CLUSTER_ID), transport)
        .expect("valid settings")
}

pub fn data(items: Vec<Value>) -> Value {
    json!({ "kind": "KafkaList", "metadata": {}, "data": items })
}

pub fn topic(name: &str, partitions_count: u32) -> Value {
    json!({
        "kind": "KafkaTopic",
        "cluster_id": CLUSTER_ID,
        "topic_name": name,
        "is_internal": false,
        "replication_factor": 3,
        "partitions_count": partitions_count,
    })
}

pub fn group(id: &str, state: &str) -> Value {
    json!({
        "kind": "KafkaConsumerGroup",
        "cluster_id": CLUSTER_ID,
        "consumer_group_id": id,
        "is_simple": false,
        "partition_assignor": "range",
        "state": state,
    })
}

pub fn config(name: &str, value: Option<&str>) -> Value {
    json!({ "kind": "KafkaTopicConfig", "name": name, "value": value, "is_default": false })
}

pub fn transport_status(error: &anyhow::Error) -> Option<u16> {
    error
        .downcast_ref::<TransportError>()
        .and_then(|error| error.status)
}
