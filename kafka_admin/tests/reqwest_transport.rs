use kafka_admin::models::AclRequest;
use kafka_admin::{AdminClient, ConnectionSettings, TransportError};
use mockito::Matcher;
use std::time::Duration;

fn settings(url: String) -> ConnectionSettings {
    ConnectionSettings {
        retries: 3,
        retry_backoff: Duration::ZERO,
        ..ConnectionSettings::new(url, "c1")
    }
}

#[tokio::test]
async fn sends_basic_auth_and_decodes_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/clusters/c1/brokers")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"kind":"KafkaBrokerList","data":[{"broker_id":1,"host":"b1","port":9092}]}"#)
        .create_async()
        .await;
    let client =
        AdminClient::create(settings(server.url()).with_credentials("user", "pass")).unwrap();

    let brokers = client.list_brokers(None::<&str>).await.unwrap();

    mock.assert_async().await;
    assert_eq!(brokers.get(&1).map(String::as_str), Some("b1:9092"));
}

#[tokio::test]
async fn acl_filter_is_url_encoded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/clusters/c1/acls")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("resource_type".into(), "any".into()),
            Matcher::UrlEncoded("principal".into(), "User:alice".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;
    let client = AdminClient::create(settings(server.url())).unwrap();
    let filter = AclRequest {
        principal: Some("User:alice".to_owned()),
        ..Default::default()
    };

    let acls = client.list_acls(&filter).await.unwrap();

    mock.assert_async().await;
    assert!(acls.is_empty());
}

#[tokio::test]
async fn empty_response_body_is_accepted() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v3/clusters/c1/acls")
        .with_status(201)
        .create_async()
        .await;
    let client = AdminClient::create(settings(server.url())).unwrap();

    client.create_acl(&AclRequest::default()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn fails_with_transport_error_after_every_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/clusters/c1/topics")
        .with_status(503)
        .with_body("unavailable")
        .expect(3)
        .create_async()
        .await;
    let client = AdminClient::create(settings(server.url())).unwrap();

    let error = client.list_topics(None::<&str>).await.unwrap_err();

    mock.assert_async().await;
    let transport_error = error.downcast_ref::<TransportError>().unwrap();
    assert_eq!(transport_error.status, Some(503));
    assert_eq!(transport_error.body, "unavailable");
}

#[tokio::test]
async fn zero_retries_still_sends_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v3/clusters/c1/topics/orders")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;
    let topics = server
        .mock("GET", "/v3/clusters/c1/topics")
        .with_status(200)
        .with_body(r#"{"data":[{"topic_name":"orders","partitions_count":1}]}"#)
        .create_async()
        .await;
    let settings = ConnectionSettings {
        retries: 0,
        ..settings(server.url())
    };
    let client = AdminClient::create(settings).unwrap();

    let error = client.delete_topics("orders").await.unwrap_err();

    topics.assert_async().await;
    mock.assert_async().await;
    assert!(error.downcast_ref::<TransportError>().is_some());
}
