use std::sync::{mpsc, Arc};
use std::time::Duration;

use pretty_assertions::assert_eq;
use storefront_engine::{
    CatalogClient, CatalogProduct, ChannelEventSink, EngineEvent, EngineHandle, FailureKind,
    FetchSettings,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::from_settings(FetchSettings::with_base_url(server.uri())).unwrap()
}

async fn serve_json(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v1/products"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn lists_products_in_api_order() {
    let server = MockServer::start().await;
    serve_json(
        &server,
        r#"{"products":[
            {"id":5,"name":"Headset","price":89.0,"category":"Audio"},
            {"id":1,"name":"Mouse","price":49.99}
        ]}"#,
    )
    .await;

    let products = client_for(&server).list_products().await.unwrap();
    assert_eq!(
        products,
        vec![
            CatalogProduct {
                id: 5,
                name: "Headset".to_string(),
                price: 89.0,
                category: Some("Audio".to_string()),
                image_url: None,
            },
            CatalogProduct {
                id: 1,
                name: "Mouse".to_string(),
                price: 49.99,
                category: None,
                image_url: None,
            },
        ]
    );
}

#[tokio::test]
async fn missing_products_field_is_an_empty_list() {
    let server = MockServer::start().await;
    serve_json(&server, "{}").await;

    let products = client_for(&server).list_products().await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_malformed_payload_failure() {
    let server = MockServer::start().await;
    serve_json(&server, r#"{"products":[{"id":"x"}"#).await;

    let err = client_for(&server).list_products().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedPayload);
}

#[tokio::test]
async fn configured_query_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/products"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"products":[]}"#, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut settings = FetchSettings::with_base_url(server.uri());
    settings.query.limit = Some(2);
    let client = CatalogClient::from_settings(settings).unwrap();

    assert!(client.list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn engine_reports_each_request_through_the_sink() {
    let server = MockServer::start().await;
    serve_json(&server, r#"{"products":[{"id":1,"name":"Mouse","price":49.99}]}"#).await;

    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::new(
        FetchSettings::with_base_url(server.uri()),
        Arc::new(ChannelEventSink::new(tx)),
    )
    .unwrap();

    engine.fetch_products(1);
    engine.fetch_products(2);

    let events = tokio::task::spawn_blocking(move || {
        let first = rx.recv_timeout(Duration::from_secs(5)).expect("first event");
        let second = rx.recv_timeout(Duration::from_secs(5)).expect("second event");
        vec![first, second]
    })
    .await
    .unwrap();

    let mut ids: Vec<_> = events
        .iter()
        .map(|event| match event {
            EngineEvent::FeedFetched { request_id, result } => {
                assert_eq!(result.as_ref().unwrap().len(), 1);
                *request_id
            }
        })
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn engine_reports_http_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/products"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::new(
        FetchSettings::with_base_url(server.uri()),
        Arc::new(ChannelEventSink::new(tx)),
    )
    .unwrap();
    engine.fetch_products(9);

    let event = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
        .await
        .unwrap()
        .expect("event");

    let EngineEvent::FeedFetched { request_id, result } = event;
    assert_eq!(request_id, 9);
    assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(503));
}
