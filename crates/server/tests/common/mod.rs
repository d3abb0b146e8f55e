#![allow(dead_code)]

use address::{AddressRecord, AddressRepository};
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use server::{ProviderState, ServerConfig};
use std::sync::Arc;
use tower::ServiceExt;

pub const STREET: &str = "Rua Professor Doutor Edmundo Juarez";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

/// Drive one request through a router without a socket.
pub async fn send(router: Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header("content-type", "application/json; charset=utf-8");
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .oneshot(builder.body(body).unwrap())
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(router: Router, uri: &str) -> TestResponse {
    send(router, Method::GET, uri, None).await
}

pub fn address(id: u64, cep: &str, street: &str, order: i64) -> AddressRecord {
    AddressRecord {
        id,
        cep: cep.to_string(),
        street: street.to_string(),
        complement: String::new(),
        neighborhood: "Jardim Residencial Iedda".into(),
        locality: "Araraquara".into(),
        state: "SP".into(),
        ibge: "3503208".into(),
        gia: "1818".into(),
        ddd: "16".into(),
        siafi: "6163".into(),
        street_order: order,
    }
}

/// Two available records on one street (orders 6 and 12) plus one without a cep.
pub fn scenario_repository() -> AddressRepository {
    let mut repo = AddressRepository::new();
    repo.insert(address(0, "14808-560", STREET, 6));
    repo.insert(address(1, "14808-562", STREET, 12));
    repo.insert(address(2, "", STREET, 6));
    repo
}

pub fn provider_state(repo: AddressRepository) -> Arc<ProviderState> {
    Arc::new(ProviderState::with_repository(ServerConfig::default(), repo))
}

/// Serve `router` on an ephemeral loopback port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
