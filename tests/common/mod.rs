//! Common test utilities

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use serde_json::Value;

use finapi::api;
use finapi::store::AccountStore;

/// Build the application over a fresh, empty store.
pub fn test_app() -> Router {
    api::create_router().with_state(AccountStore::new())
}

/// GET request, with the cpf header when given.
pub fn get(uri: &str, cpf: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cpf) = cpf {
        builder = builder.header("cpf", cpf);
    }
    builder.body(Body::empty()).unwrap()
}

/// DELETE request, with the cpf header when given.
pub fn delete(uri: &str, cpf: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(cpf) = cpf {
        builder = builder.header("cpf", cpf);
    }
    builder.body(Body::empty()).unwrap()
}

/// JSON-bodied request, with the cpf header when given.
pub fn json_request(method: &str, uri: &str, cpf: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(cpf) = cpf {
        builder = builder.header("cpf", cpf);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body raw, for empty-body asserts.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
