// Helpers to drive a router in process and read JSON responses.

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::movies::adapters::outbound::movie_repository::MovieRepository;
use crate::modules::movies::adapters::outbound::movie_repository_in_memory::InMemoryMovieRepository;
use crate::shell::state::AppState;

/// State plus a handle on the repository behind it, for seeding and asserting.
pub fn make_test_state() -> (AppState, Arc<InMemoryMovieRepository>) {
    let repository = Arc::new(InMemoryMovieRepository::new());
    let movies: Arc<dyn MovieRepository + Send + Sync> = repository.clone();
    (AppState::new(movies), repository)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
