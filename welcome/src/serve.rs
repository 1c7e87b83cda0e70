use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

const GREETING: &str = "Hello World from Go";
const WELCOME_TEXT: &str = "Welcome to gin lambda server.";

#[derive(Serialize)]
struct Welcome {
    text: &'static str,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/welcome", get(welcome_handler))
}

// GET /
async fn root_handler() -> (StatusCode, Json<Welcome>) {
    (StatusCode::OK, Json(Welcome { text: WELCOME_TEXT }))
}

// GET /welcome
async fn welcome_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, GREETING)
}
