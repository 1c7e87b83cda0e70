use axum::{routing::get, Router};

const HELLO: &str = "Hello World from Go\n";

pub(crate) fn router() -> Router {
    Router::new()
        .route("/", get(hello))
}

// GET /
async fn hello() -> &'static str {
    HELLO
}

#[cfg(test)]
mod test {
    use axum::http::header;
    use reqwest::StatusCode;
    use shared::testing::{self, TestServer};

    const USER_AGENT: &str = "Gateway.Hello/test";

    #[tokio::test]
    async fn root_says_hello() {
        let server = TestServer::start(super::router(), USER_AGENT).await;
        let resp = reqwest::get(server.url("/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/plain"));
        assert_eq!(resp.headers()[header::SERVER], USER_AGENT);
        assert_eq!(resp.text().await.unwrap(), "Hello World from Go\n");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let server = TestServer::start(super::router(), USER_AGENT).await;
        let resp = reqwest::get(server.url("/welcome")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let server = TestServer::start(super::router(), USER_AGENT).await;
        let resp = reqwest::Client::new()
            .post(server.url("/"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn root_via_function_url_event() {
        let app = shared::gateway::with_defaults(super::router(), USER_AGENT);
        let resp = testing::invoke(app, &testing::function_url_event("GET", "/")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(testing::body_bytes(resp).await, b"Hello World from Go\n");
    }
}
