//! Helpers for exercising routers in tests, both over TCP and as Lambda invocations.

use axum::{body::Body, response::Response, Router};
use tokio::{net::TcpListener, sync::oneshot};
use tower::ServiceExt;

use crate::gateway;

/// A router served on an ephemeral local port until dropped.
pub struct TestServer {
    pub base: String,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    /// Serves `router` with the default middleware stack on `127.0.0.1:0`.
    pub async fn start(router: Router, user_agent: &'static str) -> TestServer {
        let app = gateway::with_defaults(router, user_agent);
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
        let base = format!("http://{}", listener.local_addr().expect("local address of test listener"));
        let (shutdown, rx) = oneshot::channel::<()>();
        tokio::spawn(gateway::serve(listener, app, async { let _ = rx.await; }));
        TestServer { base, _shutdown: shutdown }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

/// A Lambda Function URL invocation event (payload format 2.0).
pub fn function_url_event(method: &str, path: &str) -> String {
    serde_json::json!({
        "version": "2.0",
        "routeKey": "$default",
        "rawPath": path,
        "rawQueryString": "",
        "headers": {
            "accept": "*/*",
            "host": "abcdefghij.lambda-url.eu-central-1.on.aws",
            "user-agent": "curl/8.4.0",
            "x-amzn-trace-id": "Root=1-65a1b2c3-0123456789abcdef01234567",
            "x-forwarded-for": "198.51.100.7",
            "x-forwarded-port": "443",
            "x-forwarded-proto": "https"
        },
        "requestContext": {
            "accountId": "anonymous",
            "apiId": "abcdefghij",
            "domainName": "abcdefghij.lambda-url.eu-central-1.on.aws",
            "domainPrefix": "abcdefghij",
            "http": {
                "method": method,
                "path": path,
                "protocol": "HTTP/1.1",
                "sourceIp": "198.51.100.7",
                "userAgent": "curl/8.4.0"
            },
            "requestId": "6f3a1b2c-0d4e-4f5a-8b6c-7d8e9f0a1b2c",
            "routeKey": "$default",
            "stage": "$default",
            "time": "19/Oct/2026:12:00:00 +0000",
            "timeEpoch": 1792411200000u64
        },
        "isBase64Encoded": false
    })
    .to_string()
}

/// Decodes `event` the way the Lambda runtime does and hands it to `app`.
pub async fn invoke(app: Router, event: &str) -> Response {
    let request = lambda_http::request::from_str(event).expect("valid invocation event");
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    let body: Body = response.into_body();
    axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("readable response body")
        .to_vec()
}
