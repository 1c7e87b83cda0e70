use std::net::{IpAddr, SocketAddr};

use axum::{extract::{ConnectInfo, Request}, middleware::Next, response::Response};
use http::header::HeaderName;
use tracing::{info, warn};

const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

pub async fn log(req: Request, next: Next) -> Response {
    let ip = get_ip(&req).map_or_else(|| "-".to_string(), |ip| ip.to_string());
    let mut line = format!("({}) <= {} {}", ip, req.method(), req.uri());
    let resp = next.run(req).await;
    #[allow(clippy::format_push_string)] // see https://github.com/rust-lang/rust-clippy/issues/9077
    line.push_str(&format!(" || => {}", resp.status()));
    if resp.status().is_success() {
        info!("{}", line);
    } else {
        warn!("{}", line);
    }
    resp
}

// Requests arriving through Lambda carry no peer socket.
fn get_ip<B>(req: &http::Request<B>) -> Option<IpAddr> {
    req.headers().get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse().ok())
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip())
        })
}
