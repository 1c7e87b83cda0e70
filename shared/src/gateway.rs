//! Bridges a [`Router`] to either the AWS Lambda runtime or a plain TCP listener.

use std::{future::Future, net::SocketAddr};

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{banner, errors::GatewayError, graceful_shutdown};

const LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

/// Forms `<host>:<port>`. A missing port leaves the address ending in a bare `:`.
pub fn listen_addr(host: &str, port: Option<&str>) -> String {
    format!("{host}:{}", port.unwrap_or_default())
}

/// Resolves a listen address where an empty host means all interfaces.
pub fn resolve_listen_addr(addr: &str) -> Result<SocketAddr, GatewayError> {
    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| GatewayError::MissingPort(addr.to_string()))?;
    if port.is_empty() {
        return Err(GatewayError::MissingPort(addr.to_string()));
    }
    let addr_with_host = if host.is_empty() {
        format!("0.0.0.0:{port}")
    } else {
        addr.to_string()
    };
    addr_with_host
        .parse()
        .map_err(|source| GatewayError::BindAddr { addr: addr.to_string(), source })
}

pub fn is_running_on_lambda() -> bool {
    std::env::var_os(LAMBDA_RUNTIME_API).is_some()
}

/// Request logging and the `server` header around the given routes.
pub fn with_defaults(router: Router, user_agent: &'static str) -> Router {
    banner::set_server_header(router.layer(middleware::from_fn(crate::middleware::log)), user_agent)
}

/// Serves `app` until the process is told to stop.
///
/// Inside AWS Lambda the address is ignored and invocation events are
/// translated into requests by `lambda_http`. Everywhere else `addr` is
/// resolved and bound, and the server shuts down on SIGTERM/SIGINT.
pub async fn listen_and_serve(addr: &str, app: Router) -> Result<(), GatewayError> {
    if is_running_on_lambda() {
        info!("Running on AWS Lambda, ignoring listen address {addr:?}");
        return lambda_http::run(app).await.map_err(GatewayError::Lambda);
    }

    let addr = resolve_listen_addr(addr)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| GatewayError::Bind { addr, source })?;
    serve(listener, app, graceful_shutdown::wait_for_signal()).await
}

pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), GatewayError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().map_err(GatewayError::Serve)?;
    info!("Startup complete. Listening for requests on {local_addr}");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(GatewayError::Serve)
}

/// Logs the error and terminates the process.
pub fn fatal(err: GatewayError) -> ! {
    error!("{err}");
    std::process::exit(1)
}
