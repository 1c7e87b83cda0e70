use std::net::{AddrParseError, SocketAddr};

use tracing::dispatcher::SetGlobalDefaultError;

#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("No port in listen address {0:?}. Please set the PORT environment variable.")]
    MissingPort(String),
    #[error("Invalid bind address supplied ({addr}): {source}")]
    BindAddr {
        addr: String,
        source: AddrParseError,
    },
    #[error("Unable to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Error serving HTTP requests: {0}")]
    Serve(std::io::Error),
    #[error("Lambda runtime terminated: {0}")]
    Lambda(lambda_http::Error),
    #[error("Unable to initialize logging: {0}")]
    Logger(#[from] SetGlobalDefaultError),
}
