pub mod banner;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod graceful_shutdown;
pub mod logger;
pub mod middleware;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
