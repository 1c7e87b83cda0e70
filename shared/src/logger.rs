use tracing::{debug, Level};

use crate::errors::GatewayError;

pub fn init_logger() -> Result<(), GatewayError> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::DEBUG);

    let env_filter = match std::env::var("RUST_LOG") {
        Ok(env) if ! env.is_empty() => {
            env
        },
        _ => default_filter().to_string()
    };

    let subscriber = subscriber
        .with_env_filter(env_filter.clone())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("Logging initialized with env_filter {env_filter}.");
    Ok(())
}

fn default_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "hyper=warn,lambda_runtime=info,info"
    } else {
        "hyper=warn,lambda_runtime=info,debug"
    }
}
