mod serve;

use shared::{config, gateway};

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    shared::logger::init_logger()?;
    let build = shared::build_info!();
    let config = config::init(&build);
    shared::banner::print_banner(&build);

    let app = gateway::with_defaults(serve::router(), build.user_agent);
    if let Err(e) = gateway::listen_and_serve(&config.listen_addr, app).await {
        gateway::fatal(e);
    }
    Ok(())
}
