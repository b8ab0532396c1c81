#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use survey_portfolio::{config::ServerConfig, logging, server};

    logging::init_server_logger();
    server::run(ServerConfig::from_env()).await?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    survey_portfolio::logging::init_browser_logger();
    survey_portfolio::frontend::run();
}
