use mock_data_server::{config::Config, logging, run_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logger();
    let config = Config::from_env()?;
    run_app(config).await
}
