// src/main.rs
use dotenvy::dotenv;
use finance_dashboard::{backend, config, store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::ServerConfig::from_env()?;
    let expenses = store::ExpenseStore::seeded();

    tracing::info!("Starting Backend Server...");
    backend::run_server(expenses, &config).await?;

    Ok(())
}
