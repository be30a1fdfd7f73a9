use go_marketplace_cart::modules::cart::core::cart_item::total_quantity;
use go_marketplace_cart::shell::bootstrap;
use go_marketplace_cart::shell::config::CartConfig;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = CartConfig::from_env()?;
    let (provider, outcome) = bootstrap(&config).await;
    let cart = provider.context().use_cart()?;
    let items = cart.items();
    tracing::info!(
        ?outcome,
        lines = items.len(),
        units = total_quantity(&items),
        "cart ready, press Ctrl-C to stop"
    );

    tokio::signal::ctrl_c().await?;
    drop(cart);
    provider.unmount().await;
    Ok(())
}
