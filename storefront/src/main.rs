use storefront::{StorefrontState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv, config, logging
    let config = setup_environment()?;

    print_banner();

    tracing::info!(environment = %config.environment, "Storefront starting...");

    // 2. Restore stores
    let state = StorefrontState::initialize(&config)?;
    {
        let cart = state.cart.lock();
        let wishlist = state.wishlist.lock();
        tracing::info!(
            cart_lines = cart.len(),
            cart_items = cart.total_items(),
            cart_total = %cart.total_price(),
            wishlist_items = wishlist.len(),
            "Restored session"
        );
    }

    // 3. Drain notifications until Ctrl-C
    let mut rx = state.subscribe();
    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Ok(n) => tracing::debug!(kind = ?n.kind, title = %n.title, "Notification delivered"),
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Notification drain lagged");
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }

    tracing::info!("Storefront stopped");
    Ok(())
}
