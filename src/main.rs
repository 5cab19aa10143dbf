//! Demo walk-through of the dashboard against the configured API.

use resource_dashboard::config::DashboardConfig;
use resource_dashboard::lifecycle::Dashboard;
use resource_dashboard::model::NewProduct;
use resource_dashboard::router::Navigation;
use store_framework::tracing::setup_tracing;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = DashboardConfig::from_env().map_err(|e| e.to_string())?;
    let dashboard = Dashboard::new(&config).map_err(|e| e.to_string())?;

    // Anonymous visitors are sent to the login page
    if let Navigation::Redirect { to } = dashboard.router.navigate("/products") {
        info!(to, "Not logged in, redirected");
    }

    dashboard
        .session
        .login("alice", "wonderland")
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("catalogue");
    async {
        match dashboard.router.navigate("/products") {
            Navigation::Enter(route) => info!(view = ?route.view, "Entered"),
            other => warn!(?other, "Unexpected navigation"),
        }

        let products = dashboard
            .products
            .fetch_products()
            .await
            .map_err(|e| e.to_string())?;
        match products.error() {
            Some(error) => warn!(error, "Could not load products"),
            None => info!(count = products.count(), "Products loaded"),
        }

        let new_product = NewProduct::new("Desk Lamp", 39.5)
            .description("Adjustable arm, warm white LED")
            .image("https://i.pravatar.cc")
            .category("electronic");
        let products = dashboard
            .products
            .add_product(new_product)
            .await
            .map_err(|e| e.to_string())?;
        if let Some(added) = products.items().first() {
            info!(id = %added.id, title = %added.title, "Product added");

            let products = dashboard
                .products
                .remove_product(added.id)
                .await
                .map_err(|e| e.to_string())?;
            info!(count = products.count(), error = ?products.error(), "Product removed");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let users = dashboard
        .users
        .fetch_users()
        .await
        .map_err(|e| e.to_string())?;
    for user in users.items().iter().take(3) {
        info!(id = %user.id, name = %user.display_name(), "User");
    }

    info!(summary = ?dashboard.summary(), "Dashboard ready");

    dashboard.shutdown().await.map_err(|e| e.to_string())?;
    info!("Application completed successfully");
    Ok(())
}
