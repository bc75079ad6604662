use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use news_bff::config::Config;
use news_bff::routes::{create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let frontend_dir = if config.frontend_dir.is_dir() {
        Some(config.frontend_dir.as_path())
    } else {
        warn!(
            "Frontend directory {} not found, serving API only",
            config.frontend_dir.display()
        );
        None
    };

    let app = create_app(AppState::from_config(&config), frontend_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Starting BFF at http://{}", addr);
    info!(
        "Forwarding users to {} and news to {} via {}",
        config.users_manager_app_id, config.news_manager_app_id, config.dapr_endpoint
    );

    axum::serve(listener, app).await?;
    Ok(())
}
