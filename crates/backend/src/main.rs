pub mod handlers;
pub mod projections;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;

use tokio::net::TcpListener;

use shared::app_state::AppState;
use shared::config::{load_config, resolve_path};
use shared::data::catalog_store::CatalogStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = load_config()?;

    // Каталоги статичны: загружаем один раз и дальше только читаем
    let store = CatalogStore::load(&config.catalog)?;
    let state = AppState::new(store, &config);
    tracing::info!("Default locale: {}", state.default_locale);

    let static_dir = config.server.static_dir.as_deref().map(resolve_path);
    let app = routes::configure_routes(state, static_dir);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
