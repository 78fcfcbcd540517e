use axum::{middleware, routing::get, Router};
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::shared::app_state::AppState;
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
///
/// `static_dir`: каталог с картинками карточек, отдаётся как fallback.
pub fn configure_routes(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT]);

    let mut router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/locales", get(handlers::system::list_locales))
        // ========================================
        // CATALOG LISTINGS
        // ========================================
        .route(
            "/api/catalog/:kind",
            get(handlers::p900_catalog_listing::list),
        )
        .route(
            "/api/catalog/:kind/categories",
            get(handlers::p900_catalog_listing::categories),
        )
        .route(
            "/api/catalog/:kind/items/:slug",
            get(handlers::p900_catalog_listing::detail),
        );

    if let Some(dir) = static_dir {
        tracing::info!("Serving static files from: {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .with_state(state)
        .layer(middleware::from_fn(system::middleware::request_logger::request_logger))
        .layer(cors)
}
