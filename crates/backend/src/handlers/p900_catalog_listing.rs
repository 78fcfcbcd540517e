use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::enums::catalog_kind::CatalogKind;
use contracts::projections::p900_catalog_listing::{
    CategoriesResponse, ItemDetailResponse, ListingRequest, ListingResponse, LocaleRequest,
};

use crate::projections::p900_catalog_listing::service;
use crate::shared::app_state::AppState;

fn parse_kind(kind: &str) -> Result<CatalogKind, StatusCode> {
    CatalogKind::from_code(kind).ok_or_else(|| {
        tracing::warn!("Unknown catalog kind requested: {}", kind);
        StatusCode::NOT_FOUND
    })
}

/// GET /api/catalog/:kind
pub async fn list(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(req): Query<ListingRequest>,
) -> Result<Json<ListingResponse>, StatusCode> {
    let kind = parse_kind(&kind)?;
    let locale = state.locale_for(req.locale.as_deref());
    let store = &state.store;
    let fallback = &*state.fallback_image;

    let response = match kind {
        CatalogKind::Posts => service::build_listing(&store.posts, &req, locale, fallback),
        CatalogKind::Tools => service::build_listing(&store.tools, &req, locale, fallback),
        CatalogKind::Creators => service::build_listing(&store.creators, &req, locale, fallback),
    };

    Ok(Json(response))
}

/// GET /api/catalog/:kind/categories
pub async fn categories(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(req): Query<LocaleRequest>,
) -> Result<Json<CategoriesResponse>, StatusCode> {
    let kind = parse_kind(&kind)?;
    let locale = state.locale_for(req.locale.as_deref());
    let store = &state.store;

    let categories = match kind {
        CatalogKind::Posts => service::build_categories(&store.posts, locale),
        CatalogKind::Tools => service::build_categories(&store.tools, locale),
        CatalogKind::Creators => service::build_categories(&store.creators, locale),
    };

    Ok(Json(CategoriesResponse {
        kind,
        locale,
        categories,
    }))
}

/// GET /api/catalog/:kind/items/:slug
pub async fn detail(
    State(state): State<AppState>,
    Path((kind, slug)): Path<(String, String)>,
    Query(req): Query<LocaleRequest>,
) -> Result<Json<ItemDetailResponse>, StatusCode> {
    let kind = parse_kind(&kind)?;
    let locale = state.locale_for(req.locale.as_deref());
    let store = &state.store;

    let detail = match kind {
        CatalogKind::Posts => service::build_detail(&store.posts, &slug, locale),
        CatalogKind::Tools => service::build_detail(&store.tools, &slug, locale),
        CatalogKind::Creators => service::build_detail(&store.creators, &slug, locale),
    };

    detail.map(Json).ok_or_else(|| {
        tracing::warn!("Item '{}' not found in '{}' catalog", slug, kind);
        StatusCode::NOT_FOUND
    })
}
