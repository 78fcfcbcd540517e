use axum::{extract::State, Json};
use contracts::enums::locale::Locale;
use contracts::projections::p900_catalog_listing::LocaleInfoDto;

use crate::shared::app_state::AppState;

/// GET /api/locales
pub async fn list_locales(State(state): State<AppState>) -> Json<Vec<LocaleInfoDto>> {
    let locales = Locale::all()
        .into_iter()
        .map(|locale| LocaleInfoDto::from_locale(locale, state.default_locale))
        .collect();
    Json(locales)
}
