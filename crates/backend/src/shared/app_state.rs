use std::sync::Arc;

use contracts::enums::locale::{resolve_locale, Locale, DEFAULT_LOCALE};

use crate::shared::config::Config;
use crate::shared::data::catalog_store::CatalogStore;

/// Общее состояние обработчиков: только чтение
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub default_locale: Locale,
    pub fallback_image: Arc<str>,
}

impl AppState {
    pub fn new(store: CatalogStore, config: &Config) -> Self {
        let default_locale = resolve_locale(
            Some(config.catalog.default_locale.as_str()),
            DEFAULT_LOCALE.code(),
        );

        Self {
            store: Arc::new(store),
            default_locale,
            fallback_image: Arc::from(config.catalog.fallback_image.as_str()),
        }
    }

    /// Язык запроса с откатом на язык по умолчанию
    pub fn locale_for(&self, requested: Option<&str>) -> Locale {
        resolve_locale(requested, self.default_locale.code())
    }
}
