use serde::{Deserialize, Serialize};

use crate::domain::common::{CatalogItem, CategoryValue};
use crate::shared::localized::LocalizableString;

/// Инструмент из каталога инструментов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub slug: String,
    pub name: LocalizableString,
    pub description: LocalizableString,
    /// Категория хранится с переводами, канонический ключ берётся из `en`
    pub category: LocalizableString,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Модель оплаты ("Free", {"ar": "مجاني", ...})
    #[serde(default)]
    pub pricing: Option<LocalizableString>,
}

impl CatalogItem for Tool {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &LocalizableString {
        &self.name
    }

    fn excerpt(&self) -> &LocalizableString {
        &self.description
    }

    fn category(&self) -> CategoryValue<'_> {
        CategoryValue::Localized(&self.category)
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
