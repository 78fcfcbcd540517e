use serde::{Deserialize, Serialize};

use crate::domain::common::{CatalogItem, CategoryValue};
use crate::shared::localized::LocalizableString;

/// Автор контента
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub slug: String,
    pub name: LocalizableString,
    pub bio: LocalizableString,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Основная площадка автора (YouTube, X, ...)
    #[serde(default)]
    pub platform: Option<String>,
}

impl CatalogItem for Creator {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &LocalizableString {
        &self.name
    }

    fn excerpt(&self) -> &LocalizableString {
        &self.bio
    }

    fn category(&self) -> CategoryValue<'_> {
        CategoryValue::Canonical(&self.category)
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
