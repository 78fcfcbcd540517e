use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{CatalogItem, CategoryValue};
use crate::shared::localized::LocalizableString;

/// Статья блога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: LocalizableString,
    pub excerpt: LocalizableString,
    /// Канонический ключ категории ("Coding", "Design", ...)
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogItem for Post {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &LocalizableString {
        &self.title
    }

    fn excerpt(&self) -> &LocalizableString {
        &self.excerpt
    }

    fn category(&self) -> CategoryValue<'_> {
        CategoryValue::Canonical(&self.category)
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}
