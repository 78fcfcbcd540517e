use serde::de::DeserializeOwned;
use std::collections::HashSet;
use thiserror::Error;

use super::catalog_item::{CatalogItem, CategoryValue};
use crate::enums::catalog_kind::CatalogKind;
use crate::shared::catalog::filter::ALL_CATEGORIES;

/// Ошибки загрузки статического каталога
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("invalid {kind} catalog data: {message}")]
    InvalidData { kind: CatalogKind, message: String },

    #[error("{kind} catalog contains an item with an empty slug")]
    EmptySlug { kind: CatalogKind },

    #[error("duplicate slug '{slug}' in {kind} catalog")]
    DuplicateSlug { kind: CatalogKind, slug: String },

    #[error("{kind} item '{slug}' uses the reserved category 'all'")]
    ReservedCategory { kind: CatalogKind, slug: String },

    #[error("{kind} item '{slug}': field '{field}' has neither 'ar' nor 'en' text")]
    MissingTranslation {
        kind: CatalogKind,
        slug: String,
        field: &'static str,
    },
}

/// Неизменяемая коллекция элементов одного типа.
///
/// Загружается один раз при старте, порядок элементов сохраняется.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    kind: CatalogKind,
    items: Vec<T>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Создать каталог с проверкой уникальности slug и наличия переводов
    pub fn new(kind: CatalogKind, items: Vec<T>) -> Result<Self, CatalogError> {
        validate(kind, &items)?;
        Ok(Self { kind, items })
    }

    /// Разобрать каталог из JSON-массива
    pub fn from_json(kind: CatalogKind, json: &str) -> Result<Self, CatalogError>
    where
        T: DeserializeOwned,
    {
        let items: Vec<T> = serde_json::from_str(json).map_err(|e| CatalogError::InvalidData {
            kind,
            message: e.to_string(),
        })?;
        Self::new(kind, items)
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&T> {
        self.items.iter().find(|item| item.slug() == slug)
    }
}

fn validate<T: CatalogItem>(kind: CatalogKind, items: &[T]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        let slug = item.slug();
        if slug.trim().is_empty() {
            return Err(CatalogError::EmptySlug { kind });
        }
        if !seen.insert(slug) {
            return Err(CatalogError::DuplicateSlug {
                kind,
                slug: slug.to_string(),
            });
        }

        let missing = |field: &'static str| CatalogError::MissingTranslation {
            kind,
            slug: slug.to_string(),
            field,
        };
        if !item.title().is_displayable() {
            return Err(missing("title"));
        }
        if !item.excerpt().is_displayable() {
            return Err(missing("excerpt"));
        }
        let category = item.category();
        if let CategoryValue::Localized(value) = category {
            if !value.is_displayable() {
                return Err(missing("category"));
            }
        }
        // "all" зарезервирован под кнопку всех категорий
        let reserved = |label: &str| label.trim().eq_ignore_ascii_case(ALL_CATEGORIES);
        if reserved(category.canonical()) || reserved(category.raw_label("ar")) {
            return Err(CatalogError::ReservedCategory {
                kind,
                slug: slug.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_creator::aggregate::Creator;
    use crate::shared::localized::{LocalizableString, Translations};

    fn creator(slug: &str) -> Creator {
        Creator {
            slug: slug.to_string(),
            name: LocalizableString::bilingual("سارة", "Sara"),
            bio: LocalizableString::ar_only("مصممة"),
            category: "Design".to_string(),
            image: None,
            platform: None,
        }
    }

    #[test]
    fn test_new_keeps_order_and_finds_by_slug() {
        let catalog =
            Catalog::new(CatalogKind::Creators, vec![creator("b"), creator("a")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].slug, "b");
        assert!(catalog.find_by_slug("a").is_some());
        assert!(catalog.find_by_slug("c").is_none());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = Catalog::new(CatalogKind::Creators, vec![creator("a"), creator("a")])
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateSlug {
                kind: CatalogKind::Creators,
                slug: "a".to_string()
            }
        );
    }

    #[test]
    fn test_empty_slug_rejected() {
        let err = Catalog::new(CatalogKind::Creators, vec![creator("  ")]).unwrap_err();
        assert_eq!(err, CatalogError::EmptySlug { kind: CatalogKind::Creators });
    }

    #[test]
    fn test_record_without_translations_rejected() {
        let mut item = creator("a");
        item.bio = LocalizableString::PerLocale(Translations::default());
        let err = Catalog::new(CatalogKind::Creators, vec![item]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingTranslation { field: "excerpt", .. }
        ));
    }

    #[test]
    fn test_reserved_all_category_rejected() {
        let mut item = creator("a");
        item.category = "All".to_string();
        let err = Catalog::new(CatalogKind::Creators, vec![item]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::ReservedCategory {
                kind: CatalogKind::Creators,
                slug: "a".to_string()
            }
        );
    }

    #[test]
    fn test_from_json_reports_invalid_data() {
        let err = Catalog::<Creator>::from_json(CatalogKind::Creators, "{not json").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidData { .. }));
    }
}
