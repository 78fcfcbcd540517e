//! Таблицы синонимов категорий: канонический ключ ↔ подписи на арабском и английском.
//!
//! Блог и каталог инструментов используют разные наборы подписей, поэтому
//! таблица своя для каждого типа каталога.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::enums::catalog_kind::CatalogKind;

/// Строка таблицы синонимов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAlias {
    pub canonical: &'static str,
    pub ar: &'static str,
    pub en: &'static str,
}

impl CategoryAlias {
    pub const fn new(canonical: &'static str, ar: &'static str, en: &'static str) -> Self {
        Self { canonical, ar, en }
    }
}

/// Двунаправленная таблица синонимов категорий
#[derive(Debug, Clone, Default)]
pub struct CategoryAliasTable {
    rows: Vec<CategoryAlias>,
    /// Нормализованная подпись -> индекс строки
    by_label: HashMap<String, usize>,
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

impl CategoryAliasTable {
    pub fn new(rows: impl IntoIterator<Item = CategoryAlias>) -> Self {
        let rows: Vec<CategoryAlias> = rows.into_iter().collect();
        let mut by_label = HashMap::new();

        for (idx, row) in rows.iter().enumerate() {
            for label in [row.canonical, row.en, row.ar] {
                // Первая строка с такой подписью побеждает
                by_label.entry(normalize_label(label)).or_insert(idx);
            }
        }

        Self { rows, by_label }
    }

    /// Пустая таблица: все категории сравниваются буквально
    pub fn empty() -> Self {
        Self::default()
    }

    /// Таблица для конкретного типа каталога
    pub fn for_kind(kind: CatalogKind) -> &'static CategoryAliasTable {
        match kind {
            CatalogKind::Posts => &*POST_CATEGORIES,
            CatalogKind::Tools => &*TOOL_CATEGORIES,
            CatalogKind::Creators => &*CREATOR_CATEGORIES,
        }
    }

    /// Канонический ключ по любой подписи (ключ, `ar` или `en`)
    pub fn to_canonical(&self, label: &str) -> Option<&'static str> {
        self.by_label
            .get(&normalize_label(label))
            .map(|&idx| self.rows[idx].canonical)
    }

    /// Подпись канонической категории для языка
    pub fn label_for(&self, canonical: &str, locale: &str) -> Option<&'static str> {
        let row = self.rows.iter().find(|row| row.canonical == canonical)?;
        Some(match locale {
            "ar" => row.ar,
            _ => row.en,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

static POST_CATEGORIES: Lazy<CategoryAliasTable> = Lazy::new(|| {
    CategoryAliasTable::new([
        CategoryAlias::new("Coding", "البرمجة", "Coding"),
        CategoryAlias::new("Design", "التصميم", "Design"),
        CategoryAlias::new("AI", "الذكاء الاصطناعي", "AI"),
        CategoryAlias::new("Marketing", "التسويق", "Marketing"),
        CategoryAlias::new("Productivity", "الإنتاجية", "Productivity"),
        CategoryAlias::new("Business", "ريادة الأعمال", "Business"),
    ])
});

static TOOL_CATEGORIES: Lazy<CategoryAliasTable> = Lazy::new(|| {
    CategoryAliasTable::new([
        CategoryAlias::new("AI Tools", "أدوات الذكاء الاصطناعي", "AI Tools"),
        CategoryAlias::new("Design", "أدوات التصميم", "Design"),
        CategoryAlias::new("Development", "أدوات التطوير", "Development"),
        CategoryAlias::new("Automation", "الأتمتة", "Automation"),
        CategoryAlias::new("Video", "صناعة الفيديو", "Video"),
    ])
});

static CREATOR_CATEGORIES: Lazy<CategoryAliasTable> = Lazy::new(|| {
    CategoryAliasTable::new([
        CategoryAlias::new("Tech", "التقنية", "Tech"),
        CategoryAlias::new("Education", "التعليم", "Education"),
        CategoryAlias::new("Business", "الأعمال", "Business"),
        CategoryAlias::new("Design", "التصميم", "Design"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_canonical_from_any_label() {
        let table = CategoryAliasTable::for_kind(CatalogKind::Posts);
        assert_eq!(table.to_canonical("البرمجة"), Some("Coding"));
        assert_eq!(table.to_canonical("Coding"), Some("Coding"));
        assert_eq!(table.to_canonical(" coding "), Some("Coding"));
        assert_eq!(table.to_canonical("Cooking"), None);
    }

    #[test]
    fn test_label_for_locale() {
        let table = CategoryAliasTable::for_kind(CatalogKind::Posts);
        assert_eq!(table.label_for("Design", "ar"), Some("التصميم"));
        assert_eq!(table.label_for("Design", "en"), Some("Design"));
        assert_eq!(table.label_for("Unknown", "ar"), None);
    }

    #[test]
    fn test_tables_differ_per_kind() {
        let posts = CategoryAliasTable::for_kind(CatalogKind::Posts);
        let tools = CategoryAliasTable::for_kind(CatalogKind::Tools);
        assert_eq!(posts.label_for("Design", "ar"), Some("التصميم"));
        assert_eq!(tools.label_for("Design", "ar"), Some("أدوات التصميم"));
        assert_eq!(posts.to_canonical("أدوات التصميم"), None);
    }

    #[test]
    fn test_empty_table() {
        let table = CategoryAliasTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.to_canonical("Coding"), None);
    }
}
