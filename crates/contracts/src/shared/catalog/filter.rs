//! Поиск и фильтр по категории для всех списков каталога (блог, инструменты, авторы).

use serde::{Deserialize, Serialize};

use super::aliases::CategoryAliasTable;
use crate::domain::common::CatalogItem;

/// Значение категории, означающее "все категории"
pub const ALL_CATEGORIES: &str = "all";

/// Выбрана ли категория "все" (пустое значение тоже считается "все")
pub fn is_all_categories(category: &str) -> bool {
    let category = category.trim();
    category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORIES)
}

/// Проверяет, содержит ли заголовок или описание элемента поисковый запрос.
///
/// `query_lower` уже приведён к нижнему регистру и обрезан.
fn matches_query<T: CatalogItem>(item: &T, query_lower: &str, locale: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }

    item.title().get(locale).to_lowercase().contains(query_lower)
        || item.excerpt().get(locale).to_lowercase().contains(query_lower)
}

/// Проверяет, относится ли элемент к выбранной категории.
///
/// Обе стороны переводятся в канонический ключ через таблицу синонимов:
/// и выбранная подпись, и категория, сохранённая в элементе. Если подписи в
/// таблице нет, она сравнивается с категорией элемента буквально.
pub fn matches_category<T: CatalogItem>(
    item: &T,
    category: &str,
    aliases: &CategoryAliasTable,
) -> bool {
    if is_all_categories(category) {
        return true;
    }

    let category = category.trim();
    let value = item.category();
    match aliases.to_canonical(category) {
        Some(canonical) => value.canonical_in(aliases) == canonical,
        None => value.canonical_in(aliases) == category || value.matches_literal(category),
    }
}

/// Фильтрует список по запросу и категории.
///
/// Порядок исходной коллекции сохраняется. Пустой запрос и [`ALL_CATEGORIES`]
/// пропускают все элементы.
pub fn filter<'a, T: CatalogItem>(
    items: &'a [T],
    query: &str,
    category: &str,
    locale: &str,
    aliases: &CategoryAliasTable,
) -> Vec<&'a T> {
    let query_lower = query.trim().to_lowercase();

    items
        .iter()
        .filter(|item| matches_query(*item, &query_lower, locale))
        .filter(|item| matches_category(*item, category, aliases))
        .collect()
}

/// Оставляет элементы с указанным тегом (без учёта регистра)
pub fn filter_by_tag<'a, T, I>(items: I, tag: &str) -> Vec<&'a T>
where
    T: CatalogItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let tag = tag.trim().to_lowercase();
    items
        .into_iter()
        .filter(|item| item.tags().iter().any(|t| t.to_lowercase() == tag))
        .collect()
}

/// Состояние фильтра одного списка.
///
/// Создаётся при открытии списка и живёт, пока список на экране.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl FilterState {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Сбросить запрос и категорию
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Сужает ли фильтр список
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || !is_all_categories(&self.category)
    }

    pub fn apply<'a, T: CatalogItem>(
        &self,
        items: &'a [T],
        locale: &str,
        aliases: &CategoryAliasTable,
    ) -> Vec<&'a T> {
        filter(items, &self.query, &self.category, locale, aliases)
    }
}
