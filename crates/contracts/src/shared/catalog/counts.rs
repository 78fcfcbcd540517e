//! Подсчёт элементов по категориям для кнопок фильтра.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::aliases::CategoryAliasTable;
use super::filter::ALL_CATEGORIES;
use crate::domain::common::CatalogItem;

/// Количество элементов по каноническим категориям.
///
/// Категории идут в порядке первого появления в коллекции. Ключ
/// [`ALL_CATEGORIES`] зарезервирован и всегда равен размеру коллекции.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    total: usize,
    entries: Vec<(String, usize)>,
}

impl CategoryCounts {
    /// Размер всей коллекции
    pub fn total(&self) -> usize {
        self.total
    }

    /// Количество для категории; для `"all"` возвращает размер коллекции
    pub fn get(&self, category: &str) -> usize {
        if category == ALL_CATEGORIES {
            return self.total;
        }
        self.entries
            .iter()
            .find(|(key, _)| key == category)
            .map_or(0, |(_, count)| *count)
    }

    /// Категории без ключа "all"
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Число различных категорий
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Словарь вместе с ключом "all".
    ///
    /// Категория с ключом "all" в каталог не попадает: её отклоняет
    /// [`Catalog::new`](crate::domain::common::Catalog::new).
    pub fn to_map(&self) -> BTreeMap<String, usize> {
        let mut map: BTreeMap<String, usize> = self
            .entries
            .iter()
            .map(|(key, count)| (key.clone(), *count))
            .collect();
        map.insert(ALL_CATEGORIES.to_string(), self.total);
        map
    }
}

/// Подсчитать элементы по каноническим категориям.
///
/// Ключ категории вычисляется так же, как при фильтрации, поэтому кнопка
/// с ключом `value` отбирает ровно `count` элементов.
pub fn counts_by_category<T: CatalogItem>(
    items: &[T],
    aliases: &CategoryAliasTable,
) -> CategoryCounts {
    let mut entries: Vec<(String, usize)> = Vec::new();

    for item in items {
        let category = item.category().canonical_in(aliases);
        match entries.iter_mut().find(|(key, _)| key == category) {
            Some((_, count)) => *count += 1,
            None => entries.push((category.to_string(), 1)),
        }
    }

    CategoryCounts {
        total: items.len(),
        entries,
    }
}

/// Кнопка фильтра категории
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    /// Значение для фильтра (канонический ключ или "all")
    pub value: String,
    /// Подпись на языке интерфейса
    pub label: String,
    pub count: usize,
}

/// Подпись кнопки "все категории"
pub fn all_categories_label(locale: &str) -> &'static str {
    match locale {
        "ar" => "الكل",
        _ => "All",
    }
}

/// Кнопки фильтра: сначала "все", затем категории в порядке появления
pub fn category_options(
    counts: &CategoryCounts,
    locale: &str,
    aliases: &CategoryAliasTable,
) -> Vec<CategoryOption> {
    let mut options = Vec::with_capacity(counts.len() + 1);
    options.push(CategoryOption {
        value: ALL_CATEGORIES.to_string(),
        label: all_categories_label(locale).to_string(),
        count: counts.total(),
    });

    for (category, count) in counts.iter() {
        let label = aliases.label_for(category, locale).unwrap_or(category);
        options.push(CategoryOption {
            value: category.to_string(),
            label: label.to_string(),
            count,
        });
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_tool::aggregate::Tool;
    use crate::domain::a003_creator::aggregate::Creator;
    use crate::shared::catalog::filter::filter;
    use crate::enums::catalog_kind::CatalogKind;
    use crate::shared::localized::LocalizableString;

    fn creator(slug: &str, category: &str) -> Creator {
        Creator {
            slug: slug.to_string(),
            name: LocalizableString::plain(slug),
            bio: LocalizableString::plain(""),
            category: category.to_string(),
            image: None,
            platform: None,
        }
    }

    fn creators() -> &'static CategoryAliasTable {
        CategoryAliasTable::for_kind(CatalogKind::Creators)
    }

    fn tool(slug: &str, category: LocalizableString) -> Tool {
        Tool {
            slug: slug.to_string(),
            name: LocalizableString::plain(slug),
            description: LocalizableString::plain(""),
            category,
            url: format!("https://{slug}.example.com"),
            image: None,
            pricing: None,
        }
    }

    fn tools() -> Vec<Tool> {
        vec![
            tool("figma", LocalizableString::bilingual("أدوات التصميم", "Design")),
            tool("canva", LocalizableString::ar_only("أدوات التصميم")),
            tool("zapier", LocalizableString::en_only("automation")),
            tool("notion", LocalizableString::ar_only("تدوين الملاحظات")),
        ]
    }

    fn sample() -> Vec<Creator> {
        vec![
            creator("a", "Tech"),
            creator("b", "Design"),
            creator("c", "Tech"),
            creator("d", "Cooking"),
        ]
    }

    #[test]
    fn test_counts_and_all_key() {
        let counts = counts_by_category(&sample(), creators());
        assert_eq!(counts.get("Tech"), 2);
        assert_eq!(counts.get("Design"), 1);
        assert_eq!(counts.get("Missing"), 0);
        assert_eq!(counts.get(ALL_CATEGORIES), 4);
        assert_eq!(counts.to_map().get("all"), Some(&4));
    }

    #[test]
    fn test_counts_sum_equals_len() {
        let items = sample();
        let counts = counts_by_category(&items, creators());
        let sum: usize = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(sum, items.len());
    }

    #[test]
    fn test_counts_keep_first_seen_order() {
        let counts = counts_by_category(&sample(), creators());
        let keys: Vec<&str> = counts.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Tech", "Design", "Cooking"]);
    }

    #[test]
    fn test_empty_collection() {
        let counts = counts_by_category::<Creator>(&[], creators());
        assert!(counts.is_empty());
        assert_eq!(counts.get(ALL_CATEGORIES), 0);
    }

    #[test]
    fn test_category_options_labels() {
        let counts = counts_by_category(&sample(), creators());
        let aliases = creators();
        let options = category_options(&counts, "ar", aliases);

        assert_eq!(options[0].value, "all");
        assert_eq!(options[0].label, "الكل");
        assert_eq!(options[0].count, 4);
        assert_eq!(options[1].label, "التقنية");
        // нет в таблице синонимов: подписью служит ключ
        assert_eq!(options[3].label, "Cooking");
    }

    #[test]
    fn test_localized_categories_counted_by_canonical_key() {
        let aliases = CategoryAliasTable::for_kind(CatalogKind::Tools);
        let counts = counts_by_category(&tools(), aliases);

        assert_eq!(counts.get("Design"), 2);
        assert_eq!(counts.get("Automation"), 1);
        assert_eq!(counts.get("تدوين الملاحظات"), 1);
        assert_eq!(counts.len(), 3);

        let options = category_options(&counts, "ar", aliases);
        assert_eq!(options[1].value, "Design");
        assert_eq!(options[1].label, "أدوات التصميم");
        assert_eq!(options[1].count, 2);
        assert_eq!(options[2].label, "الأتمتة");
    }

    #[test]
    fn test_every_option_filters_to_its_count() {
        let tools = tools();
        let aliases = CategoryAliasTable::for_kind(CatalogKind::Tools);
        for locale in ["ar", "en"] {
            let options = category_options(&counts_by_category(&tools, aliases), locale, aliases);
            for option in &options {
                let found = filter(&tools, "", &option.value, locale, aliases);
                assert_eq!(found.len(), option.count, "option {:?}", option.value);
            }
        }

        let people = sample();
        let counts = counts_by_category(&people, creators());
        for option in &category_options(&counts, "en", creators()) {
            let found = filter(&people, "", &option.value, "en", creators());
            assert_eq!(found.len(), option.count, "option {:?}", option.value);
        }
    }
}
