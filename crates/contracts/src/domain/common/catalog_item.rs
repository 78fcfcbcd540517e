use crate::shared::catalog::aliases::CategoryAliasTable;
use crate::shared::localized::LocalizableString;

/// Категория элемента каталога.
///
/// В блоге и у авторов категория хранится каноническим ключом, в каталоге
/// инструментов она локализована.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryValue<'a> {
    Canonical(&'a str),
    Localized(&'a LocalizableString),
}

impl<'a> CategoryValue<'a> {
    /// Канонический (не зависящий от языка) ключ категории.
    ///
    /// Для локализованной категории ключом служит английская форма,
    /// при её отсутствии срабатывает обычный откат переводов.
    pub fn canonical(&self) -> &'a str {
        match *self {
            CategoryValue::Canonical(key) => key,
            CategoryValue::Localized(value) => value.get("en"),
        }
    }

    /// Канонический ключ с учётом таблицы синонимов.
    ///
    /// Сохранённая подпись (ключ, `en` или `ar`) ищется в таблице; если её
    /// там нет, возвращается [`Self::canonical`].
    pub fn canonical_in(&self, aliases: &CategoryAliasTable) -> &'a str {
        let known = match *self {
            CategoryValue::Canonical(key) => aliases.to_canonical(key),
            CategoryValue::Localized(value) => aliases
                .to_canonical(value.get("en"))
                .or_else(|| aliases.to_canonical(value.get("ar"))),
        };
        known.unwrap_or_else(|| self.canonical())
    }

    /// Буквальное сравнение с сохранённым значением без таблицы синонимов
    pub fn matches_literal(&self, label: &str) -> bool {
        match *self {
            CategoryValue::Canonical(key) => key == label,
            CategoryValue::Localized(value) => value.matches_literal(label),
        }
    }

    /// Подпись категории в том виде, в каком она лежит в данных
    pub fn raw_label(&self, locale: &str) -> &'a str {
        match *self {
            CategoryValue::Canonical(key) => key,
            CategoryValue::Localized(value) => value.get(locale),
        }
    }
}

/// Трейт для элементов каталога, участвующих в поиске и фильтрации
pub trait CatalogItem {
    /// Уникальный в пределах коллекции идентификатор
    fn slug(&self) -> &str;

    /// Заголовок или имя
    fn title(&self) -> &LocalizableString;

    /// Краткое описание
    fn excerpt(&self) -> &LocalizableString;

    fn category(&self) -> CategoryValue<'_>;

    fn image(&self) -> Option<&str> {
        None
    }

    fn tags(&self) -> &[String] {
        &[]
    }
}

impl<T: CatalogItem + ?Sized> CatalogItem for &T {
    fn slug(&self) -> &str {
        (**self).slug()
    }

    fn title(&self) -> &LocalizableString {
        (**self).title()
    }

    fn excerpt(&self) -> &LocalizableString {
        (**self).excerpt()
    }

    fn category(&self) -> CategoryValue<'_> {
        (**self).category()
    }

    fn image(&self) -> Option<&str> {
        (**self).image()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }
}
