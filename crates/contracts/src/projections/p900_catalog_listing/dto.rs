use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_post::aggregate::Post;
use crate::domain::a002_tool::aggregate::Tool;
use crate::domain::a003_creator::aggregate::Creator;
use crate::domain::common::CatalogItem;
use crate::enums::catalog_kind::CatalogKind;
use crate::enums::locale::{Direction, Locale};
use crate::shared::catalog::aliases::CategoryAliasTable;
pub use crate::shared::catalog::counts::CategoryOption;
use crate::shared::catalog::coverage::TranslationCoverage;

/// Запрос на получение списка каталога
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingRequest {
    /// Поисковая строка
    #[serde(default)]
    pub q: Option<String>,
    /// Подпись или ключ категории, "all" или пусто означает все
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    /// Только для блога
    #[serde(default)]
    pub tag: Option<String>,
}

/// Запрос с одним лишь языком (категории, карточка)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleRequest {
    #[serde(default)]
    pub locale: Option<String>,
}

/// Карточка элемента, уже переведённая на язык интерфейса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedCard {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Канонический ключ категории
    pub category: String,
    /// Подпись категории на языке интерфейса
    pub category_label: String,
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Элемент каталога, который умеет превращаться в карточку
pub trait CatalogCard: CatalogItem {
    /// Заполнить поля карточки, специфичные для типа элемента
    fn decorate(&self, _card: &mut LocalizedCard, _locale: &str) {}
}

impl LocalizedCard {
    /// Собрать карточку для языка `locale`
    pub fn build<T: CatalogCard>(item: &T, locale: &str, aliases: &CategoryAliasTable) -> Self {
        let category = item.category();
        let canonical = category.canonical_in(aliases);
        let category_label = aliases
            .label_for(canonical, locale)
            .unwrap_or_else(|| category.raw_label(locale));

        let mut card = Self {
            slug: item.slug().to_string(),
            title: item.title().get(locale).to_string(),
            excerpt: item.excerpt().get(locale).to_string(),
            category: canonical.to_string(),
            category_label: category_label.to_string(),
            image: item.image().map(str::to_string),
            date: None,
            author: None,
            url: None,
            pricing: None,
            platform: None,
            tags: Vec::new(),
        };
        item.decorate(&mut card, locale);
        card
    }
}

impl CatalogCard for Post {
    fn decorate(&self, card: &mut LocalizedCard, _locale: &str) {
        card.date = Some(self.date);
        card.author = self.author.clone();
        card.tags = self.tags.clone();
    }
}

impl CatalogCard for Tool {
    fn decorate(&self, card: &mut LocalizedCard, locale: &str) {
        card.url = Some(self.url.clone());
        card.pricing = self.pricing.as_ref().map(|p| p.get(locale).to_string());
    }
}

impl CatalogCard for Creator {
    fn decorate(&self, card: &mut LocalizedCard, _locale: &str) {
        card.platform = self.platform.clone();
    }
}

/// Ответ со списком каталога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub kind: CatalogKind,
    pub locale: Locale,
    pub direction: Direction,
    pub query: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub items: Vec<LocalizedCard>,
    /// Количество найденных элементов
    pub total_count: usize,
    /// Кнопки категорий со счётчиками по всему каталогу
    pub counts: Vec<CategoryOption>,
    pub coverage: TranslationCoverage,
}

/// Ответ со списком кнопок категорий
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub kind: CatalogKind,
    pub locale: Locale,
    pub categories: Vec<CategoryOption>,
}

/// Ответ с карточкой одного элемента
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetailResponse {
    pub kind: CatalogKind,
    pub locale: Locale,
    pub direction: Direction,
    pub card: LocalizedCard,
}

/// Описание поддерживаемого языка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleInfoDto {
    pub code: String,
    pub name: String,
    pub direction: Direction,
    pub is_default: bool,
}

impl LocaleInfoDto {
    pub fn from_locale(locale: Locale, default: Locale) -> Self {
        Self {
            code: locale.code().to_string(),
            name: locale.display_name().to_string(),
            direction: locale.direction(),
            is_default: locale == default,
        }
    }
}
