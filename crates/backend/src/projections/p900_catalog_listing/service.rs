use contracts::domain::common::{Catalog, CatalogItem};
use contracts::enums::locale::Locale;
use contracts::projections::p900_catalog_listing::{
    CatalogCard, CategoryOption, ItemDetailResponse, ListingRequest, ListingResponse,
    LocalizedCard,
};
use contracts::shared::catalog::{
    category_options, counts_by_category, coverage, filter_by_tag, CategoryAliasTable,
    FilterState, ImageDeduper,
};

/// Построить список каталога по запросу.
///
/// Каждый вызов создаёт своё состояние фильтра и свой дедупликатор картинок:
/// между запросами ничего не сохраняется.
pub fn build_listing<T: CatalogCard>(
    catalog: &Catalog<T>,
    req: &ListingRequest,
    locale: Locale,
    fallback_image: &str,
) -> ListingResponse {
    let kind = catalog.kind();
    let aliases = CategoryAliasTable::for_kind(kind);

    let mut state = FilterState::default();
    if let Some(q) = req.q.as_deref() {
        state.set_query(q);
    }
    if let Some(category) = req.category.as_deref() {
        state.set_category(category);
    }

    let mut found = state.apply(catalog.items(), locale.code(), aliases);
    let tag = req
        .tag
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(tag) = tag {
        found = filter_by_tag(found, tag);
    }

    let mut images = ImageDeduper::new();
    let items: Vec<LocalizedCard> = found
        .iter()
        .map(|item| {
            let mut card = LocalizedCard::build(*item, locale.code(), aliases);
            card.image = Some(
                images
                    .dedupe_or(item.image(), fallback_image)
                    .to_string(),
            );
            card
        })
        .collect();

    tracing::debug!(
        "Listing '{}' (locale={}, q='{}', category='{}'): {} of {}",
        kind,
        locale,
        state.query,
        state.category,
        items.len(),
        catalog.len()
    );

    ListingResponse {
        kind,
        locale,
        direction: locale.direction(),
        query: state.query,
        category: state.category,
        tag: tag.map(str::to_string),
        total_count: items.len(),
        items,
        counts: build_categories(catalog, locale),
        coverage: coverage(catalog.items()),
    }
}

/// Кнопки категорий со счётчиками по всему каталогу
pub fn build_categories<T: CatalogItem>(catalog: &Catalog<T>, locale: Locale) -> Vec<CategoryOption> {
    let aliases = CategoryAliasTable::for_kind(catalog.kind());
    let counts = counts_by_category(catalog.items(), aliases);
    category_options(&counts, locale.code(), aliases)
}

/// Карточка одного элемента по slug
pub fn build_detail<T: CatalogCard>(
    catalog: &Catalog<T>,
    slug: &str,
    locale: Locale,
) -> Option<ItemDetailResponse> {
    let item = catalog.find_by_slug(slug)?;
    let aliases = CategoryAliasTable::for_kind(catalog.kind());

    Some(ItemDetailResponse {
        kind: catalog.kind(),
        locale,
        direction: locale.direction(),
        card: LocalizedCard::build(item, locale.code(), aliases),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::catalog_store::CatalogStore;

    const FALLBACK: &str = "/images/placeholder.svg";

    fn request(q: Option<&str>, category: Option<&str>) -> ListingRequest {
        ListingRequest {
            q: q.map(str::to_string),
            category: category.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_listing_returns_whole_catalog_in_order() {
        let store = CatalogStore::embedded().unwrap();
        let resp = build_listing(&store.posts, &ListingRequest::default(), Locale::Ar, FALLBACK);

        assert_eq!(resp.total_count, store.posts.len());
        let slugs: Vec<&str> = resp.items.iter().map(|c| c.slug.as_str()).collect();
        let expected: Vec<&str> = store.posts.items().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, expected);
        assert_eq!(resp.category, "all");
        assert_eq!(resp.counts[0].count, store.posts.len());
    }

    #[test]
    fn test_arabic_category_label_filters_posts() {
        let store = CatalogStore::embedded().unwrap();
        let resp = build_listing(&store.posts, &request(None, Some("البرمجة")), Locale::Ar, FALLBACK);

        assert!(resp.total_count > 0);
        assert!(resp.items.iter().all(|c| c.category == "Coding"));
        assert!(resp.items.iter().all(|c| c.category_label == "البرمجة"));
    }

    #[test]
    fn test_english_query_falls_back_to_arabic_text() {
        let store = CatalogStore::embedded().unwrap();
        let resp = build_listing(&store.posts, &request(Some("تقويم"), None), Locale::En, FALLBACK);

        assert_eq!(resp.total_count, 1);
        assert_eq!(resp.items[0].slug, "content-calendar");
        assert_eq!(resp.items[0].title, "تقويم المحتوى");
    }

    #[test]
    fn test_repeated_images_replaced_with_fallback() {
        let store = CatalogStore::embedded().unwrap();
        let resp = build_listing(&store.posts, &request(None, Some("Coding")), Locale::En, FALLBACK);

        let images: Vec<&str> = resp
            .items
            .iter()
            .map(|c| c.image.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(images, vec!["/images/blog/rust.png", FALLBACK]);
    }

    #[test]
    fn test_tag_narrows_listing() {
        let store = CatalogStore::embedded().unwrap();
        let req = ListingRequest {
            tag: Some("async".to_string()),
            ..Default::default()
        };
        let resp = build_listing(&store.posts, &req, Locale::En, FALLBACK);

        assert_eq!(resp.total_count, 1);
        assert_eq!(resp.tag.as_deref(), Some("async"));
    }

    #[test]
    fn test_unknown_category_yields_empty_listing() {
        let store = CatalogStore::embedded().unwrap();
        let resp = build_listing(&store.tools, &request(None, Some("Cooking")), Locale::En, FALLBACK);
        assert_eq!(resp.total_count, 0);
        assert!(resp.items.is_empty());
    }

    #[test]
    fn test_category_buttons_match_filtered_listing() {
        let store = CatalogStore::embedded().unwrap();
        for locale in [Locale::Ar, Locale::En] {
            for option in build_categories(&store.tools, locale) {
                let resp = build_listing(
                    &store.tools,
                    &request(None, Some(&option.value)),
                    locale,
                    FALLBACK,
                );
                assert_eq!(resp.total_count, option.count, "category {}", option.value);
            }
        }
    }

    #[test]
    fn test_detail_by_slug() {
        let store = CatalogStore::embedded().unwrap();
        let detail = build_detail(&store.tools, "vscode", Locale::En).unwrap();
        // английского описания нет, показывается арабское
        assert_eq!(detail.card.excerpt, "محرر أكواد خفيف وقابل للتوسعة.");
        assert_eq!(detail.card.category_label, "Development");
        assert!(build_detail(&store.tools, "missing", Locale::En).is_none());
    }
}
