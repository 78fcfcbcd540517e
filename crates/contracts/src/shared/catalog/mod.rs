pub mod aliases;
pub mod counts;
pub mod coverage;
pub mod filter;
pub mod image_dedup;

pub use aliases::{CategoryAlias, CategoryAliasTable};
pub use counts::{category_options, counts_by_category, CategoryCounts, CategoryOption};
pub use coverage::{coverage, TranslationCoverage};
pub use filter::{filter, filter_by_tag, FilterState, ALL_CATEGORIES};
pub use image_dedup::{normalize_image_url, ImageDeduper};
