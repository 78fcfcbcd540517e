pub mod catalog_kind;
pub mod locale;
