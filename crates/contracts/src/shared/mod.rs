pub mod catalog;
pub mod localized;
