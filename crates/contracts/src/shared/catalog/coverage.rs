use serde::{Deserialize, Serialize};

use crate::domain::common::CatalogItem;

/// Полнота переводов коллекции
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCoverage {
    pub total: usize,
    /// Элементы, у которых заголовок и описание есть на обоих языках
    pub complete: usize,
}

impl TranslationCoverage {
    pub fn missing(&self) -> usize {
        self.total - self.complete
    }

    pub fn is_complete(&self) -> bool {
        self.complete == self.total
    }
}

pub fn coverage<T: CatalogItem>(items: &[T]) -> TranslationCoverage {
    let complete = items
        .iter()
        .filter(|item| item.title().is_complete() && item.excerpt().is_complete())
        .count();

    TranslationCoverage {
        total: items.len(),
        complete,
    }
}
