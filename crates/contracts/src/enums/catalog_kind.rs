use serde::{Deserialize, Serialize};
use std::fmt;

/// Типы каталогов сайта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Статьи блога
    Posts,
    /// Каталог инструментов
    Tools,
    /// Авторы и создатели контента
    Creators,
}

impl CatalogKind {
    /// Код каталога (используется в URL)
    pub fn code(&self) -> &'static str {
        match self {
            CatalogKind::Posts => "posts",
            CatalogKind::Tools => "tools",
            CatalogKind::Creators => "creators",
        }
    }

    pub fn all() -> Vec<CatalogKind> {
        vec![CatalogKind::Posts, CatalogKind::Tools, CatalogKind::Creators]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "posts" => Some(CatalogKind::Posts),
            "tools" => Some(CatalogKind::Tools),
            "creators" => Some(CatalogKind::Creators),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for kind in CatalogKind::all() {
            assert_eq!(CatalogKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(CatalogKind::from_code("courses"), None);
    }
}
