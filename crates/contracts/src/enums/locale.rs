use serde::{Deserialize, Serialize};
use std::fmt;

/// Поддерживаемые языки контента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Основной язык каталога
    #[default]
    Ar,
    En,
}

/// Язык, на который откатывается всё, что не удалось распознать
pub const DEFAULT_LOCALE: Locale = Locale::Ar;

/// Направление письма
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Locale {
    /// Код языка ("ar" | "en")
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    /// Название языка на самом языке
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::Ar => "العربية",
            Locale::En => "English",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }

    pub fn all() -> Vec<Locale> {
        vec![Locale::Ar, Locale::En]
    }

    /// Парсинг языкового тега.
    ///
    /// Регистр не важен, региональная часть отбрасывается: `en-US` и `AR_eg`
    /// распознаются как `en` и `ar`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "ar" => Some(Locale::Ar),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Выбор эффективного языка.
///
/// Порядок: запрошенный язык (если поддерживается), затем `fallback`
/// (если поддерживается), затем [`DEFAULT_LOCALE`].
pub fn resolve_locale(requested: Option<&str>, fallback: &str) -> Locale {
    requested
        .and_then(Locale::from_code)
        .or_else(|| Locale::from_code(fallback))
        .unwrap_or(DEFAULT_LOCALE)
}
