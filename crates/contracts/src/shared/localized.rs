//! Локализуемые строки контента и их разрешение под язык интерфейса.
//!
//! Значение либо не зависит от языка (обычная строка), либо хранит переводы
//! `{ "ar": ..., "en": ... }`. Отсутствие перевода не ошибка: английские
//! переводы могут быть неполными, и тогда показывается арабский текст.

use serde::{Deserialize, Serialize};

/// Строка, которая может иметь переводы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizableString {
    /// Строка, одинаковая для всех языков
    Plain(String),
    /// Переводы по языкам
    PerLocale(Translations),
}

/// Переводы строки. Пустая строка считается отсутствующим переводом.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl Translations {
    /// Перевод для точного кода языка
    pub fn entry(&self, locale: &str) -> Option<&str> {
        let value = match locale {
            "ar" => self.ar.as_deref(),
            "en" => self.en.as_deref(),
            _ => None,
        };
        value.filter(|s| !s.is_empty())
    }

    /// Есть ли хотя бы один перевод
    pub fn has_any(&self) -> bool {
        self.entry("ar").is_some() || self.entry("en").is_some()
    }
}

impl LocalizableString {
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain(value.into())
    }

    pub fn bilingual(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self::PerLocale(Translations {
            ar: Some(ar.into()),
            en: Some(en.into()),
        })
    }

    pub fn ar_only(ar: impl Into<String>) -> Self {
        Self::PerLocale(Translations {
            ar: Some(ar.into()),
            en: None,
        })
    }

    pub fn en_only(en: impl Into<String>) -> Self {
        Self::PerLocale(Translations {
            ar: None,
            en: Some(en.into()),
        })
    }

    /// Текст для языка `locale`.
    ///
    /// Обычная строка возвращается как есть. Для переводов: запрошенный язык,
    /// затем `ar`, затем `en`, иначе пустая строка.
    pub fn get(&self, locale: &str) -> &str {
        match self {
            Self::Plain(value) => value.as_str(),
            Self::PerLocale(t) => t
                .entry(locale)
                .or_else(|| t.entry("ar"))
                .or_else(|| t.entry("en"))
                .unwrap_or(""),
        }
    }

    /// Все переводы на месте (обычная строка считается полной)
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Plain(_) => true,
            Self::PerLocale(t) => t.entry("ar").is_some() && t.entry("en").is_some(),
        }
    }

    /// Значение можно показать хотя бы на одном языке
    pub fn is_displayable(&self) -> bool {
        match self {
            Self::Plain(_) => true,
            Self::PerLocale(t) => t.has_any(),
        }
    }

    /// Совпадает ли `literal` буквально с одной из форм значения
    pub fn matches_literal(&self, literal: &str) -> bool {
        match self {
            Self::Plain(value) => value == literal,
            Self::PerLocale(t) => {
                t.entry("ar") == Some(literal) || t.entry("en") == Some(literal)
            }
        }
    }
}

impl From<&str> for LocalizableString {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for LocalizableString {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

/// Разрешить локализуемое значение в строку для показа
pub fn resolve(value: &LocalizableString, locale: impl AsRef<str>) -> String {
    value.get(locale.as_ref()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::locale::Locale;

    #[test]
    fn test_plain_is_locale_invariant() {
        let v = LocalizableString::plain("ChatGPT");
        assert_eq!(resolve(&v, "ar"), "ChatGPT");
        assert_eq!(resolve(&v, "en"), "ChatGPT");
        assert_eq!(resolve(&v, "fr"), "ChatGPT");
    }

    #[test]
    fn test_requested_locale_wins() {
        let v = LocalizableString::bilingual("مرحبا", "Hello");
        assert_eq!(resolve(&v, Locale::En), "Hello");
        assert_eq!(resolve(&v, Locale::Ar), "مرحبا");
    }

    #[test]
    fn test_missing_en_falls_back_to_ar() {
        let v = LocalizableString::ar_only("وداعا");
        assert_eq!(resolve(&v, "en"), "وداعا");
    }

    #[test]
    fn test_missing_ar_falls_back_to_en() {
        let v = LocalizableString::en_only("Goodbye");
        assert_eq!(resolve(&v, "ar"), "Goodbye");
        assert_eq!(resolve(&v, "de"), "Goodbye");
    }

    #[test]
    fn test_unknown_locale_prefers_ar() {
        let v = LocalizableString::bilingual("مرحبا", "Hello");
        assert_eq!(resolve(&v, "fr"), "مرحبا");
    }

    #[test]
    fn test_no_translations_resolves_to_empty() {
        let v = LocalizableString::PerLocale(Translations::default());
        assert_eq!(resolve(&v, "ar"), "");
        assert_eq!(resolve(&v, "en"), "");
        assert!(!v.is_displayable());
    }

    #[test]
    fn test_empty_entry_counts_as_missing() {
        let v = LocalizableString::PerLocale(Translations {
            ar: Some("نص".to_string()),
            en: Some(String::new()),
        });
        assert_eq!(resolve(&v, "en"), "نص");
        assert!(!v.is_complete());
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let plain: LocalizableString = serde_json::from_str("\"Figma\"").unwrap();
        assert_eq!(plain, LocalizableString::plain("Figma"));

        let record: LocalizableString =
            serde_json::from_str(r#"{"ar": "تصميم", "en": "Design"}"#).unwrap();
        assert_eq!(record, LocalizableString::bilingual("تصميم", "Design"));

        let partial: LocalizableString = serde_json::from_str(r#"{"ar": "تصميم"}"#).unwrap();
        assert_eq!(partial, LocalizableString::ar_only("تصميم"));
    }

    #[test]
    fn test_matches_literal() {
        let v = LocalizableString::bilingual("البرمجة", "Coding");
        assert!(v.matches_literal("Coding"));
        assert!(v.matches_literal("البرمجة"));
        assert!(!v.matches_literal("coding"));
    }
}
