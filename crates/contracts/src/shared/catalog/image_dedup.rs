//! Убирает повторяющиеся картинки в пределах одного списка.
//!
//! Состояние принадлежит конкретному просмотру списка: дедупликатор создаётся
//! при построении страницы и выбрасывается вместе с ней.

use std::collections::HashSet;

use url::{ParseError, Url};

/// База для относительных адресов вида `/images/a.png` и `//cdn.host/a.png`
const RELATIVE_BASE: &str = "https://relative.invalid/";
const RELATIVE_HOST: &str = "relative.invalid";

/// Нормализует URL картинки для сравнения.
///
/// Отбрасывает фрагмент и query-строку, приводит схему и хост к нижнему
/// регистру, убирает порт по умолчанию и завершающий `/`. Относительный
/// путь остаётся путём, адрес без схемы получает `https`.
pub fn normalize_image_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let Some(mut url) = parse_image_url(raw) else {
        return raw.trim_end_matches('/').to_string();
    };
    url.set_query(None);
    url.set_fragment(None);

    let key = if url.host_str() == Some(RELATIVE_HOST) {
        url.path().to_string()
    } else {
        url.to_string()
    };
    key.trim_end_matches('/').to_string()
}

fn parse_image_url(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE).ok()?.join(raw).ok(),
        Err(_) => None,
    }
}

/// Набор уже показанных картинок одного списка
#[derive(Debug, Default)]
pub struct ImageDeduper {
    seen: HashSet<String>,
}

impl ImageDeduper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Отмечает картинку как показанную.
    ///
    /// Возвращает `true`, если картинка встречается в списке впервые.
    /// Пустой URL картинкой не считается.
    pub fn claim(&mut self, url: &str) -> bool {
        let key = normalize_image_url(url);
        if key.is_empty() {
            return false;
        }
        self.seen.insert(key)
    }

    /// Картинка при первом показе, иначе `fallback`
    pub fn dedupe_or<'a>(&mut self, url: Option<&'a str>, fallback: &'a str) -> &'a str {
        match url {
            Some(url) if self.claim(url) => url,
            _ => fallback,
        }
    }

    /// Сколько различных картинок уже показано
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
