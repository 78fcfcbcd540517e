use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Форматирует размер ответа с разделителями тысяч (точками)
fn format_size(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог длительность, размер ответа, статус, метод и путь.
/// Язык запроса виден в query-строке, поэтому логируется весь URI.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                "{:>5}ms | {:>12} | {} {:>6} {} | body error: {}",
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri,
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let line = format!(
        "{:>5}ms | {:>12} | {} {:>6} {}",
        start.elapsed().as_millis(),
        format_size(bytes.len()),
        parts.status.as_u16(),
        method,
        uri
    );
    if parts.status.is_success() {
        tracing::info!("{}", line);
    } else {
        tracing::warn!("{}", line);
    }

    Response::from_parts(parts, Body::from(bytes))
}
