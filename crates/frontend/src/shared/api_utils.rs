//! Адреса REST API
//!
//! Все запросы фронтенда идут через шлюз (`gateway`), который слушает
//! порт 3000 на том же хосте и проксирует `/api/*` на бэкенд мастерской.

/// Порт шлюза
pub const GATEWAY_PORT: u16 = 3000;

/// Префикс REST-путей
pub const API_PREFIX: &str = "/api";

/// Базовый URL шлюза, например "http://localhost:3000"
///
/// Пустая строка, если окна нет (тесты вне браузера).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, GATEWAY_PORT)
}

/// Полный URL для пути коллекции (`/proveedores`, `/ordenes/{id}` ...)
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{}{}/{}", base.trim_end_matches('/'), API_PREFIX, path)
}
