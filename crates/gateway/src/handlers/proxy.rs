//! Проксирование `/api/*` на REST бэкенд

use super::AppState;
use crate::shared::error::GatewayError;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

/// `/api/proveedores?x=1` -> `<base>/proveedores?x=1`
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let rest = path.strip_prefix("/api").unwrap_or(path).trim_start_matches('/');
    let mut url = format!("{}/{}", base.trim_end_matches('/'), rest);
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// Метод, тело и тип содержимого уходят как есть; статус и тело ответа
/// возвращаются без изменений
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let url = upstream_url(&state.upstream_base, uri.path(), uri.query());
    tracing::debug!("proxy {} {}", method, url);

    let mut request = state.http.request(method, &url);
    if let Some(ct) = headers.get(header::CONTENT_TYPE) {
        request = request.header(header::CONTENT_TYPE, ct.clone());
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::error!("upstream {} unreachable: {}", url, e);
        GatewayError::UpstreamUnavailable(e.to_string())
    })?;

    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| GatewayError::UpstreamUnavailable(e.to_string()))?;

    Ok((status, [(header::CONTENT_TYPE, content_type)], bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::upstream_url;

    #[test]
    fn api_prefix_is_replaced_by_base() {
        assert_eq!(
            upstream_url("http://localhost:5000/api", "/api/proveedores", None),
            "http://localhost:5000/api/proveedores"
        );
        assert_eq!(
            upstream_url("http://localhost:5000/api/", "/api/recibimientos/7/confirmar", None),
            "http://localhost:5000/api/recibimientos/7/confirmar"
        );
    }

    #[test]
    fn query_string_is_kept() {
        assert_eq!(
            upstream_url(
                "http://backend/api",
                "/api/informes/ventas",
                Some("fechaInicio=2024-06-01&fechaFin=2024-06-30")
            ),
            "http://backend/api/informes/ventas?fechaInicio=2024-06-01&fechaFin=2024-06-30"
        );
        assert_eq!(upstream_url("http://backend/api", "/api/stock", Some("")), "http://backend/api/stock");
    }
}
