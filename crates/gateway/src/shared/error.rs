//! Ошибки шлюза; клиент всегда получает тело `{ "message": ... }`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api::ApiErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("No se pudo contactar el servidor: {0}")]
    UpstreamUnavailable(String),

    #[error("El análisis de IA no está configurado en el servidor")]
    AnalysisNotConfigured,

    #[error("{0}")]
    BadRequest(String),

    #[error("Error al generar el análisis: {0}")]
    Generation(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            GatewayError::AnalysisNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ApiErrorBody {
        ApiErrorBody::new(self.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::warn!("{} -> {}", self.status(), self);
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failure_is_bad_gateway_with_message() {
        let err = GatewayError::UpstreamUnavailable("connection refused".into());
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        let body = serde_json::to_value(err.body()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "message": "No se pudo contactar el servidor: connection refused" })
        );
    }

    #[test]
    fn missing_key_is_service_unavailable() {
        assert_eq!(
            GatewayError::AnalysisNotConfigured.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
