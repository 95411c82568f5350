use super::AppState;
use crate::reports::analysis::analyze;
use crate::shared::error::GatewayError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use contracts::reports::{AnalysisRequest, AnalysisResponse};
use contracts::shared::api::ApiEnvelope;

/// POST /api/informes/analisis
pub async fn analysis(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<ApiEnvelope<AnalysisResponse>>, GatewayError> {
    let Json(request) = payload.map_err(|e| GatewayError::BadRequest(e.body_text()))?;
    let provider = state.llm.as_ref().ok_or(GatewayError::AnalysisNotConfigured)?;

    let now = chrono::Local::now().naive_local();
    let response = analyze(provider.as_ref(), &request, now).await?;
    Ok(Json(ApiEnvelope::new(response)))
}
