//! AI-анализ отчёта

use super::prompt::build_prompt;
use crate::shared::error::GatewayError;
use crate::shared::llm::{ChatMessage, LlmProvider};
use chrono::NaiveDateTime;
use contracts::reports::{AnalysisRequest, AnalysisResponse};

pub async fn analyze(
    provider: &dyn LlmProvider,
    request: &AnalysisRequest,
    now: NaiveDateTime,
) -> Result<AnalysisResponse, GatewayError> {
    if request.fecha_inicio.trim().is_empty() || request.fecha_fin.trim().is_empty() {
        return Err(GatewayError::BadRequest(
            "Por favor, selecciona un rango de fechas.".into(),
        ));
    }

    let prompt = build_prompt(request, now);
    tracing::info!(
        "analysis request: tipo={}, {} chars, provider={}",
        request.report.kind(),
        prompt.chars().count(),
        provider.provider_name()
    );

    let response = provider
        .chat_completion(vec![ChatMessage::user(prompt)])
        .await
        .map_err(|e| GatewayError::Generation(e.to_string()))?;
    tracing::info!(
        "analysis done: model={}, tokens={:?}",
        response.model,
        response.tokens_used
    );

    Ok(AnalysisResponse {
        analisis: response.content.replace("**", ""),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::{LlmError, LlmResponse};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use contracts::reports::{ReportData, SalesReport};
    use std::sync::Mutex;

    struct FakeProvider {
        reply: Result<String, String>,
        seen: Mutex<Vec<ChatMessage>>,
    }

    #[async_trait]
    impl LlmProvider for FakeProvider {
        async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
            self.seen.lock().unwrap().extend(messages);
            match &self.reply {
                Ok(text) => Ok(LlmResponse {
                    content: text.clone(),
                    tokens_used: Some(10),
                    model: "fake".into(),
                    finish_reason: None,
                }),
                Err(e) => Err(LlmError::ApiError(e.clone())),
            }
        }

        fn provider_name(&self) -> &str {
            "fake"
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            fecha_inicio: "2024-06-01".into(),
            fecha_fin: "2024-06-30".into(),
            report: ReportData::Ventas(SalesReport::default()),
            consulta: None,
        }
    }

    #[tokio::test]
    async fn bold_markers_are_stripped() {
        let provider = FakeProvider {
            reply: Ok("Las ventas **subieron** un 10%.".into()),
            seen: Mutex::new(Vec::new()),
        };

        let result = analyze(&provider, &request(), now()).await.unwrap();

        assert_eq!(result.analisis, "Las ventas subieron un 10%.");
        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].content.contains("informe de ventas"));
    }

    #[tokio::test]
    async fn provider_failure_is_a_generation_error() {
        let provider = FakeProvider {
            reply: Err("quota".into()),
            seen: Mutex::new(Vec::new()),
        };

        let err = analyze(&provider, &request(), now()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Generation(_)));
    }

    #[tokio::test]
    async fn missing_dates_are_rejected_before_calling_the_model() {
        let provider = FakeProvider {
            reply: Ok(String::new()),
            seen: Mutex::new(Vec::new()),
        };
        let mut req = request();
        req.fecha_fin.clear();

        let err = analyze(&provider, &req, now()).await.unwrap_err();

        assert!(matches!(err, GatewayError::BadRequest(_)));
        assert!(provider.seen.lock().unwrap().is_empty());
    }
}
