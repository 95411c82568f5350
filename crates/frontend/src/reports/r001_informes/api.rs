//! Формирование отчёта и запрос AI-анализа через шлюз

use crate::shared::crud::api::{get_json, post_json};
use crate::shared::crud::ApiError;
use crate::shared::notify::Notify;
use async_trait::async_trait;
use contracts::reports::{AnalysisRequest, AnalysisResponse, ReportData, ReportQuery, ANALYSIS_PATH};
use serde_json::Value;

#[async_trait(?Send)]
pub trait ReportsApi {
    async fn fetch_report(&self, query: &ReportQuery) -> Result<ReportData, ApiError>;
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ApiError>;
}

pub struct HttpReports;

#[async_trait(?Send)]
impl ReportsApi for HttpReports {
    async fn fetch_report(&self, query: &ReportQuery) -> Result<ReportData, ApiError> {
        let data = get_json::<Value>(&query.path()).await?.unwrap_or(Value::Null);
        ReportData::from_value(query.tipo, data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ApiError> {
        post_json::<_, AnalysisResponse>(ANALYSIS_PATH, request)
            .await?
            .ok_or_else(|| ApiError::Decode("respuesta vacía".into()))
    }
}

/// Проверить даты и загрузить отчёт; `None` при любой ошибке (уведомление уже показано)
pub async fn generate_report<A: ReportsApi, N: Notify>(
    api: &A,
    notices: &N,
    query: &ReportQuery,
) -> Option<ReportData> {
    if let Err(msg) = query.validate() {
        notices.error(msg);
        return None;
    }
    match api.fetch_report(query).await {
        Ok(report) => {
            notices.success("Informe generado correctamente");
            Some(report)
        }
        Err(e) => {
            log::error!("report {} failed: {}", query.tipo, e);
            notices.error(format!("Error al generar el informe: {}", e));
            None
        }
    }
}

/// Отправить отчёт на анализ; пустой вопрос не передаётся
pub async fn request_analysis<A: ReportsApi, N: Notify>(
    api: &A,
    notices: &N,
    query: &ReportQuery,
    report: Option<ReportData>,
    consulta: &str,
) -> Option<AnalysisResponse> {
    let Some(report) = report else {
        notices.error("Por favor, genera un informe primero.");
        return None;
    };
    let consulta = consulta.trim();
    let request = AnalysisRequest {
        fecha_inicio: query.fecha_inicio.clone(),
        fecha_fin: query.fecha_fin.clone(),
        report,
        consulta: (!consulta.is_empty()).then(|| consulta.to_string()),
    };
    match api.analyze(&request).await {
        Ok(mut response) => {
            response.analisis = response.analisis.replace("**", "");
            notices.success("Análisis generado correctamente");
            Some(response)
        }
        Err(e) => {
            log::error!("analysis failed: {}", e);
            notices.error(format!("Error al generar análisis de IA: {}", e));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notify::testing::RecordingNotify;
    use crate::shared::notify::NoticeLevel;
    use contracts::reports::{InventoryReport, ReportKind, SalesReport};
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeReports {
        fail: bool,
        fetched: RefCell<Vec<String>>,
        analyzed: RefCell<Vec<AnalysisRequest>>,
    }

    #[async_trait(?Send)]
    impl ReportsApi for FakeReports {
        async fn fetch_report(&self, query: &ReportQuery) -> Result<ReportData, ApiError> {
            self.fetched.borrow_mut().push(query.path());
            if self.fail {
                return Err(ApiError::server(500, r#"{"message":"Fallo interno"}"#));
            }
            Ok(ReportData::Ventas(SalesReport {
                total_ingresos: 300.0,
                numero_ventas: 2,
                ..Default::default()
            }))
        }

        async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ApiError> {
            self.analyzed.borrow_mut().push(request.clone());
            if self.fail {
                return Err(ApiError::Network("timeout".into()));
            }
            Ok(AnalysisResponse {
                analisis: "Las ventas **crecieron**.\n\nConviene reponer stock.".into(),
            })
        }
    }

    fn query(start: &str, end: &str) -> ReportQuery {
        ReportQuery {
            tipo: ReportKind::Ventas,
            fecha_inicio: start.into(),
            fecha_fin: end.into(),
        }
    }

    #[test]
    fn missing_dates_never_reach_the_server() {
        let api = FakeReports::default();
        let notices = RecordingNotify::default();

        let result = block_on(generate_report(&api, &notices, &query("", "2024-06-30")));

        assert!(result.is_none());
        assert!(api.fetched.borrow().is_empty());
        assert_eq!(
            notices.last(),
            Some((NoticeLevel::Error, "Por favor, selecciona un rango de fechas.".to_string()))
        );
    }

    #[test]
    fn report_is_fetched_with_date_params() {
        let api = FakeReports::default();
        let notices = RecordingNotify::default();

        let result = block_on(generate_report(&api, &notices, &query("2024-06-01", "2024-06-30")));

        assert_eq!(result.map(|r| r.kind()), Some(ReportKind::Ventas));
        assert_eq!(
            api.fetched.borrow()[0],
            "/informes/ventas?fechaInicio=2024-06-01&fechaFin=2024-06-30"
        );
        assert_eq!(notices.levels(), vec![NoticeLevel::Success]);
    }

    #[test]
    fn server_error_message_is_shown() {
        let api = FakeReports { fail: true, ..Default::default() };
        let notices = RecordingNotify::default();

        let result = block_on(generate_report(&api, &notices, &query("2024-06-01", "2024-06-30")));

        assert!(result.is_none());
        assert_eq!(
            notices.last().map(|(_, m)| m),
            Some("Error al generar el informe: Fallo interno".to_string())
        );
    }

    #[test]
    fn analysis_requires_a_report() {
        let api = FakeReports::default();
        let notices = RecordingNotify::default();

        let result = block_on(request_analysis(&api, &notices, &query("2024-06-01", "2024-06-30"), None, ""));

        assert!(result.is_none());
        assert!(api.analyzed.borrow().is_empty());
        assert_eq!(notices.levels(), vec![NoticeLevel::Error]);
    }

    #[test]
    fn analysis_sends_report_and_strips_bold_markers() {
        let api = FakeReports::default();
        let notices = RecordingNotify::default();
        let report = ReportData::Inventario(InventoryReport::default());

        let result = block_on(request_analysis(
            &api,
            &notices,
            &query("2024-06-01", "2024-06-30"),
            Some(report.clone()),
            "  ¿Qué reponer?  ",
        ))
        .unwrap();

        assert_eq!(result.paragraphs(), vec!["Las ventas crecieron.", "Conviene reponer stock."]);
        let sent = api.analyzed.borrow();
        assert_eq!(sent[0].report, report);
        assert_eq!(sent[0].consulta.as_deref(), Some("¿Qué reponer?"));
    }

    #[test]
    fn blank_question_is_omitted() {
        let api = FakeReports::default();
        let notices = RecordingNotify::default();

        block_on(request_analysis(
            &api,
            &notices,
            &query("2024-06-01", "2024-06-30"),
            Some(ReportData::Ventas(SalesReport::default())),
            "   ",
        ));

        assert_eq!(api.analyzed.borrow()[0].consulta, None);
    }
}
