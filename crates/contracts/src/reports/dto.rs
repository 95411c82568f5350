use crate::domain::common::{lenient, validation::parse_iso_date, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Путь анализа отчёта (обслуживает gateway, не бэкенд)
pub const ANALYSIS_PATH: &str = "/informes/analisis";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    #[default]
    Ventas,
    Inventario,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Ventas, ReportKind::Inventario];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Ventas => "ventas",
            ReportKind::Inventario => "inventario",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Ventas => "Ventas",
            ReportKind::Inventario => "Inventario",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Параметры GET /informes/:tipo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    #[serde(skip)]
    pub tipo: ReportKind,
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

impl ReportQuery {
    pub fn validate(&self) -> Result<(), String> {
        let (Some(start), Some(end)) = (
            parse_iso_date(&self.fecha_inicio),
            parse_iso_date(&self.fecha_fin),
        ) else {
            return Err("Por favor, selecciona un rango de fechas.".into());
        };
        if start > end {
            return Err("La fecha de inicio no puede ser posterior a la fecha fin.".into());
        }
        Ok(())
    }

    /// Путь с query-строкой относительно `/api`
    pub fn path(&self) -> String {
        format!(
            "/informes/{}?fechaInicio={}&fechaFin={}",
            self.tipo, self.fecha_inicio, self.fecha_fin
        )
    }
}

// ============================================================================
// Sales report
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoldProduct {
    pub modelo: String,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub cantidad: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub subtotal: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportClient {
    pub nombre: String,
    pub apellido: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportModelName {
    pub nombre: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOrderItem {
    pub modelo: Option<ReportModelName>,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub cantidad: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportOrder {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub cliente: Option<ReportClient>,
    pub fecha_entrega: String,
    pub modelos: Vec<ReportOrderItem>,
    pub metodo_pago: String,
    pub con_factura: bool,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub precio_total: f64,
}

impl ReportOrder {
    pub fn client_name(&self) -> String {
        match &self.cliente {
            Some(c) => format!("{} {}", c.nombre, c.apellido.as_deref().unwrap_or(""))
                .trim()
                .to_string(),
            None => "Desconocido".into(),
        }
    }

    /// "Mesa x2, Silla x4"
    pub fn models_summary(&self) -> String {
        self.modelos
            .iter()
            .map(|m| {
                let name = m.modelo.as_ref().map_or("Desconocido", |n| n.nombre.as_str());
                format!("{} x{}", name, m.cantidad)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SalesReport {
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub total_ingresos: f64,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub numero_ventas: u32,
    pub productos_vendidos: Vec<SoldProduct>,
    pub pedidos: Vec<ReportOrder>,
}

// ============================================================================
// Inventory report
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InventoryLine {
    pub modelo: String,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub cantidad_disponible: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub cantidad_reservada: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub valor: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InventoryReport {
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub valor_total_inventario: f64,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub numero_productos: u32,
    pub inventario: Vec<InventoryLine>,
}

/// Отчёт вместе с его типом
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tipo", content = "informe", rename_all = "lowercase")]
pub enum ReportData {
    Ventas(SalesReport),
    Inventario(InventoryReport),
}

impl ReportData {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportData::Ventas(_) => ReportKind::Ventas,
            ReportData::Inventario(_) => ReportKind::Inventario,
        }
    }

    /// Разобрать `data` ответа GET /informes/:tipo
    pub fn from_value(kind: ReportKind, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match kind {
            ReportKind::Ventas => ReportData::Ventas(serde_json::from_value(value)?),
            ReportKind::Inventario => ReportData::Inventario(serde_json::from_value(value)?),
        })
    }
}

// ============================================================================
// AI analysis
// ============================================================================

/// Тело POST /informes/analisis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub fecha_inicio: String,
    pub fecha_fin: String,
    #[serde(rename = "reporte")]
    pub report: ReportData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consulta: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analisis: String,
}

impl AnalysisResponse {
    /// Абзацы для отображения (пустые строки отбрасываются)
    pub fn paragraphs(&self) -> Vec<&str> {
        self.analisis
            .split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_requires_ordered_dates() {
        let mut q = ReportQuery {
            tipo: ReportKind::Inventario,
            fecha_inicio: "2024-01-01".into(),
            fecha_fin: "2024-01-31".into(),
        };
        assert!(q.validate().is_ok());
        assert_eq!(
            q.path(),
            "/informes/inventario?fechaInicio=2024-01-01&fechaFin=2024-01-31"
        );
        q.fecha_fin = "2023-12-31".into();
        assert!(q.validate().is_err());
        q.fecha_fin.clear();
        assert!(q.validate().is_err());
    }

    #[test]
    fn analysis_request_round_trips_with_tag() {
        let req = AnalysisRequest {
            fecha_inicio: "2024-01-01".into(),
            fecha_fin: "2024-01-31".into(),
            report: ReportData::Inventario(InventoryReport {
                valor_total_inventario: 1500.0,
                numero_productos: 2,
                inventario: vec![],
            }),
            consulta: Some("¿Qué reponer?".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["reporte"]["tipo"], "inventario");
        assert_eq!(json["reporte"]["informe"]["valorTotalInventario"], 1500.0);
        let back: AnalysisRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn sales_report_from_backend_value() {
        let value = serde_json::json!({
            "totalIngresos": 900,
            "numeroVentas": 2,
            "productosVendidos": [{"modelo": "Mesa", "cantidad": 3, "subtotal": 900}],
            "pedidos": [{"_id": "p1", "cliente": {"nombre": "Rosa"}, "modelos": [{"modelo": {"nombre": "Mesa"}, "cantidad": 3}], "metodoPago": "Efectivo", "precioTotal": 900}]
        });
        let ReportData::Ventas(report) = ReportData::from_value(ReportKind::Ventas, value).unwrap()
        else {
            panic!("expected sales report");
        };
        assert_eq!(report.numero_ventas, 2);
        assert_eq!(report.pedidos[0].client_name(), "Rosa");
        assert_eq!(report.pedidos[0].models_summary(), "Mesa x3");
    }

    #[test]
    fn paragraphs_skip_blank_lines() {
        let r = AnalysisResponse {
            analisis: "Uno.\n\n  Dos.\n".into(),
        };
        assert_eq!(r.paragraphs(), vec!["Uno.", "Dos."]);
    }
}
