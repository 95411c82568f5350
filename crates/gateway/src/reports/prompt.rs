//! Текст запроса к модели по данным отчёта

use crate::shared::format::{format_amount, format_date};
use chrono::NaiveDateTime;
use contracts::reports::{AnalysisRequest, InventoryReport, ReportData, SalesReport};
use std::fmt::Write;

const INSTRUCTIONS: &str = "genera un análisis claro y profesional en un tono natural, como un informe objetivo sin saludos ni referencias personales como nombres de clientes. Proporciona un resumen breve de los datos clave y ofrece sugerencias prácticas integradas de forma fluida en el texto, sin usar encabezados como \"Recomendaciones:\" ni numerarlas. Si el usuario proporciona una consulta adicional, intégrala en el análisis y responde específicamente a ella. Evita usar símbolos como ** o negritas, y asegúrate de que el texto sea fácil de leer y conversacional, pero manteniendo un tono profesional.";

/// Полный текст запроса; `generated_at` попадает только в отчёт по складу
pub fn build_prompt(request: &AnalysisRequest, generated_at: NaiveDateTime) -> String {
    let mut prompt = match &request.report {
        ReportData::Ventas(report) => sales_prompt(report, &request.fecha_inicio, &request.fecha_fin),
        ReportData::Inventario(report) => inventory_prompt(report, generated_at),
    };

    if let Some(question) = request.consulta.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        let _ = write!(
            prompt,
            "\nConsulta del usuario: {}\nPor favor, incluye una respuesta clara y específica a esta consulta como parte de tu análisis.",
            question
        );
    }
    prompt
}

fn list_or_none(lines: Vec<String>) -> String {
    if lines.is_empty() {
        "Ninguno".to_string()
    } else {
        lines.join("\n")
    }
}

fn sales_prompt(report: &SalesReport, start: &str, end: &str) -> String {
    let products = report
        .productos_vendidos
        .iter()
        .map(|p| {
            format!(
                "- {}: {} unidades, Subtotal: ${}",
                p.modelo,
                p.cantidad,
                format_amount(p.subtotal)
            )
        })
        .collect();
    let payments = report
        .pedidos
        .iter()
        .map(|p| {
            format!(
                "- Cliente: {}, Método de Pago: {}, Con Factura: {}, Precio Total: ${}",
                p.client_name(),
                p.metodo_pago,
                if p.con_factura { "Sí" } else { "No" },
                format_amount(p.precio_total)
            )
        })
        .collect();

    format!(
        "Analiza el siguiente informe de ventas y {INSTRUCTIONS}\n\n\
         Período: {} - {}\n\
         Total de Ingresos: ${}\n\
         Número de Ventas: {}\n\
         Productos Vendidos:\n{}\n\
         Detalles de Pagos:\n{}\n",
        format_date(start),
        format_date(end),
        format_amount(report.total_ingresos),
        report.numero_ventas,
        list_or_none(products),
        list_or_none(payments),
    )
}

fn inventory_prompt(report: &InventoryReport, generated_at: NaiveDateTime) -> String {
    let lines = report
        .inventario
        .iter()
        .map(|i| {
            format!(
                "- {}: Disponible: {}, Reservado: {}, Valor: ${}",
                i.modelo,
                i.cantidad_disponible,
                i.cantidad_reservada,
                format_amount(i.valor)
            )
        })
        .collect();

    format!(
        "Analiza el siguiente informe de inventario y {INSTRUCTIONS}\n\n\
         Fecha de Generación: {}\n\
         Valor Total del Inventario: ${}\n\
         Número de Productos: {}\n\
         Detalles del Inventario:\n{}\n",
        generated_at.format("%-d/%-m/%Y, %H:%M"),
        format_amount(report.valor_total_inventario),
        report.numero_productos,
        list_or_none(lines),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::reports::{InventoryLine, ReportClient, ReportOrder, SoldProduct};

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 2)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    fn sales_request(consulta: Option<&str>) -> AnalysisRequest {
        AnalysisRequest {
            fecha_inicio: "2024-06-01".into(),
            fecha_fin: "2024-06-30".into(),
            report: ReportData::Ventas(SalesReport {
                total_ingresos: 2500.5,
                numero_ventas: 1,
                productos_vendidos: vec![SoldProduct {
                    modelo: "Mesa Roble".into(),
                    cantidad: 2.0,
                    subtotal: 2500.5,
                }],
                pedidos: vec![ReportOrder {
                    cliente: Some(ReportClient {
                        nombre: "Ana".into(),
                        apellido: Some("Pérez".into()),
                    }),
                    metodo_pago: "Transferencia".into(),
                    con_factura: true,
                    precio_total: 2500.5,
                    ..Default::default()
                }],
            }),
            consulta: consulta.map(str::to_string),
        }
    }

    #[test]
    fn sales_prompt_lists_period_totals_and_lines() {
        let prompt = build_prompt(&sales_request(None), at());

        assert!(prompt.starts_with("Analiza el siguiente informe de ventas"));
        assert!(prompt.contains("Período: 1/6/2024 - 30/6/2024"));
        assert!(prompt.contains("Total de Ingresos: $2.500,5"));
        assert!(prompt.contains("- Mesa Roble: 2 unidades, Subtotal: $2.500,5"));
        assert!(prompt.contains("- Cliente: Ana Pérez, Método de Pago: Transferencia, Con Factura: Sí"));
        assert!(!prompt.contains("Consulta del usuario"));
    }

    #[test]
    fn question_is_appended() {
        let prompt = build_prompt(&sales_request(Some("¿Qué modelo rinde más?")), at());
        assert!(prompt.contains("\nConsulta del usuario: ¿Qué modelo rinde más?\n"));
    }

    #[test]
    fn inventory_prompt_carries_generation_time() {
        let request = AnalysisRequest {
            fecha_inicio: "2024-06-01".into(),
            fecha_fin: "2024-06-30".into(),
            report: ReportData::Inventario(InventoryReport {
                valor_total_inventario: 900.0,
                numero_productos: 1,
                inventario: vec![InventoryLine {
                    modelo: "Silla".into(),
                    cantidad_disponible: 3.0,
                    cantidad_reservada: 1.0,
                    valor: 900.0,
                }],
            }),
            consulta: Some("   ".into()),
        };

        let prompt = build_prompt(&request, at());

        assert!(prompt.contains("Fecha de Generación: 2/7/2024, 09:30"));
        assert!(prompt.contains("- Silla: Disponible: 3, Reservado: 1, Valor: $900"));
        assert!(!prompt.contains("Consulta del usuario"));
    }

    #[test]
    fn empty_lists_read_ninguno() {
        let request = AnalysisRequest {
            report: ReportData::Ventas(SalesReport::default()),
            ..sales_request(None)
        };
        let prompt = build_prompt(&request, at());
        assert!(prompt.contains("Productos Vendidos:\nNinguno\n"));
        assert!(prompt.contains("Detalles de Pagos:\nNinguno\n"));
    }
}
