use crate::domain::common::lenient;
use serde::{Deserialize, Serialize};

/// Endpoints of the overview dashboard, relative to `/api`
pub const PENDING_ORDERS_PATH: &str = "/estadisticas/ordenes-pendientes";
pub const LOW_STOCK_PATH: &str = "/estadisticas/stock-bajo";
pub const MONTH_INCOME_PATH: &str = "/estadisticas/ingresos-mes";
pub const SALES_BY_MODEL_PATH: &str = "/estadisticas/ventas-por-modelo";
pub const RECENT_ACTIVITY_PATH: &str = "/estadisticas/actividad-reciente";

/// Sold units per model for the current month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSales {
    pub modelo: String,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub cantidad: f64,
}

/// Single entry of the recent activity feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityEntry {
    pub tipo: String,
    pub descripcion: String,
    pub fecha: String,
}

/// All five statistics, applied together once every request succeeded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub pending_orders: u64,
    pub low_stock: u64,
    pub month_income: f64,
    pub sales_by_model: Vec<ModelSales>,
    pub recent_activity: Vec<ActivityEntry>,
}

impl DashboardStats {
    /// Largest value among the bars (for scaling the chart)
    pub fn max_sales(&self) -> f64 {
        self.sales_by_model
            .iter()
            .map(|s| s.cantidad)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_sales_of_empty_is_zero() {
        assert_eq!(DashboardStats::default().max_sales(), 0.0);
        let stats = DashboardStats {
            sales_by_model: vec![
                ModelSales { modelo: "Mesa".into(), cantidad: 3.0 },
                ModelSales { modelo: "Silla".into(), cantidad: 9.0 },
            ],
            ..DashboardStats::default()
        };
        assert_eq!(stats.max_sales(), 9.0);
    }
}
