//! Статистика главной страницы: пять запросов одним пакетом

use crate::shared::crud::api::get_json;
use crate::shared::crud::ApiError;
use async_trait::async_trait;
use contracts::dashboards::d001_overview::{
    ActivityEntry, DashboardStats, ModelSales, LOW_STOCK_PATH, MONTH_INCOME_PATH,
    PENDING_ORDERS_PATH, RECENT_ACTIVITY_PATH, SALES_BY_MODEL_PATH,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Источник `data` для путей статистики
#[async_trait(?Send)]
pub trait StatsApi {
    async fn fetch(&self, path: &str) -> Result<Value, ApiError>;
}

pub struct HttpStats;

#[async_trait(?Send)]
impl StatsApi for HttpStats {
    async fn fetch(&self, path: &str) -> Result<Value, ApiError> {
        Ok(get_json::<Value>(path).await?.unwrap_or(Value::Null))
    }
}

/// Число из ответа: number, числовая строка, иначе 0
fn number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Загрузить всю статистику; ошибка любого запроса отменяет результат целиком
pub async fn load_stats<A: StatsApi>(api: &A) -> Result<DashboardStats, ApiError> {
    let (pending, low_stock, income, sales, activity) = futures::try_join!(
        api.fetch(PENDING_ORDERS_PATH),
        api.fetch(LOW_STOCK_PATH),
        api.fetch(MONTH_INCOME_PATH),
        api.fetch(SALES_BY_MODEL_PATH),
        api.fetch(RECENT_ACTIVITY_PATH),
    )?;

    Ok(DashboardStats {
        pending_orders: number(&pending).max(0.0) as u64,
        low_stock: number(&low_stock).max(0.0) as u64,
        month_income: number(&income),
        sales_by_model: list::<ModelSales>(sales)?,
        recent_activity: list::<ActivityEntry>(activity)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    struct FakeStats {
        failing: Option<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeStats {
        fn new(failing: Option<&'static str>) -> Self {
            Self {
                failing,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl StatsApi for FakeStats {
        async fn fetch(&self, path: &str) -> Result<Value, ApiError> {
            self.calls.borrow_mut().push(path.to_string());
            if self.failing == Some(path) {
                return Err(ApiError::server(500, ""));
            }
            Ok(match path {
                PENDING_ORDERS_PATH => json!(4),
                LOW_STOCK_PATH => json!("2"),
                MONTH_INCOME_PATH => json!(1520.5),
                SALES_BY_MODEL_PATH => json!([{"modelo": "Mesa", "cantidad": 3}]),
                RECENT_ACTIVITY_PATH => json!([{"tipo": "Pedido", "descripcion": "Nuevo pedido", "fecha": "2024-06-01T10:00:00Z"}]),
                _ => Value::Null,
            })
        }
    }

    #[test]
    fn all_five_requests_build_stats() {
        let api = FakeStats::new(None);
        let stats = block_on(load_stats(&api)).unwrap();

        assert_eq!(api.calls.borrow().len(), 5);
        assert_eq!(stats.pending_orders, 4);
        assert_eq!(stats.low_stock, 2);
        assert_eq!(stats.month_income, 1520.5);
        assert_eq!(stats.sales_by_model[0].modelo, "Mesa");
        assert_eq!(stats.recent_activity[0].tipo, "Pedido");
    }

    #[test]
    fn one_failure_fails_the_batch() {
        let api = FakeStats::new(Some(SALES_BY_MODEL_PATH));
        assert!(block_on(load_stats(&api)).is_err());
    }
}
