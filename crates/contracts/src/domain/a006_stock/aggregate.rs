use crate::domain::a005_model::Model;
use crate::domain::common::{lenient, Entity, EntityRef, FormPayload, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Материал на складе (приходит вложенным объектом)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StockMaterial {
    pub nombre: String,
    pub unidad_medida: Option<String>,
}

/// Что лежит на складе: готовая модель или материал
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockKind {
    Model,
    Material,
    Unknown,
}

impl StockKind {
    pub fn label(&self) -> &'static str {
        match self {
            StockKind::Model => "Modelo",
            StockKind::Material => "Material",
            StockKind::Unknown => "-",
        }
    }
}

/// Складской остаток по модели или материалу
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StockItem {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub modelo: Option<EntityRef<Model>>,
    pub material: Option<StockMaterial>,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub cantidad_disponible: u32,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub cantidad_reservada: u32,
}

impl StockItem {
    pub fn kind(&self) -> StockKind {
        if self.modelo.is_some() {
            StockKind::Model
        } else if self
            .material
            .as_ref()
            .map_or(false, |m| !m.nombre.trim().is_empty())
        {
            StockKind::Material
        } else {
            StockKind::Unknown
        }
    }

    pub fn material_name(&self) -> Option<&str> {
        self.material
            .as_ref()
            .map(|m| m.nombre.as_str())
            .filter(|n| !n.trim().is_empty())
    }

    pub fn model_id(&self) -> Option<&RecordId> {
        self.modelo.as_ref().map(EntityRef::id)
    }
}

impl Entity for StockItem {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> String {
        match (&self.modelo, self.material_name()) {
            (Some(EntityRef::Populated(m)), _) => m.nombre.clone(),
            (_, Some(name)) => name.to_string(),
            _ => self.id.to_string(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "stock"
    }

    fn element_name() -> &'static str {
        "Registro de stock"
    }

    fn list_name() -> &'static str {
        "Stock"
    }
}

/// Уникальные имена материалов со склада, в порядке первого появления
pub fn unique_material_names(items: &[StockItem]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in items.iter().filter_map(StockItem::material_name) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

// ============================================================================
// Transactions
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    Entrada,
    Salida,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Entrada, TransactionType::Salida];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Entrada => "Entrada",
            TransactionType::Salida => "Salida",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const TRANSACTIONS_PATH: &str = "/stock/transacciones";

/// Движение по складу: POST /stock/transacciones
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTransactionDto {
    pub modelo: Option<RecordId>,
    pub tipo_transaccion: TransactionType,
    pub cantidad: u32,
    pub nota: String,
}

impl StockTransactionDto {
    /// Проверка с учётом текущих остатков: расход не может превышать доступное
    pub fn validate_against(&self, stock: &[StockItem]) -> Result<(), String> {
        self.validate()?;
        if self.tipo_transaccion == TransactionType::Salida {
            let available = stock
                .iter()
                .find(|item| item.model_id() == self.modelo.as_ref())
                .map(|item| item.cantidad_disponible);
            match available {
                Some(available) if available >= self.cantidad => {}
                _ => return Err("No hay suficiente stock disponible para esta salida.".into()),
            }
        }
        Ok(())
    }
}

impl FormPayload for StockTransactionDto {
    fn validate(&self) -> Result<(), String> {
        if self.modelo.is_none() {
            return Err("Por favor selecciona un modelo.".into());
        }
        if self.cantidad < 1 {
            return Err("La cantidad debe ser mayor a 0.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_stock(model: &str, qty: u32) -> StockItem {
        StockItem {
            id: RecordId::new(format!("s-{}", model)),
            modelo: Some(EntityRef::Id(RecordId::new(model))),
            cantidad_disponible: qty,
            ..StockItem::default()
        }
    }

    #[test]
    fn kind_detection() {
        assert_eq!(model_stock("m1", 1).kind(), StockKind::Model);
        let material = StockItem {
            material: Some(StockMaterial {
                nombre: "Tela".into(),
                unidad_medida: None,
            }),
            ..StockItem::default()
        };
        assert_eq!(material.kind(), StockKind::Material);
        assert_eq!(StockItem::default().kind(), StockKind::Unknown);
    }

    #[test]
    fn outgoing_cannot_exceed_available() {
        let stock = vec![model_stock("m1", 3)];
        let mut tx = StockTransactionDto {
            modelo: Some("m1".into()),
            tipo_transaccion: TransactionType::Salida,
            cantidad: 3,
            nota: String::new(),
        };
        assert!(tx.validate_against(&stock).is_ok());
        tx.cantidad = 4;
        assert_eq!(
            tx.validate_against(&stock).unwrap_err(),
            "No hay suficiente stock disponible para esta salida."
        );
        tx.tipo_transaccion = TransactionType::Entrada;
        assert!(tx.validate_against(&stock).is_ok());
        tx.modelo = Some("m2".into());
        tx.tipo_transaccion = TransactionType::Salida;
        tx.cantidad = 1;
        assert!(tx.validate_against(&stock).is_err());
    }

    #[test]
    fn requires_model_and_positive_quantity() {
        assert!(StockTransactionDto::default().validate().is_err());
        let tx = StockTransactionDto {
            modelo: Some("m1".into()),
            cantidad: 0,
            ..StockTransactionDto::default()
        };
        assert!(tx.validate().is_err());
    }

    #[test]
    fn unique_materials_keep_first_seen_order() {
        let mat = |n: &str| StockItem {
            material: Some(StockMaterial {
                nombre: n.into(),
                unidad_medida: None,
            }),
            ..StockItem::default()
        };
        let items = vec![mat("Tela"), model_stock("m1", 1), mat("Pino"), mat("Tela")];
        assert_eq!(unique_material_names(&items), vec!["Tela", "Pino"]);
    }
}
