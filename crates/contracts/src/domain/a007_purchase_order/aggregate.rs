use crate::domain::a001_supplier::{CatalogItem, Supplier};
use crate::domain::common::{
    lenient,
    validation::{blank, parse_iso_date},
    EditableEntity, Entity, EntityRef, FormPayload, RecordId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Состояние заказа поставщику. Переходы выполняет сервер.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pendiente,
    #[serde(rename = "En proceso")]
    EnProceso,
    Recibida,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pendiente,
        OrderStatus::EnProceso,
        OrderStatus::Recibida,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pendiente => "Pendiente",
            OrderStatus::EnProceso => "En proceso",
            OrderStatus::Recibida => "Recibida",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Терминальное состояние: заказ полностью принят
    pub fn is_received(&self) -> bool {
        matches!(self, OrderStatus::Recibida)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Строка заказа (материал из каталога поставщика)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderLine {
    pub nombre: String,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub cantidad: u32,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub precio_unitario: f64,
    pub unidad_medida: String,
}

impl Default for OrderLine {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            cantidad: 1,
            precio_unitario: 0.0,
            unidad_medida: "unidad".into(),
        }
    }
}

impl OrderLine {
    pub fn subtotal(&self) -> f64 {
        self.cantidad as f64 * self.precio_unitario
    }

    /// Выбор материала подставляет цену и единицу из каталога
    pub fn pick_material(&mut self, nombre: &str, catalog: &[CatalogItem]) {
        let item = catalog.iter().find(|c| c.nombre == nombre);
        self.nombre = nombre.to_string();
        self.precio_unitario = item.map_or(0.0, |c| c.precio);
        self.unidad_medida = item
            .map(|c| c.unidad_medida.clone())
            .filter(|u| !blank(u))
            .unwrap_or_else(|| "unidad".into());
    }
}

pub fn lines_total(lines: &[OrderLine]) -> f64 {
    lines.iter().map(OrderLine::subtotal).sum()
}

/// Заказ материалов у поставщика (orden de compra)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseOrder {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub proveedor: Option<EntityRef<Supplier>>,
    pub fecha: String,
    pub estado: OrderStatus,
    pub detalles: Vec<OrderLine>,
}

impl PurchaseOrder {
    pub fn total(&self) -> f64 {
        lines_total(&self.detalles)
    }

    pub fn supplier_id(&self) -> Option<&RecordId> {
        self.proveedor.as_ref().map(EntityRef::id)
    }
}

impl Entity for PurchaseOrder {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> String {
        match self.proveedor.as_ref().and_then(EntityRef::populated) {
            Some(supplier) => format!("{} ({})", supplier.nombre, self.fecha_short()),
            None => format!("Orden {}", self.fecha_short()),
        }
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "ordenes"
    }

    fn element_name() -> &'static str {
        "Orden de compra"
    }

    fn list_name() -> &'static str {
        "Órdenes de compra"
    }
}

impl PurchaseOrder {
    fn fecha_short(&self) -> &str {
        self.fecha.get(..10).unwrap_or(&self.fecha)
    }
}

impl EditableEntity for PurchaseOrder {
    type Payload = PurchaseOrderDto;

    fn to_payload(&self) -> PurchaseOrderDto {
        PurchaseOrderDto {
            proveedor: self.supplier_id().cloned(),
            fecha: self.fecha_short().to_string(),
            estado: self.estado,
            detalles: self.detalles.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderDto {
    pub proveedor: Option<RecordId>,
    pub fecha: String,
    pub estado: OrderStatus,
    pub detalles: Vec<OrderLine>,
}

impl PurchaseOrderDto {
    /// Смена поставщика очищает строки: каталог у каждого свой
    pub fn set_supplier(&mut self, supplier: Option<RecordId>) {
        if self.proveedor != supplier {
            self.detalles.clear();
        }
        self.proveedor = supplier;
    }

    pub fn total(&self) -> f64 {
        lines_total(&self.detalles)
    }
}

impl FormPayload for PurchaseOrderDto {
    fn validate(&self) -> Result<(), String> {
        if self.proveedor.is_none() || parse_iso_date(&self.fecha).is_none() {
            return Err("Seleccione un proveedor y una fecha válida.".into());
        }
        if self.detalles.is_empty()
            || self
                .detalles
                .iter()
                .any(|d| blank(&d.nombre) || d.cantidad == 0)
        {
            return Err(
                "Por favor, agregue al menos un material válido con cantidad mayor a 0.".into(),
            );
        }
        Ok(())
    }
}
