use crate::shared::crud::EntityStore;
use crate::shared::list_utils::{cmp_date, cmp_num, cmp_text, Searchable, Sortable};
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a007_purchase_order::{OrderStatus, PurchaseOrder};
use std::cmp::Ordering;

pub const UNKNOWN_SUPPLIER: &str = "Desconocido";

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrderRow {
    pub order: PurchaseOrder,
    pub supplier_name: String,
    pub total: f64,
}

impl PurchaseOrderRow {
    pub fn build(order: &PurchaseOrder, suppliers: &EntityStore<Supplier>) -> Self {
        let supplier_name = order
            .proveedor
            .as_ref()
            .and_then(|r| r.resolve(|id| suppliers.get(id)))
            .map(|s| s.nombre.clone())
            .unwrap_or_else(|| UNKNOWN_SUPPLIER.to_string());
        Self {
            order: order.clone(),
            supplier_name,
            total: order.total(),
        }
    }
}

impl Searchable for PurchaseOrderRow {
    fn search_fields(&self) -> Vec<String> {
        vec![self.supplier_name.clone(), self.order.estado.as_str().to_string()]
    }

    fn matches_category(&self, category: &str) -> bool {
        self.order.estado.as_str() == category
    }
}

impl Sortable for PurchaseOrderRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "proveedor" => cmp_text(&self.supplier_name, &other.supplier_name),
            "precioTotal" => cmp_num(self.total, other.total),
            _ => cmp_date(Some(self.order.fecha.as_str()), Some(other.order.fecha.as_str())),
        }
    }
}

pub fn status_filters() -> Vec<(String, String)> {
    OrderStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_sort, ListQuery};
    use contracts::domain::a007_purchase_order::OrderLine;
    use contracts::domain::common::{EntityRef, RecordId};

    fn suppliers() -> EntityStore<Supplier> {
        let mut store = EntityStore::new();
        store.replace_all(vec![Supplier {
            id: RecordId::new("p1"),
            nombre: "Maderas del Sur".into(),
            ..Supplier::default()
        }]);
        store
    }

    fn order(id: &str, supplier: &str, fecha: &str, estado: OrderStatus, qty: u32) -> PurchaseOrder {
        PurchaseOrder {
            id: RecordId::new(id),
            proveedor: Some(EntityRef::Id(RecordId::new(supplier))),
            fecha: fecha.into(),
            estado,
            detalles: vec![OrderLine {
                nombre: "Madera de pino".into(),
                cantidad: qty,
                precio_unitario: 10.0,
                unidad_medida: "m".into(),
            }],
        }
    }

    #[test]
    fn default_order_is_newest_first() {
        let store = suppliers();
        let rows: Vec<_> = [
            order("o1", "p1", "2024-01-10T00:00:00.000Z", OrderStatus::Pendiente, 1),
            order("o2", "p1", "2024-03-02", OrderStatus::Recibida, 2),
            order("o3", "zz", "2023-12-31", OrderStatus::Pendiente, 3),
        ]
        .iter()
        .map(|o| PurchaseOrderRow::build(o, &store))
        .collect();

        let sorted = filter_sort(&rows, &ListQuery::sorted_by("fecha", false));
        let ids: Vec<_> = sorted.iter().map(|r| r.order.id.as_str()).collect();
        assert_eq!(ids, vec!["o2", "o1", "o3"]);
        assert_eq!(sorted[2].supplier_name, UNKNOWN_SUPPLIER);
        assert_eq!(sorted[0].total, 20.0);
    }

    #[test]
    fn status_filter_and_search() {
        let store = suppliers();
        let rows: Vec<_> = [
            order("o1", "p1", "2024-01-10", OrderStatus::Pendiente, 1),
            order("o2", "p1", "2024-03-02", OrderStatus::Recibida, 2),
        ]
        .iter()
        .map(|o| PurchaseOrderRow::build(o, &store))
        .collect();

        let mut query = ListQuery::sorted_by("fecha", false);
        query.category = "Recibida".into();
        assert_eq!(filter_sort(&rows, &query).len(), 1);

        let query = ListQuery {
            search: "pendi".into(),
            ..ListQuery::sorted_by("fecha", false)
        };
        assert_eq!(filter_sort(&rows, &query)[0].order.id.as_str(), "o1");
    }
}
