use crate::shared::crud::EntityStore;
use crate::shared::list_utils::{cmp_date, cmp_text, Searchable, Sortable};
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a007_purchase_order::PurchaseOrder;
use contracts::domain::a008_receiving::{can_confirm, Receiving};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct ReceivingRow {
    pub receiving: Receiving,
    pub supplier_name: String,
    /// Последние 4 символа id заказа
    pub order_code: String,
    pub confirmable: bool,
}

impl ReceivingRow {
    pub fn build(
        receiving: &Receiving,
        orders: &EntityStore<PurchaseOrder>,
        suppliers: &EntityStore<Supplier>,
    ) -> Self {
        let order = receiving
            .orden_compra
            .as_ref()
            .and_then(|r| r.resolve(|id| orders.get(id)));
        let supplier_ref = order.and_then(|o| o.proveedor.as_ref());
        let supplier_name = match supplier_ref {
            Some(r) => r
                .resolve(|id| suppliers.get(id))
                .map(|s| s.nombre.clone())
                .unwrap_or_else(|| format!("Proveedor no encontrado (ID: {})", r.id())),
            None => "Desconocido".to_string(),
        };
        let order_code = receiving
            .order_id()
            .map(|id| {
                let s = id.as_str();
                s.get(s.len().saturating_sub(4)..).unwrap_or(s).to_string()
            })
            .unwrap_or_else(|| "N/A".to_string());
        Self {
            receiving: receiving.clone(),
            supplier_name,
            order_code,
            confirmable: can_confirm(receiving, &orders.items()),
        }
    }
}

impl Searchable for ReceivingRow {
    fn search_fields(&self) -> Vec<String> {
        vec![self.supplier_name.clone()]
    }
}

impl Sortable for ReceivingRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "proveedor" => cmp_text(&self.supplier_name, &other.supplier_name),
            _ => cmp_date(
                Some(self.receiving.fecha_recibimiento.as_str()),
                Some(other.receiving.fecha_recibimiento.as_str()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_sort, ListQuery};
    use contracts::domain::a007_purchase_order::OrderStatus;
    use contracts::domain::a008_receiving::RECEIVED;
    use contracts::domain::common::{EntityRef, RecordId};

    fn stores() -> (EntityStore<PurchaseOrder>, EntityStore<Supplier>) {
        let mut suppliers = EntityStore::new();
        suppliers.replace_all(vec![Supplier {
            id: RecordId::new("p1"),
            nombre: "Textiles Andinos".into(),
            ..Supplier::default()
        }]);
        let mut orders = EntityStore::new();
        orders.replace_all(vec![
            PurchaseOrder {
                id: RecordId::new("64f0aa12"),
                proveedor: Some(EntityRef::Id(RecordId::new("p1"))),
                estado: OrderStatus::EnProceso,
                ..PurchaseOrder::default()
            },
            PurchaseOrder {
                id: RecordId::new("64f0bb34"),
                proveedor: Some(EntityRef::Id(RecordId::new("p9"))),
                estado: OrderStatus::Recibida,
                ..PurchaseOrder::default()
            },
        ]);
        (orders, suppliers)
    }

    fn receiving(id: &str, order: &str, fecha: &str, estado: Option<&str>) -> Receiving {
        Receiving {
            id: RecordId::new(id),
            orden_compra: Some(EntityRef::Id(RecordId::new(order))),
            fecha_recibimiento: fecha.into(),
            estado: estado.map(str::to_string),
            ..Receiving::default()
        }
    }

    #[test]
    fn resolves_supplier_through_order() {
        let (orders, suppliers) = stores();
        let row = ReceivingRow::build(&receiving("r1", "64f0aa12", "2024-02-01", None), &orders, &suppliers);
        assert_eq!(row.supplier_name, "Textiles Andinos");
        assert_eq!(row.order_code, "aa12");
        assert!(row.confirmable);

        let missing = ReceivingRow::build(&receiving("r2", "64f0bb34", "2024-02-01", None), &orders, &suppliers);
        assert_eq!(missing.supplier_name, "Proveedor no encontrado (ID: p9)");
        assert!(!missing.confirmable);

        let orphan = ReceivingRow::build(&receiving("r3", "gone", "2024-02-01", None), &orders, &suppliers);
        assert_eq!(orphan.supplier_name, "Desconocido");
    }

    #[test]
    fn confirmed_receiving_is_not_confirmable_and_newest_first() {
        let (orders, suppliers) = stores();
        let rows: Vec<_> = [
            receiving("r1", "64f0aa12", "2024-01-05", Some(RECEIVED)),
            receiving("r2", "64f0aa12", "2024-03-05", None),
        ]
        .iter()
        .map(|r| ReceivingRow::build(r, &orders, &suppliers))
        .collect();
        assert!(!rows[0].confirmable);

        let sorted = filter_sort(&rows, &ListQuery::sorted_by("fecha", false));
        assert_eq!(sorted[0].receiving.id.as_str(), "r2");
    }
}
