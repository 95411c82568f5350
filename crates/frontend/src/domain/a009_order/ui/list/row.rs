use crate::shared::crud::EntityStore;
use crate::shared::format::format_date;
use crate::shared::list_utils::{cmp_date, cmp_num, cmp_text, Searchable, Sortable};
use contracts::domain::a003_client::Client;
use contracts::domain::a005_model::Model;
use contracts::domain::a009_order::{CustomerOrder, PaymentStatus};
use std::cmp::Ordering;

/// Строка заказа: модель, количество, цена продажи
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLine {
    pub model_name: String,
    pub cantidad: u32,
    pub precio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerOrderRow {
    pub order: CustomerOrder,
    pub client_name: String,
    pub items: Vec<ItemLine>,
}

impl CustomerOrderRow {
    pub fn build(order: &CustomerOrder, clients: &EntityStore<Client>, models: &EntityStore<Model>) -> Self {
        let client_name = order
            .cliente
            .as_ref()
            .and_then(|r| r.resolve(|id| clients.get(id)))
            .map(Client::person_name)
            .unwrap_or_else(|| "Desconocido".to_string());
        let items = order
            .modelos
            .iter()
            .map(|item| {
                let model = item.modelo.as_ref().and_then(|r| r.resolve(|id| models.get(id)));
                ItemLine {
                    model_name: model.map_or_else(|| "Desconocido".to_string(), |m| m.nombre.clone()),
                    cantidad: item.cantidad,
                    precio: model.map_or(item.precio_unitario, |m| m.precio_venta),
                }
            })
            .collect();
        Self {
            order: order.clone(),
            client_name,
            items,
        }
    }
}

impl Searchable for CustomerOrderRow {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.client_name.clone(),
            format_date(&self.order.fecha_entrega),
            self.order.precio_total.to_string(),
        ];
        fields.extend(self.items.iter().map(|i| i.model_name.clone()));
        fields
    }

    fn matches_category(&self, category: &str) -> bool {
        self.order.estado_pago.as_str() == category
    }
}

impl Sortable for CustomerOrderRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "fechaEntrega" => cmp_date(
                Some(self.order.fecha_entrega.as_str()),
                Some(other.order.fecha_entrega.as_str()),
            ),
            "precioTotal" => cmp_num(self.order.precio_total, other.order.precio_total),
            _ => cmp_text(&self.client_name, &other.client_name),
        }
    }
}

pub fn payment_filters() -> Vec<(String, String)> {
    PaymentStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_sort, ListQuery};
    use contracts::domain::a009_order::OrderItem;
    use contracts::domain::common::{EntityRef, RecordId};

    fn stores() -> (EntityStore<Client>, EntityStore<Model>) {
        let mut clients = EntityStore::new();
        clients.replace_all(vec![Client {
            id: RecordId::new("c1"),
            nombre: "Rosa".into(),
            apellido: Some("Pérez".into()),
            ..Client::default()
        }]);
        let mut models = EntityStore::new();
        models.replace_all(vec![Model {
            id: RecordId::new("m1"),
            nombre: "Mesa Roble".into(),
            precio_venta: 300.0,
            ..Model::default()
        }]);
        (clients, models)
    }

    fn order(id: &str, client: &str, fecha: &str, pago: PaymentStatus, total: f64) -> CustomerOrder {
        CustomerOrder {
            id: RecordId::new(id),
            cliente: Some(EntityRef::Id(RecordId::new(client))),
            fecha_entrega: fecha.into(),
            estado_pago: pago,
            modelos: vec![OrderItem {
                modelo: Some(EntityRef::Id(RecordId::new("m1"))),
                cantidad: 2,
                precio_unitario: 0.0,
            }],
            precio_total: total,
            ..CustomerOrder::default()
        }
    }

    #[test]
    fn resolves_client_and_models() {
        let (clients, models) = stores();
        let row = CustomerOrderRow::build(&order("p1", "c1", "2024-06-10", PaymentStatus::Pendiente, 600.0), &clients, &models);
        assert_eq!(row.client_name, "Rosa Pérez");
        assert_eq!(row.items[0].model_name, "Mesa Roble");
        assert_eq!(row.items[0].precio, 300.0);
        assert!(row.matches_filter("roble"));
        assert!(row.matches_filter("10/06/2024"));
        assert!(row.matches_filter("600"));
    }

    #[test]
    fn payment_filter_and_total_sort() {
        let (clients, models) = stores();
        let rows: Vec<_> = [
            order("p1", "c1", "2024-06-10", PaymentStatus::Pendiente, 600.0),
            order("p2", "zz", "2024-05-01", PaymentStatus::Completado, 150.0),
            order("p3", "c1", "2024-07-01", PaymentStatus::Pendiente, 900.0),
        ]
        .iter()
        .map(|o| CustomerOrderRow::build(o, &clients, &models))
        .collect();

        let mut query = ListQuery::sorted_by("precioTotal", false);
        query.category = "Pendiente".into();
        let ids: Vec<_> = filter_sort(&rows, &query).iter().map(|r| r.order.id.to_string()).collect();
        assert_eq!(ids, vec!["p3", "p1"]);
        assert_eq!(rows[1].client_name, "Desconocido");
    }
}
