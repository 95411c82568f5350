use crate::domain::a007_purchase_order::{OrderLine, PurchaseOrder};
use crate::domain::common::{
    validation::{blank, parse_iso_date},
    EditableEntity, Entity, EntityRef, FormPayload, RecordId,
};
use serde::{Deserialize, Serialize};

/// Статус приёмки после подтверждения
pub const RECEIVED: &str = "Recibido";

/// Приёмка материалов по заказу поставщику (recibimiento)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receiving {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub orden_compra: Option<EntityRef<PurchaseOrder>>,
    pub fecha_recibimiento: String,
    pub materiales_recibidos: Vec<OrderLine>,
    pub estado: Option<String>,
}

impl Receiving {
    pub fn order_id(&self) -> Option<&RecordId> {
        self.orden_compra.as_ref().map(EntityRef::id)
    }

    pub fn is_received(&self) -> bool {
        self.estado.as_deref() == Some(RECEIVED)
    }
}

impl Entity for Receiving {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> String {
        format!(
            "Recibimiento {}",
            self.fecha_recibimiento.get(..10).unwrap_or(&self.fecha_recibimiento)
        )
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "recibimientos"
    }

    fn element_name() -> &'static str {
        "Recibimiento"
    }

    fn list_name() -> &'static str {
        "Recibimientos"
    }
}

/// Можно ли подтвердить приёмку
///
/// Нельзя, если приёмка уже "Recibido" или родительский заказ уже "Recibida".
/// Состояние заказа берётся из развёрнутой ссылки, иначе из справочника заказов.
pub fn can_confirm(receiving: &Receiving, orders: &[PurchaseOrder]) -> bool {
    if receiving.is_received() {
        return false;
    }
    let order = receiving.orden_compra.as_ref().and_then(|r| {
        r.resolve(|id| orders.iter().find(|o| &o.id == id))
    });
    match order {
        Some(order) => !order.estado.is_received(),
        // Сиротская приёмка: подтверждать нечего
        None => false,
    }
}

/// Путь подтверждения относительно `/api`
pub fn confirm_path(id: &RecordId) -> String {
    format!("/{}/{}/confirmar", Receiving::collection_name(), id)
}

impl EditableEntity for Receiving {
    type Payload = ReceivingDto;

    fn to_payload(&self) -> ReceivingDto {
        ReceivingDto {
            orden_compra: self.order_id().cloned(),
            materiales_recibidos: self.materiales_recibidos.clone(),
            fecha_recibimiento: self
                .fecha_recibimiento
                .get(..10)
                .unwrap_or(&self.fecha_recibimiento)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingDto {
    pub orden_compra: Option<RecordId>,
    pub materiales_recibidos: Vec<OrderLine>,
    pub fecha_recibimiento: String,
}

impl ReceivingDto {
    /// Выбор заказа подставляет его строки; пустой заказ даёт одну пустую строку
    pub fn select_order(&mut self, order: Option<&PurchaseOrder>) {
        self.orden_compra = order.map(|o| o.id.clone());
        self.materiales_recibidos = match order {
            Some(order) if !order.detalles.is_empty() => order.detalles.clone(),
            Some(_) => vec![OrderLine::default()],
            None => Vec::new(),
        };
    }
}

impl FormPayload for ReceivingDto {
    fn validate(&self) -> Result<(), String> {
        if self.orden_compra.is_none() {
            return Err("Por favor, seleccione una orden de compra.".into());
        }
        if self.materiales_recibidos.is_empty()
            || self
                .materiales_recibidos
                .iter()
                .any(|d| blank(&d.nombre) || d.cantidad == 0)
        {
            return Err(
                "Por favor, agregue al menos un material válido con cantidad mayor a 0.".into(),
            );
        }
        if parse_iso_date(&self.fecha_recibimiento).is_none() {
            return Err("Indique la fecha de recibimiento.".into());
        }
        Ok(())
    }
}

/// Заказы, которые можно выбрать в форме приёмки
pub fn open_orders(orders: &[PurchaseOrder]) -> Vec<&PurchaseOrder> {
    orders.iter().filter(|o| !o.estado.is_received()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_purchase_order::OrderStatus;

    fn order(id: &str, estado: OrderStatus) -> PurchaseOrder {
        PurchaseOrder {
            id: id.into(),
            estado,
            detalles: vec![OrderLine {
                nombre: "Tela".into(),
                cantidad: 4,
                precio_unitario: 20.0,
                unidad_medida: "metro".into(),
            }],
            ..PurchaseOrder::default()
        }
    }

    fn receiving(order_id: &str, estado: Option<&str>) -> Receiving {
        Receiving {
            id: "r1".into(),
            orden_compra: Some(EntityRef::Id(order_id.into())),
            estado: estado.map(str::to_string),
            ..Receiving::default()
        }
    }

    #[test]
    fn confirm_blocked_when_parent_order_received() {
        let orders = vec![order("o1", OrderStatus::Recibida)];
        assert!(!can_confirm(&receiving("o1", None), &orders));
    }

    #[test]
    fn confirm_blocked_when_receiving_already_received() {
        let orders = vec![order("o1", OrderStatus::EnProceso)];
        assert!(!can_confirm(&receiving("o1", Some(RECEIVED)), &orders));
        assert!(can_confirm(&receiving("o1", None), &orders));
    }

    #[test]
    fn populated_order_state_wins_over_lookup() {
        let mut r = receiving("o1", None);
        r.orden_compra = Some(EntityRef::Populated(order("o1", OrderStatus::Recibida)));
        let stale = vec![order("o1", OrderStatus::Pendiente)];
        assert!(!can_confirm(&r, &stale));
    }

    #[test]
    fn orphan_receiving_cannot_be_confirmed() {
        assert!(!can_confirm(&receiving("missing", None), &[]));
    }

    #[test]
    fn selecting_order_prefills_lines_and_filters_received() {
        let orders = vec![order("o1", OrderStatus::Pendiente), order("o2", OrderStatus::Recibida)];
        let open = open_orders(&orders);
        assert_eq!(open.len(), 1);

        let mut dto = ReceivingDto::default();
        dto.select_order(open.first().copied());
        assert_eq!(dto.orden_compra, Some("o1".into()));
        assert_eq!(dto.materiales_recibidos.len(), 1);
        assert_eq!(dto.materiales_recibidos[0].precio_unitario, 20.0);

        dto.select_order(None);
        assert!(dto.materiales_recibidos.is_empty());
    }

    #[test]
    fn confirm_path_shape() {
        assert_eq!(confirm_path(&"r9".into()), "/recibimientos/r9/confirmar");
    }
}
