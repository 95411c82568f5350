//! Смена статусов оплаты и доставки у существующего заказа

use crate::shared::crud::{ActionApi, ApiError, CollectionApi, CrudController, CrudError, StoreCell};
use crate::shared::notify::Notify;
use contracts::domain::a009_order::{CustomerOrder, StatusUpdateDto};
use contracts::domain::common::RecordId;

/// PUT /pedidos/:id/estado, затем статусы записи обновляются локально
pub async fn update_status<A, C, S, N>(
    actions: &A,
    ctl: &CrudController<CustomerOrder, C, S, N>,
    id: &RecordId,
    status: StatusUpdateDto,
) -> Result<(), CrudError>
where
    A: ActionApi,
    C: CollectionApi<CustomerOrder>,
    S: StoreCell<CustomerOrder>,
    N: Notify,
{
    let body = serde_json::to_value(status).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Err(e) = actions.put_action(&CustomerOrder::status_path(id), body).await {
        log::error!("status update for {} failed: {}", id, e);
        ctl.notices()
            .error(format!("Error al actualizar el estado: {}", e));
        return Err(e.into());
    }

    ctl.guard().invalidate();
    if !ctl.guard().is_disposed() {
        ctl.store().write(|s| {
            if let Some(mut order) = s.get(id).cloned() {
                order.estado_pago = status.estado_pago;
                order.estado_entrega = status.estado_entrega;
                s.upsert(order);
            }
        });
    }
    ctl.notices()
        .success("Estado del pedido actualizado correctamente");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::api::testing::RecordingActions;
    use crate::shared::crud::EntityStore;
    use crate::shared::notify::testing::RecordingNotify;
    use crate::shared::notify::NoticeLevel;
    use async_trait::async_trait;
    use contracts::domain::a009_order::{DeliveryStatus, PaymentStatus};
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct FixedOrders(Vec<CustomerOrder>);

    #[async_trait(?Send)]
    impl CollectionApi<CustomerOrder> for FixedOrders {
        async fn list(&self) -> Result<Vec<CustomerOrder>, ApiError> {
            Ok(self.0.clone())
        }

        async fn remove(&self, _id: &RecordId) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn controller() -> CrudController<CustomerOrder, FixedOrders, Rc<RefCell<EntityStore<CustomerOrder>>>, RecordingNotify> {
        let orders = vec![CustomerOrder {
            id: RecordId::new("pe1"),
            precio_total: 600.0,
            ..CustomerOrder::default()
        }];
        let ctl = CrudController::new(
            FixedOrders(orders),
            Rc::new(RefCell::new(EntityStore::new())),
            RecordingNotify::default(),
        );
        block_on(ctl.load()).unwrap();
        ctl
    }

    fn delivered() -> StatusUpdateDto {
        StatusUpdateDto {
            estado_pago: PaymentStatus::Completado,
            estado_entrega: DeliveryStatus::Entregado,
        }
    }

    #[test]
    fn success_updates_only_statuses() {
        let ctl = controller();
        let actions = RecordingActions::default();

        block_on(update_status(&actions, &ctl, &RecordId::new("pe1"), delivered())).unwrap();

        assert_eq!(actions.paths(), vec!["PUT /pedidos/pe1/estado"]);
        let order = &ctl.snapshot()[0];
        assert_eq!(order.estado_pago, PaymentStatus::Completado);
        assert_eq!(order.estado_entrega, DeliveryStatus::Entregado);
        assert_eq!(order.precio_total, 600.0);
        assert_eq!(ctl.notices().levels(), vec![NoticeLevel::Success]);
    }

    #[test]
    fn failure_keeps_record() {
        let ctl = controller();
        let actions = RecordingActions::failing(ApiError::Network("offline".into()));

        let result = block_on(update_status(&actions, &ctl, &RecordId::new("pe1"), delivered()));

        assert!(result.is_err());
        assert_eq!(ctl.snapshot()[0].estado_pago, PaymentStatus::Pendiente);
        assert_eq!(ctl.notices().levels(), vec![NoticeLevel::Error]);
    }
}
