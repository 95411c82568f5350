//! Подтверждение приёмки
//!
//! Сервер переводит приёмку в "Recibido", заказ в "Recibida" и
//! пополняет склад, поэтому приёмки и заказы перечитываются одним пакетом.

use crate::shared::crud::{perform_and_refresh, ActionApi, CrudError, PendingLoad};
use crate::shared::notify::Notify;
use contracts::domain::a007_purchase_order::PurchaseOrder;
use contracts::domain::a008_receiving::{can_confirm, confirm_path, Receiving};

pub const CONFIRMED_MESSAGE: &str = "Recibimiento confirmado y orden de compra marcada como recibida";

/// Подтвердить приёмку; если подтверждение недоступно, запрос не отправляется
pub async fn confirm_receiving<A, N>(
    api: &A,
    notices: &N,
    receiving: &Receiving,
    orders: &[PurchaseOrder],
    refresh: impl FnOnce() -> Vec<PendingLoad>,
) -> Result<(), CrudError>
where
    A: ActionApi,
    N: Notify,
{
    if !can_confirm(receiving, orders) {
        log::warn!("receiving {} cannot be confirmed", receiving.id);
        return Err(CrudError::NotAllowed(
            "El recibimiento ya fue confirmado o la orden ya está recibida.".into(),
        ));
    }
    perform_and_refresh(
        notices,
        api.post_action(&confirm_path(&receiving.id), None),
        CONFIRMED_MESSAGE,
        refresh,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::api::testing::RecordingActions;
    use crate::shared::crud::ApiError;
    use crate::shared::notify::testing::RecordingNotify;
    use crate::shared::notify::NoticeLevel;
    use contracts::domain::a007_purchase_order::OrderStatus;
    use contracts::domain::a008_receiving::RECEIVED;
    use contracts::domain::common::{EntityRef, RecordId};
    use futures::executor::block_on;

    fn order(estado: OrderStatus) -> PurchaseOrder {
        PurchaseOrder {
            id: RecordId::new("o1"),
            estado,
            ..PurchaseOrder::default()
        }
    }

    fn receiving(estado: Option<&str>) -> Receiving {
        Receiving {
            id: RecordId::new("r1"),
            orden_compra: Some(EntityRef::Id(RecordId::new("o1"))),
            estado: estado.map(str::to_string),
            ..Receiving::default()
        }
    }

    #[test]
    fn open_receiving_posts_confirmation() {
        let api = RecordingActions::default();
        let notices = RecordingNotify::default();

        block_on(confirm_receiving(
            &api,
            &notices,
            &receiving(None),
            &[order(OrderStatus::EnProceso)],
            Vec::new,
        ))
        .unwrap();

        assert_eq!(api.paths(), vec!["POST /recibimientos/r1/confirmar"]);
        assert_eq!(api.last_body(), None);
        assert_eq!(notices.last(), Some((NoticeLevel::Success, CONFIRMED_MESSAGE.to_string())));
    }

    #[test]
    fn terminal_states_never_send_request() {
        let api = RecordingActions::default();
        let notices = RecordingNotify::default();

        let done = block_on(confirm_receiving(
            &api,
            &notices,
            &receiving(Some(RECEIVED)),
            &[order(OrderStatus::Pendiente)],
            Vec::new,
        ));
        assert!(matches!(done, Err(CrudError::NotAllowed(_))));

        let parent_received = block_on(confirm_receiving(
            &api,
            &notices,
            &receiving(None),
            &[order(OrderStatus::Recibida)],
            Vec::new,
        ));
        assert!(matches!(parent_received, Err(CrudError::NotAllowed(_))));

        assert!(api.paths().is_empty());
        assert!(notices.levels().is_empty());
    }

    #[test]
    fn server_failure_surfaces_message() {
        let api = RecordingActions::failing(ApiError::server(409, r#"{"message":"Orden ya recibida"}"#));
        let notices = RecordingNotify::default();

        let result = block_on(confirm_receiving(
            &api,
            &notices,
            &receiving(None),
            &[order(OrderStatus::Pendiente)],
            Vec::new,
        ));

        assert!(matches!(result, Err(CrudError::Api(_))));
        assert_eq!(notices.last(), Some((NoticeLevel::Error, "Error: Orden ya recibida".to_string())));
    }
}
