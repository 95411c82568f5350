//! Движение по складу (Entrada / Salida)
//!
//! После успешной операции склад перечитывается: остатки считает сервер.

use crate::shared::crud::{
    perform_and_refresh, ActionApi, ApiError, CrudError, HttpClient, PendingLoad, ScreenController,
};
use crate::shared::form_fields::{parse_count, SelectField, TextField};
use crate::shared::notify::{use_notices, Notify};
use contracts::domain::a005_model::Model;
use contracts::domain::a006_stock::{StockItem, StockTransactionDto, TransactionType, TRANSACTIONS_PATH};
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Проверить и отправить движение; при ошибке проверки запрос не уходит
pub async fn submit_transaction<A, N>(
    api: &A,
    notices: &N,
    tx: &StockTransactionDto,
    stock: &[StockItem],
    refresh: impl FnOnce() -> Vec<PendingLoad>,
) -> Result<(), CrudError>
where
    A: ActionApi,
    N: Notify,
{
    if let Err(message) = tx.validate_against(stock) {
        notices.warning(message.clone());
        return Err(CrudError::Validation(message));
    }
    let body = serde_json::to_value(tx).map_err(|e| ApiError::Decode(e.to_string()))?;
    perform_and_refresh(
        notices,
        api.post_action(TRANSACTIONS_PATH, Some(body)),
        "Transacción realizada correctamente",
        refresh,
    )
    .await
}

fn type_label(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Entrada => "Entrada (Producción)",
        TransactionType::Salida => "Salida (Venta)",
    }
}

#[component]
pub fn StockTransactionForm(
    #[prop(into)] models: Signal<Vec<Model>>,
    #[prop(into)] stock: Signal<Vec<StockItem>>,
    /// Контроллер склада: после движения остатки перечитываются
    stock_ctl: ScreenController<StockItem>,
) -> impl IntoView {
    let notices = use_notices();
    let form = RwSignal::new(StockTransactionDto::default());
    let sending = RwSignal::new(false);

    let model_options = Signal::derive(move || {
        models
            .get()
            .into_iter()
            .map(|m| (m.id.to_string(), m.nombre))
            .collect::<Vec<_>>()
    });
    let type_options = Signal::derive(|| {
        TransactionType::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), type_label(*t).to_string()))
            .collect::<Vec<_>>()
    });

    let model_value = Signal::derive(move || {
        form.with(|f| f.modelo.as_ref().map(RecordId::to_string).unwrap_or_default())
    });
    let type_value = Signal::derive(move || form.with(|f| f.tipo_transaccion.as_str().to_string()));
    let qty_value = Signal::derive(move || {
        form.with(|f| if f.cantidad == 0 { String::new() } else { f.cantidad.to_string() })
    });
    let note_value = Signal::derive(move || form.with(|f| f.nota.clone()));

    let on_submit = move |_| {
        if sending.get_untracked() {
            return;
        }
        let tx = form.get_untracked();
        let current = stock.get_untracked();
        let ctl = stock_ctl.clone();
        sending.set(true);
        spawn_local(async move {
            let done =
                submit_transaction(&HttpClient, &notices, &tx, &current, || vec![ctl.prepare_refresh()]).await;
            if done.is_ok() {
                form.try_set(StockTransactionDto::default());
            }
            sending.try_set(false);
        });
    };

    view! {
        <div class="form-card">
            <h3 class="form-card__title">"Nueva transacción"</h3>
            <div class="form-grid">
                <SelectField
                    label="Modelo"
                    value=model_value
                    options=model_options
                    placeholder="Seleccione un modelo"
                    on_change=Callback::new(move |v: String| form.update(|f| {
                        f.modelo = (!v.is_empty()).then(|| RecordId::new(v));
                    }))
                />
                <SelectField
                    label="Tipo de transacción"
                    value=type_value
                    options=type_options
                    on_change=Callback::new(move |v: String| form.update(|f| {
                        if let Some(kind) = TransactionType::parse(&v) {
                            f.tipo_transaccion = kind;
                        }
                    }))
                />
                <TextField
                    label="Cantidad"
                    value=qty_value
                    input_type="number"
                    placeholder="Ingrese la cantidad"
                    on_input=Callback::new(move |v: String| form.update(|f| f.cantidad = parse_count(&v)))
                />
                <TextField
                    label="Nota (opcional)"
                    value=note_value
                    placeholder="Ingrese una nota (opcional)"
                    on_input=Callback::new(move |v: String| form.update(|f| f.nota = v))
                />
            </div>
            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary disabled=sending on_click=on_submit>
                    {move || if sending.get() { "Enviando..." } else { "Realizar transacción" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| form.set(StockTransactionDto::default())
                >
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
}
