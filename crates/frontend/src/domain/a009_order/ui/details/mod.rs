use crate::shared::editor::EditorState;
use crate::shared::form_fields::{bind_text, CheckboxField, FormCard, NumberField, SelectField, TextField};
use crate::shared::format::{date_input_value, format_money};
use crate::shared::line_items;
use contracts::domain::a003_client::Client;
use contracts::domain::a005_model::Model;
use contracts::domain::a009_order::{
    CustomerOrder, CustomerOrderDto, DeliveryStatus, OrderItemDto, PaymentMethod, PaymentStatus,
};
use contracts::domain::common::{Entity, RecordId};
use leptos::prelude::*;
use thaw::*;

fn enum_options(values: impl Iterator<Item = &'static str>) -> Vec<(String, String)> {
    values.map(|v| (v.to_string(), v.to_string())).collect()
}

/// Форма заказа клиента
///
/// У существующего заказа меняются только статусы оплаты и доставки.
#[component]
pub fn CustomerOrderDetails(
    editor: EditorState<CustomerOrderDto>,
    #[prop(into)] clients: Signal<Vec<Client>>,
    #[prop(into)] models: Signal<Vec<Model>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let form = editor.form;
    let locked = Signal::derive(move || editor.is_edit_mode());

    let client_options = Signal::derive(move || {
        clients
            .get()
            .into_iter()
            .map(|c| (c.id.to_string(), c.person_name()))
            .collect::<Vec<_>>()
    });
    let client = Signal::derive(move || {
        form.with(|f| f.cliente.as_ref().map(RecordId::to_string).unwrap_or_default())
    });
    let (fecha, set_fecha) = bind_text(form, |f| date_input_value(&f.fecha_entrega), |f, v| f.fecha_entrega = v);
    let pago = Signal::derive(move || form.with(|f| f.estado_pago.as_str().to_string()));
    let entrega = Signal::derive(move || form.with(|f| f.estado_entrega.as_str().to_string()));
    let metodo = Signal::derive(move || form.with(|f| f.metodo_pago.as_str().to_string()));
    let factura = Signal::derive(move || form.with(|f| f.con_factura));
    let total = Signal::derive(move || form.with(CustomerOrderDto::estimated_total));
    let item_count = move || form.with(|f| f.modelos.len());

    view! {
        <FormCard
            title=Signal::derive(move || editor.title(CustomerOrder::element_name()))
            saving=editor.saving
            on_submit=on_submit
            on_cancel=Callback::new(move |_| editor.close())
        >
            <div class="form-grid">
                <SelectField
                    label="Cliente"
                    value=client
                    options=client_options
                    placeholder="Seleccione un cliente"
                    disabled=locked
                    on_change=Callback::new(move |v: String| form.update(|f| {
                        f.cliente = (!v.is_empty()).then(|| RecordId::new(v));
                    }))
                />
                <TextField label="Fecha de entrega" value=fecha on_input=set_fecha input_type="date" disabled=locked />
                <SelectField
                    label="Estado de pago"
                    value=pago
                    options=Signal::derive(|| enum_options(PaymentStatus::ALL.iter().map(PaymentStatus::as_str)))
                    on_change=Callback::new(move |v: String| form.update(|f| {
                        if let Some(s) = PaymentStatus::parse(&v) {
                            f.estado_pago = s;
                        }
                    }))
                />
                <SelectField
                    label="Estado de entrega"
                    value=entrega
                    options=Signal::derive(|| enum_options(DeliveryStatus::ALL.iter().map(DeliveryStatus::as_str)))
                    on_change=Callback::new(move |v: String| form.update(|f| {
                        if let Some(s) = DeliveryStatus::parse(&v) {
                            f.estado_entrega = s;
                        }
                    }))
                />
                <SelectField
                    label="Método de pago"
                    value=metodo
                    options=Signal::derive(|| enum_options(PaymentMethod::ALL.iter().map(PaymentMethod::as_str)))
                    disabled=locked
                    on_change=Callback::new(move |v: String| form.update(|f| {
                        if let Some(m) = PaymentMethod::parse(&v) {
                            f.metodo_pago = m;
                        }
                    }))
                />
                <CheckboxField
                    label="Con factura"
                    checked=factura
                    disabled=locked
                    on_change=Callback::new(move |v: bool| form.update(|f| f.con_factura = v))
                />
            </div>

            <div class="line-items">
                <h4>"Modelos"</h4>
                {move || {
                    (0..item_count())
                        .map(|index| view! { <OrderItemRow form=form index=index models=models locked=locked /> })
                        .collect_view()
                }}
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=locked
                    on_click=move |_| form.update(|f| line_items::add(&mut f.modelos, OrderItemDto::default()))
                >
                    "Agregar modelo"
                </Button>
                <div class="line-items__total">
                    "Total estimado: " {move || format_money(total.get())}
                </div>
            </div>
        </FormCard>
    }
}

#[component]
fn OrderItemRow(
    form: RwSignal<CustomerOrderDto>,
    index: usize,
    models: Signal<Vec<Model>>,
    locked: Signal<bool>,
) -> impl IntoView {
    let item = move || form.with(|f| f.modelos.get(index).cloned().unwrap_or_default());
    let options = Signal::derive(move || {
        models
            .get()
            .into_iter()
            .map(|m| (m.id.to_string(), m.nombre))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="line-items__row">
            <SelectField
                label="Modelo"
                value=Signal::derive(move || item().modelo.map(|id| id.to_string()).unwrap_or_default())
                options=options
                placeholder="Seleccione un modelo"
                disabled=locked
                on_change=Callback::new(move |v: String| {
                    let all = models.get_untracked();
                    let id = (!v.is_empty()).then(|| RecordId::new(v));
                    form.update(|f| {
                        line_items::update_at(&mut f.modelos, index, |m| m.pick_model(id, &all));
                    })
                })
            />
            <NumberField
                label="Cantidad"
                value=Signal::derive(move || item().cantidad as f64)
                step="1"
                disabled=locked
                on_input=Callback::new(move |v: f64| form.update(|f| {
                    line_items::update_at(&mut f.modelos, index, |m| m.cantidad = v.max(0.0).round() as u32);
                }))
            />
            <NumberField
                label="Precio unitario"
                value=Signal::derive(move || item().precio_unitario)
                on_input=Callback::new(|_| {})
                disabled=true
            />
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=locked
                on_click=move |_| form.update(|f| {
                    line_items::remove_at(&mut f.modelos, index);
                })
            >
                "Quitar"
            </Button>
        </div>
    }
}
