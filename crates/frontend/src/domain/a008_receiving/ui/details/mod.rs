use crate::shared::editor::EditorState;
use crate::shared::form_fields::{bind_text, FormCard, NumberField, SelectField, TextField};
use crate::shared::format::{date_input_value, format_date};
use crate::shared::line_items;
use contracts::domain::a007_purchase_order::{OrderLine, PurchaseOrder};
use contracts::domain::a008_receiving::{open_orders, Receiving, ReceivingDto};
use contracts::domain::common::{Entity, RecordId};
use leptos::prelude::*;
use thaw::*;

/// Варианты заказа: открытые заказы плюс уже выбранный
pub fn order_options(orders: &[PurchaseOrder], selected: Option<&RecordId>) -> Vec<(String, String)> {
    let label = |o: &PurchaseOrder| {
        let supplier = o
            .proveedor
            .as_ref()
            .and_then(|r| r.populated())
            .map(|s| s.nombre.clone())
            .unwrap_or_else(|| "Desconocido".to_string());
        format!("{} - {} ({})", supplier, format_date(&o.fecha), o.estado)
    };
    let mut options: Vec<(String, String)> = open_orders(orders)
        .into_iter()
        .map(|o| (o.id.to_string(), label(o)))
        .collect();
    if let Some(id) = selected {
        if !options.iter().any(|(v, _)| v == id.as_str()) {
            if let Some(order) = orders.iter().find(|o| &o.id == id) {
                options.insert(0, (id.to_string(), label(order)));
            }
        }
    }
    options
}

/// Форма приёмки: выбор заказа подставляет его строки
#[component]
pub fn ReceivingDetails(
    editor: EditorState<ReceivingDto>,
    #[prop(into)] orders: Signal<Vec<PurchaseOrder>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let form = editor.form;

    let options = Signal::derive(move || {
        let selected = form.with(|f| f.orden_compra.clone());
        orders.with(|all| order_options(all, selected.as_ref()))
    });
    let order_value = Signal::derive(move || {
        form.with(|f| f.orden_compra.as_ref().map(RecordId::to_string).unwrap_or_default())
    });
    let (fecha, set_fecha) = bind_text(
        form,
        |f| date_input_value(&f.fecha_recibimiento),
        |f, v| f.fecha_recibimiento = v,
    );
    let line_count = move || form.with(|f| f.materiales_recibidos.len());

    view! {
        <FormCard
            title=Signal::derive(move || editor.title(Receiving::element_name()))
            saving=editor.saving
            on_submit=on_submit
            on_cancel=Callback::new(move |_| editor.close())
        >
            <div class="form-grid">
                <SelectField
                    label="Orden de compra"
                    value=order_value
                    options=options
                    placeholder="Seleccione una orden"
                    on_change=Callback::new(move |v: String| {
                        let id = RecordId::new(v);
                        let order = orders.with_untracked(|all| all.iter().find(|o| o.id == id).cloned());
                        form.update(|f| f.select_order(order.as_ref()));
                    })
                />
                <TextField label="Fecha de recibimiento" value=fecha on_input=set_fecha input_type="date" />
            </div>

            <div class="line-items">
                <h4>"Materiales recibidos"</h4>
                {move || {
                    (0..line_count())
                        .map(|index| view! { <ReceivedLineRow form=form index=index /> })
                        .collect_view()
                }}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| form.update(|f| line_items::add(&mut f.materiales_recibidos, OrderLine::default()))
                >
                    "Agregar material"
                </Button>
            </div>
        </FormCard>
    }
}

#[component]
fn ReceivedLineRow(form: RwSignal<ReceivingDto>, index: usize) -> impl IntoView {
    let line = move || form.with(|f| f.materiales_recibidos.get(index).cloned().unwrap_or_default());
    let edit = move |f: Box<dyn FnOnce(&mut OrderLine)>| {
        form.update(|dto| {
            line_items::update_at(&mut dto.materiales_recibidos, index, f);
        })
    };

    view! {
        <div class="line-items__row">
            <TextField
                label="Material"
                value=Signal::derive(move || line().nombre)
                on_input=Callback::new(move |v: String| edit(Box::new(move |l| l.nombre = v)))
            />
            <NumberField
                label="Cantidad"
                value=Signal::derive(move || line().cantidad as f64)
                step="1"
                on_input=Callback::new(move |v: f64| edit(Box::new(move |l| l.cantidad = v.max(0.0).round() as u32)))
            />
            <TextField
                label="Unidad"
                value=Signal::derive(move || line().unidad_medida)
                on_input=Callback::new(move |v: String| edit(Box::new(move |l| l.unidad_medida = v)))
            />
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| form.update(|f| {
                    line_items::remove_at(&mut f.materiales_recibidos, index);
                })
            >
                "Quitar"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_purchase_order::OrderStatus;

    fn order(id: &str, estado: OrderStatus) -> PurchaseOrder {
        PurchaseOrder {
            id: RecordId::new(id),
            fecha: "2024-05-02".into(),
            estado,
            ..PurchaseOrder::default()
        }
    }

    #[test]
    fn received_orders_are_hidden_unless_selected() {
        let orders = vec![order("o1", OrderStatus::Pendiente), order("o2", OrderStatus::Recibida)];

        let fresh = order_options(&orders, None);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].0, "o1");
        assert!(fresh[0].1.contains("02/05/2024"));

        let editing = order_options(&orders, Some(&RecordId::new("o2")));
        let ids: Vec<_> = editing.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(ids, vec!["o2", "o1"]);
    }
}
