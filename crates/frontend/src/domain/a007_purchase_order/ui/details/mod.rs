use crate::shared::editor::EditorState;
use crate::shared::form_fields::{bind_text, FormCard, NumberField, SelectField, TextField};
use crate::shared::format::{date_input_value, format_money};
use crate::shared::line_items;
use contracts::domain::a001_supplier::{CatalogItem, Supplier};
use contracts::domain::a007_purchase_order::{OrderLine, OrderStatus, PurchaseOrder, PurchaseOrderDto};
use contracts::domain::common::{Entity, RecordId};
use leptos::prelude::*;
use thaw::*;

/// Форма заказа поставщику
///
/// Материалы выбираются из каталога выбранного поставщика; смена
/// поставщика очищает строки.
#[component]
pub fn PurchaseOrderDetails(
    editor: EditorState<PurchaseOrderDto>,
    #[prop(into)] suppliers: Signal<Vec<Supplier>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let form = editor.form;

    let supplier_options = Signal::derive(move || {
        suppliers
            .get()
            .into_iter()
            .map(|s| (s.id.to_string(), s.nombre))
            .collect::<Vec<_>>()
    });
    let catalog = Signal::derive(move || {
        let selected = form.with(|f| f.proveedor.clone());
        selected
            .and_then(|id| suppliers.with(|all| all.iter().find(|s| s.id == id).map(|s| s.catalogo.clone())))
            .unwrap_or_default()
    });
    let status_options = Signal::derive(|| {
        OrderStatus::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
            .collect::<Vec<_>>()
    });

    let supplier = Signal::derive(move || {
        form.with(|f| f.proveedor.as_ref().map(RecordId::to_string).unwrap_or_default())
    });
    let (fecha, set_fecha) = bind_text(form, |f| date_input_value(&f.fecha), |f, v| f.fecha = v);
    let estado = Signal::derive(move || form.with(|f| f.estado.as_str().to_string()));
    let total = Signal::derive(move || form.with(PurchaseOrderDto::total));
    let line_count = move || form.with(|f| f.detalles.len());
    let has_supplier = move || form.with(|f| f.proveedor.is_some());

    view! {
        <FormCard
            title=Signal::derive(move || editor.title(PurchaseOrder::element_name()))
            saving=editor.saving
            on_submit=on_submit
            on_cancel=Callback::new(move |_| editor.close())
        >
            <div class="form-grid">
                <SelectField
                    label="Proveedor"
                    value=supplier
                    options=supplier_options
                    placeholder="Seleccione un proveedor"
                    on_change=Callback::new(move |v: String| form.update(|f| {
                        f.set_supplier((!v.is_empty()).then(|| RecordId::new(v)));
                    }))
                />
                <TextField label="Fecha" value=fecha on_input=set_fecha input_type="date" />
                <SelectField
                    label="Estado"
                    value=estado
                    options=status_options
                    on_change=Callback::new(move |v: String| form.update(|f| {
                        if let Some(status) = OrderStatus::parse(&v) {
                            f.estado = status;
                        }
                    }))
                />
            </div>

            <div class="line-items">
                <h4>"Materiales"</h4>
                {move || {
                    (0..line_count())
                        .map(|index| view! { <OrderLineRow form=form index=index catalog=catalog /> })
                        .collect_view()
                }}
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || !has_supplier())
                    on_click=move |_| form.update(|f| line_items::add(&mut f.detalles, OrderLine::default()))
                >
                    "Agregar material"
                </Button>
                <div class="line-items__total">
                    "Total: " {move || format_money(total.get())}
                </div>
            </div>
        </FormCard>
    }
}

#[component]
fn OrderLineRow(form: RwSignal<PurchaseOrderDto>, index: usize, catalog: Signal<Vec<CatalogItem>>) -> impl IntoView {
    let line = move || form.with(|f| f.detalles.get(index).cloned().unwrap_or_default());

    let options = Signal::derive(move || {
        catalog
            .get()
            .into_iter()
            .map(|c| {
                let label = format!("{} ({})", c.nombre, format_money(c.precio));
                (c.nombre, label)
            })
            .collect::<Vec<_>>()
    });
    let nombre = Signal::derive(move || line().nombre);
    let cantidad = Signal::derive(move || line().cantidad as f64);
    let precio = Signal::derive(move || line().precio_unitario);
    let unidad = Signal::derive(move || line().unidad_medida);
    let subtotal = move || format_money(line().subtotal());
    // цена из каталога не редактируется
    let price_locked = move || catalog.with(|c| c.iter().any(|i| i.nombre == line().nombre));

    view! {
        <div class="line-items__row">
            <SelectField
                label="Material"
                value=nombre
                options=options
                placeholder="Seleccione material"
                on_change=Callback::new(move |v: String| {
                    let items = catalog.get_untracked();
                    form.update(|f| {
                        line_items::update_at(&mut f.detalles, index, |l| l.pick_material(&v, &items));
                    })
                })
            />
            <NumberField
                label="Cantidad"
                value=cantidad
                step="1"
                on_input=Callback::new(move |v: f64| form.update(|f| {
                    line_items::update_at(&mut f.detalles, index, |l| l.cantidad = v.max(0.0).round() as u32);
                }))
            />
            <NumberField
                label="Precio unitario"
                value=precio
                step="0.01"
                disabled=price_locked
                on_input=Callback::new(move |v: f64| form.update(|f| {
                    line_items::update_at(&mut f.detalles, index, |l| l.precio_unitario = v);
                }))
            />
            <TextField label="Unidad" value=unidad on_input=Callback::new(|_| {}) disabled=true />
            <div class="line-items__subtotal">{subtotal}</div>
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| form.update(|f| {
                    line_items::remove_at(&mut f.detalles, index);
                })
            >
                "Quitar"
            </Button>
        </div>
    }
}
