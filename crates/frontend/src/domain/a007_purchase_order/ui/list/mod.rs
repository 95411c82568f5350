pub mod row;

use self::row::{status_filters, PurchaseOrderRow};
use super::details::PurchaseOrderDetails;
use crate::shared::crud::{load_screen, screen_controller, use_request_guard, EntityStore, ScreenController};
use crate::shared::editor::{delete_with_confirm, EditorState};
use crate::shared::format::{format_date, format_money};
use crate::shared::list_toolbar::{EmptyState, ListToolbar, RowActions, SortHeader};
use crate::shared::list_utils::{empty_message, filter_sort, highlight_matches, ListQuery};
use crate::shared::notify::use_notices;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a007_purchase_order::{OrderStatus, PurchaseOrder, PurchaseOrderDto};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn status_class(order: &PurchaseOrder) -> &'static str {
    match order.estado {
        OrderStatus::Recibida => "badge badge--success",
        OrderStatus::EnProceso => "badge badge--info",
        OrderStatus::Pendiente => "badge badge--warning",
    }
}

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let notices = use_notices();
    let guard = use_request_guard();
    let orders: ScreenController<PurchaseOrder> = screen_controller(notices, guard.clone());
    let suppliers: ScreenController<Supplier> = screen_controller(notices, guard);
    let store = *orders.store();
    let supplier_store = *suppliers.store();
    let editor = EditorState::<PurchaseOrderDto>::new();
    let query = RwSignal::new(ListQuery::sorted_by("fecha", false));

    let rows = Memo::new(move |_| {
        let all: Vec<PurchaseOrderRow> = supplier_store.with(|sup| {
            store.with(|s| s.iter().map(|o| PurchaseOrderRow::build(o, sup)).collect())
        });
        query.with(|q| filter_sort(&all, q))
    });
    let supplier_list = Signal::derive(move || supplier_store.with(EntityStore::items));
    let total = Signal::derive(move || store.with(EntityStore::len));
    let empty = Signal::derive(move || empty_message(store.with(EntityStore::is_loaded), total.get(), rows.with(Vec::len)));

    {
        let (orders, suppliers) = (orders.clone(), suppliers.clone());
        spawn_local(async move {
            let _ = load_screen(&notices, vec![orders.prepare_load(), suppliers.prepare_load()]).await;
        });
    }

    let on_submit = {
        let ctl = orders.clone();
        Callback::new(move |_| editor.submit(ctl.clone()))
    };

    view! {
        <PageFrame page_id=format!("{}--list", PurchaseOrder::full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Órdenes de Compra"</h1>
                    <span class="badge badge--primary">{move || total.get()}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.start_new()>
                        "Nueva orden"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || editor.open.get()>
                    <PurchaseOrderDetails editor=editor suppliers=supplier_list on_submit=on_submit />
                </Show>

                <ListToolbar
                    query=query
                    sort_options=vec![("fecha", "Fecha"), ("proveedor", "Proveedor"), ("precioTotal", "Precio total")]
                    categories=Signal::derive(status_filters)
                    category_label="Estado"
                    search_placeholder="Buscar por proveedor o estado..."
                />

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortHeader label="Proveedor" field="proveedor" query=query />
                            <SortHeader label="Fecha" field="fecha" query=query />
                            <TableHeaderCell>"Estado"</TableHeaderCell>
                            <TableHeaderCell>"Materiales"</TableHeaderCell>
                            <SortHeader label="Total" field="precioTotal" query=query />
                            <TableHeaderCell>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = query.with(|q| q.search.clone());
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let order = row.order;
                                    let lines = order
                                        .detalles
                                        .iter()
                                        .map(|d| format!("{} ({} {})", d.nombre, d.cantidad, d.unidad_medida))
                                        .collect::<Vec<_>>()
                                        .join(", ");
                                    let class = status_class(&order);
                                    let supplier = highlight_matches(&row.supplier_name, &search);
                                    let fecha = format_date(&order.fecha);
                                    let estado = highlight_matches(order.estado.as_str(), &search);
                                    let total = format_money(row.total);
                                    let for_edit = order.clone();
                                    let for_delete = order;
                                    let ctl = orders.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{supplier}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{fecha}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=class>{estado}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{lines}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                                            <RowActions
                                                on_edit=Callback::new(move |_| editor.start_edit(&for_edit))
                                                on_delete=Callback::new(move |_| delete_with_confirm(ctl.clone(), &for_delete))
                                            />
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
                <EmptyState message=empty />
            </div>
        </PageFrame>
    }
}
