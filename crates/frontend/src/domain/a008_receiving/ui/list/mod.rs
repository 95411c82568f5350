pub mod row;

use self::row::ReceivingRow;
use super::confirm::confirm_receiving;
use super::details::ReceivingDetails;
use crate::shared::crud::{
    load_screen, screen_controller, use_request_guard, EntityStore, HttpClient, ScreenController,
};
use crate::shared::editor::{delete_with_confirm, EditorState};
use crate::shared::format::format_date;
use crate::shared::list_toolbar::{EmptyState, ListToolbar, RowActions, SortHeader, StaleNotice};
use crate::shared::list_utils::{empty_message, filter_sort, highlight_matches, ListQuery};
use crate::shared::notify::use_notices;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a007_purchase_order::PurchaseOrder;
use contracts::domain::a008_receiving::{Receiving, ReceivingDto};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ReceivingList() -> impl IntoView {
    let notices = use_notices();
    let guard = use_request_guard();
    let receivings: ScreenController<Receiving> = screen_controller(notices, guard.clone());
    let orders: ScreenController<PurchaseOrder> = screen_controller(notices, guard.clone());
    let suppliers: ScreenController<Supplier> = screen_controller(notices, guard);
    let store = *receivings.store();
    let order_store = *orders.store();
    let supplier_store = *suppliers.store();
    let editor = EditorState::<ReceivingDto>::new();
    let query = RwSignal::new(ListQuery::sorted_by("fecha", false));
    let confirming = RwSignal::new(false);

    let rows = Memo::new(move |_| {
        let all: Vec<ReceivingRow> = order_store.with(|o| {
            supplier_store.with(|sup| store.with(|s| s.iter().map(|r| ReceivingRow::build(r, o, sup)).collect()))
        });
        query.with(|q| filter_sort(&all, q))
    });
    let order_list = Signal::derive(move || order_store.with(EntityStore::items));
    let total = Signal::derive(move || store.with(EntityStore::len));
    let empty = Signal::derive(move || empty_message(store.with(EntityStore::is_loaded), total.get(), rows.with(Vec::len)));

    {
        let (receivings, orders, suppliers) = (receivings.clone(), orders.clone(), suppliers.clone());
        spawn_local(async move {
            let _ = load_screen(
                &notices,
                vec![receivings.prepare_load(), orders.prepare_load(), suppliers.prepare_load()],
            )
            .await;
        });
    }

    let on_submit = {
        let ctl = receivings.clone();
        Callback::new(move |_| editor.submit(ctl.clone()))
    };

    let on_confirm = {
        let (receivings, orders) = (receivings.clone(), orders.clone());
        Callback::new(move |receiving: Receiving| {
            if confirming.get_untracked() {
                return;
            }
            confirming.set(true);
            let (receivings, orders) = (receivings.clone(), orders.clone());
            spawn_local(async move {
                let current_orders = order_store.with_untracked(EntityStore::items);
                let _ = confirm_receiving(&HttpClient, &notices, &receiving, &current_orders, || {
                    vec![receivings.prepare_refresh(), orders.prepare_refresh()]
                })
                .await;
                confirming.try_set(false);
            });
        })
    };

    view! {
        <PageFrame page_id=format!("{}--list", Receiving::full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestión de Recibimientos"</h1>
                    <span class="badge badge--primary">{move || total.get()}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.start_new()>
                        "Nuevo recibimiento"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || editor.open.get()>
                    <ReceivingDetails editor=editor orders=order_list on_submit=on_submit />
                </Show>

                <ListToolbar
                    query=query
                    sort_options=vec![("fecha", "Fecha"), ("proveedor", "Proveedor")]
                    search_placeholder="Buscar por proveedor..."
                />

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortHeader label="Proveedor" field="proveedor" query=query />
                            <SortHeader label="Fecha" field="fecha" query=query />
                            <TableHeaderCell>"Orden de compra"</TableHeaderCell>
                            <TableHeaderCell>"Materiales (cantidad)"</TableHeaderCell>
                            <TableHeaderCell>"Estado"</TableHeaderCell>
                            <TableHeaderCell>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = query.with(|q| q.search.clone());
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let r = row.receiving;
                                    let fecha = if r.fecha_recibimiento.is_empty() {
                                        "N/A".to_string()
                                    } else {
                                        format_date(&r.fecha_recibimiento)
                                    };
                                    let lines = r
                                        .materiales_recibidos
                                        .iter()
                                        .map(|d| {
                                            let line = format!("{} ({} {})", d.nombre, d.cantidad, d.unidad_medida);
                                            view! { <div>{line}</div> }
                                        })
                                        .collect_view();
                                    let estado = r.estado.clone().unwrap_or_else(|| "Pendiente".into());
                                    let confirmable = row.confirmable;
                                    let supplier = highlight_matches(&row.supplier_name, &search);
                                    let order_code = row.order_code;
                                    let for_edit = r.clone();
                                    let for_confirm = r.clone();
                                    let for_delete = r;
                                    let ctl = receivings.clone();
                                    let confirm_button = ViewFn::from(move || {
                                        let target = for_confirm.clone();
                                        view! {
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Primary
                                                disabled=Signal::derive(move || !confirmable || confirming.get())
                                                on_click=move |_| on_confirm.run(target.clone())
                                            >
                                                "Confirmar"
                                            </Button>
                                        }
                                    });
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{supplier}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{fecha}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{order_code}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{lines}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{estado}</TableCellLayout></TableCell>
                                            <RowActions
                                                on_edit=Callback::new(move |_| editor.start_edit(&for_edit))
                                                on_delete=Callback::new(move |_| delete_with_confirm(ctl.clone(), &for_delete))
                                                extra=confirm_button
                                            />
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
                <EmptyState message=empty />
                <StaleNotice stale=Signal::derive(move || store.with(EntityStore::is_stale)) />
            </div>
        </PageFrame>
    }
}
