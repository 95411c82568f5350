pub mod row;

use self::row::{payment_filters, CustomerOrderRow};
use super::details::CustomerOrderDetails;
use super::status::update_status;
use crate::shared::crud::{load_batch, screen_controller, use_request_guard, EntityStore, HttpClient, ScreenController};
use crate::shared::editor::{delete_with_confirm, EditorState};
use crate::shared::format::{format_date, format_money};
use crate::shared::list_toolbar::{EmptyState, ListToolbar, RowActions, SortHeader};
use crate::shared::list_utils::{empty_message, filter_sort, highlight_matches, ListQuery};
use crate::shared::notify::{use_notices, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_client::Client;
use contracts::domain::a005_model::Model;
use contracts::domain::a009_order::{CustomerOrder, CustomerOrderDto};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CustomerOrderList() -> impl IntoView {
    let notices = use_notices();
    let guard = use_request_guard();
    let orders: ScreenController<CustomerOrder> = screen_controller(notices, guard.clone());
    let clients: ScreenController<Client> = screen_controller(notices, guard.clone());
    let models: ScreenController<Model> = screen_controller(notices, guard);
    let store = *orders.store();
    let client_store = *clients.store();
    let model_store = *models.store();
    let editor = EditorState::<CustomerOrderDto>::new();
    let query = RwSignal::new(ListQuery::sorted_by("cliente", true));

    let rows = Memo::new(move |_| {
        let all: Vec<CustomerOrderRow> = client_store.with(|c| {
            model_store.with(|m| store.with(|s| s.iter().map(|o| CustomerOrderRow::build(o, c, m)).collect()))
        });
        query.with(|q| filter_sort(&all, q))
    });
    let client_list = Signal::derive(move || client_store.with(EntityStore::items));
    let model_list = Signal::derive(move || model_store.with(EntityStore::items));
    let total = Signal::derive(move || store.with(EntityStore::len));
    let empty = Signal::derive(move || empty_message(store.with(EntityStore::is_loaded), total.get(), rows.with(Vec::len)));

    {
        let loads = vec![orders.prepare_load(), clients.prepare_load(), models.prepare_load()];
        spawn_local(async move {
            match load_batch(loads).await {
                Ok(()) => {
                    if store.with_untracked(EntityStore::is_empty) {
                        notices.warning("No hay pedidos registrados. Crea uno para comenzar.");
                    }
                    if client_store.with_untracked(EntityStore::is_empty) {
                        notices.error("No hay clientes registrados. Registra un cliente primero.");
                    }
                    if model_store.with_untracked(EntityStore::is_empty) {
                        notices.error("No hay modelos registrados. Registra un modelo primero.");
                    }
                }
                Err(e) => {
                    log::error!("orders load failed: {}", e);
                    notices.error("Error al cargar pedidos, clientes o modelos. Verifica el servidor.");
                }
            }
        });
    }

    // у существующего заказа отправляются только статусы
    let on_submit = {
        let ctl = orders.clone();
        Callback::new(move |_| match editor.editing.get_untracked() {
            None => editor.submit(ctl.clone()),
            Some(id) => {
                if editor.saving.get_untracked() {
                    return;
                }
                editor.saving.set(true);
                let status = editor.form.with_untracked(CustomerOrderDto::status_update);
                let ctl = ctl.clone();
                spawn_local(async move {
                    if update_status(&HttpClient, &ctl, &id, status).await.is_ok() {
                        editor.close();
                    }
                    editor.saving.try_set(false);
                });
            }
        })
    };

    view! {
        <PageFrame page_id=format!("{}--list", CustomerOrder::full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestión de Pedidos y Pagos"</h1>
                    <span class="badge badge--primary">{move || total.get()}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.start_new()>
                        "Nuevo pedido"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || editor.open.get()>
                    <CustomerOrderDetails editor=editor clients=client_list models=model_list on_submit=on_submit />
                </Show>

                <ListToolbar
                    query=query
                    sort_options=vec![("cliente", "Cliente"), ("fechaEntrega", "Fecha de entrega"), ("precioTotal", "Precio total")]
                    categories=Signal::derive(payment_filters)
                    category_label="Estado de pago"
                    search_placeholder="Buscar por cliente, fecha, modelo o total..."
                />

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortHeader label="Cliente" field="cliente" query=query />
                            <SortHeader label="Fecha de entrega" field="fechaEntrega" query=query />
                            <TableHeaderCell>"Modelos"</TableHeaderCell>
                            <TableHeaderCell>"Cantidades"</TableHeaderCell>
                            <TableHeaderCell>"Precio unitario"</TableHeaderCell>
                            <SortHeader label="Precio total" field="precioTotal" query=query />
                            <TableHeaderCell>"Estado de pago"</TableHeaderCell>
                            <TableHeaderCell>"Estado de entrega"</TableHeaderCell>
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
                                    let stacked = |values: Vec<String>| {
                                        if values.is_empty() {
                                            view! { <span>"-"</span> }.into_any()
                                        } else {
                                            values.into_iter().map(|v| view! { <div>{v}</div> }).collect_view().into_any()
                                        }
                                    };
                                    let names = if row.items.is_empty() {
                                        view! { <span>"No hay modelos"</span> }.into_any()
                                    } else {
                                        row.items
                                            .iter()
                                            .map(|i| view! { <div>{highlight_matches(&i.model_name, &search)}</div> })
                                            .collect_view()
                                            .into_any()
                                    };
                                    let quantities = stacked(row.items.iter().map(|i| i.cantidad.to_string()).collect());
                                    let prices = stacked(row.items.iter().map(|i| format_money(i.precio)).collect());
                                    let client = highlight_matches(&row.client_name, &search);
                                    let entrega = format_date(&order.fecha_entrega);
                                    let total = format_money(order.precio_total);
                                    let pago = order.estado_pago.as_str();
                                    let estado_entrega = order.estado_entrega.as_str();
                                    let for_edit = order.clone();
                                    let for_delete = order;
                                    let ctl = orders.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{client}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{entrega}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{names}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{quantities}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{prices}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{pago}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{estado_entrega}</TableCellLayout></TableCell>
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
