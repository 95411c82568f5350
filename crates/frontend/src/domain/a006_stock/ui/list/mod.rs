pub mod row;

use self::row::{kind_filters, StockRow};
use super::transaction::StockTransactionForm;
use crate::shared::crud::{load_batch, screen_controller, use_request_guard, EntityStore, ScreenController};
use crate::shared::editor::delete_with_confirm;
use crate::shared::format::format_money;
use crate::shared::list_toolbar::{EmptyState, ListToolbar, SortHeader, StaleNotice};
use crate::shared::list_utils::{empty_message, filter_sort, highlight_matches, ListQuery};
use crate::shared::notify::{use_notices, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_model::Model;
use contracts::domain::a006_stock::StockItem;
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn StockList() -> impl IntoView {
    let notices = use_notices();
    let guard = use_request_guard();
    let stock: ScreenController<StockItem> = screen_controller(notices, guard.clone());
    let models: ScreenController<Model> = screen_controller(notices, guard);
    let store = *stock.store();
    let model_store = *models.store();
    let query = RwSignal::new(ListQuery::sorted_by("nombre", true));

    let rows = Memo::new(move |_| {
        let all: Vec<StockRow> =
            model_store.with(|m| store.with(|s| s.iter().map(|i| StockRow::build(i, m)).collect()));
        query.with(|q| filter_sort(&all, q))
    });
    let model_list = Signal::derive(move || model_store.with(EntityStore::items));
    let stock_list = Signal::derive(move || store.with(EntityStore::items));
    let total = Signal::derive(move || store.with(EntityStore::len));
    let empty = Signal::derive(move || empty_message(store.with(EntityStore::is_loaded), total.get(), rows.with(Vec::len)));

    {
        let (stock, models) = (stock.clone(), models.clone());
        spawn_local(async move {
            match load_batch(vec![stock.prepare_load(), models.prepare_load()]).await {
                Ok(()) => {
                    if model_store.with_untracked(EntityStore::is_empty) {
                        notices.error("No hay modelos registrados. Crea uno primero.");
                    } else if store.with_untracked(EntityStore::is_empty) {
                        notices.warning(
                            "No hay stock registrado. Agrega producción o confirma una orden de compra.",
                        );
                    }
                }
                Err(e) => {
                    log::error!("stock load failed: {}", e);
                    notices.error("Error al cargar stock o modelos. Verifica el servidor.");
                }
            }
        });
    }

    view! {
        <PageFrame page_id=format!("{}--list", StockItem::full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestión de Stock"</h1>
                    <span class="badge badge--primary">{move || total.get()}</span>
                </div>
            </div>

            <div class="page__content">
                <StockTransactionForm models=model_list stock=stock_list stock_ctl=stock.clone() />

                <ListToolbar
                    query=query
                    sort_options=vec![
                        ("nombre", "Nombre"),
                        ("precioVenta", "Precio de venta"),
                        ("cantidadDisponible", "Cantidad disponible"),
                        ("costoProduccion", "Costo de producción"),
                    ]
                    categories=Signal::derive(kind_filters)
                    category_label="Tipo"
                    search_placeholder="Buscar por nombre o descripción..."
                />

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Tipo"</TableHeaderCell>
                            <SortHeader label="Nombre" field="nombre" query=query />
                            <TableHeaderCell>"Descripción"</TableHeaderCell>
                            <SortHeader label="Disponible" field="cantidadDisponible" query=query />
                            <TableHeaderCell>"Reservada"</TableHeaderCell>
                            <SortHeader label="Precio venta" field="precioVenta" query=query />
                            <SortHeader label="Costo producción" field="costoProduccion" query=query />
                            <TableHeaderCell>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = query.with(|q| q.search.clone());
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let quantity = match row.unit() {
                                        Some(unit) => format!("{} {}", row.item.cantidad_disponible, unit),
                                        None => row.item.cantidad_disponible.to_string(),
                                    };
                                    let kind = row.kind().label();
                                    let name = highlight_matches(&row.name(), &search);
                                    let description = highlight_matches(&row.description(), &search);
                                    let reserved = row.item.cantidad_reservada;
                                    let sale = format_money(row.sale_price());
                                    let cost = format_money(row.production_cost());
                                    let item = row.item;
                                    let ctl = stock.clone();
                                    let on_delete = move |_| delete_with_confirm(ctl.clone(), &item);
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{kind}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{description}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{reserved}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{sale}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{cost}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_delete>
                                                        "Eliminar"
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
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
