pub mod row;

use self::row::ModelRow;
use super::details::ModelDetails;
use crate::shared::crud::{load_screen, screen_controller, use_request_guard, EntityStore, ScreenController};
use crate::shared::editor::{delete_with_confirm, EditorState};
use crate::shared::format::format_money;
use crate::shared::list_toolbar::{EmptyState, ListToolbar, RowActions, SortHeader};
use crate::shared::list_utils::{category_options, empty_message, filter_sort, highlight_matches, ListQuery};
use crate::shared::notify::use_notices;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_model::{Model, ModelDto};
use contracts::domain::a006_stock::{unique_material_names, StockItem};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ModelList() -> impl IntoView {
    let notices = use_notices();
    let guard = use_request_guard();
    let models: ScreenController<Model> = screen_controller(notices, guard.clone());
    let stock: ScreenController<StockItem> = screen_controller(notices, guard);
    let store = *models.store();
    let stock_store = *stock.store();
    let editor = EditorState::<ModelDto>::new();
    let query = RwSignal::new(ListQuery::sorted_by("nombre", true));

    let rows = Memo::new(move |_| {
        let all: Vec<ModelRow> = store.with(|s| s.iter().map(ModelRow::from).collect());
        query.with(|q| filter_sort(&all, q))
    });
    let categories =
        Signal::derive(move || store.with(|s| category_options(s.iter().map(|m| m.categoria.as_str()))));
    let materials = Signal::derive(move || stock_store.with(|s| unique_material_names(&s.items())));
    let cost = Signal::derive(move || {
        let id = editor.editing.get()?;
        store.with(|s| s.get(&id).map(|m| m.costo_produccion))
    });
    let total = Signal::derive(move || store.with(EntityStore::len));
    let empty = Signal::derive(move || empty_message(store.with(EntityStore::is_loaded), total.get(), rows.with(Vec::len)));

    {
        let (models, stock) = (models.clone(), stock.clone());
        spawn_local(async move {
            let _ = load_screen(&notices, vec![models.prepare_load(), stock.prepare_load()]).await;
        });
    }

    let on_submit = {
        let ctl = models.clone();
        Callback::new(move |_| editor.submit(ctl.clone()))
    };

    view! {
        <PageFrame page_id=format!("{}--list", Model::full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestión de Modelos"</h1>
                    <span class="badge badge--primary">{move || total.get()}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.start_new()>
                        "Nuevo modelo"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || editor.open.get()>
                    <ModelDetails editor=editor materials=materials cost=cost on_submit=on_submit />
                </Show>

                <ListToolbar
                    query=query
                    sort_options=vec![
                        ("nombre", "Nombre"),
                        ("categoria", "Categoría"),
                        ("costoProduccion", "Costo de producción"),
                        ("precioVenta", "Precio de venta"),
                    ]
                    categories=categories
                    category_label="Categoría"
                    search_placeholder="Buscar modelos..."
                />

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortHeader label="Nombre" field="nombre" query=query />
                            <TableHeaderCell>"Descripción"</TableHeaderCell>
                            <SortHeader label="Categoría" field="categoria" query=query />
                            <TableHeaderCell>"Material"</TableHeaderCell>
                            <TableHeaderCell>"Medidas"</TableHeaderCell>
                            <TableHeaderCell>"Materiales"</TableHeaderCell>
                            <SortHeader label="Costo" field="costoProduccion" query=query />
                            <SortHeader label="Precio venta" field="precioVenta" query=query />
                            <TableHeaderCell>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = query.with(|q| q.search.clone());
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let m = row.model;
                                    let bom = m
                                        .materiales
                                        .iter()
                                        .map(|x| format!("{} x{}", x.nombre, x.cantidad))
                                        .collect::<Vec<_>>()
                                        .join(", ");
                                    let nombre = highlight_matches(&m.nombre, &search);
                                    let categoria = highlight_matches(&m.categoria, &search);
                                    let descripcion = m.descripcion.clone();
                                    let material = m.material.clone().unwrap_or_else(|| "-".into());
                                    let medidas = m.dimensions();
                                    let costo = format_money(m.costo_produccion);
                                    let precio = format_money(m.precio_venta);
                                    let for_edit = m.clone();
                                    let for_delete = m;
                                    let ctl = models.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{nombre}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{descripcion}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{categoria}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{material}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{medidas}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{bom}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{costo}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{precio}</TableCellLayout></TableCell>
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
