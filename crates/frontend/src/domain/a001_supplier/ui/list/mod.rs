pub mod row;

use self::row::SupplierRow;
use super::details::SupplierDetails;
use crate::shared::crud::{screen_controller, use_request_guard, EntityStore, ScreenController};
use crate::shared::editor::{delete_with_confirm, EditorState};
use crate::shared::list_toolbar::{EmptyState, ListToolbar, RowActions, SortHeader};
use crate::shared::list_utils::{empty_message, filter_sort, highlight_matches, ListQuery};
use crate::shared::notify::use_notices;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_supplier::{Supplier, SupplierDto};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SupplierList() -> impl IntoView {
    let suppliers: ScreenController<Supplier> = screen_controller(use_notices(), use_request_guard());
    let store = *suppliers.store();
    let editor = EditorState::<SupplierDto>::new();
    let query = RwSignal::new(ListQuery::sorted_by("nombre", true));

    let rows = Memo::new(move |_| {
        let all: Vec<SupplierRow> = store.with(|s| s.iter().map(SupplierRow::from).collect());
        query.with(|q| filter_sort(&all, q))
    });
    let total = Signal::derive(move || store.with(EntityStore::len));
    let empty = Signal::derive(move || empty_message(store.with(EntityStore::is_loaded), total.get(), rows.with(Vec::len)));

    {
        let ctl = suppliers.clone();
        spawn_local(async move {
            let _ = ctl.load().await;
        });
    }

    let on_submit = {
        let ctl = suppliers.clone();
        Callback::new(move |_| editor.submit(ctl.clone()))
    };

    view! {
        <PageFrame page_id=format!("{}--list", Supplier::full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestión de Proveedores"</h1>
                    <span class="badge badge--primary">{move || total.get()}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.start_new()>
                        "Nuevo proveedor"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || editor.open.get()>
                    <SupplierDetails editor=editor on_submit=on_submit />
                </Show>

                <ListToolbar
                    query=query
                    sort_options=vec![("nombre", "Nombre"), ("telefono", "Teléfono")]
                    search_placeholder="Buscar por nombre o email..."
                />

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortHeader label="Nombre" field="nombre" query=query />
                            <TableHeaderCell>"Email"</TableHeaderCell>
                            <SortHeader label="Teléfono" field="telefono" query=query />
                            <TableHeaderCell>"Catálogo"</TableHeaderCell>
                            <TableHeaderCell>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = query.with(|q| q.search.clone());
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let catalog = row.catalog_summary();
                                    let supplier = row.supplier;
                                    let nombre = highlight_matches(&supplier.nombre, &search);
                                    let email = highlight_matches(&supplier.email, &search);
                                    let telefono = supplier.telefono.clone();
                                    let for_edit = supplier.clone();
                                    let for_delete = supplier;
                                    let ctl = suppliers.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{nombre}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{telefono}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{catalog}</TableCellLayout>
                                            </TableCell>
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
