pub mod row;

use self::row::WorkerRow;
use super::details::WorkerDetails;
use crate::shared::crud::{screen_controller, use_request_guard, EntityStore, ScreenController};
use crate::shared::editor::{delete_with_confirm, EditorState};
use crate::shared::format::{format_date, format_money};
use crate::shared::list_toolbar::{EmptyState, ListToolbar, RowActions, SortHeader};
use crate::shared::list_utils::{category_options, empty_message, filter_sort, highlight_matches, ListQuery};
use crate::shared::notify::use_notices;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_worker::{Worker, WorkerDto};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn WorkerList() -> impl IntoView {
    let workers: ScreenController<Worker> = screen_controller(use_notices(), use_request_guard());
    let store = *workers.store();
    let editor = EditorState::<WorkerDto>::new();
    let query = RwSignal::new(ListQuery::sorted_by("nombre", true));

    let rows = Memo::new(move |_| {
        let all: Vec<WorkerRow> = store.with(|s| s.iter().map(WorkerRow::from).collect());
        query.with(|q| filter_sort(&all, q))
    });
    let roles = Signal::derive(move || store.with(|s| category_options(s.iter().map(|w| w.cargo.as_str()))));
    let total = Signal::derive(move || store.with(EntityStore::len));
    let empty = Signal::derive(move || empty_message(store.with(EntityStore::is_loaded), total.get(), rows.with(Vec::len)));

    {
        let ctl = workers.clone();
        spawn_local(async move {
            let _ = ctl.load().await;
        });
    }

    let on_submit = {
        let ctl = workers.clone();
        Callback::new(move |_| editor.submit(ctl.clone()))
    };

    view! {
        <PageFrame page_id=format!("{}--list", Worker::full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestión de Trabajadores"</h1>
                    <span class="badge badge--primary">{move || total.get()}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.start_new()>
                        "Registrar trabajador"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || editor.open.get()>
                    <WorkerDetails editor=editor on_submit=on_submit />
                </Show>

                <ListToolbar
                    query=query
                    sort_options=vec![("nombre", "Nombre"), ("salario", "Salario"), ("fechaIngreso", "Fecha de ingreso")]
                    categories=roles
                    category_label="Filtrar por cargo"
                    search_placeholder="Buscar por nombre o cargo..."
                />

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortHeader label="Nombre" field="nombre" query=query />
                            <TableHeaderCell>"Apellido"</TableHeaderCell>
                            <TableHeaderCell>"Cédula"</TableHeaderCell>
                            <TableHeaderCell>"Email"</TableHeaderCell>
                            <TableHeaderCell>"Teléfono"</TableHeaderCell>
                            <TableHeaderCell>"Cargo"</TableHeaderCell>
                            <SortHeader label="Fecha de ingreso" field="fechaIngreso" query=query />
                            <SortHeader label="Salario" field="salario" query=query />
                            <TableHeaderCell>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = query.with(|q| q.search.clone());
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let w = row.worker;
                                    let nombre = highlight_matches(&w.nombre, &search);
                                    let apellido = highlight_matches(&w.apellido, &search);
                                    let cargo = highlight_matches(&w.cargo, &search);
                                    let ingreso = format_date(&w.fecha_ingreso);
                                    let salario = format_money(w.salario);
                                    let (cedula, email, telefono) = (w.cedula.clone(), w.email.clone(), w.telefono.clone());
                                    let for_edit = w.clone();
                                    let for_delete = w;
                                    let ctl = workers.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{nombre}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{apellido}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{cedula}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{email}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{telefono}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{cargo}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{ingreso}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{salario}</TableCellLayout></TableCell>
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
