pub mod row;

use self::row::{cedula_filters, ClientRow};
use super::details::ClientDetails;
use crate::shared::crud::{screen_controller, use_request_guard, EntityStore, ScreenController};
use crate::shared::editor::{delete_with_confirm, EditorState};
use crate::shared::list_toolbar::{EmptyState, ListToolbar, RowActions, SortHeader};
use crate::shared::list_utils::{empty_message, filter_sort, highlight_matches, ListQuery};
use crate::shared::notify::use_notices;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_client::{Client, ClientDto};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ClientList() -> impl IntoView {
    let clients: ScreenController<Client> = screen_controller(use_notices(), use_request_guard());
    let store = *clients.store();
    let editor = EditorState::<ClientDto>::new();
    let query = RwSignal::new(ListQuery::sorted_by("nombre", true));

    let rows = Memo::new(move |_| {
        let all: Vec<ClientRow> = store.with(|s| s.iter().map(ClientRow::from).collect());
        query.with(|q| filter_sort(&all, q))
    });
    let total = Signal::derive(move || store.with(EntityStore::len));
    let empty = Signal::derive(move || empty_message(store.with(EntityStore::is_loaded), total.get(), rows.with(Vec::len)));

    {
        let ctl = clients.clone();
        spawn_local(async move {
            let _ = ctl.load().await;
        });
    }

    let on_submit = {
        let ctl = clients.clone();
        Callback::new(move |_| editor.submit(ctl.clone()))
    };

    view! {
        <PageFrame page_id=format!("{}--list", Client::full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestión de Clientes"</h1>
                    <span class="badge badge--primary">{move || total.get()}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.start_new()>
                        "Registrar cliente"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || editor.open.get()>
                    <ClientDetails editor=editor on_submit=on_submit />
                </Show>

                <ListToolbar
                    query=query
                    sort_options=vec![("nombre", "Nombre"), ("email", "Email"), ("telefono", "Teléfono")]
                    categories=Signal::derive(cedula_filters)
                    category_label="Cédula"
                    search_placeholder="Buscar por nombre, apellido o email..."
                />

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortHeader label="Nombre" field="nombre" query=query />
                            <TableHeaderCell>"Apellido"</TableHeaderCell>
                            <SortHeader label="Email" field="email" query=query />
                            <SortHeader label="Teléfono" field="telefono" query=query />
                            <TableHeaderCell>"Cédula"</TableHeaderCell>
                            <TableHeaderCell>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = query.with(|q| q.search.clone());
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let client = row.client;
                                    let apellido = client.apellido.clone().unwrap_or_default();
                                    let cedula = client.cedula.clone().filter(|c| !c.trim().is_empty()).unwrap_or_else(|| "-".into());
                                    let nombre = highlight_matches(&client.nombre, &search);
                                    let apellido = highlight_matches(&apellido, &search);
                                    let email = highlight_matches(&client.email, &search);
                                    let telefono = client.telefono.clone();
                                    let for_edit = client.clone();
                                    let for_delete = client;
                                    let ctl = clients.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{nombre}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{apellido}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{telefono}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{cedula}</TableCellLayout>
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
