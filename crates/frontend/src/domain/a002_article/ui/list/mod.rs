pub mod row;

use self::row::{unique_types, ArticleRow};
use super::details::ArticleDetails;
use crate::shared::crud::{load_screen, screen_controller, use_request_guard, EntityStore, ScreenController};
use crate::shared::editor::{delete_with_confirm, EditorState};
use crate::shared::format::{format_date, format_money};
use crate::shared::list_toolbar::{EmptyState, ListToolbar, RowActions, SortHeader};
use crate::shared::list_utils::{empty_message, filter_sort, highlight_matches, ListQuery};
use crate::shared::notify::use_notices;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_article::{Article, ArticleDto};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ArticleList() -> impl IntoView {
    let notices = use_notices();
    let guard = use_request_guard();
    let articles: ScreenController<Article> = screen_controller(notices, guard.clone());
    let suppliers: ScreenController<Supplier> = screen_controller(notices, guard);
    let store = *articles.store();
    let supplier_store = *suppliers.store();
    let editor = EditorState::<ArticleDto>::new();
    let query = RwSignal::new(ListQuery::sorted_by("nombre", true));

    let rows = Memo::new(move |_| {
        let all: Vec<ArticleRow> = supplier_store.with(|sup| {
            store.with(|s| s.iter().map(|a| ArticleRow::build(a, sup)).collect())
        });
        query.with(|q| filter_sort(&all, q))
    });
    let types = Signal::derive(move || {
        store.with(|s| unique_types(s).into_iter().map(|t| (t.clone(), t)).collect::<Vec<_>>())
    });
    let total = Signal::derive(move || store.with(EntityStore::len));
    let empty = Signal::derive(move || empty_message(store.with(EntityStore::is_loaded), total.get(), rows.with(Vec::len)));

    {
        let (articles, suppliers) = (articles.clone(), suppliers.clone());
        spawn_local(async move {
            let _ = load_screen(&notices, vec![articles.prepare_load(), suppliers.prepare_load()]).await;
        });
    }

    let on_submit = {
        let ctl = articles.clone();
        Callback::new(move |_| editor.submit(ctl.clone()))
    };

    view! {
        <PageFrame page_id=format!("{}--list", Article::full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestión de Artículos"</h1>
                    <span class="badge badge--primary">{move || total.get()}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.start_new()>
                        "Nuevo artículo"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || editor.open.get()>
                    <ArticleDetails editor=editor suppliers=supplier_store on_submit=on_submit />
                </Show>

                <ListToolbar
                    query=query
                    sort_options=vec![("nombre", "Nombre"), ("precio", "Precio"), ("fecha_creacion", "Fecha de creación")]
                    categories=types
                    category_label="Filtrar por tipo"
                    search_placeholder="Buscar por nombre, tipo, proveedor..."
                />

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortHeader label="Nombre" field="nombre" query=query />
                            <SortHeader label="Precio" field="precio" query=query />
                            <TableHeaderCell>"Tipo"</TableHeaderCell>
                            <TableHeaderCell>"Proveedor (Contacto)"</TableHeaderCell>
                            <SortHeader label="Creado" field="fecha_creacion" query=query />
                            <TableHeaderCell>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = query.with(|q| q.search.clone());
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let article = row.article;
                                    let nombre = highlight_matches(&article.nombre, &search);
                                    let precio = format_money(article.precio);
                                    let tipo = highlight_matches(&article.tipo, &search);
                                    let proveedor = highlight_matches(&row.supplier_label, &search);
                                    let creado = article
                                        .fecha_creacion
                                        .as_deref()
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".into());
                                    let for_edit = article.clone();
                                    let for_delete = article;
                                    let ctl = articles.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{nombre}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{precio}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{tipo}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{proveedor}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{creado}</TableCellLayout>
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
