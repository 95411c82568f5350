use super::list_utils::{create_sort_toggle, get_sort_class, get_sort_indicator, ListQuery, SearchInput};
use leptos::prelude::*;
use thaw::*;

/// Панель над таблицей: поиск, фильтр по категории, поле и направление сортировки
#[component]
pub fn ListToolbar(
    query: RwSignal<ListQuery>,
    /// (поле, подпись)
    sort_options: Vec<(&'static str, &'static str)>,
    /// (значение, подпись); без них фильтр не показывается
    #[prop(optional, into)]
    categories: Option<Signal<Vec<(String, String)>>>,
    #[prop(optional)] category_label: Option<&'static str>,
    #[prop(optional)] search_placeholder: &'static str,
) -> impl IntoView {
    let category_filter = categories.map(|options| {
        view! {
            <Flex vertical=true gap=FlexGap::Small>
                <Label>{category_label.unwrap_or("Filtrar por")}</Label>
                <select
                    class="toolbar__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.category = value);
                    }
                >
                    <option value="">"Todos"</option>
                    {move || {
                        let current = query.with(|q| q.category.clone());
                        options
                            .get()
                            .into_iter()
                            .map(|(value, text)| {
                                let selected = value == current;
                                view! { <option value=value selected=selected>{text}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </Flex>
        }
    });

    let sort_select = sort_options
        .into_iter()
        .map(|(field, text)| {
            view! {
                <option value=field selected=move || query.with(|q| q.sort_field == field)>
                    {text}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="list-toolbar">
            <Flex gap=FlexGap::Medium align=FlexAlign::End>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Buscar"</Label>
                    <SearchInput
                        value=Signal::derive(move || query.with(|q| q.search.clone()))
                        on_change=Callback::new(move |text: String| query.update(|q| q.search = text))
                        placeholder=search_placeholder
                    />
                </Flex>

                {category_filter}

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Ordenar por"</Label>
                    <select
                        class="toolbar__select"
                        on:change=move |ev| {
                            let field = event_target_value(&ev);
                            query.update(|q| q.sort_field = field);
                        }
                    >
                        {sort_select}
                    </select>
                </Flex>

                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| query.update(|q| q.ascending = !q.ascending)
                >
                    {move || if query.with(|q| q.ascending) { "Ascendente ▲" } else { "Descendente ▼" }}
                </Button>
            </Flex>
        </div>
    }
}

/// Заголовок колонки с переключением сортировки по клику
#[component]
pub fn SortHeader(label: &'static str, field: &'static str, query: RwSignal<ListQuery>) -> impl IntoView {
    view! {
        <TableHeaderCell>
            <div class="table__sortable-header" on:click=create_sort_toggle(field, query)>
                {label}
                <span class=move || query.with(|q| get_sort_class(&q.sort_field, field))>
                    {move || query.with(|q| get_sort_indicator(&q.sort_field, field, q.ascending))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

/// Сообщение вместо пустой таблицы
#[component]
pub fn EmptyState(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|text| view! { <div class="empty-state">{text}</div> })
}

/// Предупреждение, что перечитать коллекцию после действия не удалось
#[component]
pub fn StaleNotice(#[prop(into)] stale: Signal<bool>) -> impl IntoView {
    move || {
        stale.get().then(|| {
            view! {
                <div class="empty-state empty-state--warning">
                    "Los datos mostrados pueden estar desactualizados."
                </div>
            }
        })
    }
}

/// Кнопки "Editar" / "Eliminar" в строке таблицы
#[component]
pub fn RowActions(
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    #[prop(optional, into)] extra: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <TableCell>
            <TableCellLayout>
                <Flex gap=FlexGap::Small>
                    <Button size=ButtonSize::Small on_click=move |_| on_edit.run(())>"Editar"</Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_delete.run(())
                    >
                        "Eliminar"
                    </Button>
                    {extra.map(|f| f.run())}
                </Flex>
            </TableCellLayout>
        </TableCell>
    }
}
