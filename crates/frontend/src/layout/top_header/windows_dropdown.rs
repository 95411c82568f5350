//! Выпадающий список открытых вкладок
//!
//! Только переключение; закрывают вкладки в полосе вкладок.

use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// "Proveedores (3)" для активной вкладки и числа открытых
fn trigger_text(active_title: Option<&str>, count: usize) -> String {
    format!("{} ({})", active_title.unwrap_or("Ventanas"), count)
}

/// Пункты меню: (key, title, активна ли)
fn menu_entries(tabs: &[Tab], active: Option<&str>) -> Vec<(String, String, bool)> {
    tabs.iter()
        .map(|t| (t.key.clone(), t.title.clone(), active == Some(t.key.as_str())))
        .collect()
}

#[component]
pub fn WindowsDropdown() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    let is_open = RwSignal::new(false);

    let label = move || {
        let active = ctx.active.get();
        ctx.opened.with(|tabs| {
            let title = active
                .as_ref()
                .and_then(|key| tabs.iter().find(|t| &t.key == key))
                .map(|t| t.title.as_str());
            trigger_text(title, tabs.len())
        })
    };

    let entries = move || {
        let active = ctx.active.get();
        ctx.opened.with(|tabs| menu_entries(tabs, active.as_deref()))
    };

    view! {
        <div class="windows-dropdown">
            <button
                class="windows-dropdown__trigger"
                title="Ventanas abiertas"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                <span class="windows-dropdown__trigger-text">{label}</span>
                {icon("chevron-down")}
            </button>

            <Show when=move || is_open.get()>
                <div class="windows-dropdown__menu">
                    {move || {
                        entries()
                            .into_iter()
                            .map(|(key, title, selected)| {
                                view! {
                                    <div
                                        class="windows-dropdown__item"
                                        class:windows-dropdown__item--active=selected
                                        on:click=move |_| {
                                            ctx.activate_tab(&key);
                                            is_open.set(false);
                                        }
                                    >
                                        {title}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(key: &str, title: &str) -> Tab {
        Tab {
            key: key.into(),
            title: title.into(),
        }
    }

    #[test]
    fn trigger_shows_active_title_and_count() {
        assert_eq!(trigger_text(Some("Clientes"), 2), "Clientes (2)");
        assert_eq!(trigger_text(None, 0), "Ventanas (0)");
    }

    #[test]
    fn menu_marks_only_active_tab() {
        let tabs = vec![tab("a001_supplier", "Proveedores"), tab("a003_client", "Clientes")];
        let entries = menu_entries(&tabs, Some("a003_client"));
        let flags: Vec<_> = entries.iter().map(|(_, _, selected)| *selected).collect();
        assert_eq!(flags, vec![false, true]);
        assert!(menu_entries(&tabs, None).iter().all(|(_, _, s)| !s));
    }
}
