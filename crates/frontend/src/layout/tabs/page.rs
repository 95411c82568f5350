//! TabPage: контент вкладки, скрытый пока вкладка не активна

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Экран создаётся один раз при открытии вкладки и живёт до её закрытия,
/// переключение вкладок только прячет его.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key.clone();
    let key_for_active = key.clone();
    let is_active = move || tabs_store.active.with(|a| a.as_deref() == Some(key_for_active.as_str()));

    log::debug!("tab page created: '{}'", key);
    let key_for_cleanup = key.clone();
    on_cleanup(move || log::debug!("tab page destroyed: '{}'", key_for_cleanup));

    let content = render_tab_content(&key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=key
        >
            {content}
        </div>
    }
}
