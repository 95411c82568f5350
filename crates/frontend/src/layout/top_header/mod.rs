//! Верхняя панель: переключатель меню, название, список открытых вкладок

mod windows_dropdown;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use windows_dropdown::WindowsDropdown;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Mueblería · Panel de Administración"</span>
            </div>

            <div class="top-header__actions">
                <WindowsDropdown />
            </div>
        </div>
    }
}
