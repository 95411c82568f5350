use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::{NoticeHost, NoticeService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(NoticeService::new());

    view! {
        <AppRoutes />
        <NoticeHost />
    }
}
