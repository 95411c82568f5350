//! Ключ вкладки -> экран

use super::tab_labels::{OVERVIEW_KEY, REPORTS_KEY};
use crate::dashboards::OverviewDashboard;
use crate::domain::a001_supplier::ui::list::SupplierList;
use crate::domain::a002_article::ui::list::ArticleList;
use crate::domain::a003_client::ui::list::ClientList;
use crate::domain::a004_worker::ui::list::WorkerList;
use crate::domain::a005_model::ui::list::ModelList;
use crate::domain::a006_stock::ui::list::StockList;
use crate::domain::a007_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a008_receiving::ui::list::ReceivingList;
use crate::domain::a009_order::ui::list::CustomerOrderList;
use crate::reports::ReportsPage;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_article::Article;
use contracts::domain::a003_client::Client;
use contracts::domain::a004_worker::Worker;
use contracts::domain::a005_model::Model;
use contracts::domain::a006_stock::StockItem;
use contracts::domain::a007_purchase_order::PurchaseOrder;
use contracts::domain::a008_receiving::Receiving;
use contracts::domain::a009_order::CustomerOrder;
use contracts::domain::common::Entity;
use leptos::prelude::*;

/// Экран для ключа вкладки; неизвестный ключ даёт заглушку
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        OVERVIEW_KEY => view! { <OverviewDashboard /> }.into_any(),
        REPORTS_KEY => view! { <ReportsPage /> }.into_any(),
        k if k == Supplier::full_name() => view! { <SupplierList /> }.into_any(),
        k if k == Article::full_name() => view! { <ArticleList /> }.into_any(),
        k if k == Client::full_name() => view! { <ClientList /> }.into_any(),
        k if k == Worker::full_name() => view! { <WorkerList /> }.into_any(),
        k if k == Model::full_name() => view! { <ModelList /> }.into_any(),
        k if k == StockItem::full_name() => view! { <StockList /> }.into_any(),
        k if k == PurchaseOrder::full_name() => view! { <PurchaseOrderList /> }.into_any(),
        k if k == Receiving::full_name() => view! { <ReceivingList /> }.into_any(),
        k if k == CustomerOrder::full_name() => view! { <CustomerOrderList /> }.into_any(),
        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">"Página no encontrada"</div> }.into_any()
        }
    }
}
