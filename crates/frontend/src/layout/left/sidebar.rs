//! Боковое меню со сворачиваемыми группами

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, OVERVIEW_KEY, REPORTS_KEY};
use crate::shared::icons::icon;
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

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: String,
    label: &'static str,
    icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    /// Для группы без пунктов: ключ открываемой вкладки
    id: String,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn item<E: Entity>(icon: &'static str) -> MenuItem {
    MenuItem {
        key: E::full_name(),
        label: E::list_name(),
        icon,
    }
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: OVERVIEW_KEY.into(),
            label: tab_label_for_key(OVERVIEW_KEY),
            icon: "home",
            items: vec![],
        },
        MenuGroup {
            id: "personas".into(),
            label: "Personas",
            icon: "clients",
            items: vec![
                item::<Supplier>("suppliers"),
                item::<Client>("clients"),
                item::<Worker>("workers"),
            ],
        },
        MenuGroup {
            id: "inventario".into(),
            label: "Inventario",
            icon: "stock",
            items: vec![
                item::<Article>("articles"),
                item::<StockItem>("stock"),
                item::<Model>("models"),
                item::<Receiving>("receivings"),
            ],
        },
        MenuGroup {
            id: "ordenes".into(),
            label: "Órdenes",
            icon: "purchase-orders",
            items: vec![
                item::<PurchaseOrder>("purchase-orders"),
                item::<CustomerOrder>("customer-orders"),
            ],
        },
        MenuGroup {
            id: "reportes".into(),
            label: "Reportes",
            icon: "reports",
            items: vec![MenuItem {
                key: REPORTS_KEY.into(),
                label: tab_label_for_key(REPORTS_KEY),
                icon: "reports",
            }],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    let expanded_groups = RwSignal::new(Vec::<String>::new());

    let is_active = move |key: &str| ctx.active.with(|a| a.as_deref() == Some(key));

    view! {
        <div class="app-sidebar__content">
            {menu_groups()
                .into_iter()
                .map(|group| {
                    let has_children = !group.items.is_empty();
                    let group_id = StoredValue::new(group.id.clone());
                    let label = group.label;

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    !has_children && is_active(&group_id.get_value())
                                }
                                on:click=move |_| {
                                    let gid = group_id.get_value();
                                    if has_children {
                                        expanded_groups.update(|items| {
                                            if let Some(pos) = items.iter().position(|x| *x == gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    } else {
                                        ctx.open_tab(&gid, label);
                                    }
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{label}</span>
                                </div>
                                {has_children.then(|| view! {
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || {
                                            expanded_groups.with(|g| g.contains(&group_id.get_value()))
                                        }
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                })}
                            </div>

                            {has_children.then(|| {
                                let items = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.with(|g| g.contains(&group_id.get_value()))>
                                        <div class="app-sidebar__children">
                                            {items
                                                .get_value()
                                                .into_iter()
                                                .map(|entry| {
                                                    let key = StoredValue::new(entry.key.clone());
                                                    let label = entry.label;
                                                    view! {
                                                        <div
                                                            class="app-sidebar__item"
                                                            class:app-sidebar__item--active=move || is_active(&key.get_value())
                                                            on:click=move |_| ctx.open_tab(&key.get_value(), label)
                                                        >
                                                            <div class="app-sidebar__item-content">
                                                                {icon(entry.icon)}
                                                                <span>{label}</span>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                }
                            })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_key_has_a_label() {
        for group in menu_groups() {
            if group.items.is_empty() {
                assert!(!tab_label_for_key(&group.id).is_empty(), "{}", group.id);
            }
            for entry in group.items {
                assert_eq!(tab_label_for_key(&entry.key), entry.label);
            }
        }
    }

    #[test]
    fn receivings_live_under_inventory() {
        let groups = menu_groups();
        let inventory = groups.iter().find(|g| g.id == "inventario").unwrap();
        assert!(inventory.items.iter().any(|i| i.key == Receiving::full_name()));
    }
}
