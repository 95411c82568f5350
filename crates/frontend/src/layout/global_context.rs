//! Глобальное состояние оболочки: открытые вкладки и видимость боковой панели

use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Вкладка из `?active=` открывается при старте, активная вкладка
    /// дальше отражается в адресной строке
    pub fn init_router_integration(&self, fallback: &str) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let initial = params
            .get("active")
            .cloned()
            .unwrap_or_else(|| fallback.to_string());
        let title = super::tabs::tab_label_for_key(&initial);
        self.open_tab(&initial, if title.is_empty() { &initial } else { title });

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query = serde_qs::to_string(&HashMap::from([("active", active_key)]))
                .unwrap_or_default();
            let new_url = format!("?{}", query);

            let current = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}'", key);
        self.opened.update(|tabs| push_unique(tabs, key, title));
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next = self.opened.with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Повторное открытие только активирует уже открытую вкладку
fn push_unique(tabs: &mut Vec<Tab>, key: &str, title: &str) {
    if !tabs.iter().any(|tab| tab.key == key) {
        tabs.push(Tab {
            key: key.to_string(),
            title: title.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopening_a_tab_keeps_a_single_entry() {
        let mut tabs = Vec::new();
        push_unique(&mut tabs, "a001_supplier", "Proveedores");
        push_unique(&mut tabs, "a003_client", "Clientes");
        push_unique(&mut tabs, "a001_supplier", "Proveedores");

        let keys: Vec<_> = tabs.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["a001_supplier", "a003_client"]);
    }

    #[test]
    fn closing_the_active_tab_activates_the_last_one() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("a001_supplier", "Proveedores");
        ctx.open_tab("a003_client", "Clientes");
        ctx.open_tab("a004_worker", "Trabajadores");

        ctx.close_tab("a004_worker");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a003_client"));

        ctx.close_tab("a001_supplier");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a003_client"));
        assert_eq!(ctx.opened.with_untracked(Vec::len), 1);
    }
}
