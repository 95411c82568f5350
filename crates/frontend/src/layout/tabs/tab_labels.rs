//! Заголовки вкладок: единственный источник для меню и полосы вкладок

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

pub const OVERVIEW_KEY: &str = "d001_overview";
pub const REPORTS_KEY: &str = "r001_informes";

/// Читаемый заголовок вкладки; для неизвестного ключа пустая строка
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        OVERVIEW_KEY => "Inicio",
        REPORTS_KEY => "Informes",
        k if k == Supplier::full_name() => Supplier::list_name(),
        k if k == Article::full_name() => Article::list_name(),
        k if k == Client::full_name() => Client::list_name(),
        k if k == Worker::full_name() => Worker::list_name(),
        k if k == Model::full_name() => Model::list_name(),
        k if k == StockItem::full_name() => StockItem::list_name(),
        k if k == PurchaseOrder::full_name() => PurchaseOrder::list_name(),
        k if k == Receiving::full_name() => Receiving::list_name(),
        k if k == CustomerOrder::full_name() => CustomerOrder::list_name(),
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_have_spanish_labels() {
        assert_eq!(tab_label_for_key(OVERVIEW_KEY), "Inicio");
        assert_eq!(tab_label_for_key(REPORTS_KEY), "Informes");
        assert_eq!(tab_label_for_key(&Supplier::full_name()), Supplier::list_name());
        assert_eq!(tab_label_for_key("sys_users"), "");
    }
}
