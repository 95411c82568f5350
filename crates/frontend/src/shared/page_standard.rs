//! Категории страниц внутри вкладок
//!
//! У корневого элемента каждой страницы есть `id` вида `{entity}--{category}`
//! (например, `"a001_proveedores--list"`) и атрибут `data-page-category`.

/// Список записей с формой создания/редактирования
pub const PAGE_CAT_LIST: &str = "list";

/// Сводная панель
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Отчёт с параметрами
pub const PAGE_CAT_REPORT: &str = "report";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_REPORT];

/// `{entity}--{category}` с непустыми частями
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a001_proveedores--list"));
        assert!(is_valid_page_id("d001_inicio--dashboard"));
        assert!(!is_valid_page_id("a001_proveedores"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("x--detail"));
    }
}
