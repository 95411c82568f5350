use crate::shared::list_utils::{cmp_text, Searchable, Sortable};
use contracts::domain::a001_supplier::Supplier;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierRow {
    pub supplier: Supplier,
}

impl SupplierRow {
    /// "Madera de pino ($50,00), ..." для колонки каталога
    pub fn catalog_summary(&self) -> String {
        if self.supplier.catalogo.is_empty() {
            return "Sin catálogo".to_string();
        }
        self.supplier
            .catalogo
            .iter()
            .map(|item| format!("{} ({})", item.nombre, crate::shared::format::format_money(item.precio)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<&Supplier> for SupplierRow {
    fn from(supplier: &Supplier) -> Self {
        Self {
            supplier: supplier.clone(),
        }
    }
}

impl Searchable for SupplierRow {
    fn search_fields(&self) -> Vec<String> {
        vec![self.supplier.nombre.clone(), self.supplier.email.clone()]
    }
}

impl Sortable for SupplierRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "telefono" => cmp_text(&self.supplier.telefono, &other.supplier.telefono),
            _ => cmp_text(&self.supplier.nombre, &other.supplier.nombre),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_sort, ListQuery};

    fn row(nombre: &str, email: &str, telefono: &str) -> SupplierRow {
        SupplierRow {
            supplier: Supplier {
                nombre: nombre.into(),
                email: email.into(),
                telefono: telefono.into(),
                ..Supplier::default()
            },
        }
    }

    #[test]
    fn searches_name_and_email_only() {
        let rows = vec![
            row("Maderas del Sur", "ventas@sur.test", "0212"),
            row("Telas CA", "info@telas.test", "0414-sur"),
        ];
        let mut query = ListQuery::sorted_by("nombre", true);
        query.search = "SUR".into();
        let found = filter_sort(&rows, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].supplier.nombre, "Maderas del Sur");
    }

    #[test]
    fn catalog_summary_lists_prices() {
        let mut r = row("X", "", "");
        assert_eq!(r.catalog_summary(), "Sin catálogo");
        r.supplier.catalogo = contracts::domain::a001_supplier::default_catalog();
        assert!(r.catalog_summary().starts_with("Madera de pino ($50,00)"));
    }
}
