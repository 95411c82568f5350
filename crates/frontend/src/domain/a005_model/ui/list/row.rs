use crate::shared::format::format_number;
use crate::shared::list_utils::{cmp_num, cmp_text, Searchable, Sortable};
use contracts::domain::a005_model::Model;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelRow {
    pub model: Model,
}

impl From<&Model> for ModelRow {
    fn from(model: &Model) -> Self {
        Self {
            model: model.clone(),
        }
    }
}

impl Searchable for ModelRow {
    fn search_fields(&self) -> Vec<String> {
        let m = &self.model;
        vec![
            m.nombre.clone(),
            m.descripcion.clone(),
            m.categoria.clone(),
            m.material.clone().unwrap_or_default(),
            m.alto.map(|v| v.to_string()).unwrap_or_default(),
            m.ancho.map(|v| v.to_string()).unwrap_or_default(),
            format_number(m.costo_produccion, 2),
            format_number(m.precio_venta, 2),
        ]
    }

    fn matches_category(&self, category: &str) -> bool {
        self.model.categoria == category
    }
}

impl Sortable for ModelRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "costoProduccion" => cmp_num(self.model.costo_produccion, other.model.costo_produccion),
            "precioVenta" => cmp_num(self.model.precio_venta, other.model.precio_venta),
            "categoria" => cmp_text(&self.model.categoria, &other.model.categoria),
            _ => cmp_text(&self.model.nombre, &other.model.nombre),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_sort, ListQuery};

    fn row(nombre: &str, categoria: &str, costo: f64, venta: f64) -> ModelRow {
        ModelRow {
            model: Model {
                nombre: nombre.into(),
                categoria: categoria.into(),
                costo_produccion: costo,
                precio_venta: venta,
                alto: Some(80.0),
                ..Model::default()
            },
        }
    }

    #[test]
    fn search_reaches_dimensions_and_costs() {
        let r = row("Silla Nórdica", "Sillas", 35.5, 120.0);
        assert!(r.matches_filter("80"));
        assert!(r.matches_filter("35,50"));
        assert!(r.matches_filter("sillas"));
        assert!(!r.matches_filter("mesa"));
    }

    #[test]
    fn sorts_by_sale_price_descending() {
        let rows = vec![
            row("A", "Sillas", 10.0, 50.0),
            row("B", "Mesas", 30.0, 300.0),
            row("C", "Sillas", 20.0, 120.0),
        ];
        let sorted = filter_sort(&rows, &ListQuery::sorted_by("precioVenta", false));
        let names: Vec<_> = sorted.iter().map(|r| r.model.nombre.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }
}
