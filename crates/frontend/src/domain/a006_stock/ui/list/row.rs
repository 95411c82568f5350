use crate::shared::crud::EntityStore;
use crate::shared::list_utils::{cmp_num, cmp_text, Searchable, Sortable};
use contracts::domain::a005_model::Model;
use contracts::domain::a006_stock::{StockItem, StockKind};
use std::cmp::Ordering;

/// Строка склада с разрешённой моделью
#[derive(Debug, Clone, PartialEq)]
pub struct StockRow {
    pub item: StockItem,
    pub model: Option<Model>,
}

impl StockRow {
    /// Модель берётся из ответа (populate) или из справочника моделей
    pub fn build(item: &StockItem, models: &EntityStore<Model>) -> Self {
        let model = item
            .modelo
            .as_ref()
            .and_then(|r| r.resolve(|id| models.get(id)))
            .cloned();
        Self {
            item: item.clone(),
            model,
        }
    }

    pub fn kind(&self) -> StockKind {
        self.item.kind()
    }

    pub fn name(&self) -> String {
        match (&self.model, self.item.material_name()) {
            (Some(model), _) => model.nombre.clone(),
            (None, Some(material)) => material.to_string(),
            (None, None) if self.item.modelo.is_some() => "Modelo no encontrado".to_string(),
            _ => "-".to_string(),
        }
    }

    pub fn description(&self) -> String {
        self.model
            .as_ref()
            .map(|m| m.descripcion.clone())
            .unwrap_or_default()
    }

    pub fn sale_price(&self) -> f64 {
        self.model.as_ref().map_or(0.0, |m| m.precio_venta)
    }

    pub fn production_cost(&self) -> f64 {
        self.model.as_ref().map_or(0.0, |m| m.costo_produccion)
    }

    pub fn unit(&self) -> Option<String> {
        self.item.material.as_ref().and_then(|m| m.unidad_medida.clone())
    }
}

impl Searchable for StockRow {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name(), self.description()]
    }

    fn matches_category(&self, category: &str) -> bool {
        self.kind().label() == category
    }
}

impl Sortable for StockRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "precioVenta" => cmp_num(self.sale_price(), other.sale_price()),
            "cantidadDisponible" => cmp_num(
                self.item.cantidad_disponible as f64,
                other.item.cantidad_disponible as f64,
            ),
            "costoProduccion" => cmp_num(self.production_cost(), other.production_cost()),
            _ => cmp_text(&self.name(), &other.name()),
        }
    }
}

pub fn kind_filters() -> Vec<(String, String)> {
    [StockKind::Model, StockKind::Material]
        .iter()
        .map(|k| (k.label().to_string(), k.label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_sort, ListQuery};
    use contracts::domain::a006_stock::StockMaterial;
    use contracts::domain::common::{EntityRef, RecordId};

    fn model(id: &str, nombre: &str, venta: f64) -> Model {
        Model {
            id: RecordId::new(id),
            nombre: nombre.into(),
            descripcion: format!("{} de madera", nombre),
            precio_venta: venta,
            ..Model::default()
        }
    }

    fn models() -> EntityStore<Model> {
        let mut store = EntityStore::new();
        store.replace_all(vec![model("m1", "Silla", 120.0), model("m2", "Mesa", 300.0)]);
        store
    }

    fn by_id(id: &str, qty: u32) -> StockItem {
        StockItem {
            id: RecordId::new(format!("s-{}", id)),
            modelo: Some(EntityRef::Id(RecordId::new(id))),
            cantidad_disponible: qty,
            ..StockItem::default()
        }
    }

    fn material(nombre: &str, qty: u32) -> StockItem {
        StockItem {
            id: RecordId::new(format!("s-{}", nombre)),
            material: Some(StockMaterial {
                nombre: nombre.into(),
                unidad_medida: Some("m".into()),
            }),
            cantidad_disponible: qty,
            ..StockItem::default()
        }
    }

    #[test]
    fn resolves_model_by_id_or_reports_missing() {
        let store = models();
        assert_eq!(StockRow::build(&by_id("m1", 2), &store).name(), "Silla");
        assert_eq!(StockRow::build(&by_id("zz", 2), &store).name(), "Modelo no encontrado");
        assert_eq!(StockRow::build(&material("Tela", 5), &store).name(), "Tela");
    }

    #[test]
    fn filters_by_kind_and_searches_description() {
        let store = models();
        let rows: Vec<StockRow> = [by_id("m1", 2), by_id("m2", 1), material("Tela", 5)]
            .iter()
            .map(|i| StockRow::build(i, &store))
            .collect();

        let mut query = ListQuery::sorted_by("cantidadDisponible", false);
        query.category = "Modelo".into();
        let names: Vec<_> = filter_sort(&rows, &query).iter().map(StockRow::name).collect();
        assert_eq!(names, vec!["Silla", "Mesa"]);

        let query = ListQuery {
            search: "madera".into(),
            ..ListQuery::sorted_by("precioVenta", false)
        };
        let names: Vec<_> = filter_sort(&rows, &query).iter().map(StockRow::name).collect();
        assert_eq!(names, vec!["Mesa", "Silla"]);
    }
}
