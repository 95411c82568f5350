use crate::shared::crud::EntityStore;
use crate::shared::list_utils::{cmp_date, cmp_num, cmp_text, Searchable, Sortable};
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_article::Article;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRow {
    pub article: Article,
    /// "Proveedor (Contacto)"
    pub supplier_label: String,
}

impl ArticleRow {
    pub fn build(article: &Article, suppliers: &EntityStore<Supplier>) -> Self {
        Self {
            article: article.clone(),
            supplier_label: supplier_label(article, suppliers),
        }
    }
}

/// Имя поставщика и контакта через справочник; битые ссылки дают заглушки
pub fn supplier_label(article: &Article, suppliers: &EntityStore<Supplier>) -> String {
    let Some(reference) = article.proveedor.as_ref() else {
        return "Sin proveedor".to_string();
    };

    let known = suppliers.get(reference.id());
    let name = reference
        .populated()
        .map(|s| s.nombre.clone())
        .or_else(|| known.map(|s| s.nombre.clone()))
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "Proveedor no encontrado".to_string());

    let Some(contact_id) = article.contacto.as_ref() else {
        return format!("{} (Sin contacto)", name);
    };
    match known.and_then(|s| s.find_contact(contact_id)) {
        Some(contact) => format!("{} ({})", name, contact.nombre_contacto),
        None => format!("{} (Contacto no encontrado)", name),
    }
}

impl Searchable for ArticleRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.article.nombre.clone(),
            self.article.tipo.clone(),
            self.article.precio.to_string(),
            self.supplier_label.clone(),
        ]
    }

    fn matches_category(&self, category: &str) -> bool {
        self.article.tipo == category
    }
}

impl Sortable for ArticleRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "precio" => cmp_num(self.article.precio, other.article.precio),
            "fecha_creacion" => cmp_date(
                self.article.fecha_creacion.as_deref(),
                other.article.fecha_creacion.as_deref(),
            ),
            _ => cmp_text(&self.article.nombre, &other.article.nombre),
        }
    }
}

/// Типы для фильтра, без повторов, в порядке появления
pub fn unique_types(articles: &EntityStore<Article>) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for article in articles.iter() {
        if !article.tipo.trim().is_empty() && !types.contains(&article.tipo) {
            types.push(article.tipo.clone());
        }
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_sort, ListQuery};
    use contracts::domain::a001_supplier::SupplierContact;
    use contracts::domain::common::{EntityRef, RecordId};

    fn article(nombre: &str, precio: f64, tipo: &str) -> Article {
        Article {
            id: RecordId::new(nombre.to_lowercase()),
            nombre: nombre.into(),
            precio,
            tipo: tipo.into(),
            ..Article::default()
        }
    }

    fn suppliers() -> EntityStore<Supplier> {
        let mut store = EntityStore::new();
        store.replace_all(vec![Supplier {
            id: "p1".into(),
            nombre: "Maderas del Sur".into(),
            contactos: vec![SupplierContact {
                id: Some("c1".into()),
                nombre_contacto: "Ana".into(),
                ..SupplierContact::default()
            }],
            ..Supplier::default()
        }]);
        store
    }

    #[test]
    fn mesa_and_silla_sorted_by_price() {
        let store = suppliers();
        let rows: Vec<ArticleRow> = [article("Mesa", 100.0, "A"), article("Silla", 50.0, "B")]
            .iter()
            .map(|a| ArticleRow::build(a, &store))
            .collect();

        let names = |q: ListQuery| -> Vec<String> {
            filter_sort(&rows, &q).into_iter().map(|r| r.article.nombre).collect()
        };
        assert_eq!(names(ListQuery::sorted_by("precio", true)), vec!["Silla", "Mesa"]);
        assert_eq!(names(ListQuery::sorted_by("precio", false)), vec!["Mesa", "Silla"]);
    }

    #[test]
    fn supplier_labels() {
        let store = suppliers();
        let mut a = article("Mesa", 1.0, "A");
        assert_eq!(supplier_label(&a, &store), "Sin proveedor");

        a.proveedor = Some(EntityRef::Id("p1".into()));
        assert_eq!(supplier_label(&a, &store), "Maderas del Sur (Sin contacto)");

        a.contacto = Some("c1".into());
        assert_eq!(supplier_label(&a, &store), "Maderas del Sur (Ana)");

        a.contacto = Some("zz".into());
        assert_eq!(supplier_label(&a, &store), "Maderas del Sur (Contacto no encontrado)");

        a.proveedor = Some(EntityRef::Id("p9".into()));
        a.contacto = None;
        assert_eq!(supplier_label(&a, &store), "Proveedor no encontrado (Sin contacto)");
    }

    #[test]
    fn search_covers_supplier_label_and_type_filter() {
        let store = suppliers();
        let mut mesa = article("Mesa", 100.0, "A");
        mesa.proveedor = Some(EntityRef::Id("p1".into()));
        let rows = vec![ArticleRow::build(&mesa, &store), ArticleRow::build(&article("Silla", 50.0, "B"), &store)];

        let mut query = ListQuery::sorted_by("nombre", true);
        query.search = "maderas".into();
        assert_eq!(filter_sort(&rows, &query).len(), 1);

        query.search.clear();
        query.category = "B".into();
        let found = filter_sort(&rows, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].article.nombre, "Silla");
    }

    #[test]
    fn types_are_unique() {
        let mut store = EntityStore::new();
        store.replace_all(vec![article("Mesa", 1.0, "A"), article("Silla", 1.0, "B"), article("Banco", 1.0, "A")]);
        assert_eq!(unique_types(&store), vec!["A", "B"]);
    }
}
