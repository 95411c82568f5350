use crate::shared::list_utils::{cmp_date, cmp_num, cmp_text, Searchable, Sortable};
use contracts::domain::a004_worker::Worker;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkerRow {
    pub worker: Worker,
}

impl From<&Worker> for WorkerRow {
    fn from(worker: &Worker) -> Self {
        Self {
            worker: worker.clone(),
        }
    }
}

impl Searchable for WorkerRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.worker.nombre.clone(),
            self.worker.apellido.clone(),
            self.worker.cargo.clone(),
        ]
    }

    fn matches_category(&self, category: &str) -> bool {
        self.worker.cargo == category
    }
}

impl Sortable for WorkerRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "salario" => cmp_num(self.worker.salario, other.worker.salario),
            "fechaIngreso" => cmp_date(
                Some(self.worker.fecha_ingreso.as_str()),
                Some(other.worker.fecha_ingreso.as_str()),
            ),
            _ => cmp_text(&self.worker.nombre, &other.worker.nombre),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_sort, ListQuery};

    fn row(nombre: &str, cargo: &str, salario: f64, fecha: &str) -> WorkerRow {
        WorkerRow {
            worker: Worker {
                nombre: nombre.into(),
                cargo: cargo.into(),
                salario,
                fecha_ingreso: fecha.into(),
                ..Worker::default()
            },
        }
    }

    #[test]
    fn sorts_by_hire_date_and_filters_by_role() {
        let rows = vec![
            row("Ana", "Carpintero", 500.0, "2023-05-01"),
            row("Luis", "Tapicero", 450.0, "2021-01-15"),
            row("Eva", "Carpintero", 700.0, "2022-09-30T00:00:00.000Z"),
        ];

        let by_date = filter_sort(&rows, &ListQuery::sorted_by("fechaIngreso", true));
        let names: Vec<_> = by_date.iter().map(|r| r.worker.nombre.as_str()).collect();
        assert_eq!(names, vec!["Luis", "Eva", "Ana"]);

        let mut query = ListQuery::sorted_by("salario", false);
        query.category = "Carpintero".into();
        let names: Vec<_> = filter_sort(&rows, &query).into_iter().map(|r| r.worker.nombre).collect();
        assert_eq!(names, vec!["Eva", "Ana"]);
    }
}
