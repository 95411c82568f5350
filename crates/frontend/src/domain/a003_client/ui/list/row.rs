use crate::shared::list_utils::{cmp_text, Searchable, Sortable};
use contracts::domain::a003_client::Client;
use std::cmp::Ordering;

pub const WITH_CEDULA: &str = "conCedula";
pub const WITHOUT_CEDULA: &str = "sinCedula";

pub fn cedula_filters() -> Vec<(String, String)> {
    vec![
        (WITH_CEDULA.to_string(), "Con cédula".to_string()),
        (WITHOUT_CEDULA.to_string(), "Sin cédula".to_string()),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientRow {
    pub client: Client,
}

impl From<&Client> for ClientRow {
    fn from(client: &Client) -> Self {
        Self {
            client: client.clone(),
        }
    }
}

impl Searchable for ClientRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.client.nombre.clone(),
            self.client.apellido.clone().unwrap_or_default(),
            self.client.email.clone(),
        ]
    }

    fn matches_category(&self, category: &str) -> bool {
        match category {
            WITH_CEDULA => self.client.has_cedula(),
            WITHOUT_CEDULA => !self.client.has_cedula(),
            _ => true,
        }
    }
}

impl Sortable for ClientRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => cmp_text(&self.client.email, &other.client.email),
            "telefono" => cmp_text(&self.client.telefono, &other.client.telefono),
            _ => cmp_text(&self.client.nombre, &other.client.nombre),
        }
    }
}
