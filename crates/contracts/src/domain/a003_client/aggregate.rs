use crate::domain::common::{
    validation::{all_filled, non_blank},
    EditableEntity, Entity, FormPayload, RecordId,
};
use serde::{Deserialize, Serialize};

/// Клиент мастерской
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub nombre: String,
    pub apellido: Option<String>,
    pub email: String,
    pub telefono: String,
    /// Удостоверение личности (cédula), необязательно
    pub cedula: Option<String>,
}

impl Client {
    /// "Nombre Apellido" без лишних пробелов
    pub fn person_name(&self) -> String {
        match self.apellido.as_deref().map(str::trim) {
            Some(apellido) if !apellido.is_empty() => format!("{} {}", self.nombre, apellido),
            _ => self.nombre.clone(),
        }
    }

    pub fn has_cedula(&self) -> bool {
        self.cedula.as_deref().map_or(false, |c| !c.trim().is_empty())
    }
}

impl Entity for Client {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> String {
        self.person_name()
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "clientes"
    }

    fn element_name() -> &'static str {
        "Cliente"
    }

    fn list_name() -> &'static str {
        "Clientes"
    }
}

impl EditableEntity for Client {
    type Payload = ClientDto;

    fn to_payload(&self) -> ClientDto {
        ClientDto {
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            email: self.email.clone(),
            telefono: self.telefono.clone(),
            cedula: self.cedula.clone(),
        }
    }
}

/// Форма клиента; пустые необязательные поля не попадают в JSON
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClientDto {
    pub nombre: String,
    pub apellido: Option<String>,
    pub email: String,
    pub telefono: String,
    pub cedula: Option<String>,
}

#[derive(Serialize)]
struct ClientWire<'a> {
    nombre: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    apellido: Option<String>,
    email: &'a str,
    telefono: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cedula: Option<String>,
}

impl Serialize for ClientDto {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ClientWire {
            nombre: self.nombre.trim(),
            apellido: non_blank(&self.apellido),
            email: self.email.trim(),
            telefono: self.telefono.trim(),
            cedula: non_blank(&self.cedula),
        }
        .serialize(serializer)
    }
}

impl FormPayload for ClientDto {
    fn validate(&self) -> Result<(), String> {
        if !all_filled(&[&self.nombre, &self.email, &self.telefono]) {
            return Err("Por favor, complete nombre, email y teléfono.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optional_fields_are_omitted() {
        let dto = ClientDto {
            nombre: "Rosa".into(),
            apellido: Some("  ".into()),
            email: "rosa@test".into(),
            telefono: "0212".into(),
            cedula: None,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("apellido").is_none());
        assert!(json.get("cedula").is_none());
        assert_eq!(json["nombre"], "Rosa");
    }

    #[test]
    fn person_name_and_cedula() {
        let c = Client {
            nombre: "Rosa".into(),
            apellido: Some("Pérez".into()),
            cedula: Some("V-123".into()),
            ..Client::default()
        };
        assert_eq!(c.person_name(), "Rosa Pérez");
        assert!(c.has_cedula());
        assert!(!Client::default().has_cedula());
    }

    #[test]
    fn requires_contact_fields() {
        assert!(ClientDto::default().validate().is_err());
    }
}
