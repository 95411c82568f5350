use crate::domain::common::{
    lenient, validation::all_filled, EditableEntity, Entity, FormPayload, RecordId,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Nested values
// ============================================================================

/// Контактное лицо поставщика
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SupplierContact {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre_contacto: String,
    pub telefono_contacto: String,
    pub email_contacto: String,
    pub cargo_contacto: String,
}

impl SupplierContact {
    pub fn is_complete(&self) -> bool {
        all_filled(&[
            &self.nombre_contacto,
            &self.telefono_contacto,
            &self.email_contacto,
            &self.cargo_contacto,
        ])
    }
}

/// Позиция каталога материалов поставщика
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogItem {
    pub nombre: String,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub precio: f64,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub cantidad_disponible: u32,
    pub unidad_medida: String,
}

impl CatalogItem {
    fn new(nombre: &str, precio: f64, cantidad_disponible: u32, unidad_medida: &str) -> Self {
        Self {
            nombre: nombre.to_string(),
            precio,
            cantidad_disponible,
            unidad_medida: unidad_medida.to_string(),
        }
    }
}

/// Каталог, с которым создаётся новый поставщик (материалы для мебели)
pub fn default_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Madera de pino", 50.0, 100, "metro cuadrado"),
        CatalogItem::new("Tela de tapicería", 20.0, 200, "metro"),
        CatalogItem::new("Espuma de poliuretano", 30.0, 50, "metro cúbico"),
        CatalogItem::new("Clavos de carpintería", 5.0, 1000, "unidad"),
        CatalogItem::new("Tornillos para madera", 8.0, 500, "unidad"),
    ]
}

// ============================================================================
// Entity
// ============================================================================

/// Поставщик материалов (proveedor)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Supplier {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
    pub email: String,
    pub comentario: String,
    pub tiempo_entrega_estimado: String,
    pub contactos: Vec<SupplierContact>,
    pub catalogo: Vec<CatalogItem>,
}

impl Supplier {
    pub fn find_contact(&self, contact_id: &RecordId) -> Option<&SupplierContact> {
        self.contactos
            .iter()
            .find(|c| c.id.as_ref() == Some(contact_id))
    }

    pub fn find_catalog_item(&self, nombre: &str) -> Option<&CatalogItem> {
        self.catalogo.iter().find(|c| c.nombre == nombre)
    }
}

impl Entity for Supplier {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "proveedores"
    }

    fn element_name() -> &'static str {
        "Proveedor"
    }

    fn list_name() -> &'static str {
        "Proveedores"
    }
}

impl EditableEntity for Supplier {
    type Payload = SupplierDto;

    fn to_payload(&self) -> SupplierDto {
        SupplierDto {
            nombre: self.nombre.clone(),
            direccion: self.direccion.clone(),
            telefono: self.telefono.clone(),
            email: self.email.clone(),
            comentario: self.comentario.clone(),
            tiempo_entrega_estimado: self.tiempo_entrega_estimado.clone(),
            contactos: if self.contactos.is_empty() {
                vec![SupplierContact::default()]
            } else {
                self.contactos.clone()
            },
            catalogo: if self.catalogo.is_empty() {
                default_catalog()
            } else {
                self.catalogo.clone()
            },
        }
    }
}

// ============================================================================
// Form payload
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDto {
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
    pub email: String,
    pub comentario: String,
    pub tiempo_entrega_estimado: String,
    pub contactos: Vec<SupplierContact>,
    pub catalogo: Vec<CatalogItem>,
}

impl Default for SupplierDto {
    /// Новый поставщик: один пустой контакт и каталог по умолчанию
    fn default() -> Self {
        Self {
            nombre: String::new(),
            direccion: String::new(),
            telefono: String::new(),
            email: String::new(),
            comentario: String::new(),
            tiempo_entrega_estimado: String::new(),
            contactos: vec![SupplierContact::default()],
            catalogo: default_catalog(),
        }
    }
}

impl FormPayload for SupplierDto {
    fn validate(&self) -> Result<(), String> {
        let main_filled = all_filled(&[&self.nombre, &self.direccion, &self.telefono, &self.email]);
        if !main_filled || !self.contactos.iter().all(SupplierContact::is_complete) {
            return Err("Por favor, complete todos los campos requeridos.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SupplierDto {
        SupplierDto {
            nombre: "Maderas del Sur".into(),
            direccion: "Av. Bolívar 12".into(),
            telefono: "0414-5550000".into(),
            email: "ventas@maderas.test".into(),
            contactos: vec![SupplierContact {
                id: None,
                nombre_contacto: "Ana".into(),
                telefono_contacto: "0414-1112233".into(),
                email_contacto: "ana@maderas.test".into(),
                cargo_contacto: "Ventas".into(),
            }],
            ..SupplierDto::default()
        }
    }

    #[test]
    fn new_supplier_starts_with_blank_contact_and_default_catalog() {
        let dto = SupplierDto::default();
        assert_eq!(dto.contactos.len(), 1);
        assert_eq!(dto.catalogo.len(), 5);
        assert_eq!(dto.catalogo[0].nombre, "Madera de pino");
        assert!(dto.validate().is_err());
    }

    #[test]
    fn every_contact_field_is_required() {
        assert!(filled().validate().is_ok());

        let mut dto = filled();
        dto.contactos.push(SupplierContact {
            nombre_contacto: "Luis".into(),
            ..SupplierContact::default()
        });
        assert!(dto.validate().is_err());
    }

    #[test]
    fn parses_backend_shape() {
        let json = r#"{
            "_id": "p1",
            "nombre": "Telas CA",
            "telefono": "123",
            "contactos": [{"_id": "c1", "nombreContacto": "Eva"}],
            "catalogo": [{"nombre": "Tela", "precio": "20", "cantidadDisponible": 4, "unidadMedida": "metro"}]
        }"#;
        let s: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(s.id.as_str(), "p1");
        assert_eq!(s.catalogo[0].precio, 20.0);
        assert_eq!(
            s.find_contact(&RecordId::new("c1")).map(|c| c.nombre_contacto.as_str()),
            Some("Eva")
        );
        assert_eq!(s.to_payload().contactos.len(), 1);
    }
}
