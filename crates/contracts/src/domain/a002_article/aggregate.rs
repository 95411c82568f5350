use crate::domain::a001_supplier::Supplier;
use crate::domain::common::{
    lenient, validation::blank, EditableEntity, Entity, EntityRef, FormPayload, RecordId,
};
use serde::{Deserialize, Serialize};

/// Артикул (материал или комплектующее у конкретного поставщика)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub nombre: String,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub precio: f64,
    pub tipo: String,
    pub proveedor: Option<EntityRef<Supplier>>,
    /// Id контакта внутри `proveedor.contactos`
    pub contacto: Option<RecordId>,
    pub fecha_creacion: Option<String>,
}

impl Entity for Article {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "articulos"
    }

    fn element_name() -> &'static str {
        "Artículo"
    }

    fn list_name() -> &'static str {
        "Artículos"
    }
}

impl EditableEntity for Article {
    type Payload = ArticleDto;

    fn to_payload(&self) -> ArticleDto {
        ArticleDto {
            nombre: self.nombre.clone(),
            precio: self.precio,
            tipo: self.tipo.clone(),
            proveedor: self.proveedor.as_ref().map(|p| p.id().clone()),
            contacto: self.contacto.clone(),
        }
    }
}

/// Форма артикула
///
/// Цена редактируется вручную; выбор контакта на неё не влияет.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub nombre: String,
    pub precio: f64,
    pub tipo: String,
    pub proveedor: Option<RecordId>,
    pub contacto: Option<RecordId>,
}

impl ArticleDto {
    /// Смена поставщика сбрасывает контакт: контакты принадлежат поставщику
    pub fn set_supplier(&mut self, supplier: Option<RecordId>) {
        if self.proveedor != supplier {
            self.contacto = None;
        }
        self.proveedor = supplier;
    }

    /// Контакт можно выбрать только при выбранном поставщике
    pub fn contact_enabled(&self) -> bool {
        self.proveedor.is_some()
    }
}

impl FormPayload for ArticleDto {
    fn validate(&self) -> Result<(), String> {
        if blank(&self.nombre) || blank(&self.tipo) {
            return Err("Por favor, complete el nombre y el tipo del artículo.".into());
        }
        if !self.precio.is_finite() || self.precio < 0.0 {
            return Err("El precio debe ser un número mayor o igual a 0.".into());
        }
        if self.contacto.is_some() && self.proveedor.is_none() {
            return Err("Seleccione un proveedor antes de elegir el contacto.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_may_arrive_populated_or_as_id() {
        let by_id: Article =
            serde_json::from_str(r#"{"_id":"a1","nombre":"Mesa","proveedor":"p1"}"#).unwrap();
        assert_eq!(by_id.proveedor.as_ref().map(|p| p.id().as_str()), Some("p1"));
        assert!(by_id.proveedor.as_ref().and_then(|p| p.populated()).is_none());

        let populated: Article = serde_json::from_str(
            r#"{"_id":"a2","nombre":"Silla","proveedor":{"_id":"p2","nombre":"Telas CA"}}"#,
        )
        .unwrap();
        let supplier = populated.proveedor.as_ref().and_then(|p| p.populated()).unwrap();
        assert_eq!(supplier.nombre, "Telas CA");
        assert_eq!(populated.to_payload().proveedor, Some(RecordId::new("p2")));
    }

    #[test]
    fn changing_supplier_clears_contact_and_keeps_price() {
        let mut dto = ArticleDto {
            nombre: "Tablero".into(),
            precio: 100.0,
            tipo: "Madera".into(),
            proveedor: Some("p1".into()),
            contacto: Some("c1".into()),
        };
        dto.set_supplier(Some("p1".into()));
        assert_eq!(dto.contacto, Some("c1".into()));

        dto.set_supplier(Some("p2".into()));
        assert_eq!(dto.contacto, None);
        assert_eq!(dto.precio, 100.0);
    }

    #[test]
    fn validation() {
        let mut dto = ArticleDto {
            nombre: "Tablero".into(),
            tipo: "Madera".into(),
            ..ArticleDto::default()
        };
        assert!(dto.validate().is_ok());
        dto.precio = -1.0;
        assert!(dto.validate().is_err());
        dto.precio = 5.0;
        dto.contacto = Some("c1".into());
        assert!(dto.validate().is_err());
        assert!(!dto.contact_enabled());
    }
}
