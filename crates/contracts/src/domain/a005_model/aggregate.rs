use crate::domain::common::{
    lenient,
    validation::{all_filled, blank, non_blank},
    EditableEntity, Entity, FormPayload, RecordId,
};
use serde::{Deserialize, Serialize};

/// Строка спецификации материалов модели
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelMaterial {
    pub nombre: String,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub cantidad: u32,
}

impl Default for ModelMaterial {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            cantidad: 1,
        }
    }
}

/// Модель изделия: спецификация материалов и цена продажи
///
/// `costo_produccion` считает бэкенд по спецификации, в форме только показывается.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub nombre: String,
    pub descripcion: String,
    pub categoria: String,
    pub material: Option<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub alto: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub ancho: Option<f64>,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub precio: f64,
    pub imagen_url: Option<String>,
    pub materiales: Vec<ModelMaterial>,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub costo_produccion: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub precio_venta: f64,
}

impl Model {
    /// "alto x ancho" или пустая строка, если размеры не заданы
    pub fn dimensions(&self) -> String {
        match (self.alto, self.ancho) {
            (Some(alto), Some(ancho)) => format!("{:.2} x {:.2}", alto, ancho),
            (Some(alto), None) => format!("{:.2} x -", alto),
            (None, Some(ancho)) => format!("- x {:.2}", ancho),
            (None, None) => String::new(),
        }
    }
}

impl Entity for Model {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "modelos"
    }

    fn element_name() -> &'static str {
        "Modelo"
    }

    fn list_name() -> &'static str {
        "Modelos"
    }
}

impl EditableEntity for Model {
    type Payload = ModelDto;

    fn to_payload(&self) -> ModelDto {
        ModelDto {
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
            categoria: self.categoria.clone(),
            material: self.material.clone(),
            alto: self.alto,
            ancho: self.ancho,
            precio: self.precio,
            imagen_url: self.imagen_url.clone(),
            materiales: self.materiales.clone(),
            precio_venta: self.precio_venta,
        }
    }
}

/// Форма модели. Себестоимость не отправляется: её пересчитывает сервер.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelDto {
    pub nombre: String,
    pub descripcion: String,
    pub categoria: String,
    pub material: Option<String>,
    pub alto: Option<f64>,
    pub ancho: Option<f64>,
    pub precio: f64,
    pub imagen_url: Option<String>,
    pub materiales: Vec<ModelMaterial>,
    pub precio_venta: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelWire<'a> {
    nombre: &'a str,
    descripcion: &'a str,
    categoria: &'a str,
    precio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alto: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ancho: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    imagen_url: Option<String>,
    materiales: &'a [ModelMaterial],
    precio_venta: f64,
}

impl Serialize for ModelDto {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let positive = |v: Option<f64>| v.filter(|x| x.is_finite() && *x > 0.0);
        ModelWire {
            nombre: self.nombre.trim(),
            descripcion: self.descripcion.trim(),
            categoria: self.categoria.trim(),
            precio: self.precio,
            material: non_blank(&self.material),
            alto: positive(self.alto),
            ancho: positive(self.ancho),
            imagen_url: non_blank(&self.imagen_url),
            materiales: &self.materiales,
            precio_venta: self.precio_venta,
        }
        .serialize(serializer)
    }
}

impl FormPayload for ModelDto {
    fn validate(&self) -> Result<(), String> {
        if !all_filled(&[&self.nombre, &self.categoria]) {
            return Err("Por favor, complete el nombre y la categoría del modelo.".into());
        }
        if self.materiales.is_empty()
            || self
                .materiales
                .iter()
                .any(|m| blank(&m.nombre) || m.cantidad < 1)
        {
            return Err("Por favor, agrega al menos un material con cantidad válida.".into());
        }
        if !self.precio_venta.is_finite() || self.precio_venta < 0.0 {
            return Err("El precio de venta debe ser un número mayor o igual a 0.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ModelDto {
        ModelDto {
            nombre: "Silla Nórdica".into(),
            categoria: "Sillas".into(),
            materiales: vec![ModelMaterial {
                nombre: "Madera de pino".into(),
                cantidad: 2,
            }],
            precio_venta: 120.0,
            ..ModelDto::default()
        }
    }

    #[test]
    fn at_least_one_named_material_is_required() {
        assert!(dto().validate().is_ok());
        assert!(ModelDto { materiales: vec![], ..dto() }.validate().is_err());
        assert!(ModelDto {
            materiales: vec![ModelMaterial { nombre: "".into(), cantidad: 1 }],
            ..dto()
        }
        .validate()
        .is_err());
        assert!(ModelDto {
            materiales: vec![ModelMaterial { nombre: "Tela".into(), cantidad: 0 }],
            ..dto()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn payload_omits_server_cost_and_empty_optionals() {
        let json = serde_json::to_value(&ModelDto {
            material: Some("".into()),
            alto: Some(0.0),
            ancho: Some(45.5),
            ..dto()
        })
        .unwrap();
        assert!(json.get("costoProduccion").is_none());
        assert!(json.get("material").is_none());
        assert!(json.get("alto").is_none());
        assert_eq!(json["ancho"], 45.5);
        assert_eq!(json["precioVenta"], 120.0);
    }

    #[test]
    fn dimensions_text() {
        let m = Model {
            alto: Some(80.0),
            ancho: Some(45.0),
            ..Model::default()
        };
        assert_eq!(m.dimensions(), "80.00 x 45.00");
        assert_eq!(Model::default().dimensions(), "");
    }
}
