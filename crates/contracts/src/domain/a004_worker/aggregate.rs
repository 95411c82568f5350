use crate::domain::common::{
    lenient, validation::{all_filled, parse_iso_date},
    EditableEntity, Entity, FormPayload, RecordId,
};
use serde::{Deserialize, Serialize};

/// Сотрудник мастерской (trabajador)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Worker {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub nombre: String,
    pub apellido: String,
    pub cedula: String,
    pub email: String,
    pub telefono: String,
    pub cargo: String,
    /// Дата приёма на работу, ISO
    pub fecha_ingreso: String,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub salario: f64,
}

impl Worker {
    pub fn person_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido).trim().to_string()
    }
}

impl Entity for Worker {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> String {
        self.person_name()
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "trabajadores"
    }

    fn element_name() -> &'static str {
        "Trabajador"
    }

    fn list_name() -> &'static str {
        "Trabajadores"
    }
}

impl EditableEntity for Worker {
    type Payload = WorkerDto;

    fn to_payload(&self) -> WorkerDto {
        WorkerDto {
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            cedula: self.cedula.clone(),
            email: self.email.clone(),
            telefono: self.telefono.clone(),
            cargo: self.cargo.clone(),
            // В форме <input type="date"> нужна только дата
            fecha_ingreso: self.fecha_ingreso.chars().take(10).collect(),
            salario: self.salario,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerDto {
    pub nombre: String,
    pub apellido: String,
    pub cedula: String,
    pub email: String,
    pub telefono: String,
    pub cargo: String,
    pub fecha_ingreso: String,
    pub salario: f64,
}

impl FormPayload for WorkerDto {
    fn validate(&self) -> Result<(), String> {
        if !all_filled(&[
            &self.nombre,
            &self.apellido,
            &self.cedula,
            &self.email,
            &self.telefono,
            &self.cargo,
        ]) {
            return Err("Por favor, complete todos los campos requeridos.".into());
        }
        if parse_iso_date(&self.fecha_ingreso).is_none() {
            return Err("Indique una fecha de ingreso válida.".into());
        }
        if !self.salario.is_finite() || self.salario < 0.0 {
            return Err("El salario debe ser un número mayor o igual a 0.".into());
        }
        Ok(())
    }
}
