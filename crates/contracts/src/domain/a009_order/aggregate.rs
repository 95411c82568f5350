use crate::domain::a003_client::Client;
use crate::domain::a005_model::Model;
use crate::domain::common::{
    lenient, validation::parse_iso_date, EditableEntity, Entity, EntityRef, FormPayload, RecordId,
};
use serde::{Deserialize, Serialize};

macro_rules! wire_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.as_str() == value)
            }
        }
    };
}

wire_enum!(PaymentStatus { Pendiente, Completado });
wire_enum!(DeliveryStatus { Pendiente, Entregado });
wire_enum!(PaymentMethod { Efectivo, Tarjeta });

/// Строка заказа клиента: модель и количество
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderItem {
    pub modelo: Option<EntityRef<Model>>,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub cantidad: u32,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub precio_unitario: f64,
}

/// Заказ клиента с оплатой и доставкой (pedido)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerOrder {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub cliente: Option<EntityRef<Client>>,
    pub fecha_entrega: String,
    pub estado_pago: PaymentStatus,
    pub estado_entrega: DeliveryStatus,
    pub modelos: Vec<OrderItem>,
    pub metodo_pago: PaymentMethod,
    pub con_factura: bool,
    /// Считает сервер
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub precio_total: f64,
}

impl CustomerOrder {
    pub fn client_id(&self) -> Option<&RecordId> {
        self.cliente.as_ref().map(EntityRef::id)
    }

    /// Путь смены статусов: PUT /pedidos/:id/estado
    pub fn status_path(id: &RecordId) -> String {
        format!("/{}/{}/estado", Self::collection_name(), id)
    }
}

impl Entity for CustomerOrder {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> String {
        match self.cliente.as_ref().and_then(EntityRef::populated) {
            Some(client) => format!("Pedido de {}", client.person_name()),
            None => format!("Pedido {}", self.id),
        }
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "pedidos"
    }

    fn element_name() -> &'static str {
        "Pedido"
    }

    fn list_name() -> &'static str {
        "Pedidos"
    }
}

impl EditableEntity for CustomerOrder {
    type Payload = CustomerOrderDto;

    fn to_payload(&self) -> CustomerOrderDto {
        CustomerOrderDto {
            cliente: self.client_id().cloned(),
            fecha_entrega: self.fecha_entrega.chars().take(10).collect(),
            estado_pago: self.estado_pago,
            estado_entrega: self.estado_entrega,
            modelos: self
                .modelos
                .iter()
                .map(|item| OrderItemDto {
                    modelo: item.modelo.as_ref().map(|m| m.id().clone()),
                    cantidad: item.cantidad,
                    precio_unitario: item
                        .modelo
                        .as_ref()
                        .and_then(EntityRef::populated)
                        .map_or(item.precio_unitario, |m| m.precio_venta),
                })
                .collect(),
            metodo_pago: self.metodo_pago,
            con_factura: self.con_factura,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub modelo: Option<RecordId>,
    pub cantidad: u32,
    pub precio_unitario: f64,
}

impl Default for OrderItemDto {
    fn default() -> Self {
        Self {
            modelo: None,
            cantidad: 1,
            precio_unitario: 0.0,
        }
    }
}

impl OrderItemDto {
    /// Выбор модели подставляет её цену продажи
    pub fn pick_model(&mut self, model_id: Option<RecordId>, models: &[Model]) {
        self.precio_unitario = model_id
            .as_ref()
            .and_then(|id| models.iter().find(|m| &m.id == id))
            .map_or(0.0, |m| m.precio_venta);
        self.modelo = model_id;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrderDto {
    pub cliente: Option<RecordId>,
    pub fecha_entrega: String,
    pub estado_pago: PaymentStatus,
    pub estado_entrega: DeliveryStatus,
    pub modelos: Vec<OrderItemDto>,
    pub metodo_pago: PaymentMethod,
    pub con_factura: bool,
}

impl CustomerOrderDto {
    /// Ориентировочная сумма в форме; итог всё равно считает сервер
    pub fn estimated_total(&self) -> f64 {
        self.modelos
            .iter()
            .map(|m| m.cantidad as f64 * m.precio_unitario)
            .sum()
    }

    pub fn status_update(&self) -> StatusUpdateDto {
        StatusUpdateDto {
            estado_pago: self.estado_pago,
            estado_entrega: self.estado_entrega,
        }
    }
}

impl FormPayload for CustomerOrderDto {
    fn validate(&self) -> Result<(), String> {
        if self.cliente.is_none() || parse_iso_date(&self.fecha_entrega).is_none() {
            return Err("Seleccione un cliente y una fecha de entrega válida.".into());
        }
        if self.modelos.is_empty()
            || self
                .modelos
                .iter()
                .any(|m| m.modelo.is_none() || m.cantidad == 0)
        {
            return Err(
                "Por favor, agrega al menos un modelo válido con cantidad mayor a 0.".into(),
            );
        }
        Ok(())
    }
}

/// Тело PUT /pedidos/:id/estado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateDto {
    pub estado_pago: PaymentStatus,
    pub estado_entrega: DeliveryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_populated_order() {
        let json = r#"{
            "_id": "pe1",
            "cliente": {"_id": "c1", "nombre": "Rosa", "apellido": "Pérez"},
            "fechaEntrega": "2024-06-10T00:00:00.000Z",
            "estadoPago": "Completado",
            "estadoEntrega": "Pendiente",
            "modelos": [{"modelo": {"_id": "m1", "nombre": "Mesa", "precioVenta": 300}, "cantidad": 2}],
            "metodoPago": "Tarjeta",
            "conFactura": true,
            "precioTotal": 600
        }"#;
        let order: CustomerOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.estado_pago, PaymentStatus::Completado);
        assert_eq!(order.display_name(), "Pedido de Rosa Pérez");

        let dto = order.to_payload();
        assert_eq!(dto.fecha_entrega, "2024-06-10");
        assert_eq!(dto.modelos[0].precio_unitario, 300.0);
        assert_eq!(dto.estimated_total(), 600.0);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn picking_model_sets_sale_price() {
        let models = vec![Model {
            id: "m1".into(),
            precio_venta: 150.0,
            ..Model::default()
        }];
        let mut item = OrderItemDto::default();
        item.pick_model(Some("m1".into()), &models);
        assert_eq!(item.precio_unitario, 150.0);
        item.pick_model(Some("zz".into()), &models);
        assert_eq!(item.precio_unitario, 0.0);
    }

    #[test]
    fn status_update_body() {
        let dto = CustomerOrderDto {
            estado_pago: PaymentStatus::Completado,
            estado_entrega: DeliveryStatus::Entregado,
            ..CustomerOrderDto::default()
        };
        let json = serde_json::to_value(dto.status_update()).unwrap();
        assert_eq!(json["estadoPago"], "Completado");
        assert_eq!(json["estadoEntrega"], "Entregado");
        assert_eq!(CustomerOrder::status_path(&"x".into()), "/pedidos/x/estado");
    }

    #[test]
    fn empty_lines_rejected() {
        let dto = CustomerOrderDto {
            cliente: Some("c1".into()),
            fecha_entrega: "2024-06-10".into(),
            ..CustomerOrderDto::default()
        };
        assert!(dto.validate().is_err());
    }
}
