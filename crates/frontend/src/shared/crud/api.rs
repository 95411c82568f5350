//! HTTP-клиент REST API и трейты для подмены в тестах

use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use contracts::domain::common::{EditableEntity, Entity, RecordId};
use contracts::shared::api::{ApiEnvelope, ApiErrorBody};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use thiserror::Error;

/// Ошибка обращения к API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Сервер ответил статусом не 2xx; `message` из тела ответа
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Error de red: {0}")]
    Network(String),
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn server(status: u16, body: &str) -> Self {
        let message = ApiErrorBody::message_from(body).unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Server { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Чтение и удаление записей коллекции
#[async_trait(?Send)]
pub trait CollectionApi<T: Entity>: Clone + 'static {
    async fn list(&self) -> Result<Vec<T>, ApiError>;
    async fn remove(&self, id: &RecordId) -> Result<(), ApiError>;
}

/// Создание и изменение записей через форму
///
/// `Ok(None)` - сервер не вернул запись, коллекцию нужно перечитать.
#[async_trait(?Send)]
pub trait CrudApi<T: EditableEntity>: CollectionApi<T> {
    async fn create(&self, payload: &T::Payload) -> Result<Option<T>, ApiError>;
    async fn update(&self, id: &RecordId, payload: &T::Payload) -> Result<Option<T>, ApiError>;
}

/// Действия с побочными эффектами на сервере (подтверждение приёмки,
/// смена статуса заказа, движение склада)
#[async_trait(?Send)]
pub trait ActionApi: Clone + 'static {
    async fn post_action(&self, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError>;
    async fn put_action(&self, path: &str, body: serde_json::Value) -> Result<(), ApiError>;
}

/// REST-ресурс коллекции `T`
pub struct HttpResource<T> {
    _entity: PhantomData<fn() -> T>,
}

impl<T> HttpResource<T> {
    pub fn new() -> Self {
        Self { _entity: PhantomData }
    }
}

impl<T> Default for HttpResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for HttpResource<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl<T: Entity> CollectionApi<T> for HttpResource<T> {
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        Ok(get_json::<Vec<T>>(&T::collection_path()).await?.unwrap_or_default())
    }

    async fn remove(&self, id: &RecordId) -> Result<(), ApiError> {
        delete(&T::item_path(id)).await
    }
}

#[async_trait(?Send)]
impl<T: EditableEntity> CrudApi<T> for HttpResource<T> {
    async fn create(&self, payload: &T::Payload) -> Result<Option<T>, ApiError> {
        send_json(Request::post(&api_url(&T::collection_path())), payload).await
    }

    async fn update(&self, id: &RecordId, payload: &T::Payload) -> Result<Option<T>, ApiError> {
        send_json(Request::put(&api_url(&T::item_path(id))), payload).await
    }
}

/// Клиент для произвольных путей API
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClient;

#[async_trait(?Send)]
impl ActionApi for HttpClient {
    async fn post_action(&self, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        let builder = Request::post(&api_url(path));
        match body {
            Some(body) => send_json::<serde_json::Value, _>(builder, &body).await.map(|_| ()),
            None => {
                let response = builder.send().await.map_err(network)?;
                check(response).await.map(|_| ())
            }
        }
    }

    async fn put_action(&self, path: &str, body: serde_json::Value) -> Result<(), ApiError> {
        send_json::<serde_json::Value, _>(Request::put(&api_url(path)), &body)
            .await
            .map(|_| ())
    }
}

/// GET с разбором конверта `{ data }`
pub async fn get_json<R: DeserializeOwned>(path: &str) -> Result<Option<R>, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network)?;
    decode(check(response).await?)
}

/// POST с JSON-телом и разбором конверта `{ data }`
pub async fn post_json<B: Serialize, R: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<Option<R>, ApiError> {
    send_json(Request::post(&api_url(path)), body).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path)).send().await.map_err(network)?;
    check(response).await.map(|_| ())
}

async fn send_json<R: DeserializeOwned, B: Serialize>(
    builder: RequestBuilder,
    body: &B,
) -> Result<Option<R>, ApiError> {
    let payload = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = builder
        .header("Content-Type", "application/json")
        .body(payload)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(check(response).await?)
}

/// Тело успешного ответа или `ApiError::Server`
async fn check(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(network)?;
    if (200..300).contains(&status) {
        Ok(text)
    } else {
        Err(ApiError::server(status, &text))
    }
}

fn decode<R: DeserializeOwned>(text: String) -> Result<Option<R>, ApiError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<ApiEnvelope<R>>(&text)
        .map(ApiEnvelope::into_data)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}


#[cfg(test)]
pub mod testing {
    use super::{ActionApi, ApiError};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Записывает вызовы действий; может отвечать ошибкой
    #[derive(Clone, Default)]
    pub struct RecordingActions {
        pub calls: Rc<RefCell<Vec<(String, String, Option<serde_json::Value>)>>>,
        pub failure: Rc<RefCell<Option<ApiError>>>,
    }

    impl RecordingActions {
        pub fn failing(error: ApiError) -> Self {
            let api = Self::default();
            *api.failure.borrow_mut() = Some(error);
            api
        }

        pub fn paths(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .map(|(method, path, _)| format!("{} {}", method, path))
                .collect()
        }

        pub fn last_body(&self) -> Option<serde_json::Value> {
            self.calls.borrow().last().and_then(|(_, _, body)| body.clone())
        }

        fn record(&self, method: &str, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push((method.to_string(), path.to_string(), body));
            match self.failure.borrow().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ActionApi for RecordingActions {
        async fn post_action(&self, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
            self.record("POST", path, body)
        }

        async fn put_action(&self, path: &str, body: serde_json::Value) -> Result<(), ApiError> {
            self.record("PUT", path, Some(body))
        }
    }
}
