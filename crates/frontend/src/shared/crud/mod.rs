//! Общий CRUD-слой для всех экранов
//!
//! - `store` - типизированное хранилище записей (арена + индекс по id)
//! - `request_guard` - поколение запросов: отбрасывает устаревшие ответы
//! - `api` - HTTP-клиент REST бэкенда и трейты для подмены в тестах
//! - `controller` - load / submit / remove / пакетная загрузка

pub mod api;
pub mod controller;
pub mod request_guard;
pub mod store;

pub use api::{ActionApi, ApiError, CollectionApi, CrudApi, HttpClient, HttpResource};
pub use controller::{
    load_batch, load_screen, perform_and_refresh, screen_controller, CrudController, CrudError,
    PendingLoad, ScreenController, use_request_guard,
};
pub use request_guard::{RequestGuard, Ticket};
pub use store::{EntityStore, StoreCell};
