//! Контроллер CRUD-экрана: load / submit / remove
//!
//! Правила согласованности:
//! - при ошибке хранилище не меняется, пользователь получает уведомление;
//! - пакет загрузок применяется целиком или не применяется вовсе;
//! - изменённая запись сверяется локально по ответу сервера, коллекции,
//!   которые сервер пересчитывает побочно, перечитываются одним пакетом.

use super::api::{ApiError, CollectionApi, CrudApi};
use super::request_guard::RequestGuard;
use super::store::{EntityStore, StoreCell};
use crate::shared::notify::{NoticeService, Notify};
use contracts::domain::common::{EditableEntity, Entity, FormPayload, Record, RecordId, SubmitAction};
use futures::future::{try_join_all, LocalBoxFuture};
use leptos::prelude::*;
use std::future::Future;
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CrudError {
    /// Форма не прошла проверку, запрос не отправлялся
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Действие недоступно в текущем состоянии записи
    #[error("{0}")]
    NotAllowed(String),
}

/// Загрузка, которая уже знает, куда положить результат
///
/// Применение откладывается до успеха всего пакета.
pub type PendingLoad = LocalBoxFuture<'static, Result<Box<dyn FnOnce()>, ApiError>>;

/// Выполнить загрузки параллельно и применить только если успешны все
pub async fn load_batch(loads: Vec<PendingLoad>) -> Result<(), ApiError> {
    let appliers = try_join_all(loads).await?;
    for apply in appliers {
        apply();
    }
    Ok(())
}

/// Пакетная загрузка экрана с уведомлением об ошибке
pub async fn load_screen<N: Notify>(notices: &N, loads: Vec<PendingLoad>) -> Result<(), ApiError> {
    let result = load_batch(loads).await;
    if let Err(e) = &result {
        log::error!("batch load failed: {}", e);
        notices.error(format!("Error al cargar los datos: {}", e));
    }
    result
}

/// Серверное действие с побочными эффектами, затем перечитывание
/// затронутых коллекций одним пакетом
pub async fn perform_and_refresh<N, Fut>(
    notices: &N,
    action: Fut,
    success: &str,
    refresh: impl FnOnce() -> Vec<PendingLoad>,
) -> Result<(), CrudError>
where
    N: Notify,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if let Err(e) = action.await {
        log::error!("action failed: {}", e);
        notices.error(format!("Error: {}", e));
        return Err(e.into());
    }
    notices.success(success);
    if let Err(e) = load_batch(refresh()).await {
        log::error!("refresh after action failed: {}", e);
        notices.error(format!("Error al actualizar los datos: {}", e));
    }
    Ok(())
}

pub struct CrudController<T, A, S, N> {
    api: A,
    store: S,
    guard: RequestGuard,
    notices: N,
    _entity: PhantomData<fn() -> T>,
}

impl<T, A: Clone, S: Clone, N: Clone> Clone for CrudController<T, A, S, N> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
            guard: self.guard.clone(),
            notices: self.notices.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T, A, S, N> CrudController<T, A, S, N>
where
    T: Entity,
    A: CollectionApi<T>,
    S: StoreCell<T>,
    N: Notify,
{
    pub fn new(api: A, store: S, notices: N) -> Self {
        Self::with_guard(api, store, notices, RequestGuard::new())
    }

    /// Контроллер коллекции экрана с guard-ом этого экрана
    ///
    /// Поколение запросов у контроллера своё, закрытие экрана общее.
    pub fn with_guard(api: A, store: S, notices: N, guard: RequestGuard) -> Self {
        Self {
            api,
            store,
            guard: guard.fork(),
            notices,
            _entity: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn guard(&self) -> &RequestGuard {
        &self.guard
    }

    pub fn notices(&self) -> &N {
        &self.notices
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Запросить коллекцию; результат применится, если билет ещё актуален
    pub fn prepare_load(&self) -> PendingLoad {
        let ticket = self.guard.begin();
        let api = self.api.clone();
        let store = self.store.clone();
        let guard = self.guard.clone();
        Box::pin(async move {
            let items = api.list().await?;
            let apply: Box<dyn FnOnce()> = Box::new(move || {
                if guard.is_current(ticket) {
                    store.write(|s| s.replace_all(items));
                } else {
                    log::debug!("{}: stale load dropped", T::full_name());
                }
            });
            Ok(apply)
        })
    }

    /// Перечитать коллекцию, которую сервер изменил побочно
    ///
    /// До применения ответа коллекция помечена устаревшей, при ошибке пометка остаётся.
    pub fn prepare_refresh(&self) -> PendingLoad {
        self.store.write(EntityStore::mark_stale);
        self.prepare_load()
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        let result = load_batch(vec![self.prepare_load()]).await;
        match &result {
            Ok(()) => log::info!("{}: loaded", T::full_name()),
            Err(e) => {
                log::error!("{}: load failed: {}", T::full_name(), e);
                self.notices.error(format!(
                    "Error al cargar {}: {}",
                    T::list_name().to_lowercase(),
                    e
                ));
            }
        }
        result
    }

    /// Удалить запись на сервере, затем ровно её из хранилища
    pub async fn remove(&self, id: &RecordId) -> Result<(), CrudError> {
        match self.api.remove(id).await {
            Ok(()) => {
                self.guard.invalidate();
                if !self.guard.is_disposed() {
                    self.store.write(|s| s.remove(id));
                }
                log::info!("{}: removed {}", T::full_name(), id);
                self.notices
                    .success(format!("{}: registro eliminado", T::element_name()));
                Ok(())
            }
            Err(e) => {
                log::error!("{}: remove {} failed: {}", T::full_name(), id, e);
                self.notices.error(format!("Error al eliminar: {}", e));
                Err(e.into())
            }
        }
    }

    /// Снимок записей (для тестов и вычислений вне реактивного контекста)
    pub fn snapshot(&self) -> Vec<T> {
        self.store.read(EntityStore::items).unwrap_or_default()
    }
}

impl<T, A, S, N> CrudController<T, A, S, N>
where
    T: EditableEntity,
    A: CrudApi<T>,
    S: StoreCell<T>,
    N: Notify,
{
    /// Проверить форму и отправить create или update
    pub async fn submit(&self, record: Record<T::Payload>) -> Result<(), CrudError> {
        if let Err(message) = record.payload().validate() {
            log::warn!("{}: validation failed: {}", T::full_name(), message);
            self.notices.warning(message.clone());
            return Err(CrudError::Validation(message));
        }

        let action = record.action();
        let result = match &record {
            Record::New(payload) => self.api.create(payload).await,
            Record::Existing(id, payload) => self.api.update(id, payload).await,
        };

        let saved = match result {
            Ok(saved) => saved,
            Err(e) => {
                log::error!("{}: {:?} failed: {}", T::full_name(), action, e);
                self.notices.error(format!("Error al guardar: {}", e));
                return Err(e.into());
            }
        };

        self.guard.invalidate();
        match saved {
            Some(entity) if !entity.id().is_empty() => {
                if !self.guard.is_disposed() {
                    self.store.write(|s| s.upsert(entity));
                }
            }
            _ => {
                // сервер не вернул запись
                if let Err(e) = load_batch(vec![self.prepare_load()]).await {
                    log::error!("{}: reload after save failed: {}", T::full_name(), e);
                }
            }
        }

        log::info!("{}: {:?} ok", T::full_name(), action);
        let message = match action {
            SubmitAction::Create => format!("{}: registro creado", T::element_name()),
            SubmitAction::Update => format!("{}: cambios guardados", T::element_name()),
        };
        self.notices.success(message);
        Ok(())
    }
}

/// Контроллер экрана в браузере
pub type ScreenController<T> =
    CrudController<T, super::api::HttpResource<T>, RwSignal<EntityStore<T>>, NoticeService>;

/// Guard экрана: при размонтировании все ответы отбрасываются
pub fn use_request_guard() -> RequestGuard {
    let guard = RequestGuard::new();
    let on_unmount = guard.clone();
    on_cleanup(move || on_unmount.dispose());
    guard
}

/// Контроллер коллекции экрана; экран делит guard между своими коллекциями
pub fn screen_controller<T>(notices: NoticeService, guard: RequestGuard) -> ScreenController<T>
where
    T: Entity + Send + Sync,
{
    CrudController::with_guard(
        super::api::HttpResource::new(),
        RwSignal::new(EntityStore::new()),
        notices,
        guard,
    )
}
