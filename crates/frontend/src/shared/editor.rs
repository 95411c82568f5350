//! Состояние формы создания/редактирования
//!
//! Одна форма на экран: либо новая запись, либо существующая (с id).

use super::crud::{CollectionApi, CrudApi, CrudController, StoreCell};
use super::notify::Notify;
use contracts::domain::common::{EditableEntity, Entity, FormPayload, Record, RecordId};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub struct EditorState<P: FormPayload + Send + Sync> {
    pub form: RwSignal<P>,
    pub editing: RwSignal<Option<RecordId>>,
    pub open: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl<P: FormPayload + Send + Sync> Clone for EditorState<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FormPayload + Send + Sync> Copy for EditorState<P> {}

impl<P: FormPayload + Send + Sync> EditorState<P> {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(P::default()),
            editing: RwSignal::new(None),
            open: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    /// Открыть пустую форму
    pub fn start_new(&self) {
        self.editing.set(None);
        self.form.set(P::default());
        self.open.set(true);
    }

    /// Загрузить запись в форму
    pub fn start_edit<T: EditableEntity<Payload = P>>(&self, entity: &T) {
        self.editing.set(Some(entity.id().clone()));
        self.form.set(entity.to_payload());
        self.open.set(true);
    }

    /// Закрыть и очистить форму
    ///
    /// Может вызываться после await, когда экран уже закрыт.
    pub fn close(&self) {
        self.open.try_set(false);
        self.editing.try_set(None);
        self.form.try_set(P::default());
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.with(Option::is_some)
    }

    /// Снимок формы для отправки
    pub fn record(&self) -> Record<P> {
        Record::from_parts(self.editing.get_untracked(), self.form.get_untracked())
    }

    pub fn title(&self, element: &str) -> String {
        if self.is_edit_mode() {
            format!("Editar {}", element.to_lowercase())
        } else {
            format!("Nuevo registro: {}", element.to_lowercase())
        }
    }

    /// Отправить форму через контроллер; при успехе форма закрывается
    pub fn submit<T, A, S, N>(&self, ctl: CrudController<T, A, S, N>)
    where
        T: EditableEntity<Payload = P>,
        A: CrudApi<T>,
        S: StoreCell<T>,
        N: Notify,
    {
        let editor = *self;
        if editor.saving.get_untracked() {
            return;
        }
        editor.saving.set(true);
        spawn_local(async move {
            if ctl.submit(editor.record()).await.is_ok() {
                editor.close();
            }
            editor.saving.try_set(false);
        });
    }
}

impl<P: FormPayload + Send + Sync> Default for EditorState<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Подтверждение через диалог браузера
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Спросить пользователя и удалить запись
pub fn delete_with_confirm<T, A, S, N>(ctl: CrudController<T, A, S, N>, entity: &T)
where
    T: Entity,
    A: CollectionApi<T>,
    S: StoreCell<T>,
    N: Notify,
{
    let question = format!(
        "¿Eliminar {} \"{}\"?",
        T::element_name().to_lowercase(),
        entity.display_name()
    );
    if !confirm(&question) {
        return;
    }
    let id = entity.id().clone();
    spawn_local(async move {
        let _ = ctl.remove(&id).await;
    });
}
