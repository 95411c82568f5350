//! Всплывающие уведомления
//!
//! Сервис кладётся в контекст приложения (`provide_context`), экраны
//! и контроллеры сообщают через него об успехах и ошибках. Уведомление
//! исчезает само через `AUTO_DISMISS_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const AUTO_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Получатель уведомлений (реальный сервис или запись в тестах)
pub trait Notify: Clone + 'static {
    fn notify(&self, level: NoticeLevel, message: String);

    fn success(&self, message: impl Into<String>) {
        self.notify(NoticeLevel::Success, message.into());
    }

    fn warning(&self, message: impl Into<String>) {
        self.notify(NoticeLevel::Warning, message.into());
    }

    fn error(&self, message: impl Into<String>) {
        self.notify(NoticeLevel::Error, message.into());
    }
}

#[derive(Clone, Copy)]
pub struct NoticeService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for NoticeService {
    fn notify(&self, level: NoticeLevel, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.notices.update(|list| list.push(Notice { id, level, message }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }
}

pub fn use_notices() -> NoticeService {
    use_context::<NoticeService>().unwrap_or_default()
}

/// Стопка уведомлений в правом верхнем углу
#[component]
pub fn NoticeHost() -> impl IntoView {
    let svc = use_notices();

    view! {
        <div class="notice-host">
            <For
                each=move || svc.notices()
                key=|n| n.id
                children=move |n: Notice| {
                    let id = n.id;
                    view! {
                        <div class=format!("notice notice--{}", n.level.css_modifier())>
                            <span class="notice__text">{n.message.clone()}</span>
                            <button class="notice__close" on:click=move |_| svc.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Запоминает уведомления вместо показа
    #[derive(Clone, Default)]
    pub struct RecordingNotify {
        pub log: Rc<RefCell<Vec<(NoticeLevel, String)>>>,
    }

    impl RecordingNotify {
        pub fn levels(&self) -> Vec<NoticeLevel> {
            self.log.borrow().iter().map(|(l, _)| *l).collect()
        }

        pub fn last(&self) -> Option<(NoticeLevel, String)> {
            self.log.borrow().last().cloned()
        }
    }

    impl Notify for RecordingNotify {
        fn notify(&self, level: NoticeLevel, message: String) {
            self.log.borrow_mut().push((level, message));
        }
    }
}
