//! Защита от устаревших ответов
//!
//! Каждая загрузка получает `Ticket` с номером поколения. Ответ применяется,
//! только если за время запроса не стартовала более новая загрузка той же
//! коллекции, не было мутации и экран не был закрыт.
//!
//! Экран держит один guard, а каждая его коллекция работает через `fork`:
//! поколения у коллекций свои, флаг закрытия общий.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    generation: Arc<AtomicU64>,
    disposed: Arc<AtomicBool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guard для ещё одной коллекции того же экрана
    pub fn fork(&self) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            disposed: Arc::clone(&self.disposed),
        }
    }

    /// Начать загрузку: все ранее выданные билеты становятся устаревшими
    pub fn begin(&self) -> Ticket {
        Ticket {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.is_disposed() && self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Мутация прошла: загрузки, начатые до неё, больше не применяются
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Экран закрыт: никакие ответы больше не применяются
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_load_supersedes_older() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn mutation_invalidates_inflight_load() {
        let guard = RequestGuard::new();
        let ticket = guard.begin();
        guard.invalidate();
        assert!(!guard.is_current(ticket));
    }

    #[test]
    fn forks_keep_separate_generations() {
        let screen = RequestGuard::new();
        let articles = screen.fork();
        let suppliers = screen.fork();
        let a = articles.begin();
        let s = suppliers.begin();
        assert!(articles.is_current(a));
        assert!(suppliers.is_current(s));

        suppliers.invalidate();
        assert!(articles.is_current(a));
        assert!(!suppliers.is_current(s));
    }

    #[test]
    fn dispose_reaches_every_fork() {
        let screen = RequestGuard::new();
        let articles = screen.fork();
        let ticket = articles.begin();
        screen.dispose();
        assert!(articles.is_disposed());
        assert!(!articles.is_current(ticket));
    }

    #[test]
    fn disposed_guard_rejects_everything() {
        let guard = RequestGuard::new();
        let clone = guard.clone();
        let ticket = guard.begin();
        clone.dispose();
        assert!(guard.is_disposed());
        assert!(!guard.is_current(ticket));
        assert!(!guard.is_current(guard.begin()));
    }
}
