//! Типизированное хранилище записей одной коллекции
//!
//! Записи лежат в арене (`Vec<Option<T>>`), индекс `id -> слот` даёт поиск
//! за O(1). Порядок итерации совпадает с порядком появления записей.

use contracts::domain::common::{Entity, RecordId};
use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    slots: Vec<Option<T>>,
    index: HashMap<RecordId, usize>,
    revision: u64,
    loaded: bool,
    stale: bool,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            revision: 0,
            loaded: false,
            stale: false,
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Полная замена содержимого ответом сервера
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.slots.clear();
        self.index.clear();
        for item in items {
            self.insert_or_replace(item);
        }
        self.loaded = true;
        self.stale = false;
        self.revision += 1;
    }

    /// Вставить новую или заменить существующую запись (по id)
    ///
    /// Возвращает `true`, если запись новая.
    pub fn upsert(&mut self, item: T) -> bool {
        let inserted = self.insert_or_replace(item);
        self.revision += 1;
        inserted
    }

    fn insert_or_replace(&mut self, item: T) -> bool {
        match self.index.get(item.id()) {
            Some(&slot) => {
                self.slots[slot] = Some(item);
                false
            }
            None => {
                self.index.insert(item.id().clone(), self.slots.len());
                self.slots.push(Some(item));
                true
            }
        }
    }

    /// Удалить ровно одну запись по id
    pub fn remove(&mut self, id: &RecordId) -> Option<T> {
        let slot = self.index.remove(id)?;
        let removed = self.slots.get_mut(slot).and_then(Option::take);
        self.revision += 1;
        if self.slots.len() > 32 && self.index.len() * 2 < self.slots.len() {
            self.compact();
        }
        removed
    }

    fn compact(&mut self) {
        let items: Vec<T> = self.slots.drain(..).flatten().collect();
        self.index.clear();
        for (slot, item) in items.iter().enumerate() {
            self.index.insert(item.id().clone(), slot);
        }
        self.slots = items.into_iter().map(Some).collect();
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.index
            .get(id)
            .and_then(|&slot| self.slots.get(slot))
            .and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Снимок записей в порядке появления
    pub fn items(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Счётчик изменений; растёт при каждой мутации
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Коллекция хотя бы раз загружена с сервера
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Данные заведомо устарели (сервер изменил их побочным эффектом)
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
        self.revision += 1;
    }
}

/// Ячейка, в которой живёт хранилище
///
/// В UI это `RwSignal`, в тестах - `Rc<RefCell<_>>`.
/// `None` означает, что ячейка уже уничтожена (компонент размонтирован).
pub trait StoreCell<T>: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&EntityStore<T>) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut EntityStore<T>) -> R) -> Option<R>;
}

impl<T> StoreCell<T> for RwSignal<EntityStore<T>>
where
    T: Send + Sync + 'static,
{
    fn read<R>(&self, f: impl FnOnce(&EntityStore<T>) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut EntityStore<T>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[cfg(test)]
impl<T: 'static> StoreCell<T> for std::rc::Rc<std::cell::RefCell<EntityStore<T>>> {
    fn read<R>(&self, f: impl FnOnce(&EntityStore<T>) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut EntityStore<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_client::Client;

    fn client(id: &str, nombre: &str) -> Client {
        Client {
            id: RecordId::new(id),
            nombre: nombre.into(),
            ..Client::default()
        }
    }

    #[test]
    fn upsert_replaces_in_place_and_keeps_order() {
        let mut store = EntityStore::new();
        store.replace_all(vec![client("1", "Ana"), client("2", "Luis")]);
        assert!(!store.upsert(client("1", "Ana María")));
        assert!(store.upsert(client("3", "Eva")));

        let names: Vec<_> = store.iter().map(|c| c.nombre.clone()).collect();
        assert_eq!(names, vec!["Ana María", "Luis", "Eva"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_drops_exactly_one_id() {
        let mut store = EntityStore::new();
        store.replace_all(vec![client("1", "Ana"), client("2", "Luis"), client("3", "Eva")]);
        let before = store.revision();

        assert_eq!(store.remove(&"2".into()).map(|c| c.nombre), Some("Luis".into()));
        assert!(store.remove(&"2".into()).is_none());
        assert!(store.revision() > before);

        let ids: Vec<_> = store.iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(store.get(&"3".into()).is_some());
    }

    #[test]
    fn compaction_keeps_index_consistent() {
        let mut store = EntityStore::new();
        store.replace_all((0..40).map(|i| client(&i.to_string(), "x")).collect());
        for i in 0..30 {
            store.remove(&RecordId::new(i.to_string()));
        }
        assert_eq!(store.len(), 10);
        for i in 30..40 {
            assert!(store.get(&RecordId::new(i.to_string())).is_some());
        }
        assert_eq!(store.iter().count(), 10);
    }

    #[test]
    fn replace_all_clears_stale_flag() {
        let mut store: EntityStore<Client> = EntityStore::new();
        assert!(!store.is_loaded());
        store.mark_stale();
        assert!(store.is_stale());
        store.replace_all(vec![]);
        assert!(store.is_loaded());
        assert!(!store.is_stale());
    }
}
