use super::{Entity, RecordId};
use serde::{Deserialize, Serialize};

/// Ссылка на другую сущность
///
/// Бэкенд отдаёт ссылку либо "развёрнутой" (populate), либо голым id.
/// Порядок вариантов важен для `untagged`: строка никогда не совпадёт
/// с объектом, поэтому сначала пробуем объект.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef<T> {
    Populated(T),
    Id(RecordId),
}

impl<T: Entity> EntityRef<T> {
    pub fn id(&self) -> &RecordId {
        match self {
            EntityRef::Populated(entity) => entity.id(),
            EntityRef::Id(id) => id,
        }
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            EntityRef::Populated(entity) => Some(entity),
            EntityRef::Id(_) => None,
        }
    }

    /// Разрешить ссылку: развёрнутый объект или поиск по справочнику
    pub fn resolve<'a, F>(&'a self, lookup: F) -> Option<&'a T>
    where
        F: FnOnce(&RecordId) -> Option<&'a T>,
    {
        match self {
            EntityRef::Populated(entity) => Some(entity),
            EntityRef::Id(id) => lookup(id),
        }
    }
}

impl<T> From<RecordId> for EntityRef<T> {
    fn from(id: RecordId) -> Self {
        EntityRef::Id(id)
    }
}
