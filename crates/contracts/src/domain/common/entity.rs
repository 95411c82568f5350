use super::RecordId;
use serde::{de::DeserializeOwned, Serialize};

/// Трейт для сущности, которой владеет бэкенд
///
/// Определяет идентификатор записи и статические метаданные класса
pub trait Entity: Clone + DeserializeOwned + 'static {
    /// Получить ID записи
    fn id(&self) -> &RecordId;

    /// Отображаемое имя записи (для подтверждений и уведомлений)
    fn display_name(&self) -> String;

    // ============================================================================
    // Метаданные класса сущности (статические данные)
    // ============================================================================

    /// Индекс сущности в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции REST (например, "proveedores")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Proveedor")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Proveedores")
    fn list_name() -> &'static str;

    /// Полное имя сущности (например, "a001_proveedores")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Путь коллекции относительно `/api`
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Путь конкретной записи относительно `/api`
    fn item_path(id: &RecordId) -> String {
        format!("/{}/{}", Self::collection_name(), id)
    }
}

/// Полезная нагрузка формы: то, что уходит на сервер при create/update
pub trait FormPayload: Serialize + Clone + Default + PartialEq + 'static {
    /// Проверка обязательных полей до отправки запроса
    ///
    /// Ошибка содержит сообщение для пользователя.
    fn validate(&self) -> Result<(), String>;
}

/// Сущность, которую можно создавать и редактировать через форму
pub trait EditableEntity: Entity {
    type Payload: FormPayload;

    /// Загрузить существующую запись в форму
    fn to_payload(&self) -> Self::Payload;
}
