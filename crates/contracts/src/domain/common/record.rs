use super::RecordId;

/// Что именно уйдёт на сервер при сабмите формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Create,
    Update,
}

/// Запись формы: новая (ещё без id) или существующая
#[derive(Debug, Clone, PartialEq)]
pub enum Record<P> {
    New(P),
    Existing(RecordId, P),
}

impl<P> Record<P> {
    /// Собрать запись из состояния формы; пустой id считается отсутствующим
    pub fn from_parts(id: Option<RecordId>, payload: P) -> Self {
        match id {
            Some(id) if !id.is_empty() => Record::Existing(id, payload),
            _ => Record::New(payload),
        }
    }

    pub fn action(&self) -> SubmitAction {
        match self {
            Record::New(_) => SubmitAction::Create,
            Record::Existing(..) => SubmitAction::Update,
        }
    }

    pub fn id(&self) -> Option<&RecordId> {
        match self {
            Record::New(_) => None,
            Record::Existing(id, _) => Some(id),
        }
    }

    pub fn payload(&self) -> &P {
        match self {
            Record::New(payload) | Record::Existing(_, payload) => payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_id_means_new() {
        assert_eq!(Record::from_parts(None, 1).action(), SubmitAction::Create);
        assert_eq!(
            Record::from_parts(Some(RecordId::new("  ")), 1).action(),
            SubmitAction::Create
        );
    }

    #[test]
    fn present_id_means_existing() {
        let record = Record::from_parts(Some(RecordId::new("65af")), 7);
        assert_eq!(record.action(), SubmitAction::Update);
        assert_eq!(record.id().map(RecordId::as_str), Some("65af"));
        assert_eq!(*record.payload(), 7);
    }
}
