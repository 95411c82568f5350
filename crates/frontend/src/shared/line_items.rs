//! Табличные части форм (контакты, материалы, строки заказа)
//!
//! Строки адресуются индексом в массиве: у новых строк нет id.

/// Добавить строку в конец
pub fn add<T>(items: &mut Vec<T>, item: T) {
    items.push(item);
}

/// Изменить строку по индексу; индекс за пределами игнорируется
pub fn update_at<T>(items: &mut [T], index: usize, f: impl FnOnce(&mut T)) -> bool {
    match items.get_mut(index) {
        Some(item) => {
            f(item);
            true
        }
        None => false,
    }
}

/// Удалить строку по индексу (splice)
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    (index < items.len()).then(|| items.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_by_index() {
        let mut rows = vec!["a".to_string(), "b".to_string()];
        add(&mut rows, "c".to_string());
        assert!(update_at(&mut rows, 1, |r| r.push('!')));
        assert!(!update_at(&mut rows, 9, |r| r.clear()));
        assert_eq!(rows, vec!["a", "b!", "c"]);
    }

    #[test]
    fn remove_shifts_following_rows() {
        let mut rows = vec![1, 2, 3];
        assert_eq!(remove_at(&mut rows, 0), Some(1));
        assert_eq!(remove_at(&mut rows, 5), None);
        assert_eq!(rows, vec![2, 3]);
    }
}
