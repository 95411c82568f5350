//! Мелкие проверки, общие для всех форм

/// Поле не заполнено (пустое или из одних пробелов)
pub fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Все перечисленные поля заполнены
pub fn all_filled(values: &[&str]) -> bool {
    values.iter().all(|v| !blank(v))
}

/// Необязательное текстовое поле: пустая строка уходит как отсутствующее
pub fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Дата в формате ISO (`YYYY-MM-DD`, допускается хвост времени)
pub fn parse_iso_date(value: &str) -> Option<chrono::NaiveDate> {
    let head = value.trim().get(..10)?;
    chrono::NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(blank(""));
        assert!(blank("   "));
        assert!(!blank(" x "));
        assert!(all_filled(&["a", "b"]));
        assert!(!all_filled(&["a", " "]));
    }

    #[test]
    fn non_blank_trims_and_drops_empty() {
        assert_eq!(non_blank(&Some("  ".into())), None);
        assert_eq!(non_blank(&Some(" V-1 ".into())), Some("V-1".into()));
        assert_eq!(non_blank(&None), None);
    }

    #[test]
    fn iso_dates_with_and_without_time() {
        assert!(parse_iso_date("2024-05-01").is_some());
        assert!(parse_iso_date("2024-05-01T10:00:00.000Z").is_some());
        assert!(parse_iso_date("01.05.2024").is_none());
        assert!(parse_iso_date("").is_none());
    }
}
