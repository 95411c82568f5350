/// Форматирует число с разделителями тысяч (точками)
///
/// ```
/// use gateway::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// ```
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Сумма в формате es-VE: "1.234,5", "12", "0,25"
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// "2024-06-01" -> "1/6/2024"
pub fn format_date(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%-d/%-m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn amounts_use_venezuelan_separators() {
        assert_eq!(format_amount(1234.5), "1.234,5");
        assert_eq!(format_amount(12.0), "12");
        assert_eq!(format_amount(0.25), "0,25");
        assert_eq!(format_amount(-1500.75), "-1.500,75");
    }

    #[test]
    fn dates_are_day_first() {
        assert_eq!(format_date("2024-06-01"), "1/6/2024");
        assert_eq!(format_date("2024-12-25T00:00:00.000Z"), "25/12/2024");
        assert_eq!(format_date("pronto"), "pronto");
    }
}
