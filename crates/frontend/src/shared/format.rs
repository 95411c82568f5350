//! Форматирование чисел, денег и дат для таблиц (формат es-VE)

/// Число с разделителем тысяч "." и десятичной запятой
///
/// ```
/// # use frontend::shared::format::format_number;
/// assert_eq!(format_number(1234.5, 2), "1.234,50");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежная сумма: "$1.234,50"
pub fn format_money(value: f64) -> String {
    format!("${}", format_number(value, 2))
}

pub fn format_int(value: f64) -> String {
    format_number(value, 0)
}

/// "2024-03-15" или "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Дата и время без секундных долей: "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let time: String = time_part.chars().take(5).collect();
        return format!("{} {}", format_date(date_part), time);
    }
    format_date(datetime_str)
}

/// Значение для `<input type="date">`
pub fn date_input_value(date_str: &str) -> String {
    date_str.chars().take(10).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(1234.567, 2), "1.234,57");
        assert_eq!(format_number(1234567.0, 0), "1.234.567");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-1234.5, 1), "-1.234,5");
        assert_eq!(format_number(-0.001, 2), "0,00");
    }

    #[test]
    fn money_has_currency_sign() {
        assert_eq!(format_money(0.0), "$0,00");
        assert_eq!(format_money(1500.0), "$1.500,00");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_date("sin fecha"), "sin fecha");
        assert_eq!(date_input_value("2024-03-15T00:00:00.000Z"), "2024-03-15");
    }
}
