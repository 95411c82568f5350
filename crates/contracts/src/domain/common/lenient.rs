//! Терпимые десериализаторы для числовых полей
//!
//! Бэкенд местами отдаёт числа строками ("120.5") или `null`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
    Missing(()),
}

fn to_f64(value: NumberLike) -> f64 {
    match value {
        NumberLike::Number(n) => n,
        NumberLike::Text(s) => s.trim().replace(',', ".").parse().unwrap_or(0.0),
        NumberLike::Missing(()) => 0.0,
    }
}

pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(to_f64(NumberLike::deserialize(deserializer)?))
}

pub fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = to_f64(NumberLike::deserialize(deserializer)?);
    if value.is_finite() && value > 0.0 {
        Ok(value.round().min(u32::MAX as f64) as u32)
    } else {
        Ok(0)
    }
}

pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberLike::deserialize(deserializer)? {
        NumberLike::Number(n) => Some(n),
        NumberLike::Text(s) if s.trim().is_empty() => None,
        NumberLike::Text(s) => s.trim().replace(',', ".").parse().ok(),
        NumberLike::Missing(()) => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::f64_or_zero")]
        price: f64,
        #[serde(default, deserialize_with = "super::u32_or_zero")]
        qty: u32,
        #[serde(default, deserialize_with = "super::opt_f64")]
        height: Option<f64>,
    }

    #[test]
    fn accepts_numbers_strings_and_null() {
        let p: Probe = serde_json::from_str(r#"{"price":"12,5","qty":3,"height":null}"#).unwrap();
        assert_eq!(p.price, 12.5);
        assert_eq!(p.qty, 3);
        assert_eq!(p.height, None);

        let p: Probe = serde_json::from_str(r#"{"price":null,"qty":"-2","height":"80"}"#).unwrap();
        assert_eq!(p.price, 0.0);
        assert_eq!(p.qty, 0);
        assert_eq!(p.height, Some(80.0));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.price, 0.0);
        assert_eq!(p.qty, 0);
        assert_eq!(p.height, None);
    }
}
