//! Serde helpers for the value shapes the employee backend puts on the wire.
//!
//! Outgoing values are strict (`YYYY-MM-DD` dates, `YYYY` years). Incoming
//! records are decoded leniently: the backend is the source of truth and a
//! single odd row must not make the whole list unreadable.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a wire date: plain `YYYY-MM-DD`, or a timestamp whose first ten
/// characters are one (`2024-01-01T00:00:00.000Z`).
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(d);
    }
    match raw.get(..10).zip(raw.get(10..11)) {
        Some((date, "T" | " ")) => NaiveDate::parse_from_str(date, DATE_FORMAT).ok(),
        _ => None,
    }
}

/// Parse a year given as `YYYY` or as anything date-like starting with it.
pub fn parse_wire_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    let digits = raw.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if raw.len() > 4 && parse_wire_date(raw).is_none() {
        return None;
    }
    digits.parse().ok()
}

pub fn format_wire_year(year: i32) -> String {
    format!("{:04}", year)
}

/// `null` and a missing key both decode to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Enum-valued strings; unknown values decode to `None`.
pub fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        if s.trim().is_empty() {
            return None;
        }
        match s.parse::<T>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(value = %s, "Unknown enum value from backend, treating as unset");
                None
            }
        }
    }))
}

/// Missing or `null` flag means active: the backend activates on create.
pub fn active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// Lists of nested entries; entries that fail to decode are dropped.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(decode_entries(raw))
}

/// Like [`lenient_list`], but a missing or null list stays `None`.
pub fn lenient_optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.map(decode_entries))
}

fn decode_entries<T: DeserializeOwned>(raw: Vec<Value>) -> Vec<T> {
    raw.into_iter()
        .filter_map(|entry| match serde_json::from_value::<T>(entry) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(error = %e, "Dropping undecodable entry");
                None
            }
        })
        .collect()
}

pub mod date {
    use super::*;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_wire_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }
}

pub mod optional_date {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| {
            let parsed = parse_wire_date(&s);
            if parsed.is_none() && !s.trim().is_empty() {
                warn!(value = %s, "Unparsable date from backend, treating as unset");
            }
            parsed
        }))
    }
}

pub mod optional_year {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearRepr {
        Number(i32),
        Text(String),
    }

    pub fn serialize<S>(year: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match year {
            Some(y) => serializer.serialize_str(&format_wire_year(*y)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<YearRepr>::deserialize(deserializer)? {
            Some(YearRepr::Number(y)) => Some(y),
            Some(YearRepr::Text(s)) => parse_wire_year(&s),
            None => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamp_dates() {
        let expected = NaiveDate::from_ymd_opt(1994, 3, 7);
        assert_eq!(parse_wire_date("1994-03-07"), expected);
        assert_eq!(parse_wire_date("1994-03-07T00:00:00.000Z"), expected);
        assert_eq!(parse_wire_date("1994-03-07 10:00:00"), expected);
        assert_eq!(parse_wire_date("07/03/1994"), None);
        assert_eq!(parse_wire_date("1994-03-07junk"), None);
    }

    #[test]
    fn parses_years_from_text() {
        assert_eq!(parse_wire_year("2019"), Some(2019));
        assert_eq!(parse_wire_year("2019-01-01T00:00:00Z"), Some(2019));
        assert_eq!(parse_wire_year("19"), None);
        assert_eq!(parse_wire_year("20x9"), None);
        assert_eq!(format_wire_year(987), "0987");
    }
}
