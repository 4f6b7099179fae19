//! Currency amount parsing.
//!
//! Historical pay sheets carry amounts either as plain numbers or as text
//! with thousands separators ("1,20,450.00"). Both are accepted here and
//! normalised to [`Decimal`].

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

/// Parses a currency amount, ignoring thousands separators and surrounding whitespace.
///
/// # Examples
///
/// ```
/// use pay_revision_engine::models::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("50,000").unwrap(), Decimal::from(50000));
/// assert!(parse_amount("n/a").is_err());
/// ```
pub fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err("value is empty".to_string());
    }

    let value = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| format!("invalid amount '{}'", raw.trim()))?;
    check_amount(value)
}

/// Largest absolute amount accepted from pay history.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

fn check_amount(value: Decimal) -> Result<Decimal, String> {
    if value.abs() > MAX_AMOUNT {
        return Err(format!("amount {} exceeds the supported maximum of {}", value, MAX_AMOUNT));
    }
    Ok(value)
}

/// Parses a year cell, accepting spreadsheet-style integral floats ("2021.0").
pub fn parse_year(raw: &str) -> Result<i32, String> {
    let trimmed = raw.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Ok(year);
    }

    let value = parse_amount(trimmed).map_err(|_| format!("invalid year '{}'", trimmed))?;
    if !value.fract().is_zero() {
        return Err(format!("year '{}' is not a whole number", trimmed));
    }
    value
        .to_i32()
        .ok_or_else(|| format!("year '{}' is out of range", trimmed))
}

/// Rounds a money value to two decimal places, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Number(Decimal),
    Text(String),
}

/// Serde helper accepting an amount as a JSON/YAML number or a separator-bearing string.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match AmountRepr::deserialize(deserializer)? {
        AmountRepr::Number(value) => check_amount(value).map_err(serde::de::Error::custom),
        AmountRepr::Text(text) => parse_amount(&text).map_err(serde::de::Error::custom),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Serde helper accepting a year as an integer, an integral float or text.
pub fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match YearRepr::deserialize(deserializer)? {
        YearRepr::Integer(value) => i32::try_from(value)
            .map_err(|_| serde::de::Error::custom(format!("year '{}' is out of range", value))),
        YearRepr::Float(value) => parse_year(&value.to_string()).map_err(serde::de::Error::custom),
        YearRepr::Text(text) => parse_year(&text).map_err(serde::de::Error::custom),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextRepr {
    Text(String),
    Integer(i64),
}

/// Serde helper accepting identifiers given either as text or as an integer.
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextRepr::deserialize(deserializer)? {
        TextRepr::Text(text) => text.trim().to_string(),
        TextRepr::Integer(value) => value.to_string(),
    })
}
