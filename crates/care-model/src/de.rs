//! Lenient decoding helpers for backend JSON
//!
//! The backend is not consistent about scalar types: ids and room numbers
//! come back as numbers on some endpoints and strings on others, prices are
//! sometimes quoted, and empty collections are sometimes `null`.

use crate::bed::BedNumber;
use chrono::{DateTime, NaiveDate};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Scalar that may arrive as a JSON number or string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    /// Booleans, arrays, objects
    #[allow(dead_code)]
    Other(IgnoredAny),
}

impl Scalar {
    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s,
            Self::Other(_) => String::new(),
        }
    }

    /// Whole number in range for `T`; fractions and overflow are `None`
    pub(crate) fn into_int<T>(self) -> Option<T>
    where
        T: TryFrom<i64> + FromStr,
    {
        match self {
            Self::Int(n) => T::try_from(n).ok(),
            Self::Float(f) => whole(f).and_then(|n| T::try_from(n).ok()),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Other(_) => None,
        }
    }
}

// Beyond 2^53 a float no longer identifies a single integer.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

#[allow(clippy::cast_possible_truncation)]
fn whole(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT).then_some(f as i64)
}

/// Number-or-string into `String`; `null` and missing become empty.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(|s| s.into_text().trim().to_string())
        .unwrap_or_default())
}

/// Number-or-string into `Option<String>`; blank strings become `None`.
pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(|s| s.into_text().trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Number or numeric string into `f64`; anything unparseable becomes `0.0`.
pub(crate) fn price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Int(n)) => n as f64,
        Some(Scalar::Float(f)) => f,
        Some(Scalar::Text(s)) => s.trim().replace(',', "").parse().unwrap_or(0.0),
        Some(Scalar::Other(_)) | None => 0.0,
    })
}

/// Non-negative count; negatives, fractions, overflow and garbage are zero.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .and_then(Scalar::into_int)
        .unwrap_or(0))
}

/// Number or numeric string into an integer; anything else is `None`.
pub(crate) fn opt_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + FromStr,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_int))
}

/// Bed ordinal or label; negative or fractional numbers are `None`.
pub(crate) fn bed_number<'de, D>(deserializer: D) -> Result<Option<BedNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<Scalar>::deserialize(deserializer)?.and_then(|raw| match raw {
            Scalar::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| BedNumber::Text(s.to_string()))
            }
            other => other.into_int().map(BedNumber::Numeric),
        }),
    )
}

/// `null` or missing list into an empty `Vec`.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Boolean that defaults to `true` when `null`.
pub(crate) fn flag_default_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

pub(crate) const fn default_true() -> bool {
    true
}

/// `YYYY-MM-DD` or an RFC 3339 timestamp; unparseable values become `None`.
pub(crate) fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|raw| parse_date(&raw)))
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}
