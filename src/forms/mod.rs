use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

pub mod home;
pub mod person;

/// Deserializes an optional form value, treating blank input as absent.
///
/// HTML forms submit untouched fields as empty strings; those must behave
/// like missing parameters rather than parse errors.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}
