use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when parsing an enum value from user input.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized value: {0}")]
pub struct UnknownVariant(pub String);

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "MALE",
            Sex::Female => "FEMALE",
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MALE" => Ok(Sex::Male),
            "FEMALE" => Ok(Sex::Female),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Whether a record currently counts as missing or located.
///
/// Never stored: derived from the last occurrence via [`Person::status`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonStatus {
    Missing,
    Located,
}

impl PersonStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PersonStatus::Missing => "MISSING",
            PersonStatus::Located => "LOCATED",
        }
    }
}

impl Display for PersonStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MISSING" => Ok(PersonStatus::Missing),
            "LOCATED" => Ok(PersonStatus::Located),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Kind of downloadable poster attached to an occurrence.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosterKind {
    PdfMissing,
    PdfLocated,
    JpgMissing,
    JpgLocated,
    InstagramMissing,
    InstagramLocated,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Poster {
    pub url: String,
    pub kind: Option<PosterKind>,
}

/// Latest occurrence attached to a person record.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Occurrence {
    /// Date the person went missing.
    pub disappeared_on: Option<NaiveDate>,
    /// Date the person was found; absence classifies the record as missing.
    pub located_on: Option<NaiveDate>,
    pub found_alive: Option<bool>,
    /// Free-text description of where the person was last seen.
    pub location: Option<String>,
    /// Interview notes collected when the record was opened.
    pub details: Option<String>,
    /// Clothing the person was last seen wearing.
    pub clothing: Option<String>,
    #[serde(default)]
    pub posters: Vec<Poster>,
}

/// Person record as served by the remote records API.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub photo_url: Option<String>,
    pub last_occurrence: Option<Occurrence>,
}

impl Person {
    /// Classifies the record as missing or located.
    ///
    /// A record with no location-found date is missing; any location-found
    /// date makes it located. Pure function of the record, recomputed on
    /// every render.
    pub fn status(&self) -> PersonStatus {
        match self
            .last_occurrence
            .as_ref()
            .and_then(|occurrence| occurrence.located_on)
        {
            Some(_) => PersonStatus::Located,
            None => PersonStatus::Missing,
        }
    }
}
