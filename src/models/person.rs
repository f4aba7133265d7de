//! JSON wire models for the records API.
//!
//! The remote API speaks camelCase; these structs absorb that contract at
//! the boundary so domain types stay independent of it.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::PersonPage;
use crate::domain::person::{Occurrence, Person, Poster, PosterKind, Sex};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterDto {
    pub url: String,
    pub kind: Option<PosterKind>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceDto {
    pub disappeared_on: Option<NaiveDate>,
    pub located_on: Option<NaiveDate>,
    pub found_alive: Option<bool>,
    pub location: Option<String>,
    pub details: Option<String>,
    pub clothing: Option<String>,
    #[serde(default)]
    pub posters: Vec<PosterDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub photo_url: Option<String>,
    pub last_occurrence: Option<OccurrenceDto>,
}

/// Spring-style page envelope returned by the listing endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub content: Option<Vec<PersonDto>>,
    pub total_elements: Option<u64>,
    pub total_pages: Option<usize>,
    pub number: Option<usize>,
}

impl From<PosterDto> for Poster {
    fn from(dto: PosterDto) -> Self {
        Self {
            url: dto.url,
            kind: dto.kind,
        }
    }
}

impl From<OccurrenceDto> for Occurrence {
    fn from(dto: OccurrenceDto) -> Self {
        Self {
            disappeared_on: dto.disappeared_on,
            located_on: dto.located_on,
            found_alive: dto.found_alive,
            location: dto.location,
            details: dto.details,
            clothing: dto.clothing,
            posters: dto.posters.into_iter().map(Poster::from).collect(),
        }
    }
}

impl From<PersonDto> for Person {
    fn from(dto: PersonDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            age: dto.age,
            sex: dto.sex,
            photo_url: dto.photo_url,
            last_occurrence: dto.last_occurrence.map(Occurrence::from),
        }
    }
}

impl From<PageDto> for PersonPage {
    fn from(dto: PageDto) -> Self {
        Self {
            items: dto
                .content
                .unwrap_or_default()
                .into_iter()
                .map(Person::from)
                .collect(),
            total_elements: dto.total_elements.unwrap_or(0),
            total_pages: dto.total_pages.unwrap_or(0),
            page: dto.number.unwrap_or(0),
        }
    }
}
