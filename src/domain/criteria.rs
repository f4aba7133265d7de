use serde::Serialize;
use thiserror::Error;

use crate::domain::person::{PersonStatus, Sex};

/// Upper bound accepted for both ends of the age range.
pub const MAX_AGE: u32 = 120;

/// Errors produced when validating search criteria.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("ages must be between 0 and {MAX_AGE}")]
    AgeOutOfRange,
    #[error("minimum age cannot be greater than maximum age")]
    InvertedAgeRange,
}

/// Normalized search criteria entered by a visitor.
///
/// Every field is optional; absence means no constraint on that dimension.
/// A fresh value is built per request, so criteria never outlive the page
/// that submitted them.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct SearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PersonStatus>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name filter, dropping blank input.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    pub fn min_age(mut self, age: u32) -> Self {
        self.min_age = Some(age);
        self
    }

    pub fn max_age(mut self, age: u32) -> Self {
        self.max_age = Some(age);
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn status(mut self, status: PersonStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no field constrains the listing.
    ///
    /// The list controller issues the unfiltered "latest records" query in
    /// that case and the filtered search query otherwise, even when only a
    /// single field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.min_age.is_none()
            && self.max_age.is_none()
            && self.sex.is_none()
            && self.status.is_none()
    }

    /// Rejects out-of-range ages and inverted age ranges.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if self.min_age.is_some_and(|age| age > MAX_AGE)
            || self.max_age.is_some_and(|age| age > MAX_AGE)
        {
            return Err(CriteriaError::AgeOutOfRange);
        }
        if let (Some(min), Some(max)) = (self.min_age, self.max_age)
            && min > max
        {
            return Err(CriteriaError::InvertedAgeRange);
        }
        Ok(())
    }
}
