use serde::Deserialize;
use validator::Validate;

use crate::domain::criteria::SearchCriteria;
use crate::domain::person::{PersonStatus, Sex};
use crate::dto::home::HomeQuery;

/// Search form submitted by the index page.
///
/// All fields arrive as query parameters; blank values count as absent.
/// The form never carries a page on submission, so committing new criteria
/// always lands on the first page.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchForm {
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    #[validate(range(max = 120))]
    pub min_age: Option<u32>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    #[validate(range(max = 120))]
    pub max_age: Option<u32>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub sex: Option<Sex>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub status: Option<PersonStatus>,
    /// Page requested by a pager link.
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub page: Option<usize>,
}

impl SearchForm {
    /// Normalizes the submitted fields into search criteria.
    pub fn into_criteria(self) -> SearchCriteria {
        SearchCriteria {
            name: self
                .name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            min_age: self.min_age,
            max_age: self.max_age,
            sex: self.sex,
            status: self.status,
        }
    }
}

impl From<SearchForm> for HomeQuery {
    fn from(form: SearchForm) -> Self {
        let page = form.page;
        Self {
            criteria: form.into_criteria(),
            page,
        }
    }
}
