//! Data-source boundary of the portal.
//!
//! The traits here are the only way the rest of the application reaches the
//! remote records API. [`rest::RestApi`] implements them over HTTP;
//! [`mock::MockApi`] is an in-memory stand-in with the same paging and
//! filtering semantics, used by tests and offline development.
#![allow(async_fn_in_trait)]

use std::fmt::{Display, Formatter};

use crate::api::errors::ApiResult;
use crate::domain::criteria::SearchCriteria;
use crate::domain::person::Person;
use crate::domain::statistics::Statistics;
use crate::domain::tip::{NewTip, Tip};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

pub mod errors;
pub mod mock;
pub mod rest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page worth of listing request, derived fresh per fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 0-based page index.
    pub page: usize,
    pub size: usize,
    pub direction: SortDirection,
}

impl PageRequest {
    pub fn new(page: usize) -> Self {
        Self {
            page,
            size: DEFAULT_ITEMS_PER_PAGE,
            direction: SortDirection::default(),
        }
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// One page of person records with the metadata the server reported.
///
/// Replaces the previously displayed page wholesale; pages are never merged
/// or appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonPage {
    pub items: Vec<Person>,
    pub total_elements: u64,
    pub total_pages: usize,
    /// 0-based index of the page the server actually returned.
    pub page: usize,
}

pub trait PersonReader {
    /// Unfiltered listing, most recent records first.
    async fn list_latest(&self, page: PageRequest) -> ApiResult<PersonPage>;
    /// Filtered listing; only set criteria fields constrain the result.
    async fn search_persons(
        &self,
        criteria: &SearchCriteria,
        page: PageRequest,
    ) -> ApiResult<PersonPage>;
    async fn get_person_by_id(&self, id: i64) -> ApiResult<Option<Person>>;
}

pub trait TipReader {
    async fn list_tips(&self, record_id: i64) -> ApiResult<Vec<Tip>>;
}

pub trait TipWriter {
    async fn submit_tip(&self, tip: &NewTip) -> ApiResult<()>;
}

pub trait StatisticsReader {
    async fn get_statistics(&self) -> ApiResult<Statistics>;
}
