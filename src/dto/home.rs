use serde::Serialize;

use crate::domain::criteria::SearchCriteria;
use crate::domain::person::{Person, PersonStatus};
use crate::domain::statistics::Statistics;
use crate::pagination::Paginated;

/// Query parameters accepted by the index page service.
#[derive(Debug, Default)]
pub struct HomeQuery {
    /// Applied search criteria; empty criteria select the plain listing.
    pub criteria: SearchCriteria,
    /// 0-based page requested by the pager; absent after a fresh search.
    pub page: Option<usize>,
}

/// Person record paired with its derived status for rendering.
#[derive(Debug, Serialize)]
pub struct PersonCard {
    pub person: Person,
    pub status: PersonStatus,
}

impl From<Person> for PersonCard {
    fn from(person: Person) -> Self {
        let status = person.status();
        Self { person, status }
    }
}

/// Data required to render the main index template.
pub struct HomePageData {
    /// Paginated record cards shown in the grid.
    pub persons: Paginated<PersonCard>,
    /// Aggregate counts for the statistics cards, when they loaded.
    pub statistics: Option<Statistics>,
    /// Criteria echoed back into the search form.
    pub criteria: SearchCriteria,
    /// Query-string form of the criteria, appended to pager links.
    pub filter_query: String,
    /// Generic message shown when the listing could not be loaded.
    pub error: Option<String>,
}

impl HomePageData {
    /// Empty-result page shown when a fetch fails or criteria are rejected.
    pub fn empty(criteria: SearchCriteria, error: Option<String>) -> Self {
        let filter_query = filter_query(&criteria);
        Self {
            persons: Paginated::empty(),
            statistics: None,
            criteria,
            filter_query,
            error,
        }
    }
}

/// Serializes the applied criteria for use in pagination links.
pub fn filter_query(criteria: &SearchCriteria) -> String {
    serde_html_form::to_string(criteria).unwrap_or_default()
}
