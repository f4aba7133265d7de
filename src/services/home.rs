//! List controller for the main record listing.
//!
//! Owns the fetch lifecycle of the index page: decides which of the two
//! listing queries to issue, replaces records and page metadata atomically
//! on success, and absorbs any fetch failure into an empty result set with
//! a single generic message. Nothing is retried; the visitor re-triggers by
//! changing filters or pages.

use crate::api::{PageRequest, PersonReader, StatisticsReader};
use crate::dto::home::{HomePageData, HomeQuery, PersonCard, filter_query};
use crate::pagination::Paginated;

/// Generic message shown when the record listing cannot be loaded.
pub const FETCH_ERROR_MESSAGE: &str = "Could not load records right now. Please try again later.";

/// Loads the record listing for the index page.
///
/// Empty criteria issue the unfiltered "latest records" query; criteria with
/// any field set issue the filtered search query. The two are mutually
/// exclusive per request.
pub async fn load_home_page<A>(api: &A, query: HomeQuery) -> HomePageData
where
    A: PersonReader + StatisticsReader + ?Sized,
{
    let HomeQuery { criteria, page } = query;

    if let Err(err) = criteria.validate() {
        log::warn!("Rejected search criteria: {err}");
        return HomePageData::empty(criteria, Some(format!("{err}.")));
    }

    let statistics = match api.get_statistics().await {
        Ok(statistics) => Some(statistics),
        Err(err) => {
            log::error!("Failed to load statistics: {err}");
            None
        }
    };

    let request = PageRequest::new(page.unwrap_or(0));
    let result = if criteria.is_empty() {
        api.list_latest(request).await
    } else {
        api.search_persons(&criteria, request).await
    };

    match result {
        Ok(page) => {
            let cards = page.items.into_iter().map(PersonCard::from).collect();
            let persons = Paginated::new(cards, page.page, page.total_pages, page.total_elements);
            let filter_query = filter_query(&criteria);

            HomePageData {
                persons,
                statistics,
                criteria,
                filter_query,
                error: None,
            }
        }
        Err(err) => {
            log::error!("Failed to load records: {err}");
            let mut data = HomePageData::empty(criteria, Some(FETCH_ERROR_MESSAGE.to_string()));
            data.statistics = statistics;
            data
        }
    }
}
