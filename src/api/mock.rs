//! In-memory fake of the records API.
//!
//! Reproduces the backend's filtering and paging semantics over a fixed set
//! of records so services can be exercised without a network. Also counts
//! listing requests per endpoint, which lets tests assert which of the two
//! queries a service issued.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::api::errors::ApiResult;
use crate::api::{
    PageRequest, PersonPage, PersonReader, StatisticsReader, TipReader, TipWriter,
};
use crate::domain::criteria::SearchCriteria;
use crate::domain::person::Person;
use crate::domain::statistics::Statistics;
use crate::domain::tip::{NewTip, Tip};

#[derive(Default)]
pub struct MockApi {
    persons: Vec<Person>,
    tips: Mutex<HashMap<i64, Vec<Tip>>>,
    latest_requests: AtomicUsize,
    search_requests: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self {
            persons,
            ..Self::default()
        }
    }

    /// Seeds stored tips for a record.
    pub fn add_tips(&self, record_id: i64, tips: Vec<Tip>) {
        self.tips
            .lock()
            .expect("tips lock poisoned")
            .entry(record_id)
            .or_default()
            .extend(tips);
    }

    /// Number of unfiltered listing requests served so far.
    pub fn latest_requests(&self) -> usize {
        self.latest_requests.load(Ordering::SeqCst)
    }

    /// Number of filtered search requests served so far.
    pub fn search_requests(&self) -> usize {
        self.search_requests.load(Ordering::SeqCst)
    }

    fn matches(person: &Person, criteria: &SearchCriteria) -> bool {
        if let Some(name) = &criteria.name
            && !person.name.to_lowercase().contains(&name.to_lowercase())
        {
            return false;
        }
        if let Some(min_age) = criteria.min_age
            && person.age.unwrap_or(0) < min_age
        {
            return false;
        }
        if let Some(max_age) = criteria.max_age
            && person.age.unwrap_or(0) > max_age
        {
            return false;
        }
        if let Some(sex) = criteria.sex
            && person.sex != Some(sex)
        {
            return false;
        }
        if let Some(status) = criteria.status
            && person.status() != status
        {
            return false;
        }
        true
    }

    fn paginate(matches: Vec<Person>, page: PageRequest) -> PersonPage {
        let size = page.size.max(1);
        let total_elements = matches.len() as u64;
        let total_pages = matches.len().div_ceil(size);
        let items = matches
            .into_iter()
            .skip(page.page.saturating_mul(size))
            .take(size)
            .collect();

        PersonPage {
            items,
            total_elements,
            total_pages,
            page: page.page,
        }
    }
}

impl PersonReader for MockApi {
    async fn list_latest(&self, page: PageRequest) -> ApiResult<PersonPage> {
        self.latest_requests.fetch_add(1, Ordering::SeqCst);
        Ok(Self::paginate(self.persons.clone(), page))
    }

    async fn search_persons(
        &self,
        criteria: &SearchCriteria,
        page: PageRequest,
    ) -> ApiResult<PersonPage> {
        self.search_requests.fetch_add(1, Ordering::SeqCst);
        let matches = self
            .persons
            .iter()
            .filter(|person| Self::matches(person, criteria))
            .cloned()
            .collect();
        Ok(Self::paginate(matches, page))
    }

    async fn get_person_by_id(&self, id: i64) -> ApiResult<Option<Person>> {
        Ok(self.persons.iter().find(|person| person.id == id).cloned())
    }
}

impl TipReader for MockApi {
    async fn list_tips(&self, record_id: i64) -> ApiResult<Vec<Tip>> {
        Ok(self
            .tips
            .lock()
            .expect("tips lock poisoned")
            .get(&record_id)
            .cloned()
            .unwrap_or_default())
    }
}

impl TipWriter for MockApi {
    async fn submit_tip(&self, tip: &NewTip) -> ApiResult<()> {
        let mut tips = self.tips.lock().expect("tips lock poisoned");
        let stored = tips.entry(tip.record_id).or_default();
        let id = stored.len() as i64 + 1;
        stored.push(Tip {
            id: Some(id),
            message: tip.message.as_str().to_string(),
            description: Some(tip.description.as_str().to_string()),
            date: tip.sighted_on,
            attachments: tip
                .photos
                .iter()
                .map(|photo| photo.file_name.clone())
                .collect(),
        });
        Ok(())
    }
}

impl StatisticsReader for MockApi {
    async fn get_statistics(&self) -> ApiResult<Statistics> {
        let located = self
            .persons
            .iter()
            .filter(|person| person.status() == crate::domain::person::PersonStatus::Located)
            .count() as u64;

        Ok(Statistics {
            missing: self.persons.len() as u64 - located,
            located,
        })
    }
}
