//! HTTP client for the remote records API.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::multipart;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{
    PageRequest, PersonPage, PersonReader, StatisticsReader, TipReader, TipWriter,
};
use crate::domain::criteria::SearchCriteria;
use crate::domain::person::Person;
use crate::domain::statistics::Statistics;
use crate::domain::tip::{NewTip, Tip};
use crate::models::person::{PageDto, PersonDto};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Production data source backed by the remote records API.
#[derive(Clone)]
pub struct RestApi {
    http: reqwest::Client,
    base_url: String,
}

impl RestApi {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Unexpected(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl PersonReader for RestApi {
    async fn list_latest(&self, page: PageRequest) -> ApiResult<PersonPage> {
        let response = self
            .http
            .get(self.url("/records"))
            .query(&[
                ("page", page.page.to_string()),
                ("size", page.size.to_string()),
                ("direction", page.direction.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let page: PageDto = response.json().await?;
        Ok(page.into())
    }

    async fn search_persons(
        &self,
        criteria: &SearchCriteria,
        page: PageRequest,
    ) -> ApiResult<PersonPage> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(name) = &criteria.name {
            params.push(("name", name.clone()));
        }
        if let Some(min_age) = criteria.min_age {
            params.push(("minAge", min_age.to_string()));
        }
        if let Some(max_age) = criteria.max_age {
            params.push(("maxAge", max_age.to_string()));
        }
        if let Some(sex) = criteria.sex {
            params.push(("sex", sex.to_string()));
        }
        if let Some(status) = criteria.status {
            params.push(("status", status.to_string()));
        }
        params.push(("page", page.page.to_string()));
        params.push(("size", page.size.to_string()));

        let response = self
            .http
            .get(self.url("/records/search"))
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let page: PageDto = response.json().await?;
        Ok(page.into())
    }

    async fn get_person_by_id(&self, id: i64) -> ApiResult<Option<Person>> {
        let response = self
            .http
            .get(self.url(&format!("/records/{id}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let person: PersonDto = response.error_for_status()?.json().await?;
        Ok(Some(person.into()))
    }
}

impl TipReader for RestApi {
    async fn list_tips(&self, record_id: i64) -> ApiResult<Vec<Tip>> {
        let response = self
            .http
            .get(self.url(&format!("/records/{record_id}/tips")))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

impl TipWriter for RestApi {
    async fn submit_tip(&self, tip: &NewTip) -> ApiResult<()> {
        let mut form = multipart::Form::new()
            .text("message", tip.message.as_str().to_string())
            .text("description", tip.description.as_str().to_string())
            .text("date", tip.sighted_on.to_string());

        for photo in &tip.photos {
            let part = multipart::Part::bytes(photo.bytes.clone())
                .file_name(photo.file_name.clone())
                .mime_str(&photo.content_type)
                .map_err(|e| {
                    ApiError::Unexpected(format!("invalid attachment content type: {e}"))
                })?;
            form = form.part("photos", part);
        }

        self.http
            .post(self.url(&format!("/records/{}/tips", tip.record_id)))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

impl StatisticsReader for RestApi {
    async fn get_statistics(&self) -> ApiResult<Statistics> {
        let response = self
            .http
            .get(self.url("/statistics"))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
