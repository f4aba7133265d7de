use actix_multipart::form::text::Text;
use chrono::NaiveDate;
use reunite_portal::api::errors::{ApiError, ApiResult};
use reunite_portal::api::mock::MockApi;
use reunite_portal::api::{
    PageRequest, PersonPage, PersonReader, StatisticsReader, TipReader,
};
use reunite_portal::domain::criteria::SearchCriteria;
use reunite_portal::domain::person::{Occurrence, Person, PersonStatus, Sex};
use reunite_portal::domain::statistics::Statistics;
use reunite_portal::domain::tip::Tip;
use reunite_portal::dto::home::HomeQuery;
use reunite_portal::forms::person::TipForm;
use reunite_portal::services::ServiceError;
use reunite_portal::services::api::get_statistics;
use reunite_portal::services::home::{FETCH_ERROR_MESSAGE, load_home_page};
use reunite_portal::services::person::{load_person_page, submit_tip};

fn person(id: i64, name: &str, age: u32, sex: Sex, located_on: Option<NaiveDate>) -> Person {
    Person {
        id,
        name: name.to_string(),
        age: Some(age),
        sex: Some(sex),
        photo_url: None,
        last_occurrence: Some(Occurrence {
            disappeared_on: NaiveDate::from_ymd_opt(2024, 1, 15),
            located_on,
            ..Occurrence::default()
        }),
    }
}

fn sample_persons(count: i64) -> Vec<Person> {
    (1..=count)
        .map(|id| person(id, &format!("Person #{id}"), 20 + id as u32, Sex::Male, None))
        .collect()
}

fn tip(message: &str, date: NaiveDate) -> Tip {
    Tip {
        id: None,
        message: message.to_string(),
        description: None,
        date,
        attachments: Vec::new(),
    }
}

/// Data source where every request fails, as during a backend outage.
struct FailingApi;

impl PersonReader for FailingApi {
    async fn list_latest(&self, _page: PageRequest) -> ApiResult<PersonPage> {
        Err(ApiError::Request("connection refused".to_string()))
    }

    async fn search_persons(
        &self,
        _criteria: &SearchCriteria,
        _page: PageRequest,
    ) -> ApiResult<PersonPage> {
        Err(ApiError::Request("connection refused".to_string()))
    }

    async fn get_person_by_id(&self, _id: i64) -> ApiResult<Option<Person>> {
        Err(ApiError::Status(502))
    }
}

impl StatisticsReader for FailingApi {
    async fn get_statistics(&self) -> ApiResult<Statistics> {
        Err(ApiError::Status(502))
    }
}

impl TipReader for FailingApi {
    async fn list_tips(&self, _record_id: i64) -> ApiResult<Vec<Tip>> {
        Err(ApiError::Request("connection refused".to_string()))
    }
}

#[actix_web::test]
async fn test_empty_criteria_issue_unfiltered_query() {
    let api = MockApi::with_persons(sample_persons(3));

    let data = load_home_page(&api, HomeQuery::default()).await;

    assert_eq!(api.latest_requests(), 1);
    assert_eq!(api.search_requests(), 0);
    assert!(data.error.is_none());
    assert_eq!(data.persons.items.len(), 3);
    assert_eq!(data.persons.total_elements, 3);
}

#[actix_web::test]
async fn test_single_criterion_issues_filtered_query() {
    let api = MockApi::with_persons(vec![
        person(1, "Jane Roe", 25, Sex::Female, None),
        person(2, "John Doe", 34, Sex::Male, None),
    ]);
    let query = HomeQuery {
        criteria: SearchCriteria::new().sex(Sex::Female),
        page: None,
    };

    let data = load_home_page(&api, query).await;

    assert_eq!(api.latest_requests(), 0);
    assert_eq!(api.search_requests(), 1);
    assert_eq!(data.persons.items.len(), 1);
    assert_eq!(data.persons.items[0].person.name, "Jane Roe");
}

#[actix_web::test]
async fn test_fresh_search_lands_on_first_page() {
    let api = MockApi::with_persons(sample_persons(25));
    // A committed search form carries no page parameter.
    let query = HomeQuery {
        criteria: SearchCriteria::new().name("Person"),
        page: None,
    };

    let data = load_home_page(&api, query).await;

    assert_eq!(data.persons.page, 0);
    assert_eq!(data.persons.items.len(), 10);
    assert_eq!(data.persons.total_pages, 3);
    assert_eq!(data.persons.total_elements, 25);
}

#[actix_web::test]
async fn test_pager_requests_later_page() {
    let api = MockApi::with_persons(sample_persons(25));
    let query = HomeQuery {
        criteria: SearchCriteria::new(),
        page: Some(2),
    };

    let data = load_home_page(&api, query).await;

    assert_eq!(data.persons.page, 2);
    assert_eq!(data.persons.items.len(), 5);
    assert_eq!(data.persons.total_pages, 3);
}

#[actix_web::test]
async fn test_fetch_failure_empties_listing() {
    let data = load_home_page(&FailingApi, HomeQuery::default()).await;

    assert!(data.persons.items.is_empty());
    assert_eq!(data.persons.total_pages, 0);
    assert_eq!(data.persons.total_elements, 0);
    assert!(data.persons.pages.is_empty());
    assert_eq!(data.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    assert!(data.statistics.is_none());
}

#[actix_web::test]
async fn test_inverted_age_range_is_rejected_before_fetching() {
    let api = MockApi::with_persons(sample_persons(3));
    let query = HomeQuery {
        criteria: SearchCriteria::new().min_age(40).max_age(20),
        page: None,
    };

    let data = load_home_page(&api, query).await;

    assert!(data.persons.items.is_empty());
    assert!(data.error.is_some());
    assert_eq!(api.latest_requests() + api.search_requests(), 0);
}

#[actix_web::test]
async fn test_mock_filtering_matches_backend_semantics() {
    let api = MockApi::with_persons(vec![
        person(1, "Jane Roe", 25, Sex::Female, None),
        person(2, "John Doe", 60, Sex::Male, None),
        person(
            3,
            "Janet Fields",
            42,
            Sex::Female,
            NaiveDate::from_ymd_opt(2024, 2, 10),
        ),
    ]);

    let by_name = api
        .search_persons(&SearchCriteria::new().name("jane"), PageRequest::new(0))
        .await
        .unwrap();
    assert_eq!(by_name.items.len(), 2);

    let by_age = api
        .search_persons(
            &SearchCriteria::new().min_age(30).max_age(70),
            PageRequest::new(0),
        )
        .await
        .unwrap();
    assert_eq!(by_age.items.len(), 2);

    let located = api
        .search_persons(
            &SearchCriteria::new().status(PersonStatus::Located),
            PageRequest::new(0),
        )
        .await
        .unwrap();
    assert_eq!(located.items.len(), 1);
    assert_eq!(located.items[0].id, 3);
}

#[actix_web::test]
async fn test_person_page_sorts_tips_newest_first() {
    let api = MockApi::with_persons(vec![person(1, "Jane Roe", 25, Sex::Female, None)]);
    api.add_tips(
        1,
        vec![
            tip("older sighting", NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            tip("newer sighting", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        ],
    );

    let data = load_person_page(&api, 1).await.unwrap().unwrap();

    assert_eq!(data.person.id, 1);
    assert_eq!(data.status, PersonStatus::Missing);
    assert_eq!(data.tips[0].message, "newer sighting");
    assert_eq!(data.tips[1].message, "older sighting");
}

#[actix_web::test]
async fn test_person_page_unknown_record() {
    let api = MockApi::new();
    assert!(load_person_page(&api, 42).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_person_page_failure_propagates() {
    assert!(load_person_page(&FailingApi, 1).await.is_err());
}

#[actix_web::test]
async fn test_submit_tip_round_trip() {
    let api = MockApi::with_persons(vec![person(1, "Jane Roe", 25, Sex::Female, None)]);
    let form = TipForm {
        message: Text("Seen at the central market".to_string()),
        description: Text("Bystander account".to_string()),
        sighted_on: Text("2023-01-10".to_string()),
        photos: vec![],
    };

    submit_tip(&api, 1, form).await.unwrap();

    let tips = api.list_tips(1).await.unwrap();
    assert_eq!(tips.len(), 1);
    assert_eq!(tips[0].message, "Seen at the central market");
    assert_eq!(tips[0].date, NaiveDate::from_ymd_opt(2023, 1, 10).unwrap());
}

#[actix_web::test]
async fn test_submit_tip_rejects_empty_message() {
    let api = MockApi::with_persons(vec![person(1, "Jane Roe", 25, Sex::Female, None)]);
    let form = TipForm {
        message: Text("   ".to_string()),
        description: Text("Bystander account".to_string()),
        sighted_on: Text("2023-01-10".to_string()),
        photos: vec![],
    };

    let err = submit_tip(&api, 1, form).await.unwrap_err();
    assert!(matches!(err, ServiceError::Form(_)));
    assert!(api.list_tips(1).await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_statistics_from_mock() {
    let api = MockApi::with_persons(vec![
        person(1, "Jane Roe", 25, Sex::Female, None),
        person(2, "John Doe", 34, Sex::Male, None),
        person(
            3,
            "Janet Fields",
            42,
            Sex::Female,
            NaiveDate::from_ymd_opt(2024, 2, 10),
        ),
    ]);

    let statistics = get_statistics(&api).await.unwrap();
    assert_eq!(statistics.missing, 2);
    assert_eq!(statistics.located, 1);
}
