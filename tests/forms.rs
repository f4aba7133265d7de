use chrono::NaiveDate;
use reunite_portal::domain::person::{PersonStatus, Sex};
use reunite_portal::forms::home::SearchForm;
use reunite_portal::forms::person::{
    MAX_TIP_PHOTO_BYTES, MAX_TIP_PHOTOS, PhotoUpload, TipFormError, build_new_tip,
};
use validator::Validate;

#[test]
fn test_search_form_blank_values_are_absent() {
    // An untouched HTML form submits every field as an empty string.
    let form: SearchForm =
        serde_html_form::from_str("name=&min_age=&max_age=&sex=&status=&page=").unwrap();

    assert!(form.page.is_none());
    assert!(form.into_criteria().is_empty());
}

#[test]
fn test_search_form_missing_values_are_absent() {
    let form: SearchForm = serde_html_form::from_str("").unwrap();
    assert!(form.into_criteria().is_empty());
}

#[test]
fn test_search_form_parses_filters() {
    let form: SearchForm =
        serde_html_form::from_str("name=+Jane+&min_age=18&sex=FEMALE&status=MISSING&page=2")
            .unwrap();

    assert_eq!(form.page, Some(2));

    let criteria = form.into_criteria();
    assert_eq!(criteria.name.as_deref(), Some("Jane"));
    assert_eq!(criteria.min_age, Some(18));
    assert_eq!(criteria.max_age, None);
    assert_eq!(criteria.sex, Some(Sex::Female));
    assert_eq!(criteria.status, Some(PersonStatus::Missing));
}

#[test]
fn test_search_form_validates_age_bounds() {
    let form: SearchForm = serde_html_form::from_str("min_age=130").unwrap();
    assert!(form.validate().is_err());

    let form: SearchForm = serde_html_form::from_str("min_age=30&max_age=110").unwrap();
    assert!(form.validate().is_ok());
}

#[test]
fn test_search_form_rejects_garbage_numbers() {
    assert!(serde_html_form::from_str::<SearchForm>("min_age=abc").is_err());
    assert!(serde_html_form::from_str::<SearchForm>("sex=UNKNOWN").is_err());
}

fn photo(size: usize, content_type: &str) -> PhotoUpload {
    PhotoUpload {
        file_name: Some("photo.jpg".to_string()),
        content_type: Some(content_type.to_string()),
        size,
        bytes: vec![0u8; size.min(16)],
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn test_build_new_tip() {
    let tip = build_new_tip(
        7,
        "Seen near the bus terminal",
        "Neighbor's account",
        "2024-05-30",
        vec![photo(1024, "image/jpeg")],
        today(),
    )
    .unwrap();

    assert_eq!(tip.record_id, 7);
    assert_eq!(tip.message.as_str(), "Seen near the bus terminal");
    assert_eq!(tip.description.as_str(), "Neighbor's account");
    assert_eq!(tip.sighted_on, NaiveDate::from_ymd_opt(2024, 5, 30).unwrap());
    assert_eq!(tip.photos.len(), 1);
    assert_eq!(tip.photos[0].content_type, "image/jpeg");
}

#[test]
fn test_build_new_tip_accepts_today() {
    assert!(build_new_tip(7, "msg", "desc", "2024-06-01", vec![], today()).is_ok());
}

#[test]
fn test_build_new_tip_rejects_bad_text() {
    assert_eq!(
        build_new_tip(7, "   ", "desc", "2024-05-30", vec![], today()).unwrap_err(),
        TipFormError::EmptyMessage
    );
    assert_eq!(
        build_new_tip(7, "msg", "", "2024-05-30", vec![], today()).unwrap_err(),
        TipFormError::EmptyDescription
    );
}

#[test]
fn test_build_new_tip_rejects_bad_dates() {
    assert_eq!(
        build_new_tip(7, "msg", "desc", "yesterday", vec![], today()).unwrap_err(),
        TipFormError::InvalidDate
    );
    assert_eq!(
        build_new_tip(7, "msg", "desc", "2024-06-02", vec![], today()).unwrap_err(),
        TipFormError::FutureDate
    );
}

#[test]
fn test_build_new_tip_rejects_bad_photos() {
    let too_many = vec![photo(1024, "image/png"); MAX_TIP_PHOTOS + 1];
    assert_eq!(
        build_new_tip(7, "msg", "desc", "2024-05-30", too_many, today()).unwrap_err(),
        TipFormError::TooManyPhotos
    );

    let too_large = vec![photo(MAX_TIP_PHOTO_BYTES + 1, "image/png")];
    assert_eq!(
        build_new_tip(7, "msg", "desc", "2024-05-30", too_large, today()).unwrap_err(),
        TipFormError::PhotoTooLarge
    );

    let not_an_image = vec![photo(1024, "application/pdf")];
    assert_eq!(
        build_new_tip(7, "msg", "desc", "2024-05-30", not_an_image, today()).unwrap_err(),
        TipFormError::NotAnImage
    );
}
