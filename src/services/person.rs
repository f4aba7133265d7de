use crate::api::{PersonReader, TipReader, TipWriter};
use crate::dto::person::PersonPageData;
use crate::forms::person::TipForm;
use crate::services::{ServiceError, ServiceResult};

/// Loads a record with its community tips, newest sighting first.
///
/// A failure while loading tips degrades to an empty tip list; the record
/// itself still renders.
pub async fn load_person_page<A>(api: &A, person_id: i64) -> ServiceResult<Option<PersonPageData>>
where
    A: PersonReader + TipReader + ?Sized,
{
    let Some(person) = api.get_person_by_id(person_id).await? else {
        return Ok(None);
    };

    let mut tips = match api.list_tips(person_id).await {
        Ok(tips) => tips,
        Err(err) => {
            log::error!("Failed to load tips for record {person_id}: {err}");
            Vec::new()
        }
    };
    tips.sort_by(|a, b| b.date.cmp(&a.date));

    let status = person.status();
    Ok(Some(PersonPageData {
        person,
        status,
        tips,
    }))
}

/// Validates the tip form and submits it to the records API.
pub async fn submit_tip<A>(api: &A, person_id: i64, form: TipForm) -> ServiceResult<()>
where
    A: TipWriter + ?Sized,
{
    let tip = form.into_new_tip(person_id).map_err(|err| {
        log::warn!("Rejected tip for record {person_id}: {err}");
        ServiceError::Form(err.to_string())
    })?;

    api.submit_tip(&tip).await.map_err(ServiceError::from)
}
