use actix_multipart::form::MultipartForm;
use actix_web::http::StatusCode;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::rest::RestApi;
use crate::forms::person::TipForm;
use crate::routes::{base_context, redirect, render_template, render_template_with_status};
use crate::services::ServiceError;
use crate::services::person as person_service;

#[get("/person/{person_id}")]
pub async fn show_person(
    person_id: web::Path<i64>,
    api: web::Data<RestApi>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let person_id = person_id.into_inner();

    match person_service::load_person_page(api.get_ref(), person_id).await {
        Ok(Some(data)) => {
            let mut context = base_context(&flash_messages, "person");
            context.insert("person", &data.person);
            context.insert("status", &data.status);
            context.insert("tips", &data.tips);
            render_template(&tera, "person/detail.html", &context)
        }
        Ok(None) => {
            let context = base_context(&flash_messages, "person");
            render_template_with_status(
                &tera,
                "person/not_found.html",
                &context,
                StatusCode::NOT_FOUND,
            )
        }
        Err(e) => {
            log::error!("Failed to load record {person_id}: {e}");
            FlashMessage::error("Could not load this record right now. Please try again later.")
                .send();
            redirect("/")
        }
    }
}

#[post("/person/{person_id}/tips")]
pub async fn submit_tip(
    person_id: web::Path<i64>,
    MultipartForm(form): MultipartForm<TipForm>,
    api: web::Data<RestApi>,
) -> impl Responder {
    let person_id = person_id.into_inner();

    match person_service::submit_tip(api.get_ref(), person_id, form).await {
        Ok(()) => {
            FlashMessage::success("Your tip has been submitted. Thank you for helping.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(format!("Could not submit your tip: {message}.")).send();
        }
        Err(e) => {
            log::error!("Failed to submit tip for record {person_id}: {e}");
            FlashMessage::error("Could not submit your tip right now. Please try again later.")
                .send();
        }
    }

    redirect(&format!("/person/{person_id}"))
}
