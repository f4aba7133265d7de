use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;
use validator::Validate;

use crate::api::rest::RestApi;
use crate::dto::home::HomePageData;
use crate::forms::home::SearchForm;
use crate::routes::{base_context, render_template};
use crate::services::home as home_service;

#[get("/")]
pub async fn show_index(
    params: web::Query<SearchForm>,
    api: web::Data<RestApi>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let form = params.into_inner();

    let data = match form.validate() {
        Ok(()) => home_service::load_home_page(api.get_ref(), form.into()).await,
        Err(e) => {
            log::warn!("Rejected search form: {e}");
            HomePageData::empty(
                form.into_criteria(),
                Some("Ages must be between 0 and 120.".to_string()),
            )
        }
    };

    let mut context = base_context(&flash_messages, "index");
    context.insert("persons", &data.persons);
    context.insert("criteria", &data.criteria);
    context.insert("filter_query", &data.filter_query);
    context.insert("statistics", &data.statistics);
    context.insert("error", &data.error);

    render_template(&tera, "main/index.html", &context)
}
