use actix_web::{HttpResponse, Responder, get, web};

use crate::api::rest::RestApi;
use crate::services::api as api_service;

#[get("/v1/statistics")]
pub async fn api_v1_statistics(api: web::Data<RestApi>) -> impl Responder {
    match api_service::get_statistics(api.get_ref()).await {
        Ok(statistics) => HttpResponse::Ok().json(statistics),
        Err(e) => {
            log::error!("Failed to load statistics: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
