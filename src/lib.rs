use actix_cors::Cors;
use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::api::rest::RestApi;
use crate::models::config::ServerConfig;
use crate::routes::api::api_v1_statistics;
use crate::routes::home::show_index;
use crate::routes::person::{show_person, submit_tip};

pub mod api;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Client for the remote records API backing every page.
    let api = RestApi::new(&server_config.api_base_url)
        .map_err(|e| std::io::Error::other(format!("Failed to create records API client: {e}")))?;

    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").service(api_v1_statistics))
            .service(show_index)
            .service(show_person)
            .service(submit_tip)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(api.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
