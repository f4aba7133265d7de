//! HTTP handlers and shared rendering helpers.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, HttpResponseBuilder};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

pub mod api;
pub mod home;
pub mod person;

/// Maps a flash message level onto the alert style used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Builds the template context shared by every page.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|message| (message.content(), alert_level_to_str(&message.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

/// Renders a template with the given status, or logs the failure and
/// returns a 500.
pub fn render_template_with_status(
    tera: &Tera,
    name: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponseBuilder::new(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, name, context, StatusCode::OK)
}

/// Issues a 303 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}
