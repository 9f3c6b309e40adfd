use actix_web::http::header::{ContentType, LINK};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use crate::portfolio::adapter::incoming::web::site_config::SiteConfig;
use crate::portfolio::application::controller::{DisplayError, DisplayState};
use crate::shared::status_page::status_page;

fn error_status(error: &DisplayError) -> StatusCode {
    match error {
        DisplayError::MissingIdentifier => StatusCode::BAD_REQUEST,
        DisplayError::FetchFailed => StatusCode::BAD_GATEWAY,
        DisplayError::TemplateUnavailable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// Turns the settled controller state into the page sent to the browser.
pub fn display_response(state: &DisplayState, site: &SiteConfig) -> HttpResponse {
    match state {
        DisplayState::Rendered(rendered) => {
            let mut response = HttpResponse::Ok();
            response.content_type(ContentType::html());
            if let Some(url) = site.canonical_url(&rendered.portfolio_id) {
                response.insert_header((LINK, format!("<{url}>; rel=\"canonical\"")));
            }
            response.body(rendered.html.clone())
        }
        DisplayState::Error(error) => HttpResponse::build(error_status(error))
            .content_type(ContentType::html())
            .body(status_page(error.title(), &error.to_string(), false)),
        DisplayState::Init | DisplayState::Loading { .. } => HttpResponse::Accepted()
            .content_type(ContentType::html())
            .body(status_page(
                "Loading Portfolio",
                "Please wait while we load the portfolio...",
                true,
            )),
    }
}
