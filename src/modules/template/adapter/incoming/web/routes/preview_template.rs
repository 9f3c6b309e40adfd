use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::debug;

use crate::shared::status_page::status_page;
use crate::template::application::ports::TemplateProps;
use crate::template::application::showcase::showcase_portfolio;
use crate::AppState;

/// Renders a template with demo data for the gallery.
#[get("/templates/{template_id}/preview")]
pub async fn preview_template_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let template_id = path.into_inner();

    let Some(renderer) = data.registry.resolve_renderer(&template_id) else {
        debug!(template_id = %template_id, "Preview requested for unknown template");
        return HttpResponse::NotFound()
            .content_type(ContentType::html())
            .body(status_page(
                "Template Not Found",
                "The template for this portfolio is not available.",
                false,
            ));
    };

    let demo = showcase_portfolio(renderer.template_id());
    let html = renderer.render(&TemplateProps {
        data: &demo,
        is_preview: true,
    });

    HttpResponse::Ok().content_type(ContentType::html()).body(html)
}
