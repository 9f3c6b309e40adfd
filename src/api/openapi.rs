use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::portfolio::adapter::incoming::web::routes::check_slug::SlugAvailabilityResponse;
use crate::template::adapter::incoming::web::routes::TemplateMetadataResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio Display API",
        version = "1.0.0",
        description = "Template gallery and username lookups for the portfolio display service",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Template endpoints
        crate::template::adapter::incoming::web::routes::list_templates::list_templates_handler,
        crate::template::adapter::incoming::web::routes::get_template::get_template_handler,

        // Slug endpoints
        crate::portfolio::adapter::incoming::web::routes::check_slug::check_slug_availability_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<TemplateMetadataResponse>,
            ErrorResponse,
            ErrorDetail,

            TemplateMetadataResponse,
            SlugAvailabilityResponse
        )
    ),
    tags(
        (name = "templates", description = "Template gallery endpoints"),
        (name = "slugs", description = "Public username endpoints"),
    )
)]
pub struct ApiDoc;
