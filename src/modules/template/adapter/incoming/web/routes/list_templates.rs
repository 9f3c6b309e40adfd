use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::template::domain::entities::{TemplateCategory, TemplateFilter, TemplateMetadata};
use crate::AppState;

/// Gallery entry as exposed over the API
#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateMetadataResponse {
    #[schema(example = "minimal")]
    pub id: String,

    #[schema(example = "Minimal")]
    pub name: String,

    #[schema(example = "Clean and simple design focused on content")]
    pub description: String,

    /// Path of the gallery thumbnail
    #[schema(example = "/templates/minimal-preview.jpg")]
    pub preview: String,

    #[schema(example = "minimal")]
    pub category: String,

    /// Accent color as a CSS hex string
    #[schema(example = "#000000")]
    pub color: String,

    pub features: Vec<String>,

    /// Live preview page for this template
    #[schema(example = "/templates/minimal/preview")]
    pub preview_url: String,
}

impl From<&TemplateMetadata> for TemplateMetadataResponse {
    fn from(metadata: &TemplateMetadata) -> Self {
        Self {
            id: metadata.id.as_str().to_string(),
            name: metadata.name.to_string(),
            description: metadata.description.to_string(),
            preview: metadata.preview.to_string(),
            category: metadata.category.as_str().to_string(),
            color: metadata.color.to_string(),
            features: metadata.features.iter().map(|f| f.to_string()).collect(),
            preview_url: format!("/templates/{}/preview", metadata.id),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTemplatesQuery {
    /// Case-insensitive text matched against name, description and features
    pub q: Option<String>,
    /// One of minimal, modern, creative, professional
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/templates",
    tag = "templates",
    params(ListTemplatesQuery),
    responses(
        (
            status = 200,
            description = "Templates matching the filter, in gallery order",
            body = inline(SuccessResponse<Vec<TemplateMetadataResponse>>)
        ),
        (
            status = 400,
            description = "Unknown category",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CATEGORY", "message": "Unknown template category: business" }
            })
        )
    )
)]
#[get("/api/templates")]
pub async fn list_templates_handler(
    query: web::Query<ListTemplatesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match TemplateCategory::parse(raw) {
            Some(category) => Some(category),
            None => {
                warn!(category = %raw, "Unknown template category");
                return ApiResponse::bad_request(
                    "INVALID_CATEGORY",
                    &format!("Unknown template category: {raw}"),
                );
            }
        },
    };

    let filter = TemplateFilter {
        query: query.q,
        category,
    };

    let templates: Vec<TemplateMetadataResponse> = data
        .registry
        .filter_metadata(&filter)
        .into_iter()
        .map(TemplateMetadataResponse::from)
        .collect();

    debug!(count = templates.len(), ?filter, "Listing templates");
    ApiResponse::success(templates)
}
