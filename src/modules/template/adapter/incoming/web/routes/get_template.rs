use actix_web::{get, web, Responder};

use super::list_templates::TemplateMetadataResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/templates/{template_id}",
    tag = "templates",
    params(
        ("template_id" = String, Path, description = "Template identifier, e.g. modern")
    ),
    responses(
        (
            status = 200,
            description = "Template metadata",
            body = inline(SuccessResponse<TemplateMetadataResponse>)
        ),
        (
            status = 404,
            description = "No template with this identifier",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "TEMPLATE_NOT_FOUND", "message": "Template not found" }
            })
        )
    )
)]
#[get("/api/templates/{template_id}")]
pub async fn get_template_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let template_id = path.into_inner();

    match data.registry.resolve_metadata(&template_id) {
        Some(metadata) => ApiResponse::success(TemplateMetadataResponse::from(metadata)),
        None => ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn returns_metadata_for_known_id() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_template_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/templates/professional")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], "professional");
        assert_eq!(body["data"]["category"], "professional");
        assert!(body["data"]["features"].is_array());
    }

    #[actix_web::test]
    async fn unknown_id_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_template_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/templates/legacy-v1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "TEMPLATE_NOT_FOUND");
    }
}
