use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::portfolio::application::use_cases::check_slug_availability::CheckSlugError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SlugAvailabilityResponse {
    /// Trimmed slug that was checked
    #[schema(example = "janedoe")]
    pub slug: String,

    /// Whether the slug can still be claimed
    #[schema(example = true)]
    pub available: bool,
}

#[utoipa::path(
    get,
    path = "/api/slugs/{slug}/availability",
    tag = "slugs",
    params(
        ("slug" = String, Path, description = "Requested public username")
    ),
    responses(
        (
            status = 200,
            description = "Availability checked",
            body = inline(SuccessResponse<SlugAvailabilityResponse>),
            example = json!({
                "success": true,
                "data": { "slug": "janedoe", "available": true }
            })
        ),
        (
            status = 400,
            description = "Slug is malformed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_SLUG",
                    "message": "Username must be at least 3 characters"
                }
            })
        ),
        (
            status = 502,
            description = "Data service could not answer",
            body = ErrorResponse
        )
    )
)]
#[get("/api/slugs/{slug}/availability")]
pub async fn check_slug_availability_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.check_slug_use_case.execute(&slug).await {
        Ok(result) => ApiResponse::success(SlugAvailabilityResponse {
            slug: result.slug,
            available: result.available,
        }),

        Err(CheckSlugError::QueryFailed(msg)) => {
            error!(slug = %slug, error = %msg, "Slug availability check failed");
            ApiResponse::bad_gateway("UPSTREAM_ERROR", "Error checking username availability")
        }

        Err(e) => {
            warn!(slug = %slug, error = %e, "Rejected slug");
            ApiResponse::bad_request("INVALID_SLUG", &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubCheckSlugAvailabilityUseCase;

    async fn call(stub: StubCheckSlugAvailabilityUseCase, uri: &str) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default().with_check_slug(stub).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(check_slug_availability_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn returns_availability() {
        let (status, body) = call(
            StubCheckSlugAvailabilityUseCase::available("janedoe", false),
            "/api/slugs/janedoe/availability",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["slug"], "janedoe");
        assert_eq!(body["data"]["available"], false);
    }

    #[actix_web::test]
    async fn invalid_slug_is_bad_request() {
        let (status, body) = call(
            StubCheckSlugAvailabilityUseCase::error(CheckSlugError::InvalidCharacters),
            "/api/slugs/jane%20doe/availability",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_SLUG");
        assert_eq!(
            body["error"]["message"],
            "Username can only contain letters, numbers, underscores, and hyphens"
        );
    }

    #[actix_web::test]
    async fn upstream_failure_is_bad_gateway() {
        let (status, body) = call(
            StubCheckSlugAvailabilityUseCase::error(CheckSlugError::QueryFailed(
                "connection reset".to_string(),
            )),
            "/api/slugs/janedoe/availability",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }
}
