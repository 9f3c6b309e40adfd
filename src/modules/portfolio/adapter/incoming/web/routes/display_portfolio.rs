use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::portfolio::adapter::incoming::web::views::display_response;
use crate::portfolio::application::controller::PortfolioDisplayController;
use crate::session::domain::entities::SessionContext;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DisplayQuery {
    #[serde(default, deserialize_with = "flag")]
    pub preview: bool,
}

// true/1/yes/on turn the flag on; any other value leaves it off.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        raw.as_deref().map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes" | "on")
    ))
}

/// One request is one mount: a fresh controller bound to this request's session.
async fn render_portfolio(
    data: &AppState,
    raw_id: &str,
    query: &DisplayQuery,
    session: SessionContext,
) -> HttpResponse {
    let controller = PortfolioDisplayController::new(
        data.fetch_portfolio_use_case.clone(),
        data.registry,
        session,
        query.preview,
    );

    let state = controller.navigate(Some(raw_id)).await;
    display_response(&state, &data.site)
}

#[get("/me/{portfolio_id:[^/]*}")]
pub async fn owner_portfolio_handler(
    path: web::Path<String>,
    query: web::Query<DisplayQuery>,
    session: SessionContext,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();
    info!(
        portfolio_id = %portfolio_id,
        authenticated = session.is_authenticated(),
        "Owner portfolio view requested"
    );

    render_portfolio(&data, &portfolio_id, &query, session).await
}

#[get("/p/{portfolio_id:[^/]*}")]
pub async fn public_portfolio_handler(
    path: web::Path<String>,
    query: web::Query<DisplayQuery>,
    session: SessionContext,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();
    info!(portfolio_id = %portfolio_id, "Public portfolio view requested");

    render_portfolio(&data, &portfolio_id, &query, session).await
}
