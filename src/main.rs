pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::portfolio;
pub use modules::session;
pub use modules::template;

use crate::api::openapi::ApiDoc;
use crate::portfolio::adapter::incoming::web::site_config::SiteConfig;
use crate::portfolio::adapter::outgoing::folio_api::{FolioApiClient, FolioApiConfig};
use crate::portfolio::application::ports::outgoing::PortfolioQuery;
use crate::portfolio::application::services::{
    CheckSlugAvailabilityService, FetchPortfolioService,
};
use crate::portfolio::application::use_cases::{
    check_slug_availability::CheckSlugAvailabilityUseCase, fetch_portfolio::FetchPortfolioUseCase,
};
use crate::template::application::registry::TemplateRegistry;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub fetch_portfolio_use_case: Arc<dyn FetchPortfolioUseCase + Send + Sync>,
    pub check_slug_use_case: Arc<dyn CheckSlugAvailabilityUseCase + Send + Sync>,
    pub portfolio_query: Arc<dyn PortfolioQuery + Send + Sync>,
    pub registry: TemplateRegistry,
    pub site: SiteConfig,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .context("PORT must be a valid port number")?;

    let api_config = FolioApiConfig::from_env()?;
    let site = SiteConfig::from_env();
    info!(
        base_url = %api_config.base_url,
        timeout_secs = api_config.timeout.as_secs(),
        public_base_url = ?site.public_base_url,
        "Portfolio data service configured"
    );

    let client = FolioApiClient::new(&api_config).context("Failed to build HTTP client")?;

    let fetch_portfolio_use_case = FetchPortfolioService::new(client.clone(), api_config.timeout);
    let check_slug_use_case = CheckSlugAvailabilityService::new(client.clone(), api_config.timeout);

    let state = AppState {
        fetch_portfolio_use_case: Arc::new(fetch_portfolio_use_case),
        check_slug_use_case: Arc::new(check_slug_use_case),
        portfolio_query: Arc::new(client),
        registry: TemplateRegistry::new(),
        site,
    };

    let server_url = format!("{host}:{port}");
    info!(server_url = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio pages
    cfg.service(crate::portfolio::adapter::incoming::web::routes::owner_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::public_portfolio_handler);
    // Slugs
    cfg.service(crate::portfolio::adapter::incoming::web::routes::check_slug_availability_handler);
    // Templates
    cfg.service(crate::template::adapter::incoming::web::routes::list_templates_handler);
    cfg.service(crate::template::adapter::incoming::web::routes::get_template_handler);
    cfg.service(crate::template::adapter::incoming::web::routes::preview_template_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
