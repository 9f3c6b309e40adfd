use crate::portfolio::adapter::incoming::web::site_config::SiteConfig;
use crate::portfolio::application::ports::outgoing::PortfolioQuery;
use crate::portfolio::application::use_cases::check_slug_availability::CheckSlugAvailabilityUseCase;
use crate::portfolio::application::use_cases::fetch_portfolio::{
    FetchPortfolioError, FetchPortfolioUseCase,
};
use crate::template::application::registry::TemplateRegistry;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    fetch_portfolio: Arc<dyn FetchPortfolioUseCase + Send + Sync>,
    check_slug: Arc<dyn CheckSlugAvailabilityUseCase + Send + Sync>,
    portfolio_query: Arc<dyn PortfolioQuery + Send + Sync>,
    site: SiteConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            fetch_portfolio: Arc::new(StubFetchPortfolioUseCase::failure(
                FetchPortfolioError::NotFound,
            )),
            check_slug: Arc::new(StubCheckSlugAvailabilityUseCase::available("jane", true)),
            portfolio_query: StubPortfolioQuery::reachable(),
            site: SiteConfig::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_fetch_portfolio(mut self, uc: Arc<dyn FetchPortfolioUseCase + Send + Sync>) -> Self {
        self.fetch_portfolio = uc;
        self
    }

    pub fn with_check_slug(
        mut self,
        uc: impl CheckSlugAvailabilityUseCase + Send + Sync + 'static,
    ) -> Self {
        self.check_slug = Arc::new(uc);
        self
    }

    pub fn with_portfolio_query(mut self, query: Arc<dyn PortfolioQuery + Send + Sync>) -> Self {
        self.portfolio_query = query;
        self
    }

    pub fn with_public_base_url(mut self, base_url: &str) -> Self {
        self.site = SiteConfig::new(Some(base_url.to_string()));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            fetch_portfolio_use_case: self.fetch_portfolio,
            check_slug_use_case: self.check_slug,
            portfolio_query: self.portfolio_query,
            registry: TemplateRegistry::new(),
            site: self.site,
        })
    }
}
