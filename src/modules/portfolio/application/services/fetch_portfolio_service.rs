use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::portfolio::application::ports::outgoing::{PortfolioQuery, PortfolioQueryError};
use crate::portfolio::application::use_cases::fetch_portfolio::{
    FetchPortfolioError, FetchPortfolioUseCase,
};
use crate::portfolio::domain::entities::{PortfolioData, PortfolioId};
use crate::session::domain::entities::SessionContext;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct FetchPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
    timeout: Duration,
}

impl<Q> FetchPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q, timeout: Duration) -> Self {
        Self { query, timeout }
    }
}

#[async_trait]
impl<Q> FetchPortfolioUseCase for FetchPortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(
        &self,
        portfolio_id: &PortfolioId,
        session: &SessionContext,
    ) -> Result<PortfolioData, FetchPortfolioError> {
        debug!(portfolio_id = %portfolio_id, ?session, "Fetching portfolio");

        let fetched = tokio::time::timeout(
            self.timeout,
            self.query.fetch_portfolio(portfolio_id, session),
        )
        .await
        .map_err(|_| {
            warn!(
                portfolio_id = %portfolio_id,
                timeout_ms = self.timeout.as_millis() as u64,
                "Portfolio fetch timed out"
            );
            FetchPortfolioError::Timeout
        })?;

        fetched.map_err(|e| match e {
            PortfolioQueryError::NotFound => FetchPortfolioError::NotFound,
            other => FetchPortfolioError::Unavailable(other.to_string()),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Unit tests (service only)
// ──────────────────────────────────────────────────────────
//
