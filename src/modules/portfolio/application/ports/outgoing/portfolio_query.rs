// portfolio_query.rs
use crate::portfolio::domain::entities::{PortfolioData, PortfolioId};
use crate::session::domain::entities::SessionContext;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Unexpected status from data service: {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Read access to portfolio records held by the external data service.
#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    async fn fetch_portfolio(
        &self,
        portfolio_id: &PortfolioId,
        session: &SessionContext,
    ) -> Result<PortfolioData, PortfolioQueryError>;

    /// Reachability check for readiness probes.
    async fn ping(&self) -> Result<(), PortfolioQueryError>;
}
