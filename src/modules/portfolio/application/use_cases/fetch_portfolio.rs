use async_trait::async_trait;

use crate::portfolio::domain::entities::{PortfolioData, PortfolioId};
use crate::session::domain::entities::SessionContext;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchPortfolioError {
    #[error("portfolio not found")]
    NotFound,

    #[error("data service did not answer in time")]
    Timeout,

    #[error("data service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait FetchPortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        portfolio_id: &PortfolioId,
        session: &SessionContext,
    ) -> Result<PortfolioData, FetchPortfolioError>;
}
