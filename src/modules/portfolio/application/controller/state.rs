use crate::portfolio::domain::entities::{PortfolioData, PortfolioId};
use crate::template::domain::entities::TemplateId;

/// Why a mount ended without a rendered page. All three are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    #[error("No portfolio ID provided")]
    MissingIdentifier,

    #[error("Failed to load portfolio data")]
    FetchFailed,

    #[error("The template for this portfolio is not available.")]
    TemplateUnavailable { template_id: String },
}

impl DisplayError {
    /// Heading shown above the message on the status page.
    pub fn title(&self) -> &'static str {
        match self {
            DisplayError::MissingIdentifier | DisplayError::FetchFailed => "Portfolio Not Found",
            DisplayError::TemplateUnavailable { .. } => "Template Not Found",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPortfolio {
    pub portfolio_id: PortfolioId,
    pub template_id: TemplateId,
    pub data: PortfolioData,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Init,
    Loading { portfolio_id: PortfolioId },
    Rendered(RenderedPortfolio),
    Error(DisplayError),
}

impl DisplayState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DisplayState::Rendered(_) | DisplayState::Error(_))
    }
}
