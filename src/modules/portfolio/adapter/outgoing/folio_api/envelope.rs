use serde::Deserialize;

use crate::portfolio::application::ports::outgoing::{PortfolioQueryError, SlugQueryError};
use crate::portfolio::domain::entities::PortfolioData;

/// `{ "data": { "portfolio": { ... } } }`
#[derive(Deserialize)]
struct PortfolioEnvelope {
    data: PortfolioPayload,
}

#[derive(Deserialize)]
struct PortfolioPayload {
    portfolio: PortfolioData,
}

/// `{ "status": "success" }` when the username is free.
#[derive(Deserialize)]
struct SlugEnvelope {
    #[serde(default)]
    status: Option<String>,
}

pub fn decode_portfolio_response(status: u16, body: &str) -> Result<PortfolioData, PortfolioQueryError> {
    match status {
        200..=299 => serde_json::from_str::<PortfolioEnvelope>(body)
            .map(|envelope| envelope.data.portfolio)
            .map_err(|e| PortfolioQueryError::MalformedBody(e.to_string())),
        404 => Err(PortfolioQueryError::NotFound),
        other => Err(PortfolioQueryError::UnexpectedStatus(other)),
    }
}

/// Anything other than `"success"` means the slug is taken.
pub fn decode_slug_response(status: u16, body: &str) -> Result<bool, SlugQueryError> {
    if !(200..=299).contains(&status) {
        return Err(SlugQueryError::UnexpectedStatus(status));
    }

    let envelope: SlugEnvelope =
        serde_json::from_str(body).map_err(|e| SlugQueryError::MalformedBody(e.to_string()))?;
    Ok(envelope.status.as_deref() == Some("success"))
}
