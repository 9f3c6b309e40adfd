use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::envelope::{decode_portfolio_response, decode_slug_response};
use super::folio_api_config::FolioApiConfig;
use crate::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError, SlugQuery, SlugQueryError,
};
use crate::portfolio::domain::entities::{PortfolioData, PortfolioId};
use crate::session::domain::entities::SessionContext;

/// Builds `{base}/{segments...}` with every segment percent-encoded.
fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url, String> {
    let mut url = Url::parse(base_url).map_err(|e| e.to_string())?;
    url.path_segments_mut()
        .map_err(|_| format!("{base_url} cannot be a base URL"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub fn portfolio_url(base_url: &str, portfolio_id: &PortfolioId) -> Result<Url, String> {
    endpoint(base_url, &["portfolio", "get", portfolio_id.as_str()])
}

pub fn slug_url(base_url: &str, slug: &str) -> Result<Url, String> {
    endpoint(base_url, &["portfolio", "check-username", slug])
}

/// HTTP client for the folio data service.
#[derive(Clone)]
pub struct FolioApiClient {
    http: Client,
    base_url: String,
}

impl FolioApiClient {
    pub fn new(config: &FolioApiConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl PortfolioQuery for FolioApiClient {
    async fn fetch_portfolio(
        &self,
        portfolio_id: &PortfolioId,
        session: &SessionContext,
    ) -> Result<PortfolioData, PortfolioQueryError> {
        let url = portfolio_url(&self.base_url, portfolio_id).map_err(PortfolioQueryError::Network)?;

        let mut request = self.http.get(url);
        if let Some(token) = session.bearer() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PortfolioQueryError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PortfolioQueryError::Network(e.to_string()))?;

        debug!(portfolio_id = %portfolio_id, status, "Data service answered");
        decode_portfolio_response(status, &body)
    }

    /// Any HTTP answer counts; only transport failures make the service unreachable.
    async fn ping(&self) -> Result<(), PortfolioQueryError> {
        self.http
            .get(&self.base_url)
            .send()
            .await
            .map(|response| debug!(status = response.status().as_u16(), "Data service ping"))
            .map_err(|e| {
                warn!(error = %e, "Data service ping failed");
                PortfolioQueryError::Network(e.to_string())
            })
    }
}

#[async_trait]
impl SlugQuery for FolioApiClient {
    async fn is_slug_available(&self, slug: &str) -> Result<bool, SlugQueryError> {
        let url = slug_url(&self.base_url, slug).map_err(SlugQueryError::Network)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SlugQueryError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SlugQueryError::Network(e.to_string()))?;

        decode_slug_response(status, &body)
    }
}
