use reqwest::Url;
use std::env;

use crate::portfolio::domain::entities::PortfolioId;

/// Public facing settings for rendered pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Origin that share links point at, e.g. `https://folio.example.com`.
    pub public_base_url: Option<String>,
}

impl SiteConfig {
    pub fn new(public_base_url: Option<String>) -> Self {
        let public_base_url = public_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        Self { public_base_url }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("PUBLIC_BASE_URL").ok())
    }

    /// Absolute share link for a portfolio, when a public origin is configured.
    ///
    /// The identifier is percent-encoded as a single path segment.
    pub fn canonical_url(&self, portfolio_id: &PortfolioId) -> Option<String> {
        let mut url = Url::parse(self.public_base_url.as_deref()?).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(portfolio_id.share_segments());
        Some(url.into())
    }
}
