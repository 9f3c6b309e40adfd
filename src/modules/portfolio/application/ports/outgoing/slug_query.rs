use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugQueryError {
    #[error("Unexpected status from data service: {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[async_trait]
pub trait SlugQuery: Send + Sync {
    async fn is_slug_available(&self, slug: &str) -> Result<bool, SlugQueryError>;
}
