use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckSlugError {
    #[error("Username must be at least 3 characters")]
    TooShort,

    #[error("Username must be at most 30 characters")]
    TooLong,

    #[error("Username can only contain letters, numbers, underscores, and hyphens")]
    InvalidCharacters,

    #[error("Error checking username availability: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugAvailability {
    /// Trimmed slug that was checked.
    pub slug: String,
    pub available: bool,
}

#[async_trait]
pub trait CheckSlugAvailabilityUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<SlugAvailability, CheckSlugError>;
}
