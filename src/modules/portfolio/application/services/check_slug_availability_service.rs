use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;

use crate::portfolio::application::ports::outgoing::SlugQuery;
use crate::portfolio::application::use_cases::check_slug_availability::{
    CheckSlugAvailabilityUseCase, CheckSlugError, SlugAvailability,
};

const MIN_SLUG_LEN: usize = 3;
const MAX_SLUG_LEN: usize = 30;

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid slug regex"))
}

/// Trims and validates a public slug. No network involved.
///
/// Case is preserved; the data service decides whether `Jane` and `jane` collide.
pub fn normalize_slug(raw: &str) -> Result<String, CheckSlugError> {
    let slug = raw.trim().to_string();

    if slug.chars().count() < MIN_SLUG_LEN {
        return Err(CheckSlugError::TooShort);
    }
    if slug.chars().count() > MAX_SLUG_LEN {
        return Err(CheckSlugError::TooLong);
    }
    if !slug_pattern().is_match(&slug) {
        return Err(CheckSlugError::InvalidCharacters);
    }
    Ok(slug)
}

pub struct CheckSlugAvailabilityService<Q>
where
    Q: SlugQuery,
{
    query: Q,
    timeout: Duration,
}

impl<Q> CheckSlugAvailabilityService<Q>
where
    Q: SlugQuery,
{
    pub fn new(query: Q, timeout: Duration) -> Self {
        Self { query, timeout }
    }
}

#[async_trait]
impl<Q> CheckSlugAvailabilityUseCase for CheckSlugAvailabilityService<Q>
where
    Q: SlugQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<SlugAvailability, CheckSlugError> {
        let slug = normalize_slug(slug)?;

        let available = tokio::time::timeout(self.timeout, self.query.is_slug_available(&slug))
            .await
            .map_err(|_| {
                warn!(
                    slug = %slug,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Slug availability check timed out"
                );
                CheckSlugError::QueryFailed("request timed out".to_string())
            })?
            .map_err(|e| CheckSlugError::QueryFailed(e.to_string()))?;

        Ok(SlugAvailability { slug, available })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::ports::outgoing::SlugQueryError;
    use mockall::mock;

    const TIMEOUT: Duration = Duration::from_secs(5);

    mock! {
        pub SlugQueryMock {}
        #[async_trait]
        impl SlugQuery for SlugQueryMock {
            async fn is_slug_available(&self, slug: &str) -> Result<bool, SlugQueryError>;
        }
    }

    #[test]
    fn normalize_trims_and_keeps_case() {
        assert_eq!(normalize_slug("  Jane_Doe-1 "), Ok("Jane_Doe-1".to_string()));
    }

    #[test]
    fn normalize_rejects_bad_input() {
        assert_eq!(normalize_slug("ab"), Err(CheckSlugError::TooShort));
        assert_eq!(normalize_slug(&"a".repeat(31)), Err(CheckSlugError::TooLong));
        assert_eq!(normalize_slug("jane doe"), Err(CheckSlugError::InvalidCharacters));
        assert_eq!(normalize_slug("jané"), Err(CheckSlugError::InvalidCharacters));
    }

    #[tokio::test]
    async fn invalid_slug_never_reaches_the_service() {
        let mut query = MockSlugQueryMock::new();
        query.expect_is_slug_available().never();

        let service = CheckSlugAvailabilityService::new(query, TIMEOUT);
        let result = service.execute("a!").await;

        assert_eq!(result, Err(CheckSlugError::TooShort));
    }

    #[tokio::test]
    async fn queries_slug_as_typed() {
        let mut query = MockSlugQueryMock::new();
        query
            .expect_is_slug_available()
            .withf(|slug| slug.to_string() == "JaneDoe")
            .times(1)
            .returning(|_| Ok(true));

        let service = CheckSlugAvailabilityService::new(query, TIMEOUT);
        let result = service.execute(" JaneDoe ").await;

        assert_eq!(
            result,
            Ok(SlugAvailability {
                slug: "JaneDoe".to_string(),
                available: true
            })
        );
    }

    #[tokio::test]
    async fn maps_query_errors() {
        let mut query = MockSlugQueryMock::new();
        query
            .expect_is_slug_available()
            .returning(|_| Err(SlugQueryError::Network("connection reset".to_string())));

        let service = CheckSlugAvailabilityService::new(query, TIMEOUT);
        let result = service.execute("jane").await;

        assert!(matches!(
            result,
            Err(CheckSlugError::QueryFailed(msg)) if msg.contains("connection reset")
        ));
    }

    struct SilentSlugQuery;

    #[async_trait]
    impl SlugQuery for SilentSlugQuery {
        async fn is_slug_available(&self, _slug: &str) -> Result<bool, SlugQueryError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(true)
        }
    }

    #[tokio::test]
    async fn unanswered_check_times_out() {
        let service = CheckSlugAvailabilityService::new(SilentSlugQuery, Duration::from_millis(20));

        let result = service.execute("janedoe").await;

        assert!(matches!(
            result,
            Err(CheckSlugError::QueryFailed(msg)) if msg.contains("timed out")
        ));
    }
}
