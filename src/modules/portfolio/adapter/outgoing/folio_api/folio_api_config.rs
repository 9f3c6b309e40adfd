use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://folio-hszb.onrender.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FolioApiConfigError {
    #[error("FOLIO_API_BASE_URL must be an absolute http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("FOLIO_API_TIMEOUT_SECS must be a whole number between 1 and {MAX_TIMEOUT_SECS}, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioApiConfig {
    /// Origin of the portfolio data service, without trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl FolioApiConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FolioApiConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let lower = trimmed.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://"))
            || reqwest::Url::parse(trimmed).is_err()
        {
            return Err(FolioApiConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            timeout,
        })
    }

    /// Reads `FOLIO_API_BASE_URL` and `FOLIO_API_TIMEOUT_SECS`, both optional.
    pub fn from_env() -> Result<Self, FolioApiConfigError> {
        let base_url =
            env::var("FOLIO_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = match env::var("FOLIO_API_TIMEOUT_SECS") {
            Ok(raw) => Self::parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Self::new(&base_url, timeout)
    }

    fn parse_timeout(raw: &str) -> Result<Duration, FolioApiConfigError> {
        match raw.trim().parse::<u64>() {
            Ok(secs) if (1..=MAX_TIMEOUT_SECS).contains(&secs) => Ok(Duration::from_secs(secs)),
            _ => Err(FolioApiConfigError::InvalidTimeout(raw.to_string())),
        }
    }
}

impl Default for FolioApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let config =
            FolioApiConfig::new("https://api.example.com/", Duration::from_secs(5)).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn rejects_non_http_base_url() {
        assert!(matches!(
            FolioApiConfig::new("ftp://api.example.com", Duration::from_secs(5)),
            Err(FolioApiConfigError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            FolioApiConfig::new("api.example.com", Duration::from_secs(5)),
            Err(FolioApiConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn timeout_must_be_in_range() {
        assert_eq!(
            FolioApiConfig::parse_timeout(" 30 "),
            Ok(Duration::from_secs(30))
        );
        assert!(FolioApiConfig::parse_timeout("0").is_err());
        assert!(FolioApiConfig::parse_timeout("121").is_err());
        assert!(FolioApiConfig::parse_timeout("ten").is_err());
    }

    #[test]
    fn default_points_at_hosted_service() {
        let config = FolioApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
