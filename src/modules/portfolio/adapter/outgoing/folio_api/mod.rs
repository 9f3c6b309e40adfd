pub mod envelope;
pub mod folio_api_client;
pub mod folio_api_config;

pub use folio_api_client::FolioApiClient;
pub use folio_api_config::{FolioApiConfig, FolioApiConfigError};
