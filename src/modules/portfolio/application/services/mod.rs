pub mod check_slug_availability_service;
pub mod fetch_portfolio_service;

pub use check_slug_availability_service::CheckSlugAvailabilityService;
pub use fetch_portfolio_service::FetchPortfolioService;
