pub mod check_slug_availability;
pub mod fetch_portfolio;
