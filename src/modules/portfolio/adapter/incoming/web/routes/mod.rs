pub mod check_slug;
pub mod display_portfolio;

pub use check_slug::check_slug_availability_handler;
pub use display_portfolio::{owner_portfolio_handler, public_portfolio_handler};
