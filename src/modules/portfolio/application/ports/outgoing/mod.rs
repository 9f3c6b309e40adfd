pub mod portfolio_query;
pub mod slug_query;

pub use portfolio_query::{PortfolioQuery, PortfolioQueryError};
pub use slug_query::{SlugQuery, SlugQueryError};
