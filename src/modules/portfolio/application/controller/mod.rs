pub mod display_controller;
pub mod state;

pub use display_controller::PortfolioDisplayController;
pub use state::{DisplayError, DisplayState, RenderedPortfolio};
