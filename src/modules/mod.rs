pub mod portfolio;
pub mod session;
pub mod template;
