pub mod display_response;

pub use display_response::display_response;
