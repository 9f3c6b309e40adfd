pub mod api;
pub mod html;
pub mod status_page;
