pub mod routes;
pub mod site_config;
pub mod views;
