pub mod get_template;
pub mod list_templates;
pub mod preview_template;

pub use get_template::get_template_handler;
pub use list_templates::{list_templates_handler, TemplateMetadataResponse};
pub use preview_template::preview_template_handler;
