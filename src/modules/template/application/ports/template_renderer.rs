use crate::portfolio::domain::entities::PortfolioData;
use crate::template::domain::entities::TemplateId;

/// Input shared by every template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateProps<'a> {
    pub data: &'a PortfolioData,
    /// Thumbnail-sized rendering for galleries. Does not change which data is shown.
    pub is_preview: bool,
}

/// A visual layout that turns a portfolio into a complete HTML document.
///
/// Implementations are stateless: the same props always produce the same markup.
pub trait TemplateRenderer: Send + Sync {
    fn template_id(&self) -> TemplateId;

    fn render(&self, props: &TemplateProps<'_>) -> String;
}
