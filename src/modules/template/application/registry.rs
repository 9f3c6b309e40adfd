use crate::template::adapter::outgoing::html::{
    CreativeTemplate, MinimalTemplate, ModernTemplate, ProfessionalTemplate,
};
use crate::template::application::ports::TemplateRenderer;
use crate::template::domain::entities::{
    TemplateCategory, TemplateFilter, TemplateId, TemplateMetadata,
};

static MINIMAL: MinimalTemplate = MinimalTemplate;
static MODERN: ModernTemplate = ModernTemplate;
static CREATIVE: CreativeTemplate = CreativeTemplate;
static PROFESSIONAL: ProfessionalTemplate = ProfessionalTemplate;

/// In `TemplateId::ALL` order.
static METADATA: [TemplateMetadata; 4] = [
    TemplateMetadata {
        id: TemplateId::Minimal,
        name: "Minimal",
        description: "Clean and simple design focused on content",
        preview: "/templates/minimal-preview.jpg",
        category: TemplateCategory::Minimal,
        color: "#000000",
        features: &[
            "Clean Typography",
            "Mobile Responsive",
            "Fast Loading",
            "SEO Friendly",
        ],
    },
    TemplateMetadata {
        id: TemplateId::Modern,
        name: "Modern",
        description: "Contemporary design with smooth animations",
        preview: "/templates/modern-preview.jpg",
        category: TemplateCategory::Modern,
        color: "#3B82F6",
        features: &[
            "Smooth Animations",
            "Dark Mode",
            "Interactive Elements",
            "Modern UI",
        ],
    },
    TemplateMetadata {
        id: TemplateId::Creative,
        name: "Creative",
        description: "Bold and expressive layout for creative professionals",
        preview: "/templates/creative-preview.jpg",
        category: TemplateCategory::Creative,
        color: "#EC4899",
        features: &[
            "Bold Design",
            "Creative Layouts",
            "Visual Focus",
            "Unique Sections",
        ],
    },
    TemplateMetadata {
        id: TemplateId::Professional,
        name: "Professional",
        description: "Corporate-style design perfect for business professionals",
        preview: "/templates/professional-preview.jpg",
        category: TemplateCategory::Professional,
        color: "#059669",
        features: &[
            "Corporate Style",
            "Professional Layout",
            "Resume Focus",
            "Contact Forms",
        ],
    },
];

/// Maps stored template identifiers to renderers and gallery metadata.
///
/// The table is fixed at compile time. Unknown identifiers resolve to `None`,
/// which callers must surface as "template not available".
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateRegistry;

impl TemplateRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve_renderer(&self, template_id: &str) -> Option<&'static dyn TemplateRenderer> {
        template_id.parse::<TemplateId>().ok().map(Self::renderer_for)
    }

    pub fn resolve_metadata(&self, template_id: &str) -> Option<&'static TemplateMetadata> {
        template_id.parse::<TemplateId>().ok().map(Self::metadata_for)
    }

    pub fn list_all_metadata(&self) -> &'static [TemplateMetadata] {
        &METADATA
    }

    pub fn filter_metadata(&self, filter: &TemplateFilter) -> Vec<&'static TemplateMetadata> {
        METADATA.iter().filter(|m| filter.matches(m)).collect()
    }

    pub fn renderer_for(id: TemplateId) -> &'static dyn TemplateRenderer {
        match id {
            TemplateId::Minimal => &MINIMAL,
            TemplateId::Modern => &MODERN,
            TemplateId::Creative => &CREATIVE,
            TemplateId::Professional => &PROFESSIONAL,
        }
    }

    pub fn metadata_for(id: TemplateId) -> &'static TemplateMetadata {
        match id {
            TemplateId::Minimal => &METADATA[0],
            TemplateId::Modern => &METADATA[1],
            TemplateId::Creative => &METADATA[2],
            TemplateId::Professional => &METADATA[3],
        }
    }
}
