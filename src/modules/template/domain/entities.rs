use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Minimal,
    Modern,
    Creative,
    Professional,
}

impl TemplateId {
    /// Registry order.
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Minimal,
        TemplateId::Modern,
        TemplateId::Creative,
        TemplateId::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Minimal => "minimal",
            TemplateId::Modern => "modern",
            TemplateId::Creative => "creative",
            TemplateId::Professional => "professional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template id: {0}")]
pub struct UnknownTemplateId(pub String);

impl FromStr for TemplateId {
    type Err = UnknownTemplateId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimal" => Ok(TemplateId::Minimal),
            "modern" => Ok(TemplateId::Modern),
            "creative" => Ok(TemplateId::Creative),
            "professional" => Ok(TemplateId::Professional),
            other => Err(UnknownTemplateId(other.to_string())),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Minimal,
    Modern,
    Creative,
    Professional,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Minimal => "minimal",
            TemplateCategory::Modern => "modern",
            TemplateCategory::Creative => "creative",
            TemplateCategory::Professional => "professional",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "minimal" => Some(TemplateCategory::Minimal),
            "modern" => Some(TemplateCategory::Modern),
            "creative" => Some(TemplateCategory::Creative),
            "professional" => Some(TemplateCategory::Professional),
            _ => None,
        }
    }
}

/// Descriptive data for a template, used by the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMetadata {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: &'static str,
    pub category: TemplateCategory,
    /// Accent color as a CSS hex string.
    pub color: &'static str,
    pub features: &'static [&'static str],
}

/// Gallery search criteria. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    pub query: Option<String>,
    pub category: Option<TemplateCategory>,
}

impl TemplateFilter {
    pub fn matches(&self, metadata: &TemplateMetadata) -> bool {
        let category_ok = self.category.map_or(true, |c| c == metadata.category);

        let query_ok = match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => {
                let needle = q.to_lowercase();
                metadata.name.to_lowercase().contains(&needle)
                    || metadata.description.to_lowercase().contains(&needle)
                    || metadata
                        .features
                        .iter()
                        .any(|f| f.to_lowercase().contains(&needle))
            }
        };

        category_ok && query_ok
    }
}
