use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A single portfolio as served by the folio data service.
///
/// The record is read-only here. `template_id` is kept as the raw string the
/// backend stored so that an unknown template surfaces as an unresolvable
/// renderer instead of a decode failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub job_role: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub resume: Option<String>,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "socials")]
    pub socials: Vec<Social>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Skill {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub percentage: String,
}

impl Skill {
    /// Percentage clamped to 0..=100, for bar widths. The raw text is what gets displayed.
    pub fn level(&self) -> u8 {
        self.percentage
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map(|p| p.clamp(0.0, 100.0).round() as u8)
            .unwrap_or(0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default)]
    pub project_title: String,
    #[serde(default)]
    pub project_summary: String,
    #[serde(default)]
    pub project_url: String,
    #[serde(default)]
    pub project_image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Social {
    pub platform: String,
    pub url: String,
}

// Accepts a string or a number; null and blank strings become None.
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// Objects with a platform are kept, a bare string is a platform without a link,
// anything else is dropped.
fn socials<'de, D>(deserializer: D) -> Result<Vec<Social>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(platform) if !platform.trim().is_empty() => Some(Social {
                platform: platform.trim().to_string(),
                url: String::new(),
            }),
            Value::Object(map) => {
                let field = |key: &str| match map.get(key) {
                    Some(Value::String(s)) => s.trim().to_string(),
                    _ => String::new(),
                };
                let platform = field("platform");
                (!platform.is_empty()).then(|| Social {
                    platform,
                    url: field("url"),
                })
            }
            _ => None,
        })
        .collect())
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

//
// ──────────────────────────────────────────────────────────
// Identifier
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPortfolioId {
    #[error("No portfolio ID provided")]
    Missing,
}

/// Opaque identifier of a portfolio on the data service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortfolioId(String);

impl PortfolioId {
    pub fn parse(raw: Option<&str>) -> Result<Self, InvalidPortfolioId> {
        match raw.map(str::trim) {
            Some(id) if !id.is_empty() => Ok(Self(id.to_string())),
            _ => Err(InvalidPortfolioId::Missing),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unencoded path segments of the authenticated owner view.
    pub fn owner_segments(&self) -> [&str; 2] {
        ["me", self.0.as_str()]
    }

    /// Unencoded path segments of the public shareable view.
    pub fn share_segments(&self) -> [&str; 2] {
        ["p", self.0.as_str()]
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
