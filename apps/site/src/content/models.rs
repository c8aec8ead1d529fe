use serde::{Deserialize, Serialize};

use crate::nav::Section;

/// Owner identity and contact links. Optional fields are omitted from
/// rendering entirely when absent, never shown as blanks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub location: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// One labeled group of skill chips. Category labels must be unique across
/// the document; order of groups and of items is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    /// Free-form display string ("Aug 2024 to present"); never parsed.
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub location: String,
}

/// A labeled outbound link on a project card. An empty URL is legal in
/// authored content and the link is silently omitted from display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

/// The whole content store. Every collection is authored in display order
/// and read-only at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    /// Enabled sections in sidebar order. Omitted key means all of them.
    #[serde(default = "all_sections")]
    pub sections: Vec<Section>,
}

fn all_sections() -> Vec<Section> {
    Section::ALL.to_vec()
}
