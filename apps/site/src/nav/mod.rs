//! Navigation dispatch: maps a selected slug to exactly one section.
//!
//! The enabled set is configuration data, not a per-variant build flag: the
//! content file lists which sections exist and in what sidebar order. A slug
//! that is unknown or points at a disabled section is a plain 404; no
//! selection is ever rejected with side effects, and nothing about the
//! selection persists between requests.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The fixed universe of page kinds. A given deployment enables a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    About,
    Projects,
    Experience,
    Resume,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Resume,
        Section::Education,
        Section::Contact,
    ];

    /// URL path segment for this section.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Resume => "resume",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Sidebar and heading label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Resume => "Resume",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Caption rendered under the section heading.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Section::About => "Who I am and what I build",
            Section::Projects => "A curated, impact-first selection",
            Section::Experience => "Roles, impact, and accomplishments",
            Section::Resume => "Inline view and download",
            Section::Education => "Degrees and schools",
            Section::Contact => "Reach out for roles or collaborations",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.slug() == slug)
    }
}

/// Data-driven navigation set: which sections are live and which one a bare
/// `/` lands on.
#[derive(Debug, Clone)]
pub struct NavConfig {
    enabled: Vec<Section>,
    default: Section,
}

impl NavConfig {
    /// Builds the navigation set from the configured section list.
    /// Duplicates collapse to their first occurrence; an empty list is a
    /// startup error. The default is About when enabled, else the first entry.
    pub fn new(sections: &[Section]) -> Result<Self> {
        let mut enabled: Vec<Section> = Vec::new();
        for &section in sections {
            if !enabled.contains(&section) {
                enabled.push(section);
            }
        }
        if enabled.is_empty() {
            bail!("Navigation needs at least one enabled section");
        }

        let default = if enabled.contains(&Section::About) {
            Section::About
        } else {
            enabled[0]
        };

        Ok(NavConfig { enabled, default })
    }

    pub fn enabled(&self) -> &[Section] {
        &self.enabled
    }

    pub fn default_section(&self) -> Section {
        self.default
    }

    pub fn is_enabled(&self, section: Section) -> bool {
        self.enabled.contains(&section)
    }

    /// Total dispatch: a known, enabled slug selects its section; anything
    /// else is NotFound. Disabled sections are indistinguishable from unknown
    /// ones so their content is not reachable by URL guessing.
    pub fn select(&self, slug: &str) -> Result<Section, AppError> {
        match Section::from_slug(slug) {
            Some(section) if self.is_enabled(section) => Ok(section),
            _ => Err(AppError::NotFound(format!("No such page: {slug}"))),
        }
    }
}
