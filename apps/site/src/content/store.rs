use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use super::models::SiteContent;

/// Reads and validates the content file. This is the one fatal path in the
/// service: a missing or invalid content file stops startup before the
/// server binds.
pub fn load_content(path: &Path) -> Result<SiteContent> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file '{}'", path.display()))?;
    let content = parse_content(&raw)
        .with_context(|| format!("Invalid content file '{}'", path.display()))?;
    info!("Content file loaded from {}", path.display());
    Ok(content)
}

/// Parses and validates a TOML content document.
pub fn parse_content(raw: &str) -> Result<SiteContent> {
    let content: SiteContent = toml::from_str(raw)?;
    validate(&content)?;
    Ok(content)
}

fn validate(content: &SiteContent) -> Result<()> {
    // Skill categories act as mapping keys; a duplicate would silently
    // shadow an earlier group in any keyed lookup.
    let mut seen = HashSet::new();
    for group in &content.skills {
        if !seen.insert(group.category.as_str()) {
            bail!("Duplicate skill category '{}'", group.category);
        }
    }

    if content.sections.is_empty() {
        bail!("'sections' must list at least one section");
    }

    Ok(())
}
