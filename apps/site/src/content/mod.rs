// Content store: static biographical content parsed from a TOML file at
// startup, validated once, then shared read-only behind Arc.

pub mod models;
pub mod store;

pub use models::{
    EducationEntry, ExperienceEntry, Profile, ProjectEntry, ProjectLink, SiteContent, SkillGroup,
};
pub use store::{load_content, parse_content};
