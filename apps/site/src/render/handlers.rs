use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::errors::AppError;
use crate::nav::Section;
use crate::render::{render_page, render_section, RenderContext};
use crate::resume::{self, ResumeState};
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(render_for(&state, state.nav.default_section(), None)))
}

/// GET /:section
pub async fn handle_section(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let section = state.nav.select(&slug)?;
    Ok(Html(render_for(&state, section, None)))
}

/// Renders one full page for the given section.
pub fn render_for(state: &AppState, section: Section, echo: Option<&str>) -> String {
    // Only About and Resume consult the file; skip the read elsewhere.
    let resume = match section {
        Section::About | Section::Resume => resume::load(&state.resume_path),
        _ => ResumeState::Absent,
    };
    let ctx = RenderContext {
        content: state.content.as_ref(),
        resume: &resume,
        resume_path: &state.resume_path,
        echo,
    };
    let body = render_section(section, &ctx);
    render_page(&state.content.profile.name, &state.nav, section, &body)
}
