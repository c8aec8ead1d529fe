use axum::{extract::State, response::Html, Form};

use super::{format_reply, ContactForm};
use crate::errors::AppError;
use crate::nav::Section;
use crate::render::handlers::render_for;
use crate::state::AppState;

/// GET /contact
pub async fn handle_contact_page(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let section = state.nav.select(Section::Contact.slug())?;
    Ok(Html(render_for(&state, section, None)))
}

/// POST /contact
/// Echoes the submitted fields back inside the re-rendered contact page.
pub async fn handle_contact_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, AppError> {
    let section = state.nav.select(Section::Contact.slug())?;
    let reply = format_reply(&state.content.profile.name, &form);
    Ok(Html(render_for(&state, section, Some(&reply))))
}
