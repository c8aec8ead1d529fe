//! Contact echo: reflects a two-field form back as a copyable text block.
//! Nothing is stored, nothing is sent anywhere.

pub mod handlers;

use serde::Deserialize;

/// The two free-text form fields. Both may be empty; serde defaults keep a
/// partial POST body legal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

/// Fills the fixed reply template. Deterministic; empty inputs leave blank
/// slots rather than failing.
pub fn format_reply(recipient: &str, form: &ContactForm) -> String {
    format!(
        "Hi {recipient},\n\nMy name is {name}.\n{message}\n\n-- Sent from the portfolio site\n",
        name = form.name,
        message = form.message,
    )
}
