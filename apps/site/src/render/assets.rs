//! Static asset constants.

/// Stylesheet inlined into every rendered page.
pub const CSS: &str = include_str!("styles.css");
