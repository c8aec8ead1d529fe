use super::assets::CSS;
use super::escape;
use crate::nav::{NavConfig, Section};

/// Full page shell: head with the inlined stylesheet, sidebar navigation
/// listing the enabled sections with exactly one marked active, and the
/// rendered section body.
pub fn render_page(site_name: &str, nav: &NavConfig, active: Section, body: &str) -> String {
    let mut nav_items = String::new();
    for section in nav.enabled() {
        let marker = if *section == active {
            " class=\"active\" aria-current=\"page\""
        } else {
            ""
        };
        nav_items.push_str(&format!(
            "<li><a href=\"/{slug}\"{marker}>{label}</a></li>",
            slug = section.slug(),
            label = section.label(),
        ));
    }

    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>{css}</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"layout\">\n\
         <aside class=\"sidebar\">\n\
         <h1>{name}</h1>\n\
         <nav aria-label=\"Sections\"><ul>{nav_items}</ul></nav>\n\
         </aside>\n\
         <main>{body}</main>\n\
         </div>\n\
         </body>\n\
         </html>\n",
        title = escape(site_name),
        css = CSS,
        name = escape(site_name),
    )
}
