//! Per-section renderers. Each is a pure function of the content store and,
//! for About and Resume, the current resume state. No renderer touches any
//! state outside its [`RenderContext`], so a failure surfaced in one section
//! (a resume read error, say) never affects another.

use std::path::Path;

use super::escape;
use crate::content::{Profile, SiteContent};
use crate::nav::Section;
use crate::resume::{
    download_data_uri, inline_data_uri, suggested_filename, ResumeState, INLINE_PREVIEW_CAP,
};

/// Everything a section render may read. Built fresh per request.
pub struct RenderContext<'a> {
    pub content: &'a SiteContent,
    pub resume: &'a ResumeState,
    pub resume_path: &'a Path,
    /// Formatted contact echo block, present right after a form submit.
    pub echo: Option<&'a str>,
}

/// Total dispatch over the section set: exactly one section's content per
/// call, no cross-section leakage.
pub fn render_section(section: Section, ctx: &RenderContext) -> String {
    match section {
        Section::About => about(ctx),
        Section::Projects => projects(ctx),
        Section::Experience => experience(ctx),
        Section::Resume => resume_view(ctx),
        Section::Education => education(ctx),
        Section::Contact => contact(ctx),
    }
}

fn section_header(section: Section) -> String {
    format!(
        "<header class=\"section-header\"><h2>{}</h2><p class=\"muted\">{}</p></header>",
        section.label(),
        section.subtitle(),
    )
}

fn chips(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<span class=\"chip\">{}</span>", escape(item)))
        .collect()
}

fn contact_links(profile: &Profile) -> String {
    let mut out = String::from("<ul class=\"contact-links\">");
    out.push_str(&format!(
        "<li><a href=\"{}\">LinkedIn</a></li>",
        escape(&profile.linkedin)
    ));
    out.push_str(&format!(
        "<li><a href=\"{}\">GitHub</a></li>",
        escape(&profile.github)
    ));
    out.push_str(&format!(
        "<li><a href=\"mailto:{email}\">{email}</a></li>",
        email = escape(&profile.email)
    ));
    // Optional fields are omitted entirely, never rendered as blanks.
    if let Some(phone) = profile.phone.as_deref().filter(|p| !p.is_empty()) {
        out.push_str(&format!("<li>{}</li>", escape(phone)));
    }
    out.push_str("</ul>");
    out
}

fn about(ctx: &RenderContext) -> String {
    let profile = &ctx.content.profile;
    let mut out = section_header(Section::About);

    out.push_str(&format!("<h3>{}</h3>", escape(&profile.name)));
    out.push_str(&format!("<p>{}</p>", escape(&profile.tagline)));
    out.push_str(&format!(
        "<p class=\"muted\">{}</p>",
        escape(&profile.location)
    ));
    out.push_str(&contact_links(profile));

    if let Some(summary) = profile.summary.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&format!("<p>{}</p>", escape(summary)));
    }

    out.push_str("<div class=\"skills\">");
    for group in &ctx.content.skills {
        out.push_str(&format!(
            "<div class=\"skill-group\"><h4>{}</h4><div class=\"chips\">{}</div></div>",
            escape(&group.category),
            chips(&group.items),
        ));
    }
    out.push_str("</div>");

    out.push_str("<h4>Resume</h4>");
    out.push_str(&resume_download_block(ctx.resume, ctx.resume_path));
    out
}

fn projects(ctx: &RenderContext) -> String {
    let mut out = section_header(Section::Projects);
    for project in &ctx.content.projects {
        out.push_str("<article class=\"card\">");
        out.push_str(&format!("<h3>{}</h3>", escape(&project.title)));
        out.push_str(&format!("<p>{}</p>", escape(&project.description)));
        if !project.highlights.is_empty() {
            out.push_str(&format!(
                "<div class=\"chips\">{}</div>",
                chips(&project.highlights)
            ));
        }
        let links: Vec<String> = project
            .links
            .iter()
            .filter(|link| !link.url.is_empty())
            .map(|link| {
                format!(
                    "<a href=\"{}\">{}</a>",
                    escape(&link.url),
                    escape(&link.label)
                )
            })
            .collect();
        if !links.is_empty() {
            out.push_str(&format!("<p class=\"links\">{}</p>", links.join(" · ")));
        }
        out.push_str("</article>");
    }
    out
}

fn experience(ctx: &RenderContext) -> String {
    let mut out = section_header(Section::Experience);
    for entry in &ctx.content.experience {
        out.push_str("<article class=\"card\">");
        out.push_str(&format!(
            "<h3>{}, {}</h3>",
            escape(&entry.role),
            escape(&entry.organization)
        ));
        out.push_str(&format!("<p class=\"muted\">{}</p>", escape(&entry.period)));
        if !entry.bullets.is_empty() {
            out.push_str("<ul>");
            for bullet in &entry.bullets {
                out.push_str(&format!("<li>{}</li>", escape(bullet)));
            }
            out.push_str("</ul>");
        }
        out.push_str("</article>");
    }
    out
}

fn education(ctx: &RenderContext) -> String {
    let mut out = section_header(Section::Education);
    for entry in &ctx.content.education {
        out.push_str("<article class=\"card\">");
        out.push_str(&format!("<h3>{}</h3>", escape(&entry.degree)));
        out.push_str(&format!(
            "<p>{} · {}</p>",
            escape(&entry.school),
            escape(&entry.location)
        ));
        out.push_str("</article>");
    }
    out
}

fn resume_view(ctx: &RenderContext) -> String {
    let mut out = section_header(Section::Resume);
    match ctx.resume {
        ResumeState::Present(bytes) => {
            if bytes.len() > INLINE_PREVIEW_CAP {
                out.push_str(&format!(
                    "<p class=\"muted\">The resume ({} bytes) is too large to preview inline; use the download link below.</p>",
                    bytes.len()
                ));
            } else {
                out.push_str(&format!(
                    "<iframe class=\"resume-frame\" title=\"Resume preview\" src=\"{}\"></iframe>",
                    inline_data_uri(bytes)
                ));
            }
            out.push_str(&resume_download_block(ctx.resume, ctx.resume_path));
        }
        ResumeState::Absent => out.push_str(&absent_hint(ctx.resume_path)),
        ResumeState::ReadError(reason) => out.push_str(&read_warning(reason)),
    }
    out
}

fn contact(ctx: &RenderContext) -> String {
    let profile = &ctx.content.profile;
    let mut out = section_header(Section::Contact);
    out.push_str(&contact_links(profile));
    out.push_str("<p>Prefer a quick note? Fill the form and copy the result.</p>");
    out.push_str(
        "<form class=\"contact-form\" method=\"post\" action=\"/contact\">\
         <label>Your name<input type=\"text\" name=\"name\"></label>\
         <label>Message<textarea name=\"message\" rows=\"5\"></textarea></label>\
         <button type=\"submit\">Format message</button>\
         </form>",
    );
    if let Some(echo) = ctx.echo {
        out.push_str(&format!("<pre class=\"echo\">{}</pre>", escape(echo)));
    }
    out
}

fn resume_download_block(resume: &ResumeState, path: &Path) -> String {
    match resume {
        ResumeState::Present(bytes) => format!(
            "<p><a class=\"button\" href=\"{}\" download=\"{}\">Download resume</a></p>",
            download_data_uri(bytes),
            escape(&suggested_filename(path)),
        ),
        ResumeState::Absent => absent_hint(path),
        ResumeState::ReadError(reason) => read_warning(reason),
    }
}

fn absent_hint(path: &Path) -> String {
    format!(
        "<p class=\"muted\">Add a resume at <code>{}</code> to enable the preview and download link.</p>",
        escape(&path.display().to_string())
    )
}

fn read_warning(reason: &str) -> String {
    format!(
        "<p class=\"warning\">Could not read the resume: {}</p>",
        escape(reason)
    )
}
