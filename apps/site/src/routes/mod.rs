pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact_handlers;
use crate::render::handlers as page_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(page_handlers::handle_index))
        // Static route wins over /:section, so /contact needs its GET here too.
        .route(
            "/contact",
            get(contact_handlers::handle_contact_page).post(contact_handlers::handle_contact_submit),
        )
        .route("/:section", get(page_handlers::handle_section))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum_test::TestServer;

    use super::build_router;
    use crate::content::parse_content;
    use crate::nav::NavConfig;
    use crate::state::AppState;

    const SAMPLE: &str = r#"
        [profile]
        name = "Jordan Reyes"
        tagline = "Data Analyst"
        location = "Lisbon, Portugal"
        email = "jordan@example.com"
        linkedin = "https://linkedin.com/in/jordan-reyes"
        github = "https://github.com/jordanreyes"

        [[skills]]
        category = "Languages"
        items = ["Python", "SQL"]

        [[experience]]
        role = "Data Analyst"
        organization = "Meridian Health"
        period = "Aug 2024 to present"
        bullets = ["Unified 1.2M claims for trend analysis."]
    "#;

    // `extra` holds top-level keys, which must precede the tables in SAMPLE.
    fn make_server(extra: &str) -> TestServer {
        let content = parse_content(&format!("{extra}\n{SAMPLE}")).unwrap();
        let nav = NavConfig::new(&content.sections).unwrap();
        let state = AppState {
            content: Arc::new(content),
            nav,
            resume_path: PathBuf::from("no-such-dir/resume.pdf"),
        };
        TestServer::new(build_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let server = make_server("");
        let res = server.get("/health").await;
        res.assert_status_ok();
        assert!(res.text().contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_index_renders_default_section() {
        let server = make_server("");
        let res = server.get("/").await;
        res.assert_status_ok();
        let body = res.text();
        assert!(body.contains("<h2>About</h2>"));
        assert!(body.contains("Jordan Reyes"));
    }

    #[tokio::test]
    async fn test_each_section_route_renders_only_itself() {
        let server = make_server("");
        let res = server.get("/experience").await;
        res.assert_status_ok();
        let body = res.text();
        assert!(body.contains("<h2>Experience</h2>"));
        assert!(body.contains("Meridian Health"));
        assert!(!body.contains("<h2>About</h2>"));
    }

    #[tokio::test]
    async fn test_unknown_slug_is_404() {
        let server = make_server("");
        server.get("/blog").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_disabled_section_is_404() {
        let server = make_server("sections = [\"about\", \"contact\"]");
        server.get("/projects").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_contact_page_renders_form() {
        let server = make_server("");
        let res = server.get("/contact").await;
        res.assert_status_ok();
        assert!(res.text().contains("class=\"contact-form\""));
    }

    #[tokio::test]
    async fn test_contact_post_echoes_both_fields() {
        let server = make_server("");
        let res = server
            .post("/contact")
            .form(&[("name", "Ada"), ("message", "Hello")])
            .await;
        res.assert_status_ok();
        let body = res.text();
        assert!(body.contains("class=\"echo\""));
        assert!(body.contains("Ada"));
        assert!(body.contains("Hello"));
    }

    #[tokio::test]
    async fn test_contact_post_with_empty_fields_is_legal() {
        let server = make_server("");
        let res = server
            .post("/contact")
            .form(&[("name", ""), ("message", "")])
            .await;
        res.assert_status_ok();
        assert!(res.text().contains("My name is ."));
    }

    #[tokio::test]
    async fn test_resume_absent_is_informational_not_error() {
        let server = make_server("");
        let res = server.get("/resume").await;
        res.assert_status_ok();
        assert!(res.text().contains("no-such-dir/resume.pdf"));
    }
}
