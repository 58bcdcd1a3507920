//! View models and rendering helpers for the HTML pages

pub mod html;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use agronomist_core::AppView;

use crate::http::ApiError;

/// Sidebar link rendered as a radio option
pub struct NavLink {
    pub href: String,
    pub label: &'static str,
    pub selected: bool,
}

/// Full page: sidebar navigation plus the rendered panel
#[derive(Template)]
#[template(path = "shell.html")]
pub struct ShellView {
    pub page_title: &'static str,
    pub page_icon: &'static str,
    pub wide: bool,
    pub sidebar_expanded: bool,
    pub title: &'static str,
    pub tagline: &'static str,
    pub nav_header: &'static str,
    pub nav_prompt: &'static str,
    pub nav: Vec<NavLink>,
    pub body: String,
}

impl From<&AppView> for ShellView {
    fn from(view: &AppView) -> Self {
        Self {
            page_title: view.config.page_title,
            page_icon: view.config.page_icon,
            wide: view.config.wide_layout,
            sidebar_expanded: view.config.sidebar_expanded,
            title: view.title,
            tagline: view.tagline,
            nav_header: view.nav_header,
            nav_prompt: view.nav_prompt,
            nav: view
                .nav
                .iter()
                .map(|item| NavLink {
                    href: format!("/pages/{}", item.page.slug()),
                    label: item.label,
                    selected: item.selected,
                })
                .collect(),
            body: html::render_tree_html(&view.body, view.page),
        }
    }
}

/// Error page
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorView {
    pub status: u16,
    pub message: String,
}

impl ErrorView {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Render a template with automatic error handling
pub fn render_template<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            let err = ApiError::Internal {
                message: format!("template rendering failed: {e}"),
            };
            render_error(err.status(), &err.public_message())
        }
    }
}

/// Render the error page, falling back to plain text
pub fn render_error(status: StatusCode, message: &str) -> Response {
    match ErrorView::new(status, message).render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error view: {}", e);
            (status, message.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agronomist_core::{render_app, Inputs, Page};

    #[test]
    fn shell_marks_selected_page() {
        let view = render_app(Page::PestManagement, Inputs::default());
        let html = ShellView::from(&view).render().unwrap();
        assert!(html.contains("<title>AIAgronomist</title>"));
        assert!(html.contains(r#"<a class="nav-option selected" href="/pages/pest-management""#));
        assert_eq!(html.matches("nav-option selected").count(), 1);
        assert!(html.contains("🐛 Pest Management"));
    }

    struct Unprintable;

    impl std::fmt::Display for Unprintable {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    #[derive(Template)]
    #[template(source = "<p>{{ value }}</p>", ext = "html")]
    struct BrokenView {
        value: Unprintable,
    }

    #[tokio::test]
    async fn failed_render_is_500_without_details() {
        let response = render_template(BrokenView { value: Unprintable });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("an internal error occurred"));
        assert!(!html.contains("template rendering failed"));
    }

    #[test]
    fn error_view_escapes_message() {
        let html = ErrorView::new(StatusCode::NOT_FOUND, "page '<x>' not found")
            .render()
            .unwrap();
        assert!(html.contains("404"));
        assert!(html.contains("&lt;x&gt;"));
    }
}
