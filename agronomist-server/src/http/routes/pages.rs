//! HTML pages
//!
//! GET /                - Home
//! GET /pages/{slug}    - any page, widget values in the query string
//! POST /pages/{slug}   - contact form submission (About only)

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::response::Response;
use axum::routing::get;
use axum::{Form, Router};

use agronomist_core::{render_app, AgronomistError, ContactSubmission, Inputs, Page};

use crate::http::error::ApiError;
use crate::http::extractors::{PageInputs, ValidPage};
use crate::http::server::AppState;
use crate::views::{render_error, render_template, ShellView};

fn render_page(page: Page, inputs: Inputs) -> Response {
    let view = render_app(page, inputs);
    render_template(ShellView::from(&view))
}

fn render_api_error(err: ApiError) -> Response {
    render_error(err.status(), &err.public_message())
}

/// GET /
async fn home() -> Response {
    render_page(Page::Home, Inputs::default())
}

/// GET /pages/{slug}
async fn show_page(
    page: Result<ValidPage, ApiError>,
    inputs: Result<PageInputs, ApiError>,
) -> Response {
    match (page, inputs) {
        (Ok(ValidPage(page)), Ok(PageInputs(inputs))) => render_page(page, inputs),
        (Err(err), _) | (_, Err(err)) => render_api_error(err),
    }
}

/// POST /pages/{slug}
async fn submit_form(
    page: Result<ValidPage, ApiError>,
    form: Result<Form<ContactSubmission>, FormRejection>,
) -> Response {
    let page = match page {
        Ok(ValidPage(page)) => page,
        Err(err) => return render_api_error(err),
    };

    if page != Page::About {
        return render_api_error(ApiError::NotFound {
            resource: "form",
            id: page.slug().to_owned(),
        });
    }

    match form {
        Ok(Form(submission)) => render_page(page, Inputs::default().with_contact(submission)),
        Err(rejection) => render_api_error(ApiError::Validation(AgronomistError::invalid_input(
            rejection.body_text(),
        ))),
    }
}

/// Page routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/pages/{slug}", get(show_page).post(submit_form))
}

#[cfg(test)]
mod tests {
    use crate::http::server::{build_router, ServerConfig};
    use agronomist_core::contact::{MISSING_FIELDS_MESSAGE, SUCCESS_MESSAGE};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = build_router(&ServerConfig::default())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn post_form(uri: &str, body: &'static str) -> (StatusCode, String) {
        let response = build_router(&ServerConfig::default())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn every_page_renders() {
        for page in agronomist_core::Page::ALL {
            let (status, html) = get(&format!("/pages/{}", page.slug())).await;
            assert_eq!(status, StatusCode::OK, "{page}");
            let selected = format!(r#"nav-option selected" href="/pages/{}""#, page.slug());
            assert!(html.contains(&selected), "{page}");
        }
    }

    #[tokio::test]
    async fn unknown_page_is_404() {
        let (status, html) = get("/pages/greenhouse").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("greenhouse"));
    }

    #[tokio::test]
    async fn unknown_crop_is_400() {
        let (status, _) = get("/pages/crop-information?crop=Kale").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn crop_query_shows_facts() {
        let (status, html) = get("/pages/crop-information?search=&crop=Soybean").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Information about Soybean"));
        assert!(html.contains("60-90 days"));
    }

    #[tokio::test]
    async fn weather_location_is_escaped() {
        let (status, html) =
            get("/pages/weather-insights?location=%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[tokio::test]
    async fn pest_category_lists_entries() {
        let (_, html) = get("/pages/pest-management?category=Diseases").await;
        assert!(html.contains("Common Diseases in Agriculture"));
        assert!(html.contains("<strong>Powdery Mildew</strong>"));
    }

    #[tokio::test]
    async fn contact_form_success_and_warning() {
        let (status, html) =
            post_form("/pages/about", "name=Ada&email=ada%40example.com&message=Hello").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"class="callout callout-success""#));
        assert!(html.contains(&crate::views::html::escape(SUCCESS_MESSAGE)));

        let (status, html) = post_form("/pages/about", "name=Ada&email=&message=Hello").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"class="callout callout-warning""#));
        assert!(html.contains(MISSING_FIELDS_MESSAGE));
    }

    #[tokio::test]
    async fn posting_to_other_pages_is_404() {
        let (status, _) = post_form("/pages/home", "name=Ada").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
