//! JSON API
//!
//! GET  /api/pages          - page list (slug, label)
//! GET  /api/pages/{slug}   - rendered page as a display tree
//! POST /api/contact        - validate a contact submission

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use agronomist_core::{
    render_app, AgronomistError, AppView, ContactOutcome, ContactSubmission, Page,
};

use crate::http::error::ApiError;
use crate::http::extractors::{PageInputs, ValidPage};
use crate::http::server::AppState;

/// Entry in the page list
#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub slug: &'static str,
    pub label: &'static str,
}

/// Contact validation result
#[derive(Debug, Serialize)]
pub struct ContactReply {
    #[serde(flatten)]
    pub outcome: ContactOutcome,
    pub message: &'static str,
}

/// GET /api/pages
async fn list_pages() -> Json<Vec<PageSummary>> {
    Json(
        Page::ALL
            .into_iter()
            .map(|page| PageSummary {
                slug: page.slug(),
                label: page.label(),
            })
            .collect(),
    )
}

/// GET /api/pages/{slug}
async fn get_page(
    ValidPage(page): ValidPage,
    PageInputs(inputs): PageInputs,
) -> Result<Json<AppView>, ApiError> {
    Ok(Json(render_app(page, inputs)))
}

/// POST /api/contact
async fn submit_contact(
    body: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactReply>, ApiError> {
    let Json(submission) = body.map_err(|rejection| {
        ApiError::Validation(AgronomistError::invalid_input(rejection.body_text()))
    })?;

    let outcome = submission.validate();
    tracing::debug!(accepted = outcome.is_accepted(), "contact submission via API");
    let message = outcome.message();
    Ok(Json(ContactReply { outcome, message }))
}

/// API routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/pages", get(list_pages))
        .route("/api/pages/{slug}", get(get_page))
        .route("/api/contact", post(submit_contact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::server::{build_router, ServerConfig};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = build_router(&ServerConfig::default())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn lists_all_pages_in_order() {
        let Json(pages) = list_pages().await;
        let slugs: Vec<_> = pages.iter().map(|p| p.slug).collect();
        assert_eq!(
            slugs,
            vec!["home", "crop-information", "weather-insights", "pest-management", "about"]
        );
    }

    #[tokio::test]
    async fn page_json_contains_display_tree() {
        let (status, json) = send(get("/api/pages/home")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["page"], "home");
        assert_eq!(json["body"]["blocks"][0]["type"], "heading");
        assert_eq!(json["nav"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn unknown_category_is_400_json() {
        let (status, json) = send(get("/api/pages/pest-management?category=Birds")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn unknown_page_is_404_json() {
        let (status, json) = send(get("/api/pages/market-prices")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "not_found");
    }

    #[tokio::test]
    async fn contact_reports_missing_fields() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name": "Ada", "email": "", "message": "Hi"}"#))
            .unwrap();
        let (status, json) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "incomplete");
        assert_eq!(json["missing"], serde_json::json!(["email"]));
        assert_eq!(json["message"], "Please fill in all fields.");
    }

    fn post_contact(content_type: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn malformed_contact_json_is_400_json() {
        let (status, json) = send(post_contact("application/json", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
        assert!(json["message"].as_str().unwrap().starts_with("Invalid input:"));
    }

    #[tokio::test]
    async fn contact_with_wrong_content_type_is_400_json() {
        let (status, json) = send(post_contact("text/plain", "name=Ada")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
        assert!(json["message"].as_str().unwrap().contains("Content-Type"));
    }
}
