//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;

use agronomist_core::{AgronomistError, InputParams, Inputs, Page};

use super::error::ApiError;

/// Extract and validate a page slug from path
pub struct ValidPage(pub Page);

impl<S> FromRequestParts<S> for ValidPage
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(slug): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "page",
                id: String::new(),
            })?;

        let page = slug.parse::<Page>()?;
        Ok(Self(page))
    }
}

/// Extract widget values from the query string
pub struct PageInputs(pub Inputs);

impl<S> FromRequestParts<S> for PageInputs
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<InputParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(AgronomistError::invalid_input(e.body_text())))?;

        Ok(Self(params.into_inputs()?))
    }
}
