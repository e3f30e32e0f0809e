//! Extractors and rejection mapping that answer malformed input with a
//! [`Problem`] instead of axum's plain-text rejections.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        FromRequestParts, Path,
    },
    http::request::Parts,
};

use super::Problem;

/// Integer row identifier taken from the `{id}` path segment.
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                Problem::bad_request("int", e.body_text(), "invalid_value", &["path", "id"])
            })?;

        Ok(Self(id))
    }
}

impl From<FormRejection> for Problem {
    fn from(rejection: FormRejection) -> Self {
        Problem::bad_request("body", rejection.body_text(), "invalid_value", &["body"])
    }
}

impl From<QueryRejection> for Problem {
    fn from(rejection: QueryRejection) -> Self {
        Problem::bad_request("query", rejection.body_text(), "invalid_value", &["query"])
    }
}

