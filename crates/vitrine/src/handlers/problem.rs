//! Problem responses returned by the admin API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error payload: `{ "title", "detail", "type", "path" }`.
///
/// `title` names the kind of value at fault, `type` is a stable machine code
/// and `path` locates the offending input, e.g. `["path", "id"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    #[serde(skip)]
    pub status: StatusCode,
    pub title: String,
    pub detail: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub path: Vec<String>,
}

impl Problem {
    pub fn new(
        status: StatusCode,
        title: impl Into<String>,
        detail: impl Into<String>,
        kind: impl Into<String>,
        path: &[&str],
    ) -> Self {
        Self {
            status,
            title: title.into(),
            detail: detail.into(),
            kind: kind.into(),
            path: path.iter().map(|segment| segment.to_string()).collect(),
        }
    }

    /// 404 for an identifier that matches no row.
    pub fn not_found(entity: &str, id: i64, path: &[&str]) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "int",
            format!("{entity} with id {id} was not found."),
            "value_not_found",
            path,
        )
    }

    /// 400 for input that fails validation or conflicts with stored state.
    pub fn bad_request(
        title: impl Into<String>,
        detail: impl Into<String>,
        kind: impl Into<String>,
        path: &[&str],
    ) -> Self {
        Self::new(StatusCode::BAD_REQUEST, title, detail, kind, path)
    }

    /// 500 for a storage failure the repository already logged.
    pub fn storage_failure(detail: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "database",
            detail,
            kind,
            &["body"],
        )
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, kind = %self.kind, detail = %self.detail, "API error");
        } else {
            tracing::warn!(status = %self.status, kind = %self.kind, "API error");
        }

        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_serializes_type_and_skips_status() {
        let problem = Problem::not_found("Category", 7, &["path", "id"]);

        let json = serde_json::to_value(&problem).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "int",
                "detail": "Category with id 7 was not found.",
                "type": "value_not_found",
                "path": ["path", "id"],
            })
        );
    }

    #[tokio::test]
    async fn test_into_response_uses_status() {
        let response =
            Problem::bad_request("str", "Name taken", "category_exists", &["body", "name"])
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["type"], "category_exists");
    }
}
