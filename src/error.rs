use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::fixtures::FixtureError;

pub const DATASET_NOT_FOUND: &str = "Spreadsheet not found";

#[derive(Debug)]
pub enum AppError {
    Fixture(FixtureError),
    DatasetNotFound,
}

impl From<FixtureError> for AppError {
    fn from(err: FixtureError) -> Self {
        AppError::Fixture(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            AppError::Fixture(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::DatasetNotFound => (StatusCode::NOT_FOUND, DATASET_NOT_FOUND.to_string()),
        };
        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use std::io;

    async fn body_json(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_dataset_not_found_response() {
        let (status, body) = body_json(AppError::DatasetNotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Spreadsheet not found" }));
    }

    #[tokio::test]
    async fn test_read_failure_response() {
        let err = FixtureError::Read {
            name: "users.json".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        let (status, body) = body_json(err.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "users.json: No such file or directory" })
        );
    }

    #[tokio::test]
    async fn test_parse_failure_response() {
        let source = serde_json::from_str::<Value>("{ not json").unwrap_err();
        let err = FixtureError::Parse {
            name: "pemanfaatan.json".to_string(),
            source,
        };

        let (status, body) = body_json(AppError::from(err)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("pemanfaatan.json: "));
        assert!(message.len() > "pemanfaatan.json: ".len());
    }
}
