use axum::{
    extract::{rejection::PathRejection, Path, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::error::AppError;

/// The one dataset identifier the `/data/:dataset_id` routes answer to.
#[derive(Clone, Debug)]
pub struct DatasetGate {
    pub accepted_id: Arc<str>,
}

impl DatasetGate {
    pub fn new(accepted_id: impl Into<Arc<str>>) -> Self {
        Self {
            accepted_id: accepted_id.into(),
        }
    }

    pub fn accepts(&self, dataset_id: &str) -> bool {
        dataset_id == &*self.accepted_id
    }
}

/// Any identifier that fails to decode counts as unknown, same as a mismatch.
pub async fn dataset_middleware(
    State(gate): State<DatasetGate>,
    dataset_id: Result<Path<String>, PathRejection>,
    req: Request,
    next: Next,
) -> Response {
    match dataset_id {
        Ok(Path(dataset_id)) if gate.accepts(&dataset_id) => next.run(req).await,
        Ok(Path(dataset_id)) => {
            debug!(dataset_id = %dataset_id, "rejected unknown dataset id");
            AppError::DatasetNotFound.into_response()
        }
        Err(rejection) => {
            debug!(error = %rejection, "rejected undecodable dataset id");
            AppError::DatasetNotFound.into_response()
        }
    }
}

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
