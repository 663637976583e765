use axum::{Extension, Json};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::fixtures::{FixtureSource, SharedFixtures, PEMANFAATAN_FIXTURE, USERS_FIXTURE};

async fn serve_fixture(fixtures: &dyn FixtureSource, name: &str) -> Result<Json<Value>, AppError> {
    match fixtures.load(name).await {
        Ok(value) => Ok(Json(value)),
        Err(e) => {
            warn!(fixture = name, error = %e, "failed to load fixture");
            Err(e.into())
        }
    }
}

pub async fn users(Extension(fixtures): Extension<SharedFixtures>) -> Result<Json<Value>, AppError> {
    debug!("Users handler is run");
    serve_fixture(fixtures.as_ref(), USERS_FIXTURE).await
}

pub async fn pemanfaatan(
    Extension(fixtures): Extension<SharedFixtures>,
) -> Result<Json<Value>, AppError> {
    debug!("Pemanfaatan handler is run");
    serve_fixture(fixtures.as_ref(), PEMANFAATAN_FIXTURE).await
}
