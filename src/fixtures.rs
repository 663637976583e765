use async_trait::async_trait;
use serde_json::Value;
use std::{io, path::PathBuf, sync::Arc};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

pub const USERS_FIXTURE: &str = "users.json";
pub const PEMANFAATAN_FIXTURE: &str = "pemanfaatan.json";

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("{name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("{name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Somewhere fixture documents can be loaded from by file name.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FixtureSource: Send + Sync {
    async fn load(&self, name: &str) -> Result<Value, FixtureError>;
}

pub type SharedFixtures = Arc<dyn FixtureSource>;

/// Fixtures read from a directory on disk. Every call hits the file system,
/// so edits to the files show up on the next request.
#[derive(Debug, Clone)]
pub struct FixtureDir {
    root: PathBuf,
}

impl FixtureDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FixtureSource for FixtureDir {
    async fn load(&self, name: &str) -> Result<Value, FixtureError> {
        let path = self.root.join(name);

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| FixtureError::Read {
                name: name.to_string(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| FixtureError::Parse {
            name: name.to_string(),
            source,
        })
    }
}
