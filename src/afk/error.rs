use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AfkStoreError {
    #[error("failed to access AFK store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("AFK store at {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
