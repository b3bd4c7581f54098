use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {0} does not hold a JSON object")]
    NotAnObject(PathBuf),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
