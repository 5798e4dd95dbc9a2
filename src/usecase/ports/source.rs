use std::path::PathBuf;

use crate::domain::entities::record::Dataset;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the lookup table comes from. Called once per session.
pub trait DatasetSource: Send + Sync {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Dataset, LoadError>;
}
