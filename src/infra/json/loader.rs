use std::path::{Path, PathBuf};

use crate::domain::entities::record::Dataset;
use crate::usecase::ports::source::{DatasetSource, LoadError};

/// Reads the lookup table from a JSON file on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Dataset, LoadError> {
        load_dataset_file(&self.path)
    }
}

pub fn load_dataset_file(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&text, &path.display().to_string())
}

pub fn parse_dataset(text: &str, origin: &str) -> Result<Dataset, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })
}
