use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::record::Dataset;
use crate::usecase::ports::source::{DatasetSource, LoadError};

pub struct LoadService {
    source: Arc<dyn DatasetSource>,
}

impl LoadService {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    /// Single attempt; a failure is final for the session.
    pub fn load(&self) -> Result<Arc<Dataset>, LoadError> {
        let origin = self.source.describe();
        match self.source.load() {
            Ok(dataset) => {
                info!(
                    origin = %origin,
                    systems = dataset.systems.len(),
                    rows = dataset.rows.len(),
                    "dataset loaded"
                );
                Ok(Arc::new(dataset))
            }
            Err(err) => {
                error!(origin = %origin, error = %err, "dataset load failed");
                Err(err)
            }
        }
    }
}
