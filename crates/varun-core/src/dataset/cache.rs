use super::{load_dataset, Dataset};
use crate::error::VarunError;
use crate::schema::definition::DatasetSchema;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

/// Load-once handle to a dataset file.
///
/// The first successful `get()` reads and parses the file; every later
/// call returns the same shared `Arc<Dataset>`. Callers racing the first
/// load wait for it instead of reading the file themselves. A failed load
/// is not stored, so the next `get()` reads the file again.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    schema: DatasetSchema,
    loaded: OnceLock<Arc<Dataset>>,
    load_lock: Mutex<()>,
    loads: AtomicUsize,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>, schema: DatasetSchema) -> Self {
        Self {
            path: path.into(),
            schema,
            loaded: OnceLock::new(),
            load_lock: Mutex::new(()),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn get(&self) -> Result<Arc<Dataset>, VarunError> {
        if let Some(dataset) = self.loaded.get() {
            return Ok(Arc::clone(dataset));
        }

        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = self.load_lock.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(dataset) = self.loaded.get() {
            return Ok(Arc::clone(dataset));
        }

        self.loads.fetch_add(1, Ordering::Relaxed);
        let dataset = Arc::new(load_dataset(&self.path, &self.schema)?);
        Ok(Arc::clone(self.loaded.get_or_init(|| dataset)))
    }

    /// Number of times the file has been read, failed attempts included.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }
}
