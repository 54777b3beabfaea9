// tapgen-aio/src/json_io.rs
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tapgen_common::error::{Result, TapError};
use tracing::debug;

/// Writes serializable data to a JSON file, pretty-printed and atomic.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    debug!("Writing JSON to: {}", path.display());
    let json_bytes = match serde_json::to_vec_pretty(data) {
        Ok(bytes) => bytes,
        Err(e) => return Err(TapError::Json(Arc::new(e))),
    };
    crate::fs::atomic_write_file(path, &json_bytes)
}

/// Reads and deserializes data from a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading JSON from: {}", path.display());
    let file = crate::fs::open_file(path)?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| TapError::Json(Arc::new(e)))
}
