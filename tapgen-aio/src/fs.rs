// tapgen-aio/src/fs.rs
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tapgen_common::error::{Result, TapError};
use tempfile::NamedTempFile;
use tracing::{debug, error};

/// Creates a directory and all its parent components if they are missing.
pub fn create_dir_all(path: &Path) -> Result<()> {
    debug!("Creating directory recursively: {}", path.display());
    fs::create_dir_all(path).map_err(|e| {
        error!("Failed create dir {}: {}", path.display(), e);
        TapError::from(e)
    })
}

/// Reads the entire contents of a file into a string.
pub fn read_to_string(path: &Path) -> Result<String> {
    debug!("Reading file to string: {}", path.display());
    fs::read_to_string(path).map_err(|e| {
        error!("Failed read file {}: {}", path.display(), e);
        TapError::from(e)
    })
}

/// Atomically writes data to a file using a temporary file.
///
/// The content lands in a sibling temp file first and is renamed over the
/// target, so a crash mid-write can never leave a half-written file behind.
pub fn atomic_write_file(original_path: &Path, content: &[u8]) -> Result<()> {
    let dir = original_path.parent().ok_or_else(|| {
        TapError::IoError(format!(
            "Cannot get parent directory for {}",
            original_path.display()
        ))
    })?;

    // An empty parent means a bare relative filename in the current directory.
    if !dir.as_os_str().is_empty() {
        create_dir_all(dir)?;
    }

    let mut temp_file = if dir.as_os_str().is_empty() {
        NamedTempFile::new_in(".")?
    } else {
        NamedTempFile::new_in(dir)?
    };
    let temp_path = temp_file.path().to_path_buf();

    debug!(
        "Atomically writing {} bytes to {} via temp file {}",
        content.len(),
        original_path.display(),
        temp_path.display()
    );

    temp_file.write_all(content)?;
    temp_file.flush()?;
    temp_file.as_file().sync_all()?;

    temp_file.persist(original_path).map_err(|e| {
        error!(
            "Failed to persist temporary file {} over {}: {}",
            temp_path.display(),
            original_path.display(),
            e.error
        );
        TapError::Io(Arc::new(e.error))
    })?;

    Ok(())
}

/// Opens an existing file for reading.
pub fn open_file(path: &Path) -> Result<File> {
    debug!("Opening file: {}", path.display());
    File::open(path).map_err(|e| {
        error!("Failed open file {}: {}", path.display(), e);
        TapError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_creates_parents_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/out.txt");

        atomic_write_file(&target, b"payload").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"payload");
    }

    #[test]
    fn atomic_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.txt");

        atomic_write_file(&target, b"old").unwrap();
        atomic_write_file(&target, b"new").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn atomic_write_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.txt");

        atomic_write_file(&target, b"payload").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
