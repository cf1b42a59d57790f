//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use apiforge_core::{application::ports::Filesystem, error::ForgeResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> apiforge_core::error::ForgeError {
    apiforge_core::application::ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_remove_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let dir = tmp.path().join("svc/pkg/db");
        fs.create_dir_all(&dir).unwrap();
        assert!(fs.exists(&dir));

        let file = dir.join("connection.go");
        fs.write_file(&file, "package db\n").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "package db\n");

        fs.remove_dir_all(&tmp.path().join("svc")).unwrap();
        assert!(!fs.exists(&file));
    }

    #[test]
    fn removing_missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        // The rollback handler relies on this being an Err it can log.
        assert!(fs.remove_dir_all(&tmp.path().join("never-created")).is_err());
    }
}
