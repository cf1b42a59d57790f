//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use apiforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ForgeResult,
};

/// In-memory filesystem for testing, with injectable failures so rollback
/// paths can be exercised without touching the disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    fail_create: HashSet<PathBuf>,
    fail_write: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `create_dir_all` on exactly this path fail.
    pub fn fail_create(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().fail_create.insert(path.into());
    }

    /// Make any `write_file` on exactly this path fail.
    pub fn fail_write(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().fail_write.insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All file paths, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut paths: Vec<_> = inner.files.keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.inner.write().unwrap();

        if inner.fail_create.contains(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "injected create failure".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let mut inner = self.inner.write().unwrap();

        if inner.fail_write.contains(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "injected write failure".into(),
            }
            .into());
        }

        // Mirror the real filesystem: writing into a missing directory fails.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.inner.write().unwrap();

        if !inner.directories.contains(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "no such directory".into(),
            }
            .into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_create_registers_every_level() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("svc/pkg/db")).unwrap();
        assert!(fs.exists(Path::new("svc")));
        assert!(fs.exists(Path::new("svc/pkg")));
        assert!(fs.exists(Path::new("svc/pkg/db")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("svc/main.go"), "x").is_err());

        fs.create_dir_all(Path::new("svc")).unwrap();
        assert!(fs.write_file(Path::new("svc/main.go"), "x").is_ok());
        assert_eq!(fs.read_file("svc/main.go").unwrap(), "x");
    }

    #[test]
    fn remove_dir_all_is_recursive() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("svc/utils")).unwrap();
        fs.write_file(Path::new("svc/utils/config.go"), "x").unwrap();

        fs.remove_dir_all(Path::new("svc")).unwrap();
        assert!(!fs.exists(Path::new("svc")));
        assert!(fs.list_files().is_empty());
    }

    #[test]
    fn removing_missing_directory_errors_like_std() {
        let fs = MemoryFilesystem::new();
        assert!(fs.remove_dir_all(Path::new("ghost")).is_err());
    }

    #[test]
    fn injected_failures_fire() {
        let fs = MemoryFilesystem::new();
        fs.fail_create("svc");
        assert!(fs.create_dir_all(Path::new("svc")).is_err());

        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("svc")).unwrap();
        fs.fail_write("svc/app.env");
        assert!(fs.write_file(Path::new("svc/app.env"), "x").is_err());
    }
}
