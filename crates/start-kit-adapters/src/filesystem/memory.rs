//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use start_kit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StartKitError, StartKitResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same contents, so a test can hand one clone to the
/// workflow and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories (testing helper).
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        if let Some(parent) = path.parent() {
            inner.add_dir_chain(parent);
        }
        inner.files.insert(path, content.into());
    }

    /// Add an empty directory and its ancestors (testing helper).
    pub fn insert_dir(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_dir_chain(path.as_ref());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn write_lock(&self) -> StartKitResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| StartKitError::Internal {
            message: "memory filesystem lock poisoned".into(),
        })
    }
}

impl MemoryFilesystemInner {
    fn add_dir_chain(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> StartKitResult<()> {
        let mut inner = self.write_lock()?;
        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to remove directory: not found".into(),
            }
            .into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> StartKitResult<String> {
        self.read_file(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to read file: not found".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> StartKitResult<()> {
        let mut inner = self.write_lock()?;

        // Parent must exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
