use crate::core::{DirEntry, EntryKind, Storage};
use crate::utils::error::{DescriptorError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        if path.is_empty() {
            PathBuf::from(&self.base_path)
        } else {
            Path::new(&self.base_path).join(path)
        }
    }
}

impl Storage for LocalStorage {
    /// One level of `path`, symlinks followed.
    async fn list_entries(&self, path: &str) -> Result<Vec<DirEntry>> {
        let dir = self.resolve(path);
        let entries = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut listed = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    let kind = if file_type.is_dir() {
                        EntryKind::Directory
                    } else if file_type.is_file() {
                        EntryKind::File
                    } else {
                        EntryKind::Other
                    };
                    listed.push(DirEntry {
                        name: entry.file_name().to_string_lossy().into_owned(),
                        kind,
                    });
                }
                // A dangling link inside the folder fails on its own entry.
                Err(e) if e.depth() > 0 && e.path().and_then(Path::file_name).is_some() => {
                    let name = e
                        .path()
                        .and_then(Path::file_name)
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    tracing::debug!("Unresolvable entry '{}': {}", name, e);
                    listed.push(DirEntry {
                        name,
                        kind: EntryKind::Other,
                    });
                }
                Err(e) => {
                    return Err(DescriptorError::ScanError {
                        path: dir.display().to_string(),
                        source: e.into(),
                    });
                }
            }
        }

        Ok(listed)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        fs::write(&full_path, data).map_err(|source| DescriptorError::WriteError {
            path: full_path.display().to_string(),
            source,
        })
    }
}
