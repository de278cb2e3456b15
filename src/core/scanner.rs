use crate::core::{Descriptor, DirEntry, EntryKind, Storage};
use crate::utils::error::Result;

/// Decides which file names become descriptors.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    exclude_extensions: Vec<String>,
    output_file: Option<String>,
}

impl EntryFilter {
    pub fn new(exclude_extensions: &[String]) -> Self {
        Self {
            exclude_extensions: exclude_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            output_file: None,
        }
    }

    /// The generated manifest sits in the scanned folder and must never be
    /// listed as an image, whatever the extension list says.
    pub fn with_output_file(mut self, name: &str) -> Self {
        self.output_file = Some(name.to_string());
        self
    }

    pub fn accepts_top_level(&self, name: &str) -> bool {
        self.output_file.as_deref() != Some(name) && self.accepts(name)
    }

    /// Hidden files never qualify, whatever the extension list says.
    pub fn accepts(&self, name: &str) -> bool {
        if name.is_empty() || name.starts_with('.') {
            return false;
        }

        match std::path::Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) => !self
                .exclude_extensions
                .iter()
                .any(|excluded| excluded.eq_ignore_ascii_case(ext)),
            None => true,
        }
    }
}

/// Lists `path` sorted by name and split into (directories, files).
async fn list_sorted<S: Storage>(storage: &S, path: &str) -> Result<(Vec<String>, Vec<String>)> {
    let mut entries = storage.list_entries(path).await?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for DirEntry { name, kind } in entries {
        match kind {
            EntryKind::Directory => dirs.push(name),
            EntryKind::File => files.push(name),
            EntryKind::Other => {
                tracing::warn!("Skipping '{}/{}': neither a file nor a directory", path, name);
            }
        }
    }

    Ok((dirs, files))
}

/// Builds the descriptor set for the asset folder behind `storage`.
///
/// Every non-hidden subdirectory is a group and contributes its own files
/// (one level only); top-level files follow after all groups.
pub async fn scan_descriptors<S: Storage>(
    storage: &S,
    filter: &EntryFilter,
) -> Result<Vec<Descriptor>> {
    let (groups, root_files) = list_sorted(storage, "").await?;
    let mut descriptors = Vec::new();

    for group in &groups {
        if group.starts_with('.') {
            tracing::debug!("Skipping hidden folder '{}'", group);
            continue;
        }

        let (nested, files) = list_sorted(storage, group).await?;
        if !nested.is_empty() {
            tracing::debug!(
                "Ignoring {} nested folder(s) in group '{}'",
                nested.len(),
                group
            );
        }

        let before = descriptors.len();
        for file in files {
            if filter.accepts(&file) {
                descriptors.push(Descriptor::grouped(group, &file));
            } else {
                tracing::debug!("Excluded '{}/{}'", group, file);
            }
        }
        tracing::debug!("Group '{}': {} image(s)", group, descriptors.len() - before);
    }

    for file in root_files {
        if filter.accepts_top_level(&file) {
            descriptors.push(Descriptor::top_level(&file));
        } else {
            tracing::debug!("Excluded '{}'", file);
        }
    }

    Ok(descriptors)
}
