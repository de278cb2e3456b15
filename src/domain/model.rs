use serde::{Deserialize, Serialize};

/// One object for the tablesalt importer.
///
/// Field order is the serialized key order; unset optional fields are left
/// out of the JSON instead of being written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub front_img: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_img: Option<String>,
}

impl Descriptor {
    pub fn top_level(file_name: &str) -> Self {
        Self {
            front_img: file_name.to_string(),
            group_label: None,
            back_img: None,
        }
    }

    /// `front_img` is always `/`-joined regardless of platform, since the
    /// importer resolves it as a URL path.
    pub fn grouped(group: &str, file_name: &str) -> Self {
        Self {
            front_img: format!("{}/{}", group, file_name),
            group_label: Some(group.to_string()),
            back_img: None,
        }
    }
}

/// Output of back-image detection: the final descriptors plus the path that
/// was pulled out as the shared back image, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorSet {
    pub descriptors: Vec<Descriptor>,
    pub back_image: Option<String>,
}

/// Where the manifest belongs and whether this run actually wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub output_path: String,
    pub written: bool,
}

/// How a descriptor is recognised as the shared card back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum BackImageRule {
    /// `frontImg` contains `back.`, so `red/back.png` matches but
    /// `backpack.png` does not.
    #[default]
    Infix,
    /// `frontImg` starts with `back`. Only top-level files can match.
    Prefix,
    /// No back-image detection.
    #[serde(rename = "none")]
    #[cfg_attr(feature = "cli", value(name = "none"))]
    Disabled,
}

impl BackImageRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackImageRule::Infix => "infix",
            BackImageRule::Prefix => "prefix",
            BackImageRule::Disabled => "none",
        }
    }
}

impl std::fmt::Display for BackImageRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Sockets, broken symlinks and anything else that is neither.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn dir(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: EntryKind::File,
        }
    }
}
