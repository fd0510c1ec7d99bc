//! Attached file metadata.

use serde::{Deserialize, Serialize};

/// One MiB in bytes.
pub const MIB: u64 = 1024 * 1024;

/// A file attached to a form.
///
/// Only the metadata needed for gating is kept; the contents are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    /// Original file name
    pub name: String,
    /// MIME type reported by the client, e.g. `application/pdf`
    #[serde(default)]
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size,
        }
    }

    /// Whether the content type matches an allow-list entry.
    ///
    /// Entries are compared case-insensitively; `type/*` matches any subtype.
    pub fn matches_type(&self, allowed: &str) -> bool {
        let actual = self.content_type.trim().to_ascii_lowercase();
        let allowed = allowed.trim().to_ascii_lowercase();
        match allowed.strip_suffix("/*") {
            Some(major) => actual
                .split_once('/')
                .is_some_and(|(actual_major, _)| actual_major == major),
            None => actual == allowed,
        }
    }
}
