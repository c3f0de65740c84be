//! Library file entity model.

use serde::{Deserialize, Serialize};

use opshub_core::types::{Categorized, FileId, Keyed, Searchable};

use super::kind::FileKind;

/// A file shared through the library.
///
/// No file content exists anywhere: records carry display metadata only,
/// and `size` is a display string rather than a byte count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Unique file identifier, immutable once assigned.
    pub id: FileId,
    /// File name including extension.
    pub name: String,
    /// Broad kind of the file.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Human-readable size, e.g. "2.4 MB".
    pub size: String,
    /// Who uploaded the file.
    pub uploaded_by: String,
    /// Upload date (free-text date).
    pub upload_date: String,
    /// Library category; the selector's option list is derived from the
    /// values observed in the store.
    pub category: String,
    /// Search tags.
    pub tags: Vec<String>,
}

impl Keyed for StoredFile {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Searchable for StoredFile {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn labels(&self) -> &[String] {
        &self.tags
    }
}

impl Categorized for StoredFile {
    fn category(&self) -> &str {
        &self.category
    }
}
