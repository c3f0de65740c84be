//! File kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use opshub_core::AppError;

/// Broad kind of a library file, used for the card icon and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// Word-processor style document.
    Document,
    /// Portable document.
    #[serde(rename = "PDF")]
    Pdf,
    /// Raster or vector image.
    Image,
    /// Tabular data workbook.
    Spreadsheet,
}

impl FileKind {
    /// Return the kind as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Pdf => "PDF",
            Self::Image => "Image",
            Self::Spreadsheet => "Spreadsheet",
        }
    }
}

impl Default for FileKind {
    fn default() -> Self {
        Self::Document
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" => Ok(Self::Document),
            "pdf" => Ok(Self::Pdf),
            "image" => Ok(Self::Image),
            "spreadsheet" => Ok(Self::Spreadsheet),
            _ => Err(AppError::validation(format!(
                "Invalid file kind: '{s}'. Expected one of: Document, PDF, Image, Spreadsheet"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("pdf".parse::<FileKind>().unwrap(), FileKind::Pdf);
        assert_eq!("Document".parse::<FileKind>().unwrap(), FileKind::Document);
        assert!("video".parse::<FileKind>().is_err());
    }

    #[test]
    fn test_pdf_serializes_uppercase() {
        let json = serde_json::to_string(&FileKind::Pdf).unwrap();
        assert_eq!(json, "\"PDF\"");
        let parsed: FileKind = serde_json::from_str("\"PDF\"").unwrap();
        assert_eq!(parsed, FileKind::Pdf);
    }

    #[test]
    fn test_default_is_document() {
        assert_eq!(FileKind::default(), FileKind::Document);
    }
}
