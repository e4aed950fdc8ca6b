use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Failed to decode image '{label}': {source}")]
    Decode {
        label: String,
        #[source]
        source: image::ImageError,
    },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Resource(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, SheetError>;

/// An encoded bitmap supplied by the caller, plus the label printed above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub label: String,
    pub bytes: Vec<u8>,
}

impl SourceImage {
    /// Build a source image from its original file name; the label is the
    /// name with its final extension removed.
    pub fn new(name: &str, bytes: Vec<u8>) -> Self {
        Self {
            label: label_from_name(name),
            bytes,
        }
    }

    pub fn with_label(label: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            bytes,
        }
    }
}

/// Strip the last extension from a file name (`deck/a.b.png` -> `a.b`).
pub fn label_from_name(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

/// Statistics about a batch before it is composed
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStatistics {
    /// Number of images in the batch
    pub source_images: usize,
    /// Number of output pages
    pub pages: usize,
    /// Grid capacity of one page
    pub cards_per_page: usize,
    /// Cards on the final page (0 when there are no pages)
    pub cards_on_last_page: usize,
    /// Unused grid cells on the final page
    pub empty_slots: usize,
}
