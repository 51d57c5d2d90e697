//! PDF parsing module

pub mod extract;
pub mod metadata;

// Re-export commonly used items
pub use extract::{extract_text, extract_to_file, ExtractOptions, ExtractedText};
pub use metadata::{count_pages, extract_metadata, PdfMetadata};
