//! PDF text extraction using lopdf

use std::fs;
use std::path::Path;

use lopdf::Document;

use crate::error::{Error, Result};

/// Options controlling text extraction
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Insert a `--- Page N ---` marker before each page's text
    pub page_markers: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { page_markers: true }
    }
}

/// Text extracted from a single PDF
#[derive(Debug, Clone)]
pub struct ExtractedText {
    /// Concatenated text of all pages, in page order
    pub text: String,
    /// Number of pages in the document
    pub page_count: usize,
}

/// Extract the text of every page in a PDF, in page order
///
/// Pages are extracted one at a time so the output can be delimited with
/// page markers. An error extracting any page fails the whole document;
/// no partial result is returned.
///
/// # Example
///
/// ```no_run
/// use pdf_totext::pdf::{ExtractOptions, extract_text};
/// use std::path::Path;
///
/// let extracted = extract_text(Path::new("report.pdf"), &ExtractOptions::default())
///     .expect("Failed to extract");
/// println!("{} pages", extracted.page_count);
/// ```
pub fn extract_text(path: &Path, options: &ExtractOptions) -> Result<ExtractedText> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    // get_pages() keys are 1-based page numbers; sort for a stable order
    let mut page_numbers: Vec<u32> = pages.keys().copied().collect();
    page_numbers.sort_unstable();

    let mut text = String::new();
    for (index, page_number) in page_numbers.iter().enumerate() {
        if options.page_markers {
            text.push_str(&format!("\n--- Page {} ---\n", index + 1));
        }
        text.push_str(&doc.extract_text(&[*page_number])?);
    }

    Ok(ExtractedText {
        text,
        page_count: page_numbers.len(),
    })
}

/// Extract a PDF's text and write it to a file, returning the page count
///
/// The output file is written only after the whole document has been
/// extracted, so a failed extraction leaves no output behind.
pub fn extract_to_file(input: &Path, output: &Path, options: &ExtractOptions) -> Result<usize> {
    let extracted = extract_text(input, options)?;
    fs::write(output, extracted.text.as_bytes())?;
    Ok(extracted.page_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_nonexistent_file() {
        let result = extract_text(Path::new("nonexistent.pdf"), &ExtractOptions::default());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }

    #[test]
    fn test_extract_to_file_leaves_no_output_on_failure() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let output = temp_dir.path().join("missing.txt");

        let result = extract_to_file(
            Path::new("nonexistent.pdf"),
            &output,
            &ExtractOptions::default(),
        );

        assert!(result.is_err());
        assert!(!output.exists(), "No output file should be created on failure");
    }

    #[test]
    fn test_default_options_enable_markers() {
        assert!(ExtractOptions::default().page_markers);
    }

    // Extraction against real documents is covered in tests/integration.rs
}
