//! PDF metadata extraction

use std::path::Path;

use lopdf::{Dictionary, Document, Object};

use crate::error::{Error, Result};

/// Count pages by reading the Count field from the Pages dictionary
/// This is more reliable than get_pages() which doesn't handle nested page trees
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| Error::General("No catalog reference in trailer".to_string()))?;

    let catalog = doc.get_object(catalog_id)?.as_dict()?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|_| Error::General("No Pages reference in catalog".to_string()))?;

    let pages = doc.get_object(pages_id)?.as_dict()?;

    let count = pages
        .get(b"Count")
        .and_then(Object::as_i64)
        .map_err(|_| Error::General("No Count in Pages dictionary".to_string()))?;

    Ok(count as usize)
}

/// Read a string entry from the document Info dictionary
fn info_string(info: &Dictionary, key: &[u8]) -> Option<String> {
    let bytes = info.get(key).ok()?.as_str().ok()?;
    String::from_utf8(bytes.to_vec()).ok()
}

/// PDF metadata
#[derive(Debug, Clone)]
pub struct PdfMetadata {
    /// Number of pages in the PDF
    pub page_count: usize,
    /// Document title (if present)
    pub title: Option<String>,
    /// Document author (if present)
    pub author: Option<String>,
}

/// Extract metadata from a PDF file
pub fn extract_metadata(path: &Path) -> Result<PdfMetadata> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;

    // Use catalog-based counting for accuracy
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    // Title and author live in the optional Info dictionary
    let mut title = None;
    let mut author = None;

    if let Ok(info_id) = doc.trailer.get(b"Info").and_then(Object::as_reference) {
        if let Ok(info) = doc.get_object(info_id).and_then(Object::as_dict) {
            title = info_string(info, b"Title");
            author = info_string(info, b"Author");
        }
    }

    Ok(PdfMetadata {
        page_count,
        title,
        author,
    })
}

/// Count the number of pages in a PDF file
///
/// This is a quick operation that reads the Count field from the Pages dictionary.
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(page_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::StringFormat;

    #[test]
    fn test_missing_file_error_names_path() {
        let err = count_pages(Path::new("no_such_doc.pdf")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert!(
            err.to_string().contains("no_such_doc.pdf"),
            "Error should name the missing file: {}",
            err
        );

        let err = extract_metadata(Path::new("no_such_doc.pdf")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_info_string_reads_literal_strings() {
        let mut info = Dictionary::new();
        info.set("Title", Object::string_literal("Booking Guide"));

        assert_eq!(info_string(&info, b"Title"), Some("Booking Guide".to_string()));
        assert_eq!(info_string(&info, b"Author"), None);
    }

    #[test]
    fn test_info_string_rejects_non_utf8() {
        let mut info = Dictionary::new();
        info.set("Title", Object::String(vec![0xC0, 0xFF], StringFormat::Literal));

        assert_eq!(info_string(&info, b"Title"), None);
    }

    // Parsing real documents is covered in tests/ directory
}
