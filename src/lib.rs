//! PDF to Text Library
//!
//! A cross-platform library for extracting plain text from PDF files.
//! This library provides functionality to:
//! - Extract page-delimited text from a PDF into a string or a `.txt` file
//! - Run batch extractions over many PDFs with per-file failure isolation
//! - Extract metadata (page counts, title, author)
//!
//! # Example
//!
//! ```no_run
//! use pdf_totext::pdf::{ExtractOptions, extract_to_file};
//! use std::path::Path;
//!
//! let options = ExtractOptions::default();
//! let pages = extract_to_file(
//!     Path::new("report.pdf"),
//!     Path::new("report.txt"),
//!     &options,
//! ).expect("Failed to extract text");
//! println!("Extracted {} pages", pages);
//! ```

pub mod batch;
pub mod error;
pub mod pdf;

// Re-export commonly used items
pub use error::{Error, Result};
