//! Batch extraction over many PDFs with per-file failure isolation

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::error::{Error, Result};
use crate::pdf::{extract_to_file, ExtractOptions};

/// Options for a batch extraction run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Input PDF file paths, processed in order
    pub inputs: Vec<PathBuf>,
    /// Directory where `.txt` outputs are written (created if missing)
    pub output_dir: PathBuf,
    /// Per-file extraction options
    pub extract: ExtractOptions,
}

/// Result of processing one input file
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Extraction succeeded and the output file was written
    Extracted {
        /// Path of the written `.txt` file
        output: PathBuf,
        /// Number of pages extracted
        page_count: usize,
    },
    /// Extraction failed; no output file was written
    Failed {
        /// Error message for this file
        message: String,
    },
}

/// Per-file report entry, in input order
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The input PDF path
    pub input: PathBuf,
    /// What happened to it
    pub outcome: Outcome,
}

/// Report for a whole batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One entry per input, in input order
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// Number of files extracted successfully
    pub fn succeeded(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, Outcome::Extracted { .. }))
            .count()
    }

    /// Number of files that failed
    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }
}

/// Derive the output path for an input PDF: `<output_dir>/<stem>.txt`
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".txt");
    output_dir.join(name)
}

/// Extract text from every input PDF into the output directory
///
/// Each file is processed independently: an error opening, parsing, or
/// writing one file is recorded in the report and the run continues with
/// the next file. The run itself only fails when the output directory
/// cannot be created.
///
/// # Example
///
/// ```no_run
/// use pdf_totext::batch::{run_batch, BatchOptions};
/// use pdf_totext::pdf::ExtractOptions;
/// use std::path::PathBuf;
///
/// let options = BatchOptions {
///     inputs: vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
///     output_dir: PathBuf::from("extracted"),
///     extract: ExtractOptions::default(),
/// };
///
/// let report = run_batch(&options).expect("Failed to run batch");
/// println!("{} ok, {} failed", report.succeeded(), report.failed());
/// ```
pub fn run_batch(options: &BatchOptions) -> Result<BatchReport> {
    fs::create_dir_all(&options.output_dir)
        .map_err(|e| Error::OutputDir(options.output_dir.clone(), e))?;

    let mut report = BatchReport::default();

    for input in &options.inputs {
        let output = output_path_for(input, &options.output_dir);

        let outcome = match extract_to_file(input, &output, &options.extract) {
            Ok(page_count) => Outcome::Extracted { output, page_count },
            Err(e) => Outcome::Failed {
                message: e.to_string(),
            },
        };

        report.files.push(FileReport {
            input: input.clone(),
            outcome,
        });
    }

    Ok(report)
}

/// Expand glob patterns in input arguments into sorted paths
///
/// Arguments without glob characters are treated as literal paths. A
/// pattern matching no files is an error. Note that any argument
/// containing `*`, `?`, or `[` is taken as a pattern, so a literal
/// filename like `report[1].pdf` must be spelled with the bracket
/// escaped (`report[[]1].pdf`).
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let entries =
                glob(pattern).map_err(|e| Error::InvalidGlob(format!("{}: {}", pattern, e)))?;

            let mut matched = false;
            for entry in entries {
                match entry {
                    Ok(path) => {
                        paths.push(path);
                        matched = true;
                    }
                    Err(e) => eprintln!("Warning: glob error for {}: {}", pattern, e),
                }
            }
            if !matched {
                return Err(Error::NoFilesMatched(pattern.clone()));
            }
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }

    // Sort paths for consistent ordering
    paths.sort();

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_path_naming() {
        let out = output_path_for(Path::new("docs/Dev_SRS.pdf"), Path::new("extracted"));
        assert_eq!(out, Path::new("extracted/Dev_SRS.txt"));
    }

    #[test]
    fn test_output_path_without_pdf_extension() {
        let out = output_path_for(Path::new("notes.data"), Path::new("out"));
        assert_eq!(out, Path::new("out/notes.txt"));
    }

    #[test]
    fn test_batch_records_failures_without_aborting() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let options = BatchOptions {
            inputs: vec![
                PathBuf::from("missing_one.pdf"),
                PathBuf::from("missing_two.pdf"),
            ],
            output_dir: temp_dir.path().join("extracted"),
            extract: ExtractOptions::default(),
        };

        let report = run_batch(&options).expect("Batch should not abort on bad files");

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.succeeded(), 0);
        assert_eq!(report.failed(), 2);

        for file in &report.files {
            match &file.outcome {
                Outcome::Failed { message } => {
                    assert!(
                        message.contains("not found") || message.contains("missing"),
                        "Error should mention the missing file: {}",
                        message
                    );
                }
                Outcome::Extracted { .. } => panic!("Missing file should not extract"),
            }
        }

        // Output directory is created even when every file fails
        assert!(options.output_dir.exists());
    }

    #[test]
    fn test_expand_inputs_literal_paths() {
        let inputs = vec!["b.pdf".to_string(), "a.pdf".to_string()];
        let paths = expand_inputs(&inputs).expect("Literal paths should pass through");
        assert_eq!(paths, vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]);
    }

    #[test]
    fn test_expand_inputs_unmatched_pattern() {
        let inputs = vec!["no_such_dir_xyz/*.pdf".to_string()];
        let result = expand_inputs(&inputs);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::NoFilesMatched(_)));
    }
}
