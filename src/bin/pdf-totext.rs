//! PDF to Text CLI tool
//!
//! A command-line tool for extracting plain text from PDF files.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use pdf_totext::batch::{expand_inputs, run_batch, BatchOptions, Outcome};
use pdf_totext::pdf::ExtractOptions;

/// PDF to Text - Extract page-delimited text from PDF files
#[derive(Parser)]
#[command(name = "pdf-totext")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Extract every PDF in the current directory
    pdf-totext extract -o extracted \"*.pdf\"

    # Extract specific files, in order
    pdf-totext extract -o extracted Dev_SRS.pdf Dev_ClassDiagram.pdf

    # Extract without page markers
    pdf-totext extract -o extracted --no-page-markers report.pdf

    # Show page count and metadata
    pdf-totext info report.pdf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from PDF files into an output directory
    Extract {
        /// Input PDF files (in order). Supports glob patterns like "*.pdf"
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output directory for the `.txt` files (created if missing)
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Do not insert "--- Page N ---" markers between pages
        #[arg(long)]
        no_page_markers: bool,
    },

    /// Show information about a PDF file
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            inputs,
            output_dir,
            no_page_markers,
        } => cmd_extract(inputs, output_dir, no_page_markers),
        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Extract text from each input, continuing past per-file failures
fn cmd_extract(inputs: Vec<String>, output_dir: PathBuf, no_page_markers: bool) -> Result<()> {
    // Expand glob patterns
    let inputs = expand_inputs(&inputs)?;

    eprintln!("Extracting text from {} PDF files...", inputs.len());

    let options = BatchOptions {
        inputs,
        output_dir,
        extract: ExtractOptions {
            page_markers: !no_page_markers,
        },
    };

    let report = run_batch(&options)?;

    for file in &report.files {
        match &file.outcome {
            Outcome::Extracted { page_count, .. } => {
                println!(
                    "✓ Extracted: {} ({} pages)",
                    file.input.display(),
                    page_count
                );
            }
            Outcome::Failed { message } => {
                println!("✗ Error with {}: {}", file.input.display(), message);
            }
        }
    }

    println!(
        "\nExtraction complete! ({} ok, {} failed)",
        report.succeeded(),
        report.failed()
    );

    if report.succeeded() == 0 && report.failed() > 0 {
        bail!("No files were extracted successfully");
    }

    Ok(())
}

/// Show information about a PDF
fn cmd_info(input: PathBuf) -> Result<()> {
    if !input.exists() {
        bail!("Input file not found: {}", input.display());
    }

    let metadata = pdf_totext::pdf::extract_metadata(&input)?;

    println!("File: {}", input.display());
    println!("Pages: {}", metadata.page_count);

    if let Some(title) = metadata.title {
        println!("Title: {}", title);
    }
    if let Some(author) = metadata.author {
        println!("Author: {}", author);
    }

    Ok(())
}
