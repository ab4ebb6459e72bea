//! Command-line interface definitions for lessonplan

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the export step
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Microsoft Word DOCX built from the parsed block sequence
    Docx,
    /// A4 PDF built from a rasterized preview capture
    Pdf,
}

/// CLI structure for the lessonplan application
#[derive(Parser)]
#[command(name = "lessonplan")]
#[command(version)]
#[command(about = "Lesson plan composer for lower-secondary informatics", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for lessonplan
#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter lesson.toml form
    Init {
        /// Target form file (defaults to ./lesson.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Compose the prompt, call the generation service, and export
    Generate {
        /// Lesson form file
        #[arg(short = 'f', long, default_value = "lesson.toml")]
        form: PathBuf,

        /// Directory for the markdown result and the exported document
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Override the form's export format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Preview capture image (PNG/JPEG), required for PDF export
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Print the composed prompt instead of calling the service
        #[arg(long)]
        dry_run: bool,

        /// Keep only the markdown result, skip document export
        #[arg(long)]
        no_export: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Export an existing markdown lesson plan
    Export {
        /// Markdown file to export
        input: PathBuf,

        /// Output file path (defaults to the input with the format extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "docx")]
        format: OutputFormat,

        /// Preview capture image (PNG/JPEG), required for PDF export
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render the HTML preview of a markdown lesson plan
    Preview {
        /// Markdown file to render
        input: PathBuf,

        /// Output file path (defaults to the input with .html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}
