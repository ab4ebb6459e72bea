//! lessonplan - AI-assisted lesson plan composer
//!
//! A CLI tool that renders a teacher's lesson form into a fixed prompt,
//! sends it to a generative-text service, and exports the returned Markdown
//! as a Word or PDF document.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(dead_code)]

mod cli;
mod form;
mod generation;
mod markdown;
mod preview;
mod prompt;
mod session;

// Export collaborators
mod docx_exporter;
mod export;
mod pdf_exporter;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use export::{A4PdfRenderer, BlockRenderer, DocxRenderer, SnapshotRenderer};
use form::{ExportFormat, FormData};
use generation::{GeminiClient, TextGenerator};
use session::RequestSlot;
use std::path::{Path, PathBuf};

/// Main entry point for the lessonplan CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force } => {
            handle_init_command(path, force)?;
        }

        Commands::Generate {
            form,
            output,
            format,
            snapshot,
            dry_run,
            no_export,
            verbose,
        } => {
            handle_generate_command(form, output, format, snapshot, dry_run, no_export, verbose)?;
        }

        Commands::Export {
            input,
            output,
            format,
            snapshot,
            verbose,
        } => {
            handle_export_command(input, output, format, snapshot, verbose)?;
        }

        Commands::Preview {
            input,
            output,
            verbose,
        } => {
            handle_preview_command(input, output, verbose)?;
        }
    }

    Ok(())
}

/// Initialize logging when verbose output is requested
fn init_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

/// Handle the init command
fn handle_init_command(path: Option<PathBuf>, force: bool) -> Result<()> {
    let target = path.unwrap_or_else(|| PathBuf::from("lesson.toml"));

    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it",
            target.display()
        );
    }

    FormData::default()
        .save(&target)
        .with_context(|| format!("Failed to write form file {}", target.display()))?;

    println!("✓ Created starter form: {}", target.display());
    println!("\nNext steps:");
    println!("  1. Edit the form fields (grade, lesson title, objectives)");
    println!("  2. Put your Gemini key in GEMINI_API_KEY or a .env file");
    println!("  3. Run 'lessonplan generate' to compose the plan");

    Ok(())
}

/// Handle the generate command
fn handle_generate_command(
    form: PathBuf,
    output: PathBuf,
    format: Option<OutputFormat>,
    snapshot: Option<PathBuf>,
    dry_run: bool,
    no_export: bool,
    verbose: bool,
) -> Result<()> {
    init_logging(verbose);

    let form_data = FormData::load(&form)
        .with_context(|| format!("Failed to load lesson form {}", form.display()))?;

    let export_format = resolve_format(format, form_data.export_format);

    // Required fields are checked before the service is contacted
    form_data.validate()?;

    let prompt_text = prompt::compose(&form_data);

    if dry_run {
        print!("{prompt_text}");
        return Ok(());
    }

    println!("Generating lesson plan...");
    println!("Form: {}", form.display());

    let client = GeminiClient::from_env()?;
    let markdown_text = generate_plan(&client, &prompt_text)?;
    println!("✓ Received {} characters from the service", markdown_text.len());

    std::fs::create_dir_all(&output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let stem = export::safe_file_stem(&form_data.lesson_title);
    let markdown_path = output.join(format!("{stem}.md"));
    std::fs::write(&markdown_path, &markdown_text)
        .with_context(|| format!("Failed to write {}", markdown_path.display()))?;
    println!("✓ Saved markdown: {}", markdown_path.display());

    if no_export {
        return Ok(());
    }

    let artifact_path = output.join(format!("{}.{}", stem, export_format.extension()));
    export_document(
        &markdown_text,
        export_format,
        snapshot.as_deref(),
        &form_data.lesson_title,
        &artifact_path,
        &DocxRenderer,
        &A4PdfRenderer,
    )?;
    println!("✓ Successfully wrote: {}", artifact_path.display());

    Ok(())
}

/// Handle the export command
fn handle_export_command(
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    snapshot: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    init_logging(verbose);

    let markdown_text = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let export_format = resolve_format(Some(format), ExportFormat::Docx);
    let artifact_path =
        output.unwrap_or_else(|| input.with_extension(export_format.extension()));
    let title = file_stem_or_default(&input);

    export_document(
        &markdown_text,
        export_format,
        snapshot.as_deref(),
        &title,
        &artifact_path,
        &DocxRenderer,
        &A4PdfRenderer,
    )?;
    println!("✓ Successfully wrote: {}", artifact_path.display());

    Ok(())
}

/// Handle the preview command
fn handle_preview_command(
    input: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    init_logging(verbose);

    let markdown_text = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let preview_path = output.unwrap_or_else(|| input.with_extension("html"));
    let title = file_stem_or_default(&input);
    let page = preview::to_page(&title, &markdown_text);

    std::fs::write(&preview_path, page)
        .with_context(|| format!("Failed to write {}", preview_path.display()))?;
    println!("✓ Preview written: {}", preview_path.display());

    Ok(())
}

/// Pick the effective export format: CLI override wins over the form
fn resolve_format(cli_format: Option<OutputFormat>, form_format: ExportFormat) -> ExportFormat {
    match cli_format {
        Some(OutputFormat::Docx) => ExportFormat::Docx,
        Some(OutputFormat::Pdf) => ExportFormat::Pdf,
        None => form_format,
    }
}

/// Run the generation request through the single-slot gate
fn generate_plan(client: &dyn TextGenerator, prompt_text: &str) -> Result<String> {
    let mut slot = RequestSlot::new();
    let guard = slot.begin()?;
    let markdown_text = client.generate(prompt_text)?;
    guard.succeed();
    Ok(markdown_text)
}

/// Convert the markdown result into the requested artifact.
///
/// The renderers are passed in rather than looked up, so the conversion can
/// be exercised with stubs and no document library present.
fn export_document(
    markdown_text: &str,
    format: ExportFormat,
    snapshot: Option<&Path>,
    title: &str,
    output: &Path,
    block_renderer: &dyn BlockRenderer,
    snapshot_renderer: &dyn SnapshotRenderer,
) -> Result<()> {
    let mut slot = RequestSlot::new();
    let guard = slot.begin()?;

    match format {
        ExportFormat::Docx => {
            let document = markdown::build(markdown_text);
            log::info!("parsed {} blocks for export", document.len());
            block_renderer
                .render(&document, output)
                .with_context(|| format!("Failed to export DOCX to {}", output.display()))?;
        }
        ExportFormat::Pdf => {
            let snapshot_path = snapshot.ok_or_else(|| {
                anyhow::anyhow!(
                    "PDF export embeds a capture of the rendered preview. Pass --snapshot <image>"
                )
            })?;
            let capture = std::fs::read(snapshot_path)
                .with_context(|| format!("Failed to read capture {}", snapshot_path.display()))?;
            snapshot_renderer
                .render(&capture, title, output)
                .with_context(|| format!("Failed to export PDF to {}", output.display()))?;
        }
    }

    guard.succeed();
    Ok(())
}

/// File stem of `path`, falling back to the default lesson stem
fn file_stem_or_default(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(export::DEFAULT_FILE_STEM)
        .to_string()
}
