//! Word export using the docx-rs library
//!
//! Maps the parsed block sequence onto docx-rs structures: heading styles
//! with level-specific spacing, bulleted paragraphs, full-width tables with
//! multi-paragraph cells, and empty paragraphs for blank source lines so the
//! exported document keeps the preview's vertical rhythm.

use crate::export::ExportError;
use crate::markdown::{Block, Document, InlineRun, TableRow as ModelRow};
use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing,
    NumberFormat, Numbering, NumberingId, Paragraph, Run, SpecialIndentType, Start, Style,
    StyleType, Table, TableCell, TableRow, WidthType,
};
use std::path::Path;

/// Numbering definition shared by every bullet item
const BULLET_NUMBERING: usize = 2;

/// Full table width in fiftieths of a percent (pct units)
const TABLE_FULL_WIDTH_PCT: usize = 5000;

/// Heading style per level: (style id, size in half-points, centered,
/// spacing before, spacing after) — spacing in twentieths of a point
const HEADING_STYLES: [(&str, usize, bool, u32, u32); 3] = [
    ("Heading1", 32, true, 300, 150),
    ("Heading2", 28, false, 240, 120),
    ("Heading3", 26, false, 200, 100),
];

/// Export the parsed lesson plan to a .docx file
pub fn to_docx(document: &Document, output_path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    log::info!(
        "creating DOCX with {} blocks: {}",
        document.len(),
        output_path.display()
    );

    let docx = build_docx(document);

    let file = std::fs::File::create(output_path)?;
    docx.pack(file)
        .map_err(|e| ExportError::Docx(format!("failed to write DOCX: {}", e)))?;

    Ok(())
}

/// Assemble the in-memory document; separated from [`to_docx`] so tests can
/// build without touching the filesystem
pub fn build_docx(document: &Document) -> docx_rs::XMLDocx {
    let mut docx = add_heading_styles(Docx::new());
    docx = add_bullet_numbering(docx);

    for block in &document.blocks {
        docx = append_block(docx, block);
    }

    docx.build()
}

/// Register Heading1-3 paragraph styles
fn add_heading_styles(mut docx: Docx) -> Docx {
    for (style_id, size, _, _, _) in HEADING_STYLES {
        let style = Style::new(style_id, StyleType::Paragraph)
            .name(style_id)
            .bold()
            .size(size * 2);
        docx = docx.add_style(style);
    }
    docx
}

/// Register the single-level bullet numbering definition
fn add_bullet_numbering(docx: Docx) -> Docx {
    docx.add_abstract_numbering(
        AbstractNumbering::new(BULLET_NUMBERING).add_level(
            Level::new(
                0,
                Start::new(1),
                NumberFormat::new("bullet"),
                LevelText::new("•"),
                LevelJc::new("left"),
            )
            .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
        ),
    )
    .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
}

/// Append one block to the document
fn append_block(docx: Docx, block: &Block) -> Docx {
    match block {
        Block::Heading { level, runs } => docx.add_paragraph(heading_paragraph(*level, runs)),
        Block::Paragraph(runs) => docx.add_paragraph(create_paragraph(runs)),
        Block::BulletItem(runs) => docx.add_paragraph(
            create_paragraph(runs)
                .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0)),
        ),
        Block::Table(rows) => docx.add_table(create_table(rows)),
        Block::BlankLine => docx.add_paragraph(Paragraph::new()),
    }
}

/// Build a heading paragraph with the level's style, alignment, and spacing
fn heading_paragraph(level: u8, runs: &[InlineRun]) -> Paragraph {
    let index = usize::from(level.clamp(1, 3)) - 1;
    let (style_id, _, centered, before, after) = HEADING_STYLES[index];

    let mut para = create_paragraph(runs)
        .style(style_id)
        .line_spacing(LineSpacing::new().before(before).after(after));
    if centered {
        para = para.align(AlignmentType::Center);
    }
    para
}

/// Create a paragraph from formatted runs
fn create_paragraph(runs: &[InlineRun]) -> Paragraph {
    let mut para = Paragraph::new();
    for run in runs {
        para = para.add_run(create_run(run));
    }
    para
}

/// Create a docx run from one inline run
fn create_run(run: &InlineRun) -> Run {
    let mut docx_run = Run::new().add_text(&run.text);
    if run.bold {
        docx_run = docx_run.bold();
    }
    docx_run
}

/// Create a full-width table, one cell per model cell
fn create_table(rows: &[ModelRow]) -> Table {
    let table_rows: Vec<TableRow> = rows
        .iter()
        .map(|row| {
            let cells: Vec<TableCell> = row.cells.iter().map(create_cell).collect();
            TableRow::new(cells)
        })
        .collect();

    Table::new(table_rows).width(TABLE_FULL_WIDTH_PCT, WidthType::Pct)
}

/// Create a table cell, one paragraph per `<br>`-separated sub-line
fn create_cell(cell: &crate::markdown::TableCell) -> TableCell {
    let mut docx_cell = TableCell::new();

    if cell.paragraphs.is_empty() {
        // Word requires at least one paragraph per cell
        return docx_cell.add_paragraph(Paragraph::new());
    }

    for runs in &cell.paragraphs {
        docx_cell = docx_cell.add_paragraph(create_paragraph(runs));
    }
    docx_cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::build;

    #[test]
    fn test_build_docx_handles_every_block_kind() {
        // Arrange: a document exercising all five block kinds
        let doc = build(
            "# TIÊU ĐỀ\n\n* một\n| a<br>b | **c** |\n| :--- | :--- |\nđoạn văn\n",
        );

        // Act: assembling must not panic and must keep all blocks
        let _docx = build_docx(&doc);

        // Assert on the source document shape that fed the export
        assert_eq!(doc.len(), 5);
    }

    #[test]
    fn test_heading_paragraph_levels_are_clamped() {
        // Levels outside 1-3 never come from the classifier, but the style
        // lookup must stay in bounds anyway
        let runs = vec![InlineRun::plain("x")];
        let _ = heading_paragraph(0, &runs);
        let _ = heading_paragraph(9, &runs);
    }

    #[test]
    fn test_to_docx_writes_a_zip_container() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("plan.docx");
        let doc = build("# TIÊU ĐỀ\n\nđoạn văn **đậm**\n| a | b |\n| :--- | :--- |\n");

        // Act
        to_docx(&doc, &output).unwrap();

        // Assert: a non-empty OOXML (zip) file was produced
        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.len() > 2);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_to_docx_accepts_an_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("empty.docx");

        to_docx(&Document::default(), &output).unwrap();

        assert!(output.exists());
    }
}
