//! Block-level elements of a parsed lesson plan
//!
//! This module defines the structured representation of the generated
//! Markdown at the block level (headings, paragraphs, bullet items,
//! two-column tables, blank lines).

use super::inline::InlineRun;

/// Block-level element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A heading with level and formatted runs
    Heading {
        /// Heading level (1 = h1, 2 = h2, 3 = h3)
        level: u8,
        /// Formatted runs comprising the heading content
        runs: Vec<InlineRun>,
    },

    /// A paragraph of formatted runs
    Paragraph(Vec<InlineRun>),

    /// A single-level bulleted item
    BulletItem(Vec<InlineRun>),

    /// A table aggregated from one contiguous run of `| ... |` source lines
    Table(Vec<TableRow>),

    /// An empty source line, preserved so export keeps vertical spacing
    BlankLine,
}

/// One table row: an ordered sequence of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Cells in source order
    pub cells: Vec<TableCell>,
}

/// One table cell
///
/// Cell content may carry explicit `<br>` line breaks; each sub-line becomes
/// its own paragraph of runs so the exporters can stack them vertically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    /// One paragraph of runs per `<br>`-separated sub-line
    pub paragraphs: Vec<Vec<InlineRun>>,
}
