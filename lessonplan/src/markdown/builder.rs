//! Document assembly
//!
//! Drives line classification over the full generated text and emits the
//! ordered block sequence. All accumulation state is local to one `build`
//! call, so identical input always yields an identical document.

use super::blocks::Block;
use super::classifier::{classify, LineClass};
use super::inline::parse_inline;
use super::table::TableAccumulator;

/// The parsed lesson plan: an ordered block sequence
///
/// Constructed once per generation result and treated as immutable by the
/// exporters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Blocks in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document has no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Convert raw generated Markdown into an ordered block sequence.
///
/// Lines are visited in source order. Table-row lines accumulate; any other
/// line flushes the pending table first, so table rows from non-contiguous
/// regions never merge. Blank lines become [`Block::BlankLine`] so export
/// preserves vertical spacing. A final flush runs at end of input.
pub fn build(raw: &str) -> Document {
    let mut blocks = Vec::new();
    let mut table = TableAccumulator::new();

    for line in raw.lines() {
        match classify(line) {
            LineClass::TableRow => table.push_row(line),
            LineClass::TableSeparator => {
                // Alignment rows are dropped without ending the table run
            }
            LineClass::Heading { level, text } => {
                flush_table(&mut table, &mut blocks);
                blocks.push(Block::Heading {
                    level,
                    runs: parse_inline(text),
                });
            }
            LineClass::Bullet { text } => {
                flush_table(&mut table, &mut blocks);
                blocks.push(Block::BulletItem(parse_inline(text)));
            }
            LineClass::Blank => {
                flush_table(&mut table, &mut blocks);
                blocks.push(Block::BlankLine);
            }
            LineClass::Paragraph => {
                flush_table(&mut table, &mut blocks);
                blocks.push(Block::Paragraph(parse_inline(line)));
            }
        }
    }

    flush_table(&mut table, &mut blocks);

    Document { blocks }
}

fn flush_table(table: &mut TableAccumulator, blocks: &mut Vec<Block>) {
    if let Some(block) = table.flush() {
        blocks.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::InlineRun;

    #[test]
    fn test_empty_input_yields_empty_document() {
        assert!(build("").is_empty());
    }

    #[test]
    fn test_single_heading() {
        // Arrange
        let input = "# Title\n";

        // Act
        let doc = build(input);

        // Assert: exactly one heading block, trailing newline adds nothing
        assert_eq!(
            doc.blocks,
            vec![Block::Heading {
                level: 1,
                runs: vec![InlineRun::plain("Title")],
            }]
        );
    }

    #[test]
    fn test_table_with_separator_row() {
        // Arrange: header row, separator, data row
        let input = "| a | **b** |\n| :--- | :--- |\n| c | d |\n";

        // Act
        let doc = build(input);

        // Assert: one table, separator absent, bold preserved
        assert_eq!(doc.len(), 1);
        let Block::Table(rows) = &doc.blocks[0] else {
            panic!("expected Table block");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].cells[0].paragraphs,
            vec![vec![InlineRun::plain("a")]]
        );
        assert_eq!(
            rows[0].cells[1].paragraphs,
            vec![vec![InlineRun::bold("b")]]
        );
        assert_eq!(
            rows[1].cells[0].paragraphs,
            vec![vec![InlineRun::plain("c")]]
        );
        assert_eq!(
            rows[1].cells[1].paragraphs,
            vec![vec![InlineRun::plain("d")]]
        );
    }

    #[test]
    fn test_bullet_items_stay_separate_and_ordered() {
        // Arrange
        let input = "* item one\n* item two\n";

        // Act
        let doc = build(input);

        // Assert
        assert_eq!(
            doc.blocks,
            vec![
                Block::BulletItem(vec![InlineRun::plain("item one")]),
                Block::BulletItem(vec![InlineRun::plain("item two")]),
            ]
        );
    }

    #[test]
    fn test_blank_line_between_paragraphs_is_preserved() {
        // Arrange
        let input = "Para1\n\nPara2\n";

        // Act
        let doc = build(input);

        // Assert: blank line survives between the paragraphs
        assert_eq!(
            doc.blocks,
            vec![
                Block::Paragraph(vec![InlineRun::plain("Para1")]),
                Block::BlankLine,
                Block::Paragraph(vec![InlineRun::plain("Para2")]),
            ]
        );
    }

    #[test]
    fn test_non_contiguous_tables_never_merge() {
        // Arrange: two table regions separated by a paragraph
        let input = "| a |\nbetween\n| b |\n";

        // Act
        let doc = build(input);

        // Assert: two distinct table blocks around the paragraph
        assert_eq!(doc.len(), 3);
        assert!(matches!(doc.blocks[0], Block::Table(_)));
        assert!(matches!(doc.blocks[1], Block::Paragraph(_)));
        assert!(matches!(doc.blocks[2], Block::Table(_)));
    }

    #[test]
    fn test_table_at_end_of_input_is_flushed() {
        // Arrange: input exhausts while rows are pending
        let input = "intro\n| a | b |";

        // Act
        let doc = build(input);

        // Assert
        assert_eq!(doc.len(), 2);
        assert!(matches!(doc.blocks[1], Block::Table(_)));
    }

    #[test]
    fn test_paragraph_keeps_full_untrimmed_line() {
        // Arrange: leading whitespace that is neither bullet nor heading
        let input = "  padded line\n";

        // Act
        let doc = build(input);

        // Assert: paragraph content is the full original line
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![InlineRun::plain("  padded line")])]
        );
    }

    #[test]
    fn test_build_is_deterministic_across_calls() {
        // Arrange: a representative slice of generated output
        let input = "# TÊN BÀI DẠY:\n\
                     ## Môn học: Tin học | Lớp: 6\n\
                     \n\
                     **I. MỤC TIÊU**\n\
                     * Biết thông tin là gì.\n\
                     | Hoạt động của GV và HS | Nội dung |\n\
                     | :--- | :--- |\n\
                     | **1. Giao nhiệm vụ** <br> chi tiết | đáp án |\n";

        // Act: build twice from the same text
        let first = build(input);
        let second = build(input);

        // Assert: structurally identical, no state carried across calls
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_constructs_fall_through_to_paragraph() {
        // Arrange: near-miss table and heading syntax
        let input = "| unclosed row\n#missing space\n#### too deep\n";

        // Act
        let doc = build(input);

        // Assert: everything degrades to paragraphs, nothing is lost
        assert_eq!(doc.len(), 3);
        for block in &doc.blocks {
            assert!(matches!(block, Block::Paragraph(_)));
        }
    }

    #[test]
    fn test_heading_content_is_trimmed_and_inline_parsed() {
        let doc = build("### **1. HOẠT ĐỘNG MỞ ĐẦU (KHỞI ĐỘNG)**  \n");

        assert_eq!(
            doc.blocks,
            vec![Block::Heading {
                level: 3,
                runs: vec![InlineRun::bold("1. HOẠT ĐỘNG MỞ ĐẦU (KHỞI ĐỘNG)")],
            }]
        );
    }
}
