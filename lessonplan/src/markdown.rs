//! Markdown translation for the generated lesson plan
//!
//! The generation service is instructed (through the prompt template) to emit
//! a narrow Markdown subset: headings 1-3, paragraphs, single-level bullet
//! items, two-column tables with `<br>` line breaks inside cells, and
//! `**bold**` spans. This module converts that text into a flat, ordered
//! block sequence ready for structured export. It is deliberately not a
//! general CommonMark parser and must never fail on malformed input.

// Submodules
mod blocks;
mod builder;
mod classifier;
mod inline;
mod table;

// Re-export public types
pub use blocks::{Block, TableCell, TableRow};
pub use builder::{build, Document};
pub use classifier::{classify, LineClass};
pub use inline::{parse_inline, InlineRun};
pub use table::TableAccumulator;
