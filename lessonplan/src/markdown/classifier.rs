//! Line classification
//!
//! Decides what kind of block a raw source line belongs to. The rules are
//! checked in a fixed order; anything unrecognized falls through to
//! `Paragraph` so malformed service output degrades instead of failing.

/// Classification of one source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A `| ... |` line that should be accumulated into the pending table
    TableRow,

    /// A `| :--- | :--- |` alignment row; discarded, neither accumulated
    /// nor flushing the pending table
    TableSeparator,

    /// A heading line; `text` is the remainder after the `#` prefix
    Heading {
        /// Heading level 1-3
        level: u8,
        /// Heading content, trimmed
        text: &'a str,
    },

    /// A `* ` or `- ` bullet item; `text` is the remainder after the prefix
    Bullet {
        /// Item content, trimmed
        text: &'a str,
    },

    /// A line that is empty after trimming
    Blank,

    /// Everything else; the full untrimmed line is the content
    Paragraph,
}

/// Classify a single source line.
///
/// Table-row detection runs first and works on the trimmed line; heading
/// prefixes are matched against the untrimmed line, bullets against the
/// trimmed one, mirroring how the prompt template lays the plan out.
pub fn classify(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();

    if trimmed.starts_with('|') && trimmed.ends_with('|') {
        if trimmed.contains("---") {
            return LineClass::TableSeparator;
        }
        return LineClass::TableRow;
    }

    if let Some(rest) = line.strip_prefix("# ") {
        return LineClass::Heading {
            level: 1,
            text: rest.trim(),
        };
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return LineClass::Heading {
            level: 2,
            text: rest.trim(),
        };
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return LineClass::Heading {
            level: 3,
            text: rest.trim(),
        };
    }

    if let Some(rest) = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
    {
        return LineClass::Bullet { text: rest.trim() };
    }

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    LineClass::Paragraph
}
