//! Inline span parsing
//!
//! Splits one line of text into plain and bold runs. Bold is the only
//! inline emphasis the prompt template asks the generation service for,
//! so `**...**` pairs are all this parser knows about.

use regex::Regex;
use std::sync::OnceLock;

/// Matches a non-greedy `**...**` pair, including the empty `****` case.
static BOLD_SPAN: OnceLock<Regex> = OnceLock::new();

fn bold_span() -> &'static Regex {
    BOLD_SPAN.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold span pattern is valid"))
}

/// A span of text with a single emphasis state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRun {
    /// The visible text content (markers stripped)
    pub text: String,

    /// Bold formatting
    pub bold: bool,
}

impl InlineRun {
    /// Create a plain run
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Create a bold run
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Split a line into ordered plain and bold runs.
///
/// Text delimited by a `**...**` pair becomes one bold run with the markers
/// stripped; everything else is kept as plain runs, preserving order and
/// surrounding whitespace. An unmatched `**` is literal plain text, and an
/// empty `****` pair produces no run at all. A line without any pair comes
/// back as a single plain run; an empty line produces no runs.
pub fn parse_inline(line: &str) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    let mut last = 0;

    for found in bold_span().find_iter(line) {
        if found.start() > last {
            runs.push(InlineRun::plain(&line[last..found.start()]));
        }
        let inner = &line[found.start() + 2..found.end() - 2];
        if !inner.is_empty() {
            runs.push(InlineRun::bold(inner));
        }
        last = found.end();
    }

    if last < line.len() {
        runs.push(InlineRun::plain(&line[last..]));
    }

    runs
}
