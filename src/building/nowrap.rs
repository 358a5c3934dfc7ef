//! Inline no-wrap markup
//!
//! Domain terms, units and product names must never be broken across lines in the rendered
//! table. Every occurrence is wrapped in a `whitespace-nowrap` span.
//!
//! The rules form an ordered list and are applied one after the other over the whole text.
//! Each rule wraps all of its non-overlapping matches; later rules only see the text no earlier
//! rule has wrapped, so nothing is wrapped twice. Several rules are substrings of others
//! (`E-Mail` in `E-Mails`, `E-Mail-Builder` and the quoted phrases), so the order decides which
//! one is wrapped.

use crate::model::CellValue;
use std::ops::Range;

pub const NOWRAP_OPEN: &str = "<span class='whitespace-nowrap'>";
pub const NOWRAP_CLOSE: &str = "</span>";

/// A single no-wrap substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoWrapRule {
    /// Wrap the literal text
    Literal(&'static str),
    /// Wrap the character together with the one right before it
    WithPrecedingChar(char),
}

/// The substitutions in priority order
pub const NOWRAP_RULES: &[NoWrapRule] = &[
    NoWrapRule::Literal("z. B."),
    NoWrapRule::Literal("E-Mails"),
    NoWrapRule::Literal("E-Mail"),
    NoWrapRule::Literal("DSGVO-konform"),
    NoWrapRule::WithPrecedingChar('%'),
    NoWrapRule::Literal("E-Mail-Builder"),
    NoWrapRule::Literal("Campaign-Builder"),
    NoWrapRule::Literal("Landingpage-Builder"),
    NoWrapRule::Literal("„An primäre E-Mail-Adresse“"),
    NoWrapRule::Literal("„An alle E-Mail-Adressen“"),
];

impl NoWrapRule {
    /// Byte range of the first match in `text`.
    fn find(self, text: &str) -> Option<Range<usize>> {
        match self {
            NoWrapRule::Literal(literal) => text
                .find(literal)
                .map(|start| start..start + literal.len()),
            NoWrapRule::WithPrecedingChar(target) => {
                let at = text.find(target)?;
                // alone when nothing unclaimed precedes it
                let start = text[..at]
                    .chars()
                    .next_back()
                    .map_or(at, |prev| at - prev.len_utf8());
                Some(start..at + target.len_utf8())
            }
        }
    }

    /// Split unclaimed text into its matches of this rule and the text between them.
    fn split<'a>(self, text: &'a str, out: &mut Vec<Segment<'a>>) {
        let mut rest = text;
        while let Some(range) = self.find(rest) {
            if range.start > 0 {
                out.push(Segment::Plain(&rest[..range.start]));
            }
            out.push(Segment::Wrapped(&rest[range.clone()]));
            rest = &rest[range.end..];
        }
        if !rest.is_empty() {
            out.push(Segment::Plain(rest));
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Plain(&'a str),
    Wrapped(&'a str),
}

/// Wrap every no-wrap term of `text` in a no-wrap span.
pub fn wrap_text(text: &str) -> String {
    let mut segments = vec![Segment::Plain(text)];

    for rule in NOWRAP_RULES {
        let mut next = Vec::with_capacity(segments.len());
        for segment in segments {
            match segment {
                Segment::Plain(plain) => rule.split(plain, &mut next),
                wrapped => next.push(wrapped),
            }
        }
        segments = next;
    }

    let mut out = String::with_capacity(text.len());
    for segment in segments {
        match segment {
            Segment::Plain(plain) => out.push_str(plain),
            Segment::Wrapped(term) => {
                out.push_str(NOWRAP_OPEN);
                out.push_str(term);
                out.push_str(NOWRAP_CLOSE);
            }
        }
    }
    out
}

/// [wrap_text] for cell values; booleans pass through unchanged.
pub fn wrap_cell(value: CellValue) -> CellValue {
    match value {
        CellValue::Text(text) => CellValue::Text(wrap_text(&text)),
        other => other,
    }
}
