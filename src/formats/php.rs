//! PHP array literal format
//!
//!     The website includes the generated file and reads the returned array:
//!
//!     <?php
//!     // header comment
//!     $table_desktop = "features-table__table--different-desktop";    (one per class token)
//!     $features_total_count = 3;
//!     $feature_tables = [ [ "heading" => "…", …, "items" => [ [ "label" => "…", … ], ], ], ];
//!     return [ "feature_tables" => $feature_tables, "features_total_count" => $features_total_count, ];
//!
//!     Class strings reference the class variables (`"$cell_premium_vs_deluxe"`), which PHP
//!     interpolates. Free text is escaped so it can never interpolate by accident.
//!
//!     Parsing reads this exact grammar back (lexer.rs tokenizes with logos, parser.rs builds a
//!     generic value tree with chumsky and maps it onto the Document).

pub mod lexer;
pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::formats::format::Format;
use crate::model::Document;

/// URLs referenced by the header comment; empty values omit their line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhpHeader {
    pub generator_url: String,
    pub source_url: String,
}

impl Default for PhpHeader {
    fn default() -> Self {
        PhpHeader {
            generator_url: "https://github.com/C-Mejlak/csv-to-features".to_string(),
            source_url: "https://docs.google.com/spreadsheets/d/1vnX5QtyCgLZUGgU-lhkndyBzpuzbzUlOIRq5O26N9MI/edit?gid=1367493046#gid=1367493046".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhpFormat {
    header: PhpHeader,
}

impl PhpFormat {
    pub fn new(header: PhpHeader) -> Self {
        PhpFormat { header }
    }
}

impl Format for PhpFormat {
    fn name(&self) -> &str {
        "php"
    }

    fn description(&self) -> &str {
        "PHP array literal for the features page"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_document(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_document(doc, &self.header)
    }
}

/// Quote `text` as a PHP double quoted string literal.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' | '"' | '$' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Inverse of [quote] for the body of a double quoted literal (quotes already stripped).
pub fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(escaped @ ('\\' | '"' | '$')) => out.push(escaped),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            // PHP keeps unknown escape sequences as written
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
