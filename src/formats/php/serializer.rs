//! Renders a Document as a PHP file

use super::{quote, PhpHeader};
use crate::error::FormatError;
use crate::model::{CellValue, ClassList, ClassToken, Document, Item, Table, Tier};
use std::fmt::Write;

const INDENT: &str = "  ";

pub fn serialize_document(doc: &Document, header: &PhpHeader) -> Result<String, FormatError> {
    let mut out = String::new();

    write_header(&mut out, header)?;

    for token in ClassToken::all() {
        writeln!(
            out,
            "${} = {};",
            token.variable_name(),
            quote(&token.css_class())
        )?;
    }
    writeln!(out, "$features_total_count = {};", doc.total_items())?;

    writeln!(out, "$feature_tables = [")?;
    for table in &doc.tables {
        write_table(&mut out, table)?;
    }
    writeln!(out, "];")?;

    writeln!(out, "return [")?;
    writeln!(out, "{INDENT}\"feature_tables\" => $feature_tables,")?;
    writeln!(
        out,
        "{INDENT}\"features_total_count\" => $features_total_count,"
    )?;
    writeln!(out, "];")?;

    Ok(out)
}

fn write_header(out: &mut String, header: &PhpHeader) -> Result<(), FormatError> {
    writeln!(out, "<?php")?;
    writeln!(out)?;
    writeln!(out, "// DO NOT manually modify this file.")?;
    if !header.generator_url.is_empty() {
        writeln!(
            out,
            "// This file was generated using {}",
            header.generator_url
        )?;
    }
    if !header.source_url.is_empty() {
        writeln!(out, "// To make changes modify {}", header.source_url)?;
        writeln!(out, "// and run it through this script.")?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_table(out: &mut String, table: &Table) -> Result<(), FormatError> {
    let pad = INDENT.repeat(2);

    writeln!(out, "{INDENT}[")?;
    writeln!(out, "{pad}\"heading\" => {},", quote(&table.heading))?;
    writeln!(out, "{pad}\"ki_badge\" => {},", table.ki_badge)?;
    writeln!(out, "{pad}\"new_badge\" => {},", table.new_badge)?;
    writeln!(out, "{pad}\"table_class\" => {},", classes(&table.table_class))?;
    writeln!(out, "{pad}\"items\" => [")?;
    for item in &table.items {
        write_item(out, item)?;
    }
    writeln!(out, "{pad}],")?;
    writeln!(out, "{INDENT}],")?;
    Ok(())
}

fn write_item(out: &mut String, item: &Item) -> Result<(), FormatError> {
    let open = INDENT.repeat(3);
    let pad = INDENT.repeat(4);

    writeln!(out, "{open}[")?;
    writeln!(out, "{pad}\"label\" => {},", quote(&item.label))?;
    writeln!(out, "{pad}\"tooltip\" => {},", quote(&item.tooltip))?;
    for tier in Tier::ALL {
        writeln!(out, "{pad}\"{tier}\" => {},", cell(item.tier(tier)))?;
    }
    writeln!(out, "{pad}\"ki_badge\" => {},", cell(&item.ki_badge))?;
    writeln!(out, "{pad}\"new_badge\" => {},", cell(&item.new_badge))?;
    writeln!(out, "{pad}\"row_class\" => {},", classes(&item.row_class))?;
    writeln!(out, "{pad}\"cell_class\" => {},", classes(&item.cell_class))?;
    if let Some(hidden) = &item.initially_hidden {
        writeln!(out, "{pad}\"initially_hidden\" => {},", cell(hidden))?;
    }
    writeln!(out, "{open}],")?;
    Ok(())
}

/// Booleans as literals, text quoted
fn cell(value: &CellValue) -> String {
    match value {
        CellValue::Bool(b) => b.to_string(),
        CellValue::Text(text) => quote(text),
    }
}

/// Class list as interpolated variable references; never escaped
fn classes(list: &ClassList) -> String {
    format!("\"{}\"", list.to_variable_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TierPair;

    fn bare_header() -> PhpHeader {
        PhpHeader {
            generator_url: String::new(),
            source_url: String::new(),
        }
    }

    #[test]
    fn test_empty_document() {
        let out = serialize_document(&Document::default(), &bare_header()).unwrap();
        assert!(out.starts_with("<?php\n\n// DO NOT manually modify this file.\n\n$table_desktop"));
        assert!(out.contains("$features_total_count = 0;\n$feature_tables = [\n];\n"));
        assert!(out.ends_with(
            "return [\n  \"feature_tables\" => $feature_tables,\n  \"features_total_count\" => $features_total_count,\n];\n"
        ));
    }

    #[test]
    fn test_header_lines() {
        let out = serialize_document(&Document::default(), &PhpHeader::default()).unwrap();
        assert!(out.contains("// This file was generated using https://github.com/C-Mejlak/csv-to-features\n"));
        assert!(out.contains("// and run it through this script.\n"));
    }

    #[test]
    fn test_class_variables_declared_in_order() {
        let out = serialize_document(&Document::default(), &bare_header()).unwrap();
        let declared: Vec<_> = out
            .lines()
            .filter(|line| line.starts_with('$') && line.contains("features-table__"))
            .collect();
        assert_eq!(declared.len(), 14);
        assert_eq!(
            declared[0],
            "$table_desktop = \"features-table__table--different-desktop\";"
        );
        assert_eq!(
            declared[7],
            "$row_difference = \"features-table__row--different\";"
        );
        assert_eq!(
            declared[13],
            "$cell_deluxe_vs_enterprise = \"features-table__cell--different-deluxe-vs-enterprise\";"
        );
    }

    #[test]
    fn test_item_values_keep_their_type() {
        let mut item = Item::with_tiers(
            "Preis $",
            [true.into(), "true".into(), "".into(), false.into()],
        );
        item.cell_class.push(ClassToken::Cell(TierPair::StandardVsPremium));
        let mut table = Table::new("A");
        table.items.push(item);

        let out = serialize_document(&Document::new(vec![table]), &bare_header()).unwrap();
        assert!(out.contains("\"label\" => \"Preis \\$\",\n"));
        assert!(out.contains("\"standard\" => true,\n"));
        assert!(out.contains("\"premium\" => \"true\",\n"));
        assert!(out.contains("\"deluxe\" => \"\",\n"));
        assert!(out.contains("\"enterprise\" => false,\n"));
        assert!(out.contains("\"cell_class\" => \"$cell_standard_vs_premium\",\n"));
        assert!(out.contains("\"row_class\" => \"\",\n"));
        assert!(!out.contains("initially_hidden"));
    }
}
