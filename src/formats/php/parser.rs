//! Parser for the generated PHP file
//!
//! Two steps: chumsky turns the token stream into a generic [PhpFile] (assignments plus the
//! returned value), then [parse_document] resolves variables and maps the returned array onto
//! the [Document] model.
//!
//! Grammar:
//!
//!     file       = "<?php" assignment* "return" value ";"
//!     assignment = variable "=" value ";"
//!     value      = string | integer | "true" | "false" | variable | array
//!     array      = "[" (entry ("," entry)* ","?)? "]"
//!     entry      = (string "=>")? value

use super::lexer::{tokenize, Token};
use crate::error::FormatError;
use crate::formats::record::check_total_count;
use crate::model::{CellValue, ClassList, ClassToken, Document, Item, Table, Tier};
use chumsky::{prelude::*, Stream};
use std::collections::HashMap;

type ParserError = Simple<Token>;

/// A PHP value as written in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhpValue {
    Bool(bool),
    Int(usize),
    Str(String),
    Var(String),
    /// Entries in source order; `None` keys are list entries
    Array(Vec<(Option<String>, PhpValue)>),
}

/// Top level statements of the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhpFile {
    pub assignments: Vec<(String, PhpValue)>,
    pub returned: PhpValue,
}

fn value() -> impl Parser<Token, PhpValue, Error = ParserError> + Clone {
    recursive(|value| {
        let scalar = select! {
            Token::Str(text) => PhpValue::Str(text),
            Token::Integer(n) => PhpValue::Int(n),
            Token::Variable(name) => PhpValue::Var(name),
            Token::True => PhpValue::Bool(true),
            Token::False => PhpValue::Bool(false),
        };

        let key = select! { Token::Str(text) => text }.then_ignore(just(Token::Arrow));

        let array = key
            .or_not()
            .then(value)
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::OpenBracket), just(Token::CloseBracket))
            .map(PhpValue::Array);

        array.or(scalar)
    })
}

fn file() -> impl Parser<Token, PhpFile, Error = ParserError> {
    let assignment = select! { Token::Variable(name) => name }
        .then_ignore(just(Token::Assign))
        .then(value())
        .then_ignore(just(Token::Semicolon));

    let returned = just(Token::Return)
        .ignore_then(value())
        .then_ignore(just(Token::Semicolon));

    just(Token::OpenTag)
        .ignore_then(assignment.repeated())
        .then(returned)
        .then_ignore(end())
        .map(|(assignments, returned)| PhpFile {
            assignments,
            returned,
        })
}

/// Parse the generated file into its statements.
pub fn parse_file(source: &str) -> Result<PhpFile, FormatError> {
    let tokens = tokenize(source)?;
    let eoi = source.len()..source.len() + 1;
    let stream = Stream::from_iter(eoi, tokens.into_iter());

    file().parse(stream).map_err(|errors| {
        FormatError::Parse(
            errors
                .iter()
                .map(|e| format!("{} at byte {}", e, e.span().start))
                .collect::<Vec<_>>()
                .join("; "),
        )
    })
}

/// Parse the generated file back into a Document.
pub fn parse_document(source: &str) -> Result<Document, FormatError> {
    let file = parse_file(source)?;
    let scope = Scope::new(&file)?;

    let returned = scope.resolve(&file.returned)?;
    let tables = scope.resolve(entry(array(returned, "returned value")?, "feature_tables")?)?;
    let declared = scope.resolve(entry(array(returned, "returned value")?, "features_total_count")?)?;

    let doc = Document::new(
        list(tables, "feature_tables")?
            .into_iter()
            .map(|table| read_table(&scope, table))
            .collect::<Result<_, _>>()?,
    );

    match declared {
        PhpValue::Int(count) => check_total_count(&doc, *count)?,
        other => return Err(unexpected("features_total_count", "an integer", other)),
    }

    Ok(doc)
}

/// Variables assigned at the top of the file
struct Scope<'a> {
    variables: HashMap<&'a str, &'a PhpValue>,
}

impl<'a> Scope<'a> {
    /// Collect the assignments, checking that class variables hold their CSS class.
    fn new(file: &'a PhpFile) -> Result<Self, FormatError> {
        let mut variables = HashMap::new();
        for (name, value) in &file.assignments {
            if let Some(token) = ClassToken::from_variable_name(name) {
                if *value != PhpValue::Str(token.css_class()) {
                    return Err(unexpected(
                        name,
                        &format!("\"{}\"", token.css_class()),
                        value,
                    ));
                }
            }
            variables.insert(name.as_str(), value);
        }
        Ok(Scope { variables })
    }

    fn resolve<'v>(&self, value: &'v PhpValue) -> Result<&'v PhpValue, FormatError>
    where
        'a: 'v,
    {
        match value {
            PhpValue::Var(name) => self
                .variables
                .get(name.as_str())
                .copied()
                .ok_or_else(|| FormatError::Parse(format!("undefined variable ${name}"))),
            other => Ok(other),
        }
    }
}

fn unexpected(what: &str, expected: &str, found: &PhpValue) -> FormatError {
    FormatError::Parse(format!("{what}: expected {expected}, found {found:?}"))
}

fn array<'v>(
    value: &'v PhpValue,
    what: &str,
) -> Result<&'v [(Option<String>, PhpValue)], FormatError> {
    match value {
        PhpValue::Array(entries) => Ok(entries),
        other => Err(unexpected(what, "an array", other)),
    }
}

/// The values of a list-style array
fn list<'v>(value: &'v PhpValue, what: &str) -> Result<Vec<&'v PhpValue>, FormatError> {
    array(value, what)?
        .iter()
        .map(|(key, value)| match key {
            None => Ok(value),
            Some(key) => Err(FormatError::Parse(format!(
                "{what}: unexpected key \"{key}\""
            ))),
        })
        .collect()
}

fn entry<'v>(
    entries: &'v [(Option<String>, PhpValue)],
    key: &str,
) -> Result<&'v PhpValue, FormatError> {
    entries
        .iter()
        .find(|(k, _)| k.as_deref() == Some(key))
        .map(|(_, value)| value)
        .ok_or_else(|| FormatError::Parse(format!("missing key \"{key}\"")))
}

fn text(entries: &[(Option<String>, PhpValue)], key: &str) -> Result<String, FormatError> {
    match entry(entries, key)? {
        PhpValue::Str(text) => Ok(text.clone()),
        other => Err(unexpected(key, "a string", other)),
    }
}

fn boolean(entries: &[(Option<String>, PhpValue)], key: &str) -> Result<bool, FormatError> {
    match entry(entries, key)? {
        PhpValue::Bool(b) => Ok(*b),
        other => Err(unexpected(key, "a boolean", other)),
    }
}

fn cell(entries: &[(Option<String>, PhpValue)], key: &str) -> Result<CellValue, FormatError> {
    to_cell(key, entry(entries, key)?)
}

fn to_cell(key: &str, value: &PhpValue) -> Result<CellValue, FormatError> {
    match value {
        PhpValue::Bool(b) => Ok(CellValue::Bool(*b)),
        PhpValue::Str(text) => Ok(CellValue::Text(text.clone())),
        other => Err(unexpected(key, "a boolean or a string", other)),
    }
}

fn classes(entries: &[(Option<String>, PhpValue)], key: &str) -> Result<ClassList, FormatError> {
    let references = text(entries, key)?;
    ClassList::parse_variables(&references)
        .map_err(|reference| FormatError::Parse(format!("{key}: unknown class {reference}")))
}

fn read_table(scope: &Scope<'_>, value: &PhpValue) -> Result<Table, FormatError> {
    let entries = array(scope.resolve(value)?, "table")?;
    let items = list(scope.resolve(entry(entries, "items")?)?, "items")?
        .into_iter()
        .map(|item| read_item(scope, item))
        .collect::<Result<_, _>>()?;

    Ok(Table {
        heading: text(entries, "heading")?,
        ki_badge: boolean(entries, "ki_badge")?,
        new_badge: boolean(entries, "new_badge")?,
        table_class: classes(entries, "table_class")?,
        items,
    })
}

fn read_item(scope: &Scope<'_>, value: &PhpValue) -> Result<Item, FormatError> {
    let entries = array(scope.resolve(value)?, "item")?;
    let initially_hidden = entries
        .iter()
        .find(|(key, _)| key.as_deref() == Some("initially_hidden"))
        .map(|(_, value)| to_cell("initially_hidden", value))
        .transpose()?;
    let [standard, premium, deluxe, enterprise] = Tier::ALL.map(|tier| cell(entries, tier.name()));

    Ok(Item {
        label: text(entries, "label")?,
        tooltip: text(entries, "tooltip")?,
        standard: standard?,
        premium: premium?,
        deluxe: deluxe?,
        enterprise: enterprise?,
        ki_badge: cell(entries, "ki_badge")?,
        new_badge: cell(entries, "new_badge")?,
        row_class: classes(entries, "row_class")?,
        cell_class: classes(entries, "cell_class")?,
        initially_hidden,
    })
}
