//! Tokens of the generated PHP file
//!
//! Only the subset of PHP the serializer emits is recognized: the open tag, variable
//! assignments, short array syntax, double quoted strings, integers, booleans and `return`.
//! Whitespace and line comments are skipped.

use super::unescape;
use crate::error::FormatError;
use logos::Logos;
use std::fmt;
use std::ops::Range;

#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+|//[^\n]*")]
pub enum Token {
    #[token("<?php")]
    OpenTag,

    #[token("return")]
    Return,

    #[token("true")]
    True,

    #[token("false")]
    False,

    /// `$name`, stored without the sigil
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Variable(String),

    /// Double quoted string, stored unescaped
    #[regex(r#""([^"\\]|\\(.|\n))*""#, |lex| {
        let slice = lex.slice();
        unescape(&slice[1..slice.len() - 1])
    })]
    Str(String),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<usize>().ok())]
    Integer(usize),

    #[token("=>")]
    Arrow,

    #[token("=")]
    Assign,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenTag => write!(f, "<?php"),
            Token::Return => write!(f, "return"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::Variable(name) => write!(f, "${name}"),
            Token::Str(text) => write!(f, "{}", super::quote(text)),
            Token::Integer(n) => write!(f, "{n}"),
            Token::Arrow => write!(f, "=>"),
            Token::Assign => write!(f, "="),
            Token::OpenBracket => write!(f, "["),
            Token::CloseBracket => write!(f, "]"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
        }
    }
}

/// Tokenize source with byte ranges. Unknown input is an error, not skipped.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, FormatError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(FormatError::Parse(format!(
                    "unexpected input {:?} at byte {}",
                    lexer.slice(),
                    lexer.span().start
                )))
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_assignment() {
        assert_eq!(
            kinds("$features_total_count = 12;"),
            vec![
                Token::Variable("features_total_count".to_string()),
                Token::Assign,
                Token::Integer(12),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("<?php\n\n// see https://example.com\nreturn [];"),
            vec![
                Token::OpenTag,
                Token::Return,
                Token::OpenBracket,
                Token::CloseBracket,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_strings_are_unescaped() {
        assert_eq!(
            kinds(r#""label" => "Preis \$ \"netto\"""#),
            vec![
                Token::Str("label".to_string()),
                Token::Arrow,
                Token::Str("Preis $ \"netto\"".to_string()),
            ]
        );
    }

    #[test]
    fn test_string_with_class_references() {
        assert_eq!(
            kinds(r#""$table_desktop $table_premium_vs_deluxe""#),
            vec![Token::Str("$table_desktop $table_premium_vs_deluxe".to_string())]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("[true, false]").unwrap();
        assert_eq!(tokens[1], (Token::True, 1..5));
        assert_eq!(tokens[3], (Token::False, 7..12));
    }

    #[test]
    fn test_unknown_input_fails() {
        assert!(matches!(tokenize("$a = 1 + 2;"), Err(FormatError::Parse(_))));
    }
}
