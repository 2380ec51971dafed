//! Lexical analysis of `.sc`/`.se` catalog scripts.
//!
//! Numbers are validated against strict regular expressions per base and the
//! diagnostics name the substructure that failed; every token carries its
//! 1-based (line, column) position. `//` comments are stripped while
//! scanning.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ParseError;

static DEC_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[1-9][0-9]*$").expect("regex"));
static HEX_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?0[Xx][A-Fa-f0-9]+$").expect("regex"));
static OCT_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?0[0-7]*$").expect("regex"));
static BIN_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?0[Bb][01]+$").expect("regex"));
static FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[+-]?(([0-9]*\.[0-9]+([Ee][+-]?[0-9]+)?)|([0-9]+\.([Ee][+-]?[0-9]+)?)|([0-9]+([Ee][+-]?[0-9]+)))$",
    )
    .expect("regex")
});
static HEX_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[+-]?0[Xx](([A-Fa-f0-9]*\.[A-Fa-f0-9]+[Pp][+-]?[0-9]+)|([A-Fa-f0-9]+\.[Pp][+-]?[0-9]+)|([A-Fa-f0-9]+[Pp][+-]?[0-9]+))$",
    )
    .expect("regex")
});

const PUNCTUATORS: &[char] = &[',', '(', ')', '[', ']', '{', '}'];
const OPERATOR_CHARS: &[char] = &['<', '=', '>', '!'];
const BINARY_OPERATORS: &[&str] = &["<=", ">=", "==", "!="];
const SINGLE_OPERATORS: &[&str] = &["<", ">"];

/// The terminal classes the parser distinguishes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare name used as a key.
    Identifier,
    /// A name the caller registered as a variable.
    Variable,
    /// A comparison operator.
    Operator,
    /// A numeric literal in any base.
    Number,
    /// A quoted string (quotes included in the lexeme).
    String,
    /// `true` or `false`.
    Boolean,
    /// One of `,()[]{}`.
    Punctuator,
}

/// A lexed token: kind, lexeme, 1-based (line, column) and the numeric base
/// for numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The terminal class.
    pub kind: TokenKind,
    /// The raw text.
    pub value: String,
    /// 1-based (line, column) of the first character.
    pub position: (u64, u64),
    /// The numeric base, 10 unless a prefix says otherwise.
    pub base: u32,
}

impl Token {
    /// The single-byte grammar symbol of this token.
    pub(crate) fn symbol(&self) -> u8 {
        match self.kind {
            TokenKind::Identifier => b'i',
            TokenKind::Variable => b'v',
            TokenKind::Operator => b'o',
            TokenKind::Number => b'n',
            TokenKind::String => b's',
            TokenKind::Boolean => b'b',
            TokenKind::Punctuator => self.value.as_bytes()[0],
        }
    }
}

/// The tokenizer. Variables registered up front lex as [`TokenKind::Variable`]
/// instead of [`TokenKind::Identifier`].
///
/// ```
/// use cse_rs::scstream::{Lexer, TokenKind};
///
/// let tokens = Lexer::new().run("Mass 1.989e30 // the sun\n").unwrap();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Identifier);
/// assert_eq!(tokens[1].kind, TokenKind::Number);
/// assert_eq!(tokens[1].position, (1, 6));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    variables: Vec<String>,
    /// Whether a bare leading zero starts an octal literal.
    pub allow_octal: bool,
}

impl Lexer {
    /// A lexer with no registered variables and octal literals enabled.
    pub fn new() -> Self {
        Lexer {
            variables: Vec::new(),
            allow_octal: true,
        }
    }

    /// Registers caller variables.
    pub fn add_variables<S: Into<String>, I: IntoIterator<Item = S>>(mut self, vars: I) -> Self {
        self.variables.extend(vars.into_iter().map(Into::into));
        self
    }

    /// Tokenizes a full script.
    pub fn run(&self, input: &str) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        let chars: Vec<char> = input.chars().collect();
        let mut i = 0;
        let (mut line, mut column) = (1u64, 1u64);

        while i < chars.len() {
            let c = chars[i];
            if c == '\n' {
                line += 1;
                column = 1;
                i += 1;
                continue;
            }
            if c.is_whitespace() {
                column += 1;
                i += 1;
                continue;
            }
            // Comments run to end of line.
            if c == '/' && chars.get(i + 1) == Some(&'/') {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
                continue;
            }
            if PUNCTUATORS.contains(&c) {
                tokens.push(Token {
                    kind: TokenKind::Punctuator,
                    value: c.to_string(),
                    position: (line, column),
                    base: 10,
                });
                column += 1;
                i += 1;
                continue;
            }
            if OPERATOR_CHARS.contains(&c) {
                self.lex_operator(&chars, &mut i, &mut line, &mut column, &mut tokens)?;
                continue;
            }
            if c.is_alphabetic() || c == '_' {
                self.lex_identifier(&chars, &mut i, line, &mut column, &mut tokens);
                continue;
            }
            if c.is_ascii_digit() || c == '+' || c == '-' {
                self.lex_number(&chars, &mut i, line, &mut column, &mut tokens)?;
                continue;
            }
            if c == '"' {
                self.lex_string(&chars, &mut i, &mut line, &mut column, &mut tokens);
                continue;
            }
            return Err(ParseError::Lex {
                line,
                column,
                reason: format!("Unexpected character <{c}>"),
            });
        }
        Ok(tokens)
    }

    fn lex_operator(
        &self,
        chars: &[char],
        i: &mut usize,
        line: &mut u64,
        column: &mut u64,
        tokens: &mut Vec<Token>,
    ) -> Result<(), ParseError> {
        let start = *column;
        let mut buf = chars[*i].to_string();
        if let Some(&next) = chars.get(*i + 1) {
            if OPERATOR_CHARS.contains(&next) {
                buf.push(next);
            }
        }
        if BINARY_OPERATORS.contains(&buf.as_str()) {
            tokens.push(Token {
                kind: TokenKind::Operator,
                value: buf,
                position: (*line, start),
                base: 10,
            });
            *i += 2;
            *column += 2;
            return Ok(());
        }
        buf.truncate(1);
        if SINGLE_OPERATORS.contains(&buf.as_str()) {
            tokens.push(Token {
                kind: TokenKind::Operator,
                value: buf,
                position: (*line, start),
                base: 10,
            });
            *i += 1;
            *column += 1;
            return Ok(());
        }
        Err(ParseError::Lex {
            line: *line,
            column: start,
            reason: format!("Unexpected \"{buf}\""),
        })
    }

    fn lex_identifier(
        &self,
        chars: &[char],
        i: &mut usize,
        line: u64,
        column: &mut u64,
        tokens: &mut Vec<Token>,
    ) {
        let start = *column;
        let mut buf = String::new();
        while *i < chars.len() {
            let c = chars[*i];
            if c.is_whitespace() || PUNCTUATORS.contains(&c) || OPERATOR_CHARS.contains(&c) || c == '"'
            {
                break;
            }
            buf.push(c);
            *i += 1;
            *column += 1;
        }
        let kind = if buf == "true" || buf == "false" {
            TokenKind::Boolean
        } else if self.variables.iter().any(|v| v == &buf) {
            TokenKind::Variable
        } else {
            TokenKind::Identifier
        };
        tokens.push(Token {
            kind,
            value: buf,
            position: (line, start),
            base: 10,
        });
    }

    fn lex_number(
        &self,
        chars: &[char],
        i: &mut usize,
        line: u64,
        column: &mut u64,
        tokens: &mut Vec<Token>,
    ) -> Result<(), ParseError> {
        let start = *column;
        let mut buf = String::new();
        while *i < chars.len() {
            let c = chars[*i];
            if c.is_whitespace() || PUNCTUATORS.contains(&c) || OPERATOR_CHARS.contains(&c) || c == '"'
            {
                break;
            }
            buf.push(c);
            *i += 1;
            *column += 1;
        }
        let base = self.classify_number(&buf, line, start)?;
        tokens.push(Token {
            kind: TokenKind::Number,
            value: buf,
            position: (line, start),
            base,
        });
        Ok(())
    }

    /// Decides the base of a numeric lexeme or produces the diagnostic naming
    /// the substructure that failed.
    fn classify_number(&self, lexeme: &str, line: u64, column: u64) -> Result<u32, ParseError> {
        let fail = |reason: &str| ParseError::Lex {
            line,
            column,
            reason: reason.to_string(),
        };
        let body = lexeme.strip_prefix(['+', '-']).unwrap_or(lexeme);
        if body.is_empty() {
            return Err(fail("Invalid digit in integer constant."));
        }
        let lower = body.to_ascii_lowercase();
        if body.starts_with('0') {
            if body == "0" {
                return Ok(10);
            }
            if lower.starts_with("0b") {
                return if BIN_INT.is_match(body) {
                    Ok(2)
                } else {
                    Err(fail("Invalid digit in binary constant."))
                };
            }
            if lower.starts_with("0x") {
                if HEX_FLOAT.is_match(body) || HEX_INT.is_match(body) {
                    return Ok(16);
                }
                return if lower.contains('.') && !lower.contains('p') {
                    Err(fail("Hexadecimal floating literal requires an exponent."))
                } else if lower.contains('p') {
                    Err(fail("Exponent has no digits."))
                } else {
                    Err(fail("Invalid digit in integer constant."))
                };
            }
            // Leading zero: octal integer or a decimal float like 0.5.
            if FLOAT.is_match(body) {
                return Ok(10);
            }
            if self.allow_octal && OCT_INT.is_match(body) {
                return Ok(8);
            }
            if !self.allow_octal && body[1..].chars().all(|c| c.is_ascii_digit()) {
                return Ok(10);
            }
            return if lower.contains('.') || lower.contains('e') {
                Err(fail("Invalid digit in floating constant."))
            } else if self.allow_octal {
                Err(fail("Invalid digit in octal constant."))
            } else {
                Err(fail("Invalid digit in integer constant."))
            };
        }
        if FLOAT.is_match(body) || DEC_INT.is_match(body) {
            return Ok(10);
        }
        if lower.contains('.') || lower.contains('e') {
            Err(fail("Invalid digit in floating constant."))
        } else {
            Err(fail("Invalid digit in integer constant."))
        }
    }

    fn lex_string(
        &self,
        chars: &[char],
        i: &mut usize,
        line: &mut u64,
        column: &mut u64,
        tokens: &mut Vec<Token>,
    ) {
        let (start_line, start_col) = (*line, *column);
        let mut buf = String::from('"');
        *i += 1;
        *column += 1;
        while *i < chars.len() && chars[*i] != '"' {
            let c = chars[*i];
            buf.push(c);
            if c == '\n' {
                *line += 1;
                *column = 1;
            } else {
                *column += 1;
            }
            *i += 1;
        }
        if *i < chars.len() {
            buf.push('"');
            *i += 1;
            *column += 1;
        }
        tokens.push(Token {
            kind: TokenKind::String,
            value: buf,
            position: (start_line, start_col),
        base: 10,
        });
    }
}
