//! Lexical analysis with inline grammar validation
//!
//! The lexer turns each source line into a [`TokenLine`]. Scanning is a small state machine
//! over four modes (normal, inside an atom name, inside an identifier, inside a string
//! literal). Once a line is scanned, the leading token and every adjacent pair of tokens are
//! checked against the successor table of [`crate::token`], so malformed lines are rejected
//! before the interpreter sees them.
//!
//! Blank lines and comment-only lines produce no [`TokenLine`].
//!
//! # Examples
//!
//! ```
//! use aris_logic::lexer::tokenize_str;
//! use aris_logic::token::Token;
//!
//! # fn main() -> Result<(), aris_logic::lexer::LexicalError> {
//! let lines = tokenize_str("P := true // set P\n\nprint \"done\"")?;
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[0].tokens, vec![Token::atom("P"), Token::Assign, Token::True]);
//! assert_eq!(lines[1].number, 3);
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use error::LexicalError;

use crate::error::ArisError;
use crate::logging::targets;
use crate::token::{self, Token, KEYWORDS, UNIQUE_KEYWORDS};
use std::fmt;
use std::io::BufRead;

/// The tokens read from one non-blank source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLine {
    /// 1-based line number in the source
    pub number: usize,
    /// The source text of the line, comment included
    pub source: String,
    /// The tokens of the line, in order
    pub tokens: Vec<Token>,
}

impl fmt::Display for TokenLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Scan mode of the line state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    Normal,
    Atom,
    Identifier,
    Str,
}

/// Returns `line` without its trailing `//` comment
///
/// A `//` inside a string literal does not start a comment.
pub fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut previous_slash = false;
    for (index, c) in line.char_indices() {
        if c == '"' {
            in_string = !in_string;
        }
        if !in_string && c == '/' {
            if previous_slash {
                return &line[..index - 1];
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
    }
    line
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn ends_atom(c: char) -> bool {
    matches!(c, ' ' | '\t' | '&' | ')' | ',' | ':' | '-' | '|')
}

fn continues_atom(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '\''
}

fn continues_identifier(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Character-level state machine over one line
struct Scanner<'a> {
    line: &'a str,
    chars: Vec<char>,
    mode: ScanMode,
    buffer: String,
    tokens: Vec<Token>,
    seen_keywords: Vec<&'static str>,
}

impl<'a> Scanner<'a> {
    fn new(line: &'a str) -> Self {
        Scanner {
            line,
            chars: strip_comment(line).chars().collect(),
            mode: ScanMode::Normal,
            buffer: String::new(),
            tokens: Vec::new(),
            seen_keywords: Vec::new(),
        }
    }

    fn unexpected_character(&self, character: char, position: usize) -> LexicalError {
        LexicalError::UnexpectedCharacter {
            character,
            position,
            line: self.line.to_string(),
        }
    }

    /// Close the name being accumulated and emit it
    fn close_name(&mut self) {
        let name = std::mem::take(&mut self.buffer);
        match self.mode {
            ScanMode::Atom => self.tokens.push(Token::atom(&name)),
            ScanMode::Identifier => self.tokens.push(Token::identifier(&name)),
            ScanMode::Str => self.tokens.push(Token::string(&name)),
            ScanMode::Normal => {}
        }
        self.mode = ScanMode::Normal;
    }

    /// Try to match a keyword at `start`, returning it and its token
    fn keyword_at(&self, start: usize) -> Option<(&'static str, &'static Token)> {
        let rest = &self.chars[start..];
        KEYWORDS
            .iter()
            .find(|(keyword, _)| {
                keyword.chars().count() <= rest.len()
                    && keyword.chars().zip(rest.iter()).all(|(a, b)| a == *b)
            })
            .map(|(keyword, token)| (*keyword, token))
    }

    fn scan(mut self) -> Result<Vec<Token>, LexicalError> {
        let len = self.chars.len();
        let mut i = 0;
        while i < len {
            let c = self.chars[i];

            match self.mode {
                ScanMode::Atom => {
                    if ends_atom(c) {
                        self.close_name();
                    } else if continues_atom(c) {
                        self.buffer.push(c);
                        i += 1;
                        continue;
                    } else {
                        return Err(self.unexpected_character(c, i));
                    }
                }
                ScanMode::Identifier => {
                    if is_blank(c) {
                        self.close_name();
                    } else if continues_identifier(c) {
                        self.buffer.push(c);
                        i += 1;
                        continue;
                    } else {
                        return Err(self.unexpected_character(c, i));
                    }
                }
                ScanMode::Str => {
                    if c == '"' {
                        self.close_name();
                    } else if i == len - 1 {
                        return Err(self.unexpected_character(c, i));
                    } else {
                        self.buffer.push(c);
                    }
                    i += 1;
                    continue;
                }
                ScanMode::Normal => {}
            }

            if is_blank(c) {
                i += 1;
                continue;
            }

            if c == '"' {
                self.mode = ScanMode::Str;
                self.buffer.clear();
            } else if let Some(token) = token::single_character_token(c) {
                self.tokens.push(token.clone());
            } else if token::starts_two_character_token(c) {
                i += 1;
                match self.chars.get(i) {
                    Some(&next) => match token::two_character_token(c, next) {
                        Some(token) => self.tokens.push(token.clone()),
                        None => return Err(self.unexpected_character(next, i)),
                    },
                    None => return Err(self.unexpected_character(c, i - 1)),
                }
            } else if c.is_ascii_uppercase() {
                self.mode = ScanMode::Atom;
                self.buffer = c.to_string();
            } else if c.is_ascii_lowercase() {
                if let Some((keyword, token)) = self.keyword_at(i) {
                    self.tokens.push(token.clone());
                    let start = i;
                    i += keyword.len();
                    if let Some(&next) = self.chars.get(i) {
                        if !is_blank(next) {
                            return Err(self.unexpected_character(next, i));
                        }
                    }
                    if UNIQUE_KEYWORDS.contains(&keyword) {
                        if self.seen_keywords.contains(&keyword) {
                            return Err(LexicalError::UnexpectedSymbol {
                                symbol: keyword.to_string(),
                                position: start,
                                line: self.line.to_string(),
                            });
                        }
                        self.seen_keywords.push(keyword);
                    }
                    continue;
                }
                self.mode = ScanMode::Identifier;
                self.buffer = c.to_string();
            } else {
                return Err(self.unexpected_character(c, i));
            }
            i += 1;
        }

        match self.mode {
            ScanMode::Atom | ScanMode::Identifier => self.close_name(),
            // only an opening quote on the last character gets here
            ScanMode::Str => return Err(self.unexpected_character('"', len - 1)),
            ScanMode::Normal => {}
        }

        Ok(self.tokens)
    }
}

/// Scan one line into tokens without checking the line grammar
///
/// Only character-level rules apply: illegal characters, unterminated strings, incomplete
/// two-character symbols, keywords glued to the next word and repeated unique keywords.
pub fn scan_line(line: &str) -> Result<Vec<Token>, LexicalError> {
    Scanner::new(line).scan()
}

/// Check that every adjacent pair of tokens satisfies the successor table
pub fn check_adjacency(line: &str, tokens: &[Token]) -> Result<(), LexicalError> {
    for (index, pair) in tokens.windows(2).enumerate() {
        if !pair[0].can_follow(&pair[1]) {
            return Err(LexicalError::UnexpectedSymbol {
                symbol: pair[1].to_string(),
                position: index + 1,
                line: line.to_string(),
            });
        }
    }
    Ok(())
}

/// Check the leading token of a non-empty line
fn check_leading_token(line: &str, tokens: &[Token]) -> Result<(), LexicalError> {
    let Some(first) = tokens.first() else {
        return Ok(());
    };
    let next = tokens.get(1);

    if *first != Token::Print && next.is_none() {
        return Err(LexicalError::UnexpectedEndOfLine {
            line: line.to_string(),
        });
    }

    let offending = match (first, next) {
        (Token::Atom(_), Some(next)) if *next != Token::Assign => Some(next),
        (token, _) if !token.kind().can_lead_line() => Some(token),
        _ => None,
    };
    match offending {
        Some(symbol) => Err(LexicalError::UnexpectedSymbol {
            symbol: symbol.to_string(),
            position: 1,
            line: line.to_string(),
        }),
        None => Ok(()),
    }
}

/// Tokenize and validate one source line
///
/// Returns `Ok(None)` for blank and comment-only lines.
pub fn tokenize_line(number: usize, line: &str) -> Result<Option<TokenLine>, LexicalError> {
    let tokens = scan_line(line)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    check_leading_token(line, &tokens)?;
    check_adjacency(line, &tokens)?;

    let token_line = TokenLine {
        number,
        source: line.to_string(),
        tokens,
    };
    log::trace!(target: targets::LEXER, "Line {}: {}", number, token_line);
    Ok(Some(token_line))
}

/// Tokenize every line of a program held in memory
pub fn tokenize_str(source: &str) -> Result<Vec<TokenLine>, LexicalError> {
    let mut lines = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if let Some(token_line) = tokenize_line(index + 1, line)? {
            lines.push(token_line);
        }
    }
    log::debug!(target: targets::LEXER, "Tokenized {} statements", lines.len());
    Ok(lines)
}

/// Tokenize every line produced by `reader`
///
/// The whole input is tokenized before anything is returned; the first malformed line aborts
/// the run.
pub fn tokenize_reader<R: BufRead>(reader: R) -> Result<Vec<TokenLine>, ArisError> {
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(token_line) = tokenize_line(index + 1, &line)? {
            lines.push(token_line);
        }
    }
    log::debug!(target: targets::LEXER, "Tokenized {} statements", lines.len());
    Ok(lines)
}
