//! Error types for formula parsing and valuation

use crate::lexer::LexicalError;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised while parsing formulas out of a token line
///
/// Positions are 0-based token indices into the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that does not fit the formula grammar
    UnexpectedSymbol {
        /// Rendering of the offending token
        symbol: String,
        /// Index of the token in the line
        position: usize,
        /// The line being parsed
        line: String,
    },
    /// The line ended where the grammar required another token
    MissingSymbol {
        /// Index one past the last token of the line
        position: usize,
        /// The line being parsed
        line: String,
    },
    /// A statement ran out of tokens that the lexer should have guaranteed
    Internal {
        /// Token rendering of the line
        line: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedSymbol {
                symbol,
                position,
                line,
            } => write!(
                f,
                "Unexpected symbol '{}' at position {} of line '{}'",
                symbol, position, line
            ),
            ParseError::MissingSymbol { position, line } => write!(
                f,
                "Missing symbol at position {} of line '{}'",
                position, line
            ),
            ParseError::Internal { line } => write!(f, "Failed to parse line {}", line),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// A formula referenced a symbol with no assigned value
///
/// Displays as the bare symbol name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSymbolError {
    /// Name of the unassigned atomic proposition
    pub symbol: Arc<str>,
}

impl fmt::Display for MissingSymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

impl std::error::Error for MissingSymbolError {}

impl From<MissingSymbolError> for io::Error {
    fn from(err: MissingSymbolError) -> Self {
        io::Error::new(io::ErrorKind::NotFound, err)
    }
}

/// Errors returned by [`Formula::parse`](super::Formula::parse) and
/// [`Argument::parse`](crate::argument::Argument::parse)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The text did not tokenize
    Lexical(LexicalError),
    /// The tokens did not form a formula
    Parse(ParseError),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Lexical(e) => write!(f, "{}", e),
            SyntaxError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyntaxError::Lexical(e) => Some(e),
            SyntaxError::Parse(e) => Some(e),
        }
    }
}

impl From<LexicalError> for SyntaxError {
    fn from(err: LexicalError) -> Self {
        SyntaxError::Lexical(err)
    }
}

impl From<ParseError> for SyntaxError {
    fn from(err: ParseError) -> Self {
        SyntaxError::Parse(err)
    }
}

impl From<SyntaxError> for io::Error {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::Lexical(e) => e.into(),
            SyntaxError::Parse(e) => e.into(),
        }
    }
}
