//! Error types for the Aris interpreter
//!
//! Each stage owns its error type ([`LexicalError`], [`ParseError`], [`MissingSymbolError`],
//! [`UsageError`]); [`ArisError`] joins them for callers that run whole programs. Every error
//! converts into [`std::io::Error`] for code that only speaks `io::Result`.

use crate::argument::UsageError;
use crate::formula::{MissingSymbolError, ParseError, SyntaxError};
use crate::lexer::LexicalError;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Any error that stops a program run
///
/// None of these are recovered from: the first error aborts the run.
#[derive(Debug)]
pub enum ArisError {
    /// A line failed to tokenize
    Lexical(LexicalError),

    /// An argument body failed to parse, or a statement ran out of tokens
    Parse(ParseError),

    /// A valuation referenced a symbol with no assigned value
    MissingSymbol(MissingSymbolError),

    /// An argument was asked a question its shape does not support
    Usage(UsageError),

    /// A command referenced an argument that was never defined
    UnknownArgument {
        /// The identifier that was looked up
        name: Arc<str>,
    },

    /// Reading the program or writing the output failed
    Io(io::Error),
}

impl fmt::Display for ArisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArisError::Lexical(err) => write!(f, "{}", err),
            ArisError::Parse(err) => write!(f, "{}", err),
            ArisError::MissingSymbol(err) => write!(f, "Missing symbol '{}'", err),
            ArisError::Usage(err) => write!(f, "{}", err),
            ArisError::UnknownArgument { name } => write!(f, "Unknown argument '{}'", name),
            ArisError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ArisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArisError::Lexical(err) => Some(err),
            ArisError::Parse(err) => Some(err),
            ArisError::MissingSymbol(err) => Some(err),
            ArisError::Usage(err) => Some(err),
            ArisError::UnknownArgument { .. } => None,
            ArisError::Io(err) => Some(err),
        }
    }
}

impl From<LexicalError> for ArisError {
    fn from(err: LexicalError) -> Self {
        ArisError::Lexical(err)
    }
}

impl From<ParseError> for ArisError {
    fn from(err: ParseError) -> Self {
        ArisError::Parse(err)
    }
}

impl From<SyntaxError> for ArisError {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::Lexical(err) => ArisError::Lexical(err),
            SyntaxError::Parse(err) => ArisError::Parse(err),
        }
    }
}

impl From<MissingSymbolError> for ArisError {
    fn from(err: MissingSymbolError) -> Self {
        ArisError::MissingSymbol(err)
    }
}

impl From<UsageError> for ArisError {
    fn from(err: UsageError) -> Self {
        ArisError::Usage(err)
    }
}

impl From<io::Error> for ArisError {
    fn from(err: io::Error) -> Self {
        ArisError::Io(err)
    }
}

impl From<ArisError> for io::Error {
    fn from(err: ArisError) -> Self {
        match err {
            ArisError::Io(io_err) => io_err,
            ArisError::Lexical(err) => err.into(),
            ArisError::Parse(err) => err.into(),
            ArisError::MissingSymbol(err) => err.into(),
            ArisError::Usage(err) => err.into(),
            other @ ArisError::UnknownArgument { .. } => {
                io::Error::new(io::ErrorKind::NotFound, other)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unknown_argument_display() {
        let err = ArisError::UnknownArgument {
            name: Arc::from("arg9"),
        };
        assert_eq!(err.to_string(), "Unknown argument 'arg9'");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_missing_symbol_display() {
        let err: ArisError = MissingSymbolError {
            symbol: Arc::from("Q"),
        }
        .into();
        assert_eq!(err.to_string(), "Missing symbol 'Q'");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_lexical_error_passes_through() {
        let err: ArisError = LexicalError::UnexpectedEndOfLine {
            line: "P".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Unexpected end of line at line 'P'");
    }

    #[test]
    fn test_syntax_error_is_split() {
        let err: ArisError = SyntaxError::Parse(ParseError::Internal {
            line: "assert".to_string(),
        })
        .into();
        assert!(matches!(err, ArisError::Parse(ParseError::Internal { .. })));
    }

    #[test]
    fn test_io_error_round_trip() {
        let original = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: ArisError = original.into();
        assert!(matches!(err, ArisError::Io(_)));

        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_to_io_error_kinds() {
        let usage: io::Error = ArisError::Usage(UsageError::MissingConclusion).into();
        assert_eq!(usage.kind(), io::ErrorKind::InvalidInput);

        let unknown: io::Error = ArisError::UnknownArgument {
            name: Arc::from("a"),
        }
        .into();
        assert_eq!(unknown.kind(), io::ErrorKind::NotFound);
        assert_eq!(unknown.to_string(), "Unknown argument 'a'");
    }
}
