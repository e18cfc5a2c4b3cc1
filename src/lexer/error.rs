//! Error types for lexical analysis

use std::fmt;
use std::io;

/// Errors raised while tokenizing or validating a single line
///
/// Every variant carries the text of the offending line. Character positions are 0-based
/// indices into the line with its comment removed; adjacency errors report the 1-based index
/// of the token that breaks the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// A character that cannot appear where it was found
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Position of the character in the line
        position: usize,
        /// The line being tokenized
        line: String,
    },
    /// A token that cannot appear where it was found
    UnexpectedSymbol {
        /// Rendering of the offending token
        symbol: String,
        /// Position of the token in the line
        position: usize,
        /// The line being tokenized
        line: String,
    },
    /// The line ended where another token was required
    UnexpectedEndOfLine {
        /// The line being tokenized
        line: String,
    },
}

impl LexicalError {
    /// The text of the line that failed to tokenize
    pub fn line(&self) -> &str {
        match self {
            LexicalError::UnexpectedCharacter { line, .. }
            | LexicalError::UnexpectedSymbol { line, .. }
            | LexicalError::UnexpectedEndOfLine { line } => line,
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexicalError::UnexpectedCharacter {
                character,
                position,
                line,
            } => write!(
                f,
                "Unexpected character '{}' at position {} of line '{}'",
                character, position, line
            ),
            LexicalError::UnexpectedSymbol {
                symbol,
                position,
                line,
            } => write!(
                f,
                "Unexpected symbol '{}' at position {} of line '{}'",
                symbol, position, line
            ),
            LexicalError::UnexpectedEndOfLine { line } => {
                write!(f, "Unexpected end of line at line '{}'", line)
            }
        }
    }
}

impl std::error::Error for LexicalError {}

impl From<LexicalError> for io::Error {
    fn from(err: LexicalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_character_display() {
        let err = LexicalError::UnexpectedCharacter {
            character: '*',
            position: 1,
            line: "P* := true".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected character '*' at position 1 of line 'P* := true'"
        );
        assert_eq!(err.line(), "P* := true");
    }

    #[test]
    fn test_end_of_line_display() {
        let err = LexicalError::UnexpectedEndOfLine {
            line: "P".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected end of line at line 'P'");
    }

    #[test]
    fn test_lexical_error_to_io_error() {
        let err = LexicalError::UnexpectedSymbol {
            symbol: "Q".to_string(),
            position: 1,
            line: "P Q".to_string(),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
