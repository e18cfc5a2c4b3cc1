//! Error types for argument evaluation

use std::fmt;
use std::io;

/// An evaluation requested on an argument whose shape does not support it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// A tautology check needs exactly one premise and no conclusion
    NotASingleFormula {
        /// Number of premises the argument has
        premises: usize,
        /// Whether the argument has a conclusion
        has_conclusion: bool,
    },
    /// A validity check needs a conclusion
    MissingConclusion,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::NotASingleFormula {
                premises,
                has_conclusion,
            } => {
                write!(
                    f,
                    "Tautology checks need exactly one premise and no conclusion, found {} premise{}",
                    premises,
                    if *premises == 1 { "" } else { "s" }
                )?;
                if *has_conclusion {
                    write!(f, " and a conclusion")?;
                }
                Ok(())
            }
            UsageError::MissingConclusion => {
                write!(f, "Validity checks need an argument with a conclusion")
            }
        }
    }
}

impl std::error::Error for UsageError {}

impl From<UsageError> for io::Error {
    fn from(err: UsageError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_display() {
        let err = UsageError::NotASingleFormula {
            premises: 2,
            has_conclusion: true,
        };
        assert_eq!(
            err.to_string(),
            "Tautology checks need exactly one premise and no conclusion, found 2 premises and a conclusion"
        );

        let err = UsageError::NotASingleFormula {
            premises: 1,
            has_conclusion: true,
        };
        assert!(err.to_string().ends_with("found 1 premise and a conclusion"));
    }

    #[test]
    fn test_usage_error_to_io_error() {
        let io_err: io::Error = UsageError::MissingConclusion.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
