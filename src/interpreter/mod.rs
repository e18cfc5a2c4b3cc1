//! Statement dispatch over tokenized lines
//!
//! The [`Interpreter`] executes one [`TokenLine`] at a time, dispatching on its leading token:
//!
//! | Line | Effect |
//! |------|--------|
//! | `P := true` | record a value for `P` |
//! | `print "text"` | write `text`, or an empty line for a bare `print` |
//! | `argument name := ...` | define an argument |
//! | `assert name` | check that the argument's single formula is a tautology |
//! | `validate name` | check that the argument is valid |
//! | `valuate name` | evaluate the argument under the recorded values |
//!
//! Results are written to a caller-supplied sink and recorded in tables that stay readable
//! after the run. The first error aborts the run.
//!
//! # Examples
//!
//! ```
//! use aris_logic::interpreter::Interpreter;
//! use aris_logic::lexer::tokenize_str;
//!
//! # fn main() -> Result<(), aris_logic::ArisError> {
//! let lines = tokenize_str("argument a := P, (P → Q) ∴ Q\nvalidate a")?;
//! let mut interpreter = Interpreter::new(Vec::new());
//! interpreter.run(&lines)?;
//! assert_eq!(interpreter.validations()["a"], true);
//!
//! let output = interpreter.finish()?;
//! assert_eq!(String::from_utf8(output).unwrap(), "argument \"P, (P → Q) ∴ Q\" is valid\n");
//! # Ok(())
//! # }
//! ```

mod summary;

pub use summary::{Summary, Tally};

use crate::argument::Argument;
use crate::error::ArisError;
use crate::formula::{Assignment, ParseError, TokenCursor};
use crate::lexer::TokenLine;
use crate::logging::targets;
use crate::token::Token;
use crate::InterpreterConfig;
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

/// Executes statements and records their results
pub struct Interpreter<W: Write> {
    sink: W,
    config: InterpreterConfig,
    statements: usize,
    values: Assignment,
    arguments: HashMap<Arc<str>, Argument>,
    assertions: HashMap<Arc<str>, bool>,
    validations: HashMap<Arc<str>, bool>,
    valuations: HashMap<Arc<str>, bool>,
}

impl<W: Write> Interpreter<W> {
    /// An interpreter writing to `sink` with the default configuration
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, InterpreterConfig::default())
    }

    /// An interpreter writing to `sink`
    pub fn with_config(sink: W, config: InterpreterConfig) -> Self {
        Interpreter {
            sink,
            config,
            statements: 0,
            values: Assignment::new(),
            arguments: HashMap::new(),
            assertions: HashMap::new(),
            validations: HashMap::new(),
            valuations: HashMap::new(),
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Values recorded by assignments
    pub fn values(&self) -> &Assignment {
        &self.values
    }

    /// Arguments defined so far
    pub fn arguments(&self) -> &HashMap<Arc<str>, Argument> {
        &self.arguments
    }

    /// Tautology results, by argument name
    pub fn assertions(&self) -> &HashMap<Arc<str>, bool> {
        &self.assertions
    }

    /// Validity results, by argument name
    pub fn validations(&self) -> &HashMap<Arc<str>, bool> {
        &self.validations
    }

    /// Valuation results, by argument name
    pub fn valuations(&self) -> &HashMap<Arc<str>, bool> {
        &self.valuations
    }

    /// Counts of everything recorded so far
    pub fn summary(&self) -> Summary {
        Summary {
            statements: self.statements,
            values: self.values.len(),
            arguments: self.arguments.len(),
            assertions: Tally::of(&self.assertions),
            validations: Tally::of(&self.validations),
            valuations: Tally::of(&self.valuations),
        }
    }

    /// Execute every line in order, stopping at the first error
    pub fn run(&mut self, lines: &[TokenLine]) -> Result<(), ArisError> {
        for line in lines {
            self.execute(line)?;
        }
        Ok(())
    }

    /// Execute one statement
    ///
    /// # Errors
    ///
    /// - [`ArisError::UnknownArgument`] when a command names an undefined argument
    /// - [`ArisError::MissingSymbol`] when `valuate` reaches an unassigned proposition
    /// - [`ArisError::Parse`] when an argument body does not parse, or the line is shorter
    ///   than its statement requires
    /// - [`ArisError::Io`] when writing to the sink fails
    pub fn execute(&mut self, line: &TokenLine) -> Result<(), ArisError> {
        log::trace!(target: targets::INTERPRETER, "Line {}: {}", line.number, line);
        if self.config.echo {
            writeln!(self.sink, "> {}", line)?;
        }

        let mut cursor = TokenCursor::from_line(line);
        let leading = next_token(&mut cursor, line)?;
        match leading {
            Token::Print => match cursor.peek() {
                Some(text) => writeln!(self.sink, "{}", text)?,
                None => writeln!(self.sink)?,
            },
            Token::Atom(name) => {
                expect_token(&mut cursor, line, &Token::Assign)?;
                let literal = next_token(&mut cursor, line)?;
                self.values.insert(Arc::clone(name), *literal == Token::True);
            }
            Token::Argument => {
                let name = identifier(&mut cursor, line)?;
                expect_token(&mut cursor, line, &Token::Assign)?;
                let argument = Argument::parse_body(&mut cursor)?;
                log::debug!(target: targets::INTERPRETER, "Defined {} := {}", name, argument);
                self.arguments.insert(name, argument);
            }
            Token::Assert => {
                let name = identifier(&mut cursor, line)?;
                let argument = self.argument(&name)?;
                let result = argument.is_tautology()?;
                let formula = argument
                    .premises()
                    .first()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                self.assertions.insert(name, result);
                if result {
                    writeln!(self.sink, "argument \"{}\" is a tautology\n", formula)?;
                } else {
                    writeln!(self.sink, "argument \"{}\" is not a tautology\n", formula)?;
                }
            }
            Token::Validate => {
                let name = identifier(&mut cursor, line)?;
                let argument = self.argument(&name)?;
                let result = argument.is_valid()?;
                let rendering = argument.to_string();
                self.validations.insert(name, result);
                if result {
                    writeln!(self.sink, "argument \"{}\" is valid", rendering)?;
                } else {
                    writeln!(self.sink, "argument \"{}\" is invalid", rendering)?;
                }
            }
            Token::Valuate => {
                let name = identifier(&mut cursor, line)?;
                let argument = self.argument(&name)?;
                let result = argument.valuate(&self.values)?;
                let rendering = argument.to_string();
                self.valuations.insert(name, result);
                writeln!(self.sink, "argument \"{}\" is {}\n", rendering, result)?;
            }
            other => return Err(cursor.unexpected(other, 0).into()),
        }

        self.statements += 1;
        Ok(())
    }

    /// Write the summary if configured, flush, and hand the sink back
    pub fn finish(mut self) -> Result<W, ArisError> {
        let summary = self.summary();
        log::debug!(
            target: targets::INTERPRETER,
            "Finished after {} statements",
            summary.statements
        );
        if self.config.summary {
            writeln!(self.sink, "{}", summary)?;
        }
        self.sink.flush()?;
        Ok(self.sink)
    }

    fn argument(&self, name: &Arc<str>) -> Result<&Argument, ArisError> {
        self.arguments
            .get(name)
            .ok_or_else(|| ArisError::UnknownArgument {
                name: Arc::clone(name),
            })
    }
}

/// The statement ran out of tokens before its grammar was satisfied
fn truncated(line: &TokenLine) -> ParseError {
    ParseError::Internal {
        line: line.to_string(),
    }
}

fn next_token<'a>(cursor: &mut TokenCursor<'a>, line: &TokenLine) -> Result<&'a Token, ParseError> {
    cursor.advance().map_err(|_| truncated(line))
}

fn expect_token(
    cursor: &mut TokenCursor<'_>,
    line: &TokenLine,
    expected: &Token,
) -> Result<(), ParseError> {
    if cursor.eat(expected) {
        return Ok(());
    }
    let position = cursor.position();
    let found = next_token(cursor, line)?;
    Err(cursor.unexpected(found, position))
}

fn identifier(cursor: &mut TokenCursor<'_>, line: &TokenLine) -> Result<Arc<str>, ParseError> {
    let position = cursor.position();
    match next_token(cursor, line)? {
        Token::Identifier(name) => Ok(Arc::clone(name)),
        other => Err(cursor.unexpected(other, position)),
    }
}
