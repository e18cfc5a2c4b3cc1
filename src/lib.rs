//! # Aris
//!
//! An interpreter for a small propositional-logic language. A program assigns truth values to
//! atomic propositions, defines arguments (premises and an optional conclusion), and asks
//! whether an argument is a tautology, whether it is valid, or what it valuates to.
//!
//! ```text
//! P := true
//! Q := false
//! argument mp := P, (P → Q) ∴ Q
//! validate mp
//! valuate mp
//! ```
//!
//! ## Running Programs
//!
//! ```
//! use aris_logic::{run_str, InterpreterConfig};
//!
//! # fn main() -> Result<(), aris_logic::ArisError> {
//! let program = "argument lem := (P ∨ ¬P)\nassert lem";
//! let output = run_str(program, Vec::new(), InterpreterConfig::default())?;
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "argument \"(P ∨ ¬P)\" is a tautology\n\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Running a program is two passes: the [`lexer`] tokenizes and checks every line, then the
//! [`interpreter`] executes the statements in order. Any error aborts the run.
//!
//! ## Working with Formulas
//!
//! Formulas can be parsed, built with methods or operators, or written with the [`wff!`]
//! macro:
//!
//! ```
//! use aris_logic::{wff, Argument, Formula};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let p = Formula::atom("P");
//! let q = Formula::atom("Q");
//!
//! let parsed = Formula::parse("(P → Q)")?;
//! assert_eq!(parsed, p.implies(&q));
//! assert_eq!(parsed, wff!("P" -> "Q"));
//! assert_eq!(wff!(p & !q), &p & &!&q);
//!
//! let argument = Argument::with_parts(vec![parsed, p.clone()], Some(q.clone()));
//! assert!(argument.is_valid()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade under the targets in [`logging::targets`]. It
//! never installs a logger; the `aris` binary uses `env_logger`, so `RUST_LOG=debug` shows
//! truth-table sizes and verdicts.

pub mod argument;
pub mod error;
pub mod formula;
pub mod interpreter;
pub mod lexer;
pub mod logging;
pub mod token;

pub use argument::Argument;
pub use error::ArisError;
pub use formula::{Assignment, Formula};
pub use interpreter::Interpreter;
pub use lexer::TokenLine;
pub use token::Token;

pub use aris_logic_macros::wff;

use std::io::{BufRead, Write};

/// Configuration for the interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Write each statement, prefixed by `> `, before executing it
    pub echo: bool,
    /// Write a summary of the recorded results when the run finishes
    pub summary: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            echo: false,
            summary: false,
        }
    }
}

impl InterpreterConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Run a program held in memory, writing its output to `sink`
///
/// Returns the sink once the run finishes.
pub fn run_str<W: Write>(source: &str, sink: W, config: InterpreterConfig) -> Result<W, ArisError> {
    let lines = lexer::tokenize_str(source)?;
    run_lines(&lines, sink, config)
}

/// Run a program read line by line from `reader`, writing its output to `sink`
///
/// The whole input is tokenized before the first statement executes.
///
/// # Examples
///
/// ```
/// use aris_logic::{run_reader, InterpreterConfig};
/// use std::io::Cursor;
///
/// # fn main() -> Result<(), aris_logic::ArisError> {
/// let source = Cursor::new("print \"hello\"\n");
/// let output = run_reader(source, Vec::new(), InterpreterConfig::default())?;
/// assert_eq!(output, b"hello\n");
/// # Ok(())
/// # }
/// ```
pub fn run_reader<R: BufRead, W: Write>(
    reader: R,
    sink: W,
    config: InterpreterConfig,
) -> Result<W, ArisError> {
    let lines = lexer::tokenize_reader(reader)?;
    run_lines(&lines, sink, config)
}

fn run_lines<W: Write>(
    lines: &[TokenLine],
    sink: W,
    config: InterpreterConfig,
) -> Result<W, ArisError> {
    let mut interpreter = Interpreter::with_config(sink, config);
    interpreter.run(lines)?;
    interpreter.finish()
}
