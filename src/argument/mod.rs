//! Arguments and their evaluation
//!
//! An [`Argument`] is an ordered list of premises with an optional conclusion. Three questions
//! can be asked of it:
//!
//! - [`Argument::is_tautology`]: for a bare formula (one premise, no conclusion), is it true under
//!   every assignment?
//! - [`Argument::is_valid`]: is there no assignment making every premise true and the conclusion
//!   false?
//! - [`Argument::valuate`]: are the premises and the conclusion all true under a given
//!   assignment?
//!
//! Tautology and validity enumerate the full [`TruthTable`] over the variables involved, so
//! their cost doubles with every extra variable.
//!
//! # Examples
//!
//! ```
//! use aris_logic::Argument;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let modus_ponens = Argument::parse("P, ¬(P ∧ ¬Q) ∴ Q")?;
//! assert!(modus_ponens.is_valid()?);
//!
//! let excluded_middle = Argument::parse("(P ∨ ¬P)")?;
//! assert!(excluded_middle.is_tautology()?);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod truth_table;

pub use error::UsageError;
pub use truth_table::TruthTable;

use crate::formula::{
    parse_formula, require_formula, Assignment, Formula, MissingSymbolError, ParseError,
    SyntaxError, TokenCursor,
};
use crate::lexer;
use crate::logging::targets;
use crate::token::Token;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Premises and an optional conclusion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
    premises: Vec<Formula>,
    conclusion: Option<Formula>,
}

impl Argument {
    /// An argument with no premises and no conclusion
    pub fn new() -> Self {
        Self::default()
    }

    /// An argument built from its parts
    pub fn with_parts(premises: Vec<Formula>, conclusion: Option<Formula>) -> Self {
        Argument {
            premises,
            conclusion,
        }
    }

    /// Append a premise
    pub fn add_premise(&mut self, premise: Formula) {
        self.premises.push(premise);
    }

    /// Set or replace the conclusion
    pub fn set_conclusion(&mut self, conclusion: Formula) {
        self.conclusion = Some(conclusion);
    }

    /// The premises, in order
    pub fn premises(&self) -> &[Formula] {
        &self.premises
    }

    /// The conclusion, if any
    pub fn conclusion(&self) -> Option<&Formula> {
        self.conclusion.as_ref()
    }

    /// Parse an argument body such as `P, (P → Q) ∴ Q`
    pub fn parse(input: &str) -> Result<Self, SyntaxError> {
        let tokens = lexer::scan_line(input)?;
        lexer::check_adjacency(input, &tokens)?;
        let mut cursor = TokenCursor::new(&tokens, input);
        Ok(Argument::parse_body(&mut cursor)?)
    }

    /// Parse premises and conclusion from the cursor to the end of the line
    ///
    /// Each formula found becomes a premise. Separators between formulas are consumed; `∴`
    /// introduces the conclusion. A stray `)` is skipped, while any other separator after the
    /// conclusion is rejected.
    pub fn parse_body(cursor: &mut TokenCursor<'_>) -> Result<Self, ParseError> {
        let mut argument = Argument::new();
        while !cursor.is_exhausted() {
            match parse_formula(cursor)? {
                Some(formula) => argument.add_premise(formula),
                None => {
                    let position = cursor.position();
                    let token = cursor.advance()?;
                    if *token != Token::RBracket && argument.conclusion.is_some() {
                        return Err(cursor.unexpected(token, position));
                    }
                    if *token == Token::Therefore {
                        argument.set_conclusion(require_formula(cursor)?);
                    }
                }
            }
        }
        log::trace!(target: targets::PARSER, "Parsed argument {}", argument);
        Ok(argument)
    }

    /// Names of every atomic proposition in the premises and the conclusion
    pub fn collect_variables(&self) -> BTreeSet<Arc<str>> {
        self.premises
            .iter()
            .chain(self.conclusion.iter())
            .flat_map(|formula| formula.collect_variables())
            .collect()
    }

    /// Returns `true` if the single premise is true under every assignment
    ///
    /// A formula without variables has an empty truth table and is vacuously a tautology.
    ///
    /// # Errors
    ///
    /// [`UsageError::NotASingleFormula`] unless the argument has exactly one premise and no
    /// conclusion.
    pub fn is_tautology(&self) -> Result<bool, UsageError> {
        let formula = match (self.premises.as_slice(), &self.conclusion) {
            ([formula], None) => formula,
            (premises, conclusion) => {
                return Err(UsageError::NotASingleFormula {
                    premises: premises.len(),
                    has_conclusion: conclusion.is_some(),
                })
            }
        };

        let table = truth_table_over(std::slice::from_ref(formula));
        for row in table {
            match formula.valuate(&row) {
                Ok(true) => {}
                Ok(false) => {
                    log::debug!(target: targets::TRUTH_TABLE, "{} is falsified", formula);
                    return Ok(false);
                }
                Err(err) => incomplete_row(&err),
            }
        }
        Ok(true)
    }

    /// Returns `true` if no assignment makes every premise true and the conclusion false
    ///
    /// An argument with no premises is valid exactly when its conclusion is a tautology.
    ///
    /// # Errors
    ///
    /// [`UsageError::MissingConclusion`] if the argument has no conclusion.
    pub fn is_valid(&self) -> Result<bool, UsageError> {
        Ok(self.counter_example()?.is_none())
    }

    /// The first truth-table row under which every premise holds and the conclusion fails
    ///
    /// # Errors
    ///
    /// [`UsageError::MissingConclusion`] if the argument has no conclusion.
    pub fn counter_example(&self) -> Result<Option<Assignment>, UsageError> {
        let conclusion = self
            .conclusion
            .as_ref()
            .ok_or(UsageError::MissingConclusion)?;

        let mut formulas = Vec::with_capacity(self.premises.len() + 1);
        formulas.push(conclusion.not());
        formulas.extend(self.premises.iter().cloned());

        for row in truth_table_over(&formulas) {
            if all_hold(&formulas, &row) {
                log::debug!(target: targets::TRUTH_TABLE, "{} has a counter-example", self);
                return Ok(Some(row));
            }
        }
        Ok(None)
    }

    /// Evaluate the argument as a formula under `values`
    ///
    /// Premises are evaluated in order up to the first false one. The conclusion is always
    /// evaluated, so a symbol it is missing is reported even when a premise already failed.
    /// Without a conclusion only the premises count.
    pub fn valuate(&self, values: &Assignment) -> Result<bool, MissingSymbolError> {
        let mut premises = true;
        for premise in &self.premises {
            premises = premise.valuate(values)?;
            if !premises {
                break;
            }
        }
        let conclusion = match &self.conclusion {
            Some(conclusion) => conclusion.valuate(values)?,
            None => true,
        };
        Ok(premises && conclusion)
    }
}

/// A truth table over the variables of every formula in `formulas`
fn truth_table_over(formulas: &[Formula]) -> TruthTable {
    let variables: BTreeSet<Arc<str>> = formulas
        .iter()
        .flat_map(|formula| formula.collect_variables())
        .collect();
    let table = TruthTable::new(variables.into_iter().collect());
    log::debug!(
        target: targets::TRUTH_TABLE,
        "Enumerating {} variables ({:?} rows)",
        table.variables().len(),
        table.row_count()
    );
    table
}

/// Returns `true` if every formula holds under `row`, stopping at the first that does not
fn all_hold(formulas: &[Formula], row: &Assignment) -> bool {
    for formula in formulas {
        match formula.valuate(row) {
            Ok(true) => {}
            Ok(false) => return false,
            Err(err) => {
                incomplete_row(&err);
                return false;
            }
        }
    }
    true
}

/// A truth-table row lacks a symbol the formulas use
///
/// Rows are built from the variables of the very formulas being evaluated, so this is a broken
/// invariant. It is logged and the row refutes nothing.
fn incomplete_row(err: &MissingSymbolError) {
    log::error!(
        target: targets::TRUTH_TABLE,
        "Truth-table row has no value for {}",
        err
    );
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, premise) in self.premises.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", premise)?;
        }
        if let Some(conclusion) = &self.conclusion {
            if !self.premises.is_empty() {
                write!(f, " ")?;
            }
            write!(f, "∴ {}", conclusion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
