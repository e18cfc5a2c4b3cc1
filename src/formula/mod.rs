//! Well-formed formulas of propositional logic
//!
//! A [`Formula`] is an immutable tree of atomic propositions joined by negation, conjunction,
//! disjunction and the material conditional. Formulas can be built three ways:
//!
//! 1. Method API: `p.and(&q).implies(&r)`
//! 2. Operator overloading: `!&p | &q`
//! 3. The `wff!` macro: `wff!("P" & "Q" -> "R")`
//!
//! or parsed from the surface syntax of the language with [`Formula::parse`].
//!
//! Rendering is canonical and fully parenthesized, so a rendered formula always parses back
//! into an equal tree.
//!
//! # Examples
//!
//! ```
//! use aris_logic::Formula;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let formula = Formula::parse("¬(P ∧ ¬Q)")?;
//! assert_eq!(formula.to_string(), "¬(P ∧ ¬Q)");
//!
//! let mut values = HashMap::new();
//! values.insert(Arc::from("P"), true);
//! values.insert(Arc::from("Q"), false);
//! assert_eq!(formula.valuate(&values)?, false);
//! # Ok(())
//! # }
//! ```

mod condition;
mod display;
pub mod error;
mod eval;
mod operators;
pub mod parser;

pub use condition::Condition;
pub use error::{MissingSymbolError, ParseError, SyntaxError};
pub use parser::{parse_formula, require_formula, TokenCursor};

use std::collections::HashMap;
use std::sync::Arc;

/// Values of atomic propositions, keyed by name
pub type Assignment = HashMap<Arc<str>, bool>;

/// A well-formed formula
///
/// Children are reference counted, so cloning a formula or sharing a subformula between
/// several parents is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// An atomic proposition such as `P`
    Atom(Arc<str>),
    /// `¬f`
    Negation(Arc<Formula>),
    /// `(l ∧ r)`
    Conjunction(Arc<Formula>, Arc<Formula>),
    /// `(l ∨ r)`
    Disjunction(Arc<Formula>, Arc<Formula>),
    /// `(antecedent → consequent)`
    Conditional(Arc<Formula>, Arc<Formula>),
}

impl Formula {
    /// Create an atomic proposition
    pub fn atom(name: &str) -> Self {
        Formula::Atom(Arc::from(name))
    }

    /// Wrap `formula` in a negation
    pub fn negation(formula: Formula) -> Self {
        Formula::Negation(Arc::new(formula))
    }

    /// Join two formulas with `∧`
    pub fn conjunction(left: Formula, right: Formula) -> Self {
        Formula::Conjunction(Arc::new(left), Arc::new(right))
    }

    /// Join two formulas with `∨`
    pub fn disjunction(left: Formula, right: Formula) -> Self {
        Formula::Disjunction(Arc::new(left), Arc::new(right))
    }

    /// Join two formulas with `→`
    pub fn conditional(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Conditional(Arc::new(antecedent), Arc::new(consequent))
    }

    /// Returns `true` for an atomic proposition
    pub fn is_atom(&self) -> bool {
        matches!(self, Formula::Atom(_))
    }

    /// Number of connectives in the formula
    pub fn connective_count(&self) -> usize {
        match self {
            Formula::Atom(_) => 0,
            Formula::Negation(inner) => 1 + inner.connective_count(),
            Formula::Conjunction(left, right)
            | Formula::Disjunction(left, right)
            | Formula::Conditional(left, right) => {
                1 + left.connective_count() + right.connective_count()
            }
        }
    }
}
