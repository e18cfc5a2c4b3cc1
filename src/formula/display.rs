//! Canonical rendering of formulas

use super::Formula;
use std::fmt;

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(name) => write!(f, "{}", name),
            Formula::Negation(inner) => write!(f, "¬{}", inner),
            Formula::Conjunction(left, right) => write!(f, "({} ∧ {})", left, right),
            Formula::Disjunction(left, right) => write!(f, "({} ∨ {})", left, right),
            Formula::Conditional(left, right) => write!(f, "({} → {})", left, right),
        }
    }
}
