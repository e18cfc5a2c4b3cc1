//! Operator overloading and builder methods for formulas

use super::Formula;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

impl Formula {
    /// Negation of this formula
    pub fn not(&self) -> Formula {
        Formula::Negation(Arc::new(self.clone()))
    }

    /// Conjunction of this formula and `other`
    pub fn and(&self, other: &Formula) -> Formula {
        Formula::Conjunction(Arc::new(self.clone()), Arc::new(other.clone()))
    }

    /// Disjunction of this formula and `other`
    pub fn or(&self, other: &Formula) -> Formula {
        Formula::Disjunction(Arc::new(self.clone()), Arc::new(other.clone()))
    }

    /// Conditional with this formula as antecedent and `other` as consequent
    pub fn implies(&self, other: &Formula) -> Formula {
        Formula::Conditional(Arc::new(self.clone()), Arc::new(other.clone()))
    }
}

/// Conjunction for references: `&p & &q`
///
/// # Examples
///
/// ```
/// use aris_logic::Formula;
///
/// let p = Formula::atom("P");
/// let q = Formula::atom("Q");
/// assert_eq!((&p & &q).to_string(), "(P ∧ Q)");
/// ```
impl BitAnd for &Formula {
    type Output = Formula;

    fn bitand(self, rhs: &Formula) -> Formula {
        self.and(rhs)
    }
}

/// Conjunction: `p & q`
impl BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Formula) -> Formula {
        Formula::conjunction(self, rhs)
    }
}

/// Disjunction for references: `&p | &q`
///
/// # Examples
///
/// ```
/// use aris_logic::Formula;
///
/// let p = Formula::atom("P");
/// let q = Formula::atom("Q");
/// assert_eq!((&p | &q).to_string(), "(P ∨ Q)");
/// ```
impl BitOr for &Formula {
    type Output = Formula;

    fn bitor(self, rhs: &Formula) -> Formula {
        self.or(rhs)
    }
}

/// Disjunction: `p | q`
impl BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Formula) -> Formula {
        Formula::disjunction(self, rhs)
    }
}

/// Negation for references: `!&p`
impl Not for &Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::not(self)
    }
}

/// Negation: `!p`
impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::negation(self)
    }
}
