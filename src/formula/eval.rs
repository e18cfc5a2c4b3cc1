//! Valuation and variable collection

use super::{Assignment, Formula, MissingSymbolError};
use std::collections::BTreeSet;
use std::sync::Arc;

impl Formula {
    /// Evaluate the formula under `values`
    ///
    /// Connectives short-circuit left to right, so a missing symbol on a side that is never
    /// reached goes unreported.
    ///
    /// # Errors
    ///
    /// Returns [`MissingSymbolError`] naming the first atomic proposition reached that has no
    /// value in `values`.
    pub fn valuate(&self, values: &Assignment) -> Result<bool, MissingSymbolError> {
        match self {
            Formula::Atom(name) => {
                values
                    .get(name)
                    .copied()
                    .ok_or_else(|| MissingSymbolError {
                        symbol: Arc::clone(name),
                    })
            }
            Formula::Negation(inner) => Ok(!inner.valuate(values)?),
            Formula::Conjunction(left, right) => {
                Ok(left.valuate(values)? && right.valuate(values)?)
            }
            Formula::Disjunction(left, right) => {
                Ok(left.valuate(values)? || right.valuate(values)?)
            }
            Formula::Conditional(left, right) => {
                Ok(!left.valuate(values)? || right.valuate(values)?)
            }
        }
    }

    /// Names of every atomic proposition in the formula, harvested through its truthness
    /// conditions
    pub fn collect_variables(&self) -> BTreeSet<Arc<str>> {
        let mut names = BTreeSet::new();
        for condition in self.truthness_conditions() {
            condition.collect_atoms(&mut names);
        }
        names
    }
}
